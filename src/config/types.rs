use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub youtube: YoutubeConfig,

    #[serde(default)]
    pub contentful: ContentfulConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Header of the CSV column holding the video URL
    #[serde(default = "default_url_column")]
    pub url_column: String,
}

fn default_url_column() -> String {
    "youtubeUrl".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            url_column: default_url_column(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YoutubeConfig {
    /// YouTube Data API key (overridden by `YOUTUBE_API_KEY`)
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the Data API, without trailing slash
    #[serde(default = "default_youtube_base_url")]
    pub base_url: String,
}

fn default_youtube_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_youtube_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentfulConfig {
    /// Content Management API token (overridden by `CONTENTFUL_MANAGEMENT_API_KEY`)
    #[serde(default)]
    pub access_token: String,

    #[serde(default = "default_space_id")]
    pub space_id: String,

    #[serde(default = "default_environment_id")]
    pub environment_id: String,

    /// Content type of the created entries
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Locale every field value is stored under
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_contentful_base_url")]
    pub base_url: String,
}

fn default_space_id() -> String {
    "erbmau6qmrq2".to_string()
}
fn default_environment_id() -> String {
    "master".to_string()
}
fn default_content_type() -> String {
    "video".to_string()
}
fn default_locale() -> String {
    "en-US".to_string()
}
fn default_contentful_base_url() -> String {
    "https://api.contentful.com".to_string()
}

impl Default for ContentfulConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            space_id: default_space_id(),
            environment_id: default_environment_id(),
            content_type: default_content_type(),
            locale: default_locale(),
            base_url: default_contentful_base_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// What to do with a row whose URL or duration cannot be parsed
    #[serde(default)]
    pub on_invalid: InvalidPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidPolicy {
    /// Stop the whole run on the first bad row
    #[default]
    Abort,
    /// Log the bad row, count it as rejected, and keep going
    Skip,
}

impl std::fmt::Display for InvalidPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidPolicy::Abort => write!(f, "abort"),
            InvalidPolicy::Skip => write!(f, "skip"),
        }
    }
}
