mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable holding the YouTube Data API key
pub const YOUTUBE_API_KEY_ENV: &str = "YOUTUBE_API_KEY";
/// Environment variable holding the Contentful management token
pub const CONTENTFUL_TOKEN_ENV: &str = "CONTENTFUL_MANAGEMENT_API_KEY";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./videoimport.toml",
        "~/.config/videoimport/config.toml",
        "/etc/videoimport/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    let mut config = Config::default();
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Replace credentials with the values from the environment, when set.
///
/// Credentials normally live in `.env`, which `main` loads before this runs.
pub fn apply_env_overrides(config: &mut Config) {
    if let Some(key) = non_empty_env(YOUTUBE_API_KEY_ENV) {
        config.youtube.api_key = key;
    }
    if let Some(token) = non_empty_env(CONTENTFUL_TOKEN_ENV) {
        config.contentful.access_token = token;
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.input.url_column.trim().is_empty() {
        anyhow::bail!("input.url_column cannot be empty");
    }

    if config.youtube.base_url.trim().is_empty() {
        anyhow::bail!("youtube.base_url cannot be empty");
    }

    let contentful = &config.contentful;
    for (name, value) in [
        ("space_id", &contentful.space_id),
        ("environment_id", &contentful.environment_id),
        ("content_type", &contentful.content_type),
        ("locale", &contentful.locale),
        ("base_url", &contentful.base_url),
    ] {
        if value.trim().is_empty() {
            anyhow::bail!("contentful.{} cannot be empty", name);
        }
    }

    Ok(())
}

/// Check that the credentials needed for an import are present.
///
/// The YouTube key is always needed; the Contentful token only when records
/// will actually be published.
pub fn require_credentials(config: &Config, publish: bool) -> Result<()> {
    if config.youtube.api_key.is_empty() {
        anyhow::bail!(
            "No YouTube API key configured (set youtube.api_key or {})",
            YOUTUBE_API_KEY_ENV
        );
    }

    if publish && config.contentful.access_token.is_empty() {
        anyhow::bail!(
            "No Contentful management token configured (set contentful.access_token or {})",
            CONTENTFUL_TOKEN_ENV
        );
    }

    Ok(())
}
