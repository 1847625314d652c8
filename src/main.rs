mod cli;

use videoimport::{
    config::{self, Config},
    input,
    metadata::{MetadataProvider, YoutubeProvider},
    pipeline::Importer,
    publish::{ContentfulPublisher, Publisher},
};
use videoimport_parser::normalize;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use std::sync::Arc;

fn build_importer(config: &Config) -> Importer {
    let provider: Arc<dyn MetadataProvider> = Arc::new(YoutubeProvider::new(&config.youtube));
    let publisher: Arc<dyn Publisher> = Arc::new(ContentfulPublisher::new(&config.contentful));
    Importer::new(config, provider, publisher)
}

fn read_input(input: &Path, config: &Config) -> Result<Vec<videoimport_common::InputRow>> {
    let rows = input::read_rows(input, &config.input.url_column)?;
    tracing::info!("Read {} rows from {:?}", rows.len(), input);
    Ok(rows)
}

async fn run_import(input: &Path, config: Config, dry_run: bool) -> Result<()> {
    config::require_credentials(&config, !dry_run)?;

    let rows = read_input(input, &config)?;
    let importer = build_importer(&config);

    if dry_run {
        let prepared = importer.prepare(&rows).await?;
        println!("{}", serde_json::to_string_pretty(&prepared.records)?);
        println!(
            "\n[DRY RUN] Would publish {} entries ({} skipped, {} rejected)",
            prepared.records.len(),
            prepared.skipped,
            prepared.rejected
        );
        return Ok(());
    }

    let summary = importer.run(&rows).await?;
    println!("Import complete: {}", summary);

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Credentials usually come from a .env file next to the input
    dotenv::dotenv().ok();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "videoimport=debug,videoimport_parser=debug".to_string()
        } else {
            "videoimport=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run { input, dry_run } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_import(&input, config, dry_run))
        }
        Commands::Ids { input } => print_ids(&input, cli.config.as_deref()),
        Commands::Normalize { durations } => normalize_durations(&durations),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("videoimport {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn print_ids(input: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let rows = read_input(input, &config)?;

    let (ids, rejected) = build_importer(&config).collect_ids(&rows)?;
    for id in &ids {
        println!("{}", id);
    }
    if rejected > 0 {
        eprintln!("{} rows rejected", rejected);
    }

    Ok(())
}

fn normalize_durations(durations: &[String]) -> Result<()> {
    for encoded in durations {
        let length =
            normalize(encoded).with_context(|| format!("Cannot normalize {:?}", encoded))?;
        println!("{}", length);
    }
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, checking default locations");
            config::load_config_or_default(None)?
        }
    };

    let set = |value: &str| if value.is_empty() { "missing" } else { "set" };
    println!("  URL column: {}", config.input.url_column);
    println!("  YouTube API: {}", config.youtube.base_url);
    println!("  YouTube key: {}", set(&config.youtube.api_key));
    println!(
        "  Contentful: space {} / environment {} / content type {} / locale {}",
        config.contentful.space_id,
        config.contentful.environment_id,
        config.contentful.content_type,
        config.contentful.locale
    );
    println!("  Contentful token: {}", set(&config.contentful.access_token));
    println!("  On invalid rows: {}", config.pipeline.on_invalid);

    Ok(())
}
