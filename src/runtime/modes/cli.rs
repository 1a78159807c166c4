//! CLI mode
//!
//! One-shot commands that talk to the configured store directly.

use colored::Colorize;

use crate::cli::{CliCommands, ConfigCommands};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::runtime::build_service;

const DEFAULT_SAMPLE_PATH: &str = "config.example.toml";

pub async fn run_cli(command: CliCommands, config: &AppConfig) -> Result<()> {
    match command {
        CliCommands::Shorten { url } => shorten(&url, config).await,
        CliCommands::Resolve { short_url } => resolve(&short_url, config).await,
        CliCommands::Config {
            action: ConfigCommands::Generate { output_path },
        } => generate_config(output_path),
    }
}

async fn shorten(url: &str, config: &AppConfig) -> Result<()> {
    let service = build_service(config).await?;
    let result = service.shorten(url).await?;
    let link = config.shortener.short_link(&result.record.short_url);

    if result.created {
        println!(
            "{} Created short url: {} -> {}",
            "✓".bold().green(),
            link.cyan(),
            result.record.sanitized_url.blue().underline()
        );
    } else {
        println!(
            "{} Already shortened: {} -> {}",
            "ℹ".bold().blue(),
            link.cyan(),
            result.record.sanitized_url.blue().underline()
        );
    }

    Ok(())
}

async fn resolve(short_url: &str, config: &AppConfig) -> Result<()> {
    let service = build_service(config).await?;
    let record = service.resolve(short_url).await?;

    println!(
        "{} {} -> {} (submitted as {}, created {})",
        "✓".bold().green(),
        record.short_url.cyan(),
        record.sanitized_url.blue().underline(),
        record.original_url.magenta(),
        record
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .yellow()
    );

    Ok(())
}

fn generate_config(output_path: Option<String>) -> Result<()> {
    let path = output_path.unwrap_or_else(|| DEFAULT_SAMPLE_PATH.to_string());
    AppConfig::default().save_to_file(&path)?;
    println!("{} Sample configuration written to {}", "✓".bold().green(), path.cyan());
    Ok(())
}
