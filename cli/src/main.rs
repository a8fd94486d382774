//! CLI entrypoint for school-meal
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use meal_application::{LookupMealsUseCase, LookupProgressNotifier, NoProgress};
use meal_domain::{MealDate, OutputFormat};
use meal_infrastructure::{ConfigLoader, NeisMealClient, NeisXmlParser};
use meal_presentation::{Cli, ConsoleFormatter, OutputConfig, SpinnerProgress};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        println!();
        println!("{}", config.to_toml().context("Failed to render configuration")?);
        return Ok(ExitCode::SUCCESS);
    }

    let output = OutputConfig {
        format: config.output.format,
        color: config.output.color,
        show_progress: config.output.show_progress,
    }
    .with_cli_overrides(&cli);

    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let mut client_config = config.neis.to_client_config();
    if cli.direct {
        client_config = client_config.without_relay();
    }
    let client = Arc::new(NeisMealClient::new(client_config)?);
    let use_case = LookupMealsUseCase::new(client, NeisXmlParser::new());

    // No date argument means today; an explicit empty one is rejected by the use case
    let date_input = cli
        .date
        .clone()
        .unwrap_or_else(|| MealDate::today().to_string());
    info!("Starting meal lookup for {:?}", date_input);

    let progress: Box<dyn LookupProgressNotifier> = if output.show_progress {
        Box::new(SpinnerProgress::new())
    } else {
        Box::new(NoProgress)
    };

    match use_case
        .execute_with_progress(&date_input, progress.as_ref())
        .await
    {
        Ok(lookup) => {
            let rendered = match output.format {
                OutputFormat::Text => ConsoleFormatter::format(&lookup),
                OutputFormat::Json => ConsoleFormatter::format_json(&lookup),
            };
            println!("{}", rendered);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Meal lookup failed: {}", e);
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}
