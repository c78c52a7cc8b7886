mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod registry;
mod report;

use clap::Parser;
use cli::{AdviseArgs, Cli, Commands};
use config::Config;
use datasources::WeatherSource;
use error::{CropAdvisorError, Result};
use logic::AdvisoryService;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        if let CropAdvisorError::NotFound(_) = e {
            eprintln!("Available crops: {}", registry::keys().join(", "));
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_override = cli.config.clone();

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            Ok(())
        }
        Some(Commands::Crops) => {
            print!("{}", report::render_crops(registry::list_all()));
            Ok(())
        }
        Some(Commands::Check) => check(Config::load(config_override)?).await,
        Some(Commands::Advise(args)) => advise(Config::load(config_override)?, args).await,
        None => advise(Config::load(config_override)?, AdviseArgs::default()).await,
    }
}

async fn advise(config: Config, args: AdviseArgs) -> Result<()> {
    let location = args
        .location
        .or_else(|| config.defaults.location.clone())
        .unwrap_or_default();
    let crop = args
        .crop
        .or_else(|| config.defaults.crop.clone())
        .unwrap_or_default();

    let service = build_service(&config)?;
    let report = service.analyze(&location, &crop, args.month).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report::render_report(&report));
    }

    Ok(())
}

async fn check(config: Config) -> Result<()> {
    config.validate()?;
    println!("Config: OK (provider: {})", config.weather.provider.as_str());

    registry::validate()?;
    println!("Crop registry: OK ({} crops)", registry::list_all().len());

    let service = build_service(&config)?;
    let rules: Vec<_> = service
        .engine()
        .list_rules()
        .into_iter()
        .map(|(id, name)| format!("{} ({})", name, id))
        .collect();
    println!("Rules: {}", rules.join(", "));

    let source = service.source();
    match source.test_connection().await {
        Ok(true) => println!("{}: OK", source.name()),
        Ok(false) => {
            return Err(CropAdvisorError::UpstreamUnavailable(format!(
                "{} rejected the request",
                source.name()
            )))
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

fn build_service(config: &Config) -> Result<AdvisoryService> {
    let source = WeatherSource::from_config(config)?;
    Ok(AdvisoryService::new(
        source,
        Duration::from_secs(config.weather.timeout_secs),
    ))
}
