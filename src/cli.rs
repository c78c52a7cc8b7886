use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropadvisor",
    version,
    about = "Weather-driven crop advisories"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch weather and print advisories for a crop (default)
    Advise(AdviseArgs),
    /// List available crops and their tolerances
    Crops,
    /// Validate config, crop table and weather source
    Check,
    /// Interactive setup
    Init,
}

#[derive(Args, Default)]
pub struct AdviseArgs {
    /// City or place name, e.g. "Pune" or "London, GB"
    #[arg(short, long)]
    pub location: Option<String>,

    /// Crop key or name (see `cropadvisor crops`)
    #[arg(short = 'C', long)]
    pub crop: Option<String>,

    /// Calendar month 1-12 (defaults to the current month)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
