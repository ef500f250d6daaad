use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use stardo::config::Config;
use stardo::logger::{self, Logger};
use stardo::ui;

/// A terminal to-do list with a starry night theme
#[derive(Debug, Parser)]
#[command(name = "stardo", version, about)]
struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    if let Some(path) = logger::init(&config.logging)? {
        log::info!("Logging to {}", path.display());
    }

    ui::run_app(&config, Logger::new()).await
}
