//! Ledgerview main entry point

use anyhow::{bail, Context};
use clap::Parser;
use ledgerview_api::start_server;
use ledgerview_config::error::ConfigErrorSeverity;
use ledgerview_config::Config;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "ledgerview")]
#[command(author = "Ledgerview Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A paginated, searchable web view over a CSV transaction ledger", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Ledger CSV file, overrides data.path/data.file from the config
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Print a default configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    match Config::load(path) {
        Ok(config) => Ok(config),
        Err(e) if e.severity() == ConfigErrorSeverity::Warning => {
            log::warn!("{}, using defaults", e);
            Ok(Config::default())
        }
        Err(e) => {
            eprintln!("{}", e.to_details());
            bail!("invalid configuration in {}", path.display())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    // Logger is not up yet, so peek at the level before loading for real
    let level = Config::load(&args.config)
        .map(|c| c.logging.level)
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = load_config(&args.config)?;
    if let Some(data) = args.data.as_deref() {
        config = config.with_data_file(data);
    }

    log::info!("Config loaded: ledger file={}", config.data_file().display());
    if !config.data_file().exists() {
        log::warn!(
            "Ledger file not found: {} (requests will fail until it exists)",
            config.data_file().display()
        );
    }

    let rt = Runtime::new().context("failed to start tokio runtime")?;
    rt.block_on(start_server(config)).context("server error")?;

    Ok(())
}
