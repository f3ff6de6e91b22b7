use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use peerprofile_core::config::Config;
use peerprofile_core::logging::{init_logging_with_config, LogConfig, LogLevel};
use peerprofile_core::{InitStatus, MemoryKvEngine, ProfileStore};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "peerprofile")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Set the log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Enable JSON formatted logging
    #[arg(long)]
    json_logs: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full store lifecycle against the in-memory engine
    Smoke {
        /// Profile key to exercise
        #[arg(default_value = "device/alpha")]
        key: String,

        /// Profile value to store
        #[arg(default_value = "hello from peerprofile")]
        value: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.log_level.parse::<LogLevel>().unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', using 'info'", args.log_level);
        LogLevel::Info
    });

    let log_config = LogConfig::new(log_level).json_format(args.json_logs);
    init_logging_with_config(log_config)?;
    peerprofile_core::metrics::init_metrics();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    match args.command {
        Some(Command::Smoke { key, value }) => run_smoke(&config, &key, &value),
        None => {
            info!("No command specified. Use --help for usage information.");
            Ok(())
        }
    }
}

/// Drive one store through its whole lifecycle and print a summary
fn run_smoke(config: &Config, key: &str, value: &str) -> Result<()> {
    let engine = Arc::new(MemoryKvEngine::new());
    let store = ProfileStore::new(
        config.identity.app_id.clone(),
        config.identity.store_id.clone(),
        engine,
    );
    store.set_options(config.store.clone());
    store.register_init_callback(|| info!("store init completed"));

    store.init();
    if store.get_init_status() != InitStatus::InitSucceeded {
        anyhow::bail!("store init failed");
    }

    store.put_profile(key, value)?;
    let roundtrip = store.get_profile(key)?;

    let batch_keys = vec!["device/beta".to_string(), "device/gamma".to_string()];
    let batch_values = vec!["42".to_string(), "43".to_string()];
    store.put_profile_batch(&batch_keys, &batch_values)?;

    store.delete_profile(key)?;

    let summary = serde_json::json!({
        "status": "ok",
        "app_id": config.identity.app_id,
        "store_id": config.identity.store_id,
        "roundtrip": roundtrip,
        "batch_entries": batch_keys.len(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
