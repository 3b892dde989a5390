//! logkv CLI
//!
//! Command-line interface for operating on a logkv log file.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use logkv::{Config, Store};

/// logkv CLI
#[derive(Parser, Debug)]
#[command(name = "logkv-cli")]
#[command(about = "CLI for the logkv key-value store")]
#[command(version)]
struct Args {
    /// Path of the backing log file
    #[arg(short, long, default_value = "./logkv.log")]
    log_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder().log_path(&args.log_path).build();

    // Open the store; any IO or decode error aborts startup
    let mut store = match Store::open_config(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to open store at {}: {}", args.log_path.display(), e);
            process::exit(1);
        }
    };

    let result = match args.command {
        Commands::Get { key } => {
            match store.get(&key) {
                Some(value) => println!("{value}"),
                None => println!("(nil)"),
            }
            Ok(())
        }
        Commands::Set { key, value } => store.set(&key, &value),
        Commands::Del { key } => store.delete(&key),
    };

    if let Err(e) = result {
        tracing::error!("command failed: {}", e);
        process::exit(1);
    }
}
