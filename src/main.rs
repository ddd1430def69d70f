//! storeloc CLI - Inspect and configure store locations

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storeloc::config::{self, StoreConfig};
use storeloc::{ui, StoreKind, StoreLocation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "storeloc")]
#[command(version)]
#[command(about = "Describe where a persistence layer keeps its data")]
#[command(long_about = r#"
A store location is one of:
  sqlite:<dir>   SQLite database store in <dir>
  binary:<dir>   binary store in <dir>
  memory         in-memory store

Example usage:
  storeloc describe sqlite:/var/lib/app
  storeloc init --location binary:./data
  storeloc show --json
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a store location
    Describe {
        /// Store locator (sqlite:<dir>, binary:<dir>, memory)
        locator: StoreLocation,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the supported store kinds
    Kinds {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write a config file with a store location
    Init {
        /// Store locator to record
        #[arg(short, long)]
        location: StoreLocation,

        /// Path to the config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the store location resolved from a config file
    Show {
        /// Path to the config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Store locator that takes precedence over the config
        #[arg(short, long)]
        location: Option<StoreLocation>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(err) = run(cli.command) {
        ui::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Describe { locator, json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&ui::describe_json(&locator))?);
            } else {
                ui::describe(&locator);
            }
        }

        Commands::Kinds { json } => {
            if json {
                let kinds: Vec<_> = StoreKind::all()
                    .iter()
                    .map(|kind| {
                        serde_json::json!({
                            "kind": kind,
                            "type": kind.type_identifier(),
                            "persistent": kind.is_persistent(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&kinds)?);
            } else {
                ui::header("Store kinds");
                for kind in StoreKind::all() {
                    ui::field(kind.as_str(), kind.type_identifier());
                }
            }
        }

        Commands::Init { location, config: config_path, force } => {
            let path = config_path.unwrap_or_else(config::default_config_path);
            tracing::info!("Writing {} to {}", location, path.display());
            config::write_config(&path, &StoreConfig::new(location), force)?;
            ui::success(&format!("Wrote {}", path.display()));
        }

        Commands::Show { config: config_path, location, json } => {
            let store_config = config::load_config(config_path.as_deref())?.unwrap_or_default();
            let resolved = store_config.resolve_location(location);
            if json {
                println!("{}", serde_json::to_string_pretty(&ui::describe_json(&resolved))?);
            } else {
                ui::describe(&resolved);
            }
        }
    }

    Ok(())
}
