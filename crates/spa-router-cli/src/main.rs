mod commands;
mod logging;

#[cfg(feature = "preview")]
mod preview;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spa_router::config::DEFAULT_CONFIG_FILE;
use spa_router::{Config, NavigationMode, RouteTable};

#[derive(Parser)]
#[command(name = "spa-router")]
#[command(version, about = "spa-router CLI - resolve and inspect the app's route table", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the navigation mode (history or hash)
    #[arg(long, global = true)]
    mode: Option<NavigationMode>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve paths to views and parameters
    Resolve {
        /// Paths to resolve
        #[arg(required = true)]
        paths: Vec<String>,

        /// Treat inputs as address-bar locations (apply mode and base)
        #[arg(short, long)]
        location: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the route table
    Routes,

    /// Build the address-bar href for a named route
    Href {
        /// Route name
        name: String,

        /// Route parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },

    /// Serve the app shell for every path (history-mode fallback)
    Serve {
        /// Port to run the server on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{}`", s))
}

fn load_table(cli: &Cli) -> Result<RouteTable> {
    let mut config = Config::load(&cli.config)?;
    if let Some(mode) = cli.mode {
        config.router.mode = mode;
    }

    RouteTable::from_config(&config)
        .with_context(|| format!("Invalid route configuration in {:?}", cli.config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let table = load_table(&cli)?;

    match cli.command {
        Commands::Resolve {
            paths,
            location,
            json,
        } => {
            commands::resolve::execute(&table, &paths, location, json)?;
        }
        Commands::Routes => {
            commands::routes::execute(&table);
        }
        Commands::Href { name, params } => {
            commands::href::execute(&table, &name, params)?;
        }
        Commands::Serve { port } => {
            commands::serve::execute(table, port)?;
        }
    }

    Ok(())
}
