//! hidusage CLI
//!
//! Classifies the report fields of HID power devices, batteries and keyboards
//! and reads their current values.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use hidusage::config::Config;

// CLI definitions
mod cli;
use cli::{Cli, Commands};

// Command handlers
mod commands;
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path)?;

    // Initialize logging
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    debug!("Config from {:?}", config_path);

    let ctx = Context::new(&cli, &config)?;

    match cli.command {
        Commands::List { filter } => commands::utility::list(&ctx, filter.as_deref()),
        Commands::Catalog { page, all } => commands::catalog::catalog(page, all, ctx.json),
        Commands::Tree => commands::query::tree(&ctx),
        Commands::Values { all, unlinked } => commands::query::values(&ctx, all, unlinked),
        Commands::Lookup {
            usage,
            collection,
            no_read,
        } => commands::query::lookup(&ctx, usage, collection, no_read),
        Commands::Set {
            usage,
            value,
            collection,
        } => commands::query::set(&ctx, usage, value, collection),
        Commands::Snapshot => commands::query::snapshot(&ctx),
        Commands::Config { init, force } => {
            commands::utility::config(&config_path, &config, init, force)
        }
        Commands::Demo => {
            info!("Running demo");
            commands::query::demo(&ctx)
        }
    }
}
