mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{handle_books, handle_rank, Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            catalog,
            category,
            top,
            weights,
            matrix,
            json,
        } => {
            handle_rank(
                catalog,
                cli.config.as_deref(),
                category,
                top,
                weights,
                matrix,
                json,
            )?;
        }
        Commands::Books {
            catalog,
            category,
            categories,
        } => {
            handle_books(catalog, cli.config.as_deref(), category, categories)?;
        }
    }

    Ok(())
}
