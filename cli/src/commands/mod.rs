pub mod books;
pub mod rank;
pub mod ui;

pub use books::handle_books;
pub use rank::handle_rank;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shelfrank")]
#[command(about = "Weighted multi-criteria ranking over a book catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and rank the catalog
    Rank {
        /// Catalog file (JSON or YAML); overrides the configured path
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only rank books in this category
        #[arg(long)]
        category: Option<String>,

        /// Show only the top N results
        #[arg(long)]
        top: Option<usize>,

        /// Override a criterion weight, e.g. --weight borrower_count=0.5
        #[arg(long = "weight", value_name = "KEY=VALUE")]
        weights: Vec<String>,

        /// Also print the decision and normalized matrices
        #[arg(long)]
        matrix: bool,

        /// Emit results as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// List the catalog
    Books {
        /// Catalog file (JSON or YAML); overrides the configured path
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only list books in this category
        #[arg(long)]
        category: Option<String>,

        /// List distinct categories instead of books
        #[arg(long)]
        categories: bool,
    },
}
