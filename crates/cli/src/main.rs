//! AutoMats CLI - Catalog listing and cart quotes.
//!
//! # Usage
//!
//! ```bash
//! # List every product
//! automats-cli catalog
//!
//! # List only felt mats
//! automats-cli catalog --material Автовойлок
//!
//! # Quote a cart: two Premium EVA sets and one Eco Leather set
//! automats-cli quote 1 2 1
//! ```
//!
//! # Commands
//!
//! - `catalog` - Print the product catalog, optionally filtered by material
//! - `quote` - Build a cart from product ids and print lines and totals

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;

use automats_core::{ALL_MATERIALS, ProductId};
use clap::{Parser, Subcommand};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "automats-cli")]
#[command(author, version, about = "AutoMats Premium CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the product catalog
    Catalog {
        /// Material label to filter by (`EVA`, `Кожзам`, `Автовойлок`, or `all`)
        #[arg(short, long, default_value = ALL_MATERIALS)]
        material: String,
    },
    /// Quote a cart built from product ids, added in order
    Quote {
        /// Product ids; repeat an id to add another unit
        #[arg(required = true)]
        ids: Vec<ProductId>,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "automats_cli=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Catalog { material } => commands::catalog::list(&mut out, &material)?,
        Commands::Quote { ids } => commands::quote::print(&mut out, &ids)?,
    }
    Ok(())
}
