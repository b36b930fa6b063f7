//! CLI command implementations.

pub mod catalog;
pub mod quote;

use automats_core::ProductId;

/// Errors surfaced by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown product id: {0}")]
    UnknownProduct(ProductId),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
