//! # Kassa Terminal
//!
//! Interactive console register over the kassa-core checkout pipeline.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tracing init ──► config load ──► Session::new ──► menu loop           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod error;
mod receipt_store;
mod session;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::TerminalConfig;
use crate::error::AppError;
use crate::session::Session;

fn main() -> Result<(), AppError> {
    // Initialize tracing. Logs default to warnings so they do not drown
    // the register UI; RUST_LOG overrides as usual.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Load configuration
    let config = TerminalConfig::load()?;
    info!(
        receipts_path = %config.receipts_path,
        customer = %config.customer_name,
        "configuration loaded"
    );

    Session::new(&config).run()?;
    Ok(())
}
