//! # Photo Year Sorter
//!
//! Moves (or copies) every photo under a source folder into
//! `<destination>/<year>/`, where the year is read from the photo's EXIF
//! data or, failing that, inferred from its name or modification time.
//!
//! ## Architecture
//! - `core` - The organizing engine (metadata, planning, tree walk)
//! - `events` - Progress events for whatever front end is attached
//! - `error` - Error types

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{OrganizeError, Result};

/// Log filter used when `RUST_LOG` is unset or invalid. Skips are logged at
/// `warn`, so they show by default.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize tracing for the library
///
/// This should be called by the application entry point. The filter is read
/// from `RUST_LOG`.
pub fn init_tracing() {
    let filter = env_filter(std::env::var("RUST_LOG").ok().as_deref());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

fn env_filter(directives: Option<&str>) -> tracing_subscriber::EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| tracing_subscriber::EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
}
