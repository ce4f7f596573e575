//! Photo organization module.
//!
//! Files photos into `<destination>/<year>/` folders. The year comes from
//! EXIF capture time, then the EXIF file modified date, then (optionally)
//! the filename or filesystem modification time.

mod executor;
mod inference;
mod planner;
mod resolver;
mod types;
mod walker;

pub use executor::TransferExecutor;
pub use inference::YearInferenceEngine;
pub use planner::{DestinationOutcome, DestinationPlanner};
pub use resolver::MetadataResolver;
pub use types::*;
pub use walker::TreeWalker;
