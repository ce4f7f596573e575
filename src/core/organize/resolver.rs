//! Picks the year from a photo's embedded metadata.

use super::types::DateMethod;
use crate::core::metadata::PhotoMetadata;
use chrono::Datelike;

/// Resolves a year from embedded tags. Capture time wins over the file
/// modified date; with neither, the caller decides between inference and
/// skipping.
pub struct MetadataResolver;

impl MetadataResolver {
    pub fn resolve(metadata: &PhotoMetadata) -> Option<(i32, DateMethod)> {
        if let Some(taken) = metadata.date_taken {
            return Some((taken.year(), DateMethod::CaptureTime));
        }

        metadata
            .date_modified
            .map(|modified| (modified.year(), DateMethod::FileModifiedDate))
    }
}
