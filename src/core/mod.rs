//! # Core Module
//!
//! The UI-agnostic organizing engine.
//!
//! ## Modules
//! - `metadata` - Reads EXIF date tags from photos
//! - `scanner` - Lists directories and recognises sidecar files
//! - `organize` - Resolves years, plans destinations, walks the tree

pub mod metadata;
pub mod organize;
pub mod scanner;

// Re-export commonly used types
pub use metadata::{ExifMetadataSource, MetadataSource, PhotoMetadata};
pub use organize::{DateMethod, RunConfiguration, RunStatistics, TreeWalker};
