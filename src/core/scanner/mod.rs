//! # Scanner Module
//!
//! Lists one directory at a time for the tree walker.
//!
//! Entries come back sorted by file name so runs are reproducible. Symbolic
//! links are neither followed nor reported.

mod filter;

pub use filter::RedundantFileFilter;

use crate::error::OrganizeError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Immediate children of a directory
#[derive(Debug, Default)]
pub struct DirectoryListing {
    pub files: Vec<PathBuf>,
    pub directories: Vec<PathBuf>,
}

/// List the regular files and sub-directories directly inside `dir`.
pub fn list_directory(dir: &Path) -> Result<DirectoryListing, OrganizeError> {
    let mut listing = DirectoryListing::default();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| OrganizeError::ReadDirectory {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf()),
            source: e.into(),
        })?;

        let file_type = entry.file_type();
        if file_type.is_file() {
            listing.files.push(entry.into_path());
        } else if file_type.is_dir() {
            listing.directories.push(entry.into_path());
        } else {
            tracing::debug!(path = %entry.path().display(), "ignoring symlink or special file");
        }
    }

    Ok(listing)
}

/// Number of regular files directly inside `dir`
pub fn count_files(dir: &Path) -> Result<usize, OrganizeError> {
    Ok(list_directory(dir)?.files.len())
}
