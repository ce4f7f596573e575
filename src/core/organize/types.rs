//! Types for the organize module.

use crate::error::{OrganizeError, Result};
use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

/// How the year used for placement was determined
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DateMethod {
    /// No year has been determined yet
    #[default]
    NotSet,
    /// EXIF DateTimeOriginal
    CaptureTime,
    /// EXIF file change date (IFD0 DateTime)
    FileModifiedDate,
    /// Filename pattern or filesystem modification time
    Inference,
}

impl std::fmt::Display for DateMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateMethod::NotSet => write!(f, "not set"),
            DateMethod::CaptureTime => write!(f, "capture time"),
            DateMethod::FileModifiedDate => write!(f, "file modified date"),
            DateMethod::Inference => write!(f, "inference"),
        }
    }
}

/// Operation mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OperationMode {
    /// Copy files to destination (keep originals)
    Copy,
    /// Move files to destination
    #[default]
    Move,
}

impl OperationMode {
    pub fn from_move_flag(move_files: bool) -> Self {
        if move_files {
            OperationMode::Move
        } else {
            OperationMode::Copy
        }
    }
}

impl std::fmt::Display for OperationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationMode::Copy => write!(f, "Copy"),
            OperationMode::Move => write!(f, "Move"),
        }
    }
}

/// Settings for one run. Built once and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfiguration {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub operation: OperationMode,
    /// Remove source sub-folders left without files (move mode only)
    pub delete_empty_source_folders: bool,
    /// Remove `.db` / `.xmp` sidecar files (move mode only)
    pub delete_redundant_files: bool,
    /// Fall back to filename/mtime inference when metadata has no date
    pub attempt_inference: bool,
}

impl RunConfiguration {
    /// Configuration with the command-line defaults: move, keep folders,
    /// keep sidecars, infer missing dates.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            operation: OperationMode::Move,
            delete_empty_source_folders: false,
            delete_redundant_files: false,
            attempt_inference: true,
        }
    }

    pub fn is_move(&self) -> bool {
        self.operation == OperationMode::Move
    }

    /// Sidecar cleanup never runs in copy mode, whatever the flag says.
    pub fn should_delete_redundant_files(&self) -> bool {
        self.is_move() && self.delete_redundant_files
    }

    pub fn should_prune_folders(&self) -> bool {
        self.is_move() && self.delete_empty_source_folders
    }

    /// Check the paths against the filesystem without changing anything.
    ///
    /// The source must be an existing directory and the destination must
    /// not lie inside it, or the walk would revisit files it just placed.
    pub fn validate(&self) -> Result<()> {
        let source = self
            .source
            .canonicalize()
            .ok()
            .filter(|p| p.is_dir())
            .ok_or_else(|| OrganizeError::SourceNotFound {
                path: self.source.clone(),
            })?;
        let destination = resolve_through_existing(&self.destination)
            .map_err(|e| OrganizeError::Config(format!("bad destination: {}", e)))?;

        if destination.starts_with(&source) {
            return Err(OrganizeError::Config(format!(
                "destination {} must not be inside source {}",
                self.destination.display(),
                self.source.display()
            )));
        }

        Ok(())
    }
}

/// Canonicalize the longest existing prefix of `path` and re-append the rest.
fn resolve_through_existing(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut existing = absolute.as_path();
    let mut missing: Vec<OsString> = Vec::new();

    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = existing.canonicalize()?;
    resolved.extend(missing.iter().rev());
    Ok(resolved)
}

/// A source file whose year has been decided
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub source: PathBuf,
    pub size: u64,
    pub year: i32,
    pub method: DateMethod,
}

impl FileRecord {
    pub fn new(source: PathBuf, size: u64, year: i32, method: DateMethod) -> Self {
        Self {
            source,
            size,
            year,
            method,
        }
    }

    pub fn file_name(&self) -> &OsStr {
        self.source.file_name().unwrap_or_default()
    }
}

/// Why a file was left where it was
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Not an image, or corrupt
    Unreadable,
    /// No usable date and inference disabled
    NoDate,
    /// Same name and size already at the destination
    Duplicate,
    /// The move or copy itself failed
    TransferFailed,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Unreadable => write!(f, "not an image or unreadable"),
            SkipReason::NoDate => write!(f, "no date found"),
            SkipReason::Duplicate => write!(f, "already exists at destination"),
            SkipReason::TransferFailed => write!(f, "transfer failed"),
        }
    }
}

/// Counters for a run, read once at the end for the report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    pub files_processed: usize,
    pub files_by_capture_time: usize,
    pub files_by_file_modified_date: usize,
    pub files_by_inference: usize,
    pub bytes_processed: u64,
    pub files_skipped: usize,
    pub skipped_unreadable: usize,
    pub skipped_no_date: usize,
    pub skipped_duplicate: usize,
    pub skipped_transfer_failed: usize,
    pub source_folders_deleted: usize,
    pub redundant_files_deleted: usize,
}

impl RunStatistics {
    pub fn record_transfer(&mut self, method: DateMethod, bytes: u64) {
        self.files_processed += 1;
        self.bytes_processed += bytes;
        match method {
            DateMethod::CaptureTime => self.files_by_capture_time += 1,
            DateMethod::FileModifiedDate => self.files_by_file_modified_date += 1,
            DateMethod::Inference => self.files_by_inference += 1,
            DateMethod::NotSet => {}
        }
    }

    pub fn record_skip(&mut self, reason: SkipReason) {
        self.files_skipped += 1;
        match reason {
            SkipReason::Unreadable => self.skipped_unreadable += 1,
            SkipReason::NoDate => self.skipped_no_date += 1,
            SkipReason::Duplicate => self.skipped_duplicate += 1,
            SkipReason::TransferFailed => self.skipped_transfer_failed += 1,
        }
    }
}
