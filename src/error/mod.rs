//! # Error Module
//!
//! Error types for the photo year sorter.
//!
//! Per-file problems (`MetadataError`, `TransferError`) never abort a run:
//! the walker turns them into a skip. Everything that reaches the top-level
//! `OrganizeError` stops the run.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("Source folder ({path}) does not exist, or couldn't be accessed")]
    SourceNotFound { path: PathBuf },

    #[error("Destination folder {path} could not be created: {source}")]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Run aborted by user")]
    Aborted,
}

/// Errors raised while reading a file's embedded metadata
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Not an image, or the file is corrupt: {path} ({reason})")]
    NotAnImage { path: PathBuf, reason: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while moving or copying a file into place
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Failed to transfer {from} to {to}: {source}")]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Copy verification failed for {path}: source {expected} bytes, destination {actual} bytes")]
    VerificationFailed {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, OrganizeError>;
