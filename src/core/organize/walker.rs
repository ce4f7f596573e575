//! Depth-first walk of the source tree.
//!
//! Per directory: delete sidecars (move mode, if asked), place every file,
//! recurse into sub-directories, then prune the ones left without files.

use super::executor::TransferExecutor;
use super::inference::YearInferenceEngine;
use super::planner::{DestinationOutcome, DestinationPlanner};
use super::resolver::MetadataResolver;
use super::types::*;
use crate::core::metadata::{ExifMetadataSource, MetadataSource};
use crate::core::scanner::{self, RedundantFileFilter};
use crate::error::{OrganizeError, Result};
use crate::events::{EventSender, OrganizeEvent, TransferredFile};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Walks a source tree and files every photo under `<destination>/<year>/`
pub struct TreeWalker<'a, M = ExifMetadataSource> {
    config: &'a RunConfiguration,
    metadata: M,
    redundant: RedundantFileFilter,
    events: &'a EventSender,
    stats: RunStatistics,
}

impl<'a> TreeWalker<'a, ExifMetadataSource> {
    pub fn new(config: &'a RunConfiguration, events: &'a EventSender) -> Self {
        Self::with_metadata_source(config, ExifMetadataSource, events)
    }
}

impl<'a, M: MetadataSource> TreeWalker<'a, M> {
    pub fn with_metadata_source(
        config: &'a RunConfiguration,
        metadata: M,
        events: &'a EventSender,
    ) -> Self {
        Self {
            config,
            metadata,
            redundant: RedundantFileFilter::new(),
            events,
            stats: RunStatistics::default(),
        }
    }

    /// Run the whole walk and return the final counters.
    pub fn run(mut self) -> Result<RunStatistics> {
        self.config.validate()?;

        fs::create_dir_all(&self.config.destination).map_err(|source| {
            OrganizeError::DestinationUnavailable {
                path: self.config.destination.clone(),
                source,
            }
        })?;

        self.events.organize(OrganizeEvent::Started {
            source: self.config.source.clone(),
            destination: self.config.destination.clone(),
            operation: self.config.operation,
        });
        info!(
            source = %self.config.source.display(),
            destination = %self.config.destination.display(),
            operation = %self.config.operation,
            "organizing"
        );

        let source = self.config.source.clone();
        self.visit(&source)?;

        self.events
            .organize(OrganizeEvent::Completed(self.stats.clone()));
        Ok(self.stats)
    }

    fn visit(&mut self, dir: &Path) -> Result<()> {
        self.events.organize(OrganizeEvent::DirectoryEntered {
            path: dir.to_path_buf(),
        });

        let listing = scanner::list_directory(dir)?;

        let files = if self.config.should_delete_redundant_files() {
            self.delete_redundant_files(listing.files)
        } else {
            listing.files
        };

        for file in &files {
            self.process_file(file)?;
        }

        for sub_dir in &listing.directories {
            self.visit(sub_dir)?;

            if self.config.should_prune_folders() {
                self.prune(sub_dir);
            }
        }

        Ok(())
    }

    /// Delete sidecars and return the files that remain. A sidecar that
    /// cannot be deleted stays in the list and goes through the file phase.
    fn delete_redundant_files(&mut self, files: Vec<PathBuf>) -> Vec<PathBuf> {
        let mut remaining = Vec::with_capacity(files.len());

        for file in files {
            if !self.redundant.is_redundant(&file) {
                remaining.push(file);
                continue;
            }

            match fs::remove_file(&file) {
                Ok(()) => {
                    self.stats.redundant_files_deleted += 1;
                    info!(path = %file.display(), "deleted redundant file");
                    self.events
                        .organize(OrganizeEvent::RedundantFileDeleted { path: file });
                }
                Err(e) => {
                    warn!(path = %file.display(), error = %e, "could not delete redundant file");
                    remaining.push(file);
                }
            }
        }

        remaining
    }

    fn process_file(&mut self, path: &Path) -> Result<()> {
        // a file without an mtime cannot be inferred either
        let stat = fs::metadata(path).and_then(|meta| Ok((meta.len(), meta.modified()?)));
        let (size, modified) = match stat {
            Ok(stat) => stat,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "stat failed");
                self.skip(path, SkipReason::Unreadable);
                return Ok(());
            }
        };

        let metadata = match self.metadata.read(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!(error = %e, "metadata unavailable");
                self.skip(path, SkipReason::Unreadable);
                return Ok(());
            }
        };

        let (year, method) = match MetadataResolver::resolve(&metadata) {
            Some(resolved) => resolved,
            None if self.config.attempt_inference => {
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                (YearInferenceEngine::infer(&name, modified), DateMethod::Inference)
            }
            None => {
                self.skip(path, SkipReason::NoDate);
                return Ok(());
            }
        };
        let record = FileRecord::new(path.to_path_buf(), size, year, method);
        debug!(path = %path.display(), year, %method, "year resolved");

        let outcome = DestinationPlanner::plan(
            &self.config.destination,
            year,
            record.file_name(),
            record.size,
        )
        .map_err(|source| OrganizeError::DestinationUnavailable {
            path: DestinationPlanner::year_folder(&self.config.destination, year),
            source,
        })?;

        let renamed = matches!(outcome, DestinationOutcome::RenamedUnique(_));
        let destination = match outcome {
            DestinationOutcome::Unique(p) | DestinationOutcome::RenamedUnique(p) => p,
            DestinationOutcome::Duplicate { existing } => {
                debug!(existing = %existing.display(), "same name and size at destination");
                self.skip(path, SkipReason::Duplicate);
                return Ok(());
            }
        };

        if let Err(e) = TransferExecutor::transfer(path, &destination, self.config.operation) {
            warn!(error = %e, "transfer failed");
            self.skip(path, SkipReason::TransferFailed);
            return Ok(());
        }

        self.stats.record_transfer(record.method, record.size);
        info!(
            from = %path.display(),
            to = %destination.display(),
            year,
            %method,
            "{}",
            match self.config.operation {
                OperationMode::Move => "moved",
                OperationMode::Copy => "copied",
            }
        );

        self.events
            .organize(OrganizeEvent::FileTransferred(TransferredFile {
                source: record.source,
                destination,
                year: record.year,
                method: record.method,
                size_bytes: record.size,
                renamed,
            }));

        Ok(())
    }

    fn skip(&mut self, path: &Path, reason: SkipReason) {
        self.stats.record_skip(reason);
        warn!(path = %path.display(), %reason, "skipping");
        self.events.organize(OrganizeEvent::FileSkipped {
            path: path.to_path_buf(),
            reason,
        });
    }

    /// Remove `dir` if it holds no files. Failures are logged, never fatal.
    fn prune(&mut self, dir: &Path) {
        let file_count = match scanner::count_files(dir) {
            Ok(count) => count,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "could not inspect folder for pruning");
                return;
            }
        };
        if file_count > 0 {
            return;
        }

        match fs::remove_dir(dir) {
            Ok(()) => {
                self.stats.source_folders_deleted += 1;
                info!(path = %dir.display(), "deleted empty source folder");
                self.events.organize(OrganizeEvent::FolderDeleted {
                    path: dir.to_path_buf(),
                });
            }
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "could not delete source folder, skipping");
                self.events.organize(OrganizeEvent::FolderDeleteFailed {
                    path: dir.to_path_buf(),
                    message: e.to_string(),
                });
            }
        }
    }
}
