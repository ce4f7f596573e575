//! Event type definitions for progress reporting.

use crate::core::organize::{DateMethod, OperationMode, RunStatistics, SkipReason};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted while organizing a tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Organize(OrganizeEvent),
}

/// Events from the tree walker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OrganizeEvent {
    /// The walk has started
    Started {
        source: PathBuf,
        destination: PathBuf,
        operation: OperationMode,
    },
    /// A directory is about to be processed
    DirectoryEntered { path: PathBuf },
    /// A file was moved or copied into its year folder
    FileTransferred(TransferredFile),
    /// A file was left in place
    FileSkipped { path: PathBuf, reason: SkipReason },
    /// A `.db` / `.xmp` sidecar was deleted
    RedundantFileDeleted { path: PathBuf },
    /// An emptied source folder was removed
    FolderDeleted { path: PathBuf },
    /// An emptied source folder could not be removed
    FolderDeleteFailed { path: PathBuf, message: String },
    /// The walk finished
    Completed(RunStatistics),
}

/// Details of a completed transfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferredFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub year: i32,
    pub method: DateMethod,
    pub size_bytes: u64,
    /// True when the destination name got a `_N` suffix
    pub renamed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_serializable() {
        let event = Event::Organize(OrganizeEvent::FileTransferred(TransferredFile {
            source: PathBuf::from("/old/IMG_20150703_200006_1.JPG"),
            destination: PathBuf::from("/new/2015/IMG_20150703_200006_1.JPG"),
            year: 2015,
            method: DateMethod::Inference,
            size_bytes: 2048,
            renamed: false,
        }));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        match deserialized {
            Event::Organize(OrganizeEvent::FileTransferred(t)) => {
                assert_eq!(t.year, 2015);
                assert_eq!(t.method, DateMethod::Inference);
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn skip_reason_serializes_as_snake_case() {
        let event = Event::Organize(OrganizeEvent::FileSkipped {
            path: PathBuf::from("/old/a.jpg"),
            reason: SkipReason::NoDate,
        });
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("no_date"));
    }
}
