//! Moves or copies a single file into place.

use super::types::OperationMode;
use crate::error::TransferError;
use std::fs;
use std::path::Path;

pub struct TransferExecutor;

impl TransferExecutor {
    /// Transfer `source` to `destination`, which must not exist yet.
    pub fn transfer(
        source: &Path,
        destination: &Path,
        operation: OperationMode,
    ) -> Result<(), TransferError> {
        let io_error = |e| TransferError::Io {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            source: e,
        };

        match operation {
            OperationMode::Copy => fs::copy(source, destination).map(|_| ()).map_err(io_error),
            OperationMode::Move => match fs::rename(source, destination) {
                Ok(()) => Ok(()),
                Err(e) => {
                    // rename fails across filesystems
                    tracing::debug!(
                        source = %source.display(),
                        error = %e,
                        "rename failed, falling back to copy and delete"
                    );
                    Self::copy_then_delete(source, destination)
                }
            },
        }
    }

    fn copy_then_delete(source: &Path, destination: &Path) -> Result<(), TransferError> {
        let io_error = |e| TransferError::Io {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            source: e,
        };

        let expected = fs::metadata(source).map_err(io_error)?.len();
        fs::copy(source, destination).map_err(io_error)?;

        let actual = fs::metadata(destination).map_err(io_error)?.len();
        if actual != expected {
            let _ = fs::remove_file(destination);
            return Err(TransferError::VerificationFailed {
                path: destination.to_path_buf(),
                expected,
                actual,
            });
        }

        fs::remove_file(source).map_err(io_error)
    }
}
