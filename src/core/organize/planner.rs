//! Destination path planning for a single file.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where a file should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationOutcome {
    /// `<root>/<year>/<name>` is free
    Unique(PathBuf),
    /// A file with the same name and size is already there
    Duplicate { existing: PathBuf },
    /// The name was taken by a different-sized file; a `_N` suffix was added
    RenamedUnique(PathBuf),
}

/// Plans collision-free destinations inside year folders.
///
/// The returned path does not exist at call time. Nothing here guards
/// against another writer creating it afterwards, so callers that place
/// files concurrently must serialise per year folder.
pub struct DestinationPlanner;

impl DestinationPlanner {
    /// First suffix tried when the plain name is taken
    const FIRST_INSTANCE: usize = 2;

    /// Plan where `file_name` (of `size` bytes) lands under
    /// `destination_root/year`, creating the year folder if needed.
    ///
    /// Duplicates are detected by name and size only.
    pub fn plan(
        destination_root: &Path,
        year: i32,
        file_name: impl AsRef<OsStr>,
        size: u64,
    ) -> io::Result<DestinationOutcome> {
        let file_name = file_name.as_ref();
        let year_dir = Self::year_folder(destination_root, year);
        fs::create_dir_all(&year_dir)?;

        let candidate = year_dir.join(file_name);
        let existing = match fs::metadata(&candidate) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(DestinationOutcome::Unique(candidate));
            }
            Err(e) => return Err(e),
        };

        if existing.len() == size {
            return Ok(DestinationOutcome::Duplicate {
                existing: candidate,
            });
        }

        Ok(DestinationOutcome::RenamedUnique(Self::next_free_name(
            &year_dir, file_name,
        )))
    }

    pub fn year_folder(destination_root: &Path, year: i32) -> PathBuf {
        destination_root.join(year.to_string())
    }

    /// `photo.jpg` -> `photo_2.jpg`, `photo_3.jpg`, ... until one is free.
    /// Names without an extension get no trailing dot.
    fn next_free_name(dir: &Path, file_name: &OsStr) -> PathBuf {
        let name = Path::new(file_name);
        let stem = name.file_stem().unwrap_or(file_name);
        let ext = name.extension();

        let mut instance = Self::FIRST_INSTANCE;
        loop {
            let mut new_name = stem.to_os_string();
            new_name.push(format!("_{}", instance));
            if let Some(ext) = ext {
                new_name.push(".");
                new_name.push(ext);
            }
            let candidate = dir.join(new_name);
            if !candidate.exists() {
                return candidate;
            }
            instance += 1;
        }
    }
}
