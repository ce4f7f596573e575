//! # Metadata Module
//!
//! Reads the date tags a photo carries.
//!
//! ## Extracted Fields
//! - Capture time (EXIF `DateTimeOriginal`)
//! - File modified date (EXIF IFD0 `DateTime`, written by whatever software
//!   last saved the file; unrelated to the filesystem mtime)
//!
//! ## Readability
//! A file counts as media when its header is a format the `image` crate
//! recognises, a video container (MP4/MOV/M4V/3GP, AVI, MKV/WebM, WMV), or
//! when an EXIF container (JPEG, TIFF, HEIF, PNG, WebP) can be read from it.
//! Media without EXIF produce an empty `PhotoMetadata` and fall through to
//! inference.

use crate::error::MetadataError;
use chrono::{NaiveDate, NaiveDateTime};
use exif::{In, Reader, Tag, Value};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Number of leading bytes used to sniff the image format
const HEADER_LEN: u64 = 32;

/// Date tags found in a photo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoMetadata {
    /// When the photo was taken
    pub date_taken: Option<NaiveDateTime>,
    /// When the file was last changed by an editor or the camera
    pub date_modified: Option<NaiveDateTime>,
}

impl PhotoMetadata {
    fn from_exif(exif: &exif::Exif) -> Self {
        Self {
            date_taken: date_field(exif, Tag::DateTimeOriginal),
            date_modified: date_field(exif, Tag::DateTime),
        }
    }
}

/// Source of per-file metadata.
///
/// Implement this to feed the walker from something other than EXIF
/// (tests use an in-memory map).
pub trait MetadataSource {
    /// Read the metadata bundle for `path`, failing when the file is not an
    /// image or cannot be read.
    fn read(&self, path: &Path) -> Result<PhotoMetadata, MetadataError>;
}

/// `MetadataSource` backed by kamadak-exif
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifMetadataSource;

impl MetadataSource for ExifMetadataSource {
    fn read(&self, path: &Path) -> Result<PhotoMetadata, MetadataError> {
        extract_metadata(path)
    }
}

/// Extract the date tags from a photo file
pub fn extract_metadata(path: &Path) -> Result<PhotoMetadata, MetadataError> {
    let io_error = |source| MetadataError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let mut reader = BufReader::new(file);

    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    (&mut reader)
        .take(HEADER_LEN)
        .read_to_end(&mut header)
        .map_err(io_error)?;
    reader.seek(SeekFrom::Start(0)).map_err(io_error)?;

    let recognised = image::guess_format(&header).is_ok() || is_video_container(&header);

    match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => Ok(PhotoMetadata::from_exif(&exif)),
        Err(err) if recognised => {
            tracing::debug!(path = %path.display(), error = %err, "media has no readable EXIF");
            Ok(PhotoMetadata::default())
        }
        Err(err) => Err(MetadataError::NotAnImage {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }),
    }
}

/// Sniff the common video containers phones and cameras write.
fn is_video_container(header: &[u8]) -> bool {
    const ASF_GUID: [u8; 4] = [0x30, 0x26, 0xB2, 0x75];
    const EBML_MAGIC: [u8; 4] = [0x1A, 0x45, 0xDF, 0xA3];

    // ISO-BMFF / QuickTime: 4-byte box size, then the box type
    let iso_box = header.get(4..8).is_some_and(|box_type| {
        matches!(box_type, b"ftyp" | b"moov" | b"mdat" | b"wide" | b"free" | b"skip")
    });
    let avi = header.get(0..4) == Some(b"RIFF".as_slice())
        && header.get(8..12) == Some(b"AVI ".as_slice());

    iso_box || avi || header.starts_with(&EBML_MAGIC) || header.starts_with(&ASF_GUID)
}

fn date_field(exif: &exif::Exif, tag: Tag) -> Option<NaiveDateTime> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match field.value {
        Value::Ascii(ref vec) => vec.first().and_then(|bytes| parse_exif_datetime(bytes)),
        _ => None,
    }
}

/// Parse an EXIF ASCII timestamp ("YYYY:MM:DD HH:MM:SS").
///
/// Placeholder values such as "0000:00:00 00:00:00" yield `None`.
fn parse_exif_datetime(bytes: &[u8]) -> Option<NaiveDateTime> {
    let dt = exif::DateTime::from_ascii(bytes).ok()?;
    NaiveDate::from_ymd_opt(dt.year.into(), dt.month.into(), dt.day.into())?.and_hms_opt(
        dt.hour.into(),
        dt.minute.into(),
        dt.second.into(),
    )
}
