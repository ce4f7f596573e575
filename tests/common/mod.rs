//! Builders for test photos.

#![allow(dead_code)]

/// Minimal valid 1x1 PNG with no EXIF
pub const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
    0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
    0xFF, 0xFF, 0x3F, 0x00, 0x05, 0xFE, 0x02, 0xFE, 0xDC, 0xCC, 0x59, 0xE7, 0x00, 0x00, 0x00,
    0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

const TAG_DATE_TIME: u16 = 0x0132;
const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;
/// "YYYY:MM:DD HH:MM:SS" plus the terminating NUL
const DATE_LEN: u32 = 20;

/// A JPEG holding only an APP1/Exif segment.
///
/// `original` becomes DateTimeOriginal (capture time), `modified` becomes
/// IFD0 DateTime. Both use the EXIF "YYYY:MM:DD HH:MM:SS" form. At least
/// one must be given.
pub fn jpeg_with_exif(original: Option<&str>, modified: Option<&str>) -> Vec<u8> {
    let tiff = tiff_block(original, modified);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let segment_len = (2 + 6 + tiff.len()) as u16;
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// Same JPEG padded with trailing bytes, for size-collision tests
pub fn padded_jpeg_with_exif(original: Option<&str>, padding: usize) -> Vec<u8> {
    let mut jpeg = jpeg_with_exif(original, None);
    let eoi = jpeg.split_off(jpeg.len() - 2);
    // COM segment carrying the padding
    jpeg.extend_from_slice(&[0xFF, 0xFE]);
    jpeg.extend_from_slice(&((padding + 2) as u16).to_be_bytes());
    jpeg.extend(std::iter::repeat(b' ').take(padding));
    jpeg.extend_from_slice(&eoi);
    jpeg
}

fn tiff_block(original: Option<&str>, modified: Option<&str>) -> Vec<u8> {
    assert!(original.is_some() || modified.is_some());

    let ifd0_offset = 8u32;
    let ifd0_entries = original.is_some() as u16 + modified.is_some() as u16;
    let ifd0_len = 2 + 12 * ifd0_entries as u32 + 4;
    let mut next_free = ifd0_offset + ifd0_len;

    let mut entries = Vec::new();
    let mut tail = Vec::new();

    if let Some(modified) = modified {
        entries.extend(ifd_entry(TAG_DATE_TIME, TYPE_ASCII, DATE_LEN, next_free));
        tail.extend(ascii_date(modified));
        next_free += DATE_LEN;
    }

    if let Some(original) = original {
        let exif_ifd = next_free;
        entries.extend(ifd_entry(TAG_EXIF_IFD_POINTER, TYPE_LONG, 1, exif_ifd));

        let exif_ifd_len = 2 + 12 + 4;
        tail.extend(1u16.to_le_bytes());
        tail.extend(ifd_entry(
            TAG_DATE_TIME_ORIGINAL,
            TYPE_ASCII,
            DATE_LEN,
            exif_ifd + exif_ifd_len,
        ));
        tail.extend(0u32.to_le_bytes());
        tail.extend(ascii_date(original));
    }

    let mut tiff = b"II*\0".to_vec();
    tiff.extend(ifd0_offset.to_le_bytes());
    tiff.extend(ifd0_entries.to_le_bytes());
    tiff.extend(entries);
    tiff.extend(0u32.to_le_bytes());
    tiff.extend(tail);
    tiff
}

fn ifd_entry(tag: u16, kind: u16, count: u32, value: u32) -> Vec<u8> {
    let mut entry = Vec::with_capacity(12);
    entry.extend(tag.to_le_bytes());
    entry.extend(kind.to_le_bytes());
    entry.extend(count.to_le_bytes());
    entry.extend(value.to_le_bytes());
    entry
}

fn ascii_date(date: &str) -> Vec<u8> {
    assert_eq!(date.len() as u32, DATE_LEN - 1, "EXIF dates are 19 chars");
    let mut bytes = date.as_bytes().to_vec();
    bytes.push(0);
    bytes
}

/// Smallest ISO-BMFF file a phone would write: an `ftyp` box and an empty
/// `moov` box. No EXIF.
pub fn minimal_mp4() -> Vec<u8> {
    let mut out = vec![0x00, 0x00, 0x00, 0x18];
    out.extend_from_slice(b"ftypisom");
    out.extend_from_slice(&[0x00, 0x00, 0x02, 0x00]);
    out.extend_from_slice(b"isomiso2");
    out.extend_from_slice(&[0x00, 0x00, 0x00, 0x08]);
    out.extend_from_slice(b"moov");
    out
}
