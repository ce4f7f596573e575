//! Year inference for files whose metadata carries no date.

use chrono::{DateTime, Datelike, Utc};
use regex::Regex;
use std::sync::LazyLock;
use std::time::SystemTime;

/// Android/phone exports: `IMG_20150703_200006_1.JPG`. The digits after
/// `IMG_` start with the year.
static RE_IMG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"IMG_(?P<year>\d{4})\d*_").expect("valid regex"));

/// Dropbox/camera-upload style: `2011-11-03 18.02.38.jpg`
static RE_ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<year>\d{4})-\d{2}-\d{2}").expect("valid regex"));

/// Most specific pattern first.
static PATTERNS: [&LazyLock<Regex>; 2] = [&RE_IMG, &RE_ISO_DATE];

pub struct YearInferenceEngine;

impl YearInferenceEngine {
    /// Infer a year, falling back to the filesystem modification time. Never
    /// fails. Extracted years are not range-checked.
    pub fn infer(filename: &str, modified: SystemTime) -> i32 {
        Self::year_from_filename(filename).unwrap_or_else(|| {
            let modified: DateTime<Utc> = modified.into();
            modified.year()
        })
    }

    pub fn year_from_filename(filename: &str) -> Option<i32> {
        PATTERNS.iter().find_map(|re| {
            re.captures(filename)
                .and_then(|caps| caps.name("year"))
                .and_then(|m| m.as_str().parse().ok())
        })
    }
}
