//! Image metadata collection for the sorter

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::blur::{score_image, BlurResult};
use crate::error::Result;
use crate::scanner::file_scanner::{collect_media_files, FileEntry, PHOTO_EXTENSIONS};

/// Display format for modification times
pub const DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// An image listed by the sorter
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub modified: SystemTime,
    pub date: String,
    /// Set only when blur analysis was requested
    pub blur: Option<BlurResult>,
}

impl ImageRecord {
    pub fn size_mb(&self) -> f64 {
        bytes_to_mb(self.size)
    }
}

impl From<FileEntry> for ImageRecord {
    fn from(entry: FileEntry) -> Self {
        Self {
            date: format_timestamp(entry.modified),
            name: entry.name,
            path: entry.path,
            size: entry.size,
            modified: entry.modified,
            blur: None,
        }
    }
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Local-time rendering of a timestamp
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(DATE_FORMAT).to_string()
}

/// Collect every image below `root`, hidden files included
pub fn collect_image_records(root: &Path) -> Result<Vec<ImageRecord>> {
    let entries = collect_media_files(root, PHOTO_EXTENSIONS, false)?;
    Ok(entries.into_iter().map(ImageRecord::from).collect())
}

/// Attach a blur score to each record
pub fn attach_blur_scores(records: &mut [ImageRecord], threshold: f64) {
    for record in records.iter_mut() {
        record.blur = Some(score_image(&record.path, threshold));
    }
}
