//! End-to-end runs of the two utilities

use indicatif::ProgressBar;
use tracing::info;

use super::catalog::{attach_blur_scores, collect_image_records, ImageRecord};
use super::settings::{DuplicateSettings, SortSettings};
use super::sorter::sort_images;
use crate::error::Result;
use crate::scanner::duplicate_detector::{find_duplicates, hash_media_files, DuplicateReport};
use crate::scanner::file_scanner::collect_media_files;

/// Walk, hash and group
///
/// The progress bar length is set once the file count is known.
pub fn run_duplicate_scan(settings: &DuplicateSettings, progress: &ProgressBar) -> Result<DuplicateReport> {
    let entries = collect_media_files(&settings.root, &settings.media.extensions(), true)?;
    info!(root = %settings.root.display(), files = entries.len(), "hashing media files");

    progress.set_length(entries.len() as u64);
    let (files, failures) = hash_media_files(&entries, settings.on_unreadable, progress)?;
    progress.finish_and_clear();

    let mut report = find_duplicates(&files);
    report.scanned = entries.len();
    report.failures = failures;
    Ok(report)
}

/// Collect, sort and optionally blur-score images
pub fn run_image_sort(settings: &SortSettings) -> Result<Vec<ImageRecord>> {
    let mut records = collect_image_records(&settings.root)?;
    sort_images(&mut records, settings.key, settings.order);

    if settings.analyze_blur {
        info!(images = records.len(), "scoring sharpness");
        attach_blur_scores(&mut records, settings.blur_threshold);
    }

    Ok(records)
}
