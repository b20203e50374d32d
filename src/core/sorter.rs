//! Image ordering by name, size or modification date

use std::cmp::Ordering;

use super::catalog::ImageRecord;
use super::settings::{SortKey, SortOrder};

fn compare(a: &ImageRecord, b: &ImageRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::Date => a.modified.cmp(&b.modified),
    }
}

/// Sort records in place
///
/// Stable in both directions: records with equal keys keep their input
/// order even when descending.
pub fn sort_images(records: &mut [ImageRecord], key: SortKey, order: SortOrder) {
    match order {
        SortOrder::Ascending => records.sort_by(|a, b| compare(a, b, key)),
        SortOrder::Descending => records.sort_by(|a, b| compare(b, a, key)),
    }
}
