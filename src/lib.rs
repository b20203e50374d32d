//! Media Tidy Library
//!
//! Duplicate media detection by content hash, plus image sorting with
//! optional Laplacian blur scoring.

pub mod core;
pub mod error;
pub mod reporting;
pub mod scanner;

pub use crate::core::settings;
pub use error::{MediaError, Result};
pub use reporting::report_writer;
pub use scanner::file_scanner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::blur::{score_image, BlurResult, DEFAULT_BLUR_THRESHOLD};
    pub use crate::core::catalog::{collect_image_records, ImageRecord};
    pub use crate::core::pipeline::{run_duplicate_scan, run_image_sort};
    pub use crate::core::settings::{
        resolve_root, DuplicateSettings, MediaKind, SortKey, SortOrder, SortSettings, Tool,
    };
    pub use crate::core::sorter::sort_images;
    pub use crate::error::MediaError;
    pub use crate::reporting::report_writer::{read_duplicates_json, write_duplicates_json};
    pub use crate::scanner::duplicate_detector::{
        compute_file_hash, find_duplicates, DuplicateReport, HashFailurePolicy, MediaFile,
    };
    pub use crate::scanner::file_scanner::collect_media_files;
}
