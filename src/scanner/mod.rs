//! File scanning and duplicate detection

pub mod file_scanner;
pub mod duplicate_detector;

pub use file_scanner::{collect_media_files, FileEntry, BLUR_EXTENSIONS, PHOTO_EXTENSIONS, VIDEO_EXTENSIONS};
pub use duplicate_detector::{
    compute_file_hash, find_duplicates, hash_media_files, DuplicateReport, HashFailure,
    HashFailurePolicy, MediaFile,
};
