//! Error types shared by the scanning, scoring and reporting stages

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the media pipelines
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Folder path not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image could not be loaded: {}: {source}", path.display())]
    UndecodableImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to access report {}: {source}", path.display())]
    ReportIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed report {}: {source}", path.display())]
    ReportFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, MediaError>;
