//! Resolution of raw prompt answers into validated run settings
//!
//! Every answer has a documented default. Invalid input never fails a run:
//! it is replaced by the default and a notice is returned for display.

use std::path::{Path, PathBuf};

use super::blur::DEFAULT_BLUR_THRESHOLD;
use crate::error::{MediaError, Result};
use crate::scanner::duplicate_detector::HashFailurePolicy;
use crate::scanner::file_scanner::{PHOTO_EXTENSIONS, VIDEO_EXTENSIONS};

/// Fixed report location, relative to the working directory
pub const DEFAULT_REPORT_FILE: &str = "store.json";

/// Which utility to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    SortImages,
    FindDuplicates,
}

impl Tool {
    /// `1` sorts images, `2` finds duplicates; anything else is rejected
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Tool::SortImages),
            "2" => Some(Tool::FindDuplicates),
            _ => None,
        }
    }
}

/// Media types considered by the duplicate finder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaKind {
    Video,
    #[default]
    Photo,
    Both,
}

impl MediaKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MediaKind::Video),
            "2" => Some(MediaKind::Photo),
            "3" => Some(MediaKind::Both),
            _ => None,
        }
    }

    pub fn extensions(self) -> Vec<&'static str> {
        match self {
            MediaKind::Video => VIDEO_EXTENSIONS.to_vec(),
            MediaKind::Photo => PHOTO_EXTENSIONS.to_vec(),
            MediaKind::Both => VIDEO_EXTENSIONS
                .iter()
                .chain(PHOTO_EXTENSIONS)
                .copied()
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Date,
}

impl SortKey {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "name" => Some(SortKey::Name),
            "size" => Some(SortKey::Size),
            "date" => Some(SortKey::Date),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Size => "size",
            SortKey::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "asc" => Some(SortOrder::Ascending),
            "desc" => Some(SortOrder::Descending),
            _ => None,
        }
    }
}

fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Validate the folder to scan
pub fn resolve_root(raw: &str) -> Result<PathBuf> {
    let path = Path::new(raw.trim());
    if path.as_os_str().is_empty() || !path.is_dir() {
        return Err(MediaError::DirectoryNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}

/// Settings for one duplicate scan
#[derive(Debug, Clone)]
pub struct DuplicateSettings {
    pub root: PathBuf,
    pub media: MediaKind,
    pub output: PathBuf,
    pub on_unreadable: HashFailurePolicy,
}

impl DuplicateSettings {
    /// Build settings from the media selector answer
    ///
    /// # Returns
    /// Settings plus fallback notices to show the user
    pub fn resolve(root: PathBuf, media_answer: &str) -> (Self, Vec<String>) {
        let mut notices = Vec::new();
        let media = MediaKind::parse(media_answer).unwrap_or_else(|| {
            notices.push("Not a valid media type. Defaulting to photos.".to_string());
            MediaKind::default()
        });

        let settings = Self {
            root,
            media,
            output: PathBuf::from(DEFAULT_REPORT_FILE),
            on_unreadable: HashFailurePolicy::default(),
        };
        (settings, notices)
    }
}

/// Settings for one sort run
#[derive(Debug, Clone)]
pub struct SortSettings {
    pub root: PathBuf,
    pub key: SortKey,
    pub order: SortOrder,
    pub analyze_blur: bool,
    pub blur_threshold: f64,
}

impl SortSettings {
    /// Build settings from the key, blur and direction answers
    ///
    /// An unsupported key falls back to name ascending regardless of the
    /// direction answer.
    pub fn resolve(
        root: PathBuf,
        key_answer: &str,
        blur_answer: &str,
        order_answer: &str,
    ) -> (Self, Vec<String>) {
        let mut notices = Vec::new();

        let analyze_blur = parse_yes_no(blur_answer).unwrap_or_else(|| {
            notices.push("Not a valid input. Defaulting to 'no'.".to_string());
            false
        });

        let mut order = SortOrder::parse(order_answer).unwrap_or_else(|| {
            notices.push("Not a valid sort order. Defaulting to 'asc'.".to_string());
            SortOrder::default()
        });

        let key = match SortKey::parse(key_answer) {
            Some(key) => key,
            None => {
                notices.push("Not a valid sort type. Defaulting to 'name' ascending.".to_string());
                order = SortOrder::Ascending;
                SortKey::default()
            }
        };

        let settings = Self {
            root,
            key,
            order,
            analyze_blur,
            blur_threshold: DEFAULT_BLUR_THRESHOLD,
        };
        (settings, notices)
    }
}
