//! Media file scanning and collection

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{MediaError, Result};

/// Video container extensions
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov"];

/// Still image extensions, raw camera formats included
pub const PHOTO_EXTENSIONS: &[&str] = &[
    ".jpg", ".png", ".jpeg", ".heic", ".heif", ".arw", ".dng", ".nef", ".tiff", ".tif", ".webp",
    ".gif", ".bmp", ".cr2", ".cr3", ".orf", ".rw2", ".raf",
];

/// Formats the blur scorer can decode
pub const BLUR_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png"];

/// A file found by the walker
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub modified: SystemTime,
}

/// Case-insensitive suffix match of a file name against an extension list
pub fn has_extension(name: &str, extensions: &[&str]) -> bool {
    let lower = name.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(ext))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Collect all media files below `root` whose names end in one of `extensions`
///
/// With `skip_hidden`, entries starting with `.` are skipped and hidden
/// directories are not descended into. Symlinks to files are followed.
/// Unreadable subdirectories are logged and skipped.
///
/// # Arguments
/// * `root` - Directory to scan
/// * `extensions` - Accepted suffixes, lowercase with leading dot
/// * `skip_hidden` - Leave out dotfiles and dot-directories
///
/// # Returns
/// Entries in directory-enumeration order
pub fn collect_media_files(
    root: &Path,
    extensions: &[&str],
    skip_hidden: bool,
) -> Result<Vec<FileEntry>> {
    let not_found = || MediaError::DirectoryNotFound {
        path: root.to_path_buf(),
    };
    if !root.is_dir() {
        return Err(not_found());
    }
    let root = std::path::absolute(root).map_err(|_| not_found())?;

    let mut files = Vec::new();

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !(skip_hidden && is_hidden(e)));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(path = ?e.path(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if !has_extension(&name, extensions) {
            continue;
        }

        let metadata = if entry.path_is_symlink() {
            fs::metadata(entry.path())
        } else {
            entry.metadata().map_err(io::Error::from)
        };

        match metadata {
            Ok(metadata) if metadata.is_file() => files.push(FileEntry {
                name,
                path: entry.path().to_path_buf(),
                size: metadata.len(),
                modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            }),
            Ok(_) => {}
            Err(e) => warn!(path = %entry.path().display(), error = %e, "skipping file without metadata"),
        }
    }

    debug!(root = %root.display(), count = files.len(), "scan finished");
    Ok(files)
}
