//! Duplicate media detection using MD5 content hashing

use indicatif::ProgressBar;
use md5::{Digest, Md5};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::file_scanner::FileEntry;
use crate::error::{MediaError, Result};

/// A scanned media file with its content digest
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub hash: String,
}

/// What to do when a file cannot be read for hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashFailurePolicy {
    /// Record the failure and keep scanning
    #[default]
    Skip,
    /// Stop the whole scan on the first unreadable file
    Abort,
}

/// A file that could not be hashed
#[derive(Debug, Clone)]
pub struct HashFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of grouping files by digest
#[derive(Debug, Clone, Default)]
pub struct DuplicateReport {
    /// Later occurrences of an already-seen digest, in traversal order
    pub duplicates: Vec<MediaFile>,
    /// Sum of duplicate sizes in bytes
    pub reclaimable_bytes: u64,
    /// Number of files considered
    pub scanned: usize,
    pub failures: Vec<HashFailure>,
}

/// Compute the MD5 digest of a file
///
/// The file is read fully into memory once.
///
/// # Returns
/// Lowercase hex-encoded digest
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| MediaError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format!("{:x}", Md5::digest(&bytes)))
}

/// Hash every entry in order
///
/// # Arguments
/// * `entries` - Walker output, in traversal order
/// * `policy` - Failure handling for unreadable files
/// * `progress` - Advanced once per entry
///
/// # Returns
/// Hashed files plus any recorded failures
pub fn hash_media_files(
    entries: &[FileEntry],
    policy: HashFailurePolicy,
    progress: &ProgressBar,
) -> Result<(Vec<MediaFile>, Vec<HashFailure>)> {
    let mut files = Vec::with_capacity(entries.len());
    let mut failures = Vec::new();

    for entry in entries {
        progress.set_message(entry.name.clone());
        match compute_file_hash(&entry.path) {
            Ok(hash) => files.push(MediaFile {
                name: entry.name.clone(),
                path: entry.path.clone(),
                size: entry.size,
                hash,
            }),
            Err(e) if policy == HashFailurePolicy::Skip => {
                warn!(path = %entry.path.display(), error = %e, "skipping unreadable file");
                failures.push(HashFailure {
                    path: entry.path.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
        progress.inc(1);
    }

    Ok((files, failures))
}

/// Split files into first-seen originals and later duplicates
///
/// The first file observed for a digest is kept; every later file with the
/// same digest is a duplicate and counts towards the reclaimable total.
pub fn find_duplicates(files: &[MediaFile]) -> DuplicateReport {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut report = DuplicateReport {
        scanned: files.len(),
        ..Default::default()
    };

    for file in files {
        if seen.insert(file.hash.as_str()) {
            continue;
        }
        report.reclaimable_bytes += file.size;
        report.duplicates.push(file.clone());
    }

    report
}
