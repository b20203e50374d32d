//! Duplicate report writing

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::core::catalog::bytes_to_mb;
use crate::error::{MediaError, Result};
use crate::scanner::duplicate_detector::MediaFile;

/// One duplicate as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateRecord {
    pub name: String,
    pub path: String,
    pub size_mb: f64,
    pub hash: String,
}

impl From<&MediaFile> for DuplicateRecord {
    fn from(file: &MediaFile) -> Self {
        Self {
            name: file.name.clone(),
            path: file.path.to_string_lossy().into_owned(),
            size_mb: bytes_to_mb(file.size),
            hash: file.hash.clone(),
        }
    }
}

/// Write duplicates as a JSON array, indented with four spaces
///
/// Any existing file at `output_path` is truncated.
///
/// # Arguments
/// * `output_path` - Path to output file
/// * `duplicates` - Duplicate files in traversal order
pub fn write_duplicates_json(output_path: &Path, duplicates: &[MediaFile]) -> Result<()> {
    let io_err = |source| MediaError::ReportIo {
        path: output_path.to_path_buf(),
        source,
    };

    let records: Vec<DuplicateRecord> = duplicates.iter().map(DuplicateRecord::from).collect();

    let file = File::create(output_path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    records
        .serialize(&mut serializer)
        .map_err(|source| MediaError::ReportFormat {
            path: output_path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(io_err)?;

    Ok(())
}

/// Read a report written by [`write_duplicates_json`]
pub fn read_duplicates_json(path: &Path) -> Result<Vec<DuplicateRecord>> {
    let file = File::open(path).map_err(|source| MediaError::ReportIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| MediaError::ReportFormat {
        path: path.to_path_buf(),
        source,
    })
}
