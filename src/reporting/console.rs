//! Human-readable console tables

use std::fmt::{self, Write as _};
use std::path::Path;
use std::time::Duration;

use crate::core::catalog::{bytes_to_mb, ImageRecord};
use crate::core::settings::SortKey;
use crate::scanner::duplicate_detector::DuplicateReport;

/// Summary printed after a duplicate scan
pub fn duplicate_summary(
    report: &DuplicateReport,
    output: &Path,
    elapsed: Duration,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "Total size that can be freed is {:.2} MB.",
        bytes_to_mb(report.reclaimable_bytes)
    )?;
    writeln!(out, "Found {} files to scan.", report.scanned)?;
    writeln!(out, "Duplicates found: {}", report.duplicates.len())?;

    if !report.failures.is_empty() {
        writeln!(out, "Files that could not be read: {}", report.failures.len())?;
        for failure in &report.failures {
            writeln!(out, "  {}: {}", failure.path.display(), failure.reason)?;
        }
    }

    writeln!(out, "Duplicate list saved to: {}", output.display())?;
    writeln!(out, "Total time elapsed {:.2}.", elapsed.as_secs_f64())?;
    Ok(out)
}

/// Legend shown before asking for the sort direction
pub fn order_legend() -> &'static str {
    "Sort in ascending (asc) or descending (desc) order?\n  \
     asc: Name A → Z | Size Small → Large | Date Old → New\n  \
     desc: Name Z → A | Size Large → Small | Date New → Old"
}

/// Table of sorted images
///
/// Adds sharpness columns when any record carries a blur score.
pub fn image_table(records: &[ImageRecord], key: SortKey) -> Result<String, fmt::Error> {
    let with_blur = records.iter().any(|r| r.blur.is_some());
    let mut out = String::new();

    writeln!(out)?;
    writeln!(out, "Sorting by: {}", key.as_str())?;
    writeln!(out)?;

    if with_blur {
        writeln!(
            out,
            "{:<40} {:<10} {:>12}    {}",
            "Name", "Sharpness", "Size (MB)", "Date & Time"
        )?;
        writeln!(out, "{}", "-".repeat(114))?;

        for record in records {
            let blur = record.blur.unwrap_or_default();
            let variance = match blur.variance {
                Some(v) => format!("{:8.2}", v),
                None => format!("{:>8}", "N/A"),
            };
            writeln!(
                out,
                "{:<40} {:<10} {:>9.2} MB     {}    (Blur Variance: {})",
                record.name,
                blur.status(),
                record.size_mb(),
                record.date,
                variance
            )?;
        }
    } else {
        writeln!(out, "{:<40} {:>13}    {}", "Name", "Size (MB)", "Time")?;
        writeln!(out, "{}", "-".repeat(65))?;

        for record in records {
            writeln!(
                out,
                "{:<40}{:>10.2} MB     {}",
                record.name,
                record.size_mb(),
                record.date
            )?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::blur::BlurResult;
    use crate::scanner::duplicate_detector::{HashFailure, MediaFile};
    use std::path::PathBuf;
    use std::time::SystemTime;

    fn record(name: &str, blur: Option<BlurResult>) -> ImageRecord {
        ImageRecord {
            name: name.to_string(),
            path: PathBuf::from(name),
            size: 3 * 1024 * 1024 / 2,
            modified: SystemTime::UNIX_EPOCH,
            date: "01/18/2026 09:30:00".to_string(),
            blur,
        }
    }

    #[test]
    fn test_duplicate_summary() {
        let report = DuplicateReport {
            duplicates: vec![MediaFile {
                name: "b.jpg".to_string(),
                path: PathBuf::from("/p/b.jpg"),
                size: 1024 * 1024,
                hash: "abc".to_string(),
            }],
            reclaimable_bytes: 1024 * 1024,
            scanned: 4,
            failures: vec![HashFailure {
                path: PathBuf::from("/p/locked.jpg"),
                reason: "permission denied".to_string(),
            }],
        };

        let text = duplicate_summary(&report, Path::new("store.json"), Duration::from_millis(1500)).unwrap();
        assert!(text.contains("Total size that can be freed is 1.00 MB."));
        assert!(text.contains("Found 4 files to scan."));
        assert!(text.contains("Duplicates found: 1"));
        assert!(text.contains("/p/locked.jpg: permission denied"));
        assert!(text.contains("Total time elapsed 1.50."));
    }

    #[test]
    fn test_plain_table() {
        let text = image_table(&[record("a.jpg", None)], SortKey::Size).unwrap();
        assert!(text.contains("Sorting by: size"));
        assert!(!text.contains("Sharpness"));
        assert!(text.contains("1.50 MB     01/18/2026 09:30:00"));
    }

    #[test]
    fn test_blur_table() {
        let records = vec![
            record("sharp.jpg", Some(BlurResult::from_variance(250.0, 100.0))),
            record("raw.nef", Some(BlurResult::uncomputed())),
        ];
        let text = image_table(&records, SortKey::Name).unwrap();
        assert!(text.contains("Sharpness"));
        assert!(text.contains("(Blur Variance:   250.00)"));
        assert!(text.contains("(Blur Variance:      N/A)"));
        assert!(text.lines().any(|l| l.starts_with("raw.nef") && l.contains("N/A")));
        assert!(text.lines().any(|l| l.starts_with("sharp.jpg") && l.contains("sharp ")));
    }
}
