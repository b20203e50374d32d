//! Blur detection using Laplacian variance
//!
//! The Laplacian responds to edges. Sharp images have well defined edges and
//! therefore a high variance in the filtered response; blurry ones do not.

use image::{DynamicImage, GrayImage, Luma};
use std::path::Path;
use tracing::warn;

use crate::error::{MediaError, Result};
use crate::scanner::file_scanner::{has_extension, BLUR_EXTENSIONS};

/// Variance below which an image counts as blurry
pub const DEFAULT_BLUR_THRESHOLD: f64 = 100.0;

/// Sharpness verdict for one image
///
/// Both fields are `None` when the score was not computed, either because
/// the format is unsupported or the file could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlurResult {
    pub variance: Option<f64>,
    pub is_blurry: Option<bool>,
}

impl BlurResult {
    pub fn uncomputed() -> Self {
        Self::default()
    }

    /// Classify a measured variance against `threshold`
    pub fn from_variance(variance: f64, threshold: f64) -> Self {
        Self {
            variance: Some(variance),
            is_blurry: Some(variance < threshold),
        }
    }

    /// Display label: `blurry`, `sharp` or `N/A`
    pub fn status(&self) -> &'static str {
        match self.is_blurry {
            Some(true) => "blurry",
            Some(false) => "sharp",
            None => "N/A",
        }
    }
}

/// Population variance of the 3x3 Laplacian response
///
/// Kernel `[0 1 0; 1 -4 1; 0 1 0]`, border pixels mirrored without repeating
/// the edge (reflect-101).
pub fn laplacian_variance(gray: &GrayImage) -> f64 {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return 0.0;
    }

    let reflect = |i: i64, len: u32| -> u32 {
        let len = len as i64;
        if len == 1 {
            return 0;
        }
        let r = if i < 0 {
            -i
        } else if i >= len {
            2 * len - 2 - i
        } else {
            i
        };
        r as u32
    };
    let px = |x: i64, y: i64| gray.get_pixel(reflect(x, width), reflect(y, height))[0] as f64;

    let n = (width as f64) * (height as f64);
    let mut sum = 0.0;
    let mut sum_sq = 0.0;

    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let laplacian =
                px(x, y - 1) + px(x, y + 1) + px(x - 1, y) + px(x + 1, y) - 4.0 * px(x, y);
            sum += laplacian;
            sum_sq += laplacian * laplacian;
        }
    }

    let mean = sum / n;
    (sum_sq / n - mean * mean).max(0.0)
}

/// BT.601 luma, `0.299 R + 0.587 G + 0.114 B` rounded to nearest
///
/// Fixed point with 14 fractional bits. Alpha is ignored.
pub fn to_gray_bt601(image: &DynamicImage) -> GrayImage {
    let rgb = image.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let luma = (r as u32 * 4899 + g as u32 * 9617 + b as u32 * 1868 + (1 << 13)) >> 14;
        Luma([luma as u8])
    })
}

/// Decode `path` as grayscale and measure its Laplacian variance
pub fn measure_sharpness(path: &Path) -> Result<f64> {
    let image = image::open(path).map_err(|source| MediaError::UndecodableImage {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(laplacian_variance(&to_gray_bt601(&image)))
}

/// Score one image
///
/// Empty paths and formats outside the blur subset are not scored. Decode
/// failures are logged and reported as uncomputed.
pub fn score_image(path: &Path, threshold: f64) -> BlurResult {
    let name = path.to_string_lossy();
    if name.is_empty() || !has_extension(&name, BLUR_EXTENSIONS) {
        return BlurResult::uncomputed();
    }

    match measure_sharpness(path) {
        Ok(variance) => BlurResult::from_variance(variance, threshold),
        Err(e) => {
            warn!(error = %e, "blur scoring skipped");
            BlurResult::uncomputed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn checkerboard(size: u32) -> GrayImage {
        GrayImage::from_fn(size, size, |x, y| {
            if (x + y) % 2 == 0 {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        })
    }

    #[test]
    fn test_threshold_classification() {
        let blurry = BlurResult::from_variance(50.0, DEFAULT_BLUR_THRESHOLD);
        assert_eq!(blurry.is_blurry, Some(true));
        assert_eq!(blurry.status(), "blurry");

        let sharp = BlurResult::from_variance(150.0, DEFAULT_BLUR_THRESHOLD);
        assert_eq!(sharp.is_blurry, Some(false));
        assert_eq!(sharp.status(), "sharp");

        // Threshold itself is not blurry
        assert_eq!(BlurResult::from_variance(100.0, 100.0).is_blurry, Some(false));
    }

    #[test]
    fn test_uncomputed_status() {
        let result = BlurResult::uncomputed();
        assert_eq!(result.variance, None);
        assert_eq!(result.status(), "N/A");
    }

    #[test]
    fn test_flat_image_has_zero_variance() {
        let flat = GrayImage::from_pixel(16, 16, Luma([128u8]));
        assert_eq!(laplacian_variance(&flat), 0.0);
    }

    #[test]
    fn test_checkerboard_variance() {
        // Every response is +-1020 with zero mean
        let variance = laplacian_variance(&checkerboard(8));
        assert!((variance - 1020.0 * 1020.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_pixel_image() {
        let one = GrayImage::from_pixel(1, 1, Luma([42u8]));
        assert_eq!(laplacian_variance(&one), 0.0);
    }

    #[test]
    fn test_score_image_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let sharp_path = temp_dir.path().join("sharp.png");
        let flat_path = temp_dir.path().join("flat.png");
        checkerboard(32).save(&sharp_path).unwrap();
        GrayImage::from_pixel(32, 32, Luma([200u8])).save(&flat_path).unwrap();

        let sharp = score_image(&sharp_path, DEFAULT_BLUR_THRESHOLD);
        assert_eq!(sharp.is_blurry, Some(false));

        let flat = score_image(&flat_path, DEFAULT_BLUR_THRESHOLD);
        assert_eq!(flat.is_blurry, Some(true));
        assert_eq!(flat.variance, Some(0.0));
    }

    #[test]
    fn test_bt601_gray_conversion() {
        let mut rgb = RgbImage::new(4, 1);
        rgb.put_pixel(0, 0, Rgb([0, 0, 30]));
        rgb.put_pixel(1, 0, Rgb([255, 0, 0]));
        rgb.put_pixel(2, 0, Rgb([0, 255, 0]));
        rgb.put_pixel(3, 0, Rgb([200, 200, 200]));

        let gray = to_gray_bt601(&DynamicImage::ImageRgb8(rgb));
        let values: Vec<u8> = gray.pixels().map(|p| p[0]).collect();
        assert_eq!(values, vec![3, 76, 150, 200]);
    }

    #[test]
    fn test_colored_checkerboard_uses_bt601_luma() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dark_blue.png");
        RgbImage::from_fn(32, 32, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([0u8, 0, 0])
            } else {
                Rgb([0u8, 0, 30])
            }
        })
        .save(&path)
        .unwrap();

        // Gray levels 0 and 3 give Laplacian responses of +-12
        let result = score_image(&path, DEFAULT_BLUR_THRESHOLD);
        assert_eq!(result.variance, Some(144.0));
        assert_eq!(result.is_blurry, Some(false));
    }

    #[test]
    fn test_unsupported_and_empty_paths_are_uncomputed() {
        assert_eq!(score_image(Path::new("raw.nef"), 100.0), BlurResult::uncomputed());
        assert_eq!(score_image(&PathBuf::new(), 100.0), BlurResult::uncomputed());
    }

    #[test]
    fn test_undecodable_image_is_uncomputed() {
        let temp_dir = TempDir::new().unwrap();
        let bogus = temp_dir.path().join("broken.jpg");
        std::fs::write(&bogus, b"definitely not a jpeg").unwrap();

        assert_eq!(score_image(&bogus, 100.0), BlurResult::uncomputed());
        assert!(matches!(
            measure_sharpness(&bogus),
            Err(MediaError::UndecodableImage { .. })
        ));
    }
}
