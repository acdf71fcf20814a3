use crate::errors::{Result, ViewerError};
use image::{DynamicImage, GenericImageView};
use std::path::Path;

const MAX_FILE_BYTES: u64 = 500 * 1024 * 1024;
const MMAP_THRESHOLD_BYTES: u64 = 50 * 1024 * 1024;
const MAX_MEGAPIXELS: u64 = 100;

pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(ViewerError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    if !super::extensions::is_supported_image(path) {
        let format = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        return Err(ViewerError::UnsupportedFormat { format });
    }

    let file_size = std::fs::metadata(path)?.len();
    if file_size > MAX_FILE_BYTES {
        return Err(ViewerError::ImageLoadError {
            path: path.to_path_buf(),
            message: format!(
                "File too large: {}MB (max {}MB)",
                file_size / (1024 * 1024),
                MAX_FILE_BYTES / (1024 * 1024)
            ),
        });
    }

    let started = std::time::Instant::now();
    let img = if file_size > MMAP_THRESHOLD_BYTES {
        load_image_memory_mapped(path)?
    } else {
        image::open(path).map_err(|e| ViewerError::ImageLoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    let (width, height) = img.dimensions();
    let megapixels = (width as u64 * height as u64) / 1_000_000;
    if megapixels > MAX_MEGAPIXELS {
        return Err(ViewerError::ImageLoadError {
            path: path.to_path_buf(),
            message: format!("Image too large: {}MP (max {}MP)", megapixels, MAX_MEGAPIXELS),
        });
    }

    tracing::debug!(
        path = %path.display(),
        width,
        height,
        color = ?img.color(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "decoded image"
    );
    Ok(img)
}

fn load_image_memory_mapped(path: &Path) -> Result<DynamicImage> {
    use memmap2::Mmap;
    use std::fs::File;

    let file = File::open(path)?;

    // The mapping is read-only and dropped before this function returns
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| ViewerError::ImageLoadError {
        path: path.to_path_buf(),
        message: format!("Memory mapping failed: {}", e),
    })?;

    image::load_from_memory(&mmap).map_err(|e| ViewerError::ImageLoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Collapse any decoded layout to 8-bit grayscale or 8-bit RGB.
pub fn normalize_channel_mode(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => image,
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => DynamicImage::ImageLuma8(image.to_luma8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, Rgba, RgbaImage};

    #[test]
    fn test_missing_file() {
        let err = load_image(Path::new("/definitely/not/here.png")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = load_image(&path).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_FORMAT");
    }

    #[test]
    fn test_corrupt_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"\x89PNG but not really").unwrap();

        let err = load_image(&path).unwrap_err();
        assert_eq!(err.error_code(), "IMAGE_LOAD_ERROR");
    }

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");
        RgbaImage::from_pixel(5, 3, Rgba([1, 2, 3, 255])).save(&path).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!(img.dimensions(), (5, 3));
    }

    #[test]
    fn test_normalize_channel_mode() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 40])));
        let normalized = normalize_channel_mode(rgba);
        assert!(matches!(normalized, DynamicImage::ImageRgb8(_)));
        assert_eq!(normalized.to_rgb8().get_pixel(1, 1).0, [10, 20, 30]);

        let gray_alpha = DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(2, 2, LumaA([77, 0])));
        let normalized = normalize_channel_mode(gray_alpha);
        assert!(matches!(normalized, DynamicImage::ImageLuma8(_)));
        assert_eq!(normalized.as_luma8().unwrap().get_pixel(0, 0).0, [77]);
    }
}
