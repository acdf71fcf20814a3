use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Fit `original` inside `max` keeping the aspect ratio. Never upscales.
pub fn display_dimensions(original: (u32, u32), max: (u32, u32)) -> (u32, u32) {
    let (w, h) = original;
    let (max_w, max_h) = max;
    if w <= max_w && h <= max_h {
        return (w.max(1), h.max(1));
    }

    let ratio = (max_w as f64 / w as f64).min(max_h as f64 / h as f64);
    let new_w = ((w as f64 * ratio).round() as u32).clamp(1, max_w.max(1));
    let new_h = ((h as f64 * ratio).round() as u32).clamp(1, max_h.max(1));
    (new_w, new_h)
}

/// Produce the bitmap shown on screen for `image`.
pub fn scale_for_display(image: &DynamicImage, max: (u32, u32)) -> DynamicImage {
    let (w, h) = display_dimensions(image.dimensions(), max);
    if (w, h) == image.dimensions() {
        return image.clone();
    }
    image.resize_exact(w, h, FilterType::Lanczos3)
}
