use image::{ColorType, DynamicImage};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    Grayscale,
    Rgb,
}

impl ChannelMode {
    /// Channel mode of an 8-bit Luma or RGB image, `None` for anything else.
    pub fn of(image: &DynamicImage) -> Option<Self> {
        match image {
            DynamicImage::ImageLuma8(_) => Some(ChannelMode::Grayscale),
            DynamicImage::ImageRgb8(_) => Some(ChannelMode::Rgb),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChannelMode::Grayscale => "Grayscale",
            ChannelMode::Rgb => "RGB",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelValue {
    Gray(u8),
    Rgb(u8, u8, u8),
}

impl fmt::Display for PixelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelValue::Gray(v) => write!(f, "Gray: {}", v),
            PixelValue::Rgb(r, g, b) => write!(f, "RGB: ({}, {}, {})", r, g, b),
        }
    }
}

/// Read one pixel of a normalized image.
pub fn sample_pixel(image: &DynamicImage, x: u32, y: u32) -> Option<PixelValue> {
    match image {
        DynamicImage::ImageLuma8(buf) => buf.get_pixel_checked(x, y).map(|p| PixelValue::Gray(p[0])),
        DynamicImage::ImageRgb8(buf) => buf
            .get_pixel_checked(x, y)
            .map(|p| PixelValue::Rgb(p[0], p[1], p[2])),
        _ => None,
    }
}

/// Live readout for the pixel under the cursor, in original-image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelReadout {
    pub x: u32,
    pub y: u32,
    pub value: PixelValue,
}

impl fmt::Display for PixelReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, Y: {} | {}", self.x, self.y, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Colour type as decoded, before normalization
    pub format: ColorType,
}

impl ImageInfo {
    pub fn of(image: &DynamicImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            format: image.color(),
        }
    }
}

/// Short mode name for a decoded colour type, ignoring bit depth.
pub fn color_mode_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 | ColorType::L16 => "L",
        ColorType::La8 | ColorType::La16 => "LA",
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => "RGB",
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => "RGBA",
        _ => "unknown",
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Size: {}×{} | Format: {}",
            self.width,
            self.height,
            color_mode_name(self.format)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_readout_formatting() {
        let rgb = PixelReadout {
            x: 600,
            y: 400,
            value: PixelValue::Rgb(12, 34, 56),
        };
        assert_eq!(rgb.to_string(), "X: 600, Y: 400 | RGB: (12, 34, 56)");

        let gray = PixelReadout {
            x: 3,
            y: 0,
            value: PixelValue::Gray(255),
        };
        assert_eq!(gray.to_string(), "X: 3, Y: 0 | Gray: 255");
    }

    #[test]
    fn test_sample_pixel() {
        let mut rgb = RgbImage::new(2, 2);
        rgb.put_pixel(1, 0, Rgb([1, 2, 3]));
        let img = DynamicImage::ImageRgb8(rgb);
        assert_eq!(sample_pixel(&img, 1, 0), Some(PixelValue::Rgb(1, 2, 3)));
        assert_eq!(sample_pixel(&img, 2, 0), None);

        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(1, 1, Luma([9])));
        assert_eq!(sample_pixel(&gray, 0, 0), Some(PixelValue::Gray(9)));
        assert_eq!(ChannelMode::of(&gray), Some(ChannelMode::Grayscale));

        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0])));
        assert_eq!(sample_pixel(&rgba, 0, 0), None);
        assert_eq!(ChannelMode::of(&rgba), None);
    }

    #[test]
    fn test_info_formatting() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(1200, 800));
        assert_eq!(ImageInfo::of(&img).to_string(), "Size: 1200×800 | Format: RGBA");
    }

    #[test]
    fn test_mode_names_ignore_bit_depth() {
        assert_eq!(color_mode_name(ColorType::L8), "L");
        assert_eq!(color_mode_name(ColorType::L16), "L");
        assert_eq!(color_mode_name(ColorType::La8), "LA");
        assert_eq!(color_mode_name(ColorType::Rgb16), "RGB");
        assert_eq!(color_mode_name(ColorType::Rgba32F), "RGBA");
    }
}
