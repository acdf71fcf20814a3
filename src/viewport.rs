//! Mapping between the scaled-for-display bitmap and the original pixel buffer.
//!
//! The displayed bitmap is an aspect-preserving thumbnail, but integer rounding of its
//! dimensions means the horizontal and vertical ratios can differ slightly, so both axes
//! carry their own scale factor.

/// Ratio of original to displayed size on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    scale_x: f64,
    scale_y: f64,
    original: (u32, u32),
    display: (u32, u32),
}

impl DisplayTransform {
    /// Returns `None` when the display has a zero dimension.
    pub fn new(original: (u32, u32), display: (u32, u32)) -> Option<Self> {
        if display.0 == 0 || display.1 == 0 {
            return None;
        }
        Some(Self {
            scale_x: original.0 as f64 / display.0 as f64,
            scale_y: original.1 as f64 / display.1 as f64,
            original,
            display,
        })
    }

    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Map a point in display space to a pixel index in original space.
    pub fn map_point(&self, x: f32, y: f32) -> Option<(u32, u32)> {
        project(x, y, (self.scale_x, self.scale_y), self.display, self.original)
    }
}

/// Translate a cursor position on the displayed bitmap into original-image pixel indices.
///
/// Returns `None` when the cursor lies outside `[0, display_width) × [0, display_height)`
/// or either image has a zero dimension. The result is clamped below the original size,
/// so float rounding can never produce an index one past the last pixel.
pub fn map_to_original(
    x: f32,
    y: f32,
    display_width: u32,
    display_height: u32,
    original_width: u32,
    original_height: u32,
) -> Option<(u32, u32)> {
    let scale = (
        original_width as f64 / display_width as f64,
        original_height as f64 / display_height as f64,
    );
    project(
        x,
        y,
        scale,
        (display_width, display_height),
        (original_width, original_height),
    )
}

fn project(
    x: f32,
    y: f32,
    scale: (f64, f64),
    display: (u32, u32),
    original: (u32, u32),
) -> Option<(u32, u32)> {
    let (x, y) = (x as f64, y as f64);

    // Negated form so NaN also lands here
    if !(x >= 0.0 && x < display.0 as f64 && y >= 0.0 && y < display.1 as f64) {
        return None;
    }
    if original.0 == 0 || original.1 == 0 {
        return None;
    }

    let mapped_x = (x * scale.0).floor() as u32;
    let mapped_y = (y * scale.1).floor() as u32;
    Some((mapped_x.min(original.0 - 1), mapped_y.min(original.1 - 1)))
}
