use crate::catalog::PreloadedImage;
use crate::image_loader::{
    normalize_channel_mode, sample_pixel, scale_for_display, HistogramBuilder, HistogramResult,
    ImageInfo, PixelReadout,
};
use crate::settings::Settings;
use crate::viewport::DisplayTransform;

use eframe::egui::{self, TextureHandle};
use image::{DynamicImage, GenericImageView};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Preloaded(usize),
    File(PathBuf),
}

/// Everything derived from one decoded image, computed once when it is shown.
#[derive(Debug)]
pub struct LoadedImage {
    pub source: ImageSource,
    pub info: ImageInfo,
    /// Full resolution pixels, 8-bit grayscale or RGB
    pub pixels: DynamicImage,
    /// Scaled bitmap shown on screen
    pub display: DynamicImage,
    pub transform: Option<DisplayTransform>,
    pub histogram: Option<HistogramResult>,
}

impl LoadedImage {
    pub fn from_image(
        source: ImageSource,
        image: DynamicImage,
        display_box: (u32, u32),
        buckets: usize,
    ) -> Self {
        let info = ImageInfo::of(&image);
        let pixels = normalize_channel_mode(image);
        let display = scale_for_display(&pixels, display_box);
        let transform = DisplayTransform::new(pixels.dimensions(), display.dimensions());

        let histogram = match HistogramBuilder::new(buckets).build_image(&pixels) {
            Ok(h) => Some(h),
            Err(e) => {
                e.log_and_report();
                None
            }
        };

        Self {
            source,
            info,
            pixels,
            display,
            transform,
            histogram,
        }
    }
}

/// What is on screen. Every user action produces a new value instead of mutating this one.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    current: Option<Arc<LoadedImage>>,
    preloaded_index: usize,
    readout: Option<PixelReadout>,
}

impl ViewState {
    pub fn current(&self) -> Option<&Arc<LoadedImage>> {
        self.current.as_ref()
    }

    pub fn preloaded_index(&self) -> usize {
        self.preloaded_index
    }

    pub fn readout(&self) -> Option<PixelReadout> {
        self.readout
    }

    pub fn with_image(&self, image: LoadedImage) -> Self {
        let preloaded_index = match image.source {
            ImageSource::Preloaded(index) => index,
            ImageSource::File(_) => self.preloaded_index,
        };
        Self {
            current: Some(Arc::new(image)),
            preloaded_index,
            readout: None,
        }
    }

    /// Readout for a cursor at `(x, y)` in display space; none outside the image.
    pub fn with_cursor(&self, x: f32, y: f32) -> Self {
        let readout = self.current.as_ref().and_then(|img| {
            let (ox, oy) = img.transform?.map_point(x, y)?;
            let value = sample_pixel(&img.pixels, ox, oy)?;
            Some(PixelReadout { x: ox, y: oy, value })
        });
        Self {
            readout,
            ..self.clone()
        }
    }

    pub fn without_readout(&self) -> Self {
        Self {
            readout: None,
            ..self.clone()
        }
    }

    pub fn info_text(&self) -> String {
        match (&self.readout, &self.current) {
            (Some(readout), _) => readout.to_string(),
            (None, Some(img)) => img.info.to_string(),
            (None, None) => "No image loaded".to_string(),
        }
    }
}

pub struct ImageViewerApp {
    pub settings: Settings,
    pub preloaded: Vec<PreloadedImage>,
    pub view: ViewState,

    // Texture for the displayed bitmap and the image it was built from
    pub current_texture: Option<TextureHandle>,
    texture_source: Option<Arc<LoadedImage>>,

    /// Pending user notification, shown as a modal window
    pub error_dialog: Option<String>,
    pub status_message: Option<(String, Instant)>,
}

impl ImageViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let asset_dir = settings.resolve_asset_dir();
        let preloaded = crate::catalog::load_preloaded(&asset_dir);
        let mut app = Self::with_assets(settings, preloaded);

        // A path on the command line takes the place of the first preloaded image
        if let Some(arg) = std::env::args().nth(1) {
            app.open_path(PathBuf::from(arg));
        }

        app
    }

    pub fn with_assets(settings: Settings, preloaded: Vec<PreloadedImage>) -> Self {
        let mut app = Self {
            settings,
            preloaded,
            view: ViewState::default(),
            current_texture: None,
            texture_source: None,
            error_dialog: None,
            status_message: None,
        };
        app.show_preloaded(0);
        app
    }

    pub fn set_status_message(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    pub(crate) fn loaded_image(&self, source: ImageSource, image: DynamicImage) -> LoadedImage {
        LoadedImage::from_image(
            source,
            image,
            self.settings.display_box(),
            self.settings.histogram_buckets,
        )
    }

    /// Rebuild the GPU texture when the current image changed.
    pub fn sync_texture(&mut self, ctx: &egui::Context) {
        let Some(current) = self.view.current().cloned() else {
            self.current_texture = None;
            self.texture_source = None;
            return;
        };
        if self
            .texture_source
            .as_ref()
            .is_some_and(|shown| Arc::ptr_eq(shown, &current))
        {
            return;
        }

        let rgba = current.display.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let texture = ctx.load_texture(
            "current-image",
            egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()),
            egui::TextureOptions::LINEAR,
        );
        self.current_texture = Some(texture);
        self.texture_source = Some(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_loader::PixelValue;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 7])
        }))
    }

    #[test]
    fn test_loaded_image_derivations() {
        let img = LoadedImage::from_image(ImageSource::Preloaded(0), gradient(1200, 800), (600, 400), 50);
        assert_eq!(img.display.dimensions(), (600, 400));
        assert_eq!(img.info.to_string(), "Size: 1200×800 | Format: RGB");
        let transform = img.transform.unwrap();
        assert_eq!((transform.scale_x(), transform.scale_y()), (2.0, 2.0));
        let histogram = img.histogram.as_ref().unwrap();
        assert_eq!(histogram.channels.len(), 3);
        assert_eq!(histogram.channels[0].total(), 1200 * 800);
    }

    #[test]
    fn test_cursor_readout_maps_to_original() {
        let img = LoadedImage::from_image(ImageSource::Preloaded(0), gradient(1200, 800), (600, 400), 50);
        let state = ViewState::default().with_image(img);

        let hovered = state.with_cursor(100.0, 50.0);
        let readout = hovered.readout().unwrap();
        assert_eq!((readout.x, readout.y), (200, 100));
        assert_eq!(readout.value, PixelValue::Rgb(200, 100, 7));
        assert_eq!(hovered.info_text(), "X: 200, Y: 100 | RGB: (200, 100, 7)");

        // The previous value is untouched
        assert!(state.readout().is_none());

        let outside = hovered.with_cursor(650.0, 10.0);
        assert!(outside.readout().is_none());
        assert_eq!(outside.info_text(), "Size: 1200×800 | Format: RGB");
    }

    #[test]
    fn test_grayscale_readout() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 1, Luma([85])));
        let img = LoadedImage::from_image(ImageSource::File(PathBuf::from("g.png")), gray, (600, 400), 50);
        let state = ViewState::default().with_image(img).with_cursor(3.5, 0.2);
        assert_eq!(state.info_text(), "X: 3, Y: 0 | Gray: 85");
        assert_eq!(state.current().unwrap().histogram.as_ref().unwrap().channels[0].label(), "Grayscale");
    }

    #[test]
    fn test_file_source_keeps_preloaded_index() {
        let state = ViewState::default().with_image(LoadedImage::from_image(
            ImageSource::Preloaded(2),
            gradient(2, 2),
            (600, 400),
            50,
        ));
        assert_eq!(state.preloaded_index(), 2);

        let state = state.with_image(LoadedImage::from_image(
            ImageSource::File(PathBuf::from("x.png")),
            gradient(2, 2),
            (600, 400),
            50,
        ));
        assert_eq!(state.preloaded_index(), 2);
        assert_eq!(state.without_readout().info_text(), "Size: 2×2 | Format: RGB");
    }

    #[test]
    fn test_empty_state_text() {
        let state = ViewState::default().with_cursor(1.0, 1.0);
        assert!(state.readout().is_none());
        assert_eq!(state.info_text(), "No image loaded");
    }
}
