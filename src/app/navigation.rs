use super::{ImageSource, ImageViewerApp};

impl ImageViewerApp {
    pub fn show_preloaded(&mut self, index: usize) {
        let Some(preloaded) = self.preloaded.get(index) else {
            return;
        };
        let loaded = self.loaded_image(ImageSource::Preloaded(index), preloaded.image.clone());
        log::debug!("Showing preloaded image {} ({})", index, preloaded.file_name());
        self.view = self.view.with_image(loaded);
    }

    /// Advance through the preloaded images, wrapping at the end.
    pub fn next_preloaded(&mut self) {
        if self.preloaded.is_empty() {
            return;
        }
        let next = (self.view.preloaded_index() + 1) % self.preloaded.len();
        self.show_preloaded(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PreloadedImage;
    use crate::settings::Settings;
    use image::{DynamicImage, Rgb, RgbImage};
    use std::path::PathBuf;

    fn preloaded(count: usize) -> Vec<PreloadedImage> {
        (0..count)
            .map(|i| PreloadedImage {
                path: PathBuf::from(format!("img{}.png", i)),
                image: DynamicImage::ImageRgb8(RgbImage::from_pixel(
                    i as u32 + 1,
                    1,
                    Rgb([i as u8, 0, 0]),
                )),
            })
            .collect()
    }

    fn current_source(app: &ImageViewerApp) -> Option<ImageSource> {
        app.view.current().map(|img| img.source.clone())
    }

    #[test]
    fn test_first_preloaded_is_shown() {
        let app = ImageViewerApp::with_assets(Settings::default(), preloaded(3));
        assert_eq!(current_source(&app), Some(ImageSource::Preloaded(0)));
    }

    #[test]
    fn test_next_wraps_around() {
        let mut app = ImageViewerApp::with_assets(Settings::default(), preloaded(3));
        app.next_preloaded();
        assert_eq!(current_source(&app), Some(ImageSource::Preloaded(1)));
        app.next_preloaded();
        app.next_preloaded();
        assert_eq!(current_source(&app), Some(ImageSource::Preloaded(0)));
        assert_eq!(app.view.current().unwrap().info.width, 1);
    }

    #[test]
    fn test_empty_asset_set() {
        let mut app = ImageViewerApp::with_assets(Settings::default(), Vec::new());
        app.next_preloaded();
        assert!(app.view.current().is_none());
        app.show_preloaded(5);
        assert!(app.view.current().is_none());
    }
}
