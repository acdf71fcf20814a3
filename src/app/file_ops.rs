use crate::image_loader::{self, SUPPORTED_EXTENSIONS};
use eframe::egui;
use std::path::PathBuf;

use super::{ImageSource, ImageViewerApp};

impl ImageViewerApp {
    pub fn open_file_dialog(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Select an image")
            .add_filter("Image files", SUPPORTED_EXTENSIONS);
        if let Some(dir) = &self.settings.last_open_dir {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_file() {
            self.open_path(path);
        }
    }

    /// Decode and show `path`. On failure the current image stays and the user is notified.
    pub fn open_path(&mut self, path: PathBuf) -> bool {
        match image_loader::load_image(&path) {
            Ok(image) => {
                if let Some(parent) = path.parent() {
                    self.settings.last_open_dir = Some(parent.to_path_buf());
                }
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                let loaded = self.loaded_image(ImageSource::File(path), image);
                self.view = self.view.with_image(loaded);
                self.set_status_message(format!("Opened {}", name));
                true
            }
            Err(e) => {
                e.log_and_report();
                self.error_dialog = Some(e.user_message());
                false
            }
        }
    }

    pub fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.open_dropped(dropped);
        }
    }

    /// Open the first dropped regular file. Unsupported or broken files go through the
    /// same error notification as the file picker.
    pub fn open_dropped(&mut self, paths: Vec<PathBuf>) -> bool {
        match paths.into_iter().find(|path| path.is_file()) {
            Some(path) => self.open_path(path),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use image::{GrayImage, Luma};

    #[test]
    fn test_open_path_replaces_current_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(8, 4, Luma([17])).save(&path).unwrap();

        let mut app = ImageViewerApp::with_assets(Settings::default(), Vec::new());
        assert!(app.open_path(path.clone()));

        let current = app.view.current().unwrap();
        assert_eq!(current.source, ImageSource::File(path));
        assert_eq!(current.info.to_string(), "Size: 8×4 | Format: L");
        assert_eq!(app.settings.last_open_dir.as_deref(), Some(dir.path()));
        assert!(app.error_dialog.is_none());
    }

    #[test]
    fn test_failed_open_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        let bad = dir.path().join("bad.png");
        GrayImage::from_pixel(2, 2, Luma([1])).save(&good).unwrap();
        std::fs::write(&bad, b"not an image").unwrap();

        let mut app = ImageViewerApp::with_assets(Settings::default(), Vec::new());
        assert!(app.open_path(good.clone()));
        assert!(!app.open_path(bad));

        assert_eq!(app.view.current().unwrap().source, ImageSource::File(good));
        assert!(app.error_dialog.as_deref().unwrap().contains("may be corrupted"));
    }

    #[test]
    fn test_dropped_unsupported_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        let notes = dir.path().join("notes.txt");
        GrayImage::from_pixel(2, 2, Luma([1])).save(&good).unwrap();
        std::fs::write(&notes, b"shopping list").unwrap();

        let mut app = ImageViewerApp::with_assets(Settings::default(), Vec::new());
        assert!(app.open_dropped(vec![good.clone()]));
        assert!(!app.open_dropped(vec![dir.path().to_path_buf(), notes]));

        assert_eq!(app.view.current().unwrap().source, ImageSource::File(good));
        assert!(app.error_dialog.as_deref().unwrap().contains("not supported"));
    }

    #[test]
    fn test_dropped_folder_alone_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = ImageViewerApp::with_assets(Settings::default(), Vec::new());
        assert!(!app.open_dropped(vec![dir.path().to_path_buf()]));
        assert!(app.error_dialog.is_none());
        assert!(app.view.current().is_none());
    }
}
