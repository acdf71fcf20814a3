use crate::errors::{Result, ViewerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";
const MIN_WINDOW_SIZE: (f32, f32) = (800.0, 600.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Display box the current image is fitted into
    pub display_width: u32,
    pub display_height: u32,

    // Histogram
    pub histogram_buckets: usize,
    pub show_histogram: bool,

    /// Folder with the preloaded images. `None` means `Images/` next to the executable.
    pub asset_dir: Option<PathBuf>,
    /// Folder the file picker opens in
    pub last_open_dir: Option<PathBuf>,

    // Window state
    pub window_size: (f32, f32),

    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_width: 600,
            display_height: 400,
            histogram_buckets: crate::image_loader::DEFAULT_BUCKETS,
            show_histogram: true,
            asset_dir: None,
            last_open_dir: None,
            window_size: (1200.0, 800.0),
            debug_logging: false,
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pixellens", "PixelLens")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                e.log_and_report();
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Err(e) = self.save_to(&path) {
                e.log_and_report();
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validated()
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validated(self) -> Result<Self> {
        if self.display_width == 0 || self.display_height == 0 {
            return Err(ViewerError::SettingsError {
                message: format!(
                    "display size must be positive, got {}x{}",
                    self.display_width, self.display_height
                ),
            });
        }
        if !(1..=256).contains(&self.histogram_buckets) {
            return Err(ViewerError::SettingsError {
                message: format!("histogram_buckets must be in 1..=256, got {}", self.histogram_buckets),
            });
        }
        Ok(self)
    }

    /// Remember the live window size. Minimized or degenerate sizes are ignored.
    pub fn record_window_size(&mut self, width: f32, height: f32) {
        let usable = width.is_finite()
            && height.is_finite()
            && width >= MIN_WINDOW_SIZE.0
            && height >= MIN_WINDOW_SIZE.1;
        if usable {
            self.window_size = (width, height);
        }
    }

    pub fn min_window_size(&self) -> [f32; 2] {
        [MIN_WINDOW_SIZE.0, MIN_WINDOW_SIZE.1]
    }

    pub fn display_box(&self) -> (u32, u32) {
        (self.display_width, self.display_height)
    }

    /// Resolve the preloaded image folder
    pub fn resolve_asset_dir(&self) -> PathBuf {
        if let Some(dir) = &self.asset_dir {
            return dir.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.join(crate::catalog::DEFAULT_ASSET_DIR)))
            .unwrap_or_else(|| PathBuf::from(crate::catalog::DEFAULT_ASSET_DIR))
    }
}
