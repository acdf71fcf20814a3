pub mod import;

pub use import::{ensure_asset_dir, load_preloaded, scan_asset_dir, PreloadedImage};

/// Folder name for preloaded images, resolved next to the executable
pub const DEFAULT_ASSET_DIR: &str = "Images";
