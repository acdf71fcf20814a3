use anyhow::{Context, Result};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::image_loader::{self, is_supported_image};

/// An asset decoded at startup
#[derive(Debug, Clone)]
pub struct PreloadedImage {
    pub path: PathBuf,
    pub image: DynamicImage,
}

impl PreloadedImage {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Create the asset folder if it is missing. Returns true when it was created.
pub fn ensure_asset_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create asset folder {:?}", dir))?;
    tracing::info!(dir = %dir.display(), "created asset folder, add images to it");
    Ok(true)
}

/// Supported image files directly inside `dir`, in natural file-name order.
pub fn scan_asset_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Not a folder: {:?}", dir);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_supported_image(p))
        .collect();

    files.sort_by(|a, b| {
        let a_name = a.file_name().map(|n| n.to_string_lossy().to_lowercase()).unwrap_or_default();
        let b_name = b.file_name().map(|n| n.to_string_lossy().to_lowercase()).unwrap_or_default();
        natord::compare(&a_name, &b_name)
    });

    Ok(files)
}

/// Decode every asset in `dir` eagerly, converting each to RGB.
///
/// A missing folder is created and treated as empty. Files that fail to decode are
/// logged and skipped.
pub fn load_preloaded(dir: &Path) -> Vec<PreloadedImage> {
    match ensure_asset_dir(dir) {
        Ok(true) => return Vec::new(),
        Ok(false) => {}
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "asset folder unavailable");
            return Vec::new();
        }
    }

    let files = match scan_asset_dir(dir) {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "failed to scan asset folder");
            return Vec::new();
        }
    };

    if files.is_empty() {
        tracing::info!(dir = %dir.display(), "no images found in asset folder");
        return Vec::new();
    }

    let mut loaded = Vec::with_capacity(files.len());
    for path in files {
        match image_loader::load_image(&path) {
            Ok(img) => {
                tracing::debug!(path = %path.display(), "loaded preloaded image");
                loaded.push(PreloadedImage {
                    path,
                    image: DynamicImage::ImageRgb8(img.to_rgb8()),
                });
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping undecodable image");
            }
        }
    }

    tracing::info!(count = loaded.len(), dir = %dir.display(), "preloaded images");
    loaded
}
