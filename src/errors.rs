use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to load image '{path}': {message}")]
    ImageLoadError { path: PathBuf, message: String },

    #[error("Unsupported image format: {format}")]
    UnsupportedFormat { format: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported channel layout: {channels} channel(s)")]
    UnsupportedChannelLayout { channels: usize },

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    InvalidPixelBuffer { expected: usize, actual: usize },

    #[error("Settings error: {message}")]
    SettingsError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ViewerError>;

impl ViewerError {
    /// Returns true if this error is recoverable (user can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ViewerError::FileNotFound { .. }
                | ViewerError::ImageLoadError { .. }
                | ViewerError::UnsupportedFormat { .. }
                | ViewerError::IoError { .. }
        )
    }

    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            ViewerError::FileNotFound { .. } => "Check if the file exists and you have permission to access it.",
            ViewerError::UnsupportedFormat { .. } => "This image format is not supported. Try converting it to JPEG, PNG, BMP, GIF or TIFF.",
            ViewerError::ImageLoadError { .. } => "The image file may be corrupted. Try opening it in another viewer.",
            ViewerError::UnsupportedChannelLayout { .. } => "The histogram is only available for grayscale and RGB images.",
            ViewerError::InvalidPixelBuffer { .. } => "The decoded pixel data is inconsistent with the image size.",
            ViewerError::SettingsError { .. } | ViewerError::JsonError { .. } => "Settings could not be read. Defaults will be used instead.",
            ViewerError::IoError { .. } => "File system error occurred. Check disk space and permissions.",
        };

        format!("{}\n\n{}", base_message, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewerError::ImageLoadError { .. } => "IMAGE_LOAD_ERROR",
            ViewerError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            ViewerError::FileNotFound { .. } => "FILE_NOT_FOUND",
            ViewerError::UnsupportedChannelLayout { .. } => "UNSUPPORTED_CHANNEL_LAYOUT",
            ViewerError::InvalidPixelBuffer { .. } => "INVALID_PIXEL_BUFFER",
            ViewerError::SettingsError { .. } => "SETTINGS_ERROR",
            ViewerError::IoError { .. } => "IO_ERROR",
            ViewerError::JsonError { .. } => "JSON_ERROR",
        }
    }

    pub fn log_and_report(&self) {
        let error_code = self.error_code();
        if self.is_recoverable() {
            log::warn!("[{}] {}", error_code, self);
        } else {
            log::error!("[{}] {}", error_code, self);
        }
    }
}
