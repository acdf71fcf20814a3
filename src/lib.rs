//! Decoding, histogram and coordinate-mapping core of Pixel Lens.
//!
//! The egui front end lives in the binary; everything here is usable headless.

pub mod catalog;
pub mod errors;
pub mod image_loader;
pub mod logging;
pub mod settings;
pub mod viewport;
