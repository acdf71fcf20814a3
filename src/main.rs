mod app;
mod ui;


use app::ImageViewerApp;
use eframe::egui;
use pixel_lens::{catalog, image_loader, logging, settings, viewport};
use settings::Settings;

fn main() -> eframe::Result<()> {
    let settings = Settings::load();
    logging::init_tracing(settings.debug_logging);
    log::info!("Starting Pixel Lens");

    let (width, height) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Pixel Lens")
            .with_inner_size([width, height])
            .with_min_inner_size(settings.min_window_size())
            .with_icon(load_icon())
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Pixel Lens",
        native_options,
        Box::new(|cc| Ok(Box::new(ImageViewerApp::new(cc, settings)))),
    )
}

fn load_icon() -> egui::IconData {
    // Three overlapping channel discs
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];
    let centers = [(24.0, 24.0), (40.0, 24.0), (32.0, 38.0)];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let mut any = false;
            for (channel, &(cx, cy)) in centers.iter().enumerate() {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                if (dx * dx + dy * dy).sqrt() < 16.0 {
                    rgba[idx + channel] = 230;
                    any = true;
                }
            }
            if any {
                rgba[idx + 3] = 255;
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
