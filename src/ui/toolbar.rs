use crate::app::ImageViewerApp;
use egui::{self, Color32, Margin, RichText};

impl ImageViewerApp {
    pub fn render_toolbar(&mut self, ctx: &egui::Context) {
        let has_preloaded = !self.preloaded.is_empty();

        // Collect actions to perform after UI
        let mut open_file = false;
        let mut go_next = false;
        let mut toggle_histogram = false;

        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::from_rgb(32, 32, 36))
                    .inner_margin(Margin::symmetric(10, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .button(RichText::new("📂 Load image").size(13.0))
                        .on_hover_text("Open an image from disk (Ctrl+O)")
                        .clicked()
                    {
                        open_file = true;
                    }

                    let next = ui
                        .add_enabled(has_preloaded, egui::Button::new(RichText::new("⏵ Next image").size(13.0)))
                        .on_hover_text("Show the next preloaded image (→)")
                        .on_disabled_hover_text("No images in the preloaded folder");
                    if next.clicked() {
                        go_next = true;
                    }

                    ui.separator();

                    let mut show_histogram = self.settings.show_histogram;
                    if ui.checkbox(&mut show_histogram, "Histogram").changed() {
                        toggle_histogram = true;
                    }
                });
            });

        if open_file {
            self.open_file_dialog();
        }
        if go_next {
            self.next_preloaded();
        }
        if toggle_histogram {
            self.settings.show_histogram = !self.settings.show_histogram;
        }
    }
}
