use crate::app::ImageViewerApp;
use egui::{self, Color32, RichText, Vec2};

impl ImageViewerApp {
    pub fn render_dialogs(&mut self, ctx: &egui::Context) {
        self.render_error_dialog(ctx);
    }

    fn render_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_dialog.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .default_width(380.0)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RichText::new(&message).color(Color32::from_rgb(230, 230, 230)));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.error_dialog = None;
        }
    }
}
