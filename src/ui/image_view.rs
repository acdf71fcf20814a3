use crate::app::ImageViewerApp;
use egui::{self, Color32, CornerRadius, Rect, Stroke, StrokeKind};

impl ImageViewerApp {
    pub fn render_main_view(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(Color32::from_rgb(20, 20, 22)))
            .show(ctx, |ui| {
                let available = ui.available_size();
                let response = ui.allocate_response(available, egui::Sense::hover());
                let rect = response.rect;

                let Some(tex) = &self.current_texture else {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "The image will appear here",
                        egui::FontId::proportional(16.0),
                        Color32::GRAY,
                    );
                    return;
                };

                // Displayed bitmap is drawn 1:1 so display space equals screen points
                let image_rect = Rect::from_center_size(rect.center(), tex.size_vec2());
                ui.painter().image(
                    tex.id(),
                    image_rect,
                    Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
                ui.painter().rect_stroke(
                    image_rect.expand(1.0),
                    CornerRadius::ZERO,
                    Stroke::new(1.0, Color32::from_rgb(60, 60, 66)),
                    StrokeKind::Outside,
                );

                match response.hover_pos() {
                    Some(pos) if image_rect.contains(pos) => {
                        let local = pos - image_rect.min;
                        self.pointer_moved(local.x, local.y);
                    }
                    _ => self.pointer_left(),
                }
            });
    }
}
