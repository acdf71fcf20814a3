use crate::app::ImageViewerApp;
use crate::image_loader::ChannelMode;
use egui::{self, Color32, Margin, RichText};

impl ImageViewerApp {
    pub(crate) fn render_statusbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("statusbar")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::from_rgb(25, 25, 28))
                    .inner_margin(Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // Live pixel readout, or the image size and format
                    ui.label(
                        RichText::new(self.view.info_text())
                            .color(Color32::WHITE)
                            .monospace()
                            .size(12.0),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some((msg, time)) = &self.status_message {
                            if time.elapsed().as_secs() < 3 {
                                ui.label(
                                    RichText::new(msg)
                                        .color(Color32::from_rgb(100, 200, 100))
                                        .size(11.0),
                                );
                            }
                        }

                        if let Some(img) = self.view.current() {
                            if let Some(t) = img.transform {
                                ui.label(
                                    RichText::new(format!("Display 1:{:.2}", t.scale_x().max(t.scale_y())))
                                        .color(Color32::GRAY)
                                        .size(11.0),
                                );
                            }
                            if let Some(mode) = ChannelMode::of(&img.pixels) {
                                ui.label(RichText::new(mode.label()).color(Color32::GRAY).size(11.0));
                            }
                        }

                        if !self.preloaded.is_empty() {
                            ui.label(
                                RichText::new(format!(
                                    "{} / {}",
                                    self.view.preloaded_index() + 1,
                                    self.preloaded.len()
                                ))
                                .color(Color32::GRAY)
                                .size(11.0),
                            );
                        }
                    });
                });
            });
    }
}
