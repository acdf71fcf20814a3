use crate::app::ImageViewerApp;

impl eframe::App for ImageViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.handle_keyboard(ctx);

        // Upload the displayed bitmap before any panel paints it
        self.sync_texture(ctx);

        // Side and bottom panels must be added before the central panel
        self.render_toolbar(ctx);
        self.render_statusbar(ctx);
        if self.settings.show_histogram {
            self.render_histogram_panel(ctx);
        }
        self.render_main_view(ctx);

        self.render_dialogs(ctx);

        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.settings.record_window_size(rect.width(), rect.height());
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.save();
    }
}
