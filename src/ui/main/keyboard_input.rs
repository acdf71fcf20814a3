use crate::app::ImageViewerApp;

impl ImageViewerApp {
    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // Keys are swallowed while the error window is up
        if self.error_dialog.is_some() {
            if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Enter)) {
                self.error_dialog = None;
            }
            return;
        }

        let (next, open) = ctx.input(|i| {
            let next = i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space);
            let open = i.modifiers.command && i.key_pressed(egui::Key::O);
            (next, open)
        });

        if next {
            self.next_preloaded();
        }
        if open {
            self.open_file_dialog();
        }
    }
}
