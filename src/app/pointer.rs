use super::ImageViewerApp;

impl ImageViewerApp {
    /// Cursor moved to `(x, y)` relative to the top-left of the displayed bitmap.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.view = self.view.with_cursor(x, y);
    }

    pub fn pointer_left(&mut self) {
        if self.view.readout().is_some() {
            self.view = self.view.without_readout();
        }
    }
}
