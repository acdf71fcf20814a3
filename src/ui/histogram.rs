use crate::app::ImageViewerApp;
use crate::image_loader::{HistogramChannel, HistogramResult};
use egui::{self, Align2, Color32, CornerRadius, FontId, Painter, Rect, Stroke, Vec2};

const PANEL_BG: Color32 = Color32::from_rgb(34, 34, 34);
const GRID: Color32 = Color32::from_gray(58);
const AXIS_TEXT: Color32 = Color32::from_rgb(180, 180, 180);
const BAR_ALPHA: u8 = 178;

// Room for tick labels around the plot area
const MARGIN_LEFT: f32 = 48.0;
const MARGIN_RIGHT: f32 = 12.0;
const MARGIN_TOP: f32 = 30.0;
const MARGIN_BOTTOM: f32 = 36.0;

fn channel_color(channel: HistogramChannel) -> Color32 {
    match channel {
        HistogramChannel::Gray => Color32::from_rgba_unmultiplied(160, 160, 160, BAR_ALPHA),
        HistogramChannel::Red => Color32::from_rgba_unmultiplied(230, 60, 60, BAR_ALPHA),
        HistogramChannel::Green => Color32::from_rgba_unmultiplied(60, 200, 60, BAR_ALPHA),
        HistogramChannel::Blue => Color32::from_rgba_unmultiplied(70, 110, 255, BAR_ALPHA),
    }
}

impl ImageViewerApp {
    pub fn render_histogram_panel(&self, ctx: &egui::Context) {
        egui::SidePanel::right("histogram")
            .resizable(true)
            .default_width(ctx.screen_rect().width() * 0.45)
            .min_width(260.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                let size = Vec2::new(ui.available_width(), ui.available_height().min(420.0));
                let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
                let rect = response.rect;
                painter.rect_filled(rect, CornerRadius::same(2), PANEL_BG);

                let histogram = self.view.current().and_then(|img| img.histogram.as_ref());
                match histogram {
                    Some(h) => draw_histogram(&painter, rect, h),
                    None => {
                        let text = if self.view.current().is_some() {
                            "No histogram for this image"
                        } else {
                            "The histogram will appear here"
                        };
                        painter.text(rect.center(), Align2::CENTER_CENTER, text, FontId::proportional(14.0), Color32::GRAY);
                    }
                }
            });
    }
}

fn draw_histogram(painter: &Painter, rect: Rect, histogram: &HistogramResult) {
    let plot = Rect::from_min_max(
        rect.min + Vec2::new(MARGIN_LEFT, MARGIN_TOP),
        rect.max - Vec2::new(MARGIN_RIGHT, MARGIN_BOTTOM),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }
    let max_count = histogram.max_count().max(1) as f32;
    let small = FontId::proportional(10.0);

    painter.text(
        egui::pos2(rect.center().x, rect.top() + 6.0),
        Align2::CENTER_TOP,
        "Color histogram",
        FontId::proportional(14.0),
        Color32::WHITE,
    );

    let pixels = histogram.channels.first().map(|c| c.total()).unwrap_or(0);
    painter.text(
        egui::pos2(rect.right() - 8.0, rect.top() + 8.0),
        Align2::RIGHT_TOP,
        format!("{} buckets · {} px", histogram.bucket_count, format_count(pixels)),
        small.clone(),
        AXIS_TEXT,
    );

    // Horizontal grid with count ticks
    for step in 0..=4 {
        let t = step as f32 / 4.0;
        let y = plot.bottom() - t * plot.height();
        painter.hline(plot.x_range(), y, Stroke::new(1.0, GRID));
        painter.text(
            egui::pos2(plot.left() - 4.0, y),
            Align2::RIGHT_CENTER,
            format_count((max_count * t).round() as u64),
            small.clone(),
            AXIS_TEXT,
        );
    }

    // Vertical grid with value ticks
    for value in (0..=250).step_by(50) {
        let x = plot.left() + value as f32 / 256.0 * plot.width();
        painter.vline(x, plot.y_range(), Stroke::new(1.0, GRID));
        painter.text(
            egui::pos2(x, plot.bottom() + 3.0),
            Align2::CENTER_TOP,
            value.to_string(),
            small.clone(),
            AXIS_TEXT,
        );
    }

    for channel in &histogram.channels {
        let color = channel_color(channel.channel);
        for bucket in channel.buckets().filter(|b| b.count > 0) {
            let x0 = plot.left() + bucket.range.start / 256.0 * plot.width();
            let x1 = plot.left() + bucket.range.end / 256.0 * plot.width();
            let h = bucket.count as f32 / max_count * plot.height();
            let bar = Rect::from_min_max(egui::pos2(x0, plot.bottom() - h), egui::pos2(x1, plot.bottom()));
            painter.rect_filled(bar, CornerRadius::ZERO, color);
        }
    }

    painter.text(
        egui::pos2(plot.center().x, rect.bottom() - 4.0),
        Align2::CENTER_BOTTOM,
        "Pixel value",
        FontId::proportional(11.0),
        AXIS_TEXT,
    );
    painter.text(
        egui::pos2(rect.left() + 6.0, plot.top() - 4.0),
        Align2::LEFT_BOTTOM,
        "Count",
        FontId::proportional(11.0),
        AXIS_TEXT,
    );

    // Legend in the top-right corner of the plot
    let mut y = plot.top() + 6.0;
    for channel in &histogram.channels {
        let swatch = Rect::from_min_size(egui::pos2(plot.right() - 86.0, y), Vec2::splat(10.0));
        painter.rect_filled(swatch, CornerRadius::same(2), channel_color(channel.channel));
        painter.text(
            egui::pos2(swatch.right() + 6.0, swatch.center().y),
            Align2::LEFT_CENTER,
            channel.label(),
            small.clone(),
            Color32::WHITE,
        );
        y += 16.0;
    }
}

fn format_count(count: u64) -> String {
    match count {
        c if c >= 1_000_000 => format!("{:.1}M", c as f64 / 1_000_000.0),
        c if c >= 10_000 => format!("{}k", c / 1000),
        c => c.to_string(),
    }
}
