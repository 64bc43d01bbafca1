//! Painter backend drawing through `egui::Painter`.

use egui::{Color32, Image, ImageSource, Pos2, Rect, Shape, Stroke, Ui};
use fabkit_core::{OverlayGraphic, Paint, PaintStyle, Rgba};
use fabkit_render::{Painter, Sweep};
use kurbo::Affine;

/// Segments used to approximate a full turn for partial arcs.
const ARC_SEGMENTS: usize = 64;

/// Convert a style color to an egui color.
pub fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Convert a kurbo rect (after `transform`) into an egui rect.
pub fn to_egui_rect(rect: kurbo::Rect, transform: Affine) -> Rect {
    let r = transform.transform_rect_bbox(rect);
    Rect::from_min_max(
        Pos2::new(r.x0 as f32, r.y0 as f32),
        Pos2::new(r.x1 as f32, r.y1 as f32),
    )
}

/// Points along the arc inscribed in `rect`, starting at the center.
pub fn pie_points(rect: Rect, sweep: Sweep) -> Vec<Pos2> {
    let center = rect.center();
    let (rx, ry) = (rect.width() / 2.0, rect.height() / 2.0);
    let steps = ((sweep.sweep_degrees.abs() / 360.0) * ARC_SEGMENTS as f64).ceil().max(1.0) as usize;
    let start = sweep.start_degrees.to_radians();
    let step = sweep.sweep_degrees.to_radians() / steps as f64;

    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let angle = start + step * i as f64;
        points.push(Pos2::new(
            center.x + rx * angle.cos() as f32,
            center.y + ry * angle.sin() as f32,
        ));
    }
    points
}

/// Paints button layers into a `Ui`.
pub struct EguiPainter<'a> {
    ui: &'a Ui,
    overlay_source: Option<ImageSource<'a>>,
}

impl<'a> EguiPainter<'a> {
    pub fn new(ui: &'a Ui) -> Self {
        Self {
            ui,
            overlay_source: None,
        }
    }

    /// Image to draw for the overlay. Without it, the overlay's asset key is
    /// used as an image URI.
    pub fn with_overlay_source(mut self, source: Option<ImageSource<'a>>) -> Self {
        self.overlay_source = source;
        self
    }
}

impl Painter for EguiPainter<'_> {
    fn fill_arc(&mut self, rect: kurbo::Rect, sweep: Sweep, paint: &Paint, transform: Affine) {
        let rect = to_egui_rect(rect, transform);
        let color = to_color32(paint.color);
        if sweep.is_full() {
            self.ui
                .painter()
                .circle_filled(rect.center(), rect.width().min(rect.height()) / 2.0, color);
        } else {
            self.ui
                .painter()
                .add(Shape::convex_polygon(pie_points(rect, sweep), color, Stroke::NONE));
        }
    }

    fn stroke_arc(&mut self, rect: kurbo::Rect, sweep: Sweep, paint: &Paint, transform: Affine) {
        let rect = to_egui_rect(rect, transform);
        let scale = transform.as_coeffs()[0].abs() as f32;
        let width = match paint.style {
            PaintStyle::Stroke { width: 0 } | PaintStyle::Fill => 1.0,
            PaintStyle::Stroke { width } => width as f32 * scale,
        };
        let stroke = Stroke::new(width, to_color32(paint.color));
        if sweep.is_full() {
            self.ui
                .painter()
                .circle_stroke(rect.center(), rect.width().min(rect.height()) / 2.0, stroke);
        } else {
            self.ui
                .painter()
                .add(Shape::closed_line(pie_points(rect, sweep), stroke));
        }
    }

    fn draw_overlay(&mut self, overlay: &OverlayGraphic, target: kurbo::Rect, transform: Affine) {
        let rect = to_egui_rect(target, transform);
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let source = self
            .overlay_source
            .clone()
            .unwrap_or_else(|| ImageSource::from(overlay.asset.clone()));
        Image::new(source).paint_at(self.ui, rect);
    }
}
