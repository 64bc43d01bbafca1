//! Vello-based painter implementation.

use crate::renderer::{Painter, RenderResult, RendererError, Sweep};
use fabkit_core::{OverlayGraphic, Paint, PaintStyle};
use kurbo::{Affine, BezPath, Ellipse, Point, Rect, Shape as KurboShape, Stroke, Vec2};
use peniko::{Color, Fill};
use std::collections::HashMap;
use std::sync::Arc;
use vello::Scene;

/// Tolerance used when flattening arcs to paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Painter that encodes into a Vello scene.
pub struct VelloPainter {
    /// The Vello scene being built.
    scene: Scene,
    /// Decoded overlay images keyed by asset name.
    overlay_cache: HashMap<String, peniko::ImageData>,
}

impl Default for VelloPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloPainter {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            overlay_cache: HashMap::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Clear the scene, keeping decoded overlays.
    pub fn reset(&mut self) {
        self.scene.reset();
    }

    /// Decode an encoded image (PNG, JPEG or WebP) and make it available
    /// under `asset`.
    pub fn register_overlay(&mut self, asset: impl Into<String>, bytes: &[u8]) -> RenderResult<()> {
        let asset = asset.into();
        let decoded = ::image::load_from_memory(bytes).map_err(|e| RendererError::AssetDecode {
            asset: asset.clone(),
            reason: e.to_string(),
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        let image_data = peniko::ImageData {
            data: peniko::Blob::new(Arc::new(rgba.into_vec())),
            format: peniko::ImageFormat::Rgba8,
            width,
            height,
            alpha_type: peniko::ImageAlphaType::Alpha,
        };
        log::debug!("Registered overlay {:?} ({}x{})", asset, width, height);
        self.overlay_cache.insert(asset, image_data);
        Ok(())
    }

    /// Whether an overlay asset has been registered.
    pub fn has_overlay(&self, asset: &str) -> bool {
        self.overlay_cache.contains_key(asset)
    }

    fn overlay_image(&self, asset: &str) -> RenderResult<&peniko::ImageData> {
        self.overlay_cache
            .get(asset)
            .ok_or_else(|| RendererError::UnknownAsset(asset.to_string()))
    }
}

/// Outline of the arc inscribed in `rect`. Partial sweeps are closed through
/// the center.
fn arc_path(rect: Rect, sweep: Sweep) -> BezPath {
    let ellipse = Ellipse::from_rect(rect);
    if sweep.is_full() {
        return ellipse.to_path(PATH_TOLERANCE);
    }

    let center = rect.center();
    let radii = Vec2::new(rect.width() / 2.0, rect.height() / 2.0);
    let start = sweep.start_degrees.to_radians();
    let arc = kurbo::Arc {
        center,
        radii,
        start_angle: start,
        sweep_angle: sweep.sweep_degrees.to_radians(),
        x_rotation: 0.0,
    };

    let mut path = BezPath::new();
    path.move_to(center);
    path.line_to(Point::new(
        center.x + radii.x * start.cos(),
        center.y + radii.y * start.sin(),
    ));
    arc.to_cubic_beziers(PATH_TOLERANCE, |p1, p2, p| path.curve_to(p1, p2, p));
    path.close_path();
    path
}

impl Painter for VelloPainter {
    // Vello always anti-aliases; `paint.anti_alias` has no effect here.
    fn fill_arc(&mut self, rect: Rect, sweep: Sweep, paint: &Paint, transform: Affine) {
        let color: Color = paint.color.into();
        self.scene
            .fill(Fill::NonZero, transform, color, None, &arc_path(rect, sweep));
    }

    fn stroke_arc(&mut self, rect: Rect, sweep: Sweep, paint: &Paint, transform: Affine) {
        // Zero width is a one-pixel hairline.
        let width = match paint.style {
            PaintStyle::Stroke { width: 0 } | PaintStyle::Fill => 1.0,
            PaintStyle::Stroke { width } => width as f64,
        };
        let color: Color = paint.color.into();
        self.scene.stroke(
            &Stroke::new(width),
            transform,
            color,
            None,
            &arc_path(rect, sweep),
        );
    }

    fn draw_overlay(&mut self, overlay: &OverlayGraphic, target: Rect, transform: Affine) {
        let image_data = match self.overlay_image(&overlay.asset) {
            Ok(image_data) => image_data.clone(),
            Err(e) => {
                log::warn!("Skipping overlay: {}", e);
                return;
            }
        };
        if image_data.width == 0 || image_data.height == 0 || target.area() <= 0.0 {
            return;
        }

        let scale_x = target.width() / image_data.width as f64;
        let scale_y = target.height() / image_data.height as f64;
        let image_transform = transform
            * Affine::translate((target.x0, target.y0))
            * Affine::scale_non_uniform(scale_x, scale_y);

        self.scene.draw_image(&image_data.into(), image_transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{RenderContext, render_button};
    use fabkit_core::{CircularButton, WidgetStyle};
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = ::image::RgbaImage::from_pixel(4, 4, ::image::Rgba([255, 255, 255, 255]));
        let mut bytes = Vec::new();
        ::image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ::image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_painter_creation() {
        let painter = VelloPainter::new();
        assert!(painter.scene().encoding().is_empty());
    }

    #[test]
    fn test_render_button_encodes_scene() {
        let mut painter = VelloPainter::new();
        let button = CircularButton::from_style(WidgetStyle {
            radius: 28,
            overlay: Some(OverlayGraphic::new("ic_add")),
            ..Default::default()
        });
        painter.register_overlay("ic_add", &png_bytes()).unwrap();
        render_button(
            &mut painter,
            &button,
            Rect::new(0.0, 0.0, 56.0, 56.0),
            &RenderContext::default(),
        );
        assert!(!painter.scene().encoding().is_empty());

        painter.reset();
        assert!(painter.scene().encoding().is_empty());
        assert!(painter.has_overlay("ic_add"));
    }

    #[test]
    fn test_unknown_overlay_is_skipped() {
        let mut painter = VelloPainter::new();
        painter.draw_overlay(
            &OverlayGraphic::new("missing"),
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Affine::IDENTITY,
        );
        assert!(painter.scene().encoding().is_empty());
    }

    #[test]
    fn test_register_rejects_garbage() {
        let mut painter = VelloPainter::new();
        let result = painter.register_overlay("bad", b"not an image");
        assert!(matches!(result, Err(RendererError::AssetDecode { .. })));
        assert!(!painter.has_overlay("bad"));
    }

    #[test]
    fn test_partial_arc_path_is_closed() {
        let path = arc_path(
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Sweep {
                start_degrees: 0.0,
                sweep_degrees: 90.0,
            },
        );
        assert!(matches!(
            path.elements().last(),
            Some(kurbo::PathEl::ClosePath)
        ));
        let bbox = path.bounding_box();
        assert!((bbox.x0 - 10.0).abs() < 1e-6);
        assert!((bbox.y1 - 20.0).abs() < 1e-6);
    }
}
