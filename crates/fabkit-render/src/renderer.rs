//! Renderer trait abstraction.

use fabkit_core::{CircularButton, OverlayGraphic, Paint};
use kurbo::{Affine, Rect, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Failed to decode overlay asset {asset:?}: {reason}")]
    AssetDecode { asset: String, reason: String },
    #[error("Unknown overlay asset: {0}")]
    UnknownAsset(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Angular extent of an arc, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sweep {
    pub start_degrees: f64,
    pub sweep_degrees: f64,
}

impl Sweep {
    /// A complete circle starting at 0°.
    pub const FULL: Self = Self {
        start_degrees: 0.0,
        sweep_degrees: 360.0,
    };

    pub fn is_full(&self) -> bool {
        self.sweep_degrees.abs() >= 360.0
    }
}

/// Per-frame settings shared by every painter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    /// Translation applied before drawing, compensating hairline rasterization.
    pub hairline_offset: f64,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Whether painters should anti-alias edges.
    pub anti_alias: bool,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            hairline_offset: 1.0,
            scale_factor: 1.0,
            anti_alias: true,
        }
    }
}

impl RenderContext {
    /// Create a new render context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hairline offset.
    pub fn with_hairline_offset(mut self, offset: f64) -> Self {
        self.hairline_offset = offset;
        self
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Enable or disable anti-aliasing.
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    /// Transform from button-local coordinates to device coordinates for
    /// a button placed at `bounds`.
    pub fn transform_for(&self, bounds: Rect) -> Affine {
        Affine::scale(self.scale_factor)
            * Affine::translate(bounds.origin().to_vec2())
            * Affine::translate(Vec2::new(self.hairline_offset, self.hairline_offset))
    }
}

/// Sink for the draw operations a button emits.
///
/// Implementations can record operations, encode a Vello scene, or paint
/// through an immediate-mode UI painter. Painting never fails; backends that
/// cannot honour an operation skip it.
pub trait Painter {
    /// Fill the arc inscribed in `rect`.
    fn fill_arc(&mut self, rect: Rect, sweep: Sweep, paint: &Paint, transform: Affine);

    /// Stroke the outline of the arc inscribed in `rect`.
    fn stroke_arc(&mut self, rect: Rect, sweep: Sweep, paint: &Paint, transform: Affine);

    /// Draw an overlay graphic fitted into `target`.
    fn draw_overlay(&mut self, overlay: &OverlayGraphic, target: Rect, transform: Affine);
}

/// Paint `button` into `bounds`.
///
/// Layers are emitted in a fixed order: filled disc, ring, overlay. The output
/// depends only on the button's style, `bounds` and `ctx`.
pub fn render_button<P: Painter + ?Sized>(
    painter: &mut P,
    button: &CircularButton,
    bounds: Rect,
    ctx: &RenderContext,
) {
    let transform = ctx.transform_for(bounds);
    let geometry = button.geometry(bounds.size());

    let mut fill = button.fill_paint();
    fill.anti_alias = ctx.anti_alias;
    painter.fill_arc(geometry.arc, Sweep::FULL, &fill, transform);

    let mut stroke = button.stroke_paint();
    stroke.anti_alias = ctx.anti_alias;
    painter.stroke_arc(geometry.arc, Sweep::FULL, &stroke, transform);

    if let (Some(overlay), Some(target)) = (button.overlay(), geometry.overlay) {
        painter.draw_overlay(overlay, target, transform);
    }
}
