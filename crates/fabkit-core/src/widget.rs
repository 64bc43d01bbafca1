//! The circular action button.
//!
//! A [`CircularButton`] owns its [`WidgetStyle`], answers the host's two-pass
//! measure protocol and exposes the geometry a renderer needs. Style is
//! resolved once at construction; afterwards it only changes through the
//! setters, each of which reports an [`Invalidation`] to the host.

use crate::config::{ConfigBundle, ResolveResult, ResolverConfig, clamp_inset, resolve};
use crate::color::Rgba;
use crate::measure::{MeasurePolicy, MeasureSpec};
use crate::style::{DEFAULT_RADIUS, OverlayGraphic, Paint, SizeClass, WidgetStyle};
use kurbo::{Rect, Size};
use std::fmt;

/// What the host must redo after a style change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invalidation {
    /// Geometry changed: remeasure, then redraw.
    Layout,
    /// Only appearance changed: redraw.
    Paint,
}

/// Size reported at the end of a measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasuredSize {
    pub width: u32,
    pub height: u32,
}

impl MeasuredSize {
    pub fn to_size(self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
}

/// Geometry used to paint the button inside its bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonGeometry {
    /// Square box holding the disc and its ring.
    pub arc: Rect,
    /// Box the overlay graphic is fitted into, when an overlay is set.
    pub overlay: Option<Rect>,
}

type StyleCallback = Box<dyn FnMut(Invalidation)>;

/// A circular floating action button.
pub struct CircularButton {
    style: WidgetStyle,
    policy: MeasurePolicy,
    /// Radius derived from the first measure pass when the style radius is 0.
    derived_radius: Option<u32>,
    bounding_arc: Option<Rect>,
    on_style_changed: Option<StyleCallback>,
}

impl fmt::Debug for CircularButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularButton")
            .field("style", &self.style)
            .field("policy", &self.policy)
            .field("derived_radius", &self.derived_radius)
            .field("bounding_arc", &self.bounding_arc)
            .finish_non_exhaustive()
    }
}

impl Default for CircularButton {
    fn default() -> Self {
        Self::from_style(WidgetStyle::default())
    }
}

impl CircularButton {
    /// Resolve `bundle` and build a button from it.
    pub fn new(bundle: &ConfigBundle, config: &ResolverConfig) -> ResolveResult<Self> {
        Ok(Self::from_style(resolve(bundle, config)?))
    }

    /// Build a button from an already resolved style.
    pub fn from_style(style: WidgetStyle) -> Self {
        Self {
            style,
            policy: MeasurePolicy::default(),
            derived_radius: None,
            bounding_arc: None,
            on_style_changed: None,
        }
    }

    /// Use a different measure policy.
    pub fn with_policy(mut self, policy: MeasurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register the callback notified after every effective style change.
    pub fn set_on_style_changed(&mut self, callback: impl FnMut(Invalidation) + 'static) {
        self.on_style_changed = Some(Box::new(callback));
    }

    pub fn style(&self) -> &WidgetStyle {
        &self.style
    }

    pub fn policy(&self) -> MeasurePolicy {
        self.policy
    }

    /// Radius in use: the style radius, or the one derived while measuring.
    pub fn effective_radius(&self) -> u32 {
        match self.style.radius {
            0 => self.derived_radius.unwrap_or(0),
            r => r,
        }
    }

    /// Natural diameter offered to non-exact constraints.
    pub fn intrinsic_diameter(&self) -> u32 {
        match self.effective_radius() {
            0 => DEFAULT_RADIUS * 2,
            r => r.saturating_mul(2),
        }
    }

    /// Answer the host's measure request.
    ///
    /// The width pass runs first. While no radius is known, the radius is
    /// derived from the smaller of the two measured dimensions; later passes
    /// reuse it.
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> MeasuredSize {
        let width = self.policy.resolve(width_spec, self.intrinsic_diameter());

        if self.effective_radius() == 0 {
            let height = self.policy.resolve(height_spec, self.intrinsic_diameter());
            let radius = width.min(height) / 2;
            log::trace!("Derived radius {} from {}x{}", radius, width, height);
            if radius > 0 {
                self.derived_radius = Some(radius);
            }
        }

        self.bounding_arc = Some(self.arc_for_radius(self.effective_radius()));
        let height = self.policy.resolve(height_spec, self.intrinsic_diameter());
        log::trace!(
            "Measured {}x{} for {:?} / {:?}",
            width,
            height,
            width_spec,
            height_spec
        );
        MeasuredSize { width, height }
    }

    /// Bounding arc from the most recent measure pass.
    pub fn bounding_arc(&self) -> Option<Rect> {
        self.bounding_arc
    }

    /// Geometry for painting into bounds of the given size.
    ///
    /// Pure function of the current style and `bounds`. When no radius is
    /// known yet, the radius is taken from the bounds.
    pub fn geometry(&self, bounds: Size) -> ButtonGeometry {
        let radius = match self.effective_radius() {
            0 => (bounds.width.min(bounds.height).max(0.0) / 2.0) as u32,
            r => r,
        };
        let arc = self.arc_for_radius(radius);
        let overlay = self.style.overlay.as_ref().map(|_| {
            let d = arc.width() * self.style.overlay_inset;
            Rect::new(arc.x0 + d, arc.y0 + d, arc.x1 - d, arc.y1 - d)
        });
        ButtonGeometry { arc, overlay }
    }

    fn arc_for_radius(&self, radius: u32) -> Rect {
        let diameter = radius as f64 * 2.0;
        let stroke = self.style.stroke_width as f64;
        if stroke > diameter {
            log::warn!(
                "Stroke width {} exceeds diameter {}; arc collapses",
                stroke,
                diameter
            );
        }
        let side = (diameter - stroke).max(0.0);
        let offset = (diameter - side) / 2.0;
        Rect::new(offset, offset, offset + side, offset + side)
    }

    pub fn fill_paint(&self) -> Paint {
        self.style.fill_paint()
    }

    pub fn stroke_paint(&self) -> Paint {
        self.style.stroke_paint()
    }

    pub fn radius(&self) -> u32 {
        self.style.radius
    }

    /// Set the radius. 0 re-enables derivation from the next measure pass.
    pub fn set_radius(&mut self, radius: u32) {
        if self.style.radius != radius {
            self.style.radius = radius;
            self.derived_radius = None;
            self.notify(Invalidation::Layout);
        }
    }

    pub fn fill_color(&self) -> Rgba {
        self.style.fill_color
    }

    pub fn set_fill_color(&mut self, color: Rgba) {
        if self.style.fill_color != color {
            self.style.fill_color = color;
            self.notify(Invalidation::Paint);
        }
    }

    pub fn stroke_color(&self) -> Rgba {
        self.style.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Rgba) {
        if self.style.stroke_color != color {
            self.style.stroke_color = color;
            self.notify(Invalidation::Paint);
        }
    }

    pub fn stroke_width(&self) -> u32 {
        self.style.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: u32) {
        if self.style.stroke_width != width {
            self.style.stroke_width = width;
            self.notify(Invalidation::Layout);
        }
    }

    pub fn size_class(&self) -> SizeClass {
        self.style.size_class
    }

    /// Record a size class. Presets only apply during resolution, so this
    /// does not change the radius.
    pub fn set_size_class(&mut self, size_class: SizeClass) {
        if self.style.size_class != size_class {
            self.style.size_class = size_class;
            self.notify(Invalidation::Layout);
        }
    }

    pub fn overlay(&self) -> Option<&OverlayGraphic> {
        self.style.overlay.as_ref()
    }

    pub fn set_overlay(&mut self, overlay: Option<OverlayGraphic>) {
        if self.style.overlay != overlay {
            self.style.overlay = overlay;
            self.notify(Invalidation::Paint);
        }
    }

    pub fn overlay_inset(&self) -> f64 {
        self.style.overlay_inset
    }

    pub fn set_overlay_inset(&mut self, inset: f64) {
        let inset = clamp_inset(inset);
        if (self.style.overlay_inset - inset).abs() > f64::EPSILON {
            self.style.overlay_inset = inset;
            self.notify(Invalidation::Layout);
        }
    }

    fn notify(&mut self, invalidation: Invalidation) {
        if let Some(callback) = self.on_style_changed.as_mut() {
            callback(invalidation);
        }
    }
}
