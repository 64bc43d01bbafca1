//! Configuration bundles and style resolution.
//!
//! A [`ConfigBundle`] holds the attributes a host supplies when it creates a
//! button. [`resolve`] turns it into a fully populated [`WidgetStyle`]:
//!
//! 1. Size-class presets are scaled to pixels with the host's density.
//! 2. Absent attributes fall back to their defaults.
//! 3. A non-default radius combined with a `Normal` or `Mini` size class is
//!    replaced by half the scaled preset diameter. A size class on its own
//!    leaves the default radius untouched.
//! 4. The overlay graphic stays optional unless the host requires it.

use crate::color::Rgba;
use crate::style::{
    DEFAULT_FILL_COLOR, DEFAULT_OVERLAY_INSET, DEFAULT_RADIUS, DEFAULT_STROKE_COLOR,
    DEFAULT_STROKE_WIDTH, OverlayGraphic, SizeClass, WidgetStyle,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while resolving a configuration bundle.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Required overlay graphic is missing")]
    MissingRequiredAsset,
    #[error("Invalid density scale factor: {0}")]
    InvalidDensity(f64),
    #[error("Failed to parse configuration bundle: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Attributes supplied by the host. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigBundle {
    pub radius: Option<i64>,
    pub fill_color: Option<Rgba>,
    pub stroke_color: Option<Rgba>,
    pub stroke_width: Option<i64>,
    pub size_class: Option<SizeClass>,
    pub overlay_graphic: Option<OverlayGraphic>,
    pub overlay_inset: Option<f64>,
}

impl ConfigBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bundle from JSON.
    pub fn from_json(json: &str) -> ResolveResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_radius(mut self, radius: i64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_fill_color(mut self, color: Rgba) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn with_stroke_color(mut self, color: Rgba) -> Self {
        self.stroke_color = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: i64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_size_class(mut self, size_class: SizeClass) -> Self {
        self.size_class = Some(size_class);
        self
    }

    pub fn with_overlay(mut self, overlay: OverlayGraphic) -> Self {
        self.overlay_graphic = Some(overlay);
        self
    }

    pub fn with_overlay_inset(mut self, inset: f64) -> Self {
        self.overlay_inset = Some(inset);
        self
    }
}

/// Host environment values that shape resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    /// Display density scale factor (physical pixels per density-independent unit).
    pub density: f64,
    /// Fail with [`ResolveError::MissingRequiredAsset`] when no overlay is given.
    pub require_overlay: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            require_overlay: false,
        }
    }
}

impl ResolverConfig {
    pub fn new(density: f64) -> Self {
        Self {
            density,
            ..Default::default()
        }
    }

    /// Treat the overlay graphic as mandatory.
    pub fn require_overlay(mut self, required: bool) -> Self {
        self.require_overlay = required;
        self
    }
}

/// Resolve a bundle into a style.
///
/// Pure function of its inputs: resolving the same bundle twice yields equal
/// styles.
pub fn resolve(bundle: &ConfigBundle, config: &ResolverConfig) -> ResolveResult<WidgetStyle> {
    let density = config.density;
    if !density.is_finite() || density <= 0.0 {
        return Err(ResolveError::InvalidDensity(density));
    }

    let mut radius = non_negative("radius", bundle.radius, DEFAULT_RADIUS);
    let stroke_width = non_negative("strokeWidth", bundle.stroke_width, DEFAULT_STROKE_WIDTH);
    let size_class = bundle.size_class.unwrap_or_default();

    if radius != DEFAULT_RADIUS {
        if let Some(diameter) = size_class.preset_diameter(density) {
            log::debug!(
                "Radius {} overridden by {:?} preset ({}px diameter)",
                radius,
                size_class,
                diameter
            );
            radius = diameter / 2;
        }
    }

    let overlay = bundle.overlay_graphic.clone();
    match &overlay {
        Some(graphic) => log::debug!(
            "Overlay {:?}: intrinsic {}x{}",
            graphic.asset,
            graphic.intrinsic_width.map_or(-1, i64::from),
            graphic.intrinsic_height.map_or(-1, i64::from)
        ),
        None if config.require_overlay => return Err(ResolveError::MissingRequiredAsset),
        None => {}
    }

    Ok(WidgetStyle {
        radius,
        fill_color: bundle.fill_color.unwrap_or(DEFAULT_FILL_COLOR),
        stroke_color: bundle.stroke_color.unwrap_or(DEFAULT_STROKE_COLOR),
        stroke_width,
        size_class,
        overlay,
        overlay_inset: clamp_inset(bundle.overlay_inset.unwrap_or(DEFAULT_OVERLAY_INSET)),
    })
}

/// Keep an overlay inset fraction within `[0, 0.5]`.
pub fn clamp_inset(inset: f64) -> f64 {
    if inset.is_nan() {
        return DEFAULT_OVERLAY_INSET;
    }
    inset.clamp(0.0, 0.5)
}

fn non_negative(name: &str, value: Option<i64>, default: u32) -> u32 {
    match value {
        None => default,
        Some(v) if v < 0 => {
            log::warn!("Negative {} ({}) clamped to 0", name, v);
            0
        }
        Some(v) => u32::try_from(v).unwrap_or(u32::MAX),
    }
}
