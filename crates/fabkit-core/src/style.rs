//! Style record owned by a circular button.

use crate::color::Rgba;
use serde::{Deserialize, Serialize};

/// Radius used when the configuration does not supply one.
pub const DEFAULT_RADIUS: u32 = 100;
/// Stroke width used when the configuration does not supply one.
pub const DEFAULT_STROKE_WIDTH: u32 = 2;
/// Fill color used when the configuration does not supply one.
pub const DEFAULT_FILL_COLOR: Rgba = Rgba::BLACK;
/// Stroke color used when the configuration does not supply one.
pub const DEFAULT_STROKE_COLOR: Rgba = Rgba::BLUE;
/// Overlay inset as a fraction of the bounding arc side.
pub const DEFAULT_OVERLAY_INSET: f64 = 0.25;

/// Diameter of a normal action button, in density-independent units.
pub const FAB_SIZE_NORMAL_DP: f64 = 56.0;
/// Diameter of a mini action button, in density-independent units.
pub const FAB_SIZE_MINI_DP: f64 = 40.0;

/// Named size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Normal,
    Mini,
    /// Neither preset; the radius attribute is used as-is.
    #[default]
    Unspecified,
}

impl SizeClass {
    /// Preset diameter in density-independent units.
    pub fn preset_dp(self) -> Option<f64> {
        match self {
            SizeClass::Normal => Some(FAB_SIZE_NORMAL_DP),
            SizeClass::Mini => Some(FAB_SIZE_MINI_DP),
            SizeClass::Unspecified => None,
        }
    }

    /// Preset diameter converted to pixels for the given density scale.
    pub fn preset_diameter(self, density: f64) -> Option<u32> {
        self.preset_dp().map(|dp| (dp * density).round() as u32)
    }
}

/// Handle to the graphic drawn on top of the button.
///
/// The intrinsic size is informational only; the overlay is always fitted
/// into the inset box computed from the bounding arc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayGraphic {
    /// Asset key the rendering backend resolves.
    pub asset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intrinsic_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intrinsic_height: Option<u32>,
}

impl OverlayGraphic {
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            intrinsic_width: None,
            intrinsic_height: None,
        }
    }

    /// Attach the asset's intrinsic size.
    pub fn with_intrinsic_size(mut self, width: u32, height: u32) -> Self {
        self.intrinsic_width = Some(width);
        self.intrinsic_height = Some(height);
        self
    }
}

/// Resolved style of a circular button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetStyle {
    /// Radius in pixels. 0 means "derive from the first measure pass".
    pub radius: u32,
    pub fill_color: Rgba,
    pub stroke_color: Rgba,
    pub stroke_width: u32,
    pub size_class: SizeClass,
    pub overlay: Option<OverlayGraphic>,
    /// Fraction of the bounding arc side trimmed from each edge to place the
    /// overlay. Kept within `[0, 0.5]`.
    pub overlay_inset: f64,
}

impl Default for WidgetStyle {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            fill_color: DEFAULT_FILL_COLOR,
            stroke_color: DEFAULT_STROKE_COLOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
            size_class: SizeClass::Unspecified,
            overlay: None,
            overlay_inset: DEFAULT_OVERLAY_INSET,
        }
    }
}

impl WidgetStyle {
    /// Paint used for the filled disc.
    pub fn fill_paint(&self) -> Paint {
        Paint {
            color: self.fill_color,
            style: PaintStyle::Fill,
            anti_alias: true,
        }
    }

    /// Paint used for the ring around the disc.
    pub fn stroke_paint(&self) -> Paint {
        Paint {
            color: self.stroke_color,
            style: PaintStyle::Stroke {
                width: self.stroke_width,
            },
            anti_alias: true,
        }
    }
}

/// How a shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum PaintStyle {
    Fill,
    Stroke { width: u32 },
}

/// Color plus painting mode for one layer of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    pub color: Rgba,
    pub style: PaintStyle,
    pub anti_alias: bool,
}
