//! egui integration for the fabkit circular action button.
//!
//! - **Button**: [`FabButton`] measures a [`fabkit_core::CircularButton`]
//!   against the available space and paints it.
//! - **Painter**: [`EguiPainter`] implements [`fabkit_render::Painter`] on top
//!   of `egui::Painter`.

pub mod button;
pub mod painter;

pub use button::{FabButton, FabButtonStyle};
pub use painter::{EguiPainter, pie_points, to_color32, to_egui_rect};

/// Standard colors used by the widgets.
pub mod theme {
    use egui::Color32;

    /// Overlay tint while hovered
    pub const HOVER_HIGHLIGHT: Color32 = Color32::from_rgba_premultiplied(40, 40, 40, 40);
    /// Overlay tint while pressed
    pub const PRESSED_HIGHLIGHT: Color32 = Color32::from_rgba_premultiplied(70, 70, 70, 70);
}
