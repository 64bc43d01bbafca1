//! Floating action button widget for egui.

use egui::{Color32, CursorIcon, ImageSource, Response, Sense, Ui, Vec2, vec2};
use fabkit_core::{CircularButton, MeasureSpec};
use fabkit_render::{RenderContext, render_button};

use crate::painter::{EguiPainter, to_egui_rect};
use crate::theme;

/// Interaction styling layered on top of the button's own style.
#[derive(Clone)]
pub struct FabButtonStyle {
    /// Tint painted over the disc while hovered (None = no highlight).
    pub hover_highlight: Option<Color32>,
    /// Tint painted over the disc while pressed.
    pub pressed_highlight: Option<Color32>,
    /// Render settings passed to the painter.
    pub render: RenderContext,
}

impl Default for FabButtonStyle {
    fn default() -> Self {
        Self {
            hover_highlight: Some(theme::HOVER_HIGHLIGHT),
            pressed_highlight: Some(theme::PRESSED_HIGHLIGHT),
            render: RenderContext::default(),
        }
    }
}

/// Constraint offered along one axis of the available space.
fn spec_for(extent: f32) -> MeasureSpec {
    if extent.is_finite() {
        MeasureSpec::at_most(extent.max(0.0) as u32)
    } else {
        MeasureSpec::unconstrained()
    }
}

/// A circular action button backed by a [`CircularButton`].
pub struct FabButton<'a> {
    button: &'a mut CircularButton,
    overlay_source: Option<ImageSource<'a>>,
    tooltip: Option<&'a str>,
    exact_size: Option<Vec2>,
    style: FabButtonStyle,
}

impl<'a> FabButton<'a> {
    /// Create a new action button.
    pub fn new(button: &'a mut CircularButton) -> Self {
        Self {
            button,
            overlay_source: None,
            tooltip: None,
            exact_size: None,
            style: FabButtonStyle::default(),
        }
    }

    /// Image used for the overlay graphic.
    pub fn overlay_source(mut self, source: impl Into<ImageSource<'a>>) -> Self {
        self.overlay_source = Some(source.into());
        self
    }

    /// Set hover tooltip text.
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Force an exact size instead of measuring against the available space.
    pub fn exact_size(mut self, size: Vec2) -> Self {
        self.exact_size = Some(size);
        self
    }

    /// Set the interaction style.
    pub fn style(mut self, style: FabButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the button and return its response.
    pub fn show(self, ui: &mut Ui) -> Response {
        let (width_spec, height_spec) = match self.exact_size {
            Some(size) => (
                MeasureSpec::exact(size.x.max(0.0) as u32),
                MeasureSpec::exact(size.y.max(0.0) as u32),
            ),
            None => {
                let available = ui.available_size();
                (spec_for(available.x), spec_for(available.y))
            }
        };
        let measured = self.button.measure(width_spec, height_spec);
        let (rect, response) = ui.allocate_exact_size(
            vec2(measured.width as f32, measured.height as f32),
            Sense::click(),
        );

        if ui.is_rect_visible(rect) {
            let bounds = kurbo::Rect::new(
                rect.min.x as f64,
                rect.min.y as f64,
                rect.max.x as f64,
                rect.max.y as f64,
            );
            let button: &CircularButton = &*self.button;
            let mut painter = EguiPainter::new(ui).with_overlay_source(self.overlay_source);
            render_button(&mut painter, button, bounds, &self.style.render);

            let highlight = if response.is_pointer_button_down_on() {
                self.style.pressed_highlight
            } else if response.hovered() {
                self.style.hover_highlight
            } else {
                None
            };
            if let Some(tint) = highlight {
                let disc = to_egui_rect(
                    button.geometry(bounds.size()).arc,
                    self.style.render.transform_for(bounds),
                );
                ui.painter()
                    .circle_filled(disc.center(), disc.width().min(disc.height()) / 2.0, tint);
            }
        }

        let response = match self.tooltip {
            Some(tooltip) => response.on_hover_text(tooltip),
            None => response,
        };
        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}
