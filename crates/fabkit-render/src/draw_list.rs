//! Recording painter.

use crate::renderer::{Painter, Sweep};
use fabkit_core::{OverlayGraphic, Paint};
use kurbo::{Affine, Rect};
use serde::{Deserialize, Serialize};

/// One recorded draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "op")]
pub enum DrawOp {
    FillArc {
        rect: Rect,
        sweep: Sweep,
        paint: Paint,
        transform: Affine,
    },
    StrokeArc {
        rect: Rect,
        sweep: Sweep,
        paint: Paint,
        transform: Affine,
    },
    Overlay {
        asset: String,
        target: Rect,
        transform: Affine,
    },
}

/// Painter that records operations in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Painter for DrawList {
    fn fill_arc(&mut self, rect: Rect, sweep: Sweep, paint: &Paint, transform: Affine) {
        self.ops.push(DrawOp::FillArc {
            rect,
            sweep,
            paint: *paint,
            transform,
        });
    }

    fn stroke_arc(&mut self, rect: Rect, sweep: Sweep, paint: &Paint, transform: Affine) {
        self.ops.push(DrawOp::StrokeArc {
            rect,
            sweep,
            paint: *paint,
            transform,
        });
    }

    fn draw_overlay(&mut self, overlay: &OverlayGraphic, target: Rect, transform: Affine) {
        self.ops.push(DrawOp::Overlay {
            asset: overlay.asset.clone(),
            target,
            transform,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{RenderContext, render_button};
    use fabkit_core::{CircularButton, MeasureSpec, PaintStyle, Rgba, WidgetStyle};
    use kurbo::Point;

    fn button(overlay: Option<OverlayGraphic>) -> CircularButton {
        CircularButton::from_style(WidgetStyle {
            radius: 40,
            fill_color: Rgba::from_packed(0xFF0000FF),
            stroke_color: Rgba::from_packed(0x00FF00FF),
            stroke_width: 4,
            overlay,
            ..Default::default()
        })
    }

    #[test]
    fn test_layer_order() {
        let mut button = button(Some(OverlayGraphic::new("ic_add")));
        let size = button.measure(MeasureSpec::exact(80), MeasureSpec::exact(80));
        let bounds = Rect::from_origin_size(Point::ZERO, size.to_size());

        let mut list = DrawList::new();
        render_button(&mut list, &button, bounds, &RenderContext::default());

        assert_eq!(list.len(), 3);
        let arc = Rect::new(2.0, 2.0, 78.0, 78.0);
        match &list.ops()[0] {
            DrawOp::FillArc { rect, paint, .. } => {
                assert_eq!(*rect, arc);
                assert_eq!(paint.style, PaintStyle::Fill);
                assert_eq!(paint.color, Rgba::from_packed(0xFF0000FF));
            }
            other => panic!("expected fill, got {:?}", other),
        }
        match &list.ops()[1] {
            DrawOp::StrokeArc { rect, paint, .. } => {
                assert_eq!(*rect, arc);
                assert_eq!(paint.style, PaintStyle::Stroke { width: 4 });
            }
            other => panic!("expected stroke, got {:?}", other),
        }
        match &list.ops()[2] {
            DrawOp::Overlay { asset, target, .. } => {
                assert_eq!(asset, "ic_add");
                assert_eq!(*target, Rect::new(21.0, 21.0, 59.0, 59.0));
            }
            other => panic!("expected overlay, got {:?}", other),
        }
    }

    #[test]
    fn test_no_overlay_is_skipped() {
        let button = button(None);
        let mut list = DrawList::new();
        render_button(
            &mut list,
            &button,
            Rect::new(0.0, 0.0, 80.0, 80.0),
            &RenderContext::default(),
        );
        assert_eq!(list.len(), 2);
        assert!(!list.ops().iter().any(|op| matches!(op, DrawOp::Overlay { .. })));
    }

    #[test]
    fn test_render_is_idempotent() {
        let button = button(Some(OverlayGraphic::new("ic_add")));
        let bounds = Rect::new(10.0, 20.0, 90.0, 100.0);
        let ctx = RenderContext::default();

        let mut first = DrawList::new();
        render_button(&mut first, &button, bounds, &ctx);
        let mut second = DrawList::new();
        render_button(&mut second, &button, bounds, &ctx);
        assert_eq!(first, second);
    }

    #[test]
    fn test_hairline_offset_and_bounds_origin() {
        let button = button(None);
        let bounds = Rect::new(10.0, 20.0, 90.0, 100.0);

        let mut list = DrawList::new();
        render_button(&mut list, &button, bounds, &RenderContext::default());
        let DrawOp::FillArc { transform, .. } = &list.ops()[0] else {
            panic!("expected fill first");
        };
        assert_eq!(*transform * Point::ZERO, Point::new(11.0, 21.0));

        let mut list = DrawList::new();
        let ctx = RenderContext::new().with_hairline_offset(0.0).with_scale_factor(2.0);
        render_button(&mut list, &button, bounds, &ctx);
        let DrawOp::FillArc { transform, .. } = &list.ops()[0] else {
            panic!("expected fill first");
        };
        assert_eq!(*transform * Point::ZERO, Point::new(20.0, 40.0));
    }

    #[test]
    fn test_anti_alias_follows_context() {
        let button = button(None);
        let mut list = DrawList::new();
        let ctx = RenderContext::new().with_anti_alias(false);
        render_button(&mut list, &button, Rect::new(0.0, 0.0, 80.0, 80.0), &ctx);
        for op in list.ops() {
            if let DrawOp::FillArc { paint, .. } | DrawOp::StrokeArc { paint, .. } = op {
                assert!(!paint.anti_alias);
            }
        }
    }

    #[test]
    fn test_serializes_to_json() {
        let button = button(Some(OverlayGraphic::new("ic_add")));
        let mut list = DrawList::new();
        render_button(
            &mut list,
            &button,
            Rect::new(0.0, 0.0, 80.0, 80.0),
            &RenderContext::default(),
        );
        let json = serde_json::to_value(&list).unwrap();
        let ops = json["ops"].as_array().unwrap();
        assert_eq!(ops[0]["op"], "fillArc");
        assert_eq!(ops[1]["op"], "strokeArc");
        assert_eq!(ops[2]["op"], "overlay");
        assert_eq!(ops[0]["paint"]["color"], "#FF0000FF");
    }
}
