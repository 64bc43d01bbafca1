//! fabkit Core Library
//!
//! Platform-agnostic style resolution, measurement and geometry for the
//! fabkit circular action button.

pub mod color;
pub mod config;
pub mod measure;
pub mod style;
pub mod widget;

pub use color::{ParseColorError, Rgba};
pub use config::{ConfigBundle, ResolveError, ResolveResult, ResolverConfig, resolve};
pub use measure::{AtMostPolicy, MeasureMode, MeasurePolicy, MeasureSpec, UnconstrainedPolicy};
pub use style::{OverlayGraphic, Paint, PaintStyle, SizeClass, WidgetStyle};
pub use widget::{ButtonGeometry, CircularButton, Invalidation, MeasuredSize};
