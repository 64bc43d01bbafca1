//! fabkit Render Library
//!
//! Renderer abstraction and implementations for the circular action button.
//! The default implementation uses Vello for GPU-accelerated rendering.

mod draw_list;
mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use draw_list::{DrawList, DrawOp};
pub use renderer::{Painter, RenderContext, RenderResult, RendererError, Sweep, render_button};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloPainter;
