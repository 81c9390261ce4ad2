//! On-screen presentation of recorded scenes.
//!
//! This module is feature-gated behind `window`. When the feature is not
//! enabled, it compiles to nothing. The backend consumes a
//! [`DisplayList`](crate::surface::DisplayList) recorded by the canvas,
//! turns every primitive into triangles (polygon fills are ear-clipped,
//! lines and outlines become thin quads, numeric labels come from a small
//! built-in glyph font), and presents the batch through wgpu inside a winit
//! window.
//!
//! The backend does not own the drawing logic: hosts keep calling the
//! canvas against the display list and hand the result to
//! [`WindowRenderer::render`], or use [`run_windowed`] for a plain viewer.

pub mod app;
pub mod renderer;
pub mod tessellate;
pub mod text;

pub use app::run_windowed;
pub use renderer::WindowRenderer;
