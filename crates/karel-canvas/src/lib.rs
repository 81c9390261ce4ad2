//! Karel Canvas -- vector renderer for a Karel world and its agent.
//!
//! Given immutable [`World`](karel_world::world::World) and
//! [`Karel`](karel_world::karel::Karel) snapshots, the canvas emits drawing
//! primitives -- grid frame, axis labels, corner markers, beepers, walls, and
//! a rotatable polygonal agent icon -- onto anything implementing the
//! [`DrawSurface`](surface::DrawSurface) trait. The built-in
//! [`DisplayList`](surface::DisplayList) records primitives for headless use;
//! the feature-gated `window` module presents a recorded scene on screen via
//! wgpu + winit.
//!
//! Geometry is recomputed from the surface dimensions on every draw call --
//! there is no cross-call render state beyond configuration.
//!
//! # Quick Start
//!
//! ```
//! use karel_canvas::prelude::*;
//! use karel_world::prelude::*;
//!
//! let mut world = World::new(3, 3);
//! world.set_beepers(Corner::new(2, 2), 2);
//! world.add_wall(Wall::new(1, 1, Direction::East));
//! let karel = Karel::default();
//!
//! let canvas = KarelCanvas::default();
//! let mut scene = DisplayList::new(300.0, 300.0);
//! canvas.redraw_all(&mut scene, &world, &karel);
//!
//! assert!(scene.ops().iter().any(|op| op.layer() == Layer::Karel));
//! ```

#![deny(unsafe_code)]

pub mod canvas;
pub mod geometry;
pub mod rotate;
pub mod shapes;
pub mod surface;

#[cfg(feature = "window")]
pub mod window;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

/// Re-export the world snapshot crate for convenience.
pub use karel_world;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::canvas::{CanvasConfig, IconStyle, KarelCanvas};
    pub use crate::geometry::{GridGeometry, Point};
    pub use crate::rotate::{rotate_point, rotate_points};
    pub use crate::surface::{DisplayList, DrawOp, DrawSurface, Layer};
    pub use karel_world::world::Color;
}
