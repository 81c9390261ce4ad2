//! Grid-to-pixel coordinate mapping.
//!
//! [`GridGeometry`] is the per-draw render context: computed fresh from the
//! surface dimensions and world size at the start of every draw call, used to
//! place primitives, then dropped. Nothing in here survives between draws.
//!
//! # Axis Convention
//!
//! Avenues run left-to-right and map directly to pixel x. Streets run
//! bottom-to-top, so the pixel y axis is *inverted*: street 1 is the lowest
//! row on screen (largest y). This mirrors Cartesian grid semantics and is
//! deliberate; flipping it silently breaks every downstream visual check.

use serde::{Deserialize, Serialize};

use karel_world::world::Corner;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

// ---------------------------------------------------------------------------
// GridGeometry
// ---------------------------------------------------------------------------

/// Pixel-space layout of the world grid for one draw call.
///
/// The cell size is the smaller of the horizontal and vertical axis fits, so
/// cells stay square, and the grid's bounding box is centered in the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Side length of one grid cell, in pixels.
    pub cell_size: f32,
    /// Left edge of the grid bounding box.
    pub left_x: f32,
    /// Top edge of the grid bounding box.
    pub top_y: f32,
    /// Right edge of the grid bounding box.
    pub right_x: f32,
    /// Bottom edge of the grid bounding box.
    pub bottom_y: f32,
    /// World width in avenues.
    pub num_avenues: u32,
    /// World height in streets.
    pub num_streets: u32,
}

impl GridGeometry {
    /// Compute the grid layout for a surface of the given pixel dimensions.
    ///
    /// `border_offset` is the margin reserved on every side for axis labels;
    /// the cell size is `min((W - 2*border)/avenues, (H - 2*border)/streets)`.
    pub fn new(
        surface_width: f32,
        surface_height: f32,
        num_avenues: u32,
        num_streets: u32,
        border_offset: f32,
    ) -> Self {
        let horizontal_fit = (surface_width - 2.0 * border_offset) / num_avenues as f32;
        let vertical_fit = (surface_height - 2.0 * border_offset) / num_streets as f32;
        let cell_size = horizontal_fit.min(vertical_fit);

        let boundary_width = cell_size * num_avenues as f32;
        let boundary_height = cell_size * num_streets as f32;

        let left_x = surface_width / 2.0 - boundary_width / 2.0;
        let top_y = surface_height / 2.0 - boundary_height / 2.0;

        Self {
            cell_size,
            left_x,
            top_y,
            right_x: left_x + boundary_width,
            bottom_y: top_y + boundary_height,
            num_avenues,
            num_streets,
        }
    }

    /// Whether the surface is too small (or the world empty) to draw into.
    pub fn is_degenerate(&self) -> bool {
        !(self.cell_size.is_finite() && self.cell_size > 0.0)
    }

    /// Pixel x of a corner on the given avenue (1-based).
    pub fn corner_x(&self, avenue: u32) -> f32 {
        self.left_x + self.cell_size / 2.0 + (avenue - 1) as f32 * self.cell_size
    }

    /// Pixel y of a corner on the given street (1-based).
    ///
    /// Street indices grow upward while pixel y grows downward, hence the
    /// `num_streets - street` inversion.
    pub fn corner_y(&self, street: u32) -> f32 {
        self.top_y + self.cell_size / 2.0 + (self.num_streets - street) as f32 * self.cell_size
    }

    /// Pixel position of a corner.
    pub fn corner_point(&self, corner: Corner) -> Point {
        Point::new(self.corner_x(corner.avenue), self.corner_y(corner.street))
    }
}
