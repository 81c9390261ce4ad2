//! The drawing-surface abstraction and the recording display list.
//!
//! [`DrawSurface`] is the minimal boundary the renderer needs from a host:
//! lines, polygons, filled rectangles, text labels, clear-by-layer, and the
//! current surface dimensions. [`DisplayList`] is the built-in
//! implementation: it records every primitive as a [`DrawOp`], which makes
//! scenes inspectable in tests and hands platform backends a complete,
//! ordered description of what to put on screen.

use serde::{Deserialize, Serialize};

use karel_world::world::Color;

use crate::geometry::Point;

// ---------------------------------------------------------------------------
// Layer
// ---------------------------------------------------------------------------

/// The clearable layer a primitive belongs to.
///
/// Frame primitives (bounding box, axis labels, walls) are only removed by a
/// full clear; corner markers, beepers, and the agent icon can each be
/// cleared and redrawn independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    Frame,
    Corner,
    Beeper,
    Karel,
}

// ---------------------------------------------------------------------------
// DrawOp
// ---------------------------------------------------------------------------

/// One recorded drawing primitive.
///
/// Colors are RGBA in `0.0..=1.0`; coordinates are pixels. Ops serialize to
/// JSON so tests can snapshot whole scenes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Color,
        layer: Layer,
    },
    Polygon {
        points: Vec<Point>,
        fill: Option<Color>,
        outline: Option<Color>,
        width: f32,
        layer: Layer,
    },
    Rect {
        min: Point,
        max: Point,
        fill: Color,
        layer: Layer,
    },
    Text {
        at: Point,
        text: String,
        size: f32,
        color: Color,
        layer: Layer,
    },
}

impl DrawOp {
    /// The layer this primitive belongs to.
    pub fn layer(&self) -> Layer {
        match self {
            DrawOp::Line { layer, .. }
            | DrawOp::Polygon { layer, .. }
            | DrawOp::Rect { layer, .. }
            | DrawOp::Text { layer, .. } => *layer,
        }
    }
}

// ---------------------------------------------------------------------------
// DrawSurface
// ---------------------------------------------------------------------------

/// The boundary surface a host canvas must provide.
///
/// One method per primitive; no batching, no transforms. All coordinates
/// are in pixels with y growing downward.
pub trait DrawSurface {
    /// Current surface dimensions in pixels, (width, height).
    fn size(&self) -> (f32, f32);

    /// Draw a line segment of the given stroke width.
    fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Color, layer: Layer);

    /// Draw a polygon, optionally filled and/or outlined.
    ///
    /// The point sequence is implicitly closed. `width` is the outline
    /// stroke width and is ignored when `outline` is `None`.
    fn draw_polygon(
        &mut self,
        points: &[Point],
        fill: Option<Color>,
        outline: Option<Color>,
        width: f32,
        layer: Layer,
    );

    /// Draw an axis-aligned filled rectangle.
    fn fill_rect(&mut self, min: Point, max: Point, fill: Color, layer: Layer);

    /// Draw a text label centered on `at`, with glyphs `size` pixels tall.
    fn draw_text(&mut self, at: Point, text: &str, size: f32, color: Color, layer: Layer);

    /// Remove every primitive on the given layer.
    fn clear_layer(&mut self, layer: Layer);

    /// Remove every primitive.
    fn clear_all(&mut self);
}

// ---------------------------------------------------------------------------
// DisplayList
// ---------------------------------------------------------------------------

/// A recording [`DrawSurface`]: primitives accumulate in draw order.
///
/// Doubles as the retained scene handed to presentation backends, and as the
/// headless surface tests inspect.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    width: f32,
    height: f32,
    ops: Vec<DrawOp>,
}

impl DisplayList {
    /// Create an empty display list for a surface of the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Update the surface dimensions (e.g. after a window resize).
    ///
    /// Recorded ops are left untouched; the caller is expected to redraw.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// All recorded ops, in draw order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// The recorded ops on one layer, in draw order.
    pub fn layer_ops(&self, layer: Layer) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(move |op| op.layer() == layer)
    }
}

impl DrawSurface for DisplayList {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Color, layer: Layer) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
            layer,
        });
    }

    fn draw_polygon(
        &mut self,
        points: &[Point],
        fill: Option<Color>,
        outline: Option<Color>,
        width: f32,
        layer: Layer,
    ) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            fill,
            outline,
            width,
            layer,
        });
    }

    fn fill_rect(&mut self, min: Point, max: Point, fill: Color, layer: Layer) {
        self.ops.push(DrawOp::Rect {
            min,
            max,
            fill,
            layer,
        });
    }

    fn draw_text(&mut self, at: Point, text: &str, size: f32, color: Color, layer: Layer) {
        self.ops.push(DrawOp::Text {
            at,
            text: text.to_owned(),
            size,
            color,
            layer,
        });
    }

    fn clear_layer(&mut self, layer: Layer) {
        self.ops.retain(|op| op.layer() != layer);
    }

    fn clear_all(&mut self) {
        self.ops.clear();
    }
}
