//! The draw orchestrator: turns world/agent snapshots into surface primitives.
//!
//! [`KarelCanvas`] holds configuration only. Every draw call queries the
//! surface dimensions, derives a fresh [`GridGeometry`], and emits primitives
//! in a fixed order: frame (bounding rectangle, axis labels), corner markers,
//! beepers, walls, agent icon. The partial redraw operations clear exactly
//! one layer and rebuild it from the current snapshots.

use serde::{Deserialize, Serialize};

use karel_world::karel::Karel;
use karel_world::world::{Color, Corner, World};

use crate::geometry::{GridGeometry, Point};
use crate::rotate::rotate_points;
use crate::shapes;
use crate::surface::{DrawSurface, Layer};

/// Stroke and fill black.
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

/// Body fill of the agent figure.
pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

/// Beeper diamond fill: light grey.
pub const BEEPER_FILL: Color = [0.827, 0.827, 0.827, 1.0];

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which agent icon to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconStyle {
    /// The detailed multi-part figure: body, screen, mouth, legs.
    Full,
    /// A single pentagon arrow.
    Simple,
}

/// Rendering configuration.
///
/// All lengths are in pixels except where noted. The defaults reproduce the
/// classic look; hosts override fields with struct-update syntax:
///
/// ```
/// use karel_canvas::canvas::{CanvasConfig, IconStyle};
///
/// let config = CanvasConfig { icon: IconStyle::Simple, ..Default::default() };
/// assert_eq!(config.border_offset, 15.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Margin reserved on every side of the grid for axis labels.
    pub border_offset: f32,
    /// Distance from the grid edge to the axis label anchors.
    pub label_offset: f32,
    /// Half-length of the cross marking an unpainted corner.
    pub corner_size: f32,
    /// Stroke width of the bounding rectangle and walls.
    pub line_width: f32,
    /// Stroke width of the agent icon outlines.
    pub icon_line_width: f32,
    /// Glyph height of axis labels.
    pub label_text_size: f32,
    /// Glyph height of beeper count labels.
    pub count_text_size: f32,
    /// Agent icon style.
    pub icon: IconStyle,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            border_offset: 15.0,
            label_offset: 10.0,
            corner_size: 2.0,
            line_width: 2.0,
            icon_line_width: 2.0,
            label_text_size: 10.0,
            count_text_size: 12.0,
            icon: IconStyle::Full,
        }
    }
}

// ---------------------------------------------------------------------------
// KarelCanvas
// ---------------------------------------------------------------------------

/// The renderer. Stateless apart from configuration; every draw is a pure
/// function of the given snapshots and the surface dimensions at call time.
#[derive(Debug, Clone, Default)]
pub struct KarelCanvas {
    config: CanvasConfig,
}

impl KarelCanvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Switch the agent icon style for subsequent draws.
    pub fn set_icon(&mut self, icon: IconStyle) {
        self.config.icon = icon;
    }

    // -- redraw operations --------------------------------------------------

    /// Clear the whole surface and draw world and agent from scratch.
    pub fn redraw_all<S: DrawSurface>(&self, surface: &mut S, world: &World, karel: &Karel) {
        surface.clear_all();
        let Some(geom) = self.geometry(surface, world) else {
            return;
        };
        tracing::debug!(
            cell_size = geom.cell_size,
            left_x = geom.left_x,
            top_y = geom.top_y,
            "full canvas redraw"
        );
        self.draw_frame(surface, &geom);
        self.draw_corners(surface, &geom, world);
        self.draw_beepers(surface, &geom, world);
        self.draw_walls(surface, &geom, world);
        self.draw_karel(surface, &geom, karel);
    }

    /// Clear and redraw only the agent icon.
    pub fn redraw_karel<S: DrawSurface>(&self, surface: &mut S, world: &World, karel: &Karel) {
        surface.clear_layer(Layer::Karel);
        let Some(geom) = self.geometry(surface, world) else {
            return;
        };
        self.draw_karel(surface, &geom, karel);
    }

    /// Clear and redraw only the beepers.
    pub fn redraw_beepers<S: DrawSurface>(&self, surface: &mut S, world: &World) {
        surface.clear_layer(Layer::Beeper);
        let Some(geom) = self.geometry(surface, world) else {
            return;
        };
        self.draw_beepers(surface, &geom, world);
    }

    /// Clear and redraw only the corner markers.
    pub fn redraw_corners<S: DrawSurface>(&self, surface: &mut S, world: &World) {
        surface.clear_layer(Layer::Corner);
        let Some(geom) = self.geometry(surface, world) else {
            return;
        };
        self.draw_corners(surface, &geom, world);
    }

    // -- geometry context ---------------------------------------------------

    /// Derive the per-draw geometry, or skip the draw on a degenerate fit.
    fn geometry<S: DrawSurface>(&self, surface: &S, world: &World) -> Option<GridGeometry> {
        let (width, height) = surface.size();
        let geom = GridGeometry::new(
            width,
            height,
            world.num_avenues(),
            world.num_streets(),
            self.config.border_offset,
        );
        if geom.is_degenerate() {
            tracing::warn!(
                width,
                height,
                num_avenues = world.num_avenues(),
                num_streets = world.num_streets(),
                "surface too small for the world grid, skipping draw"
            );
            return None;
        }
        Some(geom)
    }

    // -- world pieces -------------------------------------------------------

    /// Bounding rectangle and axis labels.
    fn draw_frame<S: DrawSurface>(&self, surface: &mut S, geom: &GridGeometry) {
        let width = self.config.line_width;
        let top_left = Point::new(geom.left_x, geom.top_y);
        let top_right = Point::new(geom.right_x, geom.top_y);
        let bottom_left = Point::new(geom.left_x, geom.bottom_y);
        let bottom_right = Point::new(geom.right_x, geom.bottom_y);

        surface.draw_line(top_left, top_right, width, BLACK, Layer::Frame);
        surface.draw_line(top_left, bottom_left, width, BLACK, Layer::Frame);
        surface.draw_line(top_right, bottom_right, width, BLACK, Layer::Frame);
        surface.draw_line(bottom_left, bottom_right, width, BLACK, Layer::Frame);

        // Avenue numbers below the grid, street numbers to its left.
        for avenue in 1..=geom.num_avenues {
            let at = Point::new(
                geom.corner_x(avenue),
                geom.bottom_y + self.config.label_offset,
            );
            surface.draw_text(
                at,
                &avenue.to_string(),
                self.config.label_text_size,
                BLACK,
                Layer::Frame,
            );
        }
        for street in 1..=geom.num_streets {
            let at = Point::new(
                geom.left_x - self.config.label_offset,
                geom.corner_y(street),
            );
            surface.draw_text(
                at,
                &street.to_string(),
                self.config.label_text_size,
                BLACK,
                Layer::Frame,
            );
        }
    }

    /// Corner markers: a small cross, or a filled cell-sized square when the
    /// corner is painted.
    fn draw_corners<S: DrawSurface>(&self, surface: &mut S, geom: &GridGeometry, world: &World) {
        let half_cell = geom.cell_size / 2.0;
        let cross = self.config.corner_size;

        for avenue in 1..=geom.num_avenues {
            for street in 1..=geom.num_streets {
                let corner = Corner::new(avenue, street);
                let center = geom.corner_point(corner);
                match world.corner_color(corner) {
                    Some(color) => {
                        surface.fill_rect(
                            Point::new(center.x - half_cell, center.y - half_cell),
                            Point::new(center.x + half_cell, center.y + half_cell),
                            color,
                            Layer::Corner,
                        );
                    }
                    None => {
                        surface.draw_line(
                            Point::new(center.x, center.y - cross),
                            Point::new(center.x, center.y + cross),
                            1.0,
                            BLACK,
                            Layer::Corner,
                        );
                        surface.draw_line(
                            Point::new(center.x - cross, center.y),
                            Point::new(center.x + cross, center.y),
                            1.0,
                            BLACK,
                            Layer::Corner,
                        );
                    }
                }
            }
        }
    }

    /// Beeper diamonds with count labels for stacks of two or more.
    fn draw_beepers<S: DrawSurface>(&self, surface: &mut S, geom: &GridGeometry, world: &World) {
        for (corner, count) in world.beepers() {
            // A zero count draws nothing at all.
            if count == 0 {
                continue;
            }
            let center = geom.corner_point(corner);
            let radius = geom.cell_size * shapes::BEEPER_RADIUS;
            let diamond = shapes::beeper_diamond(center, radius);
            surface.draw_polygon(
                &diamond,
                Some(BEEPER_FILL),
                Some(BLACK),
                1.0,
                Layer::Beeper,
            );
            if count > 1 {
                surface.draw_text(
                    center,
                    &count.to_string(),
                    self.config.count_text_size,
                    BLACK,
                    Layer::Beeper,
                );
            }
        }
    }

    /// One segment per wall, on the named edge of the owning cell.
    fn draw_walls<S: DrawSurface>(&self, surface: &mut S, geom: &GridGeometry, world: &World) {
        use karel_world::direction::Direction;

        let half = geom.cell_size / 2.0;
        let width = self.config.line_width;

        for wall in world.walls() {
            let center = geom.corner_point(wall.corner);
            let (from, to) = match wall.direction {
                Direction::North => (
                    Point::new(center.x - half, center.y - half),
                    Point::new(center.x + half, center.y - half),
                ),
                Direction::South => (
                    Point::new(center.x - half, center.y + half),
                    Point::new(center.x + half, center.y + half),
                ),
                Direction::East => (
                    Point::new(center.x + half, center.y - half),
                    Point::new(center.x + half, center.y + half),
                ),
                Direction::West => (
                    Point::new(center.x - half, center.y - half),
                    Point::new(center.x - half, center.y + half),
                ),
            };
            surface.draw_line(from, to, width, BLACK, Layer::Frame);
        }
    }

    // -- agent icon ---------------------------------------------------------

    /// The agent icon, rotated from its East-facing template to the current
    /// facing.
    fn draw_karel<S: DrawSurface>(&self, surface: &mut S, geom: &GridGeometry, karel: &Karel) {
        let center = geom.corner_point(karel.corner());
        // Pixel y grows downward, so a counterclockwise world turn is a
        // negative pixel-space angle.
        let angle = -karel.facing.angle();
        let stroke = self.config.icon_line_width;

        match self.config.icon {
            IconStyle::Full => {
                let origin = shapes::body_origin(center, geom.cell_size);

                let mut body = shapes::outer_body(origin, geom.cell_size);
                rotate_points(&mut body, center, angle);
                surface.draw_polygon(&body, Some(WHITE), Some(BLACK), stroke, Layer::Karel);

                let mut screen = shapes::inner_body(origin, geom.cell_size);
                rotate_points(&mut screen, center, angle);
                surface.draw_polygon(&screen, Some(WHITE), Some(BLACK), stroke, Layer::Karel);

                let (from, to) = shapes::mouth(origin, geom.cell_size);
                let mut mouth = [from, to];
                rotate_points(&mut mouth, center, angle);
                surface.draw_line(mouth[0], mouth[1], stroke, BLACK, Layer::Karel);

                for mut leg in [
                    shapes::left_leg(origin, geom.cell_size),
                    shapes::right_leg(origin, geom.cell_size),
                ] {
                    rotate_points(&mut leg, center, angle);
                    surface.draw_polygon(&leg, Some(BLACK), Some(BLACK), stroke, Layer::Karel);
                }
            }
            IconStyle::Simple => {
                let mut arrow = shapes::simple_icon(center, geom.cell_size);
                rotate_points(&mut arrow, center, angle);
                surface.draw_polygon(&arrow, Some(WHITE), Some(BLACK), stroke, Layer::Karel);
            }
        }
    }
}
