//! Fixed-topology polygon templates for the agent figure and beepers.
//!
//! Every builder returns an ordered point sequence in the canonical
//! orientation (agent facing East), scaled from the cell size by fixed
//! proportion constants. Rotation to the actual facing happens afterwards,
//! in the draw orchestrator. Polygons are implicitly closed; the first point
//! is not repeated at the end.

use std::f32::consts::SQRT_2;

use crate::geometry::Point;

// Proportions of the agent figure, as fractions of the cell size.
const BODY_WIDTH: f32 = 0.58;
const BODY_HEIGHT: f32 = 0.7;
const BODY_HORIZONTAL_PAD: f32 = 0.29;
const BODY_VERTICAL_OFFSET: f32 = 0.05;
const UPPER_RIGHT_CLIP: f32 = 0.2;
const LOWER_LEFT_CLIP: f32 = 0.13125;

const INNER_OFFSET: f32 = 0.125;
const INNER_WIDTH: f32 = 0.28125;
const INNER_HEIGHT: f32 = 0.38;

const MOUTH_WIDTH: f32 = 0.1375;
const MOUTH_HORIZONTAL_OFFSET: f32 = 0.2625;
const MOUTH_VERTICAL_OFFSET: f32 = 0.125;

const LEG_LENGTH: f32 = 0.15;
const FOOT_LENGTH: f32 = 0.1875;
const LEG_FOOT_WIDTH: f32 = 0.075;
const LEG_VERTICAL_OFFSET: f32 = 0.5;
const LEG_HORIZONTAL_OFFSET: f32 = 0.2625;

const SIMPLE_WIDTH: f32 = 0.8;
const SIMPLE_HEIGHT: f32 = 0.7;

/// Beeper diamond radius as a fraction of the cell size.
pub const BEEPER_RADIUS: f32 = 0.35;

/// Top-left anchor of the agent body for a figure centered on `center`.
///
/// The full figure is built relative to this origin so the individual parts
/// (body, screen, mouth, legs) stay aligned with each other.
pub fn body_origin(center: Point, cell_size: f32) -> Point {
    Point::new(
        center.x - cell_size / 2.0 + BODY_HORIZONTAL_PAD * cell_size,
        center.y - cell_size / 2.0 + BODY_VERTICAL_OFFSET * cell_size,
    )
}

/// Outer body: a rectangle with the upper-right and lower-left corners
/// clipped off diagonally.
pub fn outer_body(origin: Point, cell_size: f32) -> Vec<Point> {
    let Point { x, y } = origin;
    let width = cell_size * BODY_WIDTH;
    let height = cell_size * BODY_HEIGHT;
    let upper_right = (cell_size * UPPER_RIGHT_CLIP) / SQRT_2;
    let lower_left = (cell_size * LOWER_LEFT_CLIP) / SQRT_2;

    vec![
        Point::new(x, y),
        Point::new(x + width - upper_right, y),
        Point::new(x + width, y + upper_right),
        Point::new(x + width, y + height),
        Point::new(x + lower_left, y + height),
        Point::new(x, y + height - lower_left),
    ]
}

/// Inner body: the rectangular "screen" inset into the outer body.
pub fn inner_body(origin: Point, cell_size: f32) -> Vec<Point> {
    let x = origin.x + cell_size * INNER_OFFSET;
    let y = origin.y + cell_size * INNER_OFFSET;
    let width = cell_size * INNER_WIDTH;
    let height = cell_size * INNER_HEIGHT;

    vec![
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
        Point::new(x, y + height),
    ]
}

/// Mouth: a horizontal segment just below the inner body.
pub fn mouth(origin: Point, cell_size: f32) -> (Point, Point) {
    let inner_bottom = origin.y + cell_size * (INNER_OFFSET + INNER_HEIGHT);
    let y = inner_bottom + cell_size * MOUTH_VERTICAL_OFFSET;
    let x = origin.x + cell_size * MOUTH_HORIZONTAL_OFFSET;
    (Point::new(x, y), Point::new(x + cell_size * MOUTH_WIDTH, y))
}

/// Left leg: an L-shape sticking out of the body's left edge.
pub fn left_leg(origin: Point, cell_size: f32) -> Vec<Point> {
    let Point { x, y } = origin;
    let leg = cell_size * LEG_LENGTH;
    let foot = cell_size * FOOT_LENGTH;
    let width = cell_size * LEG_FOOT_WIDTH;
    let y = y + cell_size * LEG_VERTICAL_OFFSET;

    vec![
        Point::new(x, y),
        Point::new(x - leg, y),
        Point::new(x - leg, y + foot),
        Point::new(x - leg + width, y + foot),
        Point::new(x - leg + width, y + width),
        Point::new(x, y + width),
    ]
}

/// Right leg: an L-shape hanging below the body's bottom edge.
pub fn right_leg(origin: Point, cell_size: f32) -> Vec<Point> {
    let leg = cell_size * LEG_LENGTH;
    let foot = cell_size * FOOT_LENGTH;
    let width = cell_size * LEG_FOOT_WIDTH;
    let x = origin.x + cell_size * LEG_HORIZONTAL_OFFSET;
    // Anchored at the body's bottom-left rather than its top-left.
    let y = origin.y + cell_size * BODY_HEIGHT;

    vec![
        Point::new(x, y),
        Point::new(x, y + leg),
        Point::new(x + foot, y + leg),
        Point::new(x + foot, y + leg - width),
        Point::new(x + width, y + leg - width),
        Point::new(x + width, y),
    ]
}

/// Simple icon: a pentagon arrow pointing East, centered on the corner.
pub fn simple_icon(center: Point, cell_size: f32) -> Vec<Point> {
    let half_width = cell_size * SIMPLE_WIDTH / 2.0;
    let half_height = cell_size * SIMPLE_HEIGHT / 2.0;
    let Point { x, y } = center;

    vec![
        Point::new(x - half_width, y - half_height),
        Point::new(x - half_width, y + half_height),
        Point::new(x, y + half_height),
        Point::new(x + half_width, y),
        Point::new(x, y - half_height),
    ]
}

/// Beeper marker: a diamond centered on the corner.
pub fn beeper_diamond(center: Point, radius: f32) -> Vec<Point> {
    let Point { x, y } = center;
    vec![
        Point::new(x, y - radius),
        Point::new(x + radius, y),
        Point::new(x, y + radius),
        Point::new(x - radius, y),
    ]
}
