//! Rigid 2D rotation of point sets about a pivot.
//!
//! Implemented as a 2x2 rotation matrix multiply. Angles are in radians,
//! counterclockwise-positive in a y-up frame; in pixel space (y grows
//! downward) a positive angle therefore reads clockwise on screen, and
//! callers that want a screen-counterclockwise turn negate the angle.

use crate::geometry::Point;

/// Rotate one point about `pivot` by `angle` radians.
///
/// `output = pivot + R(angle) * (p - pivot)`. An angle of zero is a
/// bit-exact identity.
pub fn rotate_point(p: Point, pivot: Point, angle: f32) -> Point {
    // Translating to the pivot and back rounds; zero must not.
    if angle == 0.0 {
        return p;
    }
    let (sin, cos) = angle.sin_cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point::new(
        pivot.x + cos * dx - sin * dy,
        pivot.y + sin * dx + cos * dy,
    )
}

/// Rotate every point in the slice about `pivot` by `angle` radians.
pub fn rotate_points(points: &mut [Point], pivot: Point, angle: f32) {
    if angle == 0.0 {
        return;
    }
    let (sin, cos) = angle.sin_cos();
    for p in points {
        let dx = p.x - pivot.x;
        let dy = p.y - pivot.y;
        p.x = pivot.x + cos * dx - sin * dy;
        p.y = pivot.y + sin * dx + cos * dy;
    }
}
