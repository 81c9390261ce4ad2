//! Simple-polygon triangulation by ear clipping.
//!
//! The GPU pipeline only draws triangle lists, and the agent's leg shapes
//! are concave, so a centroid fan is not enough. Ear clipping handles any
//! simple polygon, either winding, in O(n^2) -- trivially fast at the
//! vertex counts the canvas produces.

use crate::geometry::Point;

/// Twice the signed area of a closed polygon (shoelace formula).
fn signed_area_2(points: &[Point]) -> f32 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum
}

/// Cross product of (b - a) x (c - a).
fn cross(a: Point, b: Point, c: Point) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Whether `p` lies strictly inside the counterclockwise triangle `abc`.
fn strictly_inside(p: Point, a: Point, b: Point, c: Point) -> bool {
    cross(a, b, p) > 0.0 && cross(b, c, p) > 0.0 && cross(c, a, p) > 0.0
}

/// Triangulate a simple polygon into `n - 2` triangles.
///
/// Accepts either winding. Fewer than three points yield no triangles.
pub fn triangulate(points: &[Point]) -> Vec<[Point; 3]> {
    if points.len() < 3 {
        return Vec::new();
    }

    // Normalize traversal so convexity tests can assume one orientation.
    let mut idx: Vec<usize> = (0..points.len()).collect();
    if signed_area_2(points) < 0.0 {
        idx.reverse();
    }

    let mut triangles = Vec::with_capacity(points.len() - 2);
    while idx.len() > 3 {
        let n = idx.len();
        let mut clipped = false;
        for i in 0..n {
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;
            let a = points[idx[prev]];
            let b = points[idx[i]];
            let c = points[idx[next]];

            // Reflex and collinear vertices cannot be ears.
            if cross(a, b, c) <= 0.0 {
                continue;
            }
            let blocked = idx
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != prev && j != i && j != next)
                .any(|(_, &p)| strictly_inside(points[p], a, b, c));
            if blocked {
                continue;
            }

            triangles.push([a, b, c]);
            idx.remove(i);
            clipped = true;
            break;
        }
        if !clipped {
            // Numerically stuck (collinear runs); finish with a fan rather
            // than spin forever.
            for w in 1..idx.len() - 1 {
                triangles.push([points[idx[0]], points[idx[w]], points[idx[w + 1]]]);
            }
            return triangles;
        }
    }
    triangles.push([points[idx[0]], points[idx[1]], points[idx[2]]]);
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_area_sum(triangles: &[[Point; 3]]) -> f32 {
        triangles
            .iter()
            .map(|t| cross(t[0], t[1], t[2]).abs() / 2.0)
            .sum()
    }

    fn polygon_area(points: &[Point]) -> f32 {
        signed_area_2(points).abs() / 2.0
    }

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ]
    }

    fn l_shape() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 4.0),
            Point::new(0.0, 4.0),
        ]
    }

    #[test]
    fn square_becomes_two_triangles() {
        let triangles = triangulate(&square());
        assert_eq!(triangles.len(), 2);
        assert!((triangle_area_sum(&triangles) - 16.0).abs() < 1e-4);
    }

    #[test]
    fn concave_l_shape_is_covered_exactly() {
        let polygon = l_shape();
        let triangles = triangulate(&polygon);
        assert_eq!(triangles.len(), polygon.len() - 2);
        assert!((triangle_area_sum(&triangles) - polygon_area(&polygon)).abs() < 1e-4);
    }

    #[test]
    fn winding_direction_does_not_matter() {
        let mut reversed = l_shape();
        reversed.reverse();
        let triangles = triangulate(&reversed);
        assert_eq!(triangles.len(), reversed.len() - 2);
        assert!((triangle_area_sum(&triangles) - polygon_area(&reversed)).abs() < 1e-4);
    }

    #[test]
    fn degenerate_inputs_yield_nothing() {
        assert!(triangulate(&[]).is_empty());
        assert!(triangulate(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).is_empty());
    }

    #[test]
    fn agent_leg_shape_triangulates() {
        // Same topology as the agent's concave leg polygons.
        let leg = vec![
            Point::new(0.0, 0.0),
            Point::new(-15.0, 0.0),
            Point::new(-15.0, 18.0),
            Point::new(-7.5, 18.0),
            Point::new(-7.5, 7.5),
            Point::new(0.0, 7.5),
        ];
        let triangles = triangulate(&leg);
        assert_eq!(triangles.len(), 4);
        assert!((triangle_area_sum(&triangles) - polygon_area(&leg)).abs() < 1e-3);
    }
}
