//! Scene-level tests for the draw orchestrator.
//!
//! Everything here renders into a recording [`DisplayList`] and inspects the
//! recorded ops -- no window, no GPU. The reference setup is the 3x3 world
//! on a 300x300 surface with the default 15px border, where the cell size
//! works out to exactly 90 and corner (1, 1) sits at pixel (60, 240).

use karel_canvas::canvas::{CanvasConfig, IconStyle, KarelCanvas};
use karel_canvas::geometry::Point;
use karel_canvas::surface::{DisplayList, DrawOp, Layer};
use karel_world::prelude::*;

const EPS: f32 = 1e-3;

/// Render a scene with the default configuration.
fn draw(world: &World, karel: &Karel, width: f32, height: f32) -> DisplayList {
    let mut scene = DisplayList::new(width, height);
    KarelCanvas::default().redraw_all(&mut scene, world, karel);
    scene
}

fn lines(scene: &DisplayList, layer: Layer) -> Vec<(Point, Point)> {
    scene
        .layer_ops(layer)
        .filter_map(|op| match op {
            DrawOp::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .collect()
}

fn polygons(scene: &DisplayList, layer: Layer) -> Vec<Vec<Point>> {
    scene
        .layer_ops(layer)
        .filter_map(|op| match op {
            DrawOp::Polygon { points, .. } => Some(points.clone()),
            _ => None,
        })
        .collect()
}

fn texts(scene: &DisplayList, layer: Layer) -> Vec<(Point, String)> {
    scene
        .layer_ops(layer)
        .filter_map(|op| match op {
            DrawOp::Text { at, text, .. } => Some((*at, text.clone())),
            _ => None,
        })
        .collect()
}

fn has_line(scene: &DisplayList, layer: Layer, from: Point, to: Point) -> bool {
    lines(scene, layer).iter().any(|(a, b)| {
        (a.distance(from) < EPS && b.distance(to) < EPS)
            || (a.distance(to) < EPS && b.distance(from) < EPS)
    })
}

// ---------------------------------------------------------------------------
// Frame: bounding rectangle and axis labels
// ---------------------------------------------------------------------------

#[test]
fn bounding_rectangle_matches_the_reference_scenario() {
    let world = World::new(3, 3);
    let scene = draw(&world, &Karel::default(), 300.0, 300.0);

    // Grid bounds: border 15, cell (300 - 30) / 3 = 90.
    let tl = Point::new(15.0, 15.0);
    let tr = Point::new(285.0, 15.0);
    let bl = Point::new(15.0, 285.0);
    let br = Point::new(285.0, 285.0);

    assert!(has_line(&scene, Layer::Frame, tl, tr));
    assert!(has_line(&scene, Layer::Frame, tl, bl));
    assert!(has_line(&scene, Layer::Frame, tr, br));
    assert!(has_line(&scene, Layer::Frame, bl, br));
}

#[test]
fn axis_labels_number_every_avenue_and_street() {
    let world = World::new(3, 3);
    let scene = draw(&world, &Karel::default(), 300.0, 300.0);
    let labels = texts(&scene, Layer::Frame);
    assert_eq!(labels.len(), 6);

    // Avenue 2 is labeled below the grid, centered on its column.
    assert!(labels
        .iter()
        .any(|(at, text)| text == "2" && at.distance(Point::new(150.0, 295.0)) < EPS));
    // Street 3 is labeled left of the grid, centered on its row.
    assert!(labels
        .iter()
        .any(|(at, text)| text == "3" && at.distance(Point::new(5.0, 60.0)) < EPS));
}

// ---------------------------------------------------------------------------
// Corner markers
// ---------------------------------------------------------------------------

#[test]
fn unpainted_corners_are_crosses() {
    let world = World::new(3, 3);
    let scene = draw(&world, &Karel::default(), 300.0, 300.0);
    // Two cross strokes per corner, nine corners.
    assert_eq!(lines(&scene, Layer::Corner).len(), 18);
}

#[test]
fn painted_corners_are_filled_cell_squares() {
    let mut world = World::new(3, 3);
    let red = [1.0, 0.0, 0.0, 1.0];
    world.paint_corner(Corner::new(2, 2), Some(red));
    let scene = draw(&world, &Karel::default(), 300.0, 300.0);

    // One corner traded its cross for a square.
    assert_eq!(lines(&scene, Layer::Corner).len(), 16);
    let squares: Vec<_> = scene
        .layer_ops(Layer::Corner)
        .filter_map(|op| match op {
            DrawOp::Rect { min, max, fill, .. } => Some((*min, *max, *fill)),
            _ => None,
        })
        .collect();
    assert_eq!(squares.len(), 1);

    // The square covers the whole cell around (150, 150).
    let (min, max, fill) = squares[0];
    assert!(min.distance(Point::new(105.0, 105.0)) < EPS);
    assert!(max.distance(Point::new(195.0, 195.0)) < EPS);
    assert_eq!(fill, red);
}

// ---------------------------------------------------------------------------
// Beepers
// ---------------------------------------------------------------------------

#[test]
fn zero_beepers_draw_nothing() {
    let world = World::new(3, 3);
    let scene = draw(&world, &Karel::default(), 300.0, 300.0);
    assert_eq!(scene.layer_ops(Layer::Beeper).count(), 0);
}

#[test]
fn single_beeper_is_a_diamond_without_a_label() {
    let mut world = World::new(3, 3);
    world.set_beepers(Corner::new(1, 1), 1);
    let scene = draw(&world, &Karel::new(3, 3, Direction::East), 300.0, 300.0);

    let diamonds = polygons(&scene, Layer::Beeper);
    assert_eq!(diamonds.len(), 1);
    assert!(texts(&scene, Layer::Beeper).is_empty());

    // Centered on corner (1, 1) at pixel (60, 240); diamond apex above it.
    let diamond = &diamonds[0];
    assert_eq!(diamond.len(), 4);
    assert!(diamond[0].distance(Point::new(60.0, 240.0 - 90.0 * 0.35)) < EPS);
}

#[test]
fn beeper_stacks_get_a_count_label() {
    let mut world = World::new(3, 3);
    world.set_beepers(Corner::new(2, 2), 7);
    let scene = draw(&world, &Karel::new(3, 3, Direction::East), 300.0, 300.0);

    assert_eq!(polygons(&scene, Layer::Beeper).len(), 1);
    let labels = texts(&scene, Layer::Beeper);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].1, "7");
    assert!(labels[0].0.distance(Point::new(150.0, 150.0)) < EPS);
}

// ---------------------------------------------------------------------------
// Walls
// ---------------------------------------------------------------------------

#[test]
fn walls_land_on_the_correct_cell_edge() {
    let mut world = World::new(3, 3);
    for direction in Direction::ALL {
        world.add_wall(Wall::new(2, 2, direction));
    }
    let scene = draw(&world, &Karel::default(), 300.0, 300.0);

    // Cell around corner (2, 2): center (150, 150), half-cell 45.
    assert!(has_line(
        &scene,
        Layer::Frame,
        Point::new(105.0, 105.0),
        Point::new(195.0, 105.0)
    )); // north edge
    assert!(has_line(
        &scene,
        Layer::Frame,
        Point::new(105.0, 195.0),
        Point::new(195.0, 195.0)
    )); // south edge
    assert!(has_line(
        &scene,
        Layer::Frame,
        Point::new(195.0, 105.0),
        Point::new(195.0, 195.0)
    )); // east edge
    assert!(has_line(
        &scene,
        Layer::Frame,
        Point::new(105.0, 105.0),
        Point::new(105.0, 195.0)
    )); // west edge
}

// ---------------------------------------------------------------------------
// Agent icon
// ---------------------------------------------------------------------------

fn simple_icon_scene(karel: &Karel) -> DisplayList {
    let world = World::new(3, 3);
    let canvas = KarelCanvas::new(CanvasConfig {
        icon: IconStyle::Simple,
        ..Default::default()
    });
    let mut scene = DisplayList::new(300.0, 300.0);
    canvas.redraw_all(&mut scene, &world, karel);
    scene
}

#[test]
fn east_facing_simple_icon_is_unrotated() {
    let scene = simple_icon_scene(&Karel::new(1, 1, Direction::East));
    let icons = polygons(&scene, Layer::Karel);
    assert_eq!(icons.len(), 1);

    // Nose to the right of the corner center (60, 240).
    let nose = icons[0][3];
    assert!(nose.x > 60.0);
    assert!((nose.y - 240.0).abs() < EPS);
}

#[test]
fn north_facing_simple_icon_points_up_on_screen() {
    let scene = simple_icon_scene(&Karel::new(1, 1, Direction::North));
    let icons = polygons(&scene, Layer::Karel);
    let nose = icons[0][3];

    // Screen-up means smaller pixel y than the corner center.
    assert!((nose.x - 60.0).abs() < EPS);
    assert!(nose.y < 240.0);
}

#[test]
fn full_icon_has_five_parts() {
    let world = World::new(3, 3);
    let scene = draw(&world, &Karel::default(), 300.0, 300.0);

    // Outer body, screen, two legs as polygons; the mouth as a line.
    assert_eq!(polygons(&scene, Layer::Karel).len(), 4);
    assert_eq!(lines(&scene, Layer::Karel).len(), 1);
}

#[test]
fn rotation_preserves_icon_size() {
    let east = simple_icon_scene(&Karel::new(2, 2, Direction::East));
    let south = simple_icon_scene(&Karel::new(2, 2, Direction::South));

    let perimeter = |points: &[Point]| -> f32 {
        (0..points.len())
            .map(|i| points[i].distance(points[(i + 1) % points.len()]))
            .sum()
    };
    let east_perimeter = perimeter(&polygons(&east, Layer::Karel)[0]);
    let south_perimeter = perimeter(&polygons(&south, Layer::Karel)[0]);
    assert!((east_perimeter - south_perimeter).abs() < 1e-2);
}

// ---------------------------------------------------------------------------
// Partial redraws
// ---------------------------------------------------------------------------

#[test]
fn redraw_karel_replaces_only_the_agent_layer() {
    let world = World::new(3, 3);
    let canvas = KarelCanvas::default();
    let mut scene = DisplayList::new(300.0, 300.0);

    canvas.redraw_all(&mut scene, &world, &Karel::new(1, 1, Direction::East));
    let frame_before = scene.layer_ops(Layer::Frame).count();
    let corner_before = scene.layer_ops(Layer::Corner).count();

    canvas.redraw_karel(&mut scene, &world, &Karel::new(2, 3, Direction::North));

    assert_eq!(scene.layer_ops(Layer::Frame).count(), frame_before);
    assert_eq!(scene.layer_ops(Layer::Corner).count(), corner_before);
    // Still exactly one agent figure.
    assert_eq!(polygons(&scene, Layer::Karel).len(), 4);
}

#[test]
fn redraw_beepers_tracks_the_current_counts() {
    let mut world = World::new(3, 3);
    world.set_beepers(Corner::new(1, 2), 1);
    let canvas = KarelCanvas::default();
    let mut scene = DisplayList::new(300.0, 300.0);
    canvas.redraw_all(&mut scene, &world, &Karel::default());
    assert_eq!(polygons(&scene, Layer::Beeper).len(), 1);

    world.set_beepers(Corner::new(1, 2), 0);
    world.set_beepers(Corner::new(3, 1), 4);
    world.set_beepers(Corner::new(2, 3), 2);
    canvas.redraw_beepers(&mut scene, &world);

    assert_eq!(polygons(&scene, Layer::Beeper).len(), 2);
    assert_eq!(texts(&scene, Layer::Beeper).len(), 2);
}

#[test]
fn redraw_corners_tracks_fresh_paint() {
    let mut world = World::new(3, 3);
    let canvas = KarelCanvas::default();
    let mut scene = DisplayList::new(300.0, 300.0);
    canvas.redraw_all(&mut scene, &world, &Karel::default());
    assert_eq!(lines(&scene, Layer::Corner).len(), 18);

    world.paint_corner(Corner::new(1, 1), Some([0.0, 1.0, 0.0, 1.0]));
    canvas.redraw_corners(&mut scene, &world);
    assert_eq!(lines(&scene, Layer::Corner).len(), 16);
}
