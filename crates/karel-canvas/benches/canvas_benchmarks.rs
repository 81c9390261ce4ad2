//! Full-redraw benchmark for the draw orchestrator.
//!
//! A redraw is expected to be trivially cheap next to any presentation
//! backend -- the interesting number is how it scales with world size, since
//! corner markers dominate the op count (two strokes per corner).
//!
//! Run with: `cargo bench --bench canvas_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use karel_canvas::canvas::KarelCanvas;
use karel_canvas::surface::DisplayList;
use karel_world::prelude::*;

/// A world with a sprinkling of everything the renderer draws.
fn populated_world(size: u32) -> World {
    let mut world = World::new(size, size);
    for avenue in 1..=size {
        world.set_beepers(Corner::new(avenue, (avenue % size) + 1), avenue);
    }
    for street in 1..size {
        world.add_wall(Wall::new(1, street, Direction::East));
    }
    world.paint_corner(Corner::new(size, size), Some([0.3, 0.5, 1.0, 1.0]));
    world
}

fn bench_redraw_all(c: &mut Criterion) {
    let canvas = KarelCanvas::default();
    let karel = Karel::default();

    let mut group = c.benchmark_group("redraw_all");
    for size in [5u32, 10, 25] {
        let world = populated_world(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &world, |b, world| {
            let mut scene = DisplayList::new(800.0, 800.0);
            b.iter(|| {
                canvas.redraw_all(&mut scene, world, &karel);
                black_box(scene.ops().len())
            });
        });
    }
    group.finish();
}

fn bench_partial_redraws(c: &mut Criterion) {
    let canvas = KarelCanvas::default();
    let karel = Karel::default();
    let world = populated_world(10);

    let mut scene = DisplayList::new(800.0, 800.0);
    canvas.redraw_all(&mut scene, &world, &karel);

    c.bench_function("redraw_karel_10x10", |b| {
        b.iter(|| {
            canvas.redraw_karel(&mut scene, &world, &karel);
            black_box(scene.ops().len())
        });
    });

    c.bench_function("redraw_beepers_10x10", |b| {
        b.iter(|| {
            canvas.redraw_beepers(&mut scene, &world);
            black_box(scene.ops().len())
        });
    });
}

criterion_group!(benches, bench_redraw_all, bench_partial_redraws);
criterion_main!(benches);
