use criterion::{black_box, criterion_group, criterion_main, Criterion};

use flatmesh::math::Vec2;
use flatmesh::mesh::generators::{checkerboard, circle, quad};
use flatmesh::scene;

// ---------------------------------------------------------------------------
// Primitive generation
// ---------------------------------------------------------------------------

fn bench_quad(c: &mut Criterion) {
    c.bench_function("quad", |b| {
        b.iter(|| {
            quad(
                black_box(-1.0),
                black_box(1.0),
                black_box(1.0),
                black_box(0.5),
                black_box([0.0, 0.6, 0.8]),
                black_box([0.7, 1.0, 1.0]),
            )
        });
    });
}

fn bench_circle_coarse(c: &mut Criterion) {
    c.bench_function("circle_step_10", |b| {
        b.iter(|| {
            circle(
                black_box(Vec2::new(0.0, 0.0)),
                black_box(0.1),
                black_box([1.0, 0.0, 0.0]),
                black_box(10),
            )
        });
    });
}

fn bench_circle_fine(c: &mut Criterion) {
    c.bench_function("circle_step_1", |b| {
        b.iter(|| {
            circle(
                black_box(Vec2::new(0.0, 0.0)),
                black_box(0.1),
                black_box([1.0, 0.0, 0.0]),
                black_box(1),
            )
        });
    });
}

fn bench_checkerboard_small(c: &mut Criterion) {
    c.bench_function("checkerboard_8x8", |b| {
        b.iter(|| {
            checkerboard(
                black_box(8),
                black_box(8),
                black_box([0.0; 3]),
                black_box([1.0; 3]),
            )
        });
    });
}

fn bench_checkerboard_large(c: &mut Criterion) {
    c.bench_function("checkerboard_64x64", |b| {
        b.iter(|| {
            checkerboard(
                black_box(64),
                black_box(64),
                black_box([0.0; 3]),
                black_box([1.0; 3]),
            )
        });
    });
}

// ---------------------------------------------------------------------------
// Scene assembly
// ---------------------------------------------------------------------------

fn bench_landscape(c: &mut Criterion) {
    c.bench_function("scene_landscape", |b| {
        b.iter(scene::landscape);
    });
}

fn bench_checkers_pieces(c: &mut Criterion) {
    c.bench_function("scene_checkers_pieces", |b| {
        b.iter(scene::checkers_pieces);
    });
}

criterion_group!(
    benches,
    bench_quad,
    bench_circle_coarse,
    bench_circle_fine,
    bench_checkerboard_small,
    bench_checkerboard_large,
    bench_landscape,
    bench_checkers_pieces,
);
criterion_main!(benches);
