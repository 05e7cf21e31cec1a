use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slide15::core::{Grid, PuzzleSnapshot, SimpleRng};
use slide15::engine::PuzzleEngine;
use slide15::types::{Point, Pos};

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut grid = Grid::ordered(4).unwrap();

    c.bench_function("shuffle_4x4", |b| {
        b.iter(|| {
            grid.shuffle(black_box(&mut rng));
        })
    });
}

fn bench_is_solvable(c: &mut Criterion) {
    let mut grid = Grid::ordered(10).unwrap();
    grid.shuffle(&mut SimpleRng::new(7));

    c.bench_function("is_solvable_10x10", |b| {
        b.iter(|| black_box(&grid).is_solvable())
    });
}

fn bench_locate_selectable(c: &mut Criterion) {
    let mut engine = PuzzleEngine::with_grid(Grid::ordered(10).unwrap(), 1);
    engine.resize(1200.0, 1200.0);
    let r = engine.tile_bounds(Pos::new(9, 8)).unwrap();
    let p = Point::new(r.center_x(), r.center_y());

    c.bench_function("locate_selectable_10x10", |b| {
        b.iter(|| engine.locate_selectable(black_box(p)))
    });
}

fn bench_drag_cycle(c: &mut Criterion) {
    let mut engine = PuzzleEngine::with_grid(Grid::ordered(4).unwrap(), 1);
    engine.resize(600.0, 600.0);

    c.bench_function("drag_commit_and_back", |b| {
        b.iter(|| {
            for pos in [Pos::new(3, 2), Pos::new(3, 3)] {
                let r = engine.tile_bounds(pos).unwrap();
                engine.pointer_down(Point::new(r.center_x(), r.center_y()));
                engine.pointer_move(Point::new(r.center_x() + 100.0, r.center_y()));
                engine.pointer_move(Point::new(r.center_x() - 100.0, r.center_y()));
                black_box(engine.pointer_up());
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = PuzzleEngine::with_grid(Grid::ordered(8).unwrap(), 1);
    engine.resize(800.0, 800.0);
    let mut snap = PuzzleSnapshot::default();

    c.bench_function("snapshot_into_8x8", |b| {
        b.iter(|| engine.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_shuffle,
    bench_is_solvable,
    bench_locate_selectable,
    bench_drag_cycle,
    bench_snapshot
);
criterion_main!(benches);
