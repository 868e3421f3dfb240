use criterion::{criterion_group, criterion_main, Criterion};
use pixel_mazes::{
    generators::{MediumPixelMaze, SmallPixelMaze},
    rect::WallMaze,
    units::{CellSidePixels, ColumnsCount, RowsCount, WallThickness},
};

fn bench_pixel_maze_32_u8(c: &mut Criterion) {
    let mut m = SmallPixelMaze::new(ColumnsCount(32), RowsCount(32), CellSidePixels(4), WallThickness(1))
        .unwrap();
    let mut seed = 0;

    c.bench_function("pixel_maze_32_u8", move |b| {
        b.iter(|| {
            seed += 1;
            m.generate(0, seed)
        })
    });
}

fn bench_pixel_maze_256_u16(c: &mut Criterion) {
    let mut m = MediumPixelMaze::new(ColumnsCount(256), RowsCount(256), CellSidePixels(2), WallThickness(1))
        .unwrap();
    let mut seed = 0;

    c.bench_function("pixel_maze_256_u16", move |b| {
        b.iter(|| {
            seed += 1;
            m.generate(0, seed)
        })
    });
}

fn bench_wall_maze_32(c: &mut Criterion) {
    let mut m = WallMaze::new(ColumnsCount(32), RowsCount(32), CellSidePixels(4), WallThickness(1))
        .unwrap();
    let mut seed = 0;

    c.bench_function("wall_maze_32", move |b| {
        b.iter(|| {
            seed += 1;
            m.generate(0, seed)
        })
    });
}

criterion_group!(
    benches,
    bench_pixel_maze_32_u8,
    bench_pixel_maze_256_u16,
    bench_wall_maze_32
);
criterion_main!(benches);
