use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use strike_physics::*;

const GRID_SIDE: i32 = 50;

fn build_strikes() -> Vec<Point> {
    (-GRID_SIDE..GRID_SIDE)
        .flat_map(|x| (-GRID_SIDE..GRID_SIDE).map(move |y| Point::new(x as f32 / 2.0, y as f32 / 2.0)))
        .collect()
}

pub fn benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_hit");
    let strikes = build_strikes();
    for radius in [1.0f32, 10.0, 100.0] {
        group.throughput(Throughput::Elements(strikes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, radius| {
            b.iter(|| {
                strikes
                    .iter()
                    .filter(|p| detect_hit(black_box(p), *radius))
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
