use criterion::{criterion_group, criterion_main, Criterion};

use sfgeo::overlay::{intersection, union};
use sfgeo::{Coord, Geometry, LineString, Polygon};

fn circle(center_x: f64, center_y: f64, radius: f64, steps: usize) -> Geometry<f64> {
    let coords = (0..=steps).map(|i| {
        let angle = (i % steps) as f64 / steps as f64 * std::f64::consts::TAU;
        Coord::new(
            center_x + radius * angle.cos(),
            center_y + radius * angle.sin(),
        )
    });
    Geometry::Polygon(Polygon::new(LineString::from_coords(coords), vec![]))
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("intersection of overlapping 500-gons", |bencher| {
        let a = circle(0.0, 0.0, 100.0, 500);
        let b = circle(50.0, 0.0, 100.0, 500);
        bencher.iter(|| {
            criterion::black_box(intersection(&a, &b).unwrap());
        });
    });

    c.bench_function("union of overlapping 500-gons", |bencher| {
        let a = circle(0.0, 0.0, 100.0, 500);
        let b = circle(50.0, 0.0, 100.0, 500);
        bencher.iter(|| {
            criterion::black_box(union(&a, &b).unwrap());
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
