use criterion::{criterion_group, criterion_main, Criterion};

use sfgeo::relate::Relate;
use sfgeo::{Coord, LineString, Polygon, PreparedGeometry};

/// A regular n-gon approximating a circle.
fn circle(center_x: f64, center_y: f64, radius: f64, steps: usize) -> Polygon<f64> {
    let coords = (0..=steps).map(|i| {
        let angle = (i % steps) as f64 / steps as f64 * std::f64::consts::TAU;
        Coord::new(
            center_x + radius * angle.cos(),
            center_y + radius * angle.sin(),
        )
    });
    Polygon::new(LineString::from_coords(coords), vec![])
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("relate overlapping 1000-gons", |bencher| {
        let a = circle(0.0, 0.0, 100.0, 1000);
        let b = circle(50.0, 0.0, 100.0, 1000);
        bencher.iter(|| {
            criterion::black_box(a.relate(&b).unwrap().is_overlaps(
                sfgeo::Dimensions::TwoDimensional,
                sfgeo::Dimensions::TwoDimensional,
            ));
        });
    });

    c.bench_function("relate disjoint 1000-gons", |bencher| {
        let a = circle(0.0, 0.0, 100.0, 1000);
        let b = circle(500.0, 0.0, 100.0, 1000);
        bencher.iter(|| {
            criterion::black_box(a.relate(&b).unwrap().is_disjoint());
        });
    });

    c.bench_function("prepared contains, 1000-gon vs grid of points", |bencher| {
        let polygon = sfgeo::Geometry::Polygon(circle(0.0, 0.0, 100.0, 1000));
        let prepared = PreparedGeometry::from(&polygon);
        let points: Vec<sfgeo::Geometry> = (-10..=10)
            .flat_map(|x| {
                (-10..=10).map(move |y| {
                    sfgeo::Geometry::Point(sfgeo::Point::new(Coord::new(
                        x as f64 * 15.0,
                        y as f64 * 15.0,
                    )))
                })
            })
            .collect();
        bencher.iter(|| {
            for point in &points {
                criterion::black_box(prepared.contains(point).unwrap());
            }
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
