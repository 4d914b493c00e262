//! End-to-end checks of the overlay engine and its algebraic invariants.

use approx::assert_relative_eq;
use sfgeo::prelude::*;
use sfgeo::{difference, intersection, sym_difference, union};
use sfgeo::{equals_topo, line_string, point, polygon, Geometry, PrecisionModel};

fn init_logger() {
    let _ = pretty_env_logger::try_init();
}

fn square(x0: f64, y0: f64, size: f64) -> Geometry<f64> {
    polygon![
        (x: x0, y: y0),
        (x: x0 + size, y: y0),
        (x: x0 + size, y: y0 + size),
        (x: x0, y: y0 + size),
        (x: x0, y: y0),
    ]
    .into()
}

#[test]
fn two_squares_overlapping() {
    init_logger();
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 5.0, 10.0);

    let clipped = intersection(&a, &b).unwrap();
    assert_eq!(clipped.unsigned_area(), 25.0);

    let expected = square(5.0, 5.0, 5.0);
    assert!(equals_topo(&clipped, &expected).unwrap());
}

#[test]
fn overlay_idempotence() {
    init_logger();
    let squares = [square(0.0, 0.0, 10.0), square(-3.5, 2.5, 7.25)];
    for a in &squares {
        assert!(equals_topo(&union(a, a).unwrap(), a).unwrap());
        assert!(equals_topo(&intersection(a, a).unwrap(), a).unwrap());
        assert!(difference(a, a).unwrap().is_empty());
    }
}

#[test]
fn area_is_preserved_across_union_and_intersection() {
    let cases = [
        (square(0.0, 0.0, 10.0), square(5.0, 5.0, 10.0)),
        (square(0.0, 0.0, 10.0), square(2.0, 2.0, 2.0)),
        (square(0.0, 0.0, 10.0), square(20.0, 0.0, 5.0)),
        (square(0.0, 0.0, 10.0), square(10.0, 0.0, 10.0)),
    ];
    for (a, b) in &cases {
        let union_area = union(a, b).unwrap().unsigned_area();
        let intersection_area = intersection(a, b).unwrap().unsigned_area();
        assert_relative_eq!(
            union_area + intersection_area,
            a.unsigned_area() + b.unsigned_area(),
            epsilon = 1e-9
        );
    }
}

#[test]
fn de_morgan_identities() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 5.0, 10.0);

    // a \ (a ∪ b) = ∅
    let a_minus_union = difference(&a, &union(&a, &b).unwrap()).unwrap();
    assert!(a_minus_union.is_empty());

    // a ∩ (a \ b) = a \ (a ∩ b)
    let lhs = intersection(&a, &difference(&a, &b).unwrap()).unwrap();
    let rhs = difference(&a, &intersection(&a, &b).unwrap()).unwrap();
    assert!(equals_topo(&lhs, &rhs).unwrap());
}

#[test]
fn sym_difference_is_union_minus_intersection() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 5.0, 10.0);

    let direct = sym_difference(&a, &b).unwrap();
    let composed = difference(&union(&a, &b).unwrap(), &intersection(&a, &b).unwrap()).unwrap();
    assert_relative_eq!(
        direct.unsigned_area(),
        composed.unsigned_area(),
        epsilon = 1e-9
    );
    assert!(equals_topo(&direct, &composed).unwrap());
}

#[test]
fn union_with_empty_is_identity() {
    let a = square(0.0, 0.0, 10.0);
    let empty: Geometry = sfgeo::Polygon::<f64>::empty().into();

    assert!(equals_topo(&union(&a, &empty).unwrap(), &a).unwrap());
    assert!(equals_topo(&union(&empty, &a).unwrap(), &a).unwrap());
    assert!(intersection(&a, &empty).unwrap().is_empty());
    assert!(equals_topo(&difference(&a, &empty).unwrap(), &a).unwrap());
    assert!(difference(&empty, &a).unwrap().is_empty());
    assert!(equals_topo(&sym_difference(&a, &empty).unwrap(), &a).unwrap());
}

#[test]
fn polygon_with_hole_overlay() {
    let outer = square(0.0, 0.0, 10.0);
    let inner = square(2.0, 2.0, 6.0);
    let donut = difference(&outer, &inner).unwrap();
    assert_eq!(donut.unsigned_area(), 100.0 - 36.0);

    // punching the hole back in restores the original square
    let refilled = union(&donut, &inner).unwrap();
    assert!(equals_topo(&refilled, &outer).unwrap());

    // a point in the hole is in neither the donut nor its boundary
    let hole_point: Geometry = point! { x: 5.0, y: 5.0 }.into();
    assert!(!sfgeo::intersects(&donut, &hole_point).unwrap());
}

#[test]
fn line_overlays() {
    let line: Geometry = line_string![(x: -5.0, y: 5.0), (x: 15.0, y: 5.0)].into();
    let square = square(0.0, 0.0, 10.0);

    let clipped = intersection(&line, &square).unwrap();
    assert_eq!(clipped.euclidean_length(), 10.0);

    let outside = difference(&line, &square).unwrap();
    assert_eq!(outside.euclidean_length(), 10.0);
    match outside {
        Geometry::MultiLineString(multi) => assert_eq!(multi.len(), 2),
        other => panic!("expected a multilinestring, got {:?}", other.geometry_type()),
    }
}

#[test]
fn collinear_overlapping_lines() {
    let a: Geometry = line_string![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0)].into();
    let b: Geometry = line_string![(x: 2.0, y: 0.0), (x: 6.0, y: 0.0)].into();

    let shared = intersection(&a, &b).unwrap();
    assert_eq!(shared.euclidean_length(), 2.0);

    let combined = union(&a, &b).unwrap();
    assert_eq!(combined.euclidean_length(), 6.0);
}

#[test]
fn snap_rounding_is_reproducible() {
    let a: Geometry = line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 10.0)].into();
    let b: Geometry = line_string![(x: 0.1, y: 0.0), (x: 10.1, y: 10.0)].into();
    let pm = PrecisionModel::fixed(1.0);

    let first =
        sfgeo::overlay_with_precision(&a, &b, sfgeo::OverlayOp::Intersection, pm).unwrap();
    // the offset lines never cross, and no vertices snap together
    assert!(first.is_empty());

    for _ in 0..8 {
        let again =
            sfgeo::overlay_with_precision(&a, &b, sfgeo::OverlayOp::Intersection, pm).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn interrupt_aborts_an_overlay() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 5.0, 10.0);

    sfgeo::interrupt::request_interrupt();
    let result = intersection(&a, &b);
    assert_eq!(result, Err(sfgeo::Error::Interrupted));

    // the flag is consumed; the next call succeeds
    let result = intersection(&a, &b);
    assert!(result.is_ok());
}

#[test]
fn mixed_dimension_result_is_a_collection() {
    // a polygon and a line that pokes out of it, unioned: the uncovered
    // line piece survives alongside the polygon
    let square = square(0.0, 0.0, 10.0);
    let line: Geometry = line_string![(x: 5.0, y: 5.0), (x: 15.0, y: 5.0)].into();

    let result = union(&square, &line).unwrap();
    match &result {
        Geometry::GeometryCollection(collection) => {
            assert_eq!(collection.len(), 2);
        }
        other => panic!("expected a collection, got {:?}", other.geometry_type()),
    }
    assert_eq!(result.unsigned_area(), 100.0);
    assert_eq!(result.euclidean_length(), 5.0);
}
