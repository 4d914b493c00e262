//! End-to-end checks of the relate engine and the named predicates.

use sfgeo::prelude::*;
use sfgeo::{coord, line_string, point, polygon};
use sfgeo::{contains, covers, crosses, disjoint, equals_topo, intersects, overlaps, touches, within};
use sfgeo::{relate_matrix, relate_pattern, Geometry, Point, Polygon};

fn unit_square() -> Geometry<f64> {
    polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0), (x: 0.0, y: 0.0)]
        .into()
}

#[test]
fn point_in_polygon() {
    let a = unit_square();
    let b: Geometry = point! { x: 1.0, y: 1.0 }.into();

    assert!(intersects(&a, &b).unwrap());
    assert!(contains(&a, &b).unwrap());
    assert_eq!(relate_matrix(&a, &b).unwrap().to_pattern(), "0F2FF1FF2");
}

#[test]
fn boundary_touch() {
    let a = unit_square();
    let b: Geometry = point! { x: 0.0, y: 5.0 }.into();

    assert!(intersects(&a, &b).unwrap());
    assert!(!contains(&a, &b).unwrap());
    assert!(covers(&a, &b).unwrap());
    assert!(touches(&a, &b).unwrap());
}

#[test]
fn two_squares_overlapping() {
    let a = unit_square();
    let b: Geometry =
        polygon![(x: 5.0, y: 5.0), (x: 15.0, y: 5.0), (x: 15.0, y: 15.0), (x: 5.0, y: 15.0), (x: 5.0, y: 5.0)]
            .into();

    assert!(overlaps(&a, &b).unwrap());
    assert_eq!(relate_matrix(&a, &b).unwrap().to_pattern(), "212101212");
    assert!(relate_pattern(&a, &b, "T*T***T**").unwrap());
}

#[test]
fn disjoint_by_envelope() {
    let a: Geometry = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)].into();
    let b: Geometry = line_string![(x: 10.0, y: 10.0), (x: 11.0, y: 11.0)].into();

    assert!(!intersects(&a, &b).unwrap());
    assert_eq!(relate_matrix(&a, &b).unwrap().to_pattern(), "FF1FF0102");
}

#[test]
fn crossing_lines() {
    let a: Geometry = line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 10.0)].into();
    let b: Geometry = line_string![(x: 0.0, y: 10.0), (x: 10.0, y: 0.0)].into();

    assert!(crosses(&a, &b).unwrap());
    let result = sfgeo::intersection(&a, &b).unwrap();
    assert_eq!(result, Geometry::Point(point! { x: 5.0, y: 5.0 }));
}

#[test]
fn empty_behavior() {
    let a: Geometry = Polygon::<f64>::empty().into();
    let b: Geometry = Polygon::<f64>::empty().into();

    assert_eq!(relate_matrix(&a, &b).unwrap().to_pattern(), "FFFFFFFF2");
    assert!(equals_topo(&a, &b).unwrap());
    assert!(disjoint(&a, &b).unwrap());
}

#[test]
fn polygon_with_hole_and_point_in_hole() {
    let a: Geometry = sfgeo::polygon!(
        exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0), (x: 0.0, y: 0.0)],
        interiors: [[(x: 2.0, y: 2.0), (x: 8.0, y: 2.0), (x: 8.0, y: 8.0), (x: 2.0, y: 8.0), (x: 2.0, y: 2.0)]],
    )
    .into();
    let b: Geometry = point! { x: 5.0, y: 5.0 }.into();

    // the interior of the hole is the exterior of the polygon
    assert!(!contains(&a, &b).unwrap());
    assert!(!intersects(&a, &b).unwrap());
}

#[test]
fn symmetric_predicates_commute() {
    let cases: Vec<(Geometry, Geometry)> = vec![
        (unit_square(), point! { x: 1.0, y: 1.0 }.into()),
        (
            unit_square(),
            polygon![(x: 5.0, y: 5.0), (x: 15.0, y: 5.0), (x: 15.0, y: 15.0), (x: 5.0, y: 15.0)].into(),
        ),
        (
            line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 10.0)].into(),
            line_string![(x: 0.0, y: 10.0), (x: 10.0, y: 0.0)].into(),
        ),
        (
            unit_square(),
            line_string![(x: -5.0, y: 5.0), (x: 15.0, y: 5.0)].into(),
        ),
    ];

    for (a, b) in &cases {
        assert_eq!(intersects(a, b).unwrap(), intersects(b, a).unwrap());
        assert_eq!(disjoint(a, b).unwrap(), disjoint(b, a).unwrap());
        assert_eq!(touches(a, b).unwrap(), touches(b, a).unwrap());
        assert_eq!(crosses(a, b).unwrap(), crosses(b, a).unwrap());
        assert_eq!(overlaps(a, b).unwrap(), overlaps(b, a).unwrap());
        assert_eq!(equals_topo(a, b).unwrap(), equals_topo(b, a).unwrap());
        assert_eq!(contains(a, b).unwrap(), within(b, a).unwrap());
        assert_eq!(covers(a, b).unwrap(), sfgeo::covered_by(b, a).unwrap());
    }
}

#[test]
fn containment_implies_intersection() {
    let a = unit_square();
    let b: Geometry = polygon![(x: 2.0, y: 2.0), (x: 4.0, y: 2.0), (x: 4.0, y: 4.0), (x: 2.0, y: 4.0)].into();

    assert!(contains(&a, &b).unwrap());
    assert!(intersects(&a, &b).unwrap());
}

#[test]
fn relate_pattern_consistency_with_named_predicates() {
    let cases: Vec<(Geometry, Geometry)> = vec![
        (unit_square(), point! { x: 1.0, y: 1.0 }.into()),
        (unit_square(), point! { x: 0.0, y: 5.0 }.into()),
        (
            unit_square(),
            polygon![(x: 5.0, y: 5.0), (x: 15.0, y: 5.0), (x: 15.0, y: 15.0), (x: 5.0, y: 15.0)].into(),
        ),
        (
            unit_square(),
            line_string![(x: 2.0, y: 2.0), (x: 8.0, y: 8.0)].into(),
        ),
    ];

    for (a, b) in &cases {
        let im = relate_matrix(a, b).unwrap();
        assert_eq!(im.is_contains(), contains(a, b).unwrap());
        assert_eq!(im.is_within(), within(a, b).unwrap());
        assert_eq!(im.is_intersects(), intersects(a, b).unwrap());
        assert_eq!(im.is_disjoint(), disjoint(a, b).unwrap());
        assert_eq!(im.is_covers(), covers(a, b).unwrap());
        // contains is the `T*****FF*` pattern by definition
        assert_eq!(
            im.matches("T*****FF*").unwrap(),
            contains(a, b).unwrap()
        );
    }
}

#[test]
fn prepared_equivalence() {
    use sfgeo::PreparedGeometry;

    let reference = unit_square();
    let prepared = PreparedGeometry::from(&reference);

    let queries: Vec<Geometry> = vec![
        point! { x: 1.0, y: 1.0 }.into(),
        point! { x: 0.0, y: 5.0 }.into(),
        point! { x: 50.0, y: 50.0 }.into(),
        line_string![(x: -5.0, y: 5.0), (x: 15.0, y: 5.0)].into(),
        polygon![(x: 2.0, y: 2.0), (x: 4.0, y: 2.0), (x: 4.0, y: 4.0), (x: 2.0, y: 4.0)].into(),
        polygon![(x: 5.0, y: 5.0), (x: 15.0, y: 5.0), (x: 15.0, y: 15.0), (x: 5.0, y: 15.0)].into(),
    ];

    for query in &queries {
        assert_eq!(
            prepared.intersects(query).unwrap(),
            intersects(&reference, query).unwrap()
        );
        assert_eq!(
            prepared.contains(query).unwrap(),
            contains(&reference, query).unwrap()
        );
        assert_eq!(
            prepared.covers(query).unwrap(),
            covers(&reference, query).unwrap()
        );
        assert_eq!(
            prepared.relate(query).unwrap().to_pattern(),
            relate_matrix(&reference, query).unwrap().to_pattern()
        );
        assert_eq!(
            prepared.distance(query).unwrap(),
            sfgeo::euclidean_distance(&reference, query).unwrap()
        );
    }
}

#[test]
fn empty_predicate_table() {
    let empty: Geometry = Polygon::<f64>::empty().into();
    let empty_point: Geometry = Point::<f64>::empty().into();
    let square = unit_square();

    assert!(equals_topo(&empty, &empty_point).unwrap());
    assert!(disjoint(&empty, &empty_point).unwrap());
    assert!(!intersects(&empty, &empty_point).unwrap());
    assert!(!touches(&empty, &square).unwrap());
    assert!(!contains(&square, &empty).unwrap());
    assert!(!crosses(&empty, &square).unwrap());
    assert!(!overlaps(&empty, &square).unwrap());
}

#[test]
fn orientation_is_exact_for_collinear_points_with_large_coordinates() {
    use sfgeo::kernels::{Kernel, Orientation, RobustKernel};

    let p = coord! { x: 0.0, y: 0.0 };
    let q = coord! { x: 1e15, y: 1e15 };
    let r = coord! { x: 2e15, y: 2e15 };
    assert_eq!(RobustKernel::orient2d(p, q, r), Orientation::Collinear);

    let r_above = coord! { x: 2e15, y: 2e15 + 1.0 };
    assert_eq!(
        RobustKernel::orient2d(p, q, r_above),
        Orientation::CounterClockwise
    );
}

#[test]
fn linear_ring_relates_like_a_closed_line() {
    let ring: Geometry = sfgeo::LinearRing::new(line_string![
        (x: 0.0, y: 0.0),
        (x: 10.0, y: 0.0),
        (x: 10.0, y: 10.0),
        (x: 0.0, y: 0.0),
    ])
    .into();
    let endpoint: Geometry = point! { x: 0.0, y: 0.0 }.into();

    // a closed line has no boundary under the mod-2 rule
    assert!(contains(&ring, &endpoint).unwrap());
    assert!(!touches(&ring, &endpoint).unwrap());
}
