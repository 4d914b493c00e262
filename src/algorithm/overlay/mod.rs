//! Boolean overlays of two geometries on the labeled topology graph:
//! intersection, union, difference, and symmetric difference.
//!
//! The overlay and [`relate`](crate::algorithm::relate) engines share the
//! same graph construction: inputs are noded against themselves and each
//! other, the split edges are labeled with their topological position
//! relative to both inputs, and the edges whose side locations satisfy the
//! operation are linked back into rings. Lower-dimensional pieces of the
//! result (lines and points) are collected from the labeled edges and
//! nodes.
//!
//! ```
//! use sfgeo::polygon;
//! use sfgeo::overlay::intersection;
//! use sfgeo::Area;
//!
//! let a: sfgeo::Geometry = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)].into();
//! let b: sfgeo::Geometry = polygon![(x: 5.0, y: 5.0), (x: 15.0, y: 5.0), (x: 15.0, y: 15.0), (x: 5.0, y: 15.0)].into();
//!
//! let clipped = intersection(&a, &b).unwrap();
//! assert_eq!(clipped.unsigned_area(), 25.0);
//! ```
//!
//! A failed exact overlay (a [`Error::Topology`](crate::Error::Topology)
//! from noding or ring assembly) is retried at increasingly coarse fixed
//! precision before the error is surfaced; [`overlay_with_precision`] runs
//! at a caller-chosen [`PrecisionModel`] directly.

use crate::algorithm::coordinate_position::CoordPos;
use crate::algorithm::dimensions::Dimensions;
use crate::algorithm::envelope::HasEnvelope;
use crate::algorithm::relate;
use crate::geometry::{
    Geometry, GeometryFactory, LineString, LinearRing, Point, Polygon, PrecisionModel,
};
use crate::{Error, GeoFloat, GeometryCow, Result};

mod depth;
mod edge_list;
mod graph;
mod line_builder;
mod overlay_operation;
mod point_builder;
mod polygon_builder;

/// The boolean operation an overlay computes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayOp {
    Intersection,
    Union,
    Difference,
    SymDifference,
}

/// The points common to both geometries.
pub fn intersection<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<Geometry<F>> {
    overlay(a, b, OverlayOp::Intersection)
}

/// The points in either geometry.
pub fn union<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<Geometry<F>> {
    overlay(a, b, OverlayOp::Union)
}

/// The points in `a` but not in `b`.
pub fn difference<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<Geometry<F>> {
    overlay(a, b, OverlayOp::Difference)
}

/// The points in exactly one of the geometries.
pub fn sym_difference<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<Geometry<F>> {
    overlay(a, b, OverlayOp::SymDifference)
}

/// Compute a boolean overlay of two geometries.
///
/// If the exact computation fails with a topology error, the overlay is
/// retried with snap-rounding at a heuristic scale, coarsened tenfold per
/// attempt; only if every retry fails is the original error returned.
pub fn overlay<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>, op: OverlayOp) -> Result<Geometry<F>> {
    let exact = overlay_at_precision(a, b, op, None);
    let topology_error = match exact {
        Err(error @ Error::Topology { .. }) => error,
        other => return other,
    };

    let mut scale = initial_snap_scale(a, b);
    for _ in 0..3 {
        let precision_model = PrecisionModel::fixed(scale);
        match overlay_at_precision(a, b, op, Some(precision_model)) {
            Ok(result) => {
                info!(
                    "exact overlay failed; succeeded with snap rounding at scale {:?}",
                    scale
                );
                return Ok(result);
            }
            Err(Error::Topology { .. }) => scale /= 10.0,
            Err(other) => return Err(other),
        }
    }
    Err(topology_error)
}

/// Compute a boolean overlay with noding performed at a fixed precision:
/// computed intersection points are rounded onto the precision grid, and
/// edges or rings collapsed by the rounding are dropped from the result.
pub fn overlay_with_precision<F: GeoFloat>(
    a: &Geometry<F>,
    b: &Geometry<F>,
    op: OverlayOp,
    precision_model: PrecisionModel,
) -> Result<Geometry<F>> {
    let precision_model = Some(precision_model).filter(|pm| !pm.is_floating());
    overlay_at_precision(a, b, op, precision_model)
}

fn overlay_at_precision<F: GeoFloat>(
    a: &Geometry<F>,
    b: &Geometry<F>,
    op: OverlayOp,
    precision_model: Option<PrecisionModel>,
) -> Result<Geometry<F>> {
    let cow_a = GeometryCow::from(a);
    let cow_b = GeometryCow::from(b);
    relate::validate_coords(&cow_a)?;
    relate::validate_coords(&cow_b)?;

    let factory = *a.factory();

    // trivial results for empty operands
    if a.is_empty() || b.is_empty() {
        return Ok(empty_shortcircuit_result(a, b, op, &factory));
    }

    // disjoint union needs no graph: the result is the union of contents
    if op == OverlayOp::Union && !a.envelope().intersects(&b.envelope()) {
        let mut components = vec![];
        flatten_into(a.clone(), &mut components);
        flatten_into(b.clone(), &mut components);
        return Ok(assemble_components(components, &factory, op, a, b));
    }

    let raw = overlay_operation::compute_overlay(&cow_a, &cow_b, op, precision_model)?;

    let mut components: Vec<Geometry<F>> = vec![];
    for coord in raw.points {
        let mut point = Point::new(coord);
        point.set_factory(factory);
        components.push(Geometry::Point(point));
    }
    for coords in raw.lines {
        let mut line_string = LineString::from_coords(coords);
        line_string.set_factory(factory);
        components.push(Geometry::LineString(line_string));
    }
    for (shell, holes) in raw.polygons {
        let exterior = LinearRing::new(LineString::from_coords(shell));
        let interiors = holes
            .into_iter()
            .map(|hole| LinearRing::new(LineString::from_coords(hole)))
            .collect();
        let mut polygon = Polygon::from_rings(exterior, interiors);
        polygon.set_factory(factory);
        components.push(Geometry::Polygon(polygon));
    }

    Ok(assemble_components(components, &factory, op, a, b))
}

fn empty_shortcircuit_result<F: GeoFloat>(
    a: &Geometry<F>,
    b: &Geometry<F>,
    op: OverlayOp,
    factory: &GeometryFactory,
) -> Geometry<F> {
    match op {
        OverlayOp::Intersection => factory.create_empty(result_dimension(op, a, b)),
        OverlayOp::Union | OverlayOp::SymDifference => {
            if a.is_empty() && b.is_empty() {
                factory.create_empty(result_dimension(op, a, b))
            } else if a.is_empty() {
                b.clone()
            } else {
                a.clone()
            }
        }
        OverlayOp::Difference => {
            if a.is_empty() {
                factory.create_empty(result_dimension(op, a, b))
            } else {
                a.clone()
            }
        }
    }
}

/// The nominal dimension of the overlay result, per the operation: used to
/// type empty results.
fn result_dimension<F: GeoFloat>(op: OverlayOp, a: &Geometry<F>, b: &Geometry<F>) -> Dimensions {
    let dim_a = nominal_dimension(a);
    let dim_b = nominal_dimension(b);
    match op {
        OverlayOp::Intersection => dim_a.min(dim_b),
        OverlayOp::Union | OverlayOp::SymDifference => dim_a.max(dim_b),
        OverlayOp::Difference => dim_a,
    }
}

/// The dimension a geometry's type implies, regardless of emptiness.
fn nominal_dimension<F: GeoFloat>(geometry: &Geometry<F>) -> Dimensions {
    match geometry {
        Geometry::Point(_) | Geometry::MultiPoint(_) => Dimensions::ZeroDimensional,
        Geometry::LineString(_) | Geometry::LinearRing(_) | Geometry::MultiLineString(_) => {
            Dimensions::OneDimensional
        }
        Geometry::Polygon(_) | Geometry::MultiPolygon(_) => Dimensions::TwoDimensional,
        Geometry::GeometryCollection(collection) => collection
            .iter()
            .map(nominal_dimension)
            .max()
            .unwrap_or(Dimensions::Empty),
    }
}

/// Split a geometry into its primitive components.
fn flatten_into<F: GeoFloat>(geometry: Geometry<F>, out: &mut Vec<Geometry<F>>) {
    match geometry {
        Geometry::MultiPoint(multi) => {
            for point in multi.points() {
                out.push(Geometry::Point(point.clone()));
            }
        }
        Geometry::MultiLineString(multi) => {
            for line_string in multi.line_strings() {
                out.push(Geometry::LineString(line_string.clone()));
            }
        }
        Geometry::MultiPolygon(multi) => {
            for polygon in multi.polygons() {
                out.push(Geometry::Polygon(polygon.clone()));
            }
        }
        Geometry::GeometryCollection(collection) => {
            for child in collection.geometries() {
                flatten_into(child.clone(), out);
            }
        }
        primitive => out.push(primitive),
    }
}

/// Wrap the result components per their types: a bare geometry for a single
/// component, a typed multi-geometry for a homogeneous set, and a
/// `GeometryCollection` otherwise. An empty set becomes the empty geometry
/// of the operation's result dimension.
fn assemble_components<F: GeoFloat>(
    mut components: Vec<Geometry<F>>,
    factory: &GeometryFactory,
    op: OverlayOp,
    a: &Geometry<F>,
    b: &Geometry<F>,
) -> Geometry<F> {
    components.retain(|component| !component.is_empty());

    match components.len() {
        0 => factory.create_empty(result_dimension(op, a, b)),
        1 => components.pop().unwrap(),
        _ => {
            let all_points = components.iter().all(|g| matches!(g, Geometry::Point(_)));
            let all_lines = components
                .iter()
                .all(|g| matches!(g, Geometry::LineString(_)));
            let all_polygons = components.iter().all(|g| matches!(g, Geometry::Polygon(_)));

            if all_points {
                let points = components
                    .into_iter()
                    .map(|g| match g {
                        Geometry::Point(point) => point,
                        _ => unreachable!(),
                    })
                    .collect();
                Geometry::MultiPoint(factory.create_multi_point(points))
            } else if all_lines {
                let line_strings = components
                    .into_iter()
                    .map(|g| match g {
                        Geometry::LineString(line_string) => line_string,
                        _ => unreachable!(),
                    })
                    .collect();
                Geometry::MultiLineString(factory.create_multi_line_string(line_strings))
            } else if all_polygons {
                let polygons = components
                    .into_iter()
                    .map(|g| match g {
                        Geometry::Polygon(polygon) => polygon,
                        _ => unreachable!(),
                    })
                    .collect();
                Geometry::MultiPolygon(factory.create_multi_polygon(polygons))
            } else {
                Geometry::GeometryCollection(factory.create_geometry_collection(components))
            }
        }
    }
}

/// Whether a graph component with the given locations belongs to the
/// result of the operation. A boundary location counts as interior.
pub(crate) fn is_result_of_op(
    loc0: Option<CoordPos>,
    loc1: Option<CoordPos>,
    op: OverlayOp,
) -> bool {
    let in0 = matches!(loc0, Some(CoordPos::Inside) | Some(CoordPos::OnBoundary));
    let in1 = matches!(loc1, Some(CoordPos::Inside) | Some(CoordPos::OnBoundary));
    match op {
        OverlayOp::Intersection => in0 && in1,
        OverlayOp::Union => in0 || in1,
        OverlayOp::Difference => in0 && !in1,
        OverlayOp::SymDifference => in0 != in1,
    }
}

/// A heuristic grid scale for retrying a failed overlay: most of an f64's
/// precision, less the digits consumed by the inputs' magnitude.
fn initial_snap_scale<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> f64 {
    let mut magnitude: f64 = 1.0;
    for envelope in [a.envelope(), b.envelope()] {
        for bound in [
            envelope.min_x(),
            envelope.min_y(),
            envelope.max_x(),
            envelope.max_y(),
        ]
        .into_iter()
        .flatten()
        {
            let bound = bound.to_f64().unwrap_or(0.0).abs();
            if bound > magnitude {
                magnitude = bound;
            }
        }
    }
    let digits_left_of_point = magnitude.log10().ceil().max(0.0);
    10f64.powf(12.0 - digits_left_of_point)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::area::Area;
    use crate::{coord, line_string, point, polygon};

    fn square(x0: f64, y0: f64, size: f64) -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
        ])
    }

    #[test]
    fn overlapping_squares_intersection() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        let result = intersection(&a, &b).unwrap();
        assert_eq!(result.unsigned_area(), 25.0);
        assert!(matches!(result, Geometry::Polygon(_)));
    }

    #[test]
    fn overlapping_squares_union_area() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        let result = union(&a, &b).unwrap();
        assert_eq!(result.unsigned_area(), 175.0);
    }

    #[test]
    fn difference_of_overlapping_squares() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        let result = difference(&a, &b).unwrap();
        assert_eq!(result.unsigned_area(), 75.0);
    }

    #[test]
    fn sym_difference_of_overlapping_squares() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        let result = sym_difference(&a, &b).unwrap();
        assert_eq!(result.unsigned_area(), 150.0);
    }

    #[test]
    fn contained_square_difference_has_hole() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(2.0, 2.0, 2.0);
        let result = difference(&a, &b).unwrap();
        assert_eq!(result.unsigned_area(), 96.0);
        match result {
            Geometry::Polygon(polygon) => assert_eq!(polygon.interiors().len(), 1),
            other => panic!("expected a polygon, got {}", other.geometry_type()),
        }
    }

    #[test]
    fn crossing_lines_intersect_in_a_point() {
        let a = Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 10.0)]);
        let b = Geometry::LineString(line_string![(x: 0.0, y: 10.0), (x: 10.0, y: 0.0)]);
        let result = intersection(&a, &b).unwrap();
        assert_eq!(result, Geometry::Point(point! { x: 5.0, y: 5.0 }));
    }

    #[test]
    fn line_clipped_by_polygon() {
        let a = Geometry::LineString(line_string![(x: -5.0, y: 5.0), (x: 15.0, y: 5.0)]);
        let b = square(0.0, 0.0, 10.0);
        let result = intersection(&a, &b).unwrap();
        assert_eq!(
            result,
            Geometry::LineString(line_string![(x: 0.0, y: 5.0), (x: 10.0, y: 5.0)])
        );
    }

    #[test]
    fn union_of_disjoint_squares_is_a_multi_polygon() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(5.0, 5.0, 1.0);
        let result = union(&a, &b).unwrap();
        match result {
            Geometry::MultiPolygon(multi) => assert_eq!(multi.len(), 2),
            other => panic!("expected a multipolygon, got {}", other.geometry_type()),
        }
    }

    #[test]
    fn empty_operand_table() {
        let square = square(0.0, 0.0, 10.0);
        let empty = Geometry::Polygon(Polygon::<f64>::empty());

        assert_eq!(union(&square, &empty).unwrap(), square);
        assert_eq!(union(&empty, &square).unwrap(), square);
        assert!(intersection(&square, &empty).unwrap().is_empty());
        assert_eq!(difference(&square, &empty).unwrap(), square);
        assert!(difference(&empty, &square).unwrap().is_empty());
        assert_eq!(sym_difference(&square, &empty).unwrap(), square);
        assert_eq!(sym_difference(&empty, &square).unwrap(), square);
    }

    #[test]
    fn touching_squares_union_is_polygonal() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(10.0, 0.0, 10.0);
        let result = union(&a, &b).unwrap();
        assert_eq!(result.unsigned_area(), 200.0);
    }

    #[test]
    fn snap_rounding_of_near_parallel_lines() {
        // at scale 1 the two lines stay disjoint: their exact intersection
        // is empty, and no vertices snap together
        let a = Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 10.0)]);
        let b = Geometry::LineString(line_string![(x: 0.1, y: 0.0), (x: 10.1, y: 10.0)]);
        let result =
            overlay_with_precision(&a, &b, OverlayOp::Intersection, PrecisionModel::fixed(1.0))
                .unwrap();
        assert!(result.is_empty());

        // the result is reproducible bit-for-bit
        let again =
            overlay_with_precision(&a, &b, OverlayOp::Intersection, PrecisionModel::fixed(1.0))
                .unwrap();
        assert_eq!(result, again);
    }

    #[test]
    fn snap_rounding_intersection_lands_on_grid() {
        let a = Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 1.0)]);
        let b = Geometry::LineString(line_string![(x: 0.0, y: 1.0), (x: 10.0, y: 0.0)]);
        let result =
            overlay_with_precision(&a, &b, OverlayOp::Intersection, PrecisionModel::fixed(1.0))
                .unwrap();
        assert_eq!(result, Geometry::Point(Point::new(coord! { x: 5.0, y: 1.0 })));
    }

    #[test]
    fn point_in_polygon_intersection() {
        let a = square(0.0, 0.0, 10.0);
        let b = Geometry::Point(point! { x: 3.0, y: 3.0 });
        let result = intersection(&a, &b).unwrap();
        assert_eq!(result, b);
    }

    #[test]
    fn point_outside_polygon_intersection_is_empty() {
        let a = square(0.0, 0.0, 10.0);
        let b = Geometry::Point(point! { x: 30.0, y: 3.0 });
        assert!(intersection(&a, &b).unwrap().is_empty());
    }
}
