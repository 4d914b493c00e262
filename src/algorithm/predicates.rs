//! The named topological predicates, as free functions over [`Geometry`]
//! references.
//!
//! Every predicate is derived from the DE-9IM matrix computed by
//! [`Relate`](crate::algorithm::relate::Relate), with envelope
//! short-circuits applied where they are sound. Symmetric predicates are
//! commutative; `contains(a, b) == within(b, a)` and
//! `covers(a, b) == covered_by(b, a)`.

use crate::algorithm::dimensions::HasDimensions;
use crate::algorithm::envelope::HasEnvelope;
use crate::algorithm::relate::{IntersectionMatrix, Relate};
use crate::geometry::Geometry;
use crate::{GeoFloat, Result};

/// The DE-9IM matrix of the pair, as a 9-character string in `{F,0,1,2}`.
pub fn relate_matrix<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<IntersectionMatrix> {
    a.relate(b)
}

/// Whether the DE-9IM matrix of the pair matches `pattern`, a 9-character
/// mask in `{F, T, 0, 1, 2, *}`.
pub fn relate_pattern<F: GeoFloat>(
    a: &Geometry<F>,
    b: &Geometry<F>,
    pattern: &str,
) -> Result<bool> {
    a.relate(b)?.matches(pattern)
}

/// Whether the geometries share any point.
pub fn intersects<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<bool> {
    if !a.envelope().intersects(&b.envelope()) {
        return Ok(false);
    }
    Ok(a.relate(b)?.is_intersects())
}

/// Whether the geometries share no point.
pub fn disjoint<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<bool> {
    intersects(a, b).map(|value| !value)
}

/// Whether `b` lies in the interior and boundary of `a`, with at least one
/// point of `b` interior to `a`.
pub fn contains<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<bool> {
    if !b.is_empty() && !a.envelope().contains_envelope(&b.envelope()) {
        return Ok(false);
    }
    Ok(a.relate(b)?.is_contains())
}

/// `contains`, with the arguments reversed.
pub fn within<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<bool> {
    contains(b, a)
}

/// Like `contains`, but allowing `b` to lie entirely in `a`'s boundary.
pub fn covers<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<bool> {
    if !b.is_empty() && !a.envelope().contains_envelope(&b.envelope()) {
        return Ok(false);
    }
    Ok(a.relate(b)?.is_covers())
}

/// `covers`, with the arguments reversed.
pub fn covered_by<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<bool> {
    covers(b, a)
}

/// Whether the geometries intersect, but their interiors do not. Not
/// defined (always false) for two points.
pub fn touches<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<bool> {
    if !a.envelope().intersects(&b.envelope()) {
        return Ok(false);
    }
    Ok(a.relate(b)?.is_touches(a.dimensions(), b.dimensions()))
}

/// Whether the interiors intersect in a lower-dimensional set and each
/// geometry reaches the other's exterior.
pub fn crosses<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<bool> {
    if !a.envelope().intersects(&b.envelope()) {
        return Ok(false);
    }
    Ok(a.relate(b)?.is_crosses(a.dimensions(), b.dimensions()))
}

/// Whether the interiors intersect in a set of the common dimension and
/// each geometry reaches the other's exterior.
pub fn overlaps<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<bool> {
    if !a.envelope().intersects(&b.envelope()) {
        return Ok(false);
    }
    Ok(a.relate(b)?.is_overlaps(a.dimensions(), b.dimensions()))
}

/// Whether the geometries represent the same point set. Two empty
/// geometries are topologically equal regardless of their nominal types.
pub fn equals_topo<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<bool> {
    if a.is_empty() && b.is_empty() {
        return Ok(true);
    }
    if a.is_empty() != b.is_empty() {
        return Ok(false);
    }
    Ok(a.relate(b)?.is_equal_topo(a.dimensions(), b.dimensions()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{line_string, point, polygon};

    fn square(origin: f64, size: f64) -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: origin, y: origin),
            (x: origin + size, y: origin),
            (x: origin + size, y: origin + size),
            (x: origin, y: origin + size),
        ])
    }

    #[test]
    fn symmetric_predicates_commute() {
        let a = square(0.0, 10.0);
        let b = square(5.0, 10.0);
        assert_eq!(intersects(&a, &b).unwrap(), intersects(&b, &a).unwrap());
        assert_eq!(overlaps(&a, &b).unwrap(), overlaps(&b, &a).unwrap());
        assert_eq!(touches(&a, &b).unwrap(), touches(&b, &a).unwrap());
        assert_eq!(equals_topo(&a, &b).unwrap(), equals_topo(&b, &a).unwrap());
    }

    #[test]
    fn containment_duality() {
        let a = square(0.0, 10.0);
        let b = square(2.0, 2.0);
        assert!(contains(&a, &b).unwrap());
        assert!(within(&b, &a).unwrap());
        assert!(covers(&a, &b).unwrap());
        assert!(covered_by(&b, &a).unwrap());
        assert!(!contains(&b, &a).unwrap());
    }

    #[test]
    fn crossing_lines() {
        let a = Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 10.0)]);
        let b = Geometry::LineString(line_string![(x: 0.0, y: 10.0), (x: 10.0, y: 0.0)]);
        assert!(crosses(&a, &b).unwrap());
        assert!(intersects(&a, &b).unwrap());
        assert!(!touches(&a, &b).unwrap());
    }

    #[test]
    fn empty_table() {
        let empty_a = Geometry::Polygon(crate::Polygon::<f64>::empty());
        let empty_b = Geometry::Point(crate::Point::<f64>::empty());
        let something = Geometry::Point(point! { x: 1.0, y: 1.0 });

        assert!(equals_topo(&empty_a, &empty_b).unwrap());
        assert!(disjoint(&empty_a, &empty_b).unwrap());
        assert!(!intersects(&empty_a, &empty_b).unwrap());
        assert!(!contains(&empty_a, &something).unwrap());
        assert!(!equals_topo(&empty_a, &something).unwrap());
        assert!(disjoint(&empty_a, &something).unwrap());
    }

    #[test]
    fn point_and_polygon_boundary() {
        let a = square(0.0, 10.0);
        let boundary_point = Geometry::Point(point! { x: 0.0, y: 5.0 });
        assert!(intersects(&a, &boundary_point).unwrap());
        assert!(!contains(&a, &boundary_point).unwrap());
        assert!(covers(&a, &boundary_point).unwrap());
        assert!(touches(&a, &boundary_point).unwrap());
    }
}
