pub(crate) use edge_end_builder::EdgeEndBuilder;
pub use geomgraph::boundary_node_rule::BoundaryNodeRule;
pub use geomgraph::intersection_matrix::IntersectionMatrix;
pub use prepared_geometry::PreparedGeometry;

use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::{GeoFloat, GeometryCow, Result};

mod edge_end_builder;
pub(crate) mod geomgraph;
mod prepared_geometry;
mod relate_operation;

/// Topologically relate two geometries based on
/// [DE-9IM](https://en.wikipedia.org/wiki/DE-9IM) semantics.
///
/// See [`IntersectionMatrix`] for details.
///
/// # Examples
///
/// ```
/// use sfgeo::{coord, line_string, polygon};
/// use sfgeo::relate::Relate;
///
/// let square = polygon![(x: 2.0, y: 2.0), (x: 4.0, y: 2.0), (x: 4.0, y: 4.0), (x: 2.0, y: 4.0)];
/// let line = line_string![(x: 2.0, y: 2.0), (x: 4.0, y: 4.0)];
///
/// let intersection_matrix = square.relate(&line).unwrap();
/// assert!(intersection_matrix.is_intersects());
/// assert!(!intersection_matrix.is_disjoint());
/// assert!(intersection_matrix.is_contains());
/// assert!(!intersection_matrix.is_within());
///
/// let boundary = line_string![
///     (x: 2.0, y: 2.0),
///     (x: 4.0, y: 2.0),
///     (x: 4.0, y: 4.0),
///     (x: 2.0, y: 4.0),
///     (x: 2.0, y: 2.0),
/// ];
/// let intersection_matrix = square.relate(&boundary).unwrap();
/// assert!(intersection_matrix.is_intersects());
/// // polygons don't contain their own boundary
/// assert!(!intersection_matrix.is_contains());
/// ```
///
/// Inputs with NaN or infinite X/Y ordinates are rejected with
/// [`Error::Argument`](crate::Error::Argument).
pub trait Relate<F, T> {
    fn relate(&self, other: &T) -> Result<IntersectionMatrix>;
}

/// `relate`, with an explicit [`BoundaryNodeRule`] instead of the default
/// OGC Mod-2 rule.
pub fn relate_with_boundary_node_rule<F: GeoFloat>(
    geom_a: &Geometry<F>,
    geom_b: &Geometry<F>,
    boundary_node_rule: BoundaryNodeRule,
) -> Result<IntersectionMatrix> {
    let cow_a = GeometryCow::from(geom_a);
    let cow_b = GeometryCow::from(geom_b);
    relate_cows(&cow_a, &cow_b, boundary_node_rule)
}

pub(crate) fn relate_cows<F: GeoFloat>(
    geom_a: &GeometryCow<F>,
    geom_b: &GeometryCow<F>,
    boundary_node_rule: BoundaryNodeRule,
) -> Result<IntersectionMatrix> {
    validate_coords(geom_a)?;
    validate_coords(geom_b)?;
    let mut relate_computer = relate_operation::RelateOperation::new(geom_a, geom_b, boundary_node_rule);
    relate_computer.compute_intersection_matrix()
}

/// The topology engines key nodes by coordinate, which requires finite X and
/// Y ordinates.
pub(crate) fn validate_coords<F: GeoFloat>(geometry: &GeometryCow<F>) -> Result<()> {
    let mut coords = vec![];
    geometry.push_coords(&mut coords);
    if coords.iter().all(crate::utils::is_finite_xy) {
        Ok(())
    } else {
        Err(crate::Error::argument(
            "geometry has NaN or infinite X/Y ordinates",
        ))
    }
}

impl<F: GeoFloat> Relate<F, GeometryCow<'_, F>> for GeometryCow<'_, F> {
    fn relate(&self, other: &GeometryCow<F>) -> Result<IntersectionMatrix> {
        relate_cows(self, other, BoundaryNodeRule::default())
    }
}

macro_rules! relate_impl {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<F: GeoFloat, Rhs> Relate<F, Rhs> for $t
            where
                for<'a> GeometryCow<'a, F>: From<&'a Rhs>,
            {
                fn relate(&self, other: &Rhs) -> Result<IntersectionMatrix> {
                    let cow_self: GeometryCow<F> = self.into();
                    let cow_other: GeometryCow<F> = other.into();
                    cow_self.relate(&cow_other)
                }
            }
        )+
    };
}

relate_impl![
    Point<F>,
    LineString<F>,
    LinearRing<F>,
    Polygon<F>,
    MultiPoint<F>,
    MultiLineString<F>,
    MultiPolygon<F>,
    GeometryCollection<F>,
    Geometry<F>,
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::{line_string, point, polygon};

    #[test]
    fn trait_dispatch_across_types() {
        let square = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)];
        let point = point! { x: 1.0, y: 1.0 };
        let im = square.relate(&point).unwrap();
        assert!(im.is_contains());

        let line = line_string![(x: -5.0, y: 5.0), (x: 15.0, y: 5.0)];
        let im = square.relate(&line).unwrap();
        assert!(im.is_intersects());
        assert!(!im.is_contains());
    }

    #[test]
    fn nan_input_is_rejected() {
        let square = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)];
        let bad = point! { x: f64::NAN, y: 1.0 };
        assert!(matches!(
            square.relate(&bad),
            Err(crate::Error::Argument(_))
        ));
    }

    #[test]
    fn boundary_node_rules_differ_on_closed_lines() {
        // a closed line has no boundary under Mod-2, but its endpoint is a
        // boundary node under the Endpoint rule
        let ring = Geometry::LineString(line_string![
            (x: 0.0, y: 0.0),
            (x: 5.0, y: 0.0),
            (x: 5.0, y: 5.0),
            (x: 0.0, y: 0.0),
        ]);
        let endpoint = Geometry::Point(point! { x: 0.0, y: 0.0 });

        let im = relate_with_boundary_node_rule(&ring, &endpoint, BoundaryNodeRule::Mod2).unwrap();
        assert!(im.is_contains());

        let im =
            relate_with_boundary_node_rule(&ring, &endpoint, BoundaryNodeRule::Endpoint).unwrap();
        assert!(!im.is_contains());
        assert!(im.is_intersects());
    }
}
