use super::geomgraph::index::Segment;
use super::geomgraph::node_map::NodeMap;
use super::geomgraph::planar_graph::PlanarGraphNode;
use super::geomgraph::{Edge, GeometryGraph, RobustLineIntersector};
use super::relate_operation::RelateOperation;
use super::IntersectionMatrix;
use crate::algorithm::euclidean_distance::{distance_cow, nearest_points_cow};
use crate::geometry::{Coord, Geometry};
use crate::{GeoFloat, GeometryCow, Result};

use rstar::RTree;
use std::sync::{Arc, OnceLock};

/// A `PreparedGeometry` amortizes the cost of repeated predicate queries
/// against a single reference geometry.
///
/// It caches the reference geometry's self-noded topology graph and a
/// spatial index of its segments; each query deep-copies the cached graph
/// instead of re-noding the geometry.
///
/// The cache is built lazily on first use behind a one-time initialization
/// barrier, so a `PreparedGeometry` may be shared across threads and
/// queried concurrently. Every query returns exactly the value the
/// equivalent non-prepared call would.
///
/// ```
/// use sfgeo::{point, polygon};
/// use sfgeo::relate::PreparedGeometry;
///
/// let square = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)];
/// let prepared = PreparedGeometry::from(&square);
///
/// let inside = sfgeo::Geometry::Point(point! { x: 1.0, y: 1.0 });
/// let outside = sfgeo::Geometry::Point(point! { x: 11.0, y: 11.0 });
/// assert!(prepared.contains(&inside).unwrap());
/// assert!(!prepared.contains(&outside).unwrap());
/// ```
pub struct PreparedGeometry<'a, F: GeoFloat = f64> {
    geometry: GeometryCow<'a, F>,
    cache: OnceLock<PreparedCache<F>>,
}

/// The lazily-built immutable state shared by all queries.
struct PreparedCache<F: GeoFloat> {
    nodes: NodeMap<F, PlanarGraphNode>,
    edges: Vec<Edge<F>>,
    tree: Arc<RTree<Segment<F>>>,
}

impl<'a, F: GeoFloat> From<&'a Geometry<F>> for PreparedGeometry<'a, F> {
    fn from(geometry: &'a Geometry<F>) -> Self {
        PreparedGeometry {
            geometry: GeometryCow::from(geometry),
            cache: OnceLock::new(),
        }
    }
}

impl<F: GeoFloat> From<Geometry<F>> for PreparedGeometry<'static, F> {
    fn from(geometry: Geometry<F>) -> Self {
        PreparedGeometry {
            geometry: GeometryCow::from(geometry),
            cache: OnceLock::new(),
        }
    }
}

macro_rules! prepared_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl<'a, F: GeoFloat> From<&'a crate::geometry::$variant<F>> for PreparedGeometry<'a, F> {
                fn from(geometry: &'a crate::geometry::$variant<F>) -> Self {
                    PreparedGeometry {
                        geometry: GeometryCow::from(geometry),
                        cache: OnceLock::new(),
                    }
                }
            }
        )+
    };
}

prepared_from![
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
];

impl<'a, F: GeoFloat> PreparedGeometry<'a, F> {
    fn cache(&self) -> &PreparedCache<F> {
        self.cache.get_or_init(|| {
            let mut graph = GeometryGraph::new(0, self.geometry.clone());
            let tree = Arc::new(graph.build_tree());
            graph.set_tree(tree.clone());
            graph.compute_self_nodes(Box::new(RobustLineIntersector::new()));
            PreparedCache {
                nodes: graph.nodes_snapshot(),
                edges: graph.edges_snapshot(),
                tree,
            }
        })
    }

    /// Materialize a working graph from the cached template, labeled as
    /// argument `arg_index` of a relate.
    pub(crate) fn geometry_graph(&self, arg_index: usize) -> GeometryGraph<'_, F> {
        let cache = self.cache();
        GeometryGraph::from_template(
            arg_index,
            self.geometry.clone(),
            cache.nodes.clone(),
            &cache.edges,
            Arc::clone(&cache.tree),
        )
    }

    pub(crate) fn geometry(&self) -> &GeometryCow<'a, F> {
        &self.geometry
    }

    /// The DE-9IM matrix relating the prepared geometry (as the first
    /// input) to `other`.
    pub fn relate(&self, other: &Geometry<F>) -> Result<IntersectionMatrix> {
        let other = GeometryCow::from(other);
        super::validate_coords(&self.geometry)?;
        super::validate_coords(&other)?;
        let graph_a = self.geometry_graph(0);
        let graph_b = GeometryGraph::new(1, other);
        RelateOperation::from_graphs(graph_a, graph_b).compute_intersection_matrix()
    }

    /// Relate against another prepared geometry, re-using both caches.
    pub fn relate_prepared(&self, other: &PreparedGeometry<F>) -> Result<IntersectionMatrix> {
        super::validate_coords(&self.geometry)?;
        super::validate_coords(other.geometry())?;
        let graph_a = self.geometry_graph(0);
        let graph_b = other.geometry_graph(1);
        RelateOperation::from_graphs(graph_a, graph_b).compute_intersection_matrix()
    }

    pub fn intersects(&self, other: &Geometry<F>) -> Result<bool> {
        use crate::algorithm::envelope::HasEnvelope;
        // cheap envelope rejection before any graph work
        if !self.geometry.envelope().intersects(&other.envelope()) {
            return Ok(false);
        }
        Ok(self.relate(other)?.is_intersects())
    }

    pub fn contains(&self, other: &Geometry<F>) -> Result<bool> {
        use crate::algorithm::envelope::HasEnvelope;
        if !self.geometry.envelope().contains_envelope(&other.envelope()) {
            return Ok(false);
        }
        Ok(self.relate(other)?.is_contains())
    }

    /// `contains`, with the stricter requirement that `other` does not
    /// touch the boundary: matches the DE-9IM pattern `T**FF*FF*`.
    pub fn contains_properly(&self, other: &Geometry<F>) -> Result<bool> {
        use crate::algorithm::envelope::HasEnvelope;
        if !self.geometry.envelope().contains_envelope(&other.envelope()) {
            return Ok(false);
        }
        self.relate(other)?.matches("T**FF*FF*")
    }

    pub fn covers(&self, other: &Geometry<F>) -> Result<bool> {
        use crate::algorithm::envelope::HasEnvelope;
        if !self.geometry.envelope().contains_envelope(&other.envelope()) {
            return Ok(false);
        }
        Ok(self.relate(other)?.is_covers())
    }

    pub fn covered_by(&self, other: &Geometry<F>) -> Result<bool> {
        Ok(self.relate(other)?.is_covered_by())
    }

    pub fn distance(&self, other: &Geometry<F>) -> Result<F> {
        distance_cow(&self.geometry, &GeometryCow::from(other))
    }

    pub fn nearest_points(&self, other: &Geometry<F>) -> Result<(Coord<F>, Coord<F>)> {
        nearest_points_cow(&self.geometry, &GeometryCow::from(other))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{point, polygon};

    #[test]
    fn relate() {
        let p1 = polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 1.0, y: 1.0)];
        let p2 = polygon![(x: 0.5, y: 0.0), (x: 2.0, y: 0.0), (x: 1.0, y: 1.0)];
        let prepared_1 = PreparedGeometry::from(&p1);
        let prepared_2 = PreparedGeometry::from(&p2);
        assert!(prepared_1.relate_prepared(&prepared_2).unwrap().is_contains());
        assert!(prepared_2.relate_prepared(&prepared_1).unwrap().is_within());
    }

    #[test]
    fn swap_arg_index() {
        let poly = polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 1.0, y: 1.0)];
        let prepared_geom = PreparedGeometry::from(&poly);

        let poly_cow = GeometryCow::from(&poly);

        let cached_graph = prepared_geom.geometry_graph(0);
        let mut fresh_graph = GeometryGraph::new(0, poly_cow.clone());
        fresh_graph.compute_self_nodes(Box::new(RobustLineIntersector::new()));
        cached_graph.assert_eq_graph(&fresh_graph);
    }

    #[test]
    fn prepared_matches_unprepared() {
        use crate::algorithm::relate::Relate;

        let square = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)];
        let prepared = PreparedGeometry::from(&square);

        let on_boundary = Geometry::Point(point! { x: 0.0, y: 5.0 });
        let inside = Geometry::Point(point! { x: 5.0, y: 5.0 });

        assert_eq!(
            prepared.contains(&on_boundary).unwrap(),
            square.relate(&on_boundary).unwrap().is_contains()
        );
        assert_eq!(
            prepared.covers(&on_boundary).unwrap(),
            square.relate(&on_boundary).unwrap().is_covers()
        );
        assert!(prepared.contains(&inside).unwrap());
        assert!(prepared.contains_properly(&inside).unwrap());
        assert!(!prepared.contains_properly(&on_boundary).unwrap());
    }

    #[test]
    fn prepared_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PreparedGeometry<'static, f64>>();
    }
}
