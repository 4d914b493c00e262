use super::super::GeometryGraph;
use super::{EdgeSetIntersector, SegmentIntersector};
use crate::GeoFloat;

use std::cell::RefCell;

/// Tests every segment pair - no pruning. Quadratic, but with no index
/// build-up cost; also serves as the reference implementation for
/// cross-checking the indexed intersector.
pub(crate) struct SimpleEdgeSetIntersector;

impl<F> EdgeSetIntersector<F> for SimpleEdgeSetIntersector
where
    F: GeoFloat,
{
    fn compute_intersections_within_set(
        &self,
        graph: &GeometryGraph<F>,
        check_for_self_intersecting_edges: bool,
        segment_intersector: &mut SegmentIntersector<F>,
    ) {
        let edges = graph.edges();
        for edge_0 in edges {
            for edge_1 in edges {
                if check_for_self_intersecting_edges || edge_0.as_ptr() != edge_1.as_ptr() {
                    self.compute_intersects(edge_0, edge_1, segment_intersector);
                }
            }
        }
    }

    fn compute_intersections_between_sets<'a>(
        &self,
        graph_0: &GeometryGraph<'a, F>,
        graph_1: &GeometryGraph<'a, F>,
        segment_intersector: &mut SegmentIntersector<F>,
    ) {
        for edge_0 in graph_0.edges() {
            for edge_1 in graph_1.edges() {
                self.compute_intersects(edge_0, edge_1, segment_intersector);
            }
        }
    }
}

impl SimpleEdgeSetIntersector {
    fn compute_intersects<F: GeoFloat>(
        &self,
        edge_0: &RefCell<crate::algorithm::relate::geomgraph::Edge<F>>,
        edge_1: &RefCell<crate::algorithm::relate::geomgraph::Edge<F>>,
        segment_intersector: &mut SegmentIntersector<F>,
    ) {
        let segment_count_0 = edge_0.borrow().coords().len() - 1;
        let segment_count_1 = edge_1.borrow().coords().len() - 1;
        for i in 0..segment_count_0 {
            for j in 0..segment_count_1 {
                segment_intersector.add_intersections(edge_0, i, edge_1, j);
            }
        }
    }
}
