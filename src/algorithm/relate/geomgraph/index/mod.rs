pub(crate) use edge_set_intersector::EdgeSetIntersector;
pub(crate) use rstar_edge_set_intersector::RStarEdgeSetIntersector;
pub(crate) use segment::Segment;
pub(crate) use segment_intersector::SegmentIntersector;
pub(crate) use simple_edge_set_intersector::SimpleEdgeSetIntersector;

mod edge_set_intersector;
mod rstar_edge_set_intersector;
mod segment;
mod segment_intersector;
mod simple_edge_set_intersector;
