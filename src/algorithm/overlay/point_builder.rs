use super::edge_list::EdgeList;
use super::graph::OverlayGraph;
use super::line_builder::is_covered_by_area;
use super::{is_result_of_op, OverlayOp};
use crate::algorithm::intersects::Intersects;
use crate::geometry::{Coord, Line};
use crate::GeoFloat;

/// Collects the 0-dimensional parts of an overlay result: nodes which
/// satisfy the operation but are covered by neither a result line nor a
/// result area.
pub(crate) struct PointBuilder;

impl PointBuilder {
    pub fn build<F: GeoFloat>(
        graph: &OverlayGraph<F>,
        edge_list: &EdgeList<F>,
        op: OverlayOp,
        result_polygons: &[(Vec<Coord<F>>, Vec<Vec<Coord<F>>>)],
        result_lines: &[Vec<Coord<F>>],
    ) -> Vec<Coord<F>> {
        let mut points = vec![];
        for node_id in 0..graph.nodes.len() {
            let node = &graph.nodes[node_id];

            // if an incident edge was emitted, the node coordinate is
            // already part of the result
            if graph.is_incident_edge_in_result(node_id, edge_list) {
                continue;
            }

            // for nodes on edges, only an intersection can turn the node
            // itself into a result point
            if !node.star.is_empty() && op != OverlayOp::Intersection {
                continue;
            }

            if !is_result_of_op(
                node.label.on_position(0),
                node.label.on_position(1),
                op,
            ) {
                continue;
            }

            // drop nodes covered by a higher-dimensional result component
            if is_covered_by_line(node.coord, result_lines)
                || is_covered_by_area(node.coord, result_polygons)
            {
                continue;
            }

            points.push(node.coord);
        }
        points
    }
}

fn is_covered_by_line<F: GeoFloat>(coord: Coord<F>, result_lines: &[Vec<Coord<F>>]) -> bool {
    for line in result_lines {
        for segment in line.windows(2) {
            if Line::new(segment[0], segment[1]).intersects(&coord) {
                return true;
            }
        }
    }
    false
}
