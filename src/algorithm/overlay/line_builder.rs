use super::edge_list::EdgeList;
use super::graph::OverlayGraph;
use super::{is_result_of_op, OverlayOp};
use crate::algorithm::coordinate_position::{coord_pos_relative_to_ring, CoordPos};
use crate::geometry::{Coord, LineString};
use crate::GeoFloat;

/// Collects the 1-dimensional parts of an overlay result: line edges of the
/// inputs that satisfy the operation and are not covered by the result
/// area, plus boundary edges that degenerate to lines in an intersection.
pub(crate) struct LineBuilder;

impl LineBuilder {
    pub fn build<F: GeoFloat>(
        graph: &mut OverlayGraph<F>,
        edge_list: &mut EdgeList<F>,
        op: OverlayOp,
        result_polygons: &[(Vec<Coord<F>>, Vec<Vec<Coord<F>>>)],
    ) -> Vec<Vec<Coord<F>>> {
        find_covered_line_edges(graph, edge_list, result_polygons);

        let mut line_edges = vec![];
        for dedge_id in 0..graph.dedges.len() {
            collect_line_edge(graph, edge_list, dedge_id, op, &mut line_edges);
            collect_boundary_touch_edge(graph, edge_list, dedge_id, op, &mut line_edges);
        }

        let mut lines = vec![];
        for edge_id in line_edges {
            edge_list.edges_mut()[edge_id].in_result = true;
            lines.push(edge_list.edge(edge_id).coords.clone());
        }
        lines
    }
}

/// Determine, for every line edge, whether it lies inside the result area.
///
/// Edges incident to a node touched by the result boundary are classified
/// by walking the node star; isolated line edges fall back to a
/// point-in-area test against the result polygons.
fn find_covered_line_edges<F: GeoFloat>(
    graph: &mut OverlayGraph<F>,
    edge_list: &mut EdgeList<F>,
    result_polygons: &[(Vec<Coord<F>>, Vec<Vec<Coord<F>>>)],
) {
    for node_id in 0..graph.nodes.len() {
        for (edge_id, covered) in graph.find_covered_line_edges(node_id) {
            let edge = &mut edge_list.edges_mut()[edge_id];
            if edge.covered.is_none() {
                edge.covered = Some(covered);
            }
        }
    }

    for dedge_id in 0..graph.dedges.len() {
        let dedge = &graph.dedges[dedge_id];
        if !dedge.is_line_edge() {
            continue;
        }
        let edge_id = dedge.edge;
        if edge_list.edge(edge_id).covered.is_some() {
            continue;
        }
        let coord = dedge.origin;
        let covered = is_covered_by_area(coord, result_polygons);
        edge_list.edges_mut()[edge_id].covered = Some(covered);
    }
}

fn collect_line_edge<F: GeoFloat>(
    graph: &mut OverlayGraph<F>,
    edge_list: &EdgeList<F>,
    dedge_id: usize,
    op: OverlayOp,
    line_edges: &mut Vec<usize>,
) {
    let dedge = &graph.dedges[dedge_id];
    if !dedge.is_line_edge() || dedge.visited {
        return;
    }
    let edge_id = dedge.edge;
    if edge_list.edge(edge_id).covered == Some(true) {
        return;
    }
    if is_result_of_op(
        dedge.label.on_position(0),
        dedge.label.on_position(1),
        op,
    ) {
        line_edges.push(edge_id);
        graph.set_visited_edge(dedge_id);
    }
}

/// Collect edges from an area boundary which touch the other geometry's
/// interior along a line: for an intersection, such edges belong to the
/// result even though no result area includes them.
fn collect_boundary_touch_edge<F: GeoFloat>(
    graph: &mut OverlayGraph<F>,
    edge_list: &EdgeList<F>,
    dedge_id: usize,
    op: OverlayOp,
    line_edges: &mut Vec<usize>,
) {
    let dedge = &graph.dedges[dedge_id];
    if dedge.is_line_edge() {
        return;
    }
    if dedge.visited {
        return;
    }
    if dedge.is_interior_area_edge() {
        return;
    }
    let edge_id = dedge.edge;
    if edge_list.edge(edge_id).in_result {
        return;
    }
    debug_assert!(
        !(dedge.in_result || graph.dedges[dedge.sym].in_result)
            || !edge_list.edge(edge_id).in_result
    );
    if is_result_of_op(
        dedge.label.on_position(0),
        dedge.label.on_position(1),
        op,
    ) && op == OverlayOp::Intersection
    {
        line_edges.push(edge_id);
        graph.set_visited_edge(dedge_id);
    }
}

/// Whether a coordinate lies in (or on the boundary of) any result polygon.
pub(super) fn is_covered_by_area<F: GeoFloat>(
    coord: Coord<F>,
    result_polygons: &[(Vec<Coord<F>>, Vec<Vec<Coord<F>>>)],
) -> bool {
    for (shell, holes) in result_polygons {
        let shell_ring = LineString::from_coords(shell.iter().copied());
        match coord_pos_relative_to_ring(coord, &shell_ring) {
            CoordPos::Outside => continue,
            CoordPos::OnBoundary => return true,
            CoordPos::Inside => {}
        }
        let mut in_hole = false;
        for hole in holes {
            let hole_ring = LineString::from_coords(hole.iter().copied());
            if coord_pos_relative_to_ring(coord, &hole_ring) == CoordPos::Inside {
                in_hole = true;
                break;
            }
        }
        if !in_hole {
            return true;
        }
    }
    false
}
