use super::edge_list::EdgeList;
use super::graph::OverlayGraph;
use super::line_builder::LineBuilder;
use super::point_builder::PointBuilder;
use super::polygon_builder::PolygonBuilder;
use super::OverlayOp;
use crate::algorithm::coordinate_position::CoordPos;
use crate::algorithm::relate::geomgraph::{GeometryGraph, RobustLineIntersector};
use crate::geometry::{Coord, PrecisionModel};
use crate::{interrupt, GeoFloat, GeometryCow, Result};

/// The raw parts of an overlay result, before geometry assembly.
pub(crate) struct RawOverlay<F: GeoFloat> {
    pub polygons: Vec<(Vec<Coord<F>>, Vec<Vec<Coord<F>>>)>,
    pub lines: Vec<Vec<Coord<F>>>,
    pub points: Vec<Coord<F>>,
}

/// Run the overlay engine proper: node the inputs, build and label the
/// directed-edge graph, select the result edges, and assemble rings, lines,
/// and points.
pub(crate) fn compute_overlay<F: GeoFloat>(
    geom_a: &GeometryCow<F>,
    geom_b: &GeometryCow<F>,
    op: OverlayOp,
    precision_model: Option<PrecisionModel>,
) -> Result<RawOverlay<F>> {
    let line_intersector = match precision_model {
        Some(precision_model) => RobustLineIntersector::with_precision_model(precision_model),
        None => RobustLineIntersector::new(),
    };

    let mut graph_a = GeometryGraph::new(0, geom_a.clone());
    let mut graph_b = GeometryGraph::new(1, geom_b.clone());

    // capture the input nodes (points, line endpoints, ring anchors) before
    // noding, so point inputs are considered for the result
    let mut input_nodes: Vec<(Coord<F>, usize, CoordPos)> = vec![];
    for (arg_index, graph) in [(0, &graph_a), (1, &graph_b)] {
        for node in graph.nodes_iter() {
            if let Some(position) = node.label().on_position(arg_index) {
                input_nodes.push((*node.coordinate(), arg_index, position));
            }
        }
    }

    interrupt::check()?;

    graph_a.compute_self_nodes(Box::new(line_intersector.clone()));
    graph_b.compute_self_nodes(Box::new(line_intersector.clone()));
    graph_a.compute_edge_intersections(&graph_b, Box::new(line_intersector));

    interrupt::check()?;

    // split the noded edges and merge duplicates, accumulating depths
    let mut edge_list = EdgeList::new();
    for graph in [&graph_a, &graph_b] {
        for edge in graph.edges() {
            for split_edge in edge.borrow_mut().split_edges() {
                edge_list.insert_unique_edge(split_edge);
            }
        }
    }
    edge_list.compute_labels_from_depths();
    edge_list.replace_collapsed_edges();

    interrupt::check()?;

    let mut graph = OverlayGraph::build(&edge_list);
    for (coord, arg_index, position) in input_nodes {
        let node_id = graph.get_or_insert_node(coord);
        graph.nodes[node_id]
            .label
            .set_on_position(arg_index, position);
    }

    graph.compute_labelling(&graph_a, &graph_b)?;
    graph.label_incomplete_nodes(&graph_a, &graph_b);

    graph.find_result_area_edges(op);
    graph.cancel_duplicate_result_edges();

    interrupt::check()?;

    let polygons = PolygonBuilder::build(&mut graph, &edge_list)?;
    let lines = LineBuilder::build(&mut graph, &mut edge_list, op, &polygons);
    let points = PointBuilder::build(&graph, &edge_list, op, &polygons, &lines);

    Ok(RawOverlay {
        polygons,
        lines,
        points,
    })
}
