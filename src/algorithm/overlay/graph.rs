use super::edge_list::EdgeList;
use super::OverlayOp;
use crate::algorithm::coordinate_position::{CoordPos, CoordinatePosition};
use crate::algorithm::dimensions::{Dimensions, HasDimensions};
use crate::algorithm::kernels::{Kernel, Orientation};
use crate::algorithm::relate::geomgraph::{Direction, GeometryGraph, Label, Quadrant};
use crate::geometry::Coord;
use crate::utils::lex_cmp;
use crate::{Error, GeoFloat, Result};

use std::collections::BTreeMap;

pub(crate) type EdgeId = usize;
pub(crate) type DirEdgeId = usize;
pub(crate) type NodeId = usize;

/// One of the two directed traversals of an [`OverlayEdge`](super::edge_list::OverlayEdge).
///
/// Twin (`sym`) and result-linking (`next`, `next_min`) references are dense
/// indices into the owning [`OverlayGraph`]; the whole graph is dropped at
/// the end of the operation.
#[derive(Debug, Clone)]
pub(crate) struct DirectedEdge<F: GeoFloat> {
    pub edge: EdgeId,
    pub forward: bool,
    /// the node this directed edge leaves from
    pub node: NodeId,
    pub origin: Coord<F>,
    pub directed_to: Coord<F>,
    /// the parent edge's label, sides flipped for the reverse traversal
    pub label: Label,
    pub sym: DirEdgeId,
    /// the next in-result edge when traversing the result rings
    pub next: Option<DirEdgeId>,
    /// the next edge when decomposing a maximal ring into minimal rings
    pub next_min: Option<DirEdgeId>,
    pub edge_ring: Option<usize>,
    pub min_edge_ring: Option<usize>,
    pub in_result: bool,
    pub visited: bool,
}

impl<F: GeoFloat> DirectedEdge<F> {
    /// A line edge: carries a line label for some input and no area side
    /// information placing it inside an input.
    pub fn is_line_edge(&self) -> bool {
        let is_line = self.label.is_line(0) || self.label.is_line(1);
        let is_exterior_if_area_0 =
            !self.label.is_geom_area(0) || self.label.all_positions_equal(0, CoordPos::Outside);
        let is_exterior_if_area_1 =
            !self.label.is_geom_area(1) || self.label.all_positions_equal(1, CoordPos::Outside);
        is_line && is_exterior_if_area_0 && is_exterior_if_area_1
    }

    /// An edge with both sides in the interior of every area operand; such
    /// edges never bound the result.
    pub fn is_interior_area_edge(&self) -> bool {
        (0..2).all(|geom_index| {
            self.label.is_geom_area(geom_index)
                && self.label.position(geom_index, Direction::Left) == Some(CoordPos::Inside)
                && self.label.position(geom_index, Direction::Right) == Some(CoordPos::Inside)
        })
    }
}

/// A node of the overlay graph: its coordinate, its aggregated label, and
/// the outgoing directed edges in CCW order.
#[derive(Debug, Clone)]
pub(crate) struct OverlayNode<F: GeoFloat> {
    pub coord: Coord<F>,
    pub label: Label,
    /// outgoing directed edges, sorted CCW from the positive x-axis
    pub star: Vec<DirEdgeId>,
}

impl<F: GeoFloat> OverlayNode<F> {
    pub fn is_isolated(&self) -> bool {
        self.label.geometry_count() == 1
    }
}

/// The planar graph the overlay result is assembled from.
pub(crate) struct OverlayGraph<F: GeoFloat> {
    pub dedges: Vec<DirectedEdge<F>>,
    pub nodes: Vec<OverlayNode<F>>,
    node_index: BTreeMap<NodeKey<F>, NodeId>,
}

struct NodeKey<F: GeoFloat>(Coord<F>);

impl<F: GeoFloat> PartialEq for NodeKey<F> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<F: GeoFloat> Eq for NodeKey<F> {}
impl<F: GeoFloat> PartialOrd for NodeKey<F> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<F: GeoFloat> Ord for NodeKey<F> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        lex_cmp(&self.0, &other.0)
    }
}

impl<F: GeoFloat> OverlayGraph<F> {
    /// Build the directed graph: a twin pair of directed edges per noded
    /// edge, attached to nodes with CCW-sorted stars.
    pub fn build(edge_list: &EdgeList<F>) -> Self {
        let mut graph = OverlayGraph {
            dedges: vec![],
            nodes: vec![],
            node_index: BTreeMap::new(),
        };

        for (edge_id, edge) in edge_list.edges().iter().enumerate() {
            let coords = &edge.coords;
            debug_assert!(coords.len() >= 2);

            let forward_id = graph.dedges.len();
            let reverse_id = forward_id + 1;

            let forward_node = graph.get_or_insert_node(coords[0]);
            let reverse_node = graph.get_or_insert_node(coords[coords.len() - 1]);

            let forward_label = edge.label.clone();
            let mut reverse_label = edge.label.clone();
            reverse_label.flip();

            graph.dedges.push(DirectedEdge {
                edge: edge_id,
                forward: true,
                node: forward_node,
                origin: coords[0],
                directed_to: coords[1],
                label: forward_label,
                sym: reverse_id,
                next: None,
                next_min: None,
                edge_ring: None,
                min_edge_ring: None,
                in_result: false,
                visited: false,
            });
            graph.dedges.push(DirectedEdge {
                edge: edge_id,
                forward: false,
                node: reverse_node,
                origin: coords[coords.len() - 1],
                directed_to: coords[coords.len() - 2],
                label: reverse_label,
                sym: forward_id,
                next: None,
                next_min: None,
                edge_ring: None,
                min_edge_ring: None,
                in_result: false,
                visited: false,
            });

            graph.nodes[forward_node].star.push(forward_id);
            graph.nodes[reverse_node].star.push(reverse_id);
        }

        for node_id in 0..graph.nodes.len() {
            graph.sort_star(node_id);
        }

        graph
    }

    pub fn get_or_insert_node(&mut self, coord: Coord<F>) -> NodeId {
        match self.node_index.get(&NodeKey(coord)) {
            Some(&node_id) => node_id,
            None => {
                let node_id = self.nodes.len();
                self.nodes.push(OverlayNode {
                    coord,
                    label: Label::empty_line_or_point(),
                    star: vec![],
                });
                self.node_index.insert(NodeKey(coord), node_id);
                node_id
            }
        }
    }

    /// Sort a node's outgoing edges CCW from the positive x-axis: by
    /// quadrant, then by orientation within the quadrant.
    fn sort_star(&mut self, node_id: NodeId) {
        let mut star = std::mem::take(&mut self.nodes[node_id].star);
        star.sort_by(|&a, &b| {
            let de_a = &self.dedges[a];
            let de_b = &self.dedges[b];
            compare_direction(de_a.origin, de_a.directed_to, de_b.origin, de_b.directed_to)
        });
        self.nodes[node_id].star = star;
    }

    /// Complete the directed-edge labels: propagate side labels around each
    /// node, resolve still-unknown sides by locating the node in the
    /// inputs, merge twin labels, and aggregate a label onto each node.
    pub fn compute_labelling(
        &mut self,
        graph_a: &GeometryGraph<F>,
        graph_b: &GeometryGraph<F>,
    ) -> Result<()> {
        for node_id in 0..self.nodes.len() {
            self.propagate_side_labels(node_id, 0)?;
            self.propagate_side_labels(node_id, 1)?;
            self.label_remaining_edge_ends(node_id, graph_a, graph_b);
        }

        self.merge_sym_labels();
        self.update_node_labelling();
        Ok(())
    }

    fn propagate_side_labels(&mut self, node_id: NodeId, geom_index: usize) -> Result<()> {
        let star = self.nodes[node_id].star.clone();

        let mut start_position = None;
        for &dedge_id in &star {
            let label = &self.dedges[dedge_id].label;
            if label.is_geom_area(geom_index) {
                if let Some(position) = label.position(geom_index, Direction::Left) {
                    start_position = Some(position);
                }
            }
        }
        let Some(start_position) = start_position else {
            return Ok(());
        };

        let mut current_position = start_position;
        for &dedge_id in &star {
            let coord = self.dedges[dedge_id].origin;
            let label = &mut self.dedges[dedge_id].label;
            if label.position(geom_index, Direction::On).is_none() {
                label.set_position(geom_index, Direction::On, current_position);
            }
            if label.is_geom_area(geom_index) {
                let left_position = label.position(geom_index, Direction::Left);
                let right_position = label.position(geom_index, Direction::Right);

                if let Some(right_position) = right_position {
                    if right_position != current_position {
                        return Err(Error::topology_at("side location conflict", coord));
                    }
                    let Some(left_position) = left_position else {
                        return Err(Error::topology_at("single null side", coord));
                    };
                    current_position = left_position;
                } else {
                    label.set_position(geom_index, Direction::Right, current_position);
                    label.set_position(geom_index, Direction::Left, current_position);
                }
            }
        }
        Ok(())
    }

    /// An edge end whose label is still incomplete after propagation lies
    /// in the interior or exterior of an input; which one is decided by a
    /// point-in-area test, unless a dimensional collapse pins it outside.
    fn label_remaining_edge_ends(
        &mut self,
        node_id: NodeId,
        graph_a: &GeometryGraph<F>,
        graph_b: &GeometryGraph<F>,
    ) {
        let star = self.nodes[node_id].star.clone();

        let mut has_dimensional_collapse_edge = [false, false];
        for &dedge_id in &star {
            let label = &self.dedges[dedge_id].label;
            for (geom_index, is_collapsed) in has_dimensional_collapse_edge.iter_mut().enumerate() {
                if label.is_line(geom_index)
                    && label.on_position(geom_index) == Some(CoordPos::OnBoundary)
                {
                    *is_collapsed = true;
                }
            }
        }

        // memoized per node: the point-in-area location for each input
        let mut point_positions: [Option<CoordPos>; 2] = [None, None];

        for &dedge_id in &star {
            let coord = self.dedges[dedge_id].origin;
            let label = &mut self.dedges[dedge_id].label;
            for geom_index in 0..2 {
                if label.is_any_empty(geom_index) {
                    let position = if has_dimensional_collapse_edge[geom_index] {
                        CoordPos::Outside
                    } else {
                        *point_positions[geom_index].get_or_insert_with(|| {
                            let geometry = if geom_index == 0 {
                                graph_a.geometry()
                            } else {
                                graph_b.geometry()
                            };
                            if geometry.dimensions() == Dimensions::TwoDimensional {
                                geometry.coordinate_position(&coord)
                            } else {
                                CoordPos::Outside
                            }
                        })
                    };
                    label.set_all_positions_if_empty(geom_index, position);
                }
            }
        }
    }

    fn merge_sym_labels(&mut self) {
        for dedge_id in 0..self.dedges.len() {
            let sym_label = self.dedges[self.dedges[dedge_id].sym].label.clone();
            self.dedges[dedge_id].label.merge(&sym_label);
        }
    }

    /// Aggregate the edge labels incident on each node into the node's
    /// label: a node touched by any interior or boundary edge of an input
    /// is interior to that input.
    fn update_node_labelling(&mut self) {
        for node in &mut self.nodes {
            let mut node_label = node.label.clone();
            for &dedge_id in &node.star {
                let edge_label = &self.dedges[dedge_id].label;
                for geom_index in 0..2 {
                    if matches!(
                        edge_label.on_position(geom_index),
                        Some(CoordPos::Inside) | Some(CoordPos::OnBoundary)
                    ) && node_label.on_position(geom_index).is_none()
                    {
                        node_label.set_on_position(geom_index, CoordPos::Inside);
                    }
                }
            }
            node.label = node_label;
        }
    }

    /// Complete the labels of isolated nodes by locating them in the other
    /// input, then push each node's label onto its unlabeled edge ends.
    pub fn label_incomplete_nodes(
        &mut self,
        graph_a: &GeometryGraph<F>,
        graph_b: &GeometryGraph<F>,
    ) {
        for node_id in 0..self.nodes.len() {
            if self.nodes[node_id].is_isolated() {
                let coord = self.nodes[node_id].coord;
                if self.nodes[node_id].label.is_empty(0) {
                    let position = graph_a.geometry().coordinate_position(&coord);
                    self.nodes[node_id].label.set_on_position(0, position);
                } else {
                    let position = graph_b.geometry().coordinate_position(&coord);
                    self.nodes[node_id].label.set_on_position(1, position);
                }
            }

            let node_label = self.nodes[node_id].label.clone();
            let star = self.nodes[node_id].star.clone();
            for &dedge_id in &star {
                let label = &mut self.dedges[dedge_id].label;
                for geom_index in 0..2 {
                    if let Some(position) = node_label.on_position(geom_index) {
                        label.set_all_positions_if_empty(geom_index, position);
                    }
                }
            }
        }
    }

    /// Mark the directed edges bounding the result area of `op`: the
    /// right-hand side location of each input decides membership (result
    /// rings are linked with their face to the right).
    pub fn find_result_area_edges(&mut self, op: OverlayOp) {
        for dedge in &mut self.dedges {
            if dedge.label.is_area()
                && !dedge.is_interior_area_edge()
                && super::is_result_of_op(
                    dedge.label.position(0, Direction::Right),
                    dedge.label.position(1, Direction::Right),
                    op,
                )
            {
                dedge.in_result = true;
            }
        }
    }

    /// If both traversals of an edge were selected, the result area lies on
    /// both sides, so the edge does not bound it: deselect both.
    pub fn cancel_duplicate_result_edges(&mut self) {
        for dedge_id in 0..self.dedges.len() {
            let sym = self.dedges[dedge_id].sym;
            if self.dedges[dedge_id].in_result && self.dedges[sym].in_result {
                self.dedges[dedge_id].in_result = false;
                self.dedges[sym].in_result = false;
            }
        }
    }

    /// The node's result-area edges: outgoing edges where either traversal
    /// is in the result, in CCW order.
    fn result_area_edges(&self, node_id: NodeId) -> Vec<DirEdgeId> {
        self.nodes[node_id]
            .star
            .iter()
            .copied()
            .filter(|&dedge_id| {
                self.dedges[dedge_id].in_result || self.dedges[self.dedges[dedge_id].sym].in_result
            })
            .collect()
    }

    /// Link the result edges at each node: the `next` of an incoming result
    /// edge is the next outgoing result edge in CCW order. Rings linked this
    /// way have their face on the right.
    pub fn link_result_directed_edges(&mut self) -> Result<()> {
        for node_id in 0..self.nodes.len() {
            self.link_result_directed_edges_at(node_id)?;
        }
        Ok(())
    }

    fn link_result_directed_edges_at(&mut self, node_id: NodeId) -> Result<()> {
        let result_edges = self.result_area_edges(node_id);

        let mut first_out: Option<DirEdgeId> = None;
        let mut incoming: Option<DirEdgeId> = None;
        let mut linking = false;

        for &next_out in &result_edges {
            let next_in = self.dedges[next_out].sym;
            if !self.dedges[next_out].label.is_area() {
                continue;
            }
            if first_out.is_none() && self.dedges[next_out].in_result {
                first_out = Some(next_out);
            }
            if linking {
                if self.dedges[next_out].in_result {
                    self.dedges[incoming.unwrap()].next = Some(next_out);
                    linking = false;
                }
            } else if self.dedges[next_in].in_result {
                incoming = Some(next_in);
                linking = true;
            }
        }

        if linking {
            let Some(first_out) = first_out else {
                return Err(Error::topology_at(
                    "no outgoing directed edge found",
                    self.nodes[node_id].coord,
                ));
            };
            debug_assert!(self.dedges[first_out].in_result);
            self.dedges[incoming.unwrap()].next = Some(first_out);
        }
        Ok(())
    }

    /// Link the edges of one maximal ring at this node into minimal rings:
    /// like result linking, but traversing the star clockwise and
    /// restricted to edges of the given maximal ring.
    pub fn link_minimal_directed_edges(&mut self, node_id: NodeId, ring_id: usize) {
        let result_edges = self.result_area_edges(node_id);

        let mut first_out: Option<DirEdgeId> = None;
        let mut incoming: Option<DirEdgeId> = None;
        let mut linking = false;

        for &next_out in result_edges.iter().rev() {
            let next_in = self.dedges[next_out].sym;
            if first_out.is_none() && self.dedges[next_out].edge_ring == Some(ring_id) {
                first_out = Some(next_out);
            }
            if linking {
                if self.dedges[next_out].edge_ring == Some(ring_id) {
                    self.dedges[incoming.unwrap()].next_min = Some(next_out);
                    linking = false;
                }
            } else if self.dedges[next_in].edge_ring == Some(ring_id) {
                incoming = Some(next_in);
                linking = true;
            }
        }

        if linking {
            if let (Some(incoming), Some(first_out)) = (incoming, first_out) {
                self.dedges[incoming].next_min = Some(first_out);
            }
        }
    }

    /// The number of outgoing edges of `ring_id` at this node.
    pub fn outgoing_degree(&self, node_id: NodeId, ring_id: usize) -> usize {
        self.nodes[node_id]
            .star
            .iter()
            .filter(|&&dedge_id| self.dedges[dedge_id].edge_ring == Some(ring_id))
            .count()
    }

    /// Mark line edges incident to result-area nodes as covered or not by
    /// the result area, by walking the star and tracking which side of the
    /// result boundary we are on.
    pub fn find_covered_line_edges(&mut self, node_id: NodeId) -> Vec<(EdgeId, bool)> {
        let star = self.nodes[node_id].star.clone();
        let mut covered = vec![];

        // Since edges are stored in CCW order around the node, as we move
        // around the ring we move from the right to the left side of the
        // edge.
        let mut start_position: Option<CoordPos> = None;
        for &next_out in &star {
            let next_in = self.dedges[next_out].sym;
            if !self.dedges[next_out].is_line_edge() {
                if self.dedges[next_out].in_result {
                    start_position = Some(CoordPos::Inside);
                    break;
                }
                if self.dedges[next_in].in_result {
                    start_position = Some(CoordPos::Outside);
                    break;
                }
            }
        }

        // no result-area edges found, so we can't determine coverage here
        let Some(start_position) = start_position else {
            return covered;
        };

        let mut current_position = start_position;
        for &next_out in &star {
            let next_in = self.dedges[next_out].sym;
            if self.dedges[next_out].is_line_edge() {
                covered.push((
                    self.dedges[next_out].edge,
                    current_position == CoordPos::Inside,
                ));
            } else {
                if self.dedges[next_out].in_result {
                    current_position = CoordPos::Outside;
                }
                if self.dedges[next_in].in_result {
                    current_position = CoordPos::Inside;
                }
            }
        }
        covered
    }

    pub fn set_visited_edge(&mut self, dedge_id: DirEdgeId) {
        let sym = self.dedges[dedge_id].sym;
        self.dedges[dedge_id].visited = true;
        self.dedges[sym].visited = true;
    }

    /// Whether any edge incident on the node was emitted into the result.
    pub fn is_incident_edge_in_result(&self, node_id: NodeId, edge_list: &EdgeList<F>) -> bool {
        self.nodes[node_id]
            .star
            .iter()
            .any(|&dedge_id| edge_list.edge(self.dedges[dedge_id].edge).in_result)
    }
}

/// CCW-from-positive-x-axis ordering of edge directions: by quadrant, then
/// by robust orientation within the quadrant.
pub(crate) fn compare_direction<F: GeoFloat>(
    origin_a: Coord<F>,
    to_a: Coord<F>,
    origin_b: Coord<F>,
    to_b: Coord<F>,
) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    let delta_a = to_a - origin_a;
    let delta_b = to_b - origin_b;
    if delta_a == delta_b {
        return Ordering::Equal;
    }

    let quadrant_a = Quadrant::new(delta_a.x, delta_a.y);
    let quadrant_b = Quadrant::new(delta_b.x, delta_b.y);

    match (quadrant_a, quadrant_b) {
        (Some(qa), Some(qb)) if qa > qb => Ordering::Greater,
        (Some(qa), Some(qb)) if qa < qb => Ordering::Less,
        _ => match F::Ker::orient2d(origin_b, to_b, to_a) {
            Orientation::Clockwise => Ordering::Less,
            Orientation::CounterClockwise => Ordering::Greater,
            Orientation::Collinear => Ordering::Equal,
        },
    }
}
