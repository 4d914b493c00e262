use super::{
    node_map::{NodeFactory, NodeMap},
    CoordNode, CoordPos, Edge,
};
use crate::geometry::Coord;
use crate::GeoFloat;

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, PartialEq)]
pub(crate) struct PlanarGraphNode;

/// The basic node constructor does not allow for incident edges
impl<F> NodeFactory<F> for PlanarGraphNode
where
    F: GeoFloat,
{
    type Node = CoordNode<F>;
    fn create_node(coordinate: Coord<F>) -> Self::Node {
        CoordNode::new(coordinate)
    }
}

/// The nodes and edges of one input geometry, with edges shared so the
/// segment intersectors can record intersections on any pair of them.
///
/// The graph lives only for the duration of a single relate or overlay call.
#[derive(Clone)]
pub(crate) struct PlanarGraph<F: GeoFloat> {
    pub(crate) nodes: NodeMap<F, PlanarGraphNode>,
    edges: Vec<Rc<RefCell<Edge<F>>>>,
}

impl<F: GeoFloat> PlanarGraph<F> {
    pub fn new() -> Self {
        PlanarGraph {
            nodes: NodeMap::new(),
            edges: vec![],
        }
    }

    /// Rebuild a graph from detached template data, deep-copying the edges.
    pub fn from_template(nodes: NodeMap<F, PlanarGraphNode>, edges: &[Edge<F>]) -> Self {
        PlanarGraph {
            nodes,
            edges: edges
                .iter()
                .map(|edge| Rc::new(RefCell::new(edge.clone())))
                .collect(),
        }
    }

    /// Detach the edges into plain data, e.g. for caching across calls.
    pub fn edges_snapshot(&self) -> Vec<Edge<F>> {
        self.edges.iter().map(|edge| edge.borrow().clone()).collect()
    }

    pub fn clone_for_arg_index(&self, from_arg_index: usize, to_arg_index: usize) -> Self {
        let mut graph = Self {
            nodes: self.nodes.clone(),
            // deep copy edges
            edges: self
                .edges
                .iter()
                .map(|e| Rc::new(RefCell::new(e.borrow().clone())))
                .collect(),
        };
        debug_assert_eq!(from_arg_index, 0);
        if from_arg_index != to_arg_index {
            graph.swap_labels();
        }
        graph
    }

    pub fn swap_labels(&mut self) {
        for node in self.nodes.iter_mut() {
            node.swap_label_args();
        }
        for edge in &mut self.edges {
            edge.borrow_mut().swap_label_args();
        }
    }

    #[cfg(test)]
    pub fn assert_eq_graph(&self, other: &Self) {
        assert!(self.nodes == other.nodes);
        assert!(self
            .edges
            .iter()
            .zip(other.edges.iter())
            .all(|(a, b)| *a.borrow() == *b.borrow()));
    }

    pub fn edges(&self) -> &[Rc<RefCell<Edge<F>>>] {
        &self.edges
    }

    pub fn is_boundary_node(&self, geom_index: usize, coord: Coord<F>) -> bool {
        self.nodes
            .find(coord)
            .and_then(|node| node.label().on_position(geom_index))
            .map(|position| position == CoordPos::OnBoundary)
            .unwrap_or(false)
    }

    pub fn insert_edge(&mut self, edge: Edge<F>) {
        self.edges.push(Rc::new(RefCell::new(edge)));
    }

    pub fn add_node_with_coordinate(&mut self, coord: Coord<F>) -> &mut CoordNode<F> {
        self.nodes.insert_node_with_coordinate(coord)
    }

    pub fn boundary_nodes(&self, geom_index: usize) -> impl Iterator<Item = &CoordNode<F>> {
        self.nodes.iter().filter(move |node| {
            matches!(
                node.label().on_position(geom_index),
                Some(CoordPos::OnBoundary)
            )
        })
    }
}
