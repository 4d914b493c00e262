use super::depth::Depth;
use crate::algorithm::relate::geomgraph::{Direction, Label, SplitEdge};
use crate::geometry::Coord;
use crate::utils::lex_cmp;
use crate::GeoFloat;

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// An undirected, fully-noded edge of the overlay graph.
#[derive(Debug, Clone)]
pub(crate) struct OverlayEdge<F: GeoFloat> {
    pub coords: Vec<Coord<F>>,
    pub label: Label,
    pub depth: Depth,
    /// set by the line builder when the edge is emitted as a result line
    pub in_result: bool,
    /// whether a line edge lies inside the result area; `None` until
    /// computed
    pub covered: Option<bool>,
}

impl<F: GeoFloat> OverlayEdge<F> {
    fn new(coords: Vec<Coord<F>>, label: Label) -> Self {
        OverlayEdge {
            coords,
            label,
            depth: Depth::new(),
            in_result: false,
            covered: None,
        }
    }

    /// An edge formed by an area ring folding back on itself under noding:
    /// three coordinates with the outer pair equal.
    fn is_collapsed(&self) -> bool {
        self.label.is_area() && self.coords.len() == 3 && self.coords[0] == self.coords[2]
    }
}

/// The set of unique noded edges of an overlay, with duplicate geometry
/// merged by label and depth accumulation.
pub(crate) struct EdgeList<F: GeoFloat> {
    edges: Vec<OverlayEdge<F>>,
    /// orientation-normalized coordinate key -> edge index
    index: BTreeMap<EdgeKey<F>, usize>,
}

impl<F: GeoFloat> EdgeList<F> {
    pub fn new() -> Self {
        EdgeList {
            edges: vec![],
            index: BTreeMap::new(),
        }
    }

    pub fn edges(&self) -> &[OverlayEdge<F>] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut [OverlayEdge<F>] {
        &mut self.edges
    }

    pub fn edge(&self, index: usize) -> &OverlayEdge<F> {
        &self.edges[index]
    }

    /// Insert a split edge. If an edge with the same coordinates (in either
    /// orientation) is already present, the labels are merged instead -
    /// flipped when the orientations differ - and both labels accumulate
    /// into the edge's depth.
    pub fn insert_unique_edge(&mut self, split_edge: SplitEdge<F>) {
        let key = EdgeKey::new(&split_edge.coords);
        match self.index.get(&key) {
            Some(&existing_index) => {
                let existing = &mut self.edges[existing_index];

                let mut label_to_merge = split_edge.label;
                let pointwise_equal = existing.coords == split_edge.coords;
                if !pointwise_equal {
                    // reverse orientation: its sides are mirrored
                    label_to_merge.flip();
                }

                if existing.depth.is_null() {
                    let existing_label = existing.label.clone();
                    existing.depth.add_label(&existing_label);
                }
                existing.depth.add_label(&label_to_merge);
                existing.label.merge(&label_to_merge);
            }
            None => {
                self.index.insert(key, self.edges.len());
                self.edges
                    .push(OverlayEdge::new(split_edge.coords, split_edge.label));
            }
        }
    }

    /// Update the labels of merged edges from their accumulated depths: a
    /// side is interior when covered by at least one ring, and an edge whose
    /// two sides come out equal has collapsed to a line.
    pub fn compute_labels_from_depths(&mut self) {
        for edge in &mut self.edges {
            if edge.depth.is_null() {
                continue;
            }
            edge.depth.normalize();
            for geom_index in 0..2 {
                if edge.label.is_empty(geom_index) {
                    continue;
                }
                if edge.depth.delta(geom_index) == 0 {
                    edge.label.to_line(geom_index);
                } else {
                    debug_assert!(
                        !edge.depth.is_null_at(geom_index, Direction::Left),
                        "depth of left side has not been initialized"
                    );
                    edge.label.set_position(
                        geom_index,
                        Direction::Left,
                        edge.depth.position(geom_index, Direction::Left),
                    );
                    debug_assert!(
                        !edge.depth.is_null_at(geom_index, Direction::Right),
                        "depth of right side has not been initialized"
                    );
                    edge.label.set_position(
                        geom_index,
                        Direction::Right,
                        edge.depth.position(geom_index, Direction::Right),
                    );
                }
            }
        }
    }

    /// Replace area edges which folded back on themselves with the line
    /// edge they collapsed to.
    pub fn replace_collapsed_edges(&mut self) {
        for edge in &mut self.edges {
            if edge.is_collapsed() {
                edge.coords.truncate(2);
                edge.label.to_line(0);
                edge.label.to_line(1);
                edge.depth = Depth::new();
            }
        }
    }
}

/// An edge's coordinates, normalized so that an edge and its reverse
/// compare equal.
struct EdgeKey<F: GeoFloat>(Vec<Coord<F>>);

impl<F: GeoFloat> EdgeKey<F> {
    fn new(coords: &[Coord<F>]) -> Self {
        let forward = coords.to_vec();
        let mut backward = forward.clone();
        backward.reverse();
        if cmp_coord_seqs(&forward, &backward) == Ordering::Greater {
            EdgeKey(backward)
        } else {
            EdgeKey(forward)
        }
    }
}

fn cmp_coord_seqs<F: GeoFloat>(a: &[Coord<F>], b: &[Coord<F>]) -> Ordering {
    for (ca, cb) in a.iter().zip(b.iter()) {
        let ordering = lex_cmp(ca, cb);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.len().cmp(&b.len())
}

impl<F: GeoFloat> PartialEq for EdgeKey<F> {
    fn eq(&self, other: &Self) -> bool {
        cmp_coord_seqs(&self.0, &other.0) == Ordering::Equal
    }
}

impl<F: GeoFloat> Eq for EdgeKey<F> {}

impl<F: GeoFloat> PartialOrd for EdgeKey<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: GeoFloat> Ord for EdgeKey<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_coord_seqs(&self.0, &other.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::coordinate_position::CoordPos;
    use crate::algorithm::relate::geomgraph::TopologyPosition;
    use crate::coord;

    fn shell_edge(coords: Vec<Coord<f64>>, geom_index: usize) -> SplitEdge<f64> {
        SplitEdge {
            coords,
            label: Label::new(
                geom_index,
                TopologyPosition::area(CoordPos::OnBoundary, CoordPos::Outside, CoordPos::Inside),
            ),
        }
    }

    #[test]
    fn reversed_duplicate_is_merged_with_flipped_label() {
        let mut edges = EdgeList::new();
        edges.insert_unique_edge(shell_edge(
            vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 }],
            0,
        ));
        edges.insert_unique_edge(shell_edge(
            vec![coord! { x: 1.0, y: 0.0 }, coord! { x: 0.0, y: 0.0 }],
            1,
        ));
        assert_eq!(edges.edges().len(), 1);

        let merged = edges.edge(0);
        assert_eq!(
            merged.label.position(0, Direction::Right),
            Some(CoordPos::Inside)
        );
        // the second input ran the other way, so its interior is on the left
        assert_eq!(
            merged.label.position(1, Direction::Left),
            Some(CoordPos::Inside)
        );
    }

    #[test]
    fn coincident_shell_and_hole_collapse_to_line() {
        let coords = vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 }];
        let mut edges = EdgeList::new();
        edges.insert_unique_edge(shell_edge(coords.clone(), 0));
        // the same geometry's hole boundary running back over the shell
        edges.insert_unique_edge(SplitEdge {
            coords,
            label: Label::new(
                0,
                TopologyPosition::area(CoordPos::OnBoundary, CoordPos::Inside, CoordPos::Outside),
            ),
        });
        assert_eq!(edges.edges().len(), 1);

        let mut edges = edges;
        edges.compute_labels_from_depths();
        assert!(edges.edge(0).label.is_line(0));
    }
}
