use crate::algorithm::coordinate_position::CoordPos;
use crate::algorithm::relate::geomgraph::{Direction, Label};

const NULL_DEPTH: i32 = -1;

fn depth_at_position(position: CoordPos) -> i32 {
    match position {
        CoordPos::Outside => 0,
        CoordPos::Inside => 1,
        CoordPos::OnBoundary => NULL_DEPTH,
    }
}

/// The topological depth of the two sides of an edge for each input
/// geometry: how many rings of that input lie over the side.
///
/// Depths accumulate when duplicate edges are merged, which is what lets
/// the overlay tolerate overlapping rings (e.g. invalid multipolygons):
/// an edge's final side locations are read back off its normalized depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Depth {
    /// `[geometry][side]`, sides indexed left = 0, right = 1
    depth: [[i32; 2]; 2],
}

fn side_index(direction: Direction) -> usize {
    match direction {
        Direction::Left => 0,
        Direction::Right => 1,
        Direction::On => panic!("depth is only tracked for the sides of an edge"),
    }
}

impl Depth {
    pub fn new() -> Self {
        Depth {
            depth: [[NULL_DEPTH; 2]; 2],
        }
    }

    pub fn is_null(&self) -> bool {
        self.depth == [[NULL_DEPTH; 2]; 2]
    }

    pub fn is_null_at(&self, geom_index: usize, direction: Direction) -> bool {
        self.depth[geom_index][side_index(direction)] == NULL_DEPTH
    }

    pub fn is_null_for_geometry(&self, geom_index: usize) -> bool {
        self.depth[geom_index] == [NULL_DEPTH; 2]
    }

    /// Accumulate the side locations of `label` into the depths.
    pub fn add_label(&mut self, label: &Label) {
        for geom_index in 0..2 {
            for direction in [Direction::Left, Direction::Right] {
                if let Some(position) = label_side(label, geom_index, direction) {
                    if position == CoordPos::Inside || position == CoordPos::Outside {
                        let cell = &mut self.depth[geom_index][side_index(direction)];
                        if *cell == NULL_DEPTH {
                            *cell = depth_at_position(position);
                        } else {
                            *cell += depth_at_position(position);
                        }
                    }
                }
            }
        }
    }

    pub fn delta(&self, geom_index: usize) -> i32 {
        self.depth[geom_index][side_index(Direction::Right)]
            - self.depth[geom_index][side_index(Direction::Left)]
    }

    /// Reduce the depths to 0/1 so the side locations can be read back:
    /// depth 0 is exterior, anything deeper is interior.
    pub fn normalize(&mut self) {
        for geom_index in 0..2 {
            if self.is_null_for_geometry(geom_index) {
                continue;
            }
            let mut min_depth = self.depth[geom_index][0].min(self.depth[geom_index][1]);
            if min_depth < 0 {
                min_depth = 0;
            }
            for side in 0..2 {
                let new_value = if self.depth[geom_index][side] > min_depth {
                    1
                } else {
                    0
                };
                self.depth[geom_index][side] = new_value;
            }
        }
    }

    pub fn position(&self, geom_index: usize, direction: Direction) -> CoordPos {
        if self.depth[geom_index][side_index(direction)] <= 0 {
            CoordPos::Outside
        } else {
            CoordPos::Inside
        }
    }
}

/// The side position of an area label; `None` for line labels and unset
/// sides.
fn label_side(label: &Label, geom_index: usize, direction: Direction) -> Option<CoordPos> {
    if label.is_geom_area(geom_index) {
        label.position(geom_index, direction)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::relate::geomgraph::TopologyPosition;

    #[test]
    fn overlapping_rings_accumulate() {
        // two coincident shell edges of the same input, interior on the right
        let label = Label::new(
            0,
            TopologyPosition::area(CoordPos::OnBoundary, CoordPos::Outside, CoordPos::Inside),
        );
        let mut depth = Depth::new();
        depth.add_label(&label);
        depth.add_label(&label);
        assert_eq!(depth.delta(0), 2);

        depth.normalize();
        assert_eq!(depth.position(0, Direction::Right), CoordPos::Inside);
        assert_eq!(depth.position(0, Direction::Left), CoordPos::Outside);
    }

    #[test]
    fn cancelling_edges_flatten() {
        // a shell edge merged with the reversed edge of a nested ring:
        // interior on both sides
        let outward = Label::new(
            0,
            TopologyPosition::area(CoordPos::OnBoundary, CoordPos::Outside, CoordPos::Inside),
        );
        let inward = Label::new(
            0,
            TopologyPosition::area(CoordPos::OnBoundary, CoordPos::Inside, CoordPos::Outside),
        );
        let mut depth = Depth::new();
        depth.add_label(&outward);
        depth.add_label(&inward);
        assert_eq!(depth.delta(0), 0);
    }
}
