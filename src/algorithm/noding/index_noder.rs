use super::{Noder, SegmentString};
use crate::algorithm::line_intersection::{
    line_intersection, line_intersection_rounded, LineIntersection,
};
use crate::algorithm::relate::geomgraph::EdgeIntersection;
use crate::geometry::{Coord, Line, PrecisionModel};
use crate::{interrupt, GeoFloat, Result};

use rstar::{RTree, RTreeObject, AABB};

use std::collections::BTreeSet;

/// Exact noding over a spatial index of segment envelopes.
///
/// Every self- and mutual intersection among the input strings is computed
/// with the robust segment intersector and inserted as a vertex; each string
/// is then split at its intersection points.
#[derive(Default)]
pub struct IndexNoder;

impl IndexNoder {
    pub fn new() -> Self {
        IndexNoder
    }
}

impl<F: GeoFloat, D: Clone> Noder<F, D> for IndexNoder {
    fn node(
        &mut self,
        segment_strings: Vec<SegmentString<F, D>>,
    ) -> Result<Vec<SegmentString<F, D>>> {
        let node_lists = compute_intersections(&segment_strings, None)?;
        interrupt::check()?;
        Ok(split_at_nodes(segment_strings, node_lists))
    }
}

/// One indexed segment of an input string.
struct IndexedSegment<F: GeoFloat> {
    string_idx: usize,
    segment_idx: usize,
    envelope: AABB<Coord<F>>,
}

impl<F: GeoFloat> RTreeObject for IndexedSegment<F> {
    type Envelope = AABB<Coord<F>>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Compute the intersection vertices of every string, optionally rounding
/// computed intersection points through a precision model.
pub(super) fn compute_intersections<F: GeoFloat, D: Clone>(
    segment_strings: &[SegmentString<F, D>],
    precision_model: Option<&PrecisionModel>,
) -> Result<Vec<BTreeSet<EdgeIntersection<F>>>> {
    let mut node_lists: Vec<BTreeSet<EdgeIntersection<F>>> =
        (0..segment_strings.len()).map(|_| BTreeSet::new()).collect();

    let segments: Vec<IndexedSegment<F>> = segment_strings
        .iter()
        .enumerate()
        .flat_map(|(string_idx, string)| {
            (0..string.num_segments())
                .map(|segment_idx| {
                    let line = string.segment(segment_idx);
                    IndexedSegment {
                        string_idx,
                        segment_idx,
                        envelope: AABB::from_corners(line.start, line.end),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();

    interrupt::check()?;

    let tree = RTree::bulk_load(segments);
    for (seg_0, seg_1) in tree.intersection_candidates_with_other_tree(&tree) {
        if seg_0.string_idx == seg_1.string_idx && seg_0.segment_idx == seg_1.segment_idx {
            continue;
        }

        let line_0 = segment_strings[seg_0.string_idx].segment(seg_0.segment_idx);
        let line_1 = segment_strings[seg_1.string_idx].segment(seg_1.segment_idx);

        let intersection = match precision_model {
            Some(pm) => line_intersection_rounded(line_0, line_1, pm),
            None => line_intersection(line_0, line_1),
        };
        let Some(intersection) = intersection else {
            continue;
        };

        if is_trivial_intersection(
            &intersection,
            &segment_strings[seg_0.string_idx],
            seg_0,
            seg_1,
        ) {
            continue;
        }

        record_intersection(
            &mut node_lists[seg_0.string_idx],
            segment_strings[seg_0.string_idx].coords(),
            &intersection,
            line_0,
            seg_0.segment_idx,
        );
        record_intersection(
            &mut node_lists[seg_1.string_idx],
            segment_strings[seg_1.string_idx].coords(),
            &intersection,
            line_1,
            seg_1.segment_idx,
        );
    }

    Ok(node_lists)
}

/// An apparent self-intersection which is simply the point shared by
/// adjacent segments of the same string (including the closing point of a
/// ring).
fn is_trivial_intersection<F: GeoFloat, D>(
    intersection: &LineIntersection<F>,
    string: &SegmentString<F, D>,
    seg_0: &IndexedSegment<F>,
    seg_1: &IndexedSegment<F>,
) -> bool {
    if seg_0.string_idx != seg_1.string_idx {
        return false;
    }
    if matches!(intersection, LineIntersection::Collinear { .. }) {
        return false;
    }

    let diff = seg_0.segment_idx.abs_diff(seg_1.segment_idx);
    if diff == 1 {
        return true;
    }

    let coords = string.coords();
    if coords.first() == coords.last() {
        let max_segment_index = string.num_segments() - 1;
        if diff == max_segment_index {
            return true;
        }
    }

    false
}

pub(super) fn record_intersection<F: GeoFloat>(
    nodes: &mut BTreeSet<EdgeIntersection<F>>,
    coords: &[Coord<F>],
    intersection: &LineIntersection<F>,
    line: Line<F>,
    segment_idx: usize,
) {
    match intersection {
        LineIntersection::SinglePoint { intersection, .. } => {
            add_node(nodes, coords, *intersection, line, segment_idx);
        }
        LineIntersection::Collinear { intersection } => {
            add_node(nodes, coords, intersection.start, line, segment_idx);
            add_node(nodes, coords, intersection.end, line, segment_idx);
        }
    }
}

/// Insert an intersection vertex, normalizing a point falling exactly on a
/// vertex to the higher of the two candidate segment indices.
///
/// Nodes are ordered along their segment by projection parameter. Unlike
/// the edge-distance metric, the projection stays distinct for snapped
/// points that lie slightly off the segment.
pub(super) fn add_node<F: GeoFloat>(
    nodes: &mut BTreeSet<EdgeIntersection<F>>,
    coords: &[Coord<F>],
    coord: Coord<F>,
    line: Line<F>,
    segment_idx: usize,
) {
    let mut normalized_segment_idx = segment_idx;
    let mut distance = projection_parameter(coord, line);

    let next_segment_idx = segment_idx + 1;
    if next_segment_idx < coords.len() && coord == coords[next_segment_idx] {
        normalized_segment_idx = next_segment_idx;
        distance = F::zero();
    }
    nodes.insert(EdgeIntersection::new(coord, normalized_segment_idx, distance));
}

/// The fraction of the way along `line` at which `coord` projects.
fn projection_parameter<F: GeoFloat>(coord: Coord<F>, line: Line<F>) -> F {
    if coord == line.start {
        return F::zero();
    }
    let dx = line.dx();
    let dy = line.dy();
    let d_squared = dx * dx + dy * dy;
    if d_squared == F::zero() {
        return F::zero();
    }
    ((coord.x - line.start.x) * dx + (coord.y - line.start.y) * dy) / d_squared
}

/// Split every string at its recorded intersection vertices. Degenerate
/// pieces (fewer than two distinct coordinates) are dropped.
pub(super) fn split_at_nodes<F: GeoFloat, D: Clone>(
    segment_strings: Vec<SegmentString<F, D>>,
    mut node_lists: Vec<BTreeSet<EdgeIntersection<F>>>,
) -> Vec<SegmentString<F, D>> {
    let mut result = vec![];
    for (string, nodes) in segment_strings.into_iter().zip(node_lists.iter_mut()) {
        let (coords, data) = string.into_parts();
        if coords.len() < 2 {
            continue;
        }

        nodes.insert(EdgeIntersection::new(coords[0], 0, F::zero()));
        nodes.insert(EdgeIntersection::new(
            coords[coords.len() - 1],
            coords.len() - 1,
            F::zero(),
        ));

        let node_vec: Vec<&EdgeIntersection<F>> = nodes.iter().collect();
        for window in node_vec.windows(2) {
            let (start, end) = (window[0], window[1]);

            let mut piece = vec![start.coordinate()];
            for coord in coords
                .iter()
                .take(end.segment_index() + 1)
                .skip(start.segment_index() + 1)
            {
                if piece.last() != Some(coord) {
                    piece.push(*coord);
                }
            }
            let last_seg_start = coords[end.segment_index()];
            if (end.distance() > F::zero() || end.coordinate() != last_seg_start)
                && piece.last() != Some(&end.coordinate())
            {
                piece.push(end.coordinate());
            }

            if piece.len() >= 2 {
                result.push(SegmentString::new(piece, data.clone()));
            }
        }
    }
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord;

    #[test]
    fn crossing_strings_are_split() {
        let strings = vec![
            SegmentString::new(vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 }], 'a'),
            SegmentString::new(
                vec![coord! { x: 0.5, y: -1.0 }, coord! { x: 0.5, y: 1.0 }],
                'b',
            ),
        ];
        let noded = IndexNoder::new().node(strings).unwrap();
        assert_eq!(noded.len(), 4);
        assert!(noded
            .iter()
            .filter(|s| *s.data() == 'a')
            .all(|s| s.coords().contains(&coord! { x: 0.5, y: 0.0 })));
    }

    #[test]
    fn interior_vertices_are_preserved() {
        let strings = vec![SegmentString::new(
            vec![
                coord! { x: 0.0, y: 0.0 },
                coord! { x: 1.0, y: 0.0 },
                coord! { x: 2.0, y: 0.0 },
            ],
            (),
        )];
        let noded = IndexNoder::new().node(strings).unwrap();
        assert_eq!(noded.len(), 1);
        assert_eq!(noded[0].coords().len(), 3);
    }

    #[test]
    fn self_intersection_is_noded() {
        // a bow-tie: one string crossing itself
        let strings = vec![SegmentString::new(
            vec![
                coord! { x: 0.0, y: 0.0 },
                coord! { x: 2.0, y: 2.0 },
                coord! { x: 2.0, y: 0.0 },
                coord! { x: 0.0, y: 2.0 },
            ],
            (),
        )];
        let noded = IndexNoder::new().node(strings).unwrap();
        // split at the self-crossing at (1, 1)
        assert!(noded.len() > 1);
        assert!(noded
            .iter()
            .any(|s| s.coords().contains(&coord! { x: 1.0, y: 1.0 })));
    }

    #[test]
    fn overlapping_collinear_strings() {
        let strings = vec![
            SegmentString::new(vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 4.0, y: 0.0 }], ()),
            SegmentString::new(vec![coord! { x: 2.0, y: 0.0 }, coord! { x: 6.0, y: 0.0 }], ()),
        ];
        let noded = IndexNoder::new().node(strings).unwrap();
        // each string is split at the other's endpoint within it
        assert_eq!(noded.len(), 4);
    }
}
