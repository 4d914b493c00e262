use super::index_noder::{add_node, compute_intersections, split_at_nodes};
use super::{Noder, SegmentString};
use crate::algorithm::intersects::Intersects;
use crate::algorithm::relate::geomgraph::EdgeIntersection;
use crate::geometry::{Coord, Envelope, Line, PrecisionModel};
use crate::{interrupt, Error, GeoFloat, Result};

use float_next_after::NextAfter;
use rstar::{RTree, RTreeObject, AABB};

use std::collections::BTreeSet;

/// Snap-rounding noder: noding whose output vertices all lie on the grid of
/// a fixed [`PrecisionModel`].
///
/// Input vertices are rounded onto the grid; every rounded vertex and every
/// (rounded) intersection point becomes a *hot pixel*, and any segment
/// passing through a hot pixel is snapped to the pixel's center. Segments
/// may collapse to points under rounding; collapsed pieces are dropped.
pub struct SnapRoundingNoder {
    precision_model: PrecisionModel,
}

impl SnapRoundingNoder {
    /// The model must be a fixed-precision model.
    pub fn new(precision_model: PrecisionModel) -> Result<Self> {
        if precision_model.is_floating() {
            return Err(Error::argument(
                "snap-rounding requires a fixed precision model",
            ));
        }
        Ok(SnapRoundingNoder { precision_model })
    }
}

impl<F: GeoFloat, D: Clone> Noder<F, D> for SnapRoundingNoder {
    fn node(
        &mut self,
        segment_strings: Vec<SegmentString<F, D>>,
    ) -> Result<Vec<SegmentString<F, D>>> {
        // round every input vertex onto the grid, dropping collapsed strings
        let rounded: Vec<SegmentString<F, D>> = segment_strings
            .into_iter()
            .filter_map(|string| {
                let (coords, data) = string.into_parts();
                let mut rounded_coords: Vec<Coord<F>> = Vec::with_capacity(coords.len());
                for coord in coords {
                    let rounded_coord = self.precision_model.make_precise(coord);
                    if rounded_coords.last() != Some(&rounded_coord) {
                        rounded_coords.push(rounded_coord);
                    }
                }
                (rounded_coords.len() >= 2).then(|| SegmentString::new(rounded_coords, data))
            })
            .collect();

        interrupt::check()?;

        // every intersection point, rounded onto the grid
        let mut node_lists = compute_intersections(&rounded, Some(&self.precision_model))?;

        // hot pixels: every rounded vertex and every rounded intersection
        let mut hot_pixels: Vec<HotPixel<F>> = vec![];
        let half_pixel = F::from(0.5 / self.precision_model.scale()).unwrap();
        for string in &rounded {
            for &coord in string.coords() {
                hot_pixels.push(HotPixel::new(coord, half_pixel));
            }
        }
        for nodes in &node_lists {
            for node in nodes.iter() {
                hot_pixels.push(HotPixel::new(node.coordinate(), half_pixel));
            }
        }

        interrupt::check()?;

        // snap segments passing through a hot pixel to its center
        let tree = RTree::bulk_load(hot_pixels);
        for (string_idx, string) in rounded.iter().enumerate() {
            for segment_idx in 0..string.num_segments() {
                let line = string.segment(segment_idx);
                let query = AABB::from_corners(line.start, line.end);
                for pixel in tree.locate_in_envelope_intersecting(&query) {
                    if pixel.center == line.start || pixel.center == line.end {
                        continue;
                    }
                    if pixel.intersects_segment(&line) {
                        add_node(
                            &mut node_lists[string_idx],
                            string.coords(),
                            pixel.center,
                            line,
                            segment_idx,
                        );
                    }
                }
            }
        }

        interrupt::check()?;

        Ok(split_at_nodes(rounded, node_lists))
    }
}

/// The tolerance square around a grid point: vertices and segments within
/// it snap to its center.
struct HotPixel<F: GeoFloat> {
    center: Coord<F>,
    /// bounds widened by one ulp so points on the pixel border are captured
    envelope: Envelope<F>,
}

impl<F: GeoFloat> HotPixel<F> {
    fn new(center: Coord<F>, half_pixel: F) -> Self {
        let min_x = (center.x - half_pixel).next_after(F::neg_infinity());
        let min_y = (center.y - half_pixel).next_after(F::neg_infinity());
        let max_x = (center.x + half_pixel).next_after(F::infinity());
        let max_y = (center.y + half_pixel).next_after(F::infinity());
        HotPixel {
            center,
            envelope: Envelope::from_bounds(min_x, min_y, max_x, max_y),
        }
    }

    fn corners(&self) -> [Coord<F>; 4] {
        let min_x = self.envelope.min_x().unwrap();
        let min_y = self.envelope.min_y().unwrap();
        let max_x = self.envelope.max_x().unwrap();
        let max_y = self.envelope.max_y().unwrap();
        [
            Coord::new(min_x, min_y),
            Coord::new(max_x, min_y),
            Coord::new(max_x, max_y),
            Coord::new(min_x, max_y),
        ]
    }

    fn intersects_segment(&self, line: &Line<F>) -> bool {
        if !self.envelope.intersects(&line.envelope()) {
            return false;
        }
        if self.envelope.intersects_coord(line.start) || self.envelope.intersects_coord(line.end) {
            return true;
        }
        let corners = self.corners();
        (0..4).any(|i| {
            let side = Line::new(corners[i], corners[(i + 1) % 4]);
            side.intersects(line)
        })
    }
}

impl<F: GeoFloat> RTreeObject for HotPixel<F> {
    type Envelope = AABB<Coord<F>>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            Coord::new(
                self.envelope.min_x().unwrap(),
                self.envelope.min_y().unwrap(),
            ),
            Coord::new(
                self.envelope.max_x().unwrap(),
                self.envelope.max_y().unwrap(),
            ),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord;

    #[test]
    fn output_lands_on_the_grid() {
        let mut noder = SnapRoundingNoder::new(PrecisionModel::fixed(1.0)).unwrap();
        let strings: Vec<SegmentString<f64>> = vec![
            SegmentString::new(
                vec![coord! { x: 0.2, y: 0.1 }, coord! { x: 10.3, y: 9.8 }],
                (),
            ),
            SegmentString::new(
                vec![coord! { x: 0.1, y: 9.9 }, coord! { x: 9.7, y: 0.4 }],
                (),
            ),
        ];
        let noded = noder.node(strings).unwrap();
        for string in &noded {
            for coord in string.coords() {
                assert_eq!(coord.x, coord.x.round());
                assert_eq!(coord.y, coord.y.round());
            }
        }
        // the crossing still splits both inputs
        assert!(noded.len() >= 4);
    }

    #[test]
    fn collapsed_string_is_dropped() {
        let mut noder = SnapRoundingNoder::new(PrecisionModel::fixed(1.0)).unwrap();
        let strings = vec![SegmentString::new(
            vec![coord! { x: 0.1, y: 0.1 }, coord! { x: 0.2, y: -0.2 }],
            (),
        )];
        let noded = noder.node(strings).unwrap();
        assert!(noded.is_empty());
    }

    #[test]
    fn segment_through_hot_pixel_snaps_to_its_center() {
        // the second string passes through the tolerance square of the
        // first string's endpoint at (5, 2) without touching the endpoint
        // itself
        let mut noder = SnapRoundingNoder::new(PrecisionModel::fixed(1.0)).unwrap();
        let strings = vec![
            SegmentString::new(vec![coord! { x: 5.0, y: 2.0 }, coord! { x: 5.0, y: 9.0 }], 'a'),
            SegmentString::new(vec![coord! { x: 0.0, y: 1.0 }, coord! { x: 10.0, y: 4.0 }], 'b'),
        ];
        let noded = noder.node(strings).unwrap();
        assert!(noded
            .iter()
            .filter(|s| *s.data() == 'b')
            .any(|s| s.coords().contains(&coord! { x: 5.0, y: 2.0 })));
    }

    #[test]
    fn floating_model_is_rejected() {
        assert!(SnapRoundingNoder::new(PrecisionModel::Floating).is_err());
    }
}
