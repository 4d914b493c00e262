use crate::geometry::Coord;
use crate::GeoFloat;

/// One segment of an [`Edge`](super::super::Edge), as stored in the
/// spatial index: the owning edge's index, the segment's index within it,
/// and its envelope.
#[derive(Debug, Clone)]
pub(crate) struct Segment<F: GeoFloat> {
    pub edge_idx: usize,
    pub segment_idx: usize,
    pub envelope: rstar::AABB<Coord<F>>,
}

impl<F> Segment<F>
where
    F: GeoFloat,
{
    pub fn new(edge_idx: usize, segment_idx: usize, p1: Coord<F>, p2: Coord<F>) -> Self {
        Self {
            edge_idx,
            segment_idx,
            envelope: rstar::AABB::from_corners(p1, p2),
        }
    }
}

impl<F> rstar::RTreeObject for Segment<F>
where
    F: GeoFloat,
{
    type Envelope = rstar::AABB<Coord<F>>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}
