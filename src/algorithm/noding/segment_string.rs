use crate::geometry::{Coord, Line};
use crate::GeoFloat;

/// A polyline plus arbitrary caller data, the unit of noding.
///
/// The data rides along: when a string is split, every piece receives a
/// clone of its parent's data.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentString<F: GeoFloat, D = ()> {
    coords: Vec<Coord<F>>,
    data: D,
}

impl<F: GeoFloat, D> SegmentString<F, D> {
    pub fn new(coords: Vec<Coord<F>>, data: D) -> Self {
        SegmentString { coords, data }
    }

    pub fn coords(&self) -> &[Coord<F>] {
        &self.coords
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn into_parts(self) -> (Vec<Coord<F>>, D) {
        (self.coords, self.data)
    }

    pub fn num_segments(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    pub(crate) fn segment(&self, index: usize) -> Line<F> {
        Line::new(self.coords[index], self.coords[index + 1])
    }
}
