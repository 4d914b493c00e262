use crate::geometry::{Coord, CoordDim, CoordSeq, GeometryFactory, Line};
use crate::CoordFloat;

use std::ops::Deref;

/// An ordered collection of two or more coordinates, representing a path
/// between locations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineString<T: CoordFloat = f64> {
    coords: CoordSeq<T>,
    factory: GeometryFactory,
}

impl<T: CoordFloat> LineString<T> {
    pub fn new(coords: CoordSeq<T>) -> Self {
        LineString {
            coords,
            factory: GeometryFactory::default(),
        }
    }

    pub fn from_coords(coords: impl IntoIterator<Item = Coord<T>>) -> Self {
        Self::new(CoordSeq::from_coords_inferred(coords))
    }

    pub fn empty() -> Self {
        Self::new(CoordSeq::new(CoordDim::Xy))
    }

    pub(crate) fn from_seq(coords: CoordSeq<T>, factory: GeometryFactory) -> Self {
        LineString { coords, factory }
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    pub fn coord_seq(&self) -> &CoordSeq<T> {
        &self.coords
    }

    pub fn coord(&self, index: usize) -> Option<Coord<T>> {
        self.coords.get(index)
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord<T>> + '_ {
        self.coords.iter()
    }

    /// Iterate over the segments of the path.
    pub fn lines(&self) -> impl Iterator<Item = Line<T>> + '_ {
        (1..self.coords.len()).map(move |i| Line::new(self.coords.coord(i - 1), self.coords.coord(i)))
    }

    /// Whether the first and last coordinates coincide (2-D equality). An
    /// empty line string is not closed.
    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// A copy with the coordinate order reversed.
    pub fn reversed(&self) -> Self {
        let mut coords: Vec<Coord<T>> = self.coords.to_vec();
        coords.reverse();
        LineString {
            coords: CoordSeq::from_coords(self.coords.dim(), coords),
            factory: self.factory,
        }
    }

    /// A copy with the closing coordinate appended when absent.
    pub fn closed(&self) -> Self {
        if self.is_closed() || self.is_empty() {
            return self.clone();
        }
        let mut coords = self.coords.to_vec();
        coords.push(coords[0]);
        LineString {
            coords: CoordSeq::from_coords(self.coords.dim(), coords),
            factory: self.factory,
        }
    }

    pub fn factory(&self) -> &GeometryFactory {
        &self.factory
    }

    pub(crate) fn set_factory(&mut self, factory: GeometryFactory) {
        self.factory = factory;
    }

    pub fn srid(&self) -> i32 {
        self.factory.srid
    }

    pub fn set_srid(&mut self, srid: i32) {
        self.factory.srid = srid;
    }
}

impl<T: CoordFloat> FromIterator<Coord<T>> for LineString<T> {
    fn from_iter<I: IntoIterator<Item = Coord<T>>>(iter: I) -> Self {
        Self::from_coords(iter)
    }
}

/// A closed, simple `LineString` bounding a polygon ring.
///
/// Closure and simplicity are *validity* invariants, checked by
/// [`IsValid`](crate::algorithm::validation::IsValid); construction accepts
/// any line string.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRing<T: CoordFloat = f64>(LineString<T>);

impl<T: CoordFloat> LinearRing<T> {
    /// Wrap a line string as a ring, as given.
    pub fn new(line_string: LineString<T>) -> Self {
        LinearRing(line_string)
    }

    /// Wrap a line string as a ring, appending the closing coordinate when
    /// absent.
    pub fn closed(line_string: LineString<T>) -> Self {
        LinearRing(line_string.closed())
    }

    pub fn empty() -> Self {
        LinearRing(LineString::empty())
    }

    pub fn as_line_string(&self) -> &LineString<T> {
        &self.0
    }

    pub fn into_line_string(self) -> LineString<T> {
        self.0
    }

    pub fn reversed(&self) -> Self {
        LinearRing(self.0.reversed())
    }
}

impl<T: CoordFloat> Deref for LinearRing<T> {
    type Target = LineString<T>;

    fn deref(&self) -> &LineString<T> {
        &self.0
    }
}

impl<T: CoordFloat> From<LineString<T>> for LinearRing<T> {
    fn from(line_string: LineString<T>) -> Self {
        LinearRing::new(line_string)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord;

    #[test]
    fn closedness() {
        let open = LineString::from_coords(vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 1.0, y: 1.0 },
        ]);
        assert!(!open.is_closed());
        assert!(open.closed().is_closed());
        assert_eq!(open.closed().num_coords(), 4);

        // closure is 2-D: differing Z still closes the ring
        let ring = LineString::from_coords(vec![
            Coord::new(0.0, 0.0).with_z(1.0),
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 0.0, y: 1.0 },
            Coord::new(0.0, 0.0).with_z(9.0),
        ]);
        assert!(ring.is_closed());
    }

    #[test]
    fn lines_iterates_segments() {
        let line_string = LineString::from_coords(vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 1.0, y: 1.0 },
        ]);
        let lines: Vec<_> = line_string.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], Line::new(coord! { x: 1.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 }));
    }
}
