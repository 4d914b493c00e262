use crate::geometry::{Coord, Envelope};
use crate::CoordNum;

/// A single line segment between two coordinates.
///
/// `Line` is a working type for the primitives and the graph engines; it is
/// not one of the simple-feature geometry variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line<T: CoordNum = f64> {
    pub start: Coord<T>,
    pub end: Coord<T>,
}

impl<T: CoordNum> Line<T> {
    pub fn new(start: Coord<T>, end: Coord<T>) -> Self {
        Line { start, end }
    }

    pub fn dx(&self) -> T {
        self.end.x - self.start.x
    }

    pub fn dy(&self) -> T {
        self.end.y - self.start.y
    }

    pub fn envelope(&self) -> Envelope<T> {
        Envelope::of_corners(self.start, self.end)
    }

    pub fn reversed(&self) -> Self {
        Line::new(self.end, self.start)
    }
}

impl<T: CoordNum> From<(Coord<T>, Coord<T>)> for Line<T> {
    fn from((start, end): (Coord<T>, Coord<T>)) -> Self {
        Line::new(start, end)
    }
}
