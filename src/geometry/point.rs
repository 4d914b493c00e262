use crate::geometry::{Coord, CoordDim, CoordSeq, GeometryFactory};
use crate::CoordFloat;

/// A single point, possibly empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T: CoordFloat = f64> {
    coords: CoordSeq<T>,
    factory: GeometryFactory,
}

impl<T: CoordFloat> Point<T> {
    pub fn new(coord: Coord<T>) -> Self {
        Point {
            coords: CoordSeq::from_coords_inferred(std::iter::once(coord)),
            factory: GeometryFactory::default(),
        }
    }

    pub fn empty() -> Self {
        Point {
            coords: CoordSeq::new(CoordDim::Xy),
            factory: GeometryFactory::default(),
        }
    }

    pub(crate) fn from_seq(coords: CoordSeq<T>, factory: GeometryFactory) -> Self {
        debug_assert!(coords.len() <= 1);
        Point { coords, factory }
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The point's coordinate, or `None` when empty.
    pub fn coord(&self) -> Option<Coord<T>> {
        self.coords.first()
    }

    pub fn x(&self) -> Option<T> {
        self.coord().map(|c| c.x)
    }

    pub fn y(&self) -> Option<T> {
        self.coord().map(|c| c.y)
    }

    pub fn coord_seq(&self) -> &CoordSeq<T> {
        &self.coords
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

impl<T: CoordFloat> From<Coord<T>> for Point<T> {
    fn from(coord: Coord<T>) -> Self {
        Point::new(coord)
    }
}

impl<T: CoordFloat> From<(T, T)> for Point<T> {
    fn from(coords: (T, T)) -> Self {
        Point::new(coords.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_point() {
        let point: Point<f64> = Point::empty();
        assert!(point.is_empty());
        assert_eq!(point.coord(), None);
    }

    #[test]
    fn accessors() {
        let point = Point::new(Coord::new(1.0, 2.0).with_z(3.0));
        assert_eq!(point.x(), Some(1.0));
        assert_eq!(point.y(), Some(2.0));
        assert_eq!(point.coord().unwrap().z, 3.0);
    }
}
