use crate::geometry::{Geometry, Line, LineString, LinearRing, MultiLineString};
use crate::CoordFloat;

/// Calculation of the planar length of a geometry. Points and areas have
/// zero length; for polygons, see the perimeter of their rings instead.
pub trait EuclideanLength {
    type Scalar: CoordFloat;

    fn euclidean_length(&self) -> Self::Scalar;
}

impl<T: CoordFloat> EuclideanLength for Line<T> {
    type Scalar = T;

    fn euclidean_length(&self) -> T {
        self.dx().hypot(self.dy())
    }
}

impl<T: CoordFloat> EuclideanLength for LineString<T> {
    type Scalar = T;

    fn euclidean_length(&self) -> T {
        self.lines()
            .fold(T::zero(), |total, line| total + line.euclidean_length())
    }
}

impl<T: CoordFloat> EuclideanLength for LinearRing<T> {
    type Scalar = T;

    fn euclidean_length(&self) -> T {
        self.as_line_string().euclidean_length()
    }
}

impl<T: CoordFloat> EuclideanLength for MultiLineString<T> {
    type Scalar = T;

    fn euclidean_length(&self) -> T {
        self.iter()
            .fold(T::zero(), |total, line_string| {
                total + line_string.euclidean_length()
            })
    }
}

impl<T: CoordFloat> EuclideanLength for Geometry<T> {
    type Scalar = T;

    fn euclidean_length(&self) -> T {
        match self {
            Geometry::LineString(g) => g.euclidean_length(),
            Geometry::LinearRing(g) => g.euclidean_length(),
            Geometry::MultiLineString(g) => g.euclidean_length(),
            Geometry::GeometryCollection(g) => g
                .iter()
                .fold(T::zero(), |total, geometry| total + geometry.euclidean_length()),
            _ => T::zero(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::line_string;

    #[test]
    fn length_of_path() {
        let ls = line_string![(x: 0.0, y: 0.0), (x: 3.0, y: 4.0), (x: 3.0, y: 8.0)];
        assert_eq!(ls.euclidean_length(), 9.0);
    }

    #[test]
    fn empty_line_string_has_zero_length() {
        assert_eq!(LineString::<f64>::empty().euclidean_length(), 0.0);
    }
}
