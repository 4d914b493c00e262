use crate::geometry::{Geometry, GeometryCollection, LineString, LinearRing, MultiPolygon, Polygon};
use crate::CoordFloat;

/// Twice the signed area of a ring, by the shoelace formula.
///
/// Positive for counter-clockwise winding. Ordinates are shifted to the
/// first coordinate before summing to keep precision when the ring is far
/// from the origin.
pub(crate) fn twice_signed_ring_area<T: CoordFloat>(ring: &LineString<T>) -> T {
    if ring.num_coords() < 3 {
        return T::zero();
    }

    let shift = ring.coord(0).unwrap();
    let mut total = T::zero();
    for line in ring.lines() {
        let start = line.start - shift;
        let end = line.end - shift;
        total = total + (start.x * end.y - end.x * start.y);
    }
    total
}

fn ring_area<T: CoordFloat>(ring: &LineString<T>) -> T {
    let two = T::one() + T::one();
    twice_signed_ring_area(ring) / two
}

/// Calculation of the planar area of a geometry.
pub trait Area {
    type Scalar: CoordFloat;

    /// Signed area: positive when the exterior ring winds counter-clockwise.
    fn signed_area(&self) -> Self::Scalar;

    fn unsigned_area(&self) -> Self::Scalar;
}

impl<T: CoordFloat> Area for LinearRing<T> {
    type Scalar = T;

    fn signed_area(&self) -> T {
        ring_area(self.as_line_string())
    }

    fn unsigned_area(&self) -> T {
        self.signed_area().abs()
    }
}

impl<T: CoordFloat> Area for Polygon<T> {
    type Scalar = T;

    fn signed_area(&self) -> T {
        let area = ring_area(self.exterior().as_line_string());
        let is_negative = area < T::zero();

        // hole orientation is not trusted; magnitudes are subtracted
        let area = self
            .interiors()
            .iter()
            .fold(area.abs(), |total, hole| {
                total - ring_area(hole.as_line_string()).abs()
            });

        if is_negative {
            -area
        } else {
            area
        }
    }

    fn unsigned_area(&self) -> T {
        self.signed_area().abs()
    }
}

impl<T: CoordFloat> Area for MultiPolygon<T> {
    type Scalar = T;

    fn signed_area(&self) -> T {
        self.iter()
            .fold(T::zero(), |total, polygon| total + polygon.signed_area())
    }

    fn unsigned_area(&self) -> T {
        self.iter()
            .fold(T::zero(), |total, polygon| total + polygon.unsigned_area())
    }
}

impl<T: CoordFloat> Area for GeometryCollection<T> {
    type Scalar = T;

    fn signed_area(&self) -> T {
        self.iter()
            .fold(T::zero(), |total, geometry| total + geometry.signed_area())
    }

    fn unsigned_area(&self) -> T {
        self.iter()
            .fold(T::zero(), |total, geometry| total + geometry.unsigned_area())
    }
}

impl<T: CoordFloat> Area for Geometry<T> {
    type Scalar = T;

    fn signed_area(&self) -> T {
        match self {
            Geometry::Polygon(g) => g.signed_area(),
            Geometry::MultiPolygon(g) => g.signed_area(),
            Geometry::LinearRing(g) => g.signed_area(),
            Geometry::GeometryCollection(g) => g.signed_area(),
            _ => T::zero(),
        }
    }

    fn unsigned_area(&self) -> T {
        match self {
            Geometry::Polygon(g) => g.unsigned_area(),
            Geometry::MultiPolygon(g) => g.unsigned_area(),
            Geometry::LinearRing(g) => g.unsigned_area(),
            Geometry::GeometryCollection(g) => g.unsigned_area(),
            _ => T::zero(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::polygon;

    #[test]
    fn square_area() {
        let square = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)];
        assert_eq!(square.unsigned_area(), 100.0);
        // counter-clockwise ring: positive signed area
        assert_eq!(square.signed_area(), 100.0);
    }

    #[test]
    fn clockwise_ring_is_negative() {
        let square = polygon![(x: 0.0, y: 0.0), (x: 0.0, y: 10.0), (x: 10.0, y: 10.0), (x: 10.0, y: 0.0)];
        assert_eq!(square.signed_area(), -100.0);
        assert_eq!(square.unsigned_area(), 100.0);
    }

    #[test]
    fn hole_area_is_subtracted() {
        let holed = crate::polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
            interiors: [[(x: 2.0, y: 2.0), (x: 8.0, y: 2.0), (x: 8.0, y: 8.0), (x: 2.0, y: 8.0)]],
        );
        assert_eq!(holed.unsigned_area(), 100.0 - 36.0);
    }

    #[test]
    fn degenerate_rings() {
        assert_eq!(crate::Polygon::<f64>::empty().unsigned_area(), 0.0);
        let sliver = polygon![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 2.0, y: 0.0)];
        assert_eq!(sliver.unsigned_area(), 0.0);
    }
}
