use crate::algorithm::dimensions::Dimensions;
use crate::geometry::{
    Coord, CoordSeq, Geometry, GeometryCollection, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, PrecisionModel,
};
use crate::{CoordFloat, Error, Result};

/// Creates geometries carrying a shared precision model and SRID.
///
/// The factory is a small immutable value copied into every geometry it
/// creates; copying it is the Rust form of sharing it. Construction applies
/// [`PrecisionModel::make_precise`] to every input coordinate, so the
/// precision model shapes constructed output without affecting how
/// predicates interpret existing geometries.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryFactory {
    pub precision_model: PrecisionModel,
    pub srid: i32,
}

impl GeometryFactory {
    pub fn new(precision_model: PrecisionModel, srid: i32) -> Self {
        GeometryFactory {
            precision_model,
            srid,
        }
    }

    fn make_precise_seq<T: CoordFloat>(&self, seq: &CoordSeq<T>) -> CoordSeq<T> {
        CoordSeq::from_coords(
            seq.dim(),
            seq.iter().map(|c| self.precision_model.make_precise(c)),
        )
    }

    /// A point from a coordinate, or the empty point from `None`.
    pub fn create_point<T: CoordFloat>(&self, coord: Option<Coord<T>>) -> Point<T> {
        let mut point = match coord {
            Some(coord) => Point::new(self.precision_model.make_precise(coord)),
            None => Point::empty(),
        };
        point.set_factory(*self);
        point
    }

    /// A point from a sequence of zero or one coordinates.
    pub fn create_point_from_seq<T: CoordFloat>(&self, seq: CoordSeq<T>) -> Result<Point<T>> {
        if seq.len() > 1 {
            return Err(Error::argument(format!(
                "point requires 0 or 1 coordinates, got {}",
                seq.len()
            )));
        }
        Ok(Point::from_seq(self.make_precise_seq(&seq), *self))
    }

    /// A line string from a sequence of zero, or two or more, coordinates.
    pub fn create_line_string<T: CoordFloat>(&self, seq: CoordSeq<T>) -> Result<LineString<T>> {
        if seq.len() == 1 {
            return Err(Error::argument(
                "line string requires 0 or >= 2 coordinates, got 1",
            ));
        }
        Ok(LineString::from_seq(self.make_precise_seq(&seq), *self))
    }

    /// A linear ring from a sequence, as given; closure and simplicity are
    /// validity properties, not construction requirements.
    pub fn create_linear_ring<T: CoordFloat>(&self, seq: CoordSeq<T>) -> Result<LinearRing<T>> {
        Ok(LinearRing::new(self.create_line_string(seq)?))
    }

    pub fn create_polygon<T: CoordFloat>(
        &self,
        exterior: LinearRing<T>,
        interiors: Vec<LinearRing<T>>,
    ) -> Polygon<T> {
        let mut polygon = Polygon::from_rings(exterior, interiors);
        polygon.set_factory(*self);
        polygon
    }

    pub fn create_multi_point<T: CoordFloat>(&self, points: Vec<Point<T>>) -> MultiPoint<T> {
        let mut multi = MultiPoint::new(points);
        multi.set_factory(*self);
        multi
    }

    pub fn create_multi_line_string<T: CoordFloat>(
        &self,
        line_strings: Vec<LineString<T>>,
    ) -> MultiLineString<T> {
        let mut multi = MultiLineString::new(line_strings);
        multi.set_factory(*self);
        multi
    }

    pub fn create_multi_polygon<T: CoordFloat>(&self, polygons: Vec<Polygon<T>>) -> MultiPolygon<T> {
        let mut multi = MultiPolygon::new(polygons);
        multi.set_factory(*self);
        multi
    }

    pub fn create_geometry_collection<T: CoordFloat>(
        &self,
        geometries: Vec<Geometry<T>>,
    ) -> GeometryCollection<T> {
        let mut collection = GeometryCollection::new(geometries);
        collection.set_factory(*self);
        collection
    }

    /// An empty geometry of the given dimension: point, line string,
    /// polygon, or (for [`Dimensions::Empty`]) an empty collection.
    pub fn create_empty<T: CoordFloat>(&self, dimensions: Dimensions) -> Geometry<T> {
        match dimensions {
            Dimensions::ZeroDimensional => Geometry::Point(self.create_point(None)),
            Dimensions::OneDimensional => {
                let mut line_string = LineString::empty();
                line_string.set_factory(*self);
                Geometry::LineString(line_string)
            }
            Dimensions::TwoDimensional => {
                let mut polygon = Polygon::empty();
                polygon.set_factory(*self);
                Geometry::Polygon(polygon)
            }
            Dimensions::Empty => {
                Geometry::GeometryCollection(self.create_geometry_collection(vec![]))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord;
    use crate::geometry::CoordDim;

    #[test]
    fn construction_applies_precision() {
        let factory = GeometryFactory::new(PrecisionModel::fixed(1.0), 4326);
        let point = factory.create_point(Some(coord! { x: 1.4, y: 2.6 }));
        assert_eq!(point.coord().unwrap(), coord! { x: 1.0, y: 3.0 });
        assert_eq!(point.srid(), 4326);
    }

    #[test]
    fn degenerate_line_string_is_rejected() {
        let factory = GeometryFactory::default();
        let seq = CoordSeq::from_coords(CoordDim::Xy, vec![coord! { x: 0.0, y: 0.0 }]);
        assert!(matches!(
            factory.create_line_string(seq),
            Err(Error::Argument(_))
        ));
    }

    #[test]
    fn unclosed_ring_is_accepted() {
        let factory = GeometryFactory::default();
        let seq = CoordSeq::from_coords(
            CoordDim::Xy,
            vec![
                coord! { x: 0.0, y: 0.0 },
                coord! { x: 1.0, y: 0.0 },
                coord! { x: 0.0, y: 1.0 },
            ],
        );
        let ring = factory.create_linear_ring(seq).unwrap();
        assert!(!ring.is_closed());
    }
}
