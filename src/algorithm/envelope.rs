use crate::geometry::{
    Envelope, Geometry, GeometryCollection, Line, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::{CoordFloat, GeometryCow};

/// Calculation of the envelope (axis-aligned bounding rectangle) of a
/// geometry. Empty geometries have the empty envelope.
pub trait HasEnvelope {
    type Scalar: CoordFloat;

    fn envelope(&self) -> Envelope<Self::Scalar>;
}

impl<T: CoordFloat> HasEnvelope for Point<T> {
    type Scalar = T;

    fn envelope(&self) -> Envelope<T> {
        self.coord().map_or_else(Envelope::empty, Envelope::of_coord)
    }
}

impl<T: CoordFloat> HasEnvelope for Line<T> {
    type Scalar = T;

    fn envelope(&self) -> Envelope<T> {
        Line::envelope(self)
    }
}

impl<T: CoordFloat> HasEnvelope for LineString<T> {
    type Scalar = T;

    fn envelope(&self) -> Envelope<T> {
        self.coords().collect()
    }
}

impl<T: CoordFloat> HasEnvelope for LinearRing<T> {
    type Scalar = T;

    fn envelope(&self) -> Envelope<T> {
        self.as_line_string().envelope()
    }
}

impl<T: CoordFloat> HasEnvelope for Polygon<T> {
    type Scalar = T;

    fn envelope(&self) -> Envelope<T> {
        // holes lie within the shell, so only the shell matters
        self.exterior().envelope()
    }
}

fn envelope_of_parts<'a, T, I, G>(parts: I) -> Envelope<T>
where
    T: CoordFloat,
    G: HasEnvelope<Scalar = T> + 'a,
    I: Iterator<Item = &'a G>,
{
    let mut envelope = Envelope::empty();
    for part in parts {
        envelope.expand_to_include_envelope(&part.envelope());
    }
    envelope
}

impl<T: CoordFloat> HasEnvelope for MultiPoint<T> {
    type Scalar = T;

    fn envelope(&self) -> Envelope<T> {
        envelope_of_parts(self.iter())
    }
}

impl<T: CoordFloat> HasEnvelope for MultiLineString<T> {
    type Scalar = T;

    fn envelope(&self) -> Envelope<T> {
        envelope_of_parts(self.iter())
    }
}

impl<T: CoordFloat> HasEnvelope for MultiPolygon<T> {
    type Scalar = T;

    fn envelope(&self) -> Envelope<T> {
        envelope_of_parts(self.iter())
    }
}

impl<T: CoordFloat> HasEnvelope for GeometryCollection<T> {
    type Scalar = T;

    fn envelope(&self) -> Envelope<T> {
        envelope_of_parts(self.iter())
    }
}

impl<T: CoordFloat> HasEnvelope for Geometry<T> {
    type Scalar = T;

    fn envelope(&self) -> Envelope<T> {
        match self {
            Geometry::Point(g) => g.envelope(),
            Geometry::LineString(g) => g.envelope(),
            Geometry::LinearRing(g) => g.envelope(),
            Geometry::Polygon(g) => g.envelope(),
            Geometry::MultiPoint(g) => g.envelope(),
            Geometry::MultiLineString(g) => g.envelope(),
            Geometry::MultiPolygon(g) => g.envelope(),
            Geometry::GeometryCollection(g) => g.envelope(),
        }
    }
}

impl<T: CoordFloat> HasEnvelope for GeometryCow<'_, T> {
    type Scalar = T;

    fn envelope(&self) -> Envelope<T> {
        match self {
            GeometryCow::Point(g) => g.envelope(),
            GeometryCow::LineString(g) => g.envelope(),
            GeometryCow::LinearRing(g) => HasEnvelope::envelope(&**g),
            GeometryCow::Polygon(g) => g.envelope(),
            GeometryCow::MultiPoint(g) => g.envelope(),
            GeometryCow::MultiLineString(g) => g.envelope(),
            GeometryCow::MultiPolygon(g) => g.envelope(),
            GeometryCow::GeometryCollection(g) => g.envelope(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{line_string, polygon};
    use crate::geometry::Envelope;

    #[test]
    fn envelope_of_line_string() {
        let ls = line_string![(x: 0.0, y: 5.0), (x: 3.0, y: -1.0), (x: 2.0, y: 9.0)];
        assert_eq!(ls.envelope(), Envelope::from_bounds(0.0, -1.0, 3.0, 9.0));
    }

    #[test]
    fn envelope_of_empty_geometry() {
        assert!(LineString::<f64>::empty().envelope().is_empty());
        assert!(Polygon::<f64>::empty().envelope().is_empty());
    }

    #[test]
    fn envelope_of_polygon_is_shell_envelope() {
        let poly = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)];
        assert_eq!(poly.envelope(), Envelope::from_bounds(0.0, 0.0, 10.0, 10.0));
    }
}
