use crate::geometry::{
    GeometryCollection, GeometryFactory, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::CoordFloat;

/// An enum representing any possible geometry type.
///
/// All of the variants can be converted into a `Geometry` with `.into()`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry<T: CoordFloat = f64> {
    Point(Point<T>),
    LineString(LineString<T>),
    LinearRing(LinearRing<T>),
    Polygon(Polygon<T>),
    MultiPoint(MultiPoint<T>),
    MultiLineString(MultiLineString<T>),
    MultiPolygon(MultiPolygon<T>),
    GeometryCollection(GeometryCollection<T>),
}

impl<T: CoordFloat> Geometry<T> {
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::LinearRing(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }

    pub fn factory(&self) -> &GeometryFactory {
        match self {
            Geometry::Point(g) => g.factory(),
            Geometry::LineString(g) => g.factory(),
            Geometry::LinearRing(g) => g.as_line_string().factory(),
            Geometry::Polygon(g) => g.factory(),
            Geometry::MultiPoint(g) => g.factory(),
            Geometry::MultiLineString(g) => g.factory(),
            Geometry::MultiPolygon(g) => g.factory(),
            Geometry::GeometryCollection(g) => g.factory(),
        }
    }

    pub fn srid(&self) -> i32 {
        self.factory().srid
    }

    pub fn set_srid(&mut self, srid: i32) {
        match self {
            Geometry::Point(g) => g.set_srid(srid),
            Geometry::LineString(g) => g.set_srid(srid),
            Geometry::LinearRing(g) => {
                let mut line_string = g.as_line_string().clone();
                line_string.set_srid(srid);
                *g = LinearRing::new(line_string);
            }
            Geometry::Polygon(g) => g.set_srid(srid),
            Geometry::MultiPoint(g) => g.set_srid(srid),
            Geometry::MultiLineString(g) => g.set_srid(srid),
            Geometry::MultiPolygon(g) => g.set_srid(srid),
            Geometry::GeometryCollection(g) => g.set_srid(srid),
        }
    }

    /// The WKT-style name of the variant, e.g. `"Polygon"`.
    pub fn geometry_type(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::LinearRing(_) => "LinearRing",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }
}

macro_rules! geometry_from {
    ($($type: ident),+ $(,)?) => {
        $(
            impl<T: CoordFloat> From<$type<T>> for Geometry<T> {
                fn from(geometry: $type<T>) -> Self {
                    Geometry::$type(geometry)
                }
            }
        )+
    };
}

geometry_from![
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
];
