use crate::geometry::{
    Geometry, GeometryCollection, GeometryFactory, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::CoordFloat;

use std::borrow::Cow;

/// A geometry, borrowed or owned, used by the engines so callers' inputs are
/// never cloned just to be inspected.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum GeometryCow<'a, T: CoordFloat = f64> {
    Point(Cow<'a, Point<T>>),
    LineString(Cow<'a, LineString<T>>),
    LinearRing(Cow<'a, LinearRing<T>>),
    Polygon(Cow<'a, Polygon<T>>),
    MultiPoint(Cow<'a, MultiPoint<T>>),
    MultiLineString(Cow<'a, MultiLineString<T>>),
    MultiPolygon(Cow<'a, MultiPolygon<T>>),
    GeometryCollection(Cow<'a, GeometryCollection<T>>),
}

impl<T: CoordFloat> GeometryCow<'_, T> {
    pub fn factory(&self) -> &GeometryFactory {
        match self {
            GeometryCow::Point(g) => g.factory(),
            GeometryCow::LineString(g) => g.factory(),
            GeometryCow::LinearRing(g) => g.as_line_string().factory(),
            GeometryCow::Polygon(g) => g.factory(),
            GeometryCow::MultiPoint(g) => g.factory(),
            GeometryCow::MultiLineString(g) => g.factory(),
            GeometryCow::MultiPolygon(g) => g.factory(),
            GeometryCow::GeometryCollection(g) => g.factory(),
        }
    }

    /// Every coordinate of the geometry, in storage order.
    pub fn push_coords(&self, out: &mut Vec<crate::geometry::Coord<T>>) {
        match self {
            GeometryCow::Point(g) => out.extend(g.coord()),
            GeometryCow::LineString(g) => out.extend(g.coords()),
            GeometryCow::LinearRing(g) => out.extend(g.coords()),
            GeometryCow::Polygon(g) => {
                for ring in g.rings() {
                    out.extend(ring.coords());
                }
            }
            GeometryCow::MultiPoint(g) => {
                for point in g.iter() {
                    out.extend(point.coord());
                }
            }
            GeometryCow::MultiLineString(g) => {
                for line_string in g.iter() {
                    out.extend(line_string.coords());
                }
            }
            GeometryCow::MultiPolygon(g) => {
                for polygon in g.iter() {
                    for ring in polygon.rings() {
                        out.extend(ring.coords());
                    }
                }
            }
            GeometryCow::GeometryCollection(g) => {
                for geometry in g.iter() {
                    GeometryCow::from(geometry).push_coords(out);
                }
            }
        }
    }
}

impl<'a, T: CoordFloat> From<&'a Geometry<T>> for GeometryCow<'a, T> {
    fn from(geometry: &'a Geometry<T>) -> Self {
        match geometry {
            Geometry::Point(g) => GeometryCow::Point(Cow::Borrowed(g)),
            Geometry::LineString(g) => GeometryCow::LineString(Cow::Borrowed(g)),
            Geometry::LinearRing(g) => GeometryCow::LinearRing(Cow::Borrowed(g)),
            Geometry::Polygon(g) => GeometryCow::Polygon(Cow::Borrowed(g)),
            Geometry::MultiPoint(g) => GeometryCow::MultiPoint(Cow::Borrowed(g)),
            Geometry::MultiLineString(g) => GeometryCow::MultiLineString(Cow::Borrowed(g)),
            Geometry::MultiPolygon(g) => GeometryCow::MultiPolygon(Cow::Borrowed(g)),
            Geometry::GeometryCollection(g) => GeometryCow::GeometryCollection(Cow::Borrowed(g)),
        }
    }
}

macro_rules! geometry_cow_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl<'a, T: CoordFloat> From<&'a $variant<T>> for GeometryCow<'a, T> {
                fn from(geometry: &'a $variant<T>) -> Self {
                    GeometryCow::$variant(Cow::Borrowed(geometry))
                }
            }

            impl<T: CoordFloat> From<$variant<T>> for GeometryCow<'static, T> {
                fn from(geometry: $variant<T>) -> Self {
                    GeometryCow::$variant(Cow::Owned(geometry))
                }
            }
        )+
    };
}

geometry_cow_from![
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
];

impl<T: CoordFloat> From<Geometry<T>> for GeometryCow<'static, T> {
    fn from(geometry: Geometry<T>) -> Self {
        match geometry {
            Geometry::Point(g) => GeometryCow::Point(Cow::Owned(g)),
            Geometry::LineString(g) => GeometryCow::LineString(Cow::Owned(g)),
            Geometry::LinearRing(g) => GeometryCow::LinearRing(Cow::Owned(g)),
            Geometry::Polygon(g) => GeometryCow::Polygon(Cow::Owned(g)),
            Geometry::MultiPoint(g) => GeometryCow::MultiPoint(Cow::Owned(g)),
            Geometry::MultiLineString(g) => GeometryCow::MultiLineString(Cow::Owned(g)),
            Geometry::MultiPolygon(g) => GeometryCow::MultiPolygon(Cow::Owned(g)),
            Geometry::GeometryCollection(g) => GeometryCow::GeometryCollection(Cow::Owned(g)),
        }
    }
}
