use crate::geometry::{
    Geometry, GeometryCollection, Line, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::{CoordFloat, GeometryCow};

/// Geometries can have 0, 1, or two dimensions. Or, in the case of an
/// [`empty`](HasDimensions::is_empty) geometry, a special `Empty`
/// dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd)]
pub enum Dimensions {
    /// Some geometries, like a `MultiPoint` or `GeometryCollection`, may
    /// have no elements - thus no dimensions. Note that this is distinct
    /// from being `ZeroDimensional`, like a `Point`.
    Empty,
    /// Dimension of a point
    ZeroDimensional,
    /// Dimension of a line or curve
    OneDimensional,
    /// Dimension of a surface
    TwoDimensional,
}

/// Operate on the dimensionality of geometries.
pub trait HasDimensions {
    /// Some geometries, like a `MultiPoint`, can have zero coordinates - we
    /// call these `empty`. A collection is empty iff every component is
    /// empty.
    fn is_empty(&self) -> bool;

    /// The dimensions of the geometry: note that the dimensionality of some
    /// types depends on the instance - an empty `LineString` has dimension
    /// `Empty`, a degenerate one collapses to `ZeroDimensional`.
    fn dimensions(&self) -> Dimensions;

    /// The dimensions of the geometry's boundary, per the simple-feature
    /// definitions: points have no boundary, a closed line has no boundary,
    /// an open line's boundary is its endpoints, an area's boundary is its
    /// rings.
    fn boundary_dimensions(&self) -> Dimensions;
}

impl<T: CoordFloat> HasDimensions for Point<T> {
    fn is_empty(&self) -> bool {
        Point::is_empty(self)
    }

    fn dimensions(&self) -> Dimensions {
        if self.is_empty() {
            Dimensions::Empty
        } else {
            Dimensions::ZeroDimensional
        }
    }

    fn boundary_dimensions(&self) -> Dimensions {
        Dimensions::Empty
    }
}

impl<T: CoordFloat> HasDimensions for Line<T> {
    fn is_empty(&self) -> bool {
        false
    }

    fn dimensions(&self) -> Dimensions {
        if self.start == self.end {
            Dimensions::ZeroDimensional
        } else {
            Dimensions::OneDimensional
        }
    }

    fn boundary_dimensions(&self) -> Dimensions {
        if self.start == self.end {
            Dimensions::Empty
        } else {
            Dimensions::ZeroDimensional
        }
    }
}

impl<T: CoordFloat> HasDimensions for LineString<T> {
    fn is_empty(&self) -> bool {
        LineString::is_empty(self)
    }

    fn dimensions(&self) -> Dimensions {
        if self.is_empty() {
            return Dimensions::Empty;
        }

        let first = self.coord(0).unwrap();
        if self.coords().any(|coord| coord != first) {
            Dimensions::OneDimensional
        } else {
            // all coords are the same - a zero-length line collapses to a point
            Dimensions::ZeroDimensional
        }
    }

    fn boundary_dimensions(&self) -> Dimensions {
        if self.is_closed() || self.is_empty() {
            // a closed line has no boundary, per SFS
            Dimensions::Empty
        } else {
            Dimensions::ZeroDimensional
        }
    }
}

impl<T: CoordFloat> HasDimensions for LinearRing<T> {
    fn is_empty(&self) -> bool {
        self.as_line_string().is_empty()
    }

    fn dimensions(&self) -> Dimensions {
        self.as_line_string().dimensions()
    }

    fn boundary_dimensions(&self) -> Dimensions {
        Dimensions::Empty
    }
}

impl<T: CoordFloat> HasDimensions for Polygon<T> {
    fn is_empty(&self) -> bool {
        Polygon::is_empty(self)
    }

    fn dimensions(&self) -> Dimensions {
        if self.is_empty() {
            Dimensions::Empty
        } else {
            Dimensions::TwoDimensional
        }
    }

    fn boundary_dimensions(&self) -> Dimensions {
        if self.is_empty() {
            Dimensions::Empty
        } else {
            Dimensions::OneDimensional
        }
    }
}

impl<T: CoordFloat> HasDimensions for MultiPoint<T> {
    fn is_empty(&self) -> bool {
        MultiPoint::is_empty(self)
    }

    fn dimensions(&self) -> Dimensions {
        if self.is_empty() {
            Dimensions::Empty
        } else {
            Dimensions::ZeroDimensional
        }
    }

    fn boundary_dimensions(&self) -> Dimensions {
        Dimensions::Empty
    }
}

impl<T: CoordFloat> HasDimensions for MultiLineString<T> {
    fn is_empty(&self) -> bool {
        MultiLineString::is_empty(self)
    }

    fn dimensions(&self) -> Dimensions {
        self.iter()
            .map(LineString::dimensions)
            .max()
            .unwrap_or(Dimensions::Empty)
    }

    fn boundary_dimensions(&self) -> Dimensions {
        if self.is_closed() {
            return Dimensions::Empty;
        }
        self.iter()
            .map(LineString::boundary_dimensions)
            .max()
            .unwrap_or(Dimensions::Empty)
    }
}

impl<T: CoordFloat> HasDimensions for MultiPolygon<T> {
    fn is_empty(&self) -> bool {
        MultiPolygon::is_empty(self)
    }

    fn dimensions(&self) -> Dimensions {
        self.iter()
            .map(Polygon::dimensions)
            .max()
            .unwrap_or(Dimensions::Empty)
    }

    fn boundary_dimensions(&self) -> Dimensions {
        self.iter()
            .map(Polygon::boundary_dimensions)
            .max()
            .unwrap_or(Dimensions::Empty)
    }
}

impl<T: CoordFloat> HasDimensions for GeometryCollection<T> {
    fn is_empty(&self) -> bool {
        GeometryCollection::is_empty(self)
    }

    fn dimensions(&self) -> Dimensions {
        self.iter()
            .map(Geometry::dimensions)
            .max()
            .unwrap_or(Dimensions::Empty)
    }

    fn boundary_dimensions(&self) -> Dimensions {
        self.iter()
            .map(Geometry::boundary_dimensions)
            .max()
            .unwrap_or(Dimensions::Empty)
    }
}

impl<T: CoordFloat> HasDimensions for Geometry<T> {
    fn is_empty(&self) -> bool {
        Geometry::is_empty(self)
    }

    fn dimensions(&self) -> Dimensions {
        match self {
            Geometry::Point(g) => g.dimensions(),
            Geometry::LineString(g) => g.dimensions(),
            Geometry::LinearRing(g) => g.dimensions(),
            Geometry::Polygon(g) => g.dimensions(),
            Geometry::MultiPoint(g) => g.dimensions(),
            Geometry::MultiLineString(g) => g.dimensions(),
            Geometry::MultiPolygon(g) => g.dimensions(),
            Geometry::GeometryCollection(g) => g.dimensions(),
        }
    }

    fn boundary_dimensions(&self) -> Dimensions {
        match self {
            Geometry::Point(g) => g.boundary_dimensions(),
            Geometry::LineString(g) => g.boundary_dimensions(),
            Geometry::LinearRing(g) => g.boundary_dimensions(),
            Geometry::Polygon(g) => g.boundary_dimensions(),
            Geometry::MultiPoint(g) => g.boundary_dimensions(),
            Geometry::MultiLineString(g) => g.boundary_dimensions(),
            Geometry::MultiPolygon(g) => g.boundary_dimensions(),
            Geometry::GeometryCollection(g) => g.boundary_dimensions(),
        }
    }
}

impl<T: CoordFloat> HasDimensions for GeometryCow<'_, T> {
    fn is_empty(&self) -> bool {
        match self {
            GeometryCow::Point(g) => HasDimensions::is_empty(&**g),
            GeometryCow::LineString(g) => HasDimensions::is_empty(&**g),
            GeometryCow::LinearRing(g) => HasDimensions::is_empty(&**g),
            GeometryCow::Polygon(g) => HasDimensions::is_empty(&**g),
            GeometryCow::MultiPoint(g) => HasDimensions::is_empty(&**g),
            GeometryCow::MultiLineString(g) => HasDimensions::is_empty(&**g),
            GeometryCow::MultiPolygon(g) => HasDimensions::is_empty(&**g),
            GeometryCow::GeometryCollection(g) => HasDimensions::is_empty(&**g),
        }
    }

    fn dimensions(&self) -> Dimensions {
        match self {
            GeometryCow::Point(g) => g.dimensions(),
            GeometryCow::LineString(g) => g.dimensions(),
            GeometryCow::LinearRing(g) => g.dimensions(),
            GeometryCow::Polygon(g) => g.dimensions(),
            GeometryCow::MultiPoint(g) => g.dimensions(),
            GeometryCow::MultiLineString(g) => g.dimensions(),
            GeometryCow::MultiPolygon(g) => g.dimensions(),
            GeometryCow::GeometryCollection(g) => g.dimensions(),
        }
    }

    fn boundary_dimensions(&self) -> Dimensions {
        match self {
            GeometryCow::Point(g) => g.boundary_dimensions(),
            GeometryCow::LineString(g) => g.boundary_dimensions(),
            GeometryCow::LinearRing(g) => g.boundary_dimensions(),
            GeometryCow::Polygon(g) => g.boundary_dimensions(),
            GeometryCow::MultiPoint(g) => g.boundary_dimensions(),
            GeometryCow::MultiLineString(g) => g.boundary_dimensions(),
            GeometryCow::MultiPolygon(g) => g.boundary_dimensions(),
            GeometryCow::GeometryCollection(g) => g.boundary_dimensions(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{line_string, point, polygon};

    #[test]
    fn dimensions_by_type() {
        assert_eq!(point! { x: 0.0, y: 0.0 }.dimensions(), Dimensions::ZeroDimensional);
        assert_eq!(
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)].dimensions(),
            Dimensions::OneDimensional
        );
        assert_eq!(
            polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 0.0, y: 1.0)].dimensions(),
            Dimensions::TwoDimensional
        );
        assert_eq!(Polygon::<f64>::empty().dimensions(), Dimensions::Empty);
    }

    #[test]
    fn degenerate_line_string_collapses() {
        let degenerate = line_string![(x: 1.0, y: 1.0), (x: 1.0, y: 1.0)];
        assert_eq!(degenerate.dimensions(), Dimensions::ZeroDimensional);
    }

    #[test]
    fn boundary_of_closed_line_is_empty() {
        let ring = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 0.0, y: 1.0), (x: 0.0, y: 0.0)];
        assert_eq!(ring.boundary_dimensions(), Dimensions::Empty);
        let open = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)];
        assert_eq!(open.boundary_dimensions(), Dimensions::ZeroDimensional);
    }
}
