use crate::algorithm::dimensions::HasDimensions;
use crate::algorithm::envelope::HasEnvelope;
use crate::algorithm::intersects::Intersects;
use crate::geometry::{
    Coord, Geometry, GeometryCollection, Line, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::{GeoFloat, GeometryCow};

/// The position of a `Coord` relative to a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordPos {
    OnBoundary,
    Inside,
    Outside,
}

/// Determine whether a `Coord` lies inside, outside, or on the boundary of
/// a geometry.
///
/// # Examples
///
/// ```
/// use sfgeo::{coord, polygon};
/// use sfgeo::coordinate_position::{CoordPos, CoordinatePosition};
///
/// let square = polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0)];
///
/// assert_eq!(square.coordinate_position(&coord! { x: 1.0, y: 1.0 }), CoordPos::Inside);
/// assert_eq!(square.coordinate_position(&coord! { x: 0.0, y: 1.0 }), CoordPos::OnBoundary);
/// assert_eq!(square.coordinate_position(&coord! { x: 5.0, y: 5.0 }), CoordPos::Outside);
/// ```
pub trait CoordinatePosition {
    type Scalar: GeoFloat;

    fn coordinate_position(&self, coord: &Coord<Self::Scalar>) -> CoordPos {
        let mut is_inside = false;
        let mut boundary_count = 0;

        self.calculate_coordinate_position(coord, &mut is_inside, &mut boundary_count);

        // "The boundary of an arbitrary collection of geometries whose
        // interiors are disjoint consists of geometries drawn from the
        // boundaries of the element geometries by application of the
        // 'mod 2' union rule"
        //
        // - OpenGIS Simple Feature Access § 6.1.15.1
        if boundary_count % 2 == 1 {
            CoordPos::OnBoundary
        } else if is_inside {
            CoordPos::Inside
        } else {
            CoordPos::Outside
        }
    }

    // impls of this trait must:
    //  1. set `is_inside = true` if `coord` is contained within the interior
    //     of any component.
    //  2. increment `boundary_count` for each component whose boundary
    //     contains `coord`.
    fn calculate_coordinate_position(
        &self,
        coord: &Coord<Self::Scalar>,
        is_inside: &mut bool,
        boundary_count: &mut usize,
    );
}

impl<T: GeoFloat> CoordinatePosition for Coord<T> {
    type Scalar = T;

    fn calculate_coordinate_position(
        &self,
        coord: &Coord<T>,
        is_inside: &mut bool,
        _boundary_count: &mut usize,
    ) {
        if self == coord {
            *is_inside = true;
        }
    }
}

impl<T: GeoFloat> CoordinatePosition for Point<T> {
    type Scalar = T;

    fn calculate_coordinate_position(
        &self,
        coord: &Coord<T>,
        is_inside: &mut bool,
        _boundary_count: &mut usize,
    ) {
        if self.coord() == Some(*coord) {
            *is_inside = true;
        }
    }
}

impl<T: GeoFloat> CoordinatePosition for Line<T> {
    type Scalar = T;

    fn calculate_coordinate_position(
        &self,
        coord: &Coord<T>,
        is_inside: &mut bool,
        boundary_count: &mut usize,
    ) {
        // degenerate line is a point
        if self.start == self.end {
            self.start
                .calculate_coordinate_position(coord, is_inside, boundary_count);
            return;
        }

        if coord == &self.start || coord == &self.end {
            *boundary_count += 1;
        } else if self.intersects(coord) {
            *is_inside = true;
        }
    }
}

impl<T: GeoFloat> CoordinatePosition for LineString<T> {
    type Scalar = T;

    fn calculate_coordinate_position(
        &self,
        coord: &Coord<T>,
        is_inside: &mut bool,
        boundary_count: &mut usize,
    ) {
        if self.is_empty() {
            return;
        }

        // return early if there's no chance of an intersection
        if !self.envelope().intersects_coord(*coord) {
            return;
        }

        // a closed line string has no boundary, per SFS
        if !self.is_closed()
            && (Some(*coord) == self.coord_seq().first() || Some(*coord) == self.coord_seq().last())
        {
            *boundary_count += 1;
            return;
        }

        if self.lines().any(|line| line.intersects(coord)) {
            // boundary was ruled out above, so the intersection is interior
            *is_inside = true;
        }
    }
}

impl<T: GeoFloat> CoordinatePosition for LinearRing<T> {
    type Scalar = T;

    fn calculate_coordinate_position(
        &self,
        coord: &Coord<T>,
        is_inside: &mut bool,
        boundary_count: &mut usize,
    ) {
        self.as_line_string()
            .calculate_coordinate_position(coord, is_inside, boundary_count);
    }
}

impl<T: GeoFloat> CoordinatePosition for Polygon<T> {
    type Scalar = T;

    fn calculate_coordinate_position(
        &self,
        coord: &Coord<T>,
        is_inside: &mut bool,
        boundary_count: &mut usize,
    ) {
        if self.is_empty() {
            return;
        }

        if !self.envelope().intersects_coord(*coord) {
            return;
        }

        match coord_pos_relative_to_ring(*coord, self.exterior().as_line_string()) {
            CoordPos::Outside => {}
            CoordPos::OnBoundary => {
                *boundary_count += 1;
            }
            CoordPos::Inside => {
                for hole in self.interiors() {
                    match coord_pos_relative_to_ring(*coord, hole.as_line_string()) {
                        CoordPos::Outside => {}
                        CoordPos::OnBoundary => {
                            *boundary_count += 1;
                            return;
                        }
                        CoordPos::Inside => {
                            // the interior of a hole is the exterior of the polygon
                            return;
                        }
                    }
                }
                // the coord is *outside* the interior holes, so it's *inside* the polygon
                *is_inside = true;
            }
        }
    }
}

impl<T: GeoFloat> CoordinatePosition for MultiPoint<T> {
    type Scalar = T;

    fn calculate_coordinate_position(
        &self,
        coord: &Coord<T>,
        is_inside: &mut bool,
        _boundary_count: &mut usize,
    ) {
        if self.iter().any(|p| p.coord() == Some(*coord)) {
            *is_inside = true;
        }
    }
}

impl<T: GeoFloat> CoordinatePosition for MultiLineString<T> {
    type Scalar = T;

    fn calculate_coordinate_position(
        &self,
        coord: &Coord<T>,
        is_inside: &mut bool,
        boundary_count: &mut usize,
    ) {
        for line_string in self.iter() {
            line_string.calculate_coordinate_position(coord, is_inside, boundary_count);
        }
    }
}

impl<T: GeoFloat> CoordinatePosition for MultiPolygon<T> {
    type Scalar = T;

    fn calculate_coordinate_position(
        &self,
        coord: &Coord<T>,
        is_inside: &mut bool,
        boundary_count: &mut usize,
    ) {
        for polygon in self.iter() {
            polygon.calculate_coordinate_position(coord, is_inside, boundary_count);
        }
    }
}

impl<T: GeoFloat> CoordinatePosition for GeometryCollection<T> {
    type Scalar = T;

    fn calculate_coordinate_position(
        &self,
        coord: &Coord<T>,
        is_inside: &mut bool,
        boundary_count: &mut usize,
    ) {
        for geometry in self.iter() {
            geometry.calculate_coordinate_position(coord, is_inside, boundary_count);
        }
    }
}

impl<T: GeoFloat> CoordinatePosition for Geometry<T> {
    type Scalar = T;

    fn calculate_coordinate_position(
        &self,
        coord: &Coord<T>,
        is_inside: &mut bool,
        boundary_count: &mut usize,
    ) {
        match self {
            Geometry::Point(g) => g.calculate_coordinate_position(coord, is_inside, boundary_count),
            Geometry::LineString(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
            Geometry::LinearRing(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
            Geometry::Polygon(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
            Geometry::MultiPoint(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
            Geometry::MultiLineString(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
            Geometry::MultiPolygon(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
            Geometry::GeometryCollection(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
        }
    }
}

impl<T: GeoFloat> CoordinatePosition for GeometryCow<'_, T> {
    type Scalar = T;

    fn calculate_coordinate_position(
        &self,
        coord: &Coord<T>,
        is_inside: &mut bool,
        boundary_count: &mut usize,
    ) {
        match self {
            GeometryCow::Point(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
            GeometryCow::LineString(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
            GeometryCow::LinearRing(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
            GeometryCow::Polygon(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
            GeometryCow::MultiPoint(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
            GeometryCow::MultiLineString(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
            GeometryCow::MultiPolygon(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
            GeometryCow::GeometryCollection(g) => {
                g.calculate_coordinate_position(coord, is_inside, boundary_count)
            }
        }
    }
}

/// Calculate the position of a `Coord` relative to a closed ring.
///
/// Uses the ray-tracing algorithm: count the crossings of a horizontal ray
/// from the coordinate to positive infinity, taking care when the ray
/// passes through a vertex of the ring.
pub fn coord_pos_relative_to_ring<T: GeoFloat>(coord: Coord<T>, ring: &LineString<T>) -> CoordPos {
    debug_assert!(ring.is_closed() || ring.is_empty());

    if ring.is_empty() {
        return CoordPos::Outside;
    }
    if ring.num_coords() == 1 {
        return if coord == ring.coord(0).unwrap() {
            CoordPos::OnBoundary
        } else {
            CoordPos::Outside
        };
    }

    let mut crossings = 0;
    for line in ring.lines() {
        // the boundary includes every segment point
        if line.intersects(&coord) {
            return CoordPos::OnBoundary;
        }

        // ignore if the segment is strictly to the left of the coord
        let max_x = if line.start.x < line.end.x {
            line.end.x
        } else {
            line.start.x
        };
        if max_x < coord.x {
            continue;
        }

        // Ignore horizontal segments: the ray would intersect them
        // infinitely many times, and they never change the crossing parity.
        if line.start.y == line.end.y {
            continue;
        }

        // Ignore if the intersection of the line is possibly at the
        // beginning/end of the line, and the line lies below the ray. This
        // prevents double counting when the ray passes through a vertex.
        //
        // This handles two cases:
        //   1. the ray enters/exits the ring at the point of intersection
        //   2. the ray touches a vertex but doesn't enter/exit there
        if (line.start.y == coord.y && line.end.y < coord.y)
            || (line.end.y == coord.y && line.start.y < coord.y)
        {
            continue;
        }

        // Otherwise, check if the ray intersects the segment. Enough to
        // consider the ray up to the max_x coordinate of this segment.
        let ray = Line::new(coord, Coord::new(max_x, coord.y));
        if ray.intersects(&line) {
            crossings += 1;
        }
    }

    if crossings % 2 == 1 {
        CoordPos::Inside
    } else {
        CoordPos::Outside
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{coord, line_string, point, polygon};

    #[test]
    fn point_in_square() {
        let square = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)];
        assert_eq!(
            square.coordinate_position(&coord! { x: 1.0, y: 1.0 }),
            CoordPos::Inside
        );
        assert_eq!(
            square.coordinate_position(&coord! { x: 0.0, y: 5.0 }),
            CoordPos::OnBoundary
        );
        assert_eq!(
            square.coordinate_position(&coord! { x: -1.0, y: 5.0 }),
            CoordPos::Outside
        );
    }

    #[test]
    fn point_in_hole_is_outside() {
        let holed = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
            interiors: [[(x: 2.0, y: 2.0), (x: 8.0, y: 2.0), (x: 8.0, y: 8.0), (x: 2.0, y: 8.0)]],
        );
        assert_eq!(
            holed.coordinate_position(&coord! { x: 5.0, y: 5.0 }),
            CoordPos::Outside
        );
        assert_eq!(
            holed.coordinate_position(&coord! { x: 1.0, y: 1.0 }),
            CoordPos::Inside
        );
        assert_eq!(
            holed.coordinate_position(&coord! { x: 2.0, y: 5.0 }),
            CoordPos::OnBoundary
        );
    }

    #[test]
    fn ray_through_vertex() {
        // the ray from the test point passes exactly through ring vertices
        let diamond = polygon![(x: 5.0, y: 0.0), (x: 10.0, y: 5.0), (x: 5.0, y: 10.0), (x: 0.0, y: 5.0)];
        assert_eq!(
            diamond.coordinate_position(&coord! { x: 5.0, y: 5.0 }),
            CoordPos::Inside
        );
        assert_eq!(
            diamond.coordinate_position(&coord! { x: -1.0, y: 5.0 }),
            CoordPos::Outside
        );
    }

    #[test]
    fn line_string_boundary_is_its_endpoints() {
        let ls = line_string![(x: 0.0, y: 0.0), (x: 5.0, y: 0.0), (x: 5.0, y: 5.0)];
        assert_eq!(
            ls.coordinate_position(&coord! { x: 0.0, y: 0.0 }),
            CoordPos::OnBoundary
        );
        assert_eq!(
            ls.coordinate_position(&coord! { x: 2.5, y: 0.0 }),
            CoordPos::Inside
        );
        assert_eq!(
            ls.coordinate_position(&coord! { x: 2.5, y: 2.5 }),
            CoordPos::Outside
        );

        // closed line strings have no boundary
        let ring = line_string![(x: 0.0, y: 0.0), (x: 5.0, y: 0.0), (x: 5.0, y: 5.0), (x: 0.0, y: 0.0)];
        assert_eq!(
            ring.coordinate_position(&coord! { x: 0.0, y: 0.0 }),
            CoordPos::Inside
        );
    }

    #[test]
    fn point_geometry() {
        let point = point! { x: 2.0, y: 3.0 };
        assert_eq!(
            point.coordinate_position(&coord! { x: 2.0, y: 3.0 }),
            CoordPos::Inside
        );
        assert_eq!(
            point.coordinate_position(&coord! { x: 2.0, y: 4.0 }),
            CoordPos::Outside
        );
    }
}
