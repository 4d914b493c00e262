use crate::algorithm::coordinate_position::{coord_pos_relative_to_ring, CoordPos};
use crate::algorithm::line_intersection::{line_intersection, LineIntersection};
use crate::algorithm::noding::{IndexNoder, Noder, SegmentString};
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::utils::is_finite_xy;
use crate::GeoFloat;

use std::fmt;

/// Why a geometry fails the simple-feature validity rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub reason: String,
    pub coordinate: Option<Coord<f64>>,
}

impl ValidationError {
    fn new<F: GeoFloat>(reason: impl Into<String>, coordinate: Option<Coord<F>>) -> Self {
        ValidationError {
            reason: reason.into(),
            coordinate: coordinate.map(|coord| {
                Coord::new(
                    coord.x.to_f64().unwrap_or(f64::NAN),
                    coord.y.to_f64().unwrap_or(f64::NAN),
                )
            }),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.coordinate {
            Some(coord) => write!(f, "{} at ({:?}, {:?})", self.reason, coord.x, coord.y),
            None => f.write_str(&self.reason),
        }
    }
}

/// Checks a geometry against the simple-feature validity rules.
///
/// Construction does not enforce these rules; callers that accept
/// arbitrary input and need well-behaved topology should validate first.
///
/// ```
/// use sfgeo::polygon;
/// use sfgeo::validation::IsValid;
///
/// let valid = polygon![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)];
/// assert!(valid.is_valid());
///
/// // a bow-tie: the ring crosses itself
/// let bow_tie = polygon![(x: 0.0, y: 0.0), (x: 4.0, y: 4.0), (x: 4.0, y: 0.0), (x: 0.0, y: 4.0)];
/// assert!(!bow_tie.is_valid());
/// ```
pub trait IsValid {
    fn validation_error(&self) -> Option<ValidationError>;

    fn is_valid(&self) -> bool {
        self.validation_error().is_none()
    }
}

fn check_finite<F: GeoFloat>(coords: impl Iterator<Item = Coord<F>>) -> Option<ValidationError> {
    for coord in coords {
        if !is_finite_xy(&coord) {
            return Some(ValidationError::new::<F>(
                "non-finite X/Y ordinate",
                Some(coord),
            ));
        }
    }
    None
}

/// A ring is simple iff noding it against itself splits nothing.
fn ring_self_intersection<F: GeoFloat>(ring: &LineString<F>) -> Option<ValidationError> {
    let input = vec![SegmentString::new(ring.coords().collect(), ())];
    match IndexNoder::new().node(input) {
        Ok(noded) => {
            if noded.len() > 1 {
                let witness = noded[0].coords().last().copied();
                Some(ValidationError::new("ring self-intersection", witness))
            } else {
                None
            }
        }
        Err(_) => Some(ValidationError::new::<F>("ring could not be noded", None)),
    }
}

fn check_ring<F: GeoFloat>(ring: &LinearRing<F>) -> Option<ValidationError> {
    if ring.is_empty() {
        return None;
    }
    if let Some(error) = check_finite(ring.coords()) {
        return Some(error);
    }
    if !ring.is_closed() {
        return Some(ValidationError::new("ring is not closed", ring.coord(0)));
    }
    if ring.num_coords() < 4 {
        return Some(ValidationError::new(
            "ring has fewer than 4 coordinates",
            ring.coord(0),
        ));
    }
    ring_self_intersection(ring.as_line_string())
}

/// Rings of a polygon may touch at isolated points but must not cross or
/// share a line segment.
fn check_ring_pair<F: GeoFloat>(
    ring_a: &LinearRing<F>,
    ring_b: &LinearRing<F>,
) -> Option<ValidationError> {
    for segment_a in ring_a.lines() {
        for segment_b in ring_b.lines() {
            match line_intersection(segment_a, segment_b) {
                Some(LineIntersection::SinglePoint {
                    is_proper: true,
                    intersection,
                }) => {
                    return Some(ValidationError::new("rings cross", Some(intersection)));
                }
                Some(LineIntersection::Collinear { intersection }) => {
                    if intersection.start != intersection.end {
                        return Some(ValidationError::new(
                            "rings share a line segment",
                            Some(intersection.start),
                        ));
                    }
                }
                _ => {}
            }
        }
    }
    None
}

impl<F: GeoFloat> IsValid for Point<F> {
    fn validation_error(&self) -> Option<ValidationError> {
        check_finite(self.coord().into_iter())
    }
}

impl<F: GeoFloat> IsValid for LineString<F> {
    fn validation_error(&self) -> Option<ValidationError> {
        if self.num_coords() == 1 {
            return Some(ValidationError::new(
                "line string with a single coordinate",
                self.coord(0),
            ));
        }
        check_finite(self.coords())
    }
}

impl<F: GeoFloat> IsValid for LinearRing<F> {
    fn validation_error(&self) -> Option<ValidationError> {
        check_ring(self)
    }
}

impl<F: GeoFloat> IsValid for Polygon<F> {
    fn validation_error(&self) -> Option<ValidationError> {
        if self.is_empty() {
            return None;
        }

        for ring in self.rings() {
            if let Some(error) = check_ring(ring) {
                return Some(error);
            }
        }

        let shell = self.exterior().as_line_string();
        for (hole_index, hole) in self.interiors().iter().enumerate() {
            if let Some(error) = check_ring_pair(self.exterior(), hole) {
                return Some(error);
            }

            // every hole must lie within the shell (touching is allowed)
            if hole
                .coords()
                .any(|coord| coord_pos_relative_to_ring(coord, shell) == CoordPos::Outside)
            {
                return Some(ValidationError::new(
                    "hole lies outside shell",
                    hole.coord(0),
                ));
            }

            // holes must not nest
            for other_hole in &self.interiors()[hole_index + 1..] {
                if let Some(error) = check_ring_pair(hole, other_hole) {
                    return Some(error);
                }
                let nested = other_hole.coords().any(|coord| {
                    coord_pos_relative_to_ring(coord, hole.as_line_string()) == CoordPos::Inside
                }) || hole.coords().any(|coord| {
                    coord_pos_relative_to_ring(coord, other_hole.as_line_string())
                        == CoordPos::Inside
                });
                if nested {
                    return Some(ValidationError::new("nested holes", other_hole.coord(0)));
                }
            }
        }
        None
    }
}

impl<F: GeoFloat> IsValid for MultiPoint<F> {
    fn validation_error(&self) -> Option<ValidationError> {
        self.iter().find_map(|point| point.validation_error())
    }
}

impl<F: GeoFloat> IsValid for MultiLineString<F> {
    fn validation_error(&self) -> Option<ValidationError> {
        self.iter()
            .find_map(|line_string| line_string.validation_error())
    }
}

impl<F: GeoFloat> IsValid for MultiPolygon<F> {
    fn validation_error(&self) -> Option<ValidationError> {
        if let Some(error) = self.iter().find_map(|polygon| polygon.validation_error()) {
            return Some(error);
        }

        // element interiors must be pairwise disjoint: shells may not cross
        // or contain one another
        let polygons = self.polygons();
        for (index, polygon) in polygons.iter().enumerate() {
            for other in &polygons[index + 1..] {
                if polygon.is_empty() || other.is_empty() {
                    continue;
                }
                if let Some(error) = check_ring_pair(polygon.exterior(), other.exterior()) {
                    return Some(error);
                }

                let shell = polygon.exterior().as_line_string();
                let other_shell = other.exterior().as_line_string();
                let nested = other_shell
                    .coords()
                    .any(|coord| coord_pos_relative_to_ring(coord, shell) == CoordPos::Inside)
                    || shell.coords().any(|coord| {
                        coord_pos_relative_to_ring(coord, other_shell) == CoordPos::Inside
                    });
                if nested {
                    return Some(ValidationError::new(
                        "element polygons overlap",
                        other.exterior().coord(0),
                    ));
                }
            }
        }
        None
    }
}

impl<F: GeoFloat> IsValid for GeometryCollection<F> {
    fn validation_error(&self) -> Option<ValidationError> {
        self.iter().find_map(|geometry| geometry.validation_error())
    }
}

impl<F: GeoFloat> IsValid for Geometry<F> {
    fn validation_error(&self) -> Option<ValidationError> {
        match self {
            Geometry::Point(g) => g.validation_error(),
            Geometry::LineString(g) => g.validation_error(),
            Geometry::LinearRing(g) => g.validation_error(),
            Geometry::Polygon(g) => g.validation_error(),
            Geometry::MultiPoint(g) => g.validation_error(),
            Geometry::MultiLineString(g) => g.validation_error(),
            Geometry::MultiPolygon(g) => g.validation_error(),
            Geometry::GeometryCollection(g) => g.validation_error(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{line_string, polygon};

    #[test]
    fn simple_polygon_is_valid() {
        let square = polygon![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)];
        assert!(square.is_valid());
    }

    #[test]
    fn bow_tie_is_invalid() {
        let bow_tie = polygon![(x: 0.0, y: 0.0), (x: 4.0, y: 4.0), (x: 4.0, y: 0.0), (x: 0.0, y: 4.0)];
        let error = bow_tie.validation_error().unwrap();
        assert!(error.reason.contains("self-intersection"));
    }

    #[test]
    fn unclosed_ring_is_invalid() {
        let open = LinearRing::new(line_string![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 0.0, y: 4.0)]);
        let error = Polygon::from_rings(open, vec![]).validation_error().unwrap();
        assert_eq!(error.reason, "ring is not closed");
    }

    #[test]
    fn hole_outside_shell_is_invalid() {
        let poly = crate::polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)],
            interiors: [[(x: 10.0, y: 10.0), (x: 11.0, y: 10.0), (x: 11.0, y: 11.0), (x: 10.0, y: 11.0)]],
        );
        let error = poly.validation_error().unwrap();
        assert_eq!(error.reason, "hole lies outside shell");
    }

    #[test]
    fn hole_touching_shell_at_a_point_is_valid() {
        let poly = crate::polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 8.0, y: 0.0), (x: 8.0, y: 8.0), (x: 0.0, y: 8.0)],
            interiors: [[(x: 0.0, y: 4.0), (x: 4.0, y: 2.0), (x: 4.0, y: 6.0)]],
        );
        assert!(poly.is_valid());
    }

    #[test]
    fn hole_crossing_shell_is_invalid() {
        let poly = crate::polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 8.0, y: 0.0), (x: 8.0, y: 8.0), (x: 0.0, y: 8.0)],
            interiors: [[(x: -2.0, y: 3.0), (x: 4.0, y: 3.0), (x: 4.0, y: 5.0), (x: -2.0, y: 5.0)]],
        );
        let error = poly.validation_error().unwrap();
        assert_eq!(error.reason, "rings cross");
    }

    #[test]
    fn overlapping_multipolygon_elements_are_invalid() {
        let a = polygon![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)];
        let b = polygon![(x: 2.0, y: 2.0), (x: 6.0, y: 2.0), (x: 6.0, y: 6.0), (x: 2.0, y: 6.0)];
        let multi = MultiPolygon::new(vec![a, b]);
        assert!(!multi.is_valid());
    }
}
