use crate::algorithm::coordinate_position::{CoordPos, CoordinatePosition};
use crate::algorithm::dimensions::HasDimensions;
use crate::algorithm::intersects::Intersects;
use crate::algorithm::kernels::Kernel;
use crate::algorithm::line_intersection::{line_intersection, LineIntersection};
use crate::geometry::{Coord, Geometry, Line, Polygon};
use crate::{Error, GeoFloat, GeometryCow, Result};

/// The minimum planar distance between two geometries; zero when they
/// intersect.
pub fn euclidean_distance<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<F> {
    nearest_points(a, b).map(|(p, q)| (p.x - q.x).hypot(p.y - q.y))
}

/// A pair of coordinates, one on each input, realizing the minimum distance
/// between them. For intersecting inputs, both coordinates are an (arbitrary)
/// common point.
pub fn nearest_points<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<(Coord<F>, Coord<F>)> {
    nearest_points_cow(&GeometryCow::from(a), &GeometryCow::from(b))
}

pub(crate) fn distance_cow<F: GeoFloat>(a: &GeometryCow<F>, b: &GeometryCow<F>) -> Result<F> {
    nearest_points_cow(a, b).map(|(p, q)| (p.x - q.x).hypot(p.y - q.y))
}

pub(crate) fn nearest_points_cow<F: GeoFloat>(
    a: &GeometryCow<F>,
    b: &GeometryCow<F>,
) -> Result<(Coord<F>, Coord<F>)> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::EmptyGeometry {
            operation: "nearest points",
        });
    }

    // containment without boundary crossing: test a representative point of
    // each connected component against the other side's areas
    let facets_a = Facets::of(a);
    let facets_b = Facets::of(b);

    if let Some(witness) = facets_a.component_inside(b) {
        return Ok((witness, witness));
    }
    if let Some(witness) = facets_b.component_inside(a) {
        return Ok((witness, witness));
    }

    let mut best: Option<(F, Coord<F>, Coord<F>)> = None;
    let mut consider = |distance: F, p: Coord<F>, q: Coord<F>| {
        if best.map_or(true, |(best_distance, _, _)| distance < best_distance) {
            best = Some((distance, p, q));
        }
    };

    for &p in &facets_a.coords {
        for &q in &facets_b.coords {
            consider(F::Ker::square_euclidean_distance(p, q).sqrt(), p, q);
        }
        for &segment in &facets_b.segments {
            let nearest = closest_point_on_segment(p, segment);
            consider(F::Ker::square_euclidean_distance(p, nearest).sqrt(), p, nearest);
        }
    }
    for &q in &facets_b.coords {
        for &segment in &facets_a.segments {
            let nearest = closest_point_on_segment(q, segment);
            consider(F::Ker::square_euclidean_distance(q, nearest).sqrt(), nearest, q);
        }
    }
    for &sa in &facets_a.segments {
        for &sb in &facets_b.segments {
            if sa.intersects(&sb) {
                let witness = match line_intersection(sa, sb) {
                    Some(LineIntersection::SinglePoint { intersection, .. }) => intersection,
                    Some(LineIntersection::Collinear { intersection }) => intersection.start,
                    // robustness fallback: the predicate and the
                    // constructor can rarely disagree near tolerance
                    None => sa.start,
                };
                consider(F::zero(), witness, witness);
            } else {
                for (p, target, flipped) in [
                    (sa.start, sb, false),
                    (sa.end, sb, false),
                    (sb.start, sa, true),
                    (sb.end, sa, true),
                ] {
                    let nearest = closest_point_on_segment(p, target);
                    let distance = F::Ker::square_euclidean_distance(p, nearest).sqrt();
                    if flipped {
                        consider(distance, nearest, p);
                    } else {
                        consider(distance, p, nearest);
                    }
                }
            }
        }
    }

    best.map(|(_, p, q)| (p, q)).ok_or_else(|| {
        Error::EmptyGeometry {
            operation: "nearest points",
        }
    })
}

/// The point of `segment` closest to `coord`.
pub(crate) fn closest_point_on_segment<F: GeoFloat>(coord: Coord<F>, segment: Line<F>) -> Coord<F> {
    let dx = segment.dx();
    let dy = segment.dy();
    let d_squared = dx * dx + dy * dy;
    if d_squared == F::zero() {
        return segment.start;
    }
    let r = ((coord.x - segment.start.x) * dx + (coord.y - segment.start.y) * dy) / d_squared;
    if r <= F::zero() {
        segment.start
    } else if r >= F::one() {
        segment.end
    } else {
        Coord::new(segment.start.x + r * dx, segment.start.y + r * dy)
    }
}

/// The isolated coordinates and segments of a geometry, flattened.
struct Facets<F: GeoFloat> {
    coords: Vec<Coord<F>>,
    segments: Vec<Line<F>>,
    /// one representative coordinate per connected component
    representatives: Vec<Coord<F>>,
}

impl<F: GeoFloat> Facets<F> {
    fn of(geometry: &GeometryCow<'_, F>) -> Self {
        let mut facets = Facets {
            coords: vec![],
            segments: vec![],
            representatives: vec![],
        };
        facets.add(geometry);
        facets
    }

    fn add(&mut self, geometry: &GeometryCow<'_, F>) {
        match geometry {
            GeometryCow::Point(point) => {
                if let Some(coord) = point.coord() {
                    self.coords.push(coord);
                    self.representatives.push(coord);
                }
            }
            GeometryCow::MultiPoint(multi) => {
                for point in multi.iter() {
                    if let Some(coord) = point.coord() {
                        self.coords.push(coord);
                        self.representatives.push(coord);
                    }
                }
            }
            GeometryCow::LineString(line_string) => self.add_line_string(line_string),
            GeometryCow::LinearRing(ring) => self.add_line_string(ring.as_line_string()),
            GeometryCow::MultiLineString(multi) => {
                for line_string in multi.iter() {
                    self.add_line_string(line_string);
                }
            }
            GeometryCow::Polygon(polygon) => self.add_polygon(polygon),
            GeometryCow::MultiPolygon(multi) => {
                for polygon in multi.iter() {
                    self.add_polygon(polygon);
                }
            }
            GeometryCow::GeometryCollection(collection) => {
                for child in collection.iter() {
                    match child {
                        Geometry::Point(g) => {
                            if let Some(coord) = g.coord() {
                                self.coords.push(coord);
                                self.representatives.push(coord);
                            }
                        }
                        Geometry::LineString(g) => self.add_line_string(g),
                        Geometry::LinearRing(g) => self.add_line_string(g.as_line_string()),
                        Geometry::Polygon(g) => self.add_polygon(g),
                        Geometry::MultiPoint(g) => {
                            for point in g.iter() {
                                if let Some(coord) = point.coord() {
                                    self.coords.push(coord);
                                    self.representatives.push(coord);
                                }
                            }
                        }
                        Geometry::MultiLineString(g) => {
                            for line_string in g.iter() {
                                self.add_line_string(line_string);
                            }
                        }
                        Geometry::MultiPolygon(g) => {
                            for polygon in g.iter() {
                                self.add_polygon(polygon);
                            }
                        }
                        Geometry::GeometryCollection(_) => {
                            // nested collections are rare; recurse through a cow
                            let cow = GeometryCow::from(child);
                            let mut inner = Facets::of(&cow);
                            self.coords.append(&mut inner.coords);
                            self.segments.append(&mut inner.segments);
                            self.representatives.append(&mut inner.representatives);
                        }
                    }
                }
            }
        }
    }

    fn add_line_string(&mut self, line_string: &crate::geometry::LineString<F>) {
        if let Some(first) = line_string.coord(0) {
            self.representatives.push(first);
        }
        if line_string.num_coords() == 1 {
            self.coords.push(line_string.coord(0).unwrap());
            return;
        }
        self.segments.extend(line_string.lines());
    }

    fn add_polygon(&mut self, polygon: &Polygon<F>) {
        if polygon.is_empty() {
            return;
        }
        if let Some(first) = polygon.exterior().coord(0) {
            self.representatives.push(first);
        }
        for ring in polygon.rings() {
            self.segments.extend(ring.lines());
        }
    }

    /// A representative coordinate of this geometry lying inside (or on)
    /// `other`'s areal part, if any.
    fn component_inside(&self, other: &GeometryCow<F>) -> Option<Coord<F>> {
        let has_area = matches!(
            other,
            GeometryCow::Polygon(_) | GeometryCow::MultiPolygon(_) | GeometryCow::GeometryCollection(_)
        );
        if !has_area {
            return None;
        }
        self.representatives
            .iter()
            .copied()
            .find(|representative| other.coordinate_position(representative) != CoordPos::Outside)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{line_string, point, polygon};

    #[test]
    fn point_to_point() {
        let a = Geometry::Point(point! { x: 0.0, y: 0.0 });
        let b = Geometry::Point(point! { x: 3.0, y: 4.0 });
        assert_eq!(euclidean_distance(&a, &b).unwrap(), 5.0);
    }

    #[test]
    fn point_to_segment_interior() {
        let a = Geometry::Point(point! { x: 5.0, y: 3.0 });
        let b = Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)]);
        assert_eq!(euclidean_distance(&a, &b).unwrap(), 3.0);
        let (p, q) = nearest_points(&a, &b).unwrap();
        assert_eq!(p, crate::coord! { x: 5.0, y: 3.0 });
        assert_eq!(q, crate::coord! { x: 5.0, y: 0.0 });
    }

    #[test]
    fn point_inside_polygon_is_distance_zero() {
        let a = Geometry::Point(point! { x: 5.0, y: 5.0 });
        let b = Geometry::Polygon(
            polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
        );
        assert_eq!(euclidean_distance(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn disjoint_polygons() {
        let a = Geometry::Polygon(polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)]);
        let b = Geometry::Polygon(polygon![(x: 4.0, y: 0.0), (x: 5.0, y: 0.0), (x: 5.0, y: 1.0), (x: 4.0, y: 1.0)]);
        assert_eq!(euclidean_distance(&a, &b).unwrap(), 3.0);
    }

    #[test]
    fn empty_input_is_an_error() {
        let a = Geometry::Point(crate::Point::empty());
        let b = Geometry::Point(point! { x: 0.0, y: 0.0 });
        assert!(matches!(
            euclidean_distance(&a, &b),
            Err(Error::EmptyGeometry { .. })
        ));
    }
}
