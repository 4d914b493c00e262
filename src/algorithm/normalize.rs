use crate::algorithm::winding_order::{Winding, WindingOrder};
use crate::geometry::{Coord, Geometry, LineString, LinearRing, Polygon};
use crate::utils::lex_cmp;
use crate::CoordFloat;
use crate::GeoFloat;

use std::cmp::Ordering;

/// Rewrite a geometry into a canonical form: shells wound clockwise, holes
/// counter-clockwise, rings rotated to start at their lexicographically
/// least coordinate, and line strings oriented forward.
///
/// Normalizing is a caller-opt-in mutation; the engines never normalize
/// their inputs, and results of operations preserve the orientation their
/// assembly produced.
pub trait Normalize {
    fn normalize(&mut self);
}

impl<T: GeoFloat> Normalize for LineString<T> {
    fn normalize(&mut self) {
        if self.is_empty() {
            return;
        }
        let first = self.coord(0).unwrap();
        let last = self.coord(self.num_coords() - 1).unwrap();
        if lex_cmp(&last, &first) == Ordering::Less {
            *self = self.reversed();
        }
    }
}

impl<T: GeoFloat> Normalize for LinearRing<T> {
    fn normalize(&mut self) {
        *self = normalized_ring(self, WindingOrder::Clockwise);
    }
}

impl<T: GeoFloat> Normalize for Polygon<T> {
    fn normalize(&mut self) {
        let exterior = normalized_ring(self.exterior(), WindingOrder::Clockwise);
        let interiors = self
            .interiors()
            .iter()
            .map(|hole| normalized_ring(hole, WindingOrder::CounterClockwise))
            .collect();
        let factory = *self.factory();
        let mut normalized = Polygon::from_rings(exterior, interiors);
        normalized.set_factory(factory);
        *self = normalized;
    }
}

impl<T: GeoFloat> Normalize for Geometry<T> {
    fn normalize(&mut self) {
        match self {
            Geometry::Point(_) => {}
            Geometry::LineString(g) => g.normalize(),
            Geometry::LinearRing(g) => g.normalize(),
            Geometry::Polygon(g) => g.normalize(),
            Geometry::MultiPoint(_) => {}
            Geometry::MultiLineString(g) => {
                let factory = *g.factory();
                let mut line_strings = g.line_strings().to_vec();
                for line_string in &mut line_strings {
                    line_string.normalize();
                }
                *g = crate::geometry::MultiLineString::new(line_strings);
                g.set_factory(factory);
            }
            Geometry::MultiPolygon(g) => {
                let factory = *g.factory();
                let mut polygons = g.polygons().to_vec();
                for polygon in &mut polygons {
                    polygon.normalize();
                }
                *g = crate::geometry::MultiPolygon::new(polygons);
                g.set_factory(factory);
            }
            Geometry::GeometryCollection(g) => {
                let factory = *g.factory();
                let mut geometries = g.geometries().to_vec();
                for geometry in &mut geometries {
                    geometry.normalize();
                }
                *g = crate::geometry::GeometryCollection::new(geometries);
                g.set_factory(factory);
            }
        }
    }
}

/// Wind the ring in `order` and rotate it to start at its least coordinate.
fn normalized_ring<T: GeoFloat>(ring: &LinearRing<T>, order: WindingOrder) -> LinearRing<T> {
    if ring.is_empty() || !ring.is_closed() {
        return ring.clone();
    }
    let wound = ring.wound(order);
    LinearRing::new(rotate_ring_to_min(wound.as_line_string()))
}

fn rotate_ring_to_min<T: GeoFloat>(ring: &LineString<T>) -> LineString<T> {
    // ignore the duplicated closing coordinate while rotating
    let coords: Vec<Coord<T>> = ring.coords().collect();
    let open = &coords[..coords.len() - 1];
    let min_index = min_coord_index(open);

    let mut rotated: Vec<Coord<T>> = Vec::with_capacity(coords.len());
    rotated.extend_from_slice(&open[min_index..]);
    rotated.extend_from_slice(&open[..min_index]);
    rotated.push(open[min_index]);

    let mut line_string = LineString::from_coords(rotated);
    line_string.set_factory(*ring.factory());
    line_string
}

fn min_coord_index<T: CoordFloat>(coords: &[Coord<T>]) -> usize {
    let mut min_index = 0;
    for (index, coord) in coords.iter().enumerate() {
        if lex_cmp(coord, &coords[min_index]) == Ordering::Less {
            min_index = index;
        }
    }
    min_index
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::polygon;

    #[test]
    fn polygon_normalizes_to_clockwise_shell_at_min_coord() {
        let mut polygon = polygon![(x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0), (x: 0.0, y: 0.0)];
        polygon.normalize();

        assert_eq!(
            polygon.exterior().winding_order(),
            Some(WindingOrder::Clockwise)
        );
        assert_eq!(polygon.exterior().coord(0), Some(crate::coord! { x: 0.0, y: 0.0 }));
        assert!(polygon.exterior().is_closed());
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut polygon = polygon![(x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0), (x: 0.0, y: 0.0)];
        polygon.normalize();
        let once = polygon.clone();
        polygon.normalize();
        assert_eq!(polygon, once);
    }
}
