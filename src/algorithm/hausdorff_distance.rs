use crate::algorithm::kernels::Kernel;
use crate::geometry::{Coord, Geometry};
use crate::{Error, GeoFloat, GeometryCow, Result};

/// The discrete Hausdorff distance between two geometries: the greatest
/// distance from a vertex of one input to the nearest vertex of the other,
/// in either direction.
///
/// The discrete variant considers vertices only, so it is a lower bound on
/// the true Hausdorff distance; it is exact for point sets and a commonly
/// used approximation for dense lines.
pub fn hausdorff_distance<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<F> {
    let mut coords_a = vec![];
    GeometryCow::from(a).push_coords(&mut coords_a);
    let mut coords_b = vec![];
    GeometryCow::from(b).push_coords(&mut coords_b);

    if coords_a.is_empty() || coords_b.is_empty() {
        return Err(Error::EmptyGeometry {
            operation: "hausdorff distance",
        });
    }

    let forward = directed(&coords_a, &coords_b);
    let backward = directed(&coords_b, &coords_a);
    Ok(forward.max(backward))
}

fn directed<F: GeoFloat>(from: &[Coord<F>], to: &[Coord<F>]) -> F {
    let mut max_of_min = F::zero();
    for &p in from {
        let mut min = F::infinity();
        for &q in to {
            let d = F::Ker::square_euclidean_distance(p, q);
            if d < min {
                min = d;
            }
        }
        if min > max_of_min {
            max_of_min = min;
        }
    }
    max_of_min.sqrt()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{line_string, point};

    #[test]
    fn points() {
        let a = Geometry::Point(point! { x: 0.0, y: 0.0 });
        let b = Geometry::Point(point! { x: 3.0, y: 4.0 });
        assert_eq!(hausdorff_distance(&a, &b).unwrap(), 5.0);
    }

    #[test]
    fn line_strings_are_compared_in_both_directions() {
        let a = Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)]);
        let b = Geometry::LineString(line_string![(x: 0.0, y: 1.0), (x: 10.0, y: 1.0), (x: 10.0, y: 6.0)]);
        // farthest vertex is (10, 6), five units beyond a's nearest vertex
        assert_eq!(hausdorff_distance(&a, &b).unwrap(), 6.0);
        assert_eq!(hausdorff_distance(&b, &a).unwrap(), 6.0);
    }
}
