use crate::algorithm::kernels::{Kernel, Orientation};
use crate::geometry::{Coord, Line};
use crate::GeoNum;

/// Pairwise intersection predicate for the low-level working types.
///
/// The geometry-level `intersects` predicate lives with the other named
/// predicates in [`predicates`](crate::algorithm::predicates); these impls
/// are the primitives the engines use.
pub trait Intersects<Rhs = Self> {
    fn intersects(&self, rhs: &Rhs) -> bool;
}

impl<T: GeoNum> Intersects<Coord<T>> for Line<T> {
    fn intersects(&self, coord: &Coord<T>) -> bool {
        // on the segment iff collinear with it and within its envelope
        if T::Ker::orient2d(self.start, self.end, *coord) != Orientation::Collinear {
            return false;
        }
        self.envelope().intersects_coord(*coord)
    }
}

impl<T: GeoNum> Intersects<Line<T>> for Line<T> {
    fn intersects(&self, other: &Line<T>) -> bool {
        let p_o1 = T::Ker::orient2d(self.start, self.end, other.start);
        let p_o2 = T::Ker::orient2d(self.start, self.end, other.end);
        if strictly_same_side(p_o1, p_o2) {
            return false;
        }

        let q_o1 = T::Ker::orient2d(other.start, other.end, self.start);
        let q_o2 = T::Ker::orient2d(other.start, other.end, self.end);
        if strictly_same_side(q_o1, q_o2) {
            return false;
        }

        if p_o1 == Orientation::Collinear
            && p_o2 == Orientation::Collinear
            && q_o1 == Orientation::Collinear
            && q_o2 == Orientation::Collinear
        {
            return self.envelope().intersects(&other.envelope());
        }

        true
    }
}

impl<T: GeoNum> Intersects<Line<T>> for Coord<T> {
    fn intersects(&self, line: &Line<T>) -> bool {
        line.intersects(self)
    }
}

fn strictly_same_side(o1: Orientation, o2: Orientation) -> bool {
    matches!(
        (o1, o2),
        (Orientation::Clockwise, Orientation::Clockwise)
            | (Orientation::CounterClockwise, Orientation::CounterClockwise)
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord;

    #[test]
    fn coord_on_segment() {
        let line = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 10.0 });
        assert!(line.intersects(&coord! { x: 5.0, y: 5.0 }));
        assert!(line.intersects(&coord! { x: 0.0, y: 0.0 }));
        assert!(!line.intersects(&coord! { x: 5.0, y: 5.1 }));
        assert!(!line.intersects(&coord! { x: 11.0, y: 11.0 }));
    }

    #[test]
    fn crossing_and_disjoint_segments() {
        let a = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 10.0 });
        let b = Line::new(coord! { x: 0.0, y: 10.0 }, coord! { x: 10.0, y: 0.0 });
        assert!(a.intersects(&b));

        let c = Line::new(coord! { x: 0.0, y: 1.0 }, coord! { x: 10.0, y: 11.0 });
        assert!(!a.intersects(&c));
    }

    #[test]
    fn collinear_segments() {
        let a = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 4.0, y: 0.0 });
        let touching = Line::new(coord! { x: 4.0, y: 0.0 }, coord! { x: 8.0, y: 0.0 });
        let disjoint = Line::new(coord! { x: 5.0, y: 0.0 }, coord! { x: 8.0, y: 0.0 });
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&disjoint));
    }

    #[test]
    fn endpoint_touch() {
        let a = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 4.0, y: 4.0 });
        let b = Line::new(coord! { x: 4.0, y: 4.0 }, coord! { x: 8.0, y: 0.0 });
        assert!(a.intersects(&b));
    }
}
