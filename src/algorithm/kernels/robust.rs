use super::{Kernel, Orientation};
use crate::geometry::Coord;

use std::marker::PhantomData;

use num_traits::{Float, NumCast};

/// Robust kernel that uses [fast robust predicates](//www.cs.cmu.edu/~quake/robust.html)
/// to provide robust floating point predicates. The orientation returned is
/// the true sign of the determinant for every representable input; the
/// fast floating-point path is used when its error bound proves the sign,
/// and the adaptive exact computation otherwise.
#[derive(Default, Debug)]
pub struct RobustKernel<T>(PhantomData<T>);

impl<T: Float + crate::CoordNum> Kernel for RobustKernel<T> {
    type Scalar = T;

    fn orient2d(p: Coord<T>, q: Coord<T>, r: Coord<T>) -> Orientation {
        use robust::{orient2d, Coord as RobustCoord};

        let orientation = orient2d(
            RobustCoord {
                x: <f64 as NumCast>::from(p.x).unwrap(),
                y: <f64 as NumCast>::from(p.y).unwrap(),
            },
            RobustCoord {
                x: <f64 as NumCast>::from(q.x).unwrap(),
                y: <f64 as NumCast>::from(q.y).unwrap(),
            },
            RobustCoord {
                x: <f64 as NumCast>::from(r.x).unwrap(),
                y: <f64 as NumCast>::from(r.y).unwrap(),
            },
        );

        if orientation < 0. {
            Orientation::Clockwise
        } else if orientation > 0. {
            Orientation::CounterClockwise
        } else {
            Orientation::Collinear
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord;

    #[test]
    fn orientation_of_simple_triangle() {
        let p = coord! { x: 0.0, y: 0.0 };
        let q = coord! { x: 1.0, y: 0.0 };
        let r = coord! { x: 0.0, y: 1.0 };
        assert_eq!(RobustKernel::orient2d(p, q, r), Orientation::CounterClockwise);
        assert_eq!(RobustKernel::orient2d(q, p, r), Orientation::Clockwise);
    }

    #[test]
    fn exact_signs_with_large_coordinates() {
        // the determinant terms are ~1e30 while the true value is 1e15 or
        // zero, far below the rounding error of the naive evaluation
        let p = coord! { x: 0.0, y: 0.0 };
        let q = coord! { x: 1e15, y: 1e15 };

        let r = coord! { x: 2e15, y: 2e15 };
        assert_eq!(RobustKernel::orient2d(p, q, r), Orientation::Collinear);

        let r = coord! { x: 2e15, y: 2e15 + 1.0 };
        assert_eq!(RobustKernel::orient2d(p, q, r), Orientation::CounterClockwise);

        let r = coord! { x: 2e15, y: 2e15 - 1.0 };
        assert_eq!(RobustKernel::orient2d(p, q, r), Orientation::Clockwise);
    }
}
