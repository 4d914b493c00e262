use crate::geometry::Coord;
use crate::CoordNum;

/// The orientation of three points in the plane.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Kernel trait to provide predicates to operate on different scalar types.
pub trait Kernel {
    type Scalar: CoordNum;

    /// Gives the orientation of 3 2-dimensional points: ccw, cw or collinear
    ///
    /// The default implementation evaluates the determinant directly and is
    /// only correct for scalars with exact arithmetic.
    fn orient2d(
        p: Coord<Self::Scalar>,
        q: Coord<Self::Scalar>,
        r: Coord<Self::Scalar>,
    ) -> Orientation {
        let res = (q.x - p.x) * (r.y - q.y) - (q.y - p.y) * (r.x - q.x);
        use num_traits::Zero;
        if res > Zero::zero() {
            Orientation::CounterClockwise
        } else if res < Zero::zero() {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    fn square_euclidean_distance(p: Coord<Self::Scalar>, q: Coord<Self::Scalar>) -> Self::Scalar {
        (p.x - q.x) * (p.x - q.x) + (p.y - q.y) * (p.y - q.y)
    }
}

/// Marker trait to assign a `Kernel` to a scalar.
pub trait HasKernel: CoordNum {
    type Ker: Kernel<Scalar = Self>;
}

// Helper macro to implement `HasKernel` for a scalar type `T` (first arg.)
// by assigning the second arg. It expects the second arg. to be a type that
// takes one generic parameter that is `T`.
macro_rules! has_kernel {
    ($t:ident, $k:ident) => {
        impl $crate::algorithm::kernels::HasKernel for $t {
            type Ker = $k<$t>;
        }
    };
}

pub mod robust;
pub use self::robust::RobustKernel;
has_kernel!(f64, RobustKernel);
has_kernel!(f32, RobustKernel);
