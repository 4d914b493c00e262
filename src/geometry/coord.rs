use crate::{coord, CoordFloat, CoordNum};

use std::fmt;

/// A coordinate on the 2-dimensional Cartesian plane, optionally carrying a
/// Z (elevation) and an M (measure) ordinate.
///
/// # Semantics
///
/// Equality, and therefore all topological reasoning, considers only the
/// X and Y ordinates. Z and M ride along: operations that compute new
/// coordinates interpolate them where geometrically meaningful and otherwise
/// leave them NaN. NaN Z/M ordinates are permitted and propagate; NaN X/Y
/// ordinates are rejected by the topology engines.
///
/// This type implements the vector-space operations [`Add`](std::ops::Add),
/// [`Sub`](std::ops::Sub) and [`Neg`](std::ops::Neg) on all four ordinates.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord<T: CoordNum = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub m: T,
}

impl<T: CoordFloat> Coord<T> {
    /// An XY coordinate; Z and M are NaN.
    pub fn new(x: T, y: T) -> Self {
        Coord {
            x,
            y,
            z: T::nan(),
            m: T::nan(),
        }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Replace the Z ordinate.
    pub fn with_z(self, z: T) -> Self {
        Coord { z, ..self }
    }

    /// Replace the M ordinate.
    pub fn with_m(self, m: T) -> Self {
        Coord { m, ..self }
    }

    /// Whether a (non-NaN) Z ordinate is present.
    pub fn has_z(&self) -> bool {
        !self.z.is_nan()
    }

    /// Whether a (non-NaN) M ordinate is present.
    pub fn has_m(&self) -> bool {
        !self.m.is_nan()
    }
}

/// 2-D equality: only X and Y participate.
impl<T: CoordNum> PartialEq for Coord<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<T: CoordNum> fmt::Debug for Coord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({:?}, {:?})", self.x, self.y)
    }
}

impl<T: CoordFloat> From<(T, T)> for Coord<T> {
    #[inline]
    fn from(coords: (T, T)) -> Self {
        Coord::new(coords.0, coords.1)
    }
}

impl<T: CoordFloat> From<[T; 2]> for Coord<T> {
    #[inline]
    fn from(coords: [T; 2]) -> Self {
        Coord::new(coords[0], coords[1])
    }
}

impl<T: CoordNum> std::ops::Add for Coord<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            m: self.m + rhs.m,
        }
    }
}

impl<T: CoordNum> std::ops::Sub for Coord<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            m: self.m - rhs.m,
        }
    }
}

impl<T: CoordNum + std::ops::Neg<Output = T>> std::ops::Neg for Coord<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Coord {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            m: -self.m,
        }
    }
}

// Lets segment envelopes index directly into an R*-tree.
impl<T: CoordFloat + rstar::RTreeNum> rstar::Point for Coord<T> {
    type Scalar = T;

    const DIMENSIONS: usize = 2;

    fn generate(mut generator: impl FnMut(usize) -> Self::Scalar) -> Self {
        coord! { x: generator(0), y: generator(1) }
    }

    fn nth(&self, index: usize) -> Self::Scalar {
        match index {
            0 => self.x,
            1 => self.y,
            _ => unreachable!(),
        }
    }

    fn nth_mut(&mut self, index: usize) -> &mut Self::Scalar {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => unreachable!(),
        }
    }
}

#[cfg(any(feature = "approx", test))]
mod approx_integration {
    use super::*;
    use approx::{AbsDiffEq, RelativeEq};

    impl<T: CoordFloat + AbsDiffEq<Epsilon = T>> AbsDiffEq for Coord<T> {
        type Epsilon = T;

        fn default_epsilon() -> T {
            T::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
            T::abs_diff_eq(&self.x, &other.x, epsilon) && T::abs_diff_eq(&self.y, &other.y, epsilon)
        }
    }

    impl<T: CoordFloat + RelativeEq<Epsilon = T>> RelativeEq for Coord<T> {
        fn default_max_relative() -> T {
            T::default_max_relative()
        }

        fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
            T::relative_eq(&self.x, &other.x, epsilon, max_relative)
                && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn equality_is_2d() {
        let a = Coord::new(1.0, 2.0).with_z(5.0);
        let b = Coord::new(1.0, 2.0).with_z(9.0);
        assert_eq!(a, b);
        assert!(a.has_z());
        assert!(!a.has_m());
    }

    #[test]
    fn nan_ordinates_propagate() {
        let a = Coord::<f64>::new(1.0, 2.0);
        let b = Coord::<f64>::new(3.0, 4.0).with_z(1.0);
        let sum = a + b;
        assert_eq!(sum, Coord::new(4.0, 6.0));
        assert!(sum.z.is_nan());
    }
}
