//! Internal utility functions.

use crate::geometry::Coord;
use crate::CoordNum;

use std::cmp::Ordering;

/// Compare two coordinates lexicographically: first by x, then by y.
///
/// Coordinates must have non-NaN x/y ordinates for the ordering to be total.
pub fn lex_cmp<T: CoordNum>(p: &Coord<T>, q: &Coord<T>) -> Ordering {
    debug_assert!(p.x == p.x && p.y == p.y, "NaN coordinates are not supported");
    debug_assert!(q.x == q.x && q.y == q.y, "NaN coordinates are not supported");
    p.x.partial_cmp(&q.x)
        .unwrap_or(Ordering::Equal)
        .then(p.y.partial_cmp(&q.y).unwrap_or(Ordering::Equal))
}

/// `true` iff both x and y are finite (not NaN, not infinite).
pub fn is_finite_xy<T: crate::CoordFloat>(coord: &Coord<T>) -> bool {
    coord.x.is_finite() && coord.y.is_finite()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lexicographic() {
        let a = Coord::new(1.0, 2.0);
        let b = Coord::new(1.0, 3.0);
        let c = Coord::new(2.0, 0.0);
        assert_eq!(lex_cmp(&a, &b), Ordering::Less);
        assert_eq!(lex_cmp(&b, &c), Ordering::Less);
        assert_eq!(lex_cmp(&a, &a), Ordering::Equal);
    }
}
