use crate::algorithm::coordinate_position::CoordPos;
use crate::algorithm::dimensions::Dimensions;
use crate::{Error, Result};

/// Models a *Dimensionally Extended Nine-Intersection Model (DE-9IM)*
/// matrix.
///
/// DE-9IM matrix values (such as "212FF1FF2") specify the topological
/// relationship between two geometries.
///
/// DE-9IM matrices are 3x3 matrices that represent the topological locations
/// that occur in a geometry (Interior, Boundary, Exterior).
///
/// The indices are provided by the enum cases
/// [CoordPos::Inside, CoordPos::OnBoundary, CoordPos::Outside](CoordPos).
///
/// The matrix entries represent the [`Dimensions`] of each intersection.
///
/// For a description of the DE-9IM and the spatial predicates derived from
/// it, see the following references:
/// - [OGC 99-049 OpenGIS Simple Features Specification for SQL](http://portal.opengeospatial.org/files/?artifact_id=829), Section 2.1.13
/// - [OGC 06-103r4 OpenGIS Implementation Standard for Geographic information - Simple feature access - Part 1: Common architecture](http://portal.opengeospatial.org/files/?artifact_id=25355), Section 6.1.15 (which provides some further details on certain predicate specifications).
/// - Wikipedia article on [DE-9IM](https://en.wikipedia.org/wiki/DE-9IM)
#[derive(PartialEq, Eq, Clone)]
pub struct IntersectionMatrix(LocationArray<LocationArray<Dimensions>>);

/// Helper struct so we can index IntersectionMatrix by CoordPos.
///
/// CoordPos enum members are ordered: OnBoundary, Inside, Outside
/// DE-9IM matrices are ordered: Inside, Boundary, Exterior
///
/// So we can't simply use `CoordPos as usize` without losing the
/// conventional ordering of elements, which is useful for debug / interop.
#[derive(PartialEq, Eq, Clone, Copy)]
struct LocationArray<T>([T; 3]);

impl<T> LocationArray<T> {
    fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> std::ops::Index<CoordPos> for LocationArray<T> {
    type Output = T;

    fn index(&self, index: CoordPos) -> &Self::Output {
        match index {
            CoordPos::Inside => &self.0[0],
            CoordPos::OnBoundary => &self.0[1],
            CoordPos::Outside => &self.0[2],
        }
    }
}

impl<T> std::ops::IndexMut<CoordPos> for LocationArray<T> {
    fn index_mut(&mut self, index: CoordPos) -> &mut Self::Output {
        match index {
            CoordPos::Inside => &mut self.0[0],
            CoordPos::OnBoundary => &mut self.0[1],
            CoordPos::Outside => &mut self.0[2],
        }
    }
}

const POSITIONS: [CoordPos; 3] = [CoordPos::Inside, CoordPos::OnBoundary, CoordPos::Outside];

fn char_for_dim(dim: &Dimensions) -> char {
    match dim {
        Dimensions::Empty => 'F',
        Dimensions::ZeroDimensional => '0',
        Dimensions::OneDimensional => '1',
        Dimensions::TwoDimensional => '2',
    }
}

impl std::fmt::Debug for IntersectionMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IntersectionMatrix({})", &self.to_pattern())
    }
}

/// The 9-character DE-9IM representation, e.g. `0F2FF1FF2`.
impl std::fmt::Display for IntersectionMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_pattern())
    }
}

impl IntersectionMatrix {
    pub fn empty() -> Self {
        IntersectionMatrix(LocationArray([LocationArray([Dimensions::Empty; 3]); 3]))
    }

    /// The dimension of the intersection of `position_a` of the first
    /// geometry with `position_b` of the second.
    pub fn get(&self, position_a: CoordPos, position_b: CoordPos) -> Dimensions {
        self.0[position_a][position_b]
    }

    /// Set `dimensions` of the cell specified by the positions.
    ///
    /// `position_a`: which position `dimensions` applies to within the first geometry
    /// `position_b`: which position `dimensions` applies to within the second geometry
    /// `dimensions`: the dimension of the incident
    pub(crate) fn set(&mut self, position_a: CoordPos, position_b: CoordPos, dimensions: Dimensions) {
        self.0[position_a][position_b] = dimensions;
    }

    /// Reports an incident of `dimensions`, which updates the
    /// IntersectionMatrix if it's greater than what has been reported so
    /// far.
    pub(crate) fn set_at_least(
        &mut self,
        position_a: CoordPos,
        position_b: CoordPos,
        minimum_dimensions: Dimensions,
    ) {
        if self.0[position_a][position_b] < minimum_dimensions {
            self.0[position_a][position_b] = minimum_dimensions;
        }
    }

    /// If both geometries have `Some` position, then changes the specified
    /// element to at least `minimum_dimensions`. Else, if either is none, do
    /// nothing.
    pub(crate) fn set_at_least_if_in_both(
        &mut self,
        position_a: Option<CoordPos>,
        position_b: Option<CoordPos>,
        minimum_dimensions: Dimensions,
    ) {
        if let (Some(position_a), Some(position_b)) = (position_a, position_b) {
            self.set_at_least(position_a, position_b, minimum_dimensions);
        }
    }

    pub(crate) fn set_at_least_from_string(&mut self, dimensions: &str) -> Result<()> {
        if dimensions.len() != 9 {
            return Err(Error::argument(format!(
                "expected dimensions length 9, found: {}",
                dimensions.len()
            )));
        }

        let mut chars = dimensions.chars();
        for a in &POSITIONS {
            for b in &POSITIONS {
                match chars.next().expect("already validated length is 9") {
                    '0' => self.0[*a][*b] = self.0[*a][*b].max(Dimensions::ZeroDimensional),
                    '1' => self.0[*a][*b] = self.0[*a][*b].max(Dimensions::OneDimensional),
                    '2' => self.0[*a][*b] = self.0[*a][*b].max(Dimensions::TwoDimensional),
                    'F' => {}
                    other => {
                        return Err(Error::argument(format!(
                            "expected '0', '1', '2', or 'F'. Found: {}",
                            other
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// The matrix as a 9-character string in row-major order.
    pub fn to_pattern(&self) -> String {
        self.0
            .iter()
            .flat_map(|row| row.iter().map(char_for_dim))
            .collect()
    }

    /// Tests whether this matrix matches a DE-9IM pattern of 9 characters
    /// in `{F, T, 0, 1, 2, *}`:
    ///
    /// - `F`: the intersection must be empty
    /// - `T`: the intersection must be non-empty (any dimension)
    /// - `0`, `1`, `2`: the intersection must have exactly that dimension
    /// - `*`: no constraint
    pub fn matches(&self, pattern: &str) -> Result<bool> {
        if pattern.len() != 9 {
            return Err(Error::argument(format!(
                "expected pattern length 9, found: {}",
                pattern.len()
            )));
        }

        let mut chars = pattern.chars();
        for a in &POSITIONS {
            for b in &POSITIONS {
                let dimension = self.0[*a][*b];
                match chars.next().expect("already validated length is 9") {
                    '*' => {}
                    'T' => {
                        if dimension == Dimensions::Empty {
                            return Ok(false);
                        }
                    }
                    'F' => {
                        if dimension != Dimensions::Empty {
                            return Ok(false);
                        }
                    }
                    '0' => {
                        if dimension != Dimensions::ZeroDimensional {
                            return Ok(false);
                        }
                    }
                    '1' => {
                        if dimension != Dimensions::OneDimensional {
                            return Ok(false);
                        }
                    }
                    '2' => {
                        if dimension != Dimensions::TwoDimensional {
                            return Ok(false);
                        }
                    }
                    other => {
                        return Err(Error::argument(format!(
                            "invalid pattern character: {}",
                            other
                        )));
                    }
                }
            }
        }
        Ok(true)
    }

    /// Tests if this matrix matches `[FF*FF****]`.
    ///
    /// returns `true` if the two geometries related by this matrix are
    /// disjoint
    pub fn is_disjoint(&self) -> bool {
        self.0[CoordPos::Inside][CoordPos::Inside] == Dimensions::Empty
            && self.0[CoordPos::Inside][CoordPos::OnBoundary] == Dimensions::Empty
            && self.0[CoordPos::OnBoundary][CoordPos::Inside] == Dimensions::Empty
            && self.0[CoordPos::OnBoundary][CoordPos::OnBoundary] == Dimensions::Empty
    }

    /// Tests if `is_disjoint` returns false.
    pub fn is_intersects(&self) -> bool {
        !self.is_disjoint()
    }

    /// Tests whether this matrix matches `[T*F**F***]`.
    pub fn is_within(&self) -> bool {
        self.0[CoordPos::Inside][CoordPos::Inside] != Dimensions::Empty
            && self.0[CoordPos::Inside][CoordPos::Outside] == Dimensions::Empty
            && self.0[CoordPos::OnBoundary][CoordPos::Outside] == Dimensions::Empty
    }

    /// Tests whether this matrix matches `[T*****FF*]`.
    pub fn is_contains(&self) -> bool {
        self.0[CoordPos::Inside][CoordPos::Inside] != Dimensions::Empty
            && self.0[CoordPos::Outside][CoordPos::Inside] == Dimensions::Empty
            && self.0[CoordPos::Outside][CoordPos::OnBoundary] == Dimensions::Empty
    }

    /// Tests whether this matrix matches `[T*****FF*]`, `[*T****FF*]`,
    /// `[***T**FF*]` or `[****T*FF*]`.
    pub fn is_covers(&self) -> bool {
        let has_pointlike_intersection = self.0[CoordPos::Inside][CoordPos::Inside]
            != Dimensions::Empty
            || self.0[CoordPos::Inside][CoordPos::OnBoundary] != Dimensions::Empty
            || self.0[CoordPos::OnBoundary][CoordPos::Inside] != Dimensions::Empty
            || self.0[CoordPos::OnBoundary][CoordPos::OnBoundary] != Dimensions::Empty;

        has_pointlike_intersection
            && self.0[CoordPos::Outside][CoordPos::Inside] == Dimensions::Empty
            && self.0[CoordPos::Outside][CoordPos::OnBoundary] == Dimensions::Empty
    }

    /// `is_covers` with the arguments reversed.
    pub fn is_covered_by(&self) -> bool {
        let has_pointlike_intersection = self.0[CoordPos::Inside][CoordPos::Inside]
            != Dimensions::Empty
            || self.0[CoordPos::Inside][CoordPos::OnBoundary] != Dimensions::Empty
            || self.0[CoordPos::OnBoundary][CoordPos::Inside] != Dimensions::Empty
            || self.0[CoordPos::OnBoundary][CoordPos::OnBoundary] != Dimensions::Empty;

        has_pointlike_intersection
            && self.0[CoordPos::Inside][CoordPos::Outside] == Dimensions::Empty
            && self.0[CoordPos::OnBoundary][CoordPos::Outside] == Dimensions::Empty
    }

    /// Tests whether the geometries touch: they intersect, but their
    /// interiors do not. Not defined for two points.
    pub fn is_touches(&self, dimension_a: Dimensions, dimension_b: Dimensions) -> bool {
        if dimension_a == Dimensions::ZeroDimensional && dimension_b == Dimensions::ZeroDimensional
        {
            // points cannot touch
            return false;
        }
        self.0[CoordPos::Inside][CoordPos::Inside] == Dimensions::Empty
            && (self.0[CoordPos::Inside][CoordPos::OnBoundary] != Dimensions::Empty
                || self.0[CoordPos::OnBoundary][CoordPos::Inside] != Dimensions::Empty
                || self.0[CoordPos::OnBoundary][CoordPos::OnBoundary] != Dimensions::Empty)
    }

    /// Tests whether the geometries cross, per the standard
    /// dimension-parameterized definition.
    pub fn is_crosses(&self, dimension_a: Dimensions, dimension_b: Dimensions) -> bool {
        use Dimensions::*;
        match (dimension_a, dimension_b) {
            (ZeroDimensional, OneDimensional)
            | (ZeroDimensional, TwoDimensional)
            | (OneDimensional, TwoDimensional) => {
                self.0[CoordPos::Inside][CoordPos::Inside] != Empty
                    && self.0[CoordPos::Inside][CoordPos::Outside] != Empty
            }
            (OneDimensional, ZeroDimensional)
            | (TwoDimensional, ZeroDimensional)
            | (TwoDimensional, OneDimensional) => {
                self.0[CoordPos::Inside][CoordPos::Inside] != Empty
                    && self.0[CoordPos::Outside][CoordPos::Inside] != Empty
            }
            (OneDimensional, OneDimensional) => {
                self.0[CoordPos::Inside][CoordPos::Inside] == ZeroDimensional
            }
            _ => false,
        }
    }

    /// Tests whether the geometries overlap, per the standard
    /// dimension-parameterized definition.
    pub fn is_overlaps(&self, dimension_a: Dimensions, dimension_b: Dimensions) -> bool {
        use Dimensions::*;
        match (dimension_a, dimension_b) {
            (ZeroDimensional, ZeroDimensional) | (TwoDimensional, TwoDimensional) => {
                self.0[CoordPos::Inside][CoordPos::Inside] != Empty
                    && self.0[CoordPos::Inside][CoordPos::Outside] != Empty
                    && self.0[CoordPos::Outside][CoordPos::Inside] != Empty
            }
            (OneDimensional, OneDimensional) => {
                self.0[CoordPos::Inside][CoordPos::Inside] == OneDimensional
                    && self.0[CoordPos::Inside][CoordPos::Outside] != Empty
                    && self.0[CoordPos::Outside][CoordPos::Inside] != Empty
            }
            _ => false,
        }
    }

    /// Tests whether the geometries are topologically equal: same
    /// dimension, interiors intersect, and neither reaches the exterior of
    /// the other.
    pub fn is_equal_topo(&self, dimension_a: Dimensions, dimension_b: Dimensions) -> bool {
        if dimension_a != dimension_b {
            return false;
        }
        self.0[CoordPos::Inside][CoordPos::Inside] != Dimensions::Empty
            && self.0[CoordPos::Inside][CoordPos::Outside] == Dimensions::Empty
            && self.0[CoordPos::OnBoundary][CoordPos::Outside] == Dimensions::Empty
            && self.0[CoordPos::Outside][CoordPos::Inside] == Dimensions::Empty
            && self.0[CoordPos::Outside][CoordPos::OnBoundary] == Dimensions::Empty
    }
}

impl std::str::FromStr for IntersectionMatrix {
    type Err = Error;
    fn from_str(str: &str) -> Result<Self> {
        let mut im = IntersectionMatrix::empty();
        im.set_at_least_from_string(str)?;
        Ok(im)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn matrix_round_trips_through_string() {
        let im = IntersectionMatrix::from_str("212101212").unwrap();
        assert_eq!(im.to_pattern(), "212101212");
        assert_eq!(format!("{}", im), "212101212");
    }

    #[test]
    fn pattern_matching() {
        let im = IntersectionMatrix::from_str("212101212").unwrap();
        assert!(im.matches("212101212").unwrap());
        assert!(im.matches("T********").unwrap());
        assert!(im.matches("*********").unwrap());
        assert!(!im.matches("F********").unwrap());
        assert!(!im.matches("0********").unwrap());
        assert!(im.matches("2********").unwrap());
        assert!(im.matches("T*T***T**").unwrap());

        assert!(im.matches("21210121").is_err());
        assert!(im.matches("X********").is_err());
    }

    #[test]
    fn named_predicates() {
        // a 10x10 square containing a 2x2 square
        let im = IntersectionMatrix::from_str("212FF1FF2").unwrap();
        assert!(im.is_contains());
        assert!(!im.is_within());
        assert!(im.is_covers());
        assert!(im.is_intersects());
        assert!(!im.is_disjoint());
        assert!(!im.is_touches(Dimensions::TwoDimensional, Dimensions::TwoDimensional));

        // two overlapping squares
        let im = IntersectionMatrix::from_str("212101212").unwrap();
        assert!(im.is_overlaps(Dimensions::TwoDimensional, Dimensions::TwoDimensional));
        assert!(!im.is_contains());

        // disjoint geometries
        let im = IntersectionMatrix::from_str("FF2FF1212").unwrap();
        assert!(im.is_disjoint());
        assert!(!im.is_intersects());
    }

    #[test]
    fn touches_is_not_defined_for_points() {
        let im = IntersectionMatrix::from_str("F0FFFFFF2").unwrap();
        assert!(im.is_touches(Dimensions::TwoDimensional, Dimensions::ZeroDimensional));
        assert!(!im.is_touches(Dimensions::ZeroDimensional, Dimensions::ZeroDimensional));
    }
}
