use crate::geometry::Coord;
use crate::{CoordFloat, Error, Result};

/// The dimensionality of a [`CoordSeq`]: which ordinates each coordinate
/// stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordDim {
    Xy,
    Xyz,
    Xym,
    Xyzm,
}

impl CoordDim {
    /// Number of ordinates stored per coordinate.
    pub fn size(&self) -> usize {
        match self {
            CoordDim::Xy => 2,
            CoordDim::Xyz | CoordDim::Xym => 3,
            CoordDim::Xyzm => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, CoordDim::Xyz | CoordDim::Xyzm)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, CoordDim::Xym | CoordDim::Xyzm)
    }
}

/// A packed, ordered sequence of coordinates with a fixed dimensionality.
///
/// The dimensionality is immutable after construction. Reading Z from an XY
/// or XYM sequence (or M from an XY or XYZ sequence) yields NaN. Closedness
/// is a property of the containing geometry, not of the sequence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordSeq<T: CoordFloat = f64> {
    dim: CoordDim,
    data: Vec<T>,
}

impl<T: CoordFloat> CoordSeq<T> {
    /// An empty sequence of the given dimensionality.
    pub fn new(dim: CoordDim) -> Self {
        CoordSeq { dim, data: vec![] }
    }

    pub fn with_capacity(dim: CoordDim, capacity: usize) -> Self {
        CoordSeq {
            dim,
            data: Vec::with_capacity(capacity * dim.size()),
        }
    }

    /// Build a sequence from coordinates, keeping the ordinates `dim` names
    /// and discarding the others.
    pub fn from_coords(dim: CoordDim, coords: impl IntoIterator<Item = Coord<T>>) -> Self {
        let coords = coords.into_iter();
        let mut seq = CoordSeq::with_capacity(dim, coords.size_hint().0);
        for coord in coords {
            seq.push(coord);
        }
        seq
    }

    /// Build an XY/XYZ/XYM/XYZM sequence, choosing the smallest
    /// dimensionality that preserves every non-NaN ordinate present.
    pub fn from_coords_inferred(coords: impl IntoIterator<Item = Coord<T>>) -> Self {
        let coords: Vec<Coord<T>> = coords.into_iter().collect();
        let has_z = coords.iter().any(Coord::has_z);
        let has_m = coords.iter().any(Coord::has_m);
        let dim = match (has_z, has_m) {
            (false, false) => CoordDim::Xy,
            (true, false) => CoordDim::Xyz,
            (false, true) => CoordDim::Xym,
            (true, true) => CoordDim::Xyzm,
        };
        Self::from_coords(dim, coords)
    }

    pub fn dim(&self) -> CoordDim {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.data.len() / self.dim.size()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The coordinate at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Coord<T>> {
        if index >= self.len() {
            return None;
        }
        let stride = self.dim.size();
        let base = index * stride;
        let mut coord = Coord::new(self.data[base], self.data[base + 1]);
        match self.dim {
            CoordDim::Xy => {}
            CoordDim::Xyz => coord.z = self.data[base + 2],
            CoordDim::Xym => coord.m = self.data[base + 2],
            CoordDim::Xyzm => {
                coord.z = self.data[base + 2];
                coord.m = self.data[base + 3];
            }
        }
        Some(coord)
    }

    /// The coordinate at `index`, or [`Error::Argument`] past the end.
    pub fn try_get(&self, index: usize) -> Result<Coord<T>> {
        self.get(index).ok_or_else(|| {
            Error::argument(format!(
                "coordinate index {} out of bounds (sequence length {})",
                index,
                self.len()
            ))
        })
    }

    /// The coordinate at `index`; panics past the end. Callers must have
    /// already established the bound.
    pub(crate) fn coord(&self, index: usize) -> Coord<T> {
        self.get(index).expect("coordinate index within bounds")
    }

    pub fn x(&self, index: usize) -> Option<T> {
        self.get(index).map(|c| c.x)
    }

    pub fn y(&self, index: usize) -> Option<T> {
        self.get(index).map(|c| c.y)
    }

    /// The Z ordinate at `index`; NaN when the sequence does not store Z.
    pub fn z(&self, index: usize) -> Option<T> {
        self.get(index).map(|c| c.z)
    }

    /// The M ordinate at `index`; NaN when the sequence does not store M.
    pub fn m(&self, index: usize) -> Option<T> {
        self.get(index).map(|c| c.m)
    }

    pub fn first(&self) -> Option<Coord<T>> {
        self.get(0)
    }

    pub fn last(&self) -> Option<Coord<T>> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Append a coordinate, keeping only the ordinates this sequence stores.
    pub fn push(&mut self, coord: Coord<T>) {
        self.data.push(coord.x);
        self.data.push(coord.y);
        match self.dim {
            CoordDim::Xy => {}
            CoordDim::Xyz => self.data.push(coord.z),
            CoordDim::Xym => self.data.push(coord.m),
            CoordDim::Xyzm => {
                self.data.push(coord.z);
                self.data.push(coord.m);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord<T>> + '_ {
        (0..self.len()).map(move |i| self.coord(i))
    }

    pub fn to_vec(&self) -> Vec<Coord<T>> {
        self.iter().collect()
    }
}

impl<T: CoordFloat> FromIterator<Coord<T>> for CoordSeq<T> {
    fn from_iter<I: IntoIterator<Item = Coord<T>>>(iter: I) -> Self {
        Self::from_coords_inferred(iter)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord;

    #[test]
    fn xy_sequence_yields_nan_z_and_m() {
        let seq: CoordSeq<f64> = CoordSeq::from_coords(
            CoordDim::Xy,
            vec![coord! { x: 0.0, y: 1.0 }, coord! { x: 2.0, y: 3.0 }],
        );
        assert_eq!(seq.len(), 2);
        assert!(seq.z(0).unwrap().is_nan());
        assert!(seq.m(1).unwrap().is_nan());
        assert_eq!(seq.x(1), Some(2.0));
    }

    #[test]
    fn dimensionality_is_fixed() {
        let mut seq: CoordSeq<f64> = CoordSeq::new(CoordDim::Xyz);
        seq.push(Coord::new(1.0, 2.0).with_z(3.0).with_m(4.0));
        // M is not stored by an XYZ sequence
        assert!(seq.m(0).unwrap().is_nan());
        assert_eq!(seq.z(0), Some(3.0));
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let seq: CoordSeq<f64> = CoordSeq::new(CoordDim::Xy);
        assert!(seq.get(0).is_none());
        assert!(matches!(seq.try_get(3), Err(crate::Error::Argument(_))));
    }

    #[test]
    fn inferred_dimensionality() {
        let seq: CoordSeq<f64> = CoordSeq::from_coords_inferred(vec![
            Coord::new(0.0, 0.0).with_z(1.0),
            Coord::new(1.0, 1.0),
        ]);
        assert_eq!(seq.dim(), CoordDim::Xyz);
        assert!(seq.z(1).unwrap().is_nan());
    }
}
