use crate::geometry::{GeometryFactory, LineString, LinearRing};
use crate::CoordFloat;

/// A bounded area: one exterior shell and zero or more interior rings
/// (holes).
///
/// Validity (holes inside the shell, rings touching only at isolated
/// points, …) is checked by [`IsValid`](crate::algorithm::validation::IsValid),
/// not enforced at construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<T: CoordFloat = f64> {
    exterior: LinearRing<T>,
    interiors: Vec<LinearRing<T>>,
    factory: GeometryFactory,
}

impl<T: CoordFloat> Polygon<T> {
    /// Build a polygon from line strings, closing each ring when the closing
    /// coordinate is absent.
    pub fn new(exterior: LineString<T>, interiors: Vec<LineString<T>>) -> Self {
        Polygon {
            exterior: LinearRing::closed(exterior),
            interiors: interiors.into_iter().map(LinearRing::closed).collect(),
            factory: GeometryFactory::default(),
        }
    }

    /// Build a polygon from rings, as given.
    pub fn from_rings(exterior: LinearRing<T>, interiors: Vec<LinearRing<T>>) -> Self {
        Polygon {
            exterior,
            interiors,
            factory: GeometryFactory::default(),
        }
    }

    pub fn empty() -> Self {
        Polygon {
            exterior: LinearRing::empty(),
            interiors: vec![],
            factory: GeometryFactory::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    pub fn exterior(&self) -> &LinearRing<T> {
        &self.exterior
    }

    pub fn interiors(&self) -> &[LinearRing<T>] {
        &self.interiors
    }

    /// The shell followed by the holes.
    pub fn rings(&self) -> impl Iterator<Item = &LinearRing<T>> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    pub fn factory(&self) -> &GeometryFactory {
        &self.factory
    }

    pub(crate) fn set_factory(&mut self, factory: GeometryFactory) {
        self.factory = factory;
    }

    pub fn srid(&self) -> i32 {
        self.factory.srid
    }

    pub fn set_srid(&mut self, srid: i32) {
        self.factory.srid = srid;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord;

    #[test]
    fn rings_close_on_construction() {
        let polygon = Polygon::new(
            LineString::from_coords(vec![
                coord! { x: 0.0, y: 0.0 },
                coord! { x: 4.0, y: 0.0 },
                coord! { x: 2.0, y: 2.0 },
            ]),
            vec![],
        );
        assert!(polygon.exterior().is_closed());
        assert_eq!(polygon.exterior().num_coords(), 4);
    }

    #[test]
    fn from_rings_keeps_rings_as_given() {
        let open = LinearRing::new(LineString::from_coords(vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 4.0, y: 0.0 },
            coord! { x: 2.0, y: 2.0 },
        ]));
        let polygon = Polygon::from_rings(open, vec![]);
        assert!(!polygon.exterior().is_closed());
    }
}
