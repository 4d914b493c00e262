use crate::geometry::{GeometryFactory, Polygon};
use crate::CoordFloat;

/// A collection of [`Polygon`]s.
///
/// Validity requires member interiors to be pairwise disjoint, with shells
/// touching only at isolated points; construction accepts any members.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPolygon<T: CoordFloat = f64> {
    polygons: Vec<Polygon<T>>,
    factory: GeometryFactory,
}

impl<T: CoordFloat> MultiPolygon<T> {
    pub fn new(polygons: Vec<Polygon<T>>) -> Self {
        MultiPolygon {
            polygons,
            factory: GeometryFactory::default(),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn polygons(&self) -> &[Polygon<T>] {
        &self.polygons
    }

    pub fn iter(&self) -> impl Iterator<Item = &Polygon<T>> {
        self.polygons.iter()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.iter().all(Polygon::is_empty)
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
        for polygon in &mut self.polygons {
            polygon.set_srid(srid);
        }
    }
}

impl<T: CoordFloat> FromIterator<Polygon<T>> for MultiPolygon<T> {
    fn from_iter<I: IntoIterator<Item = Polygon<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T: CoordFloat> IntoIterator for &'a MultiPolygon<T> {
    type Item = &'a Polygon<T>;
    type IntoIter = std::slice::Iter<'a, Polygon<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
