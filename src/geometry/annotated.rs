use std::ops::Deref;

/// Associates caller-defined data with a geometry.
///
/// The payload is a transparent type parameter: the library never inspects
/// it, and with the default `D = ()` the wrapper adds no storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotated<G, D = ()> {
    geometry: G,
    pub data: D,
}

impl<G, D> Annotated<G, D> {
    pub fn new(geometry: G, data: D) -> Self {
        Annotated { geometry, data }
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn into_parts(self) -> (G, D) {
        (self.geometry, self.data)
    }
}

impl<G, D> Deref for Annotated<G, D> {
    type Target = G;

    fn deref(&self) -> &G {
        &self.geometry
    }
}

impl<G> From<G> for Annotated<G, ()> {
    fn from(geometry: G) -> Self {
        Annotated::new(geometry, ())
    }
}
