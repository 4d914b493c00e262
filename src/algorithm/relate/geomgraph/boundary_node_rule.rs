/// Determines whether an endpoint shared by several line components lies in
/// the boundary or the interior of its geometry.
///
/// The SFS specifies the Mod-2 rule; the other rules are occasionally useful
/// for non-standard boundary semantics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum BoundaryNodeRule {
    /// An endpoint is on the boundary iff it occurs an odd number of times
    /// as a line endpoint (the OGC SFS "Mod-2" rule).
    #[default]
    Mod2,
    /// Any endpoint occurrence puts the point on the boundary.
    Endpoint,
    /// Only points that are the endpoint of exactly one line are boundary.
    MonovalentEndpoint,
    /// Only points shared by more than one line are boundary.
    MultivalentEndpoint,
}

impl BoundaryNodeRule {
    /// Whether a point occurring `boundary_count` times as an endpoint lies
    /// on the boundary.
    pub fn is_in_boundary(&self, boundary_count: usize) -> bool {
        match self {
            BoundaryNodeRule::Mod2 => boundary_count % 2 == 1,
            BoundaryNodeRule::Endpoint => boundary_count > 0,
            BoundaryNodeRule::MonovalentEndpoint => boundary_count == 1,
            BoundaryNodeRule::MultivalentEndpoint => boundary_count > 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rules() {
        assert!(BoundaryNodeRule::Mod2.is_in_boundary(1));
        assert!(!BoundaryNodeRule::Mod2.is_in_boundary(2));
        assert!(BoundaryNodeRule::Mod2.is_in_boundary(3));

        assert!(BoundaryNodeRule::Endpoint.is_in_boundary(2));
        assert!(!BoundaryNodeRule::Endpoint.is_in_boundary(0));

        assert!(BoundaryNodeRule::MonovalentEndpoint.is_in_boundary(1));
        assert!(!BoundaryNodeRule::MonovalentEndpoint.is_in_boundary(2));

        assert!(!BoundaryNodeRule::MultivalentEndpoint.is_in_boundary(1));
        assert!(BoundaryNodeRule::MultivalentEndpoint.is_in_boundary(2));
    }
}
