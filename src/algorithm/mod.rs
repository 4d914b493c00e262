//! Operations on the geometry types.

pub mod area;
pub use area::Area;

pub mod coordinate_position;
pub use coordinate_position::{CoordPos, CoordinatePosition};

pub mod dimensions;
pub use dimensions::{Dimensions, HasDimensions};

pub mod envelope;
pub use envelope::HasEnvelope;

pub mod euclidean_distance;
pub use euclidean_distance::{euclidean_distance, nearest_points};

pub mod euclidean_length;
pub use euclidean_length::EuclideanLength;

pub mod hausdorff_distance;
pub use hausdorff_distance::hausdorff_distance;

pub mod intersects;
pub use intersects::Intersects;

pub mod kernels;
pub use kernels::{HasKernel, Kernel, Orientation};

pub mod line_intersection;
pub use line_intersection::{line_intersection, LineIntersection};

pub mod noding;

pub mod normalize;
pub use normalize::Normalize;

pub mod overlay;
pub use overlay::{
    difference, intersection, overlay, overlay_with_precision, sym_difference, union, OverlayOp,
};

pub mod predicates;
pub use predicates::{
    contains, covered_by, covers, crosses, disjoint, equals_topo, intersects, overlaps,
    relate_matrix, relate_pattern, touches, within,
};

pub mod relate;
pub use relate::{BoundaryNodeRule, IntersectionMatrix, PreparedGeometry, Relate};

pub mod validation;
pub use validation::IsValid;

pub mod winding_order;
pub use winding_order::{Winding, WindingOrder};
