//! Noding: transforming a set of segment strings so that no two output
//! segments share interior points.
//!
//! The union of the output, as a point set in the plane, equals the union of
//! the input; every input intersection point is present as a vertex of at
//! least one output string, and every input vertex is preserved.
//!
//! Two noders are provided:
//!
//! - [`IndexNoder`]: exact noding. Intersection points are computed in
//!   floating point, so the output may itself contain near-coincident
//!   vertices that further processing must tolerate.
//! - [`SnapRoundingNoder`]: noding at a fixed
//!   [`PrecisionModel`](crate::geometry::PrecisionModel) grid. Every
//!   output coordinate lies on the grid, and any vertex falling within the
//!   "hot pixel" of an intersection or another vertex is snapped to that
//!   pixel's center. Topology is preserved up to the grid resolution;
//!   segments may collapse to points.
//!
//! ```
//! use sfgeo::coord;
//! use sfgeo::noding::{IndexNoder, Noder, SegmentString};
//!
//! let strings = vec![
//!     SegmentString::new(vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 2.0 }], 0),
//!     SegmentString::new(vec![coord! { x: 0.0, y: 2.0 }, coord! { x: 2.0, y: 0.0 }], 1),
//! ];
//! let noded = IndexNoder::new().node(strings).unwrap();
//! // each input is split at the crossing
//! assert_eq!(noded.len(), 4);
//! ```

pub use index_noder::IndexNoder;
pub use segment_string::SegmentString;
pub use snap_rounding::SnapRoundingNoder;

use crate::{GeoFloat, Result};

mod index_noder;
mod segment_string;
mod snap_rounding;

/// Computes a set of fully-noded segment strings from an input set.
pub trait Noder<F: GeoFloat, D: Clone> {
    fn node(&mut self, segment_strings: Vec<SegmentString<F, D>>)
        -> Result<Vec<SegmentString<F, D>>>;
}
