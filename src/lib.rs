//! The `sfgeo` crate provides planar vector-geometry primitives and a
//! topology engine for computing spatial relationships and boolean overlays
//! between them.
//!
//! # Types
//!
//! - **[`Coord`]**: A coordinate with X and Y ordinates and optionally Z
//!   (elevation) and M (measure). All geometry types are composed of
//!   [`Coord`]s, though [`Coord`] itself is not a [`Geometry`] type.
//! - **[`CoordSeq`]**: A packed sequence of coordinates with a fixed
//!   dimensionality ([`CoordDim`]).
//! - **[`Point`]**, **[`LineString`]**, **[`LinearRing`]**, **[`Polygon`]**,
//!   **[`MultiPoint`]**, **[`MultiLineString`]**, **[`MultiPolygon`]**,
//!   **[`GeometryCollection`]**: The simple-feature geometry types, each
//!   carrying an SRID and the [`GeometryFactory`] that created it.
//! - **[`Geometry`]**: An enumeration of all geometry types.
//! - **[`Envelope`]**: An axis-aligned bounding rectangle with a distinct
//!   empty value.
//!
//! The types aim to adhere to the [OpenGIS Simple Feature Access][OGC-SFA]
//! standards, and are inter-operable with other implementations of the
//! standards: [JTS], [GEOS], etc.
//!
//! # Operations
//!
//! - **[`Relate`]**: the DE-9IM [`IntersectionMatrix`] of two geometries,
//!   and the named predicates derived from it (`intersects`, `contains`,
//!   `touches`, `crosses`, `overlaps`, `covers`, `equals_topo`,
//!   `relate_pattern`, …).
//! - **[`overlay()`](crate::overlay::overlay)**: boolean overlays
//!   (intersection, union, difference, symmetric difference), optionally at
//!   a fixed [`PrecisionModel`].
//! - **[`PreparedGeometry`]**: an indexed wrapper amortizing repeated
//!   predicate queries against the same reference geometry.
//! - **[`noding`]**: exact and snap-rounding noding of segment strings.
//! - **Metrics**: [`Area`], [`EuclideanLength`],
//!   [`euclidean_distance()`](crate::euclidean_distance::euclidean_distance),
//!   [`hausdorff_distance()`](crate::hausdorff_distance::hausdorff_distance).
//! - **[`IsValid`]**: validity checking per the simple-feature polygon
//!   invariants.
//!
//! Expensive operations poll a thread-local interrupt flag (see
//! [`interrupt`]) and fail with [`Error::Interrupted`] when it is raised.
//!
//! [OGC-SFA]: //www.ogc.org/standards/sfa
//! [JTS]: //github.com/locationtech/jts
//! [GEOS]: //trac.osgeo.org/geos
#[macro_use]
extern crate log;

pub mod geometry;
pub use geometry::*;

pub mod algorithm;
pub use algorithm::*;

mod error;
pub use error::{Error, Result};

pub mod interrupt;

mod geometry_cow;
pub(crate) use geometry_cow::GeometryCow;

pub(crate) mod utils;

use crate::algorithm::kernels::HasKernel;

/// The type of an ordinate: for the coordinate and envelope types.
pub trait CoordNum:
    num_traits::Num + Copy + num_traits::NumCast + PartialOrd + std::fmt::Debug
{
}
impl<T> CoordNum for T where
    T: num_traits::Num + Copy + num_traits::NumCast + PartialOrd + std::fmt::Debug
{
}

/// A float-valued ordinate. Absent Z and M ordinates read as NaN, so the
/// geometry model requires a float scalar.
pub trait CoordFloat: CoordNum + num_traits::Float {}
impl<T> CoordFloat for T where T: CoordNum + num_traits::Float {}

/// A number which can be used with the robust predicate
/// [`Kernel`](crate::kernels::Kernel)s.
pub trait GeoNum: CoordNum + HasKernel {}
impl<T> GeoNum for T where T: CoordNum + HasKernel {}

/// The scalar the topology engines operate on.
pub trait GeoFloat:
    GeoNum
    + CoordFloat
    + num_traits::Signed
    + num_traits::Bounded
    + float_next_after::NextAfter
    + rstar::RTreeNum
{
}
impl<T> GeoFloat for T where
    T: GeoNum
        + CoordFloat
        + num_traits::Signed
        + num_traits::Bounded
        + float_next_after::NextAfter
        + rstar::RTreeNum
{
}

/// A common module containing the most-used types and traits.
///
/// ```
/// use sfgeo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithm::area::Area;
    pub use crate::algorithm::dimensions::HasDimensions;
    pub use crate::algorithm::envelope::HasEnvelope;
    pub use crate::algorithm::euclidean_length::EuclideanLength;
    pub use crate::algorithm::relate::Relate;
    pub use crate::algorithm::validation::IsValid;
    pub use crate::algorithm::winding_order::Winding;
    pub use crate::geometry::*;
}
