use crate::geometry::Coord;
use crate::CoordFloat;

/// The rounding regime applied to constructed coordinates.
///
/// `Floating` keeps the full IEEE-754 double precision. `Fixed { scale }`
/// rounds every ordinate to the nearest `k / scale` for integer `k`, so
/// `scale = 1.0` means integer precision. A scale of zero is reserved to
/// mean floating precision.
///
/// The precision model affects construction output, not predicate
/// interpretation: predicates compare geometries as given.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrecisionModel {
    Floating,
    Fixed { scale: f64 },
}

impl PrecisionModel {
    /// A fixed-precision model at `scale`; `fixed(0.0)` is reserved and
    /// yields the floating model.
    pub fn fixed(scale: f64) -> Self {
        if scale == 0.0 {
            PrecisionModel::Floating
        } else {
            PrecisionModel::Fixed { scale }
        }
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, PrecisionModel::Floating)
    }

    /// The grid scale, or zero for the floating model.
    pub fn scale(&self) -> f64 {
        match self {
            PrecisionModel::Floating => 0.0,
            PrecisionModel::Fixed { scale } => *scale,
        }
    }

    /// Round an ordinate onto the grid. Ties round away from zero. NaN and
    /// infinities pass through unchanged.
    pub fn make_precise_ordinate<T: CoordFloat>(&self, value: T) -> T {
        match self {
            PrecisionModel::Floating => value,
            PrecisionModel::Fixed { scale } => {
                if !value.is_finite() {
                    return value;
                }
                let scale = T::from(*scale).unwrap();
                (value * scale).round() / scale
            }
        }
    }

    /// Round the X and Y ordinates of a coordinate onto the grid. Z and M
    /// are never rounded.
    pub fn make_precise<T: CoordFloat>(&self, coord: Coord<T>) -> Coord<T> {
        match self {
            PrecisionModel::Floating => coord,
            PrecisionModel::Fixed { .. } => Coord {
                x: self.make_precise_ordinate(coord.x),
                y: self.make_precise_ordinate(coord.y),
                ..coord
            },
        }
    }
}

impl Default for PrecisionModel {
    fn default() -> Self {
        PrecisionModel::Floating
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fixed_scale_snaps_to_grid() {
        let pm = PrecisionModel::fixed(10.0);
        assert_eq!(pm.make_precise_ordinate(1.23_f64), 1.2);
        assert_eq!(pm.make_precise_ordinate(1.25_f64), 1.3);
        assert_eq!(pm.make_precise_ordinate(-1.25_f64), -1.3);
    }

    #[test]
    fn scale_zero_is_floating() {
        assert!(PrecisionModel::fixed(0.0).is_floating());
        assert_eq!(PrecisionModel::fixed(0.0).scale(), 0.0);
    }

    #[test]
    fn grid_invariant() {
        let pm = PrecisionModel::fixed(100.0);
        let c = pm.make_precise(Coord::new(1.23456_f64, -9.87654));
        assert_eq!(c.x * 100.0, (c.x * 100.0).round());
        assert_eq!(c.y * 100.0, (c.y * 100.0).round());
    }

    #[test]
    fn z_and_m_pass_through() {
        let pm = PrecisionModel::fixed(1.0);
        let c = pm.make_precise(Coord::new(1.4_f64, 1.6).with_z(1.234));
        assert_eq!(c, Coord::new(1.0, 2.0));
        assert_eq!(c.z, 1.234);
    }
}
