use crate::geometry::Coord;
use crate::CoordNum;

use std::fmt;

/// The error type for all fallible operations in this crate.
///
/// Errors are returned explicitly; no operation panics on input within its
/// declared domain. The hot primitives (orientation, segment intersection)
/// are total functions and never construct an `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid input that the caller could have checked up front: NaN X/Y
    /// ordinates, an out-of-bounds sequence index, a degenerate construction
    /// argument.
    Argument(String),

    /// A robust invariant failed during noding, labeling, or ring assembly.
    ///
    /// Carries the responsible coordinate when known. Callers may retry the
    /// operation with a coarser precision model.
    Topology {
        message: String,
        coordinate: Option<Coord<f64>>,
    },

    /// The operation requires a non-empty input.
    EmptyGeometry { operation: &'static str },

    /// The thread-local interrupt flag was raised while the operation was
    /// running. No partial result is observable.
    Interrupted,

    /// A feature not implemented in this version.
    Unsupported { feature: &'static str },
}

/// The result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn argument(message: impl Into<String>) -> Self {
        Error::Argument(message.into())
    }

    pub(crate) fn topology(message: impl Into<String>) -> Self {
        Error::Topology {
            message: message.into(),
            coordinate: None,
        }
    }

    pub(crate) fn topology_at<T: CoordNum>(message: impl Into<String>, coord: Coord<T>) -> Self {
        Error::Topology {
            message: message.into(),
            coordinate: Some(Coord {
                x: coord.x.to_f64().unwrap_or(f64::NAN),
                y: coord.y.to_f64().unwrap_or(f64::NAN),
                z: f64::NAN,
                m: f64::NAN,
            }),
        }
    }

    /// The coordinate responsible for a [`Error::Topology`], if one was
    /// recorded.
    pub fn coordinate(&self) -> Option<Coord<f64>> {
        match self {
            Error::Topology { coordinate, .. } => *coordinate,
            _ => None,
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Argument(message) => write!(f, "invalid argument: {}", message),
            Error::Topology {
                message,
                coordinate: Some(coord),
            } => {
                write!(f, "topology error: {} at ({:?}, {:?})", message, coord.x, coord.y)
            }
            Error::Topology {
                message,
                coordinate: None,
            } => write!(f, "topology error: {}", message),
            Error::EmptyGeometry { operation } => {
                write!(f, "{} requires a non-empty geometry", operation)
            }
            Error::Interrupted => write!(f, "operation was interrupted"),
            Error::Unsupported { feature } => write!(f, "unsupported: {}", feature),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Coord;

    #[test]
    fn display() {
        let err = Error::topology_at("side location conflict", Coord::<f64>::new(1.5, 2.5));
        assert_eq!(
            err.to_string(),
            "topology error: side location conflict at (1.5, 2.5)"
        );
        assert_eq!(err.coordinate().map(|c| (c.x, c.y)), Some((1.5, 2.5)));

        let err = Error::argument("NaN ordinate");
        assert_eq!(err.to_string(), "invalid argument: NaN ordinate");
    }
}
