//! Error types for lattice construction.

use thiserror::Error;

use crate::line::Line;
use crate::point::Point;

/// Result type for lattice operations.
pub type LatticeResult<T> = Result<T, LatticeError>;

/// Errors that can occur while building a channel lattice.
///
/// The geometric variants signal a malformed topology handed to the engine.
/// A build that hits one of them fails as a whole; no partially flattened or
/// partially joined lattice is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LatticeError {
    /// Two lines have no unique intersection (parallel or zero-length).
    #[error("lines {first} and {second} are parallel and have no intersection")]
    ParallelLines {
        /// First line of the pair.
        first: Line,
        /// Second line of the pair.
        second: Line,
    },

    /// A point expected to be a line endpoint is not one.
    #[error("point {point} is not an endpoint of line {line}")]
    PointNotOnLine {
        /// The offending point.
        point: Point,
        /// The line it was checked against.
        line: Line,
    },

    /// Two channels were joined but their centerlines share no vertex.
    #[error("centerlines {first} and {second} share no vertex")]
    NoSharedVertex {
        /// Centerline of the first channel.
        first: Line,
        /// Centerline of the second channel.
        second: Line,
    },

    /// A cut line does not pass through either end of a channel centerline.
    #[error("cut line at y={cut_y} misses both ends of centerline {centerline}")]
    CutLineMissesChannel {
        /// The y-level of the cut line.
        cut_y: f64,
        /// Centerline of the channel being cut.
        centerline: Line,
    },

    /// Not enough rows to form a single channel layer.
    #[error("lattice needs at least {min} rows, got {actual}")]
    TooFewRows {
        /// Minimum required rows.
        min: usize,
        /// Actual row count.
        actual: usize,
    },

    /// A row has no nodes.
    #[error("row {index} must have at least one node, got {count}")]
    InvalidRowCount {
        /// Index of the row in the sequence.
        index: usize,
        /// The node count supplied for it.
        count: usize,
    },

    /// Node spacing is not a positive finite number.
    #[error("node spacing must be positive and finite, got {0}")]
    InvalidSpacing(f64),

    /// Channel width is not a positive finite number.
    #[error("channel width must be positive and finite, got {0}")]
    InvalidChannelWidth(f64),

    /// Sequence sampler constraints can never be satisfied.
    #[error("invalid sampler constraints: {reason}")]
    InvalidSampler {
        /// Why the constraints are unsatisfiable.
        reason: String,
    },

    /// The sampler hit its attempt cap without drawing a valid sequence.
    #[error("no valid row sequence found after {attempts} attempts")]
    SamplingExhausted {
        /// Number of attempts made.
        attempts: usize,
    },
}

impl LatticeError {
    /// Create an invalid sampler error.
    #[must_use]
    pub fn invalid_sampler(reason: impl Into<String>) -> Self {
        Self::InvalidSampler {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LatticeError::TooFewRows { min: 2, actual: 1 };
        assert_eq!(err.to_string(), "lattice needs at least 2 rows, got 1");

        let err = LatticeError::InvalidSpacing(-1.0);
        assert!(err.to_string().contains("-1"));

        let err = LatticeError::invalid_sampler("max width must be at least 1");
        assert!(err.to_string().contains("max width"));
    }

    #[test]
    fn test_geometric_error_mentions_points() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let err = LatticeError::PointNotOnLine {
            point: Point::new(5.0, 5.0),
            line,
        };
        let message = err.to_string();
        assert!(message.contains("(5, 5)"));
        assert!(message.contains("(0, 0) -> (1, 1)"));
    }
}
