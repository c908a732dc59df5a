//! Error types for drafting and curve fitting.

use thiserror::Error;

use crate::point_id::PointId;

/// Errors that can occur while drafting a pattern or fitting its curves.
///
/// A draft is all-or-nothing: any of these aborts the whole build and no
/// partial point set is handed out.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DraftError {
    /// A body measurement is zero, negative or not a finite number.
    /// Recoverable by asking for the measurement again.
    #[error("invalid measurement {name}: {value} (must be a positive number)")]
    InvalidMeasurement {
        /// Name of the offending measurement.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Two coincident points were given to a direction-dependent construction.
    #[error("degenerate input to {operation}: the two points coincide")]
    DegenerateInput {
        /// The primitive that needed a direction.
        operation: &'static str,
    },

    /// A fixed-coordinate distance solve has no real solution.
    #[error("unreachable geometry in {operation}: distance {distance} is shorter than the required offset {required}")]
    UnreachableGeometry {
        /// The primitive that failed.
        operation: &'static str,
        /// Requested distance from the reference point.
        distance: f64,
        /// Offset along the fixed axis that the distance has to cover.
        required: f64,
    },

    /// A curve fit was requested with too few anchor points.
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        actual: usize,
    },

    /// Curve sampling resolution below two samples.
    #[error("invalid sample count {0}: curves need at least 2 samples")]
    InvalidSampleCount(usize),

    /// A drafting step referenced a point that has not been derived yet.
    #[error("point {0} is not available at this step of the draft")]
    MissingPoint(PointId),

    /// A drafting step tried to redefine an already derived point.
    #[error("point {0} is derived more than once")]
    DuplicatePoint(PointId),

    /// Configuration could not be read.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl DraftError {
    /// Create an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }

    /// True for errors caused by the measurements themselves rather than by
    /// the geometry derived from them.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidMeasurement { .. })
    }

    /// True for constructions that are impossible for the given measurements.
    /// Callers usually report these as "no pattern for these measurements".
    pub fn is_geometry_error(&self) -> bool {
        matches!(
            self,
            Self::DegenerateInput { .. } | Self::UnreachableGeometry { .. }
        )
    }
}

impl From<toml::de::Error> for DraftError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for drafting operations.
pub type Result<T> = core::result::Result<T, DraftError>;
