//! Parametric trouser drafting.
//!
//! `sloper` turns six body measurements into the landmark points of a
//! trouser front and back piece and fits the seam, fork and dart curves
//! through them. Everything is returned as plain data (points and sampled
//! curves); drawing onto a page is left to the caller.
//!
//! The crate is organised bottom-up:
//! - [`Point`]/[`Point2`] and the [`geometry`] primitives (midpoints,
//!   directional offsets, fixed-coordinate distance solves, perpendiculars)
//! - [`LineSegment`], [`QuadraticBezier`], [`CubicBezier`] and the
//!   [`BezierPath`] chaining them
//! - the [`CurveFitter`] producing [`Curve`]s from anchor points
//! - the [`Draft`] builder deriving a [`PointSet`] from [`Measurements`]
//! - the [`validate`](validate::validate) predicate and the [`seams`]
//!   layout of both pieces
//!
//! # Example
//! ```rust
//! use sloper::{build_pattern_points, fit_curve, PointId};
//!
//! let points = build_pattern_points(100.33, 107.95, 29.21, 86.36, 22.6, 4.0).unwrap();
//! assert!(sloper::validate::validate(&points));
//!
//! let inseam = fit_curve(&[points[PointId::N(9)], points[PointId::N(13)]], 4.5).unwrap();
//! assert_eq!(inseam.len(), 100);
//! ```

pub mod bezier_segment;
pub mod config;
pub mod cubic_bezier;
pub mod curve;
pub mod draft;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod line;
pub mod measurements;
pub mod path;
pub mod point;
pub mod point2;
pub mod point_id;
pub mod quadratic_bezier;
pub mod seams;
pub mod validate;

pub use tinyvec::TinyVec;

pub use bezier_segment::BezierSegment;
pub use config::SloperConfig;
pub use cubic_bezier::CubicBezier;
pub use curve::Curve;
pub use draft::{
    build_pattern_points, BackForkRule, Draft, DraftOptions, DraftingMethod, PointSet, Step,
};
pub use error::{DraftError, Result};
pub use fit::{fit_curve, CurveFitter, FitConfig};
pub use geometry::{Normal, Side};
pub use line::LineSegment;
pub use measurements::{Measurements, RangeWarning};
pub use path::BezierPath;
pub use point::Point;
pub use point2::Point2;
pub use point_id::PointId;
pub use quadratic_bezier::QuadraticBezier;
pub use seams::{Piece, PieceLayout, Seam, SeamKind};
pub use validate::ValidationError;

/// Scalar type every point coordinate is stored in.
pub type NativeFloat = f64;

/// Tolerance used for degenerate-length checks and float comparisons.
pub const EPSILON: NativeFloat = 1e-10;
