//! Curve fitting through pattern points.
//!
//! Two shapes are supported: a single-bulge quadratic between two points,
//! pushed sideways by an offset, and a piecewise cubic path through any
//! number of anchors whose curvature is set by a tension factor.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::bezier_segment::BezierSegment;
use crate::cubic_bezier::CubicBezier;
use crate::curve::Curve;
use crate::error::{DraftError, Result};
use crate::geometry::{control_point, distance, midpoint, DEFAULT_SAMPLES};
use crate::line::LineSegment;
use crate::path::BezierPath;
use crate::point2::Point2;
use crate::quadratic_bezier::QuadraticBezier;
use crate::{NativeFloat, EPSILON};

type Pt = Point2<NativeFloat>;

/// Weight of the outgoing control point, measured from the segment start.
const LEAD_WEIGHT: NativeFloat = 0.3;
/// Weight of the incoming control point, measured back from the segment end.
const TRAIL_WEIGHT: NativeFloat = 0.2;

/// Sampling resolution for fitted curves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Samples per fitted segment, both ends included. At least 2.
    pub samples: usize,
}

impl FitConfig {
    pub fn with_samples(samples: usize) -> Result<Self> {
        let config = FitConfig { samples };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.samples < 2 {
            return Err(DraftError::InvalidSampleCount(self.samples));
        }
        Ok(())
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        FitConfig {
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// Fits seam curves through pattern points at a fixed sampling resolution.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CurveFitter {
    config: FitConfig,
}

impl CurveFitter {
    pub fn new(config: FitConfig) -> Self {
        CurveFitter { config }
    }

    pub fn config(&self) -> FitConfig {
        self.config
    }

    /// Quadratic from `p1` to `p2` whose control point sits `offset` away
    /// from the midpoint, on the left normal of `p1 -> p2` for positive values.
    /// Coincident ends have no normal and give a zero-length curve.
    pub fn fit_path(&self, p1: Pt, p2: Pt, offset: NativeFloat) -> Result<QuadraticBezier<Pt>> {
        let control = if distance(p1, p2) < EPSILON {
            midpoint(p1, p2)
        } else {
            control_point(p1, p2, offset)?
        };
        Ok(QuadraticBezier::new(p1, control, p2))
    }

    /// Sampled version of [`CurveFitter::fit_path`].
    pub fn fit(&self, p1: Pt, p2: Pt, offset: NativeFloat) -> Result<Curve> {
        trace!(?p1, ?p2, offset, "fitting offset curve");
        let quadratic = self.fit_path(p1, p2, offset)?;
        self.sample_segment(quadratic.into())
    }

    /// Straight segment, sampled like every other curve so renderers can
    /// treat all seams alike.
    pub fn fit_line(&self, p1: Pt, p2: Pt) -> Result<Curve> {
        self.sample_segment(LineSegment::new(p1, p2).into())
    }

    /// Quadratic with an explicitly placed control point.
    pub fn fit_with_control(&self, p1: Pt, control: Pt, p2: Pt) -> Result<Curve> {
        self.sample_segment(QuadraticBezier::new(p1, control, p2).into())
    }

    /// Piecewise cubic path through every anchor in order.
    ///
    /// Each segment `a -> b` starts from controls on its chord and is pulled
    /// towards controls parallel to the neighbouring chords `prev -> b` and
    /// `a -> next` by `tension`. A tension of 0 reproduces the polyline.
    /// Two anchors always give a straight segment.
    pub fn fit_through_path(&self, points: &[Pt], tension: NativeFloat) -> Result<BezierPath<Pt>> {
        let last = match points.len() {
            0 | 1 => return Err(DraftError::insufficient_points(2, points.len())),
            n => n - 1,
        };

        let mut path = BezierPath::new();
        if last == 1 {
            path.push_line(LineSegment::new(points[0], points[1]));
            return Ok(path);
        }

        for i in 0..last {
            let a = points[i];
            let b = points[i + 1];
            let prev = points[i.saturating_sub(1)];
            let next = points[(i + 2).min(last)];

            let chord = b - a;
            let straight1 = a + chord * LEAD_WEIGHT;
            let straight2 = b - chord * TRAIL_WEIGHT;
            let curved1 = a + (b - prev) * LEAD_WEIGHT;
            let curved2 = b - (next - a) * TRAIL_WEIGHT;

            path.push_cubic(CubicBezier::new(
                a,
                straight1 + (curved1 - straight1) * tension,
                straight2 + (curved2 - straight2) * tension,
                b,
            ));
        }
        debug_assert!(path.is_continuous());
        Ok(path)
    }

    /// Sampled version of [`CurveFitter::fit_through_path`]. Every segment
    /// is sampled at the configured resolution; shared anchors appear once.
    pub fn fit_through(&self, points: &[Pt], tension: NativeFloat) -> Result<Curve> {
        trace!(anchors = points.len(), tension, "fitting curve through anchors");
        let path = self.fit_through_path(points, tension)?;
        Curve::from_samples(path.sample(self.config.samples)?)
    }

    /// Two points give an offset curve with `offset = shape`, three or more a
    /// path through all of them with `tension = shape`.
    pub fn fit_points(&self, points: &[Pt], shape: NativeFloat) -> Result<Curve> {
        match points {
            [p1, p2] => self.fit(*p1, *p2, shape),
            _ => self.fit_through(points, shape),
        }
    }

    fn sample_segment(&self, segment: BezierSegment<Pt>) -> Result<Curve> {
        Curve::from_samples(segment.sample(self.config.samples)?)
    }
}

/// Fit a curve through `points` at the default resolution.
///
/// See [`CurveFitter::fit_points`] for how `shape` is interpreted.
pub fn fit_curve(points: &[Pt], shape: NativeFloat) -> Result<Curve> {
    CurveFitter::default().fit_points(points, shape)
}
