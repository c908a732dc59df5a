//! Sum type for specialized Bezier segments.

use crate::cubic_bezier::CubicBezier;
use crate::geometry::parameter_steps;
use crate::error::Result;
use crate::line::LineSegment;
use crate::point::Point;
use crate::quadratic_bezier::QuadraticBezier;
use crate::NativeFloat;

/// Sum type for line/quadratic/cubic Bezier segments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BezierSegment<P> {
    Linear(LineSegment<P>),
    Quadratic(QuadraticBezier<P>),
    Cubic(CubicBezier<P>),
}

impl<P> BezierSegment<P>
where
    P: Point,
{
    /// Evaluate the segment at `t` in `[0, 1]`.
    pub fn eval(&self, t: NativeFloat) -> P {
        match self {
            BezierSegment::Linear(segment) => segment.eval(t),
            BezierSegment::Quadratic(segment) => segment.eval(t),
            BezierSegment::Cubic(segment) => segment.eval(t),
        }
    }

    /// Return the segment start point.
    pub fn start(&self) -> P {
        match self {
            BezierSegment::Linear(segment) => segment.start,
            BezierSegment::Quadratic(segment) => segment.start,
            BezierSegment::Cubic(segment) => segment.start,
        }
    }

    #[inline]
    /// Return the segment end point.
    pub fn end(&self) -> P {
        match self {
            BezierSegment::Linear(segment) => segment.end,
            BezierSegment::Quadratic(segment) => segment.end,
            BezierSegment::Cubic(segment) => segment.end,
        }
    }

    #[inline]
    /// Return true if the segment is linear within `tolerance`.
    pub fn is_linear(&self, tolerance: NativeFloat) -> bool {
        match self {
            BezierSegment::Linear(..) => true,
            BezierSegment::Quadratic(segment) => segment.is_linear(tolerance),
            BezierSegment::Cubic(segment) => segment.is_linear(tolerance),
        }
    }

    #[inline]
    /// Return the baseline line segment between start and end.
    pub fn baseline(&self) -> LineSegment<P> {
        match self {
            BezierSegment::Linear(segment) => *segment,
            BezierSegment::Quadratic(segment) => segment.baseline(),
            BezierSegment::Cubic(segment) => segment.baseline(),
        }
    }

    /// Approximate arc length from `nsteps` chords.
    pub fn arclen(&self, nsteps: usize) -> NativeFloat {
        match self {
            BezierSegment::Linear(segment) => segment.length(),
            BezierSegment::Quadratic(segment) => segment.arclen(nsteps),
            BezierSegment::Cubic(segment) => segment.arclen(nsteps),
        }
    }

    /// Evaluate the segment at `samples` evenly spaced parameters, both ends included.
    pub fn sample(&self, samples: usize) -> Result<Vec<P>> {
        Ok(parameter_steps(samples)?.map(|t| self.eval(t)).collect())
    }
}

impl<P> From<LineSegment<P>> for BezierSegment<P> {
    fn from(s: LineSegment<P>) -> Self {
        BezierSegment::Linear(s)
    }
}

impl<P> From<QuadraticBezier<P>> for BezierSegment<P> {
    fn from(s: QuadraticBezier<P>) -> Self {
        BezierSegment::Quadratic(s)
    }
}

impl<P> From<CubicBezier<P>> for BezierSegment<P> {
    fn from(s: CubicBezier<P>) -> Self {
        BezierSegment::Cubic(s)
    }
}

impl<P> Default for BezierSegment<P>
where
    P: Point,
{
    fn default() -> Self {
        BezierSegment::Linear(LineSegment::new(P::default(), P::default()))
    }
}
