use crate::line::LineSegment;
use crate::point::Point;
use crate::NativeFloat;

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn ctrl1(&self) -> P {
        self.ctrl1
    }

    pub fn ctrl2(&self) -> P {
        self.ctrl2
    }

    pub fn end(&self) -> P {
        self.end
    }

    /// Evaluate a CubicBezier curve at t by direct evaluation of the polynomial (not numerically stable)
    pub fn eval(&self, t: NativeFloat) -> P {
        let one_t = 1.0 - t;
        self.start * (one_t * one_t * one_t)
            + self.ctrl1 * (3.0 * t * one_t * one_t)
            + self.ctrl2 * (3.0 * t * t * one_t)
            + self.end * (t * t * t)
    }

    /// Evaluate a CubicBezier curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: NativeFloat) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }

    /// Approximates the arc length of the curve by flattening it with straight line segments.
    /// Remember arclen also works by linear approximation, not the integral, so we have to accept error!
    pub fn arclen(&self, nsteps: usize) -> NativeFloat {
        let nsteps = nsteps.max(1);
        let mut arclen = 0.0;
        let mut previous = self.start;
        for i in 1..=nsteps {
            let t = i as NativeFloat / nsteps as NativeFloat;
            let p = self.eval_casteljau(t);
            arclen += previous.distance(p);
            previous = p;
        }
        arclen
    }

    pub fn baseline(&self) -> LineSegment<P> {
        LineSegment {
            start: self.start,
            end: self.end,
        }
    }

    /// True if both control points lie on the baseline within `tolerance`
    pub fn is_linear(&self, tolerance: NativeFloat) -> bool {
        let line = self.baseline();
        line.distance_to_point(self.ctrl1) <= tolerance
            && line.distance_to_point(self.ctrl2) <= tolerance
    }
}
