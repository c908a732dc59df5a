use crate::line::LineSegment;
use crate::point::Point;
use crate::NativeFloat;

/// A 2d quadratic Bezier curve defined by three points: the starting point,
/// one control point and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * start + 2 * (1 - t) * t * ctrl + t² * end```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct QuadraticBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl: P,
    pub(crate) end: P,
}

impl<P> QuadraticBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl: P, end: P) -> Self {
        QuadraticBezier { start, ctrl, end }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn ctrl(&self) -> P {
        self.ctrl
    }

    pub fn end(&self) -> P {
        self.end
    }

    /// Evaluate the curve at t by direct evaluation of the Bernstein polynomial
    pub fn eval(&self, t: NativeFloat) -> P {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        self.start * one_t2 + self.ctrl * (2.0 * one_t * t) + self.end * t2
    }

    /// Evaluate the curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: NativeFloat) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl - self.start) * t;
        let ctrl_1bc = self.ctrl + (self.end - self.ctrl) * t;
        // second iteration, final point on the curve
        ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t
    }

    pub fn baseline(&self) -> LineSegment<P> {
        LineSegment {
            start: self.start,
            end: self.end,
        }
    }

    /// True if the control point lies on the baseline within `tolerance`
    pub fn is_linear(&self, tolerance: NativeFloat) -> bool {
        self.baseline().distance_to_point(self.ctrl) <= tolerance
    }

    /// Approximates the arc length of the curve by flattening it with straight line segments.
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
}
