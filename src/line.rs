use crate::point::Point;
use crate::{NativeFloat, EPSILON};

/// LineSegment defined by a start and an endpoint, evaluatable
/// anywhere inbetween using interpolation parameter t: [0,1] in eval()
/// A LineSegment is equal to a linear Bezier curve, which is why there is no
/// specialized type for that case.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineSegment<P> {
    pub(crate) start: P,
    pub(crate) end: P,
}

impl<P> LineSegment<P>
where
    P: Point,
{
    pub fn new(start: P, end: P) -> Self {
        LineSegment { start, end }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn end(&self) -> P {
        self.end
    }

    pub fn eval(&self, t: NativeFloat) -> P {
        self.start + (self.end - self.start) * t
    }

    pub fn length(&self) -> NativeFloat {
        self.start.distance(self.end)
    }

    /// Return the distance from the LineSegment to Point p by calculating the projection
    pub fn distance_to_point(&self, p: P) -> NativeFloat {
        let l2 = (self.end - self.start).squared_length();
        // if start and endpoint are approx the same, return the distance to either
        if l2 < EPSILON {
            return self.start.distance(p);
        }
        let v1 = p - self.start;
        let v2 = self.end - self.start;
        let dot = v1.x() * v2.x() + v1.y() * v2.y();
        let t = (dot / l2).clamp(0.0, 1.0);
        // Projection falls on the segment
        let projection = self.start + v2 * t;
        projection.distance(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point2::Point2;

    /// Check whether a line segment interpolation p + t*(q-p) at t=0.5
    /// yields equal distance to the start (p)/end (q) points (up to machine accuracy).
    #[test]
    fn line_segment_interpolation() {
        let line = LineSegment::new(Point2::new(0f64, 1.77f64), Point2::new(4.3f64, 3f64));

        let mid = line.eval(0.5);
        assert!(
            ((mid - line.start).squared_length() - (mid - line.end).squared_length()).abs()
                < EPSILON
        )
    }

    /// Check whether classic pythagorean equality holds for sides 3, 4 with hypothenuse 5
    #[test]
    fn line_segment_distance_to_point() {
        let line = LineSegment::new(Point2::new(0f64, 1f64), Point2::new(3f64, 1f64));
        // dist to start should be 4; dist to end should be 5
        let p1 = Point2::new(0f64, 5f64);
        assert!((line.distance_to_point(p1) - 4.0).abs() < EPSILON);
        assert!(((p1 - line.end).abs() - 5.0).abs() < EPSILON);
        // dist to midpoint (t=0.5) should be 1
        let p2 = Point2::new(1.5f64, 2f64);
        assert!((line.distance_to_point(p2) - 1.0).abs() < EPSILON);
        // beyond the end the distance is measured to the endpoint
        let p3 = Point2::new(6f64, 5f64);
        assert!((line.distance_to_point(p3) - 5.0).abs() < EPSILON);
    }
}
