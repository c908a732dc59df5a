use core::slice;

use tinyvec::TinyVec;

use crate::bezier_segment::BezierSegment;
use crate::cubic_bezier::CubicBezier;
use crate::error::Result;
use crate::line::LineSegment;
use crate::point::Point;
use crate::{NativeFloat, EPSILON};

/// A path composed of mixed Bezier segments (line/quadratic/cubic).
///
/// Seam curves rarely have more than a handful of segments, so up to four
/// are stored inline before spilling to the heap.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierPath<P>
where
    P: Point,
{
    segments: TinyVec<[BezierSegment<P>; 4]>,
}

impl<P> BezierPath<P>
where
    P: Point,
{
    pub fn new() -> Self {
        BezierPath {
            segments: TinyVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> slice::Iter<'_, BezierSegment<P>> {
        self.segments.iter()
    }

    pub fn push(&mut self, segment: BezierSegment<P>) {
        self.segments.push(segment);
    }

    pub fn push_line(&mut self, segment: LineSegment<P>) {
        self.push(segment.into())
    }

    pub fn push_cubic(&mut self, segment: CubicBezier<P>) {
        self.push(segment.into())
    }

    /// Start of the first segment. Returns None for empty paths.
    pub fn start(&self) -> Option<P> {
        self.segments.first().map(BezierSegment::start)
    }

    /// End of the last segment. Returns None for empty paths.
    pub fn end(&self) -> Option<P> {
        self.segments.last().map(BezierSegment::end)
    }

    /// True if every segment starts where the previous one ended.
    pub fn is_continuous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| (pair[1].start() - pair[0].end()).squared_length() < EPSILON)
    }

    /// Approximate arc length, `nsteps` chords per segment.
    pub fn arclen(&self, nsteps: usize) -> NativeFloat {
        self.segments.iter().map(|s| s.arclen(nsteps)).sum()
    }

    /// Sample every segment at `samples_per_segment` parameters and concatenate.
    /// The shared point where one segment ends and the next begins is kept once.
    pub fn sample(&self, samples_per_segment: usize) -> Result<Vec<P>> {
        let mut points = Vec::with_capacity(self.segments.len() * samples_per_segment);
        for (index, segment) in self.segments.iter().enumerate() {
            let samples = segment.sample(samples_per_segment)?;
            let skip = usize::from(index > 0);
            points.extend(samples.into_iter().skip(skip));
        }
        Ok(points)
    }
}

impl<P> Default for BezierPath<P>
where
    P: Point,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> FromIterator<BezierSegment<P>> for BezierPath<P>
where
    P: Point,
{
    fn from_iter<I: IntoIterator<Item = BezierSegment<P>>>(iter: I) -> Self {
        BezierPath {
            segments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point2::Point2;

    fn corner() -> BezierPath<Point2<f64>> {
        let mut path = BezierPath::new();
        path.push_line(LineSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
        ));
        path.push_line(LineSegment::new(
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ));
        path
    }

    #[test]
    fn sampling_shares_joints() {
        let path = corner();
        let samples = path.sample(5).unwrap();
        // 5 + 4, the corner is not repeated
        assert_eq!(samples.len(), 9);
        assert_eq!(samples[4], Point2::new(1.0, 0.0));
        assert_eq!(samples[5], Point2::new(1.0, 0.25));
        assert!(path.is_continuous());
        assert!((path.arclen(8) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn grows_past_inline_capacity() {
        let path: BezierPath<Point2<f64>> = (0..6)
            .map(|i| {
                LineSegment::new(
                    Point2::new(i as f64, 0.0),
                    Point2::new(i as f64 + 1.0, 0.0),
                )
                .into()
            })
            .collect();
        assert_eq!(path.len(), 6);
        assert_eq!(path.end(), Some(Point2::new(6.0, 0.0)));
        assert_eq!(path.start(), Some(Point2::new(0.0, 0.0)));
    }
}
