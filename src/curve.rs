use core::slice;

use serde::{Deserialize, Serialize};

use crate::error::{DraftError, Result};
use crate::line::LineSegment;
use crate::point::Point;
use crate::point2::Point2;
use crate::NativeFloat;

/// A fitted curve, stored as the ordered samples a renderer draws as a polyline.
///
/// Curves are produced by the [`CurveFitter`](crate::CurveFitter) and never
/// change afterwards; refitting the same anchors yields identical samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SampleList")]
pub struct Curve {
    samples: Vec<Point2<NativeFloat>>,
}

/// Unchecked wire form of a [`Curve`].
#[derive(Deserialize)]
struct SampleList {
    samples: Vec<Point2<NativeFloat>>,
}

impl TryFrom<SampleList> for Curve {
    type Error = DraftError;

    fn try_from(list: SampleList) -> Result<Self> {
        Curve::from_samples(list.samples)
    }
}

impl Curve {
    /// Wrap a non-empty sample sequence
    pub fn from_samples(samples: Vec<Point2<NativeFloat>>) -> Result<Self> {
        if samples.is_empty() {
            return Err(DraftError::insufficient_points(1, 0));
        }
        Ok(Curve { samples })
    }

    pub fn samples(&self) -> &[Point2<NativeFloat>] {
        &self.samples
    }

    pub fn iter(&self) -> slice::Iter<'_, Point2<NativeFloat>> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn start(&self) -> Point2<NativeFloat> {
        self.samples[0]
    }

    pub fn end(&self) -> Point2<NativeFloat> {
        self.samples[self.samples.len() - 1]
    }

    /// Length of the sample polyline
    pub fn arclen(&self) -> NativeFloat {
        self.samples
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }

    /// Return the bounding box of the samples as `[(xmin, xmax), (ymin, ymax)]`
    pub fn bounding_box(&self) -> [(NativeFloat, NativeFloat); 2] {
        let first = self.start();
        self.samples.iter().skip(1).fold(
            [(first.x, first.x), (first.y, first.y)],
            |[(xmin, xmax), (ymin, ymax)], p| {
                [(xmin.min(p.x), xmax.max(p.x)), (ymin.min(p.y), ymax.max(p.y))]
            },
        )
    }

    /// Largest distance of any sample from the chord between the first and last sample
    pub fn max_deviation(&self) -> NativeFloat {
        let chord = LineSegment::new(self.start(), self.end());
        self.samples
            .iter()
            .map(|p| chord.distance_to_point(*p))
            .fold(0.0, NativeFloat::max)
    }

    /// True if every sample lies on the chord within `tolerance`
    pub fn is_straight(&self, tolerance: NativeFloat) -> bool {
        self.max_deviation() <= tolerance
    }

    pub fn into_samples(self) -> Vec<Point2<NativeFloat>> {
        self.samples
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Point2<NativeFloat>;
    type IntoIter = slice::Iter<'a, Point2<NativeFloat>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
