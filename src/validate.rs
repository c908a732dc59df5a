//! Sanity checks on a finished point set.
//!
//! None of these functions modify the set.

use thiserror::Error;

use crate::draft::PointSet;
use crate::geometry::distance;
use crate::point::Point;
use crate::point_id::PointId::{self, A, N};
use crate::EPSILON;

/// First problem found in a point set.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("point {0} is missing")]
    MissingPoint(PointId),

    #[error("point {id} has a non-finite coordinate ({x}, {y})")]
    NonFinite { id: PointId, x: f64, y: f64 },

    #[error("segment {start} -> {end} has zero length")]
    DegenerateSegment { start: PointId, end: PointId },
}

/// Segments a usable pattern cannot have collapsed: the front waistband,
/// both hems and the back waist line.
pub const CRITICAL_SEGMENTS: [(PointId, PointId); 4] =
    [(A, N(11)), (N(13), N(12)), (N(28), N(27)), (N(21), N(24))];

/// True if every required point is present and every coordinate is finite.
pub fn validate(points: &PointSet) -> bool {
    check(points).is_ok()
}

/// Same as [`validate`], reporting the first failure.
///
/// Required points are checked in identifier order before any coordinate.
pub fn check(points: &PointSet) -> Result<(), ValidationError> {
    if let Some(id) = points
        .method()
        .required_ids()
        .into_iter()
        .find(|id| !points.contains(*id))
    {
        return Err(ValidationError::MissingPoint(id));
    }

    match points.iter().find(|(_, p)| !p.is_finite()) {
        Some((id, p)) => Err(ValidationError::NonFinite { id, x: p.x, y: p.y }),
        None => Ok(()),
    }
}

/// Runs [`check`] and then rejects zero-length [`CRITICAL_SEGMENTS`].
pub fn check_segments(points: &PointSet) -> Result<(), ValidationError> {
    check(points)?;
    for (start, end) in CRITICAL_SEGMENTS {
        let (Some(a), Some(b)) = (points.get(start), points.get(end)) else {
            continue;
        };
        if distance(a, b) < EPSILON {
            return Err(ValidationError::DegenerateSegment { start, end });
        }
    }
    Ok(())
}
