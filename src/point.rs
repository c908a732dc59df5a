use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use crate::NativeFloat;

/// Trait defined over 2D points used by the curve types.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<NativeFloat, Output = Self>
    + Copy
    + PartialEq
    + Default
    + Debug
{
    /// Construct a point from its two coordinates
    fn from_xy(x: NativeFloat, y: NativeFloat) -> Self;

    /// Returns the horizontal coordinate
    fn x(&self) -> NativeFloat;

    /// Returns the vertical coordinate
    fn y(&self) -> NativeFloat;

    /// Returns the distance between the two Points self and other
    fn distance(&self, other: Self) -> NativeFloat {
        (other - *self).abs()
    }

    /// Returns the squared L2 norm of the point interpreted as a vector
    fn squared_length(&self) -> NativeFloat {
        self.x() * self.x() + self.y() * self.y()
    }

    /// Returns the L2 Norm of the Point interpreted as a Vector
    fn abs(&self) -> NativeFloat {
        self.squared_length().sqrt()
    }

    /// True if both coordinates are finite
    fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}
