use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::NativeFloat;

/// A point (or free vector) in the drafting plane.
///
/// Coordinates are unscaled pattern units (centimetres for the reference
/// drafts). Moving down the leg decreases `y`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T>
where
    T: Float,
{
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    /// Shift by `dx` along the x axis
    pub fn shift_x(self, dx: T) -> Self {
        Point2 {
            x: self.x + dx,
            y: self.y,
        }
    }

    /// Shift by `dy` along the y axis
    pub fn shift_y(self, dy: T) -> Self {
        Point2 {
            x: self.x,
            y: self.y + dy,
        }
    }

    /// z component of the 3d cross product, positive if `other` lies counter-clockwise of `self`
    pub fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn norm(self) -> T {
        self.x.hypot(self.y)
    }

    /// The vector rotated by +90 degrees: (-y, x)
    pub fn perpendicular(self) -> Self {
        Point2 {
            x: -self.y,
            y: self.x,
        }
    }

    /// Angle of the vector against the positive x axis in radians
    pub fn angle(self) -> T {
        self.y.atan2(self.x)
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Neg for Point2<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Point2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    // scaling multiplies each coordinate T * T => T
    T: Mul<T, Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<Point2<T>> for (T, T) {
    fn from(p: Point2<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T: fmt::Display> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point for Point2<NativeFloat> {
    fn from_xy(x: NativeFloat, y: NativeFloat) -> Self {
        Point2 { x, y }
    }

    fn x(&self) -> NativeFloat {
        self.x
    }

    fn y(&self) -> NativeFloat {
        self.y
    }

    /// Returns the distance between self and other
    fn distance(&self, other: Self) -> NativeFloat {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Interprets the Point2 as a vector and returns its norm (distance from origin)
    fn abs(&self) -> NativeFloat {
        self.x.hypot(self.y)
    }
}
