//! Geometric constructions used by the drafting method.
//!
//! All functions are pure. Constructions that need a direction or solve a
//! distance equation report degenerate or unreachable input as a
//! [`DraftError`] instead of producing NaN coordinates.
//!
//! Available functions:
//! - `midpoint()`, `distance()`
//! - `point_along_line()`, `point_beyond()`
//! - `diagonal_point()`, `control_point()`
//! - `fixed_x_at_distance()`, `fixed_y_at_distance()`
//! - `perpendicular_angles()`
//! - `bezier_point()`, `cubic_bezier_point()` and their sampled variants
//! - `polygon_area()`

use serde::{Deserialize, Serialize};

use crate::cubic_bezier::CubicBezier;
use crate::error::{DraftError, Result};
use crate::point2::Point2;
use crate::quadratic_bezier::QuadraticBezier;
use crate::{NativeFloat, EPSILON};

type Pt = Point2<NativeFloat>;

/// Default number of samples taken along a curve.
pub const DEFAULT_SAMPLES: usize = 100;

/// Which root of a fixed-coordinate distance solve to keep.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The solution with the larger coordinate (towards the waist).
    Upper,
    /// The solution with the smaller coordinate (towards the hem).
    Lower,
}

/// Which of the two perpendicular angles of a directed segment to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normal {
    /// Line angle + 90°.
    Left,
    /// Line angle − 90°.
    Right,
}

/// Both solutions of [`fixed_x_at_distance`], upper root first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedXRoots {
    pub upper: Pt,
    pub lower: Pt,
}

impl FixedXRoots {
    pub fn pick(&self, side: Side) -> Pt {
        match side {
            Side::Upper => self.upper,
            Side::Lower => self.lower,
        }
    }
}

/// The two angles perpendicular to a directed segment, in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PerpendicularAngles {
    /// line angle + 90°
    pub first: NativeFloat,
    /// line angle − 90°
    pub second: NativeFloat,
}

impl PerpendicularAngles {
    pub fn toward(&self, normal: Normal) -> NativeFloat {
        match normal {
            Normal::Left => self.first,
            Normal::Right => self.second,
        }
    }
}

/// Arithmetic mean of the two points
pub fn midpoint(p1: Pt, p2: Pt) -> Pt {
    Point2::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0)
}

/// Euclidean distance between the two points
pub fn distance(p1: Pt, p2: Pt) -> NativeFloat {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

fn chord(p1: Pt, p2: Pt, operation: &'static str) -> Result<(Pt, NativeFloat)> {
    let delta = p2 - p1;
    let length = delta.norm();
    if length < EPSILON {
        return Err(DraftError::DegenerateInput { operation });
    }
    Ok((delta, length))
}

/// Point at `distance` from `p1` towards `p2`.
/// Distances longer than the segment extrapolate past `p2` along the same ray.
pub fn point_along_line(p1: Pt, p2: Pt, distance: NativeFloat) -> Result<Pt> {
    let (delta, length) = chord(p1, p2, "point_along_line")?;
    Ok(p1 + delta * (distance / length))
}

/// Point `distance` further than `p2`, continuing the `p1 -> p2` direction.
pub fn point_beyond(p1: Pt, p2: Pt, distance: NativeFloat) -> Result<Pt> {
    let (delta, length) = chord(p1, p2, "point_beyond")?;
    Ok(p2 + delta * (distance / length))
}

/// Point at `distance` from `origin` under `angle_degrees`, computed as
/// `(x - d·cos θ, y + d·sin θ)`.
///
/// The x component is subtracted. Every derived landmark depends on this
/// mirror convention, so do not "fix" it.
pub fn diagonal_point(origin: Pt, distance: NativeFloat, angle_degrees: NativeFloat) -> Pt {
    let theta = angle_degrees.to_radians();
    Point2::new(
        origin.x - distance * theta.cos(),
        origin.y + distance * theta.sin(),
    )
}

/// Control point for a single-bulge curve between `p1` and `p2`: the
/// midpoint displaced by `offset` along the unit normal `(-dy, dx)`.
/// The sign of `offset` picks the side the curve bulges towards.
pub fn control_point(p1: Pt, p2: Pt, offset: NativeFloat) -> Result<Pt> {
    let (delta, length) = chord(p1, p2, "control_point")?;
    let normal = delta.perpendicular() * (1.0 / length);
    Ok(midpoint(p1, p2) + normal * offset)
}

/// Points on the vertical line `x = x_fixed` at `distance` from `reference`.
pub fn fixed_x_at_distance(reference: Pt, x_fixed: NativeFloat, distance: NativeFloat) -> Result<FixedXRoots> {
    let dx = x_fixed - reference.x;
    if distance < dx.abs() {
        return Err(DraftError::UnreachableGeometry {
            operation: "fixed_x_at_distance",
            distance,
            required: dx.abs(),
        });
    }
    let dy = (distance * distance - dx * dx).max(0.0).sqrt();
    Ok(FixedXRoots {
        upper: Point2::new(x_fixed, reference.y + dy),
        lower: Point2::new(x_fixed, reference.y - dy),
    })
}

/// Point on the horizontal line `y = y_fixed` at `distance` from `reference`.
/// Only the solution with the positive x offset is returned.
pub fn fixed_y_at_distance(reference: Pt, y_fixed: NativeFloat, distance: NativeFloat) -> Result<Pt> {
    let dy = y_fixed - reference.y;
    if distance < dy.abs() {
        return Err(DraftError::UnreachableGeometry {
            operation: "fixed_y_at_distance",
            distance,
            required: dy.abs(),
        });
    }
    let dx = (distance * distance - dy * dy).max(0.0).sqrt();
    Ok(Point2::new(reference.x + dx, y_fixed))
}

/// Angles (degrees) at ±90° from the direction `p1 -> p2`.
pub fn perpendicular_angles(p1: Pt, p2: Pt) -> PerpendicularAngles {
    let line_angle = (p2 - p1).angle().to_degrees();
    PerpendicularAngles {
        first: line_angle + 90.0,
        second: line_angle - 90.0,
    }
}

/// Quadratic Bezier through `p0` and `p1` with a single `control`, evaluated at `t`
pub fn bezier_point(p0: Pt, control: Pt, p1: Pt, t: NativeFloat) -> Pt {
    QuadraticBezier::new(p0, control, p1).eval(t)
}

/// Cubic Bezier from `p0` to `p1` with two control points, evaluated at `t`
pub fn cubic_bezier_point(p0: Pt, ctrl1: Pt, ctrl2: Pt, p1: Pt, t: NativeFloat) -> Pt {
    CubicBezier::new(p0, ctrl1, ctrl2, p1).eval(t)
}

/// `samples` evenly spaced values of t covering [0, 1], both ends included.
pub fn parameter_steps(samples: usize) -> Result<impl Iterator<Item = NativeFloat>> {
    if samples < 2 {
        return Err(DraftError::InvalidSampleCount(samples));
    }
    let last = (samples - 1) as NativeFloat;
    Ok((0..samples).map(move |i| i as NativeFloat / last))
}

/// Sample a quadratic Bezier at `samples` evenly spaced parameters
pub fn sample_quadratic(p0: Pt, control: Pt, p1: Pt, samples: usize) -> Result<Vec<Pt>> {
    let curve = QuadraticBezier::new(p0, control, p1);
    Ok(parameter_steps(samples)?.map(|t| curve.eval(t)).collect())
}

/// Sample a cubic Bezier at `samples` evenly spaced parameters
pub fn sample_cubic(p0: Pt, ctrl1: Pt, ctrl2: Pt, p1: Pt, samples: usize) -> Result<Vec<Pt>> {
    let curve = CubicBezier::new(p0, ctrl1, ctrl2, p1);
    Ok(parameter_steps(samples)?.map(|t| curve.eval(t)).collect())
}

/// Unsigned area of the closed polygon through `points` (shoelace formula).
/// Fewer than three points enclose nothing.
pub fn polygon_area(points: &[Pt]) -> NativeFloat {
    if points.len() < 3 {
        return 0.0;
    }
    let twice_area: NativeFloat = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.cross(*b))
        .sum();
    twice_area.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn pt(x: f64, y: f64) -> Pt {
        Point2::new(x, y)
    }

    #[test]
    fn midpoint_is_symmetric() {
        let a = pt(-3.5, 2.0);
        let b = pt(7.25, -11.0);
        assert_eq!(midpoint(a, b), midpoint(b, a));
        assert_eq!(midpoint(a, b), pt(1.875, -4.5));
    }

    #[test]
    fn point_along_line_endpoints() {
        let a = pt(1.0, 1.0);
        let b = pt(4.0, 5.0);
        assert_eq!(point_along_line(a, b, 0.0).unwrap(), a);
        let end = point_along_line(a, b, distance(a, b)).unwrap();
        assert_abs_diff_eq!(end.x, b.x, epsilon = 1e-12);
        assert_abs_diff_eq!(end.y, b.y, epsilon = 1e-12);
    }

    #[test]
    fn point_along_line_extrapolates() {
        let p = point_along_line(pt(0.0, 0.0), pt(0.0, 2.0), 5.0).unwrap();
        assert_abs_diff_eq!(p.y, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let a = pt(2.0, 2.0);
        assert_eq!(
            point_along_line(a, a, 1.0),
            Err(DraftError::DegenerateInput {
                operation: "point_along_line"
            })
        );
        assert!(point_beyond(a, a, 1.0).is_err());
        assert!(control_point(a, a, 1.0).is_err());
    }

    #[test]
    fn point_beyond_continues_direction() {
        // 3-4-5 triangle: one unit past (3, 4) along the ray from the origin
        let p = point_beyond(pt(0.0, 0.0), pt(3.0, 4.0), 5.0).unwrap();
        assert_abs_diff_eq!(p.x, 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn diagonal_point_subtracts_on_x() {
        let p = diagonal_point(pt(10.0, 10.0), 2.0, 0.0);
        assert_abs_diff_eq!(p.x, 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 10.0, epsilon = 1e-12);

        let p = diagonal_point(pt(0.0, 0.0), 3.0, 45.0);
        let leg = 3.0 / 2.0_f64.sqrt();
        assert_abs_diff_eq!(p.x, -leg, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, leg, epsilon = 1e-12);
    }

    #[test]
    fn control_point_offsets_along_left_normal() {
        let c = control_point(pt(0.0, 0.0), pt(4.0, 0.0), 1.5).unwrap();
        assert_abs_diff_eq!(c.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.y, 1.5, epsilon = 1e-12);
        let c = control_point(pt(0.0, 0.0), pt(4.0, 0.0), -1.5).unwrap();
        assert_abs_diff_eq!(c.y, -1.5, epsilon = 1e-12);
    }

    #[test]
    fn fixed_x_returns_upper_root_first() {
        let roots = fixed_x_at_distance(pt(0.0, 0.0), 3.0, 5.0).unwrap();
        assert_eq!(roots.upper, pt(3.0, 4.0));
        assert_eq!(roots.lower, pt(3.0, -4.0));
        assert_eq!(roots.pick(Side::Upper), roots.upper);
        assert_eq!(roots.pick(Side::Lower), roots.lower);
    }

    #[test]
    fn fixed_x_unreachable_and_tangent() {
        let reference = pt(1.0, 2.0);
        assert!(matches!(
            fixed_x_at_distance(reference, 5.0, 3.0),
            Err(DraftError::UnreachableGeometry { .. })
        ));
        let roots = fixed_x_at_distance(reference, 5.0, 4.0).unwrap();
        assert_eq!(roots.upper, pt(5.0, 2.0));
        assert_eq!(roots.lower, pt(5.0, 2.0));
    }

    #[test]
    fn fixed_y_takes_positive_x_branch() {
        let p = fixed_y_at_distance(pt(1.0, 4.0), 0.0, 5.0).unwrap();
        assert_eq!(p, pt(4.0, 0.0));
        assert!(fixed_y_at_distance(pt(1.0, 4.0), 0.0, 3.9).is_err());
    }

    #[test]
    fn perpendicular_angles_straddle_line() {
        let a = pt(1.0, 1.0);
        let b = pt(3.0, 4.0);
        let line = (b - a).angle().to_degrees();
        let angles = perpendicular_angles(a, b);
        assert_abs_diff_eq!(angles.first - angles.second, 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(angles.first - line, 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(line - angles.second, 90.0, epsilon = 1e-12);
        assert_eq!(angles.toward(Normal::Left), angles.first);
        assert_eq!(angles.toward(Normal::Right), angles.second);
    }

    #[test]
    fn sampled_curves_hit_their_endpoints() {
        let a = pt(0.0, 0.0);
        let b = pt(10.0, 0.0);
        let samples = sample_quadratic(a, pt(5.0, 5.0), b, DEFAULT_SAMPLES).unwrap();
        assert_eq!(samples.len(), DEFAULT_SAMPLES);
        assert_eq!(samples[0], a);
        assert_eq!(samples[DEFAULT_SAMPLES - 1], b);
        // the apex of a symmetric quadratic sits halfway to its control point
        assert_abs_diff_eq!(bezier_point(a, pt(5.0, 5.0), b, 0.5).y, 2.5, epsilon = 1e-12);

        let cubic = sample_cubic(a, pt(2.0, 3.0), pt(8.0, 3.0), b, 50).unwrap();
        assert_eq!(cubic.len(), 50);
        assert_eq!(cubic[49], b);
        assert_eq!(
            cubic_bezier_point(a, pt(2.0, 3.0), pt(8.0, 3.0), b, 0.0),
            a
        );
        assert_eq!(
            sample_quadratic(a, a, b, 1),
            Err(DraftError::InvalidSampleCount(1))
        );
    }

    #[test]
    fn polygon_area_of_rectangle() {
        let rect = [pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, -3.0), pt(0.0, -3.0)];
        assert_abs_diff_eq!(polygon_area(&rect), 12.0, epsilon = 1e-12);
        assert_eq!(polygon_area(&rect[..2]), 0.0);
    }
}
