//! Derivation of the landmark points from the measurements.
//!
//! A drafting method is a table of [`Step`]s. Each step names the point it
//! defines, the points its formula reads and the formula itself. The
//! builder runs the table in order, hands every formula a view holding
//! only the declared inputs and refuses to redefine a point, so the
//! dependency graph is checked on every build rather than trusted.

use std::collections::BTreeMap;
use std::iter;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, trace};

use crate::error::{DraftError, Result};
use crate::geometry::{
    diagonal_point, distance, fixed_x_at_distance, fixed_y_at_distance, midpoint,
    perpendicular_angles, point_along_line, point_beyond, Normal, Side,
};
use crate::measurements::Measurements;
use crate::point2::Point2;
use crate::point_id::PointId::{self, BackFork, DartLeft, DartPoint, DartRight, FlyCurve, FlyRef, A, N};
use crate::NativeFloat;

type Pt = Point2<NativeFloat>;

/// Formula of a single step.
pub type Rule = fn(&Measurements, &PointSet) -> Result<Pt>;

/// Distance from the back fork anchor (point 16) to the back fork point.
const BACK_FORK_REACH: NativeFloat = 4.5;
/// Distance from the waist line to the apex of the back dart.
const DART_LENGTH: NativeFloat = 12.0;
/// Half the width of the back dart at the waist line.
const DART_HALF_WIDTH: NativeFloat = 1.25;

/// How the front and back widths are derived.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftingMethod {
    /// Both pieces hang off one centre line; widths come from seat/8 and seat/16.
    #[default]
    Classic,
    /// Front and back are split around the centre line by quarter
    /// waist and seat with separate front and back ease.
    SplitRatio,
}

impl DraftingMethod {
    fn steps(&self) -> &'static [Step] {
        match self {
            DraftingMethod::Classic => CLASSIC,
            DraftingMethod::SplitRatio => SPLIT_RATIO,
        }
    }

    /// Every identifier a complete point set of this method contains, in order.
    pub fn required_ids(&self) -> Vec<PointId> {
        let mut ids: Vec<PointId> = self
            .steps()
            .iter()
            .map(|step| step.id)
            .chain(iter::once(BackFork))
            .collect();
        ids.sort();
        ids
    }
}

/// Construction of the back fork point from point 16.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackForkRule {
    /// 4.5 from point 16 under 45°.
    #[default]
    Diagonal,
    /// 4.5 from point 16 on the vertical through point 5, upper solution.
    /// Fails when point 5 lies further than 4.5 to the side of point 16.
    FixedX,
}

impl BackForkRule {
    fn step(&self) -> &'static Step {
        match self {
            BackForkRule::Diagonal => &BACK_FORK_DIAGONAL,
            BackForkRule::FixedX => &BACK_FORK_FIXED_X,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftOptions {
    pub method: DraftingMethod,
    pub back_fork: BackForkRule,
}

impl DraftOptions {
    /// Split-ratio widths with the back fork on the vertical through point 5.
    pub fn split_ratio() -> Self {
        DraftOptions {
            method: DraftingMethod::SplitRatio,
            back_fork: BackForkRule::FixedX,
        }
    }
}

/// One entry of a drafting table.
pub struct Step {
    /// The point this step defines.
    pub id: PointId,
    /// The points the formula reads. All of them are defined by earlier steps.
    pub deps: &'static [PointId],
    rule: Rule,
}

impl Step {
    const fn new(id: PointId, deps: &'static [PointId], rule: Rule) -> Self {
        Step { id, deps, rule }
    }

    /// Run the formula against `points`, which must contain every dependency.
    pub fn apply(&self, measurements: &Measurements, points: &PointSet) -> Result<Pt> {
        let inputs = points.subset(self.deps)?;
        (self.rule)(measurements, &inputs)
    }
}

impl core::fmt::Debug for Step {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Step")
            .field("id", &self.id)
            .field("deps", &self.deps)
            .finish()
    }
}

/// The landmark points of one draft, keyed and iterated by identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    method: DraftingMethod,
    points: BTreeMap<PointId, Pt>,
}

impl PointSet {
    pub fn new(method: DraftingMethod) -> Self {
        PointSet {
            method,
            points: BTreeMap::new(),
        }
    }

    /// The method that produced (or will produce) this set.
    pub fn method(&self) -> DraftingMethod {
        self.method
    }

    /// Add a point. Identifiers are write-once.
    pub fn insert(&mut self, id: PointId, point: Pt) -> Result<()> {
        if self.points.contains_key(&id) {
            return Err(DraftError::DuplicatePoint(id));
        }
        self.points.insert(id, point);
        Ok(())
    }

    pub fn get(&self, id: PointId) -> Option<Pt> {
        self.points.get(&id).copied()
    }

    /// Like [`PointSet::get`], with a missing point reported as an error.
    pub fn point(&self, id: PointId) -> Result<Pt> {
        self.get(id).ok_or(DraftError::MissingPoint(id))
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.points.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.points.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointId, Pt)> + '_ {
        self.points.iter().map(|(id, p)| (*id, *p))
    }

    /// A set holding only `ids`, each of which must be present.
    pub fn subset(&self, ids: &[PointId]) -> Result<PointSet> {
        let mut view = PointSet::new(self.method);
        for &id in ids {
            view.points.insert(id, self.point(id)?);
        }
        Ok(view)
    }
}

/// Panics if `id` is not part of the set.
impl Index<PointId> for PointSet {
    type Output = Pt;

    fn index(&self, id: PointId) -> &Pt {
        &self.points[&id]
    }
}

/// Runs a drafting table for a given set of options.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    options: DraftOptions,
}

impl Draft {
    pub fn new(options: DraftOptions) -> Self {
        Draft { options }
    }

    pub fn options(&self) -> DraftOptions {
        self.options
    }

    /// The steps in execution order.
    pub fn steps(&self) -> impl Iterator<Item = &'static Step> {
        self.options
            .method
            .steps()
            .iter()
            .chain(iter::once(self.options.back_fork.step()))
    }

    /// Derive every landmark point. Either the whole set is returned or the
    /// first error; nothing partial escapes.
    pub fn build(&self, measurements: &Measurements) -> Result<PointSet> {
        measurements.validate()?;
        let _span = debug_span!(
            "draft",
            method = ?self.options.method,
            back_fork = ?self.options.back_fork
        )
        .entered();

        let mut points = PointSet::new(self.options.method);
        for step in self.steps() {
            let point = step.apply(measurements, &points)?;
            trace!(id = %step.id, x = point.x, y = point.y, "derived point");
            points.insert(step.id, point)?;
        }
        debug!(points = points.len(), "draft complete");
        Ok(points)
    }
}

/// Classic draft with the diagonal back fork.
pub fn build_pattern_points(
    waist: NativeFloat,
    seat: NativeFloat,
    body_rise: NativeFloat,
    inseam: NativeFloat,
    trouser_bottom_width: NativeFloat,
    waistband_depth: NativeFloat,
) -> Result<PointSet> {
    let measurements = Measurements::new(
        waist,
        seat,
        body_rise,
        inseam,
        trouser_bottom_width,
        waistband_depth,
    )?;
    Draft::default().build(&measurements)
}

fn pt(x: NativeFloat, y: NativeFloat) -> Pt {
    Point2::new(x, y)
}

/// Length of the back waist line 21 -> 24.
fn back_waist_line(m: &Measurements) -> NativeFloat {
    m.waist / 4.0 + 4.5
}

// Steps shared by both methods.

const ORIGIN: Step = Step::new(N(0), &[], |_, _| Ok(pt(0.0, 0.0)));

const CROTCH_LINE: Step = Step::new(N(1), &[N(0)], |m, p| {
    Ok(p.point(N(0))?.shift_y(-(m.body_rise + 1.0 - m.waistband_depth)))
});

const HEM_LINE: Step = Step::new(N(2), &[N(0), N(1)], |m, p| {
    Ok(pt(p.point(N(0))?.x, p.point(N(1))?.y - m.inseam))
});

const BACK_WAIST: Step = Step::new(N(24), &[N(21), N(0)], |m, p| {
    fixed_y_at_distance(p.point(N(21))?, p.point(N(0))?.y, back_waist_line(m))
});

const DART_APEX: Step = Step::new(DartPoint, &[N(21), N(24), N(25)], |_, p| {
    let angles = perpendicular_angles(p.point(N(21))?, p.point(N(24))?);
    Ok(diagonal_point(p.point(N(25))?, DART_LENGTH, angles.toward(Normal::Left)))
});

const DART_LEFT: Step = Step::new(DartLeft, &[N(21), N(24)], |_, p| {
    let (start, end) = (p.point(N(21))?, p.point(N(24))?);
    point_along_line(start, end, distance(start, end) / 2.0 - DART_HALF_WIDTH)
});

const DART_RIGHT: Step = Step::new(DartRight, &[N(21), N(24)], |_, p| {
    let (start, end) = (p.point(N(21))?, p.point(N(24))?);
    point_along_line(start, end, distance(start, end) / 2.0 + DART_HALF_WIDTH)
});

const HEM_OUTER: Step = Step::new(N(27), &[N(12)], |_, p| Ok(p.point(N(12))?.shift_x(2.0)));
const HEM_INNER: Step = Step::new(N(28), &[N(13)], |_, p| Ok(p.point(N(13))?.shift_x(-2.0)));
const KNEE_OUTER: Step = Step::new(N(29), &[N(14)], |_, p| Ok(p.point(N(14))?.shift_x(2.0)));
const KNEE_INNER: Step = Step::new(N(30), &[N(15)], |_, p| Ok(p.point(N(15))?.shift_x(-2.0)));

const WAISTBAND: Step = Step::new(A, &[N(10), N(6)], |_, p| {
    point_along_line(p.point(N(10))?, p.point(N(6))?, 1.0)
});

static BACK_FORK_DIAGONAL: Step = Step::new(BackFork, &[N(16)], |_, p| {
    Ok(diagonal_point(p.point(N(16))?, BACK_FORK_REACH, 45.0))
});

static BACK_FORK_FIXED_X: Step = Step::new(BackFork, &[N(16), N(5)], |_, p| {
    let roots = fixed_x_at_distance(p.point(N(16))?, p.point(N(5))?.x, BACK_FORK_REACH)?;
    Ok(roots.pick(Side::Upper))
});

static CLASSIC: &[Step] = &[
    ORIGIN,
    CROTCH_LINE,
    HEM_LINE,
    // knee line
    Step::new(N(3), &[N(0), N(2)], |m, p| {
        Ok(pt(p.point(N(0))?.x, p.point(N(2))?.y + m.inseam / 2.0 + 5.0))
    }),
    // seat line
    Step::new(N(4), &[N(0), N(1)], |m, p| {
        Ok(pt(p.point(N(0))?.x, p.point(N(1))?.y + m.body_rise / 4.0))
    }),
    Step::new(FlyRef, &[N(0), N(1)], |m, p| {
        Ok(pt(p.point(N(0))?.x - (m.seat / 8.0 - 1.0), p.point(N(1))?.y))
    }),
    Step::new(N(5), &[FlyRef], |_, p| p.point(FlyRef)),
    Step::new(FlyCurve, &[FlyRef], |_, p| Ok(diagonal_point(p.point(FlyRef)?, 3.0, 45.0))),
    Step::new(N(6), &[FlyRef, N(4)], |_, p| Ok(pt(p.point(FlyRef)?.x, p.point(N(4))?.y))),
    Step::new(N(7), &[FlyRef, N(0)], |_, p| Ok(pt(p.point(FlyRef)?.x, p.point(N(0))?.y))),
    Step::new(N(8), &[N(6), N(4)], |m, p| {
        Ok(pt(p.point(N(6))?.x + m.seat / 4.0 + 2.0, p.point(N(4))?.y))
    }),
    Step::new(N(9), &[FlyRef, N(1)], |m, p| {
        Ok(pt(p.point(FlyRef)?.x - (m.seat / 16.0 + 0.5), p.point(N(1))?.y))
    }),
    Step::new(N(10), &[N(7), N(0)], |_, p| Ok(pt(p.point(N(7))?.x + 1.0, p.point(N(0))?.y))),
    Step::new(N(11), &[N(10), N(0)], |m, p| {
        Ok(pt(p.point(N(10))?.x + m.waist / 4.0 + 2.5, p.point(N(0))?.y))
    }),
    Step::new(N(12), &[N(2)], |m, p| Ok(p.point(N(2))?.shift_x(m.trouser_bottom_width / 2.0))),
    Step::new(N(13), &[N(2)], |m, p| Ok(p.point(N(2))?.shift_x(-m.trouser_bottom_width / 2.0))),
    Step::new(N(14), &[N(3)], |m, p| {
        Ok(p.point(N(3))?.shift_x(m.trouser_bottom_width / 2.0 + 1.5))
    }),
    Step::new(N(15), &[N(3)], |m, p| {
        Ok(p.point(N(3))?.shift_x(-(m.trouser_bottom_width / 2.0 + 1.5)))
    }),
    Step::new(N(16), &[N(5)], |m, p| Ok(p.point(N(5))?.shift_x((m.seat / 8.0 - 1.0) / 4.0))),
    Step::new(N(17), &[N(16), N(6)], |_, p| Ok(pt(p.point(N(16))?.x, p.point(N(6))?.y))),
    Step::new(N(18), &[N(16), N(0)], |_, p| Ok(pt(p.point(N(16))?.x, p.point(N(0))?.y))),
    Step::new(N(19), &[N(16), N(18)], |_, p| {
        let (low, high) = (p.point(N(16))?, p.point(N(18))?);
        Ok(pt(low.x, (low.y + high.y) / 2.0))
    }),
    Step::new(N(20), &[N(18)], |_, p| Ok(p.point(N(18))?.shift_x(2.0))),
    Step::new(N(21), &[N(19), N(20)], |_, p| point_beyond(p.point(N(19))?, p.point(N(20))?, 1.0)),
    Step::new(N(22), &[N(9)], |m, p| {
        Ok(p.point(N(9))?.shift_x(-((m.seat / 16.0 + 0.5) / 2.0 + 0.5)))
    }),
    Step::new(N(23), &[N(22)], |_, p| Ok(p.point(N(22))?.shift_y(-0.5))),
    BACK_WAIST,
    Step::new(N(25), &[N(21), N(24)], |m, p| {
        point_along_line(p.point(N(21))?, p.point(N(24))?, back_waist_line(m) / 2.0)
    }),
    DART_APEX,
    DART_LEFT,
    DART_RIGHT,
    Step::new(N(26), &[N(17)], |m, p| Ok(p.point(N(17))?.shift_x(m.seat / 4.0 + 3.0))),
    HEM_OUTER,
    HEM_INNER,
    KNEE_OUTER,
    KNEE_INNER,
    WAISTBAND,
];

fn front_waist(m: &Measurements) -> NativeFloat {
    m.waist / 4.0 + 1.0
}

fn back_waist(m: &Measurements) -> NativeFloat {
    m.waist / 4.0 + 3.0
}

fn front_seat(m: &Measurements) -> NativeFloat {
    m.seat / 4.0 + 1.0
}

fn back_seat(m: &Measurements) -> NativeFloat {
    m.seat / 4.0 + 2.0
}

static SPLIT_RATIO: &[Step] = &[
    ORIGIN,
    CROTCH_LINE,
    HEM_LINE,
    Step::new(N(3), &[N(0)], |m, p| Ok(p.point(N(0))?.shift_x(front_waist(m) / 2.0))),
    Step::new(N(4), &[N(0)], |m, p| Ok(p.point(N(0))?.shift_x(-front_waist(m) / 2.0))),
    Step::new(N(5), &[N(1)], |m, p| Ok(p.point(N(1))?.shift_x(front_seat(m) / 2.0))),
    Step::new(N(6), &[N(1)], |m, p| Ok(p.point(N(1))?.shift_x(-front_seat(m) / 2.0))),
    Step::new(N(7), &[N(5), N(2)], |m, p| {
        point_along_line(p.point(N(5))?, p.point(N(2))?, front_seat(m) / 2.0 - 1.0)
    }),
    Step::new(N(8), &[N(5), N(7)], |m, p| {
        point_beyond(p.point(N(5))?, p.point(N(7))?, m.body_rise / 3.0 + 2.0)
    }),
    Step::new(N(9), &[N(6), N(2)], |m, p| {
        point_along_line(p.point(N(6))?, p.point(N(2))?, front_seat(m) / 2.0 - 1.0)
    }),
    Step::new(N(10), &[N(4), N(6)], |_, p| point_along_line(p.point(N(4))?, p.point(N(6))?, 1.0)),
    Step::new(N(11), &[N(3), N(5)], |_, p| point_along_line(p.point(N(3))?, p.point(N(5))?, 1.0)),
    Step::new(N(12), &[N(2)], |m, p| Ok(p.point(N(2))?.shift_x(m.trouser_bottom_width / 2.0))),
    Step::new(N(13), &[N(2)], |m, p| Ok(p.point(N(2))?.shift_x(-m.trouser_bottom_width / 2.0))),
    Step::new(N(14), &[N(8), N(12)], |_, p| {
        let (from, to) = (p.point(N(8))?, p.point(N(12))?);
        point_along_line(from, to, distance(from, to))
    }),
    Step::new(N(15), &[N(9), N(13)], |_, p| {
        let (from, to) = (p.point(N(9))?, p.point(N(13))?);
        point_along_line(from, to, distance(from, to))
    }),
    Step::new(N(16), &[N(1)], |m, p| Ok(p.point(N(1))?.shift_x(back_seat(m) / 2.0))),
    Step::new(N(17), &[N(1)], |m, p| Ok(p.point(N(1))?.shift_x(-back_seat(m) / 2.0))),
    Step::new(N(18), &[N(0)], |m, p| Ok(p.point(N(0))?.shift_x(back_waist(m) / 2.0))),
    Step::new(N(19), &[N(16), N(2)], |m, p| {
        point_along_line(p.point(N(16))?, p.point(N(2))?, back_seat(m) / 2.0 - 1.0)
    }),
    Step::new(N(20), &[N(17), N(2)], |m, p| {
        point_along_line(p.point(N(17))?, p.point(N(2))?, back_seat(m) / 2.0 - 1.0)
    }),
    Step::new(N(21), &[N(18)], |_, p| Ok(p.point(N(18))?.shift_y(1.0))),
    Step::new(N(22), &[N(9), N(5)], |_, p| {
        let (fork, seat) = (p.point(N(9))?, p.point(N(5))?);
        Ok(fork.shift_x(-((fork.x - seat.x).abs() / 2.0 + 0.5)))
    }),
    Step::new(N(23), &[N(22)], |_, p| Ok(p.point(N(22))?.shift_y(-0.5))),
    BACK_WAIST,
    Step::new(N(25), &[N(21), N(24)], |_, p| Ok(midpoint(p.point(N(21))?, p.point(N(24))?))),
    DART_APEX,
    DART_LEFT,
    DART_RIGHT,
    Step::new(N(26), &[N(18)], |_, p| Ok(p.point(N(18))?.shift_x(2.0))),
    HEM_OUTER,
    HEM_INNER,
    KNEE_OUTER,
    KNEE_INNER,
    WAISTBAND,
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::BTreeSet;

    fn reference() -> Measurements {
        Measurements::new(100.33, 107.95, 29.21, 86.36, 22.6, 4.0).unwrap()
    }

    fn assert_point(actual: Pt, x: f64, y: f64, epsilon: f64) {
        assert_abs_diff_eq!(actual.x, x, epsilon = epsilon);
        assert_abs_diff_eq!(actual.y, y, epsilon = epsilon);
    }

    #[test]
    fn reference_centre_line() {
        let points = build_pattern_points(100.33, 107.95, 29.21, 86.36, 22.6, 4.0).unwrap();
        assert_eq!(points[N(0)], pt(0.0, 0.0));
        assert_point(points[N(1)], 0.0, -26.21, 1e-9);
        assert_point(points[N(2)], 0.0, -112.57, 1e-9);
        assert_point(points[N(3)], 0.0, -112.57 + 43.18 + 5.0, 1e-9);
        assert_point(points[N(4)], 0.0, -26.21 + 29.21 / 4.0, 1e-9);
    }

    #[test]
    fn reference_hem_is_symmetric() {
        let points = build_pattern_points(100.33, 107.95, 29.21, 86.36, 22.6, 4.0).unwrap();
        let (outer, inner) = (points[N(12)], points[N(13)]);
        assert_abs_diff_eq!(outer.y, -112.57, epsilon = 1e-9);
        assert_eq!(outer.y, inner.y);
        assert_abs_diff_eq!(outer.x, -inner.x, epsilon = 1e-12);
        assert_abs_diff_eq!(outer.x - inner.x, 22.6, epsilon = 1e-9);
        assert_abs_diff_eq!(points[N(27)].x - points[N(28)].x, 26.6, epsilon = 1e-9);
    }

    #[test]
    fn reference_front_and_back_landmarks() {
        let points = build_pattern_points(100.33, 107.95, 29.21, 86.36, 22.6, 4.0).unwrap();
        assert_point(points[FlyRef], -12.49375, -26.21, 1e-9);
        assert_eq!(points[N(5)], points[FlyRef]);
        assert_point(points[N(16)], -9.3703125, -26.21, 1e-9);
        assert_point(points[N(21)], -7.2194, 0.9885, 1e-3);
        assert_point(points[BackFork], -12.5523, -23.0280, 1e-3);

        let (waist_start, waist_end) = (points[N(21)], points[N(24)]);
        assert_eq!(waist_end.y, 0.0);
        assert_abs_diff_eq!(
            distance(waist_start, waist_end),
            100.33 / 4.0 + 4.5,
            epsilon = 1e-9
        );
        let centre = midpoint(waist_start, waist_end);
        assert_point(points[N(25)], centre.x, centre.y, 1e-9);
        assert_abs_diff_eq!(distance(points[A], points[N(10)]), 1.0, epsilon = 1e-9);
        assert!(points[A].y < 0.0);
    }

    #[test]
    fn dart_hangs_off_the_back_waist_centre() {
        let points = Draft::default().build(&reference()).unwrap();
        let centre = points[N(25)];
        let angles = perpendicular_angles(points[N(21)], points[N(24)]);
        assert_eq!(
            points[DartPoint],
            diagonal_point(centre, DART_LENGTH, angles.first)
        );
        let apex = points[DartPoint] - centre;
        assert_abs_diff_eq!(apex.norm(), DART_LENGTH, epsilon = 1e-9);
        assert_abs_diff_eq!(
            distance(points[DartLeft], points[DartRight]),
            2.0 * DART_HALF_WIDTH,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(distance(points[DartLeft], centre), DART_HALF_WIDTH, epsilon = 1e-9);
    }

    #[test]
    fn fixed_x_back_fork_sits_above_point_16() {
        let options = DraftOptions {
            back_fork: BackForkRule::FixedX,
            ..DraftOptions::default()
        };
        let points = Draft::new(options).build(&reference()).unwrap();
        let fork = points[BackFork];
        assert_eq!(fork.x, points[N(5)].x);
        assert!(fork.y > points[N(16)].y);
        assert_abs_diff_eq!(distance(fork, points[N(16)]), BACK_FORK_REACH, epsilon = 1e-9);
    }

    #[test]
    fn fixed_x_back_fork_out_of_reach() {
        let options = DraftOptions {
            back_fork: BackForkRule::FixedX,
            ..DraftOptions::default()
        };
        let wide = Measurements::new(100.0, 160.0, 29.21, 86.36, 22.6, 4.0).unwrap();
        assert!(matches!(
            Draft::new(options).build(&wide),
            Err(DraftError::UnreachableGeometry {
                operation: "fixed_x_at_distance",
                ..
            })
        ));
    }

    #[test]
    fn split_ratio_widths() {
        let points = Draft::new(DraftOptions::split_ratio()).build(&reference()).unwrap();
        let m = reference();
        assert_point(points[N(3)], front_waist(&m) / 2.0, 0.0, 1e-12);
        assert_point(points[N(4)], -front_waist(&m) / 2.0, 0.0, 1e-12);
        assert_point(points[N(16)], back_seat(&m) / 2.0, -26.21, 1e-9);
        assert_point(points[N(21)], back_waist(&m) / 2.0, 1.0, 1e-12);
        assert_point(points[N(14)], points[N(12)].x, points[N(12)].y, 1e-9);
        assert_eq!(points[BackFork].x, points[N(5)].x);
        assert!(!points.contains(FlyRef));
        assert_eq!(points.method(), DraftingMethod::SplitRatio);
    }

    #[test]
    fn split_ratio_reference_points() {
        let points = Draft::new(DraftOptions::split_ratio()).build(&reference()).unwrap();
        // front fork: 7 and 9 hang 12.99375 down the seat-to-hem lines
        assert_point(points[N(7)], 11.915355687799, -39.036449865240, 1e-9);
        assert_point(points[N(9)], -11.915355687799, -39.036449865240, 1e-9);
        assert_abs_diff_eq!(distance(points[N(5)], points[N(7)]), 12.99375, epsilon = 1e-9);
        // 8 continues 5 -> 7 by body_rise / 3 + 2
        assert_point(points[N(8)], 10.038036111525, -50.622001887176, 1e-9);
        assert_abs_diff_eq!(
            distance(points[N(7)], points[N(8)]),
            29.21 / 3.0 + 2.0,
            epsilon = 1e-9
        );
        assert_point(points[N(10)], -13.077567117546, -0.999340315895, 1e-9);
        assert_point(points[N(11)], 13.077567117546, -0.999340315895, 1e-9);
        assert_point(points[N(15)], -11.3, -112.57, 1e-9);

        assert_point(points[N(19)], 12.260337096345, -39.517635246891, 1e-9);
        assert_point(points[N(20)], -12.260337096345, -39.517635246891, 1e-9);
        // 22 sits |9.x - 5.x| / 2 + 0.5 outside point 9
        let offset = (points[N(9)].x - points[N(5)].x).abs() / 2.0 + 0.5;
        assert_abs_diff_eq!(offset, 13.454552843899, epsilon = 1e-9);
        assert_point(points[N(22)], -25.369908531698, -39.036449865240, 1e-9);
        assert_point(points[N(26)], 16.04125, 0.0, 1e-9);
    }

    #[test]
    fn every_required_point_is_built() {
        for options in [DraftOptions::default(), DraftOptions::split_ratio()] {
            let points = Draft::new(options).build(&reference()).unwrap();
            let ids: Vec<PointId> = points.ids().collect();
            assert_eq!(ids, options.method.required_ids());
        }
        assert_eq!(DraftingMethod::Classic.required_ids().len(), 38);
        assert_eq!(DraftingMethod::SplitRatio.required_ids().len(), 36);
    }

    #[test]
    fn tables_are_ordered_graphs() {
        for method in [DraftingMethod::Classic, DraftingMethod::SplitRatio] {
            for back_fork in [BackForkRule::Diagonal, BackForkRule::FixedX] {
                let draft = Draft::new(DraftOptions { method, back_fork });
                let mut defined = BTreeSet::new();
                for step in draft.steps() {
                    for dep in step.deps {
                        assert!(defined.contains(dep), "{} reads {} before it exists", step.id, dep);
                    }
                    assert!(defined.insert(step.id), "{} defined twice", step.id);
                }
            }
        }
    }

    #[test]
    fn steps_only_see_declared_inputs() {
        let mut points = PointSet::new(DraftingMethod::Classic);
        points.insert(N(0), pt(0.0, 0.0)).unwrap();
        // point 2 needs point 1 as well
        let step = &CLASSIC[2];
        assert_eq!(step.id, N(2));
        assert_eq!(
            step.apply(&reference(), &points),
            Err(DraftError::MissingPoint(N(1)))
        );
    }

    #[test]
    fn invalid_measurements_build_nothing() {
        assert_eq!(
            build_pattern_points(0.0, 107.95, 29.21, 86.36, 22.6, 4.0),
            Err(DraftError::InvalidMeasurement {
                name: "waist",
                value: 0.0
            })
        );
        let literal = Measurements {
            inseam: -1.0,
            ..reference()
        };
        assert!(Draft::default().build(&literal).unwrap_err().is_input_error());
    }

    #[test]
    fn builds_are_repeatable() {
        let draft = Draft::new(DraftOptions::split_ratio());
        assert_eq!(draft.build(&reference()), draft.build(&reference()));
        assert_eq!(
            build_pattern_points(90.0, 100.0, 27.0, 80.0, 20.0, 3.5),
            build_pattern_points(90.0, 100.0, 27.0, 80.0, 20.0, 3.5)
        );
    }

    #[test]
    fn point_set_is_write_once() {
        let mut points = PointSet::new(DraftingMethod::Classic);
        points.insert(A, pt(1.0, 2.0)).unwrap();
        assert_eq!(points.insert(A, pt(3.0, 4.0)), Err(DraftError::DuplicatePoint(A)));
        assert_eq!(points.get(A), Some(pt(1.0, 2.0)));
        assert_eq!(points.point(N(3)), Err(DraftError::MissingPoint(N(3))));
    }
}
