//! Layout of the front and back pieces as ordered seams.
//!
//! Each seam is a named, sampled [`Curve`] between landmark points. The
//! outline of a piece is the closed polygon through its corner points and
//! is kept separately from the seams, which also include interior lines
//! such as darts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::Curve;
use crate::draft::PointSet;
use crate::error::Result;
use crate::fit::CurveFitter;
use crate::geometry::{diagonal_point, midpoint, perpendicular_angles, polygon_area, Normal};
use crate::point2::Point2;
use crate::point_id::PointId::{self, BackFork, DartLeft, DartPoint, DartRight, A, N};
use crate::NativeFloat;

type Pt = Point2<NativeFloat>;

/// Tension of the back fork curve through 23, back fork, 19 and 21.
const FORK_TENSION: NativeFloat = 0.6;

const FRONT_OUTLINE: [PointId; 8] = [A, N(11), N(8), N(14), N(12), N(13), N(9), N(6)];
const BACK_OUTLINE: [PointId; 10] = [
    N(23),
    BackFork,
    N(19),
    N(21),
    N(24),
    N(26),
    N(29),
    N(27),
    N(28),
    N(30),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeamKind {
    Straight,
    Curved,
    /// The crotch curve of a piece.
    Fork,
    Dart,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Piece {
    Front,
    Back,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seam {
    pub name: String,
    pub kind: SeamKind,
    pub curve: Curve,
}

impl Seam {
    fn new(name: &str, kind: SeamKind, curve: Curve) -> Self {
        Seam {
            name: name.to_owned(),
            kind,
            curve,
        }
    }
}

/// All seams of one piece, in drawing order, plus its outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceLayout {
    pub piece: Piece,
    pub seams: Vec<Seam>,
    outline: Vec<Pt>,
}

impl PieceLayout {
    /// Waistband, fly, inseam, hem, leg side, hip curve and side seam.
    pub fn front(points: &PointSet, fitter: &CurveFitter) -> Result<Self> {
        let p = |id| points.point(id);
        let seams = vec![
            Seam::new("waistband", SeamKind::Curved, fitter.fit(p(A)?, p(N(11))?, -0.2)?),
            Seam::new("fly_line", SeamKind::Straight, fitter.fit_line(p(A)?, p(N(6))?)?),
            Seam::new("fly_curve", SeamKind::Fork, fitter.fit(p(N(6))?, p(N(9))?, 4.5)?),
            Seam::new("inseam", SeamKind::Curved, fitter.fit(p(N(9))?, p(N(13))?, 4.5)?),
            Seam::new("hem", SeamKind::Straight, fitter.fit_line(p(N(13))?, p(N(12))?)?),
            Seam::new("leg_side", SeamKind::Straight, fitter.fit_line(p(N(14))?, p(N(12))?)?),
            Seam::new("hip_curve", SeamKind::Curved, fitter.fit(p(N(11))?, p(N(8))?, 0.75)?),
            Seam::new("side_seam", SeamKind::Straight, fitter.fit_line(p(N(8))?, p(N(14))?)?),
        ];
        Self::assemble(Piece::Front, seams, points, &FRONT_OUTLINE)
    }

    /// Fork curve, waist line, dart, side seam and inside leg down to the hem.
    pub fn back(points: &PointSet, fitter: &CurveFitter) -> Result<Self> {
        let p = |id| points.point(id);
        let fork = [p(N(23))?, p(BackFork)?, p(N(19))?, p(N(21))?];
        let side_control = bowed_midpoint(p(N(26))?, p(N(29))?, 0.3, Normal::Right);
        let inside_control = bowed_midpoint(p(N(23))?, p(N(30))?, 1.2, Normal::Left);
        let hem_control = midpoint(p(N(28))?, p(N(27))?).shift_y(1.0);

        let seams = vec![
            Seam::new("fork_curve", SeamKind::Fork, fitter.fit_through(&fork, FORK_TENSION)?),
            Seam::new("waist_line", SeamKind::Straight, fitter.fit_line(p(N(21))?, p(N(24))?)?),
            Seam::new("dart_centre", SeamKind::Dart, fitter.fit_line(p(N(25))?, p(DartPoint)?)?),
            Seam::new("dart_left", SeamKind::Dart, fitter.fit_line(p(DartPoint)?, p(DartLeft)?)?),
            Seam::new("dart_right", SeamKind::Dart, fitter.fit_line(p(DartPoint)?, p(DartRight)?)?),
            Seam::new("side_seam", SeamKind::Straight, fitter.fit_line(p(N(24))?, p(N(26))?)?),
            Seam::new(
                "side_curve",
                SeamKind::Curved,
                fitter.fit_with_control(p(N(26))?, side_control, p(N(29))?)?,
            ),
            Seam::new("leg_side", SeamKind::Straight, fitter.fit_line(p(N(29))?, p(N(27))?)?),
            Seam::new("inside_leg", SeamKind::Straight, fitter.fit_line(p(N(28))?, p(N(30))?)?),
            Seam::new(
                "inside_leg_curve",
                SeamKind::Curved,
                fitter.fit_with_control(p(N(23))?, inside_control, p(N(30))?)?,
            ),
            Seam::new(
                "hem",
                SeamKind::Curved,
                fitter.fit_with_control(p(N(28))?, hem_control, p(N(27))?)?,
            ),
        ];
        Self::assemble(Piece::Back, seams, points, &BACK_OUTLINE)
    }

    fn assemble(
        piece: Piece,
        seams: Vec<Seam>,
        points: &PointSet,
        outline: &[PointId],
    ) -> Result<Self> {
        let outline = outline
            .iter()
            .map(|&id| points.point(id))
            .collect::<Result<Vec<_>>>()?;
        debug!(?piece, seams = seams.len(), "laid out piece");
        Ok(PieceLayout {
            piece,
            seams,
            outline,
        })
    }

    pub fn seam(&self, name: &str) -> Option<&Seam> {
        self.seams.iter().find(|seam| seam.name == name)
    }

    /// Corner points of the piece, in order around its edge.
    pub fn outline(&self) -> &[Pt] {
        &self.outline
    }

    /// Area enclosed by the outline polygon.
    pub fn outline_area(&self) -> NativeFloat {
        polygon_area(&self.outline)
    }

    /// Bounding box over every seam sample. None for a layout without seams.
    pub fn bounding_box(&self) -> Option<[(NativeFloat, NativeFloat); 2]> {
        self.seams
            .iter()
            .map(|seam| seam.curve.bounding_box())
            .reduce(|[(xmin, xmax), (ymin, ymax)], [(x0, x1), (y0, y1)]| {
                [(xmin.min(x0), xmax.max(x1)), (ymin.min(y0), ymax.max(y1))]
            })
    }
}

/// Control point `offset` away from the midpoint of `p1 -> p2`, placed by
/// [`diagonal_point`] under one of the perpendicular angles. The mirrored x
/// term means this only lies on the true normal for horizontal segments.
fn bowed_midpoint(p1: Pt, p2: Pt, offset: NativeFloat, normal: Normal) -> Pt {
    let angle = perpendicular_angles(p1, p2).toward(normal);
    diagonal_point(midpoint(p1, p2), offset, angle)
}
