//! Identifiers of the landmark points of a draft.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Stable identifier of one landmark point.
///
/// The numbered points `"0"`..`"30"` follow the order of the drafting
/// instructions; the named ones are the construction helpers that the
/// instructions refer to by role.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PointId {
    /// Numbered landmark, `0..=30`.
    N(u8),
    /// Fly reference on the crotch line.
    FlyRef,
    /// Guide point for the fly curve.
    FlyCurve,
    /// Intermediate anchor of the back fork curve.
    BackFork,
    /// Apex of the back waist dart.
    DartPoint,
    /// Dart leg on the waist line, towards point 21.
    DartLeft,
    /// Dart leg on the waist line, towards point 24.
    DartRight,
    /// Waistband adjustment point.
    A,
}

impl PointId {
    /// Highest numbered landmark.
    pub const MAX_NUMBERED: u8 = 30;

    /// The named (non-numbered) identifiers, in display order.
    pub const NAMED: [PointId; 7] = [
        PointId::FlyRef,
        PointId::FlyCurve,
        PointId::BackFork,
        PointId::DartPoint,
        PointId::DartLeft,
        PointId::DartRight,
        PointId::A,
    ];

    /// Iterator over `"0"`..`"30"`
    pub fn numbered() -> impl Iterator<Item = PointId> {
        (0..=Self::MAX_NUMBERED).map(PointId::N)
    }

    pub fn as_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointId::N(n) => write!(f, "{n}"),
            PointId::FlyRef => f.write_str("fly_ref"),
            PointId::FlyCurve => f.write_str("fly_curve"),
            PointId::BackFork => f.write_str("back_fork"),
            PointId::DartPoint => f.write_str("dart_point"),
            PointId::DartLeft => f.write_str("dart_left"),
            PointId::DartRight => f.write_str("dart_right"),
            PointId::A => f.write_str("A"),
        }
    }
}

impl FromStr for PointId {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = match s {
            "fly_ref" => PointId::FlyRef,
            "fly_curve" => PointId::FlyCurve,
            "back_fork" => PointId::BackFork,
            "dart_point" => PointId::DartPoint,
            "dart_left" => PointId::DartLeft,
            "dart_right" => PointId::DartRight,
            "A" => PointId::A,
            numbered => match numbered.parse::<u8>() {
                Ok(n) if n <= Self::MAX_NUMBERED && n.to_string() == numbered => PointId::N(n),
                _ => return Err(DraftError::Config(format!("unknown point id '{s}'"))),
            },
        };
        Ok(id)
    }
}

impl From<PointId> for String {
    fn from(id: PointId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for PointId {
    type Error = DraftError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
