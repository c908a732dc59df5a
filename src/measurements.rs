//! The six body measurements a draft is computed from.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DraftError, Result};
use crate::NativeFloat;

/// Body measurements, all in the same unit (centimetres).
///
/// Fields are public so callers can build the set literally; [`Measurements::new`]
/// and [`Measurements::validate`] enforce that every value is finite and positive.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub waist: NativeFloat,
    pub seat: NativeFloat,
    pub body_rise: NativeFloat,
    pub inseam: NativeFloat,
    pub trouser_bottom_width: NativeFloat,
    pub waistband_depth: NativeFloat,
}

/// A measurement outside the range the drafting method is usually applied to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RangeWarning {
    pub name: &'static str,
    pub value: NativeFloat,
    pub min: NativeFloat,
    pub max: NativeFloat,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} is outside the usual range {}..={}",
            self.name, self.value, self.min, self.max
        )
    }
}

/// Usual ranges per measurement, in field order.
const FORM_RANGES: [(NativeFloat, NativeFloat); 6] = [
    (50.0, 200.0),
    (50.0, 200.0),
    (10.0, 50.0),
    (50.0, 120.0),
    (10.0, 50.0),
    (2.0, 10.0),
];

impl Measurements {
    pub fn new(
        waist: NativeFloat,
        seat: NativeFloat,
        body_rise: NativeFloat,
        inseam: NativeFloat,
        trouser_bottom_width: NativeFloat,
        waistband_depth: NativeFloat,
    ) -> Result<Self> {
        let measurements = Measurements {
            waist,
            seat,
            body_rise,
            inseam,
            trouser_bottom_width,
            waistband_depth,
        };
        measurements.validate()?;
        Ok(measurements)
    }

    /// Named values in field order.
    pub fn named(&self) -> [(&'static str, NativeFloat); 6] {
        [
            ("waist", self.waist),
            ("seat", self.seat),
            ("body_rise", self.body_rise),
            ("inseam", self.inseam),
            ("trouser_bottom_width", self.trouser_bottom_width),
            ("waistband_depth", self.waistband_depth),
        ]
    }

    /// Fails on the first value that is not a finite positive number.
    pub fn validate(&self) -> Result<()> {
        match self
            .named()
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            Some((name, value)) => Err(DraftError::InvalidMeasurement { name, value }),
            None => Ok(()),
        }
    }

    /// Values outside the usual form ranges. These still draft; the list is
    /// meant for showing a hint to whoever entered them.
    pub fn check_form_ranges(&self) -> Vec<RangeWarning> {
        self.named()
            .into_iter()
            .zip(FORM_RANGES)
            .filter(|((_, value), (min, max))| value < min || value > max)
            .map(|((name, value), (min, max))| RangeWarning {
                name,
                value,
                min,
                max,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Measurements {
        Measurements::new(100.33, 107.95, 29.21, 86.36, 22.6, 4.0).unwrap()
    }

    #[test]
    fn rejects_non_positive_values() {
        assert_eq!(
            Measurements::new(0.0, 107.95, 29.21, 86.36, 22.6, 4.0),
            Err(DraftError::InvalidMeasurement {
                name: "waist",
                value: 0.0
            })
        );
        assert_eq!(
            Measurements::new(100.0, 107.95, 29.21, 86.36, 22.6, -4.0),
            Err(DraftError::InvalidMeasurement {
                name: "waistband_depth",
                value: -4.0
            })
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = Measurements::new(100.0, f64::NAN, 29.21, 86.36, 22.6, 4.0).unwrap_err();
        assert!(matches!(
            err,
            DraftError::InvalidMeasurement { name: "seat", .. }
        ));
        assert!(Measurements::new(100.0, 100.0, f64::INFINITY, 86.36, 22.6, 4.0).is_err());
    }

    #[test]
    fn reference_is_inside_form_ranges() {
        assert!(reference().check_form_ranges().is_empty());
    }

    #[test]
    fn out_of_range_values_only_warn() {
        let m = Measurements::new(30.0, 107.95, 29.21, 130.0, 22.6, 4.0).unwrap();
        let warnings = m.check_form_ranges();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].name, "waist");
        assert_eq!(warnings[1].name, "inseam");
        assert_eq!(
            warnings[1].to_string(),
            "inseam = 130 is outside the usual range 50..=120"
        );
    }
}
