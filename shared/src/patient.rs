use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::RangeInclusive;

pub const AGE_RANGE: RangeInclusive<u32> = 18..=100;
pub const BMI_RANGE: RangeInclusive<f64> = 15.0..=50.0;
pub const GLUCOSE_RANGE: RangeInclusive<u32> = 70..=300;
pub const BLOOD_PRESSURE_RANGE: RangeInclusive<u32> = 90..=200;
pub const INSULIN_RANGE: RangeInclusive<u32> = 20..=200;
pub const FAMILY_HISTORY_RANGE: RangeInclusive<u8> = 0..=1;
/// Shared by physical activity, diet and stress sliders.
pub const SCALE_RANGE: RangeInclusive<u8> = 1..=5;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },
}

/// Patient attributes fed to the diabetes predictor.
///
/// Field names match the predictor's wire format.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PatientRecord {
    pub age: u32,
    pub bmi: f64,
    pub glucose_level: u32,
    pub blood_pressure: u32,
    pub insulin_level: u32,
    /// 1 when a parent or sibling has diabetes.
    pub family_history: u8,
    pub physical_activity: u8,
    pub diet_score: u8,
    pub stress_level: u8,
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self {
            age: 45,
            bmi: 25.0,
            glucose_level: 100,
            blood_pressure: 120,
            insulin_level: 80,
            family_history: 0,
            physical_activity: 3,
            diet_score: 3,
            stress_level: 3,
        }
    }
}

fn check<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> Result<(), RecordError>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(RecordError::OutOfRange {
            field,
            value: value.to_string(),
            min: range.start().to_string(),
            max: range.end().to_string(),
        })
    }
}

impl PatientRecord {
    /// Checks every field against the ranges the input form offers.
    /// Reports the first offending field.
    pub fn validate(&self) -> Result<(), RecordError> {
        check("age", self.age, &AGE_RANGE)?;
        // NaN fails `contains`, so it is rejected here as well.
        check("bmi", self.bmi, &BMI_RANGE)?;
        check("glucose_level", self.glucose_level, &GLUCOSE_RANGE)?;
        check("blood_pressure", self.blood_pressure, &BLOOD_PRESSURE_RANGE)?;
        check("insulin_level", self.insulin_level, &INSULIN_RANGE)?;
        check("family_history", self.family_history, &FAMILY_HISTORY_RANGE)?;
        check("physical_activity", self.physical_activity, &SCALE_RANGE)?;
        check("diet_score", self.diet_score, &SCALE_RANGE)?;
        check("stress_level", self.stress_level, &SCALE_RANGE)?;
        Ok(())
    }

    pub fn has_family_history(&self) -> bool {
        self.family_history == 1
    }
}
