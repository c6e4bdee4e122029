use bmi_model::{
    input::{InputField, RawInput},
    measurement::Measurement,
    unit::UnitSystem,
};

use crate::validator::is_numeric_text;

pub const CM_TO_M: f64 = 0.01;
pub const IN_TO_M: f64 = 0.0254;
pub const LBS_TO_KG: f64 = 0.453592;
pub const INCHES_PER_FOOT: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MeasurementError {
    #[error("{0} not provided")]
    Incomplete(InputField),
    #[error("measurement is not a positive number")]
    Invalid,
}

type Result<T> = std::result::Result<T, MeasurementError>;

/// Converts the fields relevant to `unit_system` into meters and kilograms.
///
/// Zero, negative or unparseable values are not rejected while reading the
/// fields; they surface as [`MeasurementError::Invalid`] once the converted
/// measurement fails its positivity check.
pub fn convert(unit_system: UnitSystem, raw_input: &RawInput) -> Result<Measurement> {
    let measurement = match unit_system {
        UnitSystem::Metric => {
            let height_cm = required(raw_input, InputField::HeightCm)?;
            let weight_kg = required(raw_input, InputField::WeightKg)?;
            Measurement::new(parse(height_cm) * CM_TO_M, parse(weight_kg))
        }
        UnitSystem::Imperial => {
            let height_ft = required(raw_input, InputField::HeightFt)?;
            let weight_lbs = required(raw_input, InputField::WeightLbs)?;
            let height_in = match raw_input.get(InputField::HeightIn) {
                "" => 0.0,
                text => parse(text),
            };
            Measurement::new(
                (parse(height_ft) * INCHES_PER_FOOT + height_in) * IN_TO_M,
                parse(weight_lbs) * LBS_TO_KG,
            )
        }
    };

    if measurement.is_valid() {
        Ok(measurement)
    } else {
        Err(MeasurementError::Invalid)
    }
}

fn required(raw_input: &RawInput, field: InputField) -> Result<&str> {
    match raw_input.get(field) {
        "" => Err(MeasurementError::Incomplete(field)),
        text => Ok(text),
    }
}

/// Unparseable text becomes NaN and is caught by the positivity check.
fn parse(text: &str) -> f64 {
    if !is_numeric_text(text) {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}
