pub mod classifier;
pub mod converter;
pub mod validator;

use bmi_model::{input::RawInput, result::BmiResult, unit::UnitSystem};
use log::debug;

pub use classifier::{classify, compute_bmi};
pub use converter::{convert, MeasurementError};
pub use validator::is_numeric_text;

/// Validated, converted and classified result for the given inputs, or `None`
/// while the inputs don't describe a usable measurement.
///
/// Depends on nothing but its arguments, so calling it twice with the same
/// inputs yields identical results.
pub fn compute_result(unit_system: UnitSystem, raw_input: &RawInput) -> Option<BmiResult> {
    match convert(unit_system, raw_input) {
        Ok(measurement) => {
            let bmi = compute_bmi(&measurement);
            // Extreme but positive inputs can still overflow or underflow here.
            if bmi.is_finite() && bmi > 0.0 {
                Some(classify(bmi))
            } else {
                debug!("Discarding out of range BMI {} for {} input", bmi, unit_system);
                None
            }
        }
        Err(e) => {
            debug!("No result for {} input: {}", unit_system, e);
            None
        }
    }
}
