use bmi_model::{
    measurement::Measurement,
    result::{BmiCategory, BmiResult},
};

pub const UNDERWEIGHT_BELOW: f64 = 18.5;
pub const OVERWEIGHT_FROM: f64 = 25.0;
pub const OBESE_FROM: f64 = 30.0;

/// Weight in kilograms divided by the square of height in meters.
/// Expects a measurement that passed [`Measurement::is_valid`].
pub fn compute_bmi(measurement: &Measurement) -> f64 {
    measurement.weight_kg() / (measurement.height_m() * measurement.height_m())
}

/// Each threshold belongs to the upper category.
pub fn classify(bmi: f64) -> BmiResult {
    let category = if bmi < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < OVERWEIGHT_FROM {
        BmiCategory::Normal
    } else if bmi < OBESE_FROM {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    BmiResult::new(bmi, category)
}
