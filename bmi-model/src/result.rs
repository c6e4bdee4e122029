use std::fmt;

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Lower bound of the gauge scale.
pub const GAUGE_MIN_BMI: f64 = 10.0;
/// Upper bound of the gauge scale.
pub const GAUGE_MAX_BMI: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BmiCategory {
    Underweight,
    #[strum(serialize = "Normal Weight")]
    #[cfg_attr(feature = "serde", serde(rename = "Normal Weight"))]
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn color(&self) -> ColorToken {
        match self {
            BmiCategory::Underweight => ColorToken::Blue,
            BmiCategory::Normal => ColorToken::Green,
            BmiCategory::Overweight => ColorToken::Yellow,
            BmiCategory::Obese => ColorToken::Red,
        }
    }
}

/// Palette key for a category. Concrete colors are chosen by whoever renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum ColorToken {
    Blue,
    Green,
    Yellow,
    Red,
}

/// Outcome of one successful computation. Superseded, never mutated.
/// Only serializable: deserializing could pair a color with the wrong category.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BmiResult {
    bmi: f64,
    category: BmiCategory,
    color: ColorToken,
}

impl BmiResult {
    /// The color is always the one mapped from `category`.
    pub fn new(bmi: f64, category: BmiCategory) -> Self {
        Self {
            bmi,
            category,
            color: category.color(),
        }
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn category(&self) -> BmiCategory {
        self.category
    }

    pub fn color(&self) -> ColorToken {
        self.color
    }

    /// Position on the radial gauge in percent. The BMI is clamped to
    /// [`GAUGE_MIN_BMI`, `GAUGE_MAX_BMI`] before scaling to 0..=100.
    pub fn gauge_percent(&self) -> f64 {
        let visual = self.bmi.clamp(GAUGE_MIN_BMI, GAUGE_MAX_BMI);
        (visual - GAUGE_MIN_BMI) / (GAUGE_MAX_BMI - GAUGE_MIN_BMI) * 100.0
    }
}

impl fmt::Display for BmiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ({})", self.bmi, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels() {
        let test_data = [
            (BmiCategory::Underweight, "Underweight"),
            (BmiCategory::Normal, "Normal Weight"),
            (BmiCategory::Overweight, "Overweight"),
            (BmiCategory::Obese, "Obese"),
        ];

        for (i, (category, label)) in test_data.into_iter().enumerate() {
            assert_eq!(category.to_string(), label, "Test case #{}", i);
            assert_eq!(label.parse::<BmiCategory>(), Ok(category), "Test case #{}", i);
        }
    }

    #[test]
    fn result_color_follows_category() {
        let result = BmiResult::new(31.2, BmiCategory::Obese);
        assert_eq!(result.color(), ColorToken::Red);
        assert_eq!(result.color().as_ref(), "red");
    }

    #[test]
    fn gauge_percent_is_clamped() {
        let test_data = [(5.0, 0.0), (10.0, 0.0), (25.0, 50.0), (40.0, 100.0), (55.0, 100.0)];

        for (i, (bmi, expected)) in test_data.into_iter().enumerate() {
            let result = BmiResult::new(bmi, BmiCategory::Normal);
            assert!(
                (result.gauge_percent() - expected).abs() < 1e-9,
                "Test case #{}",
                i
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_labels_and_color_token() {
        let json = serde_json::to_value(BmiResult::new(22.5, BmiCategory::Normal)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "bmi": 22.5, "category": "Normal Weight", "color": "green" })
        );
        assert_eq!(
            serde_json::from_value::<BmiCategory>(json["category"].clone()).unwrap(),
            BmiCategory::Normal
        );
    }

    #[test]
    fn displays_one_decimal() {
        let result = BmiResult::new(22.857, BmiCategory::Normal);
        assert_eq!(result.to_string(), "22.9 (Normal Weight)");
    }
}
