use crate::result::{BmiCategory, BmiResult};

/// What the advice collaborator is asked about.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdviceRequest {
    pub bmi: f64,
    pub category: BmiCategory,
}

impl From<&BmiResult> for AdviceRequest {
    fn from(result: &BmiResult) -> Self {
        Self {
            bmi: result.bmi(),
            category: result.category(),
        }
    }
}

/// Short summary plus ordered tips produced by the advice collaborator.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HealthAdvice {
    pub summary: String,
    pub tips: Vec<String>,
}

impl HealthAdvice {
    pub fn new(summary: impl Into<String>, tips: Vec<String>) -> Self {
        Self {
            summary: summary.into(),
            tips,
        }
    }
}
