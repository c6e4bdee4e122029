use strum::{Display, EnumIter};

/// One of the five textual fields of [`RawInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum InputField {
    #[strum(serialize = "height (cm)")]
    HeightCm,
    #[strum(serialize = "weight (kg)")]
    WeightKg,
    #[strum(serialize = "height (ft)")]
    HeightFt,
    #[strum(serialize = "height (in)")]
    HeightIn,
    #[strum(serialize = "weight (lbs)")]
    WeightLbs,
}

/// Text exactly as the user typed it. An empty string means "not yet provided".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RawInput {
    pub height_cm: String,
    pub weight_kg: String,
    pub height_ft: String,
    pub height_in: String,
    pub weight_lbs: String,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::HeightCm => &self.height_cm,
            InputField::WeightKg => &self.weight_kg,
            InputField::HeightFt => &self.height_ft,
            InputField::HeightIn => &self.height_in,
            InputField::WeightLbs => &self.weight_lbs,
        }
    }

    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        let slot = match field {
            InputField::HeightCm => &mut self.height_cm,
            InputField::WeightKg => &mut self.weight_kg,
            InputField::HeightFt => &mut self.height_ft,
            InputField::HeightIn => &mut self.height_in,
            InputField::WeightLbs => &mut self.weight_lbs,
        };
        *slot = value.into();
    }

    pub fn is_provided(&self, field: InputField) -> bool {
        !self.get(field).is_empty()
    }

    pub fn with(mut self, field: InputField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}
