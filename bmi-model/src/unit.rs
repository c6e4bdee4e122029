use strum::{Display, EnumIter, EnumString};

/// Selects which raw input fields are meaningful and how they are converted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}
