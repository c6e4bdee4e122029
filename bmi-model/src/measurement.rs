/// Height and weight in SI units, as produced by unit conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    height_m: f64,
    weight_kg: f64,
}

impl Measurement {
    pub fn new(height_m: f64, weight_kg: f64) -> Self {
        Self {
            height_m,
            weight_kg,
        }
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Both quantities are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.height_m.is_finite()
            && self.weight_kg.is_finite()
            && self.height_m > 0.0
            && self.weight_kg > 0.0
    }
}
