use serde::Serialize;

/// Productivity estimate in `[0, 100]`. Out-of-range inputs are clamped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ProductivityScore(f64);

impl ProductivityScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn confidence(&self) -> f64 {
        self.0 / Self::MAX
    }
}

impl From<f64> for ProductivityScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
