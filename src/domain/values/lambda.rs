use std::fmt;

/// Relevance/diversity trade-off for MMR: 1.0 is pure relevance, 0.0 pure
/// diversity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambda(f64);

impl Lambda {
    pub fn new(value: f64) -> Result<Self, String> {
        if !(0.0..=1.0).contains(&value) {
            return Err(format!(
                "MMR lambda must be between 0.0 and 1.0, got {value}"
            ));
        }
        Ok(Lambda(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Default for Lambda {
    fn default() -> Self {
        Lambda(0.5)
    }
}
