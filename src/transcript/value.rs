use serde::{Deserialize, Serialize};

/// A numeric field as it arrives from the transcript file: either a real
/// number or text still to be parsed. Parsing is an explicit step; nothing
/// downstream ever sees a half-parsed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Parse into a finite float. Unparseable text and non-finite values
    /// ("nan", "inf") come back as `None`.
    pub fn parse_decimal(&self) -> Option<f64> {
        let value = match self {
            RawValue::Number(number) => *number,
            RawValue::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Parse as a credit weight: finite and non-negative.
    pub fn parse_credits(&self) -> Option<f64> {
        self.parse_decimal().filter(|credits| *credits >= 0.0)
    }
}

impl From<f64> for RawValue {
    fn from(number: f64) -> Self {
        RawValue::Number(number)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}
