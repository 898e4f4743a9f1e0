//! Postal address model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A street address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Address {
    pub id: Option<Uuid>,
    pub street_address_1: String,
    pub street_address_2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl Address {
    /// Address carrying only a postal code, used for ZIP-to-ZIP planning
    pub fn from_postal_code(postal_code: impl Into<String>) -> Self {
        Self {
            postal_code: postal_code.into(),
            ..Default::default()
        }
    }

    /// Single-line rendering used as a geocoding query
    pub fn line_format(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(5);
        for part in [
            Some(self.street_address_1.as_str()),
            self.street_address_2.as_deref(),
            Some(self.city.as_str()),
            Some(self.state.as_str()),
            Some(self.postal_code.as_str()),
        ]
        .into_iter()
        .flatten()
        {
            if !part.trim().is_empty() {
                parts.push(part.trim());
            }
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format_skips_empty_parts() {
        let address = Address {
            street_address_1: "123 Any St".to_string(),
            street_address_2: Some(" ".to_string()),
            city: "Tampa".to_string(),
            state: "FL".to_string(),
            postal_code: "33633".to_string(),
            ..Default::default()
        };

        assert_eq!(address.line_format(), "123 Any St, Tampa, FL, 33633");
        assert_eq!(Address::from_postal_code("39574").line_format(), "39574");
    }
}
