use serde::{Deserialize, Serialize};

/// Canonical lookup key for an ingredient name: trimmed and lowercased.
pub fn canonical_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Macro profile per reference serving (grams, kcal).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
}

/// An ingredient and its nutritionally similar alternatives.
///
/// Alternative order is meaningful: equal-savings candidates keep it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equivalence {
    pub name: String,

    pub alternatives: Vec<String>,

    pub macros: MacroProfile,

    /// Category tag, e.g. "lean_protein" or "complex_carbs".
    pub nutrition_type: String,
}

impl Equivalence {
    /// Canonical key for lookups (trimmed, lowercase name).
    pub fn key(&self) -> String {
        canonical_key(&self.name)
    }
}

/// Current unit price of an ingredient with provenance metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    pub name: String,

    /// Price in currency units per `unit`. Must be positive.
    pub price: f64,

    /// Reference unit, e.g. "100g", "100ml", "1pc".
    pub unit: String,

    /// Where the price was observed, e.g. a vendor name.
    pub source: String,

    #[serde(default)]
    pub last_updated: String,
}

impl PriceRecord {
    pub fn new(name: &str, price: f64, unit: &str, source: &str, last_updated: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            unit: unit.to_string(),
            source: source.to_string(),
            last_updated: last_updated.to_string(),
        }
    }

    /// Canonical key for lookups (trimmed, lowercase name).
    pub fn key(&self) -> String {
        canonical_key(&self.name)
    }

    /// Basic validation: a named ingredient with a positive price.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.price > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key("  Paneer "), "paneer");
        assert_eq!(canonical_key("Chicken Breast"), "chicken breast");
    }

    #[test]
    fn test_price_record_validation() {
        let rec = PriceRecord::new("tofu", 45.0, "100g", "bigbasket", "2026-08-01");
        assert!(rec.is_valid());

        let zero = PriceRecord::new("tofu", 0.0, "100g", "bigbasket", "");
        assert!(!zero.is_valid());

        let unnamed = PriceRecord::new("  ", 45.0, "100g", "bigbasket", "");
        assert!(!unnamed.is_valid());
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let rec = PriceRecord::new("Tofu", 45.0, "100g", "bigbasket", "");
        assert_eq!(rec.key(), "tofu");
    }
}
