use std::collections::HashMap;

use crate::models::{canonical_key, Equivalence, PriceRecord};

/// Read access to current ingredient prices.
pub trait PriceSource {
    /// Get the price record for an ingredient (case-insensitive, trimmed).
    fn price(&self, name: &str) -> Option<&PriceRecord>;

    /// All known price records, in unspecified order.
    fn all_prices(&self) -> Vec<&PriceRecord>;
}

/// Read access to the nutritional-equivalence table.
pub trait EquivalenceSource {
    /// Get the equivalence entry for an ingredient (case-insensitive, trimmed).
    fn equivalence(&self, name: &str) -> Option<&Equivalence>;
}

/// Combined price + equivalence source, the input to every optimizer call.
pub trait Catalog: PriceSource + EquivalenceSource {}

impl<T: PriceSource + EquivalenceSource> Catalog for T {}

/// Immutable in-memory catalog keyed by canonical ingredient name.
///
/// Read-only after construction; a price refresh builds a whole new
/// catalog rather than mutating this one, so concurrent readers never
/// need coordination.
pub struct StaticCatalog {
    prices: HashMap<String, PriceRecord>,
    equivalences: HashMap<String, Equivalence>,
}

impl StaticCatalog {
    /// Build a catalog from record lists.
    ///
    /// Deduplicates by canonical key (last occurrence wins) and drops
    /// price records that fail validation.
    pub fn new(prices: Vec<PriceRecord>, equivalences: Vec<Equivalence>) -> Self {
        let mut price_map = HashMap::new();
        for record in prices {
            if record.is_valid() {
                price_map.insert(record.key(), record);
            }
        }

        let mut equiv_map = HashMap::new();
        for entry in equivalences {
            equiv_map.insert(entry.key(), entry);
        }

        Self {
            prices: price_map,
            equivalences: equiv_map,
        }
    }

    /// Count of priced ingredients.
    pub fn price_count(&self) -> usize {
        self.prices.len()
    }

    /// Count of equivalence entries.
    pub fn equivalence_count(&self) -> usize {
        self.equivalences.len()
    }

    /// Convert back to record lists for JSON serialization.
    pub fn to_records(&self) -> (Vec<PriceRecord>, Vec<Equivalence>) {
        let mut prices: Vec<PriceRecord> = self.prices.values().cloned().collect();
        prices.sort_by(|a, b| a.name.cmp(&b.name));

        let mut equivalences: Vec<Equivalence> = self.equivalences.values().cloned().collect();
        equivalences.sort_by(|a, b| a.name.cmp(&b.name));

        (prices, equivalences)
    }

    /// Build a new catalog with the given price records merged in,
    /// replacing any existing records with the same key.
    pub fn with_updated_prices(&self, updates: Vec<PriceRecord>) -> Self {
        let (mut prices, equivalences) = self.to_records();
        prices.extend(updates);
        Self::new(prices, equivalences)
    }
}

impl PriceSource for StaticCatalog {
    fn price(&self, name: &str) -> Option<&PriceRecord> {
        self.prices.get(&canonical_key(name))
    }

    fn all_prices(&self) -> Vec<&PriceRecord> {
        self.prices.values().collect()
    }
}

impl EquivalenceSource for StaticCatalog {
    fn equivalence(&self, name: &str) -> Option<&Equivalence> {
        self.equivalences.get(&canonical_key(name))
    }
}
