use crate::catalog::{Catalog, PriceSource};
use crate::models::{PriceRecord, SubstitutionSuggestion};

/// Current price of an ingredient, if the source knows it.
///
/// Matching is case-insensitive with surrounding whitespace trimmed;
/// an unknown name is a plain miss, never an error.
pub fn lookup_price<'a>(source: &'a impl PriceSource, name: &str) -> Option<&'a PriceRecord> {
    source.price(name)
}

/// Nutritionally equivalent alternatives at or below `max_ratio` of the
/// original price, sorted by absolute savings descending.
///
/// Returns an empty list when the ingredient is missing from either
/// table; alternatives without a price entry are skipped. The sort is
/// stable, so equal-savings candidates keep their equivalence-list order.
pub fn find_substitutes(
    catalog: &impl Catalog,
    name: &str,
    max_ratio: f64,
) -> Vec<SubstitutionSuggestion> {
    let Some(entry) = catalog.equivalence(name) else {
        return Vec::new();
    };
    let Some(original) = catalog.price(name) else {
        return Vec::new();
    };

    let mut suggestions = Vec::new();

    for alt in &entry.alternatives {
        let Some(alt_price) = catalog.price(alt) else {
            continue;
        };

        let ratio = alt_price.price / original.price;
        if ratio > max_ratio {
            continue;
        }

        let savings = original.price - alt_price.price;
        suggestions.push(SubstitutionSuggestion {
            original: entry.name.clone(),
            alternative: alt.clone(),
            original_price: original.price,
            alternative_price: alt_price.price,
            savings,
            savings_percent: (savings / original.price) * 100.0,
            nutrition_type: entry.nutrition_type.clone(),
            source: alt_price.source.clone(),
        });
    }

    suggestions.sort_by(|a, b| {
        b.savings
            .partial_cmp(&a.savings)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    suggestions
}
