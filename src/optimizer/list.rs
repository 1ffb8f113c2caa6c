use crate::catalog::Catalog;
use crate::models::{ListAnalysis, OptimizedList, SwapRecord};
use crate::optimizer::constants::{
    AGGRESSIVE_MAX_RATIO, CONSERVATIVE_MAX_RATIO, DEFAULT_MAX_RATIO, MIN_SAVINGS_FLOOR,
    TOP_SWAP_COUNT,
};
use crate::optimizer::substitutes::find_substitutes;

/// Cost out a grocery list and collect its best candidate swaps.
///
/// Totals cover priced items only; unknown items contribute nothing to
/// either cost. The optimized total assumes every item takes its best
/// substitute at the default ratio. An empty list yields the zero result.
pub fn analyze_list(catalog: &impl Catalog, items: &[String], goal: &str) -> ListAnalysis {
    let mut swaps_by_item = Vec::new();
    let mut original_cost = 0.0;
    let mut optimized_cost = 0.0;

    for item in items {
        let price = catalog.price(item).map(|p| p.price);
        if let Some(p) = price {
            original_cost += p;
        }

        let suggestions = find_substitutes(catalog, item, DEFAULT_MAX_RATIO);
        if suggestions.is_empty() {
            if let Some(p) = price {
                optimized_cost += p;
            }
        } else {
            optimized_cost += suggestions[0].alternative_price;
            swaps_by_item.push((item.clone(), suggestions));
        }
    }

    let mut recommended: Vec<SwapRecord> = swaps_by_item
        .iter()
        .filter_map(|(_, suggestions)| suggestions.first())
        .map(SwapRecord::from_suggestion)
        .collect();

    recommended.sort_by(|a, b| {
        b.savings
            .partial_cmp(&a.savings)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    recommended.truncate(TOP_SWAP_COUNT);

    ListAnalysis {
        goal: goal.to_string(),
        items: items.to_vec(),
        swaps_by_item,
        recommended,
        original_cost,
        optimized_cost,
        max_savings: original_cost - optimized_cost,
    }
}

/// Replace each item with its best substitute where the mode's policy
/// allows, keeping positional correspondence.
///
/// Aggressive mode swaps whenever any candidate exists within its ratio;
/// conservative mode also requires the savings floor. Both ratios sit
/// below 1.0, so a swap never costs more than the original.
pub fn auto_optimize(catalog: &impl Catalog, items: &[String], aggressive: bool) -> OptimizedList {
    let max_ratio = if aggressive {
        AGGRESSIVE_MAX_RATIO
    } else {
        CONSERVATIVE_MAX_RATIO
    };

    let mut optimized = Vec::with_capacity(items.len());
    let mut swaps = Vec::new();
    let mut total_savings = 0.0;

    for item in items {
        let suggestions = find_substitutes(catalog, item, max_ratio);

        match suggestions.first() {
            Some(best) if aggressive || best.savings > MIN_SAVINGS_FLOOR => {
                optimized.push(best.alternative.clone());
                total_savings += best.savings;
                swaps.push(SwapRecord::from_suggestion(best));
            }
            _ => optimized.push(item.clone()),
        }
    }

    OptimizedList {
        original: items.to_vec(),
        optimized,
        swaps,
        total_savings,
        aggressive,
    }
}
