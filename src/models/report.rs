use serde::{Deserialize, Serialize};

/// A single candidate swap for one ingredient, with the price delta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionSuggestion {
    pub original: String,
    pub alternative: String,
    pub original_price: f64,
    pub alternative_price: f64,

    /// Absolute savings in currency units (original minus alternative).
    pub savings: f64,

    /// Savings as a percentage of the original price.
    pub savings_percent: f64,

    pub nutrition_type: String,

    /// Source label of the alternative's price.
    pub source: String,
}

/// A swap that was applied (or recommended) for a list item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapRecord {
    pub original: String,
    pub replacement: String,
    pub savings: f64,
    pub savings_percent: f64,
}

impl SwapRecord {
    pub fn from_suggestion(s: &SubstitutionSuggestion) -> Self {
        Self {
            original: s.original.clone(),
            replacement: s.alternative.clone(),
            savings: s.savings,
            savings_percent: s.savings_percent,
        }
    }
}

/// Cost analysis of a grocery list, before and after best-case substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAnalysis {
    pub goal: String,

    pub items: Vec<String>,

    /// Per-item candidate swaps, in input order. Items with no candidates
    /// are omitted.
    pub swaps_by_item: Vec<(String, Vec<SubstitutionSuggestion>)>,

    /// Top swaps across the whole list, by absolute savings.
    pub recommended: Vec<SwapRecord>,

    pub original_cost: f64,
    pub optimized_cost: f64,

    /// Savings if every item takes its best substitute.
    pub max_savings: f64,
}

/// Result of the single-pass auto-substitution transform.
///
/// `optimized` has the same length as `original`, position for position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedList {
    pub original: Vec<String>,
    pub optimized: Vec<String>,
    pub swaps: Vec<SwapRecord>,
    pub total_savings: f64,
    pub aggressive: bool,
}

/// A significant price rise versus the baseline, with mitigation swaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceAlert {
    pub ingredient: String,
    pub baseline_price: f64,
    pub current_price: f64,
    pub increase_percent: f64,
    pub alternatives: Vec<SubstitutionSuggestion>,
}
