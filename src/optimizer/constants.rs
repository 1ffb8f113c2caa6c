/// Default maximum price ratio (alternative ÷ original) for suggestions.
pub const DEFAULT_MAX_RATIO: f64 = 0.8;

/// Ratio threshold for aggressive auto-substitution.
///
/// Kept strictly below 1.0: no mode ever swaps into a more expensive item.
pub const AGGRESSIVE_MAX_RATIO: f64 = 0.8;

/// Ratio threshold for conservative auto-substitution.
pub const CONSERVATIVE_MAX_RATIO: f64 = 0.6;

/// Minimum absolute savings (currency units) before a conservative swap
/// is applied.
pub const MIN_SAVINGS_FLOOR: f64 = 20.0;

/// Percent rise over baseline that triggers a price alert.
pub const ALERT_INCREASE_THRESHOLD: f64 = 15.0;

/// Maximum cheaper alternatives attached to a single alert.
pub const MAX_ALERT_ALTERNATIVES: usize = 2;

/// Number of recommended swaps surfaced by a list analysis.
pub const TOP_SWAP_COUNT: usize = 3;
