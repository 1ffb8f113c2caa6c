pub mod ingredient;
pub mod report;

pub use ingredient::{canonical_key, Equivalence, MacroProfile, PriceRecord};
pub use report::{ListAnalysis, OptimizedList, PriceAlert, SubstitutionSuggestion, SwapRecord};
