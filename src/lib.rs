pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod narrative;
pub mod optimizer;

pub use error::{GrocerError, Result};
pub use models::{Equivalence, PriceRecord, SubstitutionSuggestion};
