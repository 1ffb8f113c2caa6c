pub mod alerts;
pub mod constants;
pub mod list;
pub mod substitutes;

pub use alerts::scan_price_alerts;
pub use constants::*;
pub use list::{analyze_list, auto_optimize};
pub use substitutes::{find_substitutes, lookup_price};
