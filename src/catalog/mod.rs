pub mod builtin;
pub mod persistence;
pub mod source;

pub use builtin::builtin_catalog;
pub use persistence::{
    import_prices_csv, load_catalog, load_price_history, save_catalog, CatalogFile,
    PriceHistoryTable,
};
pub use source::{Catalog, EquivalenceSource, PriceSource, StaticCatalog};
