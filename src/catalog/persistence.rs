use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::StaticCatalog;
use crate::error::Result;
use crate::models::{canonical_key, Equivalence, PriceRecord};

/// On-disk catalog document.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub prices: Vec<PriceRecord>,

    #[serde(default)]
    pub equivalences: Vec<Equivalence>,
}

/// Load a catalog from a JSON file.
///
/// Invalid price records are dropped and duplicates dedup last-wins,
/// both handled by the catalog constructor.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<StaticCatalog> {
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content)?;
    Ok(StaticCatalog::new(file.prices, file.equivalences))
}

/// Save a catalog to a JSON file, records sorted by name.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &StaticCatalog) -> Result<()> {
    let (prices, equivalences) = catalog.to_records();
    let file = CatalogFile {
        prices,
        equivalences,
    };
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read refreshed price records from a CSV file.
///
/// Expected header: `name,price,unit,source,last_updated`. Records that
/// fail validation are skipped; the count of skipped rows is returned
/// alongside the good records.
pub fn import_prices_csv<P: AsRef<Path>>(path: P) -> Result<(Vec<PriceRecord>, usize)> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    let mut skipped = 0;

    for row in reader.deserialize() {
        let record: PriceRecord = row?;
        if record.is_valid() {
            records.push(record);
        } else {
            skipped += 1;
        }
    }

    Ok((records, skipped))
}

/// Baseline prices for alert scanning, keyed by canonical name.
///
/// This stands in for a real price-history store; the scanner only ever
/// asks it for a baseline, so any backing source can replace it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PriceHistoryTable {
    baselines: HashMap<String, f64>,
}

impl PriceHistoryTable {
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        let baselines = pairs
            .iter()
            .map(|(name, price)| (canonical_key(name), *price))
            .collect();
        Self { baselines }
    }

    /// Baseline price for an ingredient, if tracked.
    pub fn baseline(&self, name: &str) -> Option<f64> {
        self.baselines.get(&canonical_key(name)).copied()
    }

    /// Names of all tracked ingredients, sorted for stable output.
    pub fn tracked(&self) -> Vec<String> {
        let mut names: Vec<String> = self.baselines.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }
}

/// Load a baseline table from a JSON map of name to price.
pub fn load_price_history<P: AsRef<Path>>(path: P) -> Result<PriceHistoryTable> {
    let content = fs::read_to_string(path)?;
    let raw: HashMap<String, f64> = serde_json::from_str(&content)?;
    let baselines = raw
        .into_iter()
        .map(|(name, price)| (canonical_key(&name), price))
        .collect();
    Ok(PriceHistoryTable { baselines })
}
