use crate::catalog::{Catalog, PriceHistoryTable};
use crate::models::PriceAlert;
use crate::optimizer::constants::{
    ALERT_INCREASE_THRESHOLD, DEFAULT_MAX_RATIO, MAX_ALERT_ALTERNATIVES,
};
use crate::optimizer::substitutes::find_substitutes;

/// Scan tracked ingredients for prices that rose past the alert
/// threshold versus their baseline.
///
/// Each alert carries up to two cheaper alternatives, measured against
/// the current (spiked) price. Ingredients missing from the catalog or
/// with a non-positive baseline are skipped.
pub fn scan_price_alerts(catalog: &impl Catalog, history: &PriceHistoryTable) -> Vec<PriceAlert> {
    let mut alerts = Vec::new();

    for name in history.tracked() {
        let Some(current) = catalog.price(&name) else {
            continue;
        };
        let Some(baseline) = history.baseline(&name) else {
            continue;
        };
        if baseline <= 0.0 {
            continue;
        }

        let increase_percent = ((current.price - baseline) / baseline) * 100.0;
        if increase_percent < ALERT_INCREASE_THRESHOLD {
            continue;
        }

        let mut alternatives = find_substitutes(catalog, &name, DEFAULT_MAX_RATIO);
        alternatives.truncate(MAX_ALERT_ALTERNATIVES);

        alerts.push(PriceAlert {
            ingredient: current.name.clone(),
            baseline_price: baseline,
            current_price: current.price,
            increase_percent,
            alternatives,
        });
    }

    alerts
}
