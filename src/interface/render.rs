use crate::models::{ListAnalysis, OptimizedList, PriceAlert, PriceRecord, SubstitutionSuggestion};
use crate::narrative::{render_narrative, Narrative};

/// Display a single price record.
pub fn display_price(record: &PriceRecord) {
    println!(
        "{}: ₹{:.0} per {} ({}, updated {})",
        record.name, record.price, record.unit, record.source,
        if record.last_updated.is_empty() {
            "unknown"
        } else {
            record.last_updated.as_str()
        }
    );
}

/// Display substitute suggestions for one ingredient.
pub fn display_suggestions(name: &str, suggestions: &[SubstitutionSuggestion]) {
    if suggestions.is_empty() {
        println!("No cheaper substitutes found for '{}'.", name);
        return;
    }

    println!();
    println!("=== Substitutes for {} ===", name);
    println!();

    let max_name_len = suggestions
        .iter()
        .map(|s| s.alternative.len())
        .max()
        .unwrap_or(10);

    for (i, s) in suggestions.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - ₹{:>4.0} (was ₹{:.0}) | save ₹{:.0} ({:.1}%) via {}",
            i + 1,
            s.alternative,
            s.alternative_price,
            s.original_price,
            s.savings,
            s.savings_percent,
            s.source,
            width = max_name_len
        );
    }

    println!();
}

/// Display a list analysis with its narrative summary.
pub fn display_analysis(analysis: &ListAnalysis, narrative: &Narrative) {
    println!();
    println!("=== Grocery List Analysis ({}) ===", analysis.goal);
    println!();
    println!("Items: {}", analysis.items.join(", "));
    println!("Original cost:  ₹{:.0}", analysis.original_cost);
    println!("Optimized cost: ₹{:.0}", analysis.optimized_cost);
    println!("Max savings:    ₹{:.0}", analysis.max_savings);
    println!();
    print!("{}", render_narrative(narrative));
    println!();
}

/// Display the result of an auto-optimization run.
pub fn display_optimized(result: &OptimizedList) {
    println!();
    println!(
        "=== Optimized List ({} mode) ===",
        if result.aggressive {
            "aggressive"
        } else {
            "conservative"
        }
    );
    println!();

    for (original, optimized) in result.original.iter().zip(&result.optimized) {
        if original == optimized {
            println!("  {}", original);
        } else {
            println!("  {} -> {}", original, optimized);
        }
    }

    println!();
    println!("Swaps made: {}", result.swaps.len());
    for swap in &result.swaps {
        println!(
            "  {} -> {} (save ₹{:.0}, {:.1}%)",
            swap.original, swap.replacement, swap.savings, swap.savings_percent
        );
    }
    println!("Total savings: ₹{:.0}", result.total_savings);
    println!();
}

/// Display price alerts with mitigation suggestions.
pub fn display_alerts(alerts: &[PriceAlert]) {
    if alerts.is_empty() {
        println!("No price alerts. All tracked prices are near their baselines.");
        return;
    }

    println!();
    println!("=== Price Alerts ({}) ===", alerts.len());
    println!();

    for alert in alerts {
        println!(
            "{}: ₹{:.0} -> ₹{:.0} (+{:.0}%)",
            alert.ingredient, alert.baseline_price, alert.current_price, alert.increase_percent
        );

        if alert.alternatives.is_empty() {
            println!("  no cheaper alternatives known");
        }
        for alt in &alert.alternatives {
            println!(
                "  consider {} at ₹{:.0} (save ₹{:.0})",
                alt.alternative, alt.alternative_price, alt.savings
            );
        }
        println!();
    }
}
