use std::collections::HashSet;

use smart_grocer_rs::catalog::{builtin_catalog, EquivalenceSource, PriceSource, StaticCatalog};
use smart_grocer_rs::models::{Equivalence, MacroProfile, PriceRecord};
use smart_grocer_rs::optimizer::{analyze_list, auto_optimize, find_substitutes, lookup_price};

fn make_equivalence(name: &str, alternatives: &[&str]) -> Equivalence {
    Equivalence {
        name: name.to_string(),
        alternatives: alternatives.iter().map(|a| a.to_string()).collect(),
        macros: MacroProfile {
            protein: 10.0,
            carbs: 10.0,
            fat: 5.0,
            calories: 150.0,
        },
        nutrition_type: "test".to_string(),
    }
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

#[test]
fn test_ratio_one_returns_all_priced_substitutes_without_duplicates() {
    let catalog = builtin_catalog();

    for name in ["paneer", "chicken breast", "quinoa", "salmon", "oats"] {
        let entry = catalog.equivalence(name).unwrap();
        let suggestions = find_substitutes(catalog, name, 1.0);

        let expected: Vec<&String> = entry
            .alternatives
            .iter()
            .filter(|alt| {
                catalog
                    .price(alt)
                    .is_some_and(|p| p.price <= catalog.price(name).unwrap().price)
            })
            .collect();

        let got: HashSet<&str> = suggestions.iter().map(|s| s.alternative.as_str()).collect();
        assert_eq!(got.len(), suggestions.len(), "duplicates for {}", name);
        for alt in expected {
            assert!(got.contains(alt.as_str()), "{} missing {}", name, alt);
        }
    }
}

#[test]
fn test_suggestions_sorted_by_savings() {
    let catalog = builtin_catalog();

    for name in ["paneer", "quinoa", "salmon", "avocado"] {
        let suggestions = find_substitutes(catalog, name, 1.0);
        for pair in suggestions.windows(2) {
            assert!(
                pair[0].savings >= pair[1].savings,
                "unsorted suggestions for {}",
                name
            );
        }
    }
}

#[test]
fn test_absent_ingredient_never_errors() {
    let catalog = builtin_catalog();

    assert!(lookup_price(catalog, "unicorn meat").is_none());
    assert!(find_substitutes(catalog, "unicorn meat", 1.0).is_empty());

    let result = auto_optimize(catalog, &list(&["unicorn meat"]), true);
    assert_eq!(result.optimized, list(&["unicorn meat"]));
    assert!(result.swaps.is_empty());
    assert_eq!(result.total_savings, 0.0);
}

#[test]
fn test_paneer_scenario_against_builtin_tables() {
    let catalog = builtin_catalog();
    let suggestions = find_substitutes(catalog, "paneer", 0.8);

    let tofu = &suggestions[0];
    assert_eq!(tofu.alternative, "tofu");
    assert_eq!(tofu.original_price, 80.0);
    assert_eq!(tofu.alternative_price, 45.0);
    assert_eq!(tofu.savings, 35.0);
    assert_eq!(tofu.savings_percent, 43.75);
}

#[test]
fn test_two_item_analysis_scenario() {
    // Scenario table: chicken breast has only pricier alternatives, so
    // only the paneer swap is recommended.
    let catalog = StaticCatalog::new(
        vec![
            PriceRecord::new("paneer", 80.0, "100g", "blinkit", ""),
            PriceRecord::new("tofu", 45.0, "100g", "bigbasket", ""),
            PriceRecord::new("chicken breast", 35.0, "100g", "blinkit", ""),
            PriceRecord::new("fish fillet", 50.0, "100g", "blinkit", ""),
        ],
        vec![
            make_equivalence("paneer", &["tofu"]),
            make_equivalence("chicken breast", &["tofu", "fish fillet"]),
        ],
    );

    let analysis = analyze_list(
        &catalog,
        &list(&["paneer", "chicken breast"]),
        "weight_loss",
    );

    assert_eq!(analysis.original_cost, 115.0);
    assert_eq!(analysis.optimized_cost, 80.0);
    assert_eq!(analysis.max_savings, 35.0);
    assert_eq!(analysis.recommended.len(), 1);
    assert_eq!(analysis.recommended[0].replacement, "tofu");
}

#[test]
fn test_analyze_list_is_idempotent() {
    let catalog = builtin_catalog();
    let items = list(&["paneer", "quinoa", "salmon"]);

    let first = analyze_list(catalog, &items, "budget");
    let second = analyze_list(catalog, &items, "budget");

    assert_eq!(first.original_cost, second.original_cost);
    assert_eq!(first.optimized_cost, second.optimized_cost);
    assert_eq!(first.max_savings, second.max_savings);
    assert_eq!(first.recommended.len(), second.recommended.len());
}

#[test]
fn test_conservative_mode_respects_savings_floor() {
    let catalog = StaticCatalog::new(
        vec![
            PriceRecord::new("rice", 40.0, "100g", "local", ""),
            PriceRecord::new("millet", 22.0, "100g", "local", ""),
        ],
        vec![make_equivalence("rice", &["millet"])],
    );

    // Ratio 0.55 passes the conservative threshold, but savings of 18
    // stay under the floor of 20.
    let result = auto_optimize(&catalog, &list(&["rice"]), false);
    assert_eq!(result.optimized, list(&["rice"]));
    assert!(result.swaps.is_empty());
}

#[test]
fn test_auto_optimize_positional_correspondence() {
    let catalog = builtin_catalog();
    let items = list(&["oats", "paneer", "unicorn meat", "salmon"]);

    let result = auto_optimize(catalog, &items, true);
    assert_eq!(result.optimized.len(), items.len());
    assert_eq!(result.original, items);
    assert_eq!(result.optimized[2], "unicorn meat");

    // Each applied swap must be cheaper than what it replaced.
    for swap in &result.swaps {
        assert!(swap.savings > 0.0);
    }
}
