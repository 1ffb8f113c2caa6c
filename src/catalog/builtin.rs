use std::sync::LazyLock;

use crate::catalog::StaticCatalog;
use crate::models::{Equivalence, MacroProfile, PriceRecord};

/// Snapshot date of the bundled price data.
const SNAPSHOT_DATE: &str = "2026-08-01";

fn price(name: &str, price: f64, unit: &str, source: &str) -> PriceRecord {
    PriceRecord::new(name, price, unit, source, SNAPSHOT_DATE)
}

fn equivalence(
    name: &str,
    alternatives: &[&str],
    protein: f64,
    carbs: f64,
    fat: f64,
    calories: f64,
    nutrition_type: &str,
) -> Equivalence {
    Equivalence {
        name: name.to_string(),
        alternatives: alternatives.iter().map(|a| a.to_string()).collect(),
        macros: MacroProfile {
            protein,
            carbs,
            fat,
            calories,
        },
        nutrition_type: nutrition_type.to_string(),
    }
}

/// Bundled price table, INR per 100g/100ml unless noted.
fn builtin_prices() -> Vec<PriceRecord> {
    vec![
        price("paneer", 80.0, "100g", "blinkit"),
        price("tofu", 45.0, "100g", "bigbasket"),
        price("cottage cheese", 60.0, "100g", "blinkit"),
        price("greek yogurt", 70.0, "100g", "blinkit"),
        price("boiled eggs", 10.0, "1pc", "local"),
        price("chicken breast", 35.0, "100g", "blinkit"),
        price("turkey breast", 55.0, "100g", "bigbasket"),
        price("fish fillet", 50.0, "100g", "blinkit"),
        price("chickpeas", 12.0, "100g", "local"),
        price("avocado", 150.0, "1pc", "blinkit"),
        price("peanut butter", 40.0, "100g", "bigbasket"),
        price("almonds", 90.0, "100g", "blinkit"),
        price("olive oil", 60.0, "100ml", "bigbasket"),
        price("flaxseeds", 30.0, "100g", "local"),
        price("quinoa", 80.0, "100g", "bigbasket"),
        price("brown rice", 25.0, "100g", "blinkit"),
        price("oats", 20.0, "100g", "blinkit"),
        price("daliya", 18.0, "100g", "local"),
        price("whole wheat", 15.0, "100g", "local"),
        price("walnuts", 120.0, "100g", "blinkit"),
        price("cashews", 100.0, "100g", "blinkit"),
        price("peanuts", 25.0, "100g", "local"),
        price("sunflower seeds", 35.0, "100g", "local"),
        price("salmon", 180.0, "100g", "bigbasket"),
        price("mackerel", 80.0, "100g", "blinkit"),
        price("sardines", 60.0, "100g", "blinkit"),
        price("tuna", 100.0, "100g", "bigbasket"),
        price("chia seeds", 50.0, "100g", "bigbasket"),
        price("hung curd", 55.0, "100g", "blinkit"),
        price("kale", 40.0, "100g", "bigbasket"),
        price("methi", 15.0, "100g", "local"),
        price("spinach", 20.0, "100g", "local"),
        price("broccoli", 35.0, "100g", "blinkit"),
        price("cabbage", 12.0, "100g", "local"),
        price("sweet potato", 30.0, "100g", "blinkit"),
        price("regular potato", 15.0, "100g", "local"),
        price("pumpkin", 18.0, "100g", "local"),
        price("carrots", 20.0, "100g", "local"),
        price("beetroot", 22.0, "100g", "local"),
    ]
}

/// Bundled equivalence table. Alternative order doubles as the tie-break
/// order for equal-savings candidates.
fn builtin_equivalences() -> Vec<Equivalence> {
    vec![
        equivalence(
            "paneer",
            &["tofu", "cottage cheese", "greek yogurt", "boiled eggs"],
            18.0,
            1.0,
            20.0,
            265.0,
            "high_protein_dairy",
        ),
        equivalence(
            "chicken breast",
            &["turkey breast", "fish fillet", "tofu", "paneer", "chickpeas"],
            31.0,
            0.0,
            3.6,
            165.0,
            "lean_protein",
        ),
        equivalence(
            "avocado",
            &["peanut butter", "almonds", "olive oil", "flaxseeds"],
            2.0,
            9.0,
            15.0,
            160.0,
            "healthy_fats",
        ),
        equivalence(
            "quinoa",
            &["brown rice", "oats", "daliya", "whole wheat"],
            8.0,
            39.0,
            3.0,
            222.0,
            "complex_carbs",
        ),
        equivalence(
            "almonds",
            &["walnuts", "cashews", "peanuts", "sunflower seeds"],
            21.0,
            22.0,
            49.0,
            579.0,
            "nuts_healthy_fats",
        ),
        equivalence(
            "salmon",
            &["mackerel", "sardines", "tuna", "flaxseeds", "chia seeds"],
            25.0,
            0.0,
            13.0,
            208.0,
            "omega3_protein",
        ),
        equivalence(
            "greek yogurt",
            &["hung curd", "paneer", "tofu", "cottage cheese"],
            10.0,
            4.0,
            5.0,
            100.0,
            "probiotic_protein",
        ),
        equivalence(
            "spinach",
            &["kale", "methi", "broccoli", "cabbage"],
            3.0,
            4.0,
            0.0,
            23.0,
            "leafy_greens",
        ),
        equivalence(
            "sweet potato",
            &["regular potato", "pumpkin", "carrots", "beetroot"],
            2.0,
            20.0,
            0.0,
            86.0,
            "complex_carbs_vitamins",
        ),
        equivalence(
            "oats",
            &["daliya", "quinoa", "brown rice", "whole wheat"],
            17.0,
            66.0,
            7.0,
            389.0,
            "fiber_complex_carbs",
        ),
    ]
}

static BUILTIN: LazyLock<StaticCatalog> =
    LazyLock::new(|| StaticCatalog::new(builtin_prices(), builtin_equivalences()));

/// The bundled catalog, built once per process.
pub fn builtin_catalog() -> &'static StaticCatalog {
    &BUILTIN
}
