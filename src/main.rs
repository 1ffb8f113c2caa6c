use clap::Parser;

use smart_grocer_rs::catalog::{
    builtin_catalog, import_prices_csv, load_catalog, load_price_history, save_catalog,
    PriceSource, StaticCatalog,
};
use smart_grocer_rs::cli::{Cli, Command};
use smart_grocer_rs::error::{GrocerError, Result};
use smart_grocer_rs::interface::{
    display_alerts, display_analysis, display_optimized, display_price, display_suggestions,
    prompt_goal, prompt_grocery_list, prompt_yes_no, suggest_similar,
};
use smart_grocer_rs::narrative::{summarize, NarrativeCache};
use smart_grocer_rs::optimizer::{
    analyze_list, auto_optimize, find_substitutes, lookup_price, scan_price_alerts,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let loaded;
    let catalog: &StaticCatalog = match &cli.catalog {
        Some(path) => {
            loaded = load_catalog(path)?;
            &loaded
        }
        None => builtin_catalog(),
    };

    match command {
        Command::Price { name } => cmd_price(catalog, &name),
        Command::Swaps { name, max_ratio } => cmd_swaps(catalog, &name, max_ratio),
        Command::Analyze { items, goal } => cmd_analyze(catalog, items, &goal),
        Command::Optimize { items, aggressive } => cmd_optimize(catalog, items, aggressive),
        Command::Alerts { history } => cmd_alerts(catalog, &history),
        Command::Import { path } => cmd_import(catalog, &path, cli.catalog.as_deref()),
    }
}

/// Sorted known ingredient names, for fuzzy prompts and hints.
fn known_names(catalog: &StaticCatalog) -> Vec<String> {
    let mut names: Vec<String> = catalog
        .all_prices()
        .into_iter()
        .map(|record| record.name.clone())
        .collect();
    names.sort();
    names
}

/// Look up and print one ingredient price.
fn cmd_price(catalog: &StaticCatalog, name: &str) -> Result<()> {
    match lookup_price(catalog, name) {
        Some(record) => display_price(record),
        None => {
            println!("No price known for '{}'.", name);
            if let Some(similar) = suggest_similar(name, &known_names(catalog)) {
                println!("Did you mean '{}'?", similar);
            }
        }
    }

    Ok(())
}

/// Print substitute suggestions for one ingredient.
fn cmd_swaps(catalog: &StaticCatalog, name: &str, max_ratio: f64) -> Result<()> {
    if max_ratio <= 0.0 {
        return Err(GrocerError::InvalidInput(
            "max-ratio must be positive".to_string(),
        ));
    }

    let suggestions = find_substitutes(catalog, name, max_ratio);
    display_suggestions(name, &suggestions);
    Ok(())
}

/// Analyze a grocery list and print the summary.
fn cmd_analyze(catalog: &StaticCatalog, mut items: Vec<String>, goal: &str) -> Result<()> {
    let mut goal = goal.to_string();

    if items.is_empty() {
        items = prompt_grocery_list(&known_names(catalog))?;
        if items.is_empty() {
            println!("No items entered.");
            return Ok(());
        }
        goal = prompt_goal()?;
    }

    let analysis = analyze_list(catalog, &items, &goal);

    // No external narrator is wired up; the template narration is the
    // deterministic path either way.
    let mut cache = NarrativeCache::new(16);
    let narrative = summarize(&analysis, None, &mut cache);

    display_analysis(&analysis, &narrative);
    Ok(())
}

/// Rewrite a grocery list with cheaper substitutes and print the result.
fn cmd_optimize(catalog: &StaticCatalog, mut items: Vec<String>, aggressive: bool) -> Result<()> {
    if items.is_empty() {
        items = prompt_grocery_list(&known_names(catalog))?;
        if items.is_empty() {
            println!("No items entered.");
            return Ok(());
        }
    }

    let result = auto_optimize(catalog, &items, aggressive);
    display_optimized(&result);
    Ok(())
}

/// Scan for price spikes against a baseline history file.
fn cmd_alerts(catalog: &StaticCatalog, history_path: &str) -> Result<()> {
    let history = load_price_history(history_path)?;

    if history.is_empty() {
        println!("Baseline file has no entries; nothing to scan.");
        return Ok(());
    }

    let alerts = scan_price_alerts(catalog, &history);
    display_alerts(&alerts);
    Ok(())
}

/// Import refreshed prices from CSV and save the merged catalog.
fn cmd_import(catalog: &StaticCatalog, csv_path: &str, catalog_path: Option<&str>) -> Result<()> {
    let Some(out_path) = catalog_path else {
        println!("Import needs a writable catalog file; pass one with --catalog.");
        return Ok(());
    };

    let (records, skipped) = import_prices_csv(csv_path)?;
    println!("Read {} price records ({} skipped).", records.len(), skipped);

    if records.is_empty() {
        println!("Nothing to import.");
        return Ok(());
    }

    let updated = catalog.with_updated_prices(records);
    println!(
        "Catalog now has {} prices and {} equivalence entries.",
        updated.price_count(),
        updated.equivalence_count()
    );

    let save = prompt_yes_no(&format!("Save catalog to {}?", out_path), true)?;
    if save {
        save_catalog(out_path, &updated)?;
        println!("Catalog saved.");
    }

    Ok(())
}
