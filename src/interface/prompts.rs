use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;

/// Minimum similarity score before a name counts as a fuzzy match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Closest known ingredient name for a typed name, if any is similar
/// enough. Used for "did you mean" hints; core lookups stay exact.
pub fn suggest_similar(input: &str, known_names: &[String]) -> Option<String> {
    let needle = input.trim().to_lowercase();

    known_names
        .iter()
        .map(|name| (name, jaro_winkler(&name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name.clone())
}

/// Prompt for the dietary goal label (free text).
pub fn prompt_goal() -> Result<String> {
    let goal: String = Input::new()
        .with_prompt("What is your dietary goal?")
        .default("weight_loss".to_string())
        .interact_text()?;

    Ok(goal.trim().to_string())
}

/// Prompt for grocery items one at a time, with fuzzy matching against
/// the catalog's known names.
///
/// Unknown items can be kept as typed; the optimizer passes them through
/// unchanged.
pub fn prompt_grocery_list(known_names: &[String]) -> Result<Vec<String>> {
    let mut items = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a grocery item (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Exact match first (case-insensitive)
        let exact = known_names
            .iter()
            .find(|name| name.to_lowercase() == input.to_lowercase());

        if let Some(name) = exact {
            items.push(name.clone());
            println!("Added: {}", name);
            continue;
        }

        // Fuzzy candidates
        let mut candidates: Vec<(&String, f64)> = known_names
            .iter()
            .map(|name| (name, jaro_winkler(&name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > FUZZY_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            let keep = Confirm::new()
                .with_prompt(format!("'{}' is not in the catalog. Keep it anyway?", input))
                .default(true)
                .interact()?;

            if keep {
                items.push(input.to_string());
                println!("Added: {}", input);
            }
            continue;
        }

        if candidates.len() == 1 {
            let name = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", name))
                .default(true)
                .interact()?;

            if confirm {
                items.push(name.clone());
                println!("Added: {}", name);
            } else {
                items.push(input.to_string());
                println!("Added: {}", input);
            }
        } else {
            let mut options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(name, _)| (*name).clone())
                .collect();
            let matched = options.len();
            options.push(format!("Keep '{}' as typed", input));

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            if selection < matched {
                items.push(options[selection].clone());
                println!("Added: {}", options[selection]);
            } else {
                items.push(input.to_string());
                println!("Added: {}", input);
            }
        }
    }

    Ok(items)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<String> {
        vec![
            "paneer".to_string(),
            "tofu".to_string(),
            "chicken breast".to_string(),
        ]
    }

    #[test]
    fn test_suggest_similar_finds_close_name() {
        assert_eq!(suggest_similar("panner", &known()), Some("paneer".to_string()));
        assert_eq!(suggest_similar("TOFU ", &known()), Some("tofu".to_string()));
    }

    #[test]
    fn test_suggest_similar_rejects_distant_names() {
        assert_eq!(suggest_similar("quinoa", &known()), None);
    }
}
