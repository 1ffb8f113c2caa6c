use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::ListAnalysis;
use crate::narrative::cache::NarrativeCache;

/// One swap recommendation in conversational form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeSwap {
    pub original: String,
    pub replacement: String,
    pub reason: String,
    pub savings: f64,
}

/// Conversational rendering of a list analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub recommended_swaps: Vec<NarrativeSwap>,
    pub total_savings: f64,
    pub nutrition_notes: String,
    pub personalized_advice: String,
}

/// Result of parsing a narrator's raw output.
#[derive(Debug, Clone, PartialEq)]
pub enum NarrativeOutcome {
    Parsed(Narrative),
    Unparseable(String),
}

/// External text-generation collaborator. Optional and replaceable; the
/// numeric analysis never depends on it.
pub trait Narrator {
    fn narrate(&self, analysis: &ListAnalysis) -> Result<String>;
}

/// Extract and deserialize a `Narrative` from raw narrator output.
///
/// Accepts a json-fenced code block, otherwise the outermost brace
/// span, otherwise the text as-is. Anything that fails to deserialize
/// comes back as `Unparseable` with the raw text intact.
pub fn parse_narrative(raw: &str) -> NarrativeOutcome {
    let candidate = extract_json(raw);

    match serde_json::from_str::<Narrative>(candidate) {
        Ok(narrative) => NarrativeOutcome::Parsed(narrative),
        Err(_) => NarrativeOutcome::Unparseable(raw.to_string()),
    }
}

fn extract_json(raw: &str) -> &str {
    if let Some(start) = raw.find("```json") {
        let body = &raw[start + 7..];
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
    }

    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            return &raw[start..=end];
        }
    }

    raw
}

/// Deterministic narrative built straight from the computed swap list.
///
/// This is the fallback when no narrator is configured or its output is
/// unusable; it always succeeds.
pub fn template_narrative(analysis: &ListAnalysis) -> Narrative {
    let recommended_swaps = analysis
        .recommended
        .iter()
        .map(|swap| NarrativeSwap {
            original: swap.original.clone(),
            replacement: swap.replacement.clone(),
            reason: format!(
                "Save ₹{:.0} ({:.1}% cheaper)",
                swap.savings, swap.savings_percent
            ),
            savings: swap.savings,
        })
        .collect();

    Narrative {
        recommended_swaps,
        total_savings: analysis.max_savings,
        nutrition_notes: "All alternatives maintain similar nutritional profiles.".to_string(),
        personalized_advice: "Focus on swapping expensive items first for maximum savings!"
            .to_string(),
    }
}

/// Narrate an analysis, falling back to the template on any narrator
/// failure, with results cached by list content and goal.
pub fn summarize(
    analysis: &ListAnalysis,
    narrator: Option<&dyn Narrator>,
    cache: &mut NarrativeCache,
) -> Narrative {
    let key = cache_key(analysis);
    if let Some(cached) = cache.get(&key) {
        return cached.clone();
    }

    let narrative = match narrator {
        Some(n) => match n.narrate(analysis) {
            Ok(raw) => match parse_narrative(&raw) {
                NarrativeOutcome::Parsed(narrative) => narrative,
                NarrativeOutcome::Unparseable(_) => template_narrative(analysis),
            },
            Err(_) => template_narrative(analysis),
        },
        None => template_narrative(analysis),
    };

    cache.insert(key, narrative.clone());
    narrative
}

fn cache_key(analysis: &ListAnalysis) -> String {
    format!("{}|{}", analysis.items.join(","), analysis.goal)
}

/// Render a narrative as display text.
pub fn render_narrative(narrative: &Narrative) -> String {
    let mut out = String::new();

    if narrative.recommended_swaps.is_empty() {
        out.push_str("No money-saving swaps found for this list.\n");
    } else {
        out.push_str("Recommended swaps:\n");
        for (i, swap) in narrative.recommended_swaps.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} -> {}: {}\n",
                i + 1,
                swap.original,
                swap.replacement,
                swap.reason
            ));
        }
    }

    out.push_str(&format!(
        "Total savings: ₹{:.0}\n{}\n{}\n",
        narrative.total_savings, narrative.nutrition_notes, narrative.personalized_advice
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GrocerError;
    use crate::models::SwapRecord;

    fn analysis() -> ListAnalysis {
        ListAnalysis {
            goal: "weight_loss".to_string(),
            items: vec!["paneer".to_string()],
            swaps_by_item: Vec::new(),
            recommended: vec![SwapRecord {
                original: "paneer".to_string(),
                replacement: "tofu".to_string(),
                savings: 35.0,
                savings_percent: 43.75,
            }],
            original_cost: 80.0,
            optimized_cost: 45.0,
            max_savings: 35.0,
        }
    }

    struct FixedNarrator(String);

    impl Narrator for FixedNarrator {
        fn narrate(&self, _analysis: &ListAnalysis) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    struct FailingNarrator;

    impl Narrator for FailingNarrator {
        fn narrate(&self, _analysis: &ListAnalysis) -> Result<String> {
            Err(GrocerError::Narration("service unavailable".to_string()))
        }
    }

    const VALID_JSON: &str = r#"{
        "recommended_swaps": [
            {"original": "paneer", "replacement": "tofu", "reason": "cheaper", "savings": 35.0}
        ],
        "total_savings": 35.0,
        "nutrition_notes": "similar macros",
        "personalized_advice": "good swap"
    }"#;

    #[test]
    fn test_parse_fenced_json() {
        let raw = format!("Here you go:\n```json\n{}\n```\nEnjoy!", VALID_JSON);
        match parse_narrative(&raw) {
            NarrativeOutcome::Parsed(n) => {
                assert_eq!(n.recommended_swaps[0].replacement, "tofu");
                assert_eq!(n.nutrition_notes, "similar macros");
            }
            NarrativeOutcome::Unparseable(_) => panic!("expected parse"),
        }
    }

    #[test]
    fn test_parse_brace_span() {
        let raw = format!("Sure! {} Hope that helps.", VALID_JSON);
        assert!(matches!(
            parse_narrative(&raw),
            NarrativeOutcome::Parsed(_)
        ));
    }

    #[test]
    fn test_parse_garbage_keeps_raw_text() {
        let raw = "I could not produce JSON today.";
        match parse_narrative(raw) {
            NarrativeOutcome::Unparseable(text) => assert_eq!(text, raw),
            NarrativeOutcome::Parsed(_) => panic!("expected unparseable"),
        }
    }

    #[test]
    fn test_template_narrative_from_swaps() {
        let narrative = template_narrative(&analysis());

        assert_eq!(narrative.recommended_swaps.len(), 1);
        assert_eq!(narrative.recommended_swaps[0].original, "paneer");
        assert_eq!(narrative.recommended_swaps[0].replacement, "tofu");
        assert!(narrative.recommended_swaps[0].reason.contains("35"));
        assert_eq!(narrative.total_savings, 35.0);
    }

    #[test]
    fn test_summarize_uses_narrator_output() {
        let narrator = FixedNarrator(VALID_JSON.to_string());
        let mut cache = NarrativeCache::new(4);

        let narrative = summarize(&analysis(), Some(&narrator), &mut cache);
        assert_eq!(narrative.personalized_advice, "good swap");
    }

    #[test]
    fn test_summarize_falls_back_on_failure() {
        let mut cache = NarrativeCache::new(4);

        let narrative = summarize(&analysis(), Some(&FailingNarrator), &mut cache);
        assert_eq!(narrative, template_narrative(&analysis()));

        let garbled = FixedNarrator("not json at all".to_string());
        let mut cache = NarrativeCache::new(4);
        let narrative = summarize(&analysis(), Some(&garbled), &mut cache);
        assert_eq!(narrative, template_narrative(&analysis()));
    }

    #[test]
    fn test_summarize_caches_by_list_and_goal() {
        let narrator = FixedNarrator(VALID_JSON.to_string());
        let mut cache = NarrativeCache::new(4);

        summarize(&analysis(), Some(&narrator), &mut cache);
        assert_eq!(cache.len(), 1);

        // Second call hits the cache even with a failing narrator.
        let narrative = summarize(&analysis(), Some(&FailingNarrator), &mut cache);
        assert_eq!(narrative.personalized_advice, "good swap");
    }

    #[test]
    fn test_render_narrative_lists_swaps() {
        let text = render_narrative(&template_narrative(&analysis()));
        assert!(text.contains("paneer -> tofu"));
        assert!(text.contains("Total savings: ₹35"));
    }
}
