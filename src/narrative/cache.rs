use std::collections::{HashMap, VecDeque};

use crate::narrative::summary::Narrative;

/// Bounded cache of narration results, keyed by free-text request key.
///
/// Evicts in insertion order once capacity is reached. Injected into
/// `summarize` by the caller, so lifecycle and sizing stay under the
/// caller's control.
pub struct NarrativeCache {
    capacity: usize,
    order: VecDeque<String>,
    entries: HashMap<String, Narrative>,
}

impl NarrativeCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::new(),
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Narrative> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, narrative: Narrative) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.insert(key.clone(), narrative).is_some() {
            return;
        }

        self.order.push_back(key);
        while self.order.len() > self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.entries.remove(&evicted);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrative(notes: &str) -> Narrative {
        Narrative {
            recommended_swaps: Vec::new(),
            total_savings: 0.0,
            nutrition_notes: notes.to_string(),
            personalized_advice: String::new(),
        }
    }

    #[test]
    fn test_get_and_insert() {
        let mut cache = NarrativeCache::new(2);
        assert!(cache.is_empty());

        cache.insert("a".to_string(), narrative("one"));
        assert_eq!(cache.get("a").unwrap().nutrition_notes, "one");
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let mut cache = NarrativeCache::new(2);
        cache.insert("a".to_string(), narrative("one"));
        cache.insert("b".to_string(), narrative("two"));
        cache.insert("c".to_string(), narrative("three"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_reinsert_replaces_without_evicting() {
        let mut cache = NarrativeCache::new(2);
        cache.insert("a".to_string(), narrative("one"));
        cache.insert("b".to_string(), narrative("two"));
        cache.insert("a".to_string(), narrative("updated"));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a").unwrap().nutrition_notes, "updated");
        assert!(cache.get("b").is_some());
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut cache = NarrativeCache::new(0);
        cache.insert("a".to_string(), narrative("one"));
        assert!(cache.is_empty());
    }
}
