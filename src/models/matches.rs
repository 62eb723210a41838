//! Ranked match results returned by the engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One matched record with its relevance score.
///
/// The record payload is opaque: shaping and field selection happen in the
/// host's response shaper, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    /// The matched record, as the engine produced it.
    pub record: Value,
    /// Relevance score; higher ranks earlier.
    pub score: f32,
}

impl RankedMatch {
    /// Creates a ranked match.
    #[must_use]
    pub const fn new(record: Value, score: f32) -> Self {
        Self { record, score }
    }
}

/// The full ranked result of one engine query, before windowing.
///
/// Its length is the `total` that pagination math reports, so it must
/// carry every match, not just the requested page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSet {
    ranked: Vec<RankedMatch>,
}

impl MatchSet {
    /// Wraps a ranked match list.
    #[must_use]
    pub const fn new(ranked: Vec<RankedMatch>) -> Self {
        Self { ranked }
    }

    /// Number of matches, pre-windowing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Returns true if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Iterates matches in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &RankedMatch> {
        self.ranked.iter()
    }

    /// Consumes the set, yielding matches in rank order.
    #[must_use]
    pub fn into_ranked(self) -> Vec<RankedMatch> {
        self.ranked
    }

    /// Consumes the set, yielding just the record payloads in rank order.
    #[must_use]
    pub fn into_records(self) -> Vec<Value> {
        self.ranked.into_iter().map(|m| m.record).collect()
    }
}

impl FromIterator<RankedMatch> for MatchSet {
    fn from_iter<I: IntoIterator<Item = RankedMatch>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_set() -> MatchSet {
        MatchSet::new(vec![
            RankedMatch::new(json!({"id": 1, "title": "first"}), 0.92),
            RankedMatch::new(json!({"id": 2, "title": "second"}), 0.41),
        ])
    }

    #[test]
    fn test_len_counts_all_matches() {
        let set = create_test_set();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert!(MatchSet::default().is_empty());
    }

    #[test]
    fn test_into_records_preserves_rank_order() {
        let records = create_test_set().into_records();
        assert_eq!(records[0]["id"], 1);
        assert_eq!(records[1]["id"], 2);
    }

    #[test]
    fn test_collects_from_iterator() {
        let set: MatchSet = (0..3)
            .map(|i| RankedMatch::new(json!({"id": i}), 1.0))
            .collect();
        assert_eq!(set.len(), 3);
    }
}
