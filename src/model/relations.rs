use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::nation::NationCode;

/// Sparse bilateral affinity scores between nations.
///
/// Scores are signed reals: positive means friendly, negative hostile.
/// Lookups are symmetric: if the forward pair is absent the reverse pair
/// is consulted, and a missing pair defaults to 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BilateralRelations {
    scores: BTreeMap<NationCode, BTreeMap<NationCode, f64>>,
}

/// One normalized relation row, used at flush time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationRow {
    pub a: NationCode,
    pub b: NationCode,
    pub score: f64,
}

impl BilateralRelations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score for a pair. Stored in the forward direction only;
    /// `get` handles the reverse lookup.
    pub fn set(&mut self, a: &str, b: &str, score: f64) {
        self.scores
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), score);
    }

    /// Symmetric lookup with a default of 0.
    pub fn get(&self, a: &str, b: &str) -> f64 {
        if let Some(score) = self.scores.get(a).and_then(|row| row.get(b)) {
            return *score;
        }
        self.scores
            .get(b)
            .and_then(|row| row.get(a))
            .copied()
            .unwrap_or(0.0)
    }

    /// Iterate all stored pairs as normalized rows.
    pub fn rows(&self) -> impl Iterator<Item = RelationRow> + '_ {
        self.scores.iter().flat_map(|(a, row)| {
            row.iter().map(|(b, score)| RelationRow {
                a: a.clone(),
                b: b.clone(),
                score: *score,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_pair_defaults_to_zero() {
        let rel = BilateralRelations::new();
        assert_eq!(rel.get("A", "B"), 0.0);
    }

    #[test]
    fn forward_lookup() {
        let mut rel = BilateralRelations::new();
        rel.set("A", "B", 5.5);
        assert_eq!(rel.get("A", "B"), 5.5);
    }

    #[test]
    fn reverse_lookup_when_forward_absent() {
        let mut rel = BilateralRelations::new();
        rel.set("A", "B", -3.0);
        assert_eq!(rel.get("B", "A"), -3.0);
    }

    #[test]
    fn forward_wins_over_reverse() {
        let mut rel = BilateralRelations::new();
        rel.set("A", "B", 2.0);
        rel.set("B", "A", 7.0);
        assert_eq!(rel.get("A", "B"), 2.0);
        assert_eq!(rel.get("B", "A"), 7.0);
    }

    #[test]
    fn rows_cover_all_pairs() {
        let mut rel = BilateralRelations::new();
        rel.set("A", "B", 1.0);
        rel.set("A", "C", 2.0);
        rel.set("B", "C", 3.0);
        let rows: Vec<RelationRow> = rel.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().any(|r| r.a == "A" && r.b == "C" && r.score == 2.0));
    }
}
