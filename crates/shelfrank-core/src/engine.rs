//! The ranking engine: tiers → normalized scores → weighted sum → stable
//! descending order with dense ranks.

use crate::criteria::{default_criteria, Criterion, MAX_TIER};
use crate::models::{BookRecord, ScoreResult};
use crate::weights::WeightVector;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    /// All-zero or negative weight vector. Raised before any scoring work,
    /// so a failed call never produces partial results.
    #[error("invalid weights: {reason}")]
    InvalidWeights { reason: String },
}

/// Pure scoring engine over a configurable criterion set.
///
/// `rank` takes only its inputs and local state; concurrent calls are safe
/// without locking.
pub struct RankingEngine {
    criteria: Vec<Criterion>,
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new(default_criteria())
    }
}

impl RankingEngine {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Score and rank `books` under `weights`.
    ///
    /// Returns one [`ScoreResult`] per input book, sorted by final score
    /// descending. The sort is stable, so equal scores keep their input
    /// order; ranks are always the gapless sequence 1..=N. An empty input
    /// yields an empty output, not an error.
    pub fn rank(
        &self,
        books: &[BookRecord],
        weights: &WeightVector,
    ) -> Result<Vec<ScoreResult>, RankError> {
        let keys: Vec<&str> = self.criteria.iter().map(|c| c.key.as_str()).collect();
        let weights = weights.normalized(&keys)?;

        if books.is_empty() {
            return Ok(Vec::new());
        }

        let mut results: Vec<ScoreResult> = books
            .iter()
            .map(|book| self.score_one(book, &weights))
            .collect();

        results.sort_by(|a, b| {
            b.final_score
                .partial_cmp(&a.final_score)
                .unwrap_or(Ordering::Equal)
        });
        for (i, result) in results.iter_mut().enumerate() {
            result.rank = i + 1;
        }

        Ok(results)
    }

    fn score_one(&self, book: &BookRecord, weights: &BTreeMap<String, f64>) -> ScoreResult {
        let mut tiers = BTreeMap::new();
        let mut normalized = BTreeMap::new();
        let mut final_score = 0.0;

        for criterion in &self.criteria {
            let tier = criterion.score(book);
            let norm = f64::from(tier) / f64::from(MAX_TIER);
            let weight = weights.get(&criterion.key).copied().unwrap_or(0.0);
            final_score += norm * weight;
            tiers.insert(criterion.key.clone(), tier);
            normalized.insert(criterion.key.clone(), norm);
        }

        ScoreResult {
            book: book.clone(),
            tiers,
            normalized,
            final_score,
            rank: 0,
        }
    }
}
