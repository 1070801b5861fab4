use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A book as supplied by the catalog repository. The engine treats this as
/// an immutable snapshot and never mutates it.
///
/// Every field defaults so a partially populated record still deserializes;
/// missing or nonsense values are absorbed by the criteria's default tiers
/// rather than failing the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BookRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    /// Average reader rating, 0.0–5.0.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub pages: u32,
    /// Number of distinct borrowers recorded for this book.
    #[serde(default)]
    pub borrower_count: u32,
    /// Physical condition label, e.g. "good", "heavily damaged".
    #[serde(default)]
    pub condition: String,
    /// Content relevance label, e.g. "very relevant".
    #[serde(default)]
    pub relevance: String,
    /// Typical loan duration in days. Shorter is better (high turnover).
    #[serde(default)]
    pub loan_duration_days: u32,
}

/// Per-book outcome of a ranking run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    pub book: BookRecord,
    /// Tier (1–5) per criterion key.
    pub tiers: BTreeMap<String, u8>,
    /// Tier divided by 5, per criterion key. Always in [0, 1].
    pub normalized: BTreeMap<String, f64>,
    /// Weighted sum of normalized scores. Always in [0, 1].
    pub final_score: f64,
    /// 1-based position after the descending stable sort. Ranks over a
    /// batch are always a gapless permutation of 1..=N.
    pub rank: usize,
}
