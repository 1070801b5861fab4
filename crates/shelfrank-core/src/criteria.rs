//! Data-driven criterion tables.
//!
//! Each criterion pairs an extractor (picks the raw value off a
//! [`BookRecord`]) with a scoring rule that buckets the raw value into an
//! integer tier in 1..=5. Rules are total: anything out of range or
//! unrecognized lands on the rule's default tier, never an error.

use crate::models::BookRecord;
use tracing::debug;

/// Highest tier a rule can assign; normalized scores are tier / MAX_TIER.
pub const MAX_TIER: u8 = 5;

/// Criterion keys for the canonical five-criterion set.
pub mod keys {
    pub const BORROWER_COUNT: &str = "borrower_count";
    pub const CATEGORY_RATING: &str = "category_rating";
    pub const CONDITION: &str = "condition";
    pub const RELEVANCE: &str = "relevance";
    pub const LOAN_DURATION: &str = "loan_duration";
}

/// Raw value a criterion extracts from a record before bucketing.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Int(i64),
    Label(String),
    CategoryRating(String, f64),
}

/// Inclusive integer range mapped to a tier.
#[derive(Debug, Clone, PartialEq)]
pub struct IntBucket {
    pub lo: i64,
    pub hi: i64,
    pub tier: u8,
}

impl IntBucket {
    pub fn new(lo: i64, hi: i64, tier: u8) -> Self {
        Self { lo, hi, tier }
    }
}

/// Category label with a rating band acting as a consistency check.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBand {
    pub category: String,
    pub rating_lo: f64,
    pub rating_hi: f64,
    pub tier: u8,
}

impl CategoryBand {
    pub fn new(category: &str, rating_lo: f64, rating_hi: f64, tier: u8) -> Self {
        Self {
            category: category.to_string(),
            rating_lo,
            rating_hi,
            tier,
        }
    }
}

/// How a raw value is bucketed into a tier.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringRule {
    /// First bucket containing the integer wins.
    IntBuckets {
        buckets: Vec<IntBucket>,
        default_tier: u8,
    },
    /// Case-insensitive label lookup.
    LabelTiers {
        labels: Vec<(String, u8)>,
        default_tier: u8,
    },
    /// Category + rating band; a known category with an out-of-band rating
    /// falls back to the category's tier alone.
    CategoryRating {
        bands: Vec<CategoryBand>,
        default_tier: u8,
    },
}

impl ScoringRule {
    pub fn default_tier(&self) -> u8 {
        match self {
            ScoringRule::IntBuckets { default_tier, .. }
            | ScoringRule::LabelTiers { default_tier, .. }
            | ScoringRule::CategoryRating { default_tier, .. } => *default_tier,
        }
    }

    /// Tier for a recognized in-range value; `None` means the caller should
    /// use the default tier.
    fn match_tier(&self, raw: &RawValue) -> Option<u8> {
        match (self, raw) {
            (ScoringRule::IntBuckets { buckets, .. }, RawValue::Int(v)) => buckets
                .iter()
                .find(|b| (b.lo..=b.hi).contains(v))
                .map(|b| b.tier),
            (ScoringRule::LabelTiers { labels, .. }, RawValue::Label(s)) => labels
                .iter()
                .find(|(label, _)| label.eq_ignore_ascii_case(s))
                .map(|(_, tier)| *tier),
            (ScoringRule::CategoryRating { bands, .. }, RawValue::CategoryRating(cat, rating)) => {
                bands
                    .iter()
                    .find(|b| {
                        b.category.eq_ignore_ascii_case(cat)
                            && (b.rating_lo..=b.rating_hi).contains(rating)
                    })
                    .or_else(|| bands.iter().find(|b| b.category.eq_ignore_ascii_case(cat)))
                    .map(|b| b.tier)
            }
            // Extractor/rule shape mismatch: treat as unrecognized.
            _ => None,
        }
    }
}

/// One named axis of evaluation: an extractor plus a scoring rule.
#[derive(Debug, Clone)]
pub struct Criterion {
    pub key: String,
    pub name: String,
    pub extract: fn(&BookRecord) -> RawValue,
    pub rule: ScoringRule,
}

impl Criterion {
    pub fn new(key: &str, name: &str, extract: fn(&BookRecord) -> RawValue, rule: ScoringRule) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            extract,
            rule,
        }
    }

    /// Tier in 1..=5 for this record. Total; unrecognized input is logged
    /// and absorbed into the default tier.
    pub fn score(&self, book: &BookRecord) -> u8 {
        let raw = (self.extract)(book);
        match self.rule.match_tier(&raw) {
            Some(tier) => tier,
            None => {
                let default = self.rule.default_tier();
                debug!(
                    criterion = %self.key,
                    book_id = book.id,
                    ?raw,
                    default,
                    "unrecognized or out-of-range value, using default tier"
                );
                default
            }
        }
    }
}

fn label_tiers(labels: [&str; 5], default_tier: u8) -> ScoringRule {
    ScoringRule::LabelTiers {
        labels: labels
            .iter()
            .zip(1u8..)
            .map(|(label, tier)| (label.to_string(), tier))
            .collect(),
        default_tier,
    }
}

/// The canonical five-criterion set, built fresh per call. Individual
/// criteria can be swapped out without touching the engine.
pub fn default_criteria() -> Vec<Criterion> {
    vec![
        Criterion::new(
            keys::BORROWER_COUNT,
            "Borrower Count",
            |b| RawValue::Int(b.borrower_count as i64),
            ScoringRule::IntBuckets {
                buckets: vec![
                    IntBucket::new(1, 20, 1),
                    IntBucket::new(21, 40, 2),
                    IntBucket::new(41, 60, 3),
                    IntBucket::new(61, 80, 4),
                    IntBucket::new(81, 100, 5),
                ],
                default_tier: 1,
            },
        ),
        Criterion::new(
            keys::CATEGORY_RATING,
            "Category & Rating",
            |b| RawValue::CategoryRating(b.category.clone(), b.rating),
            ScoringRule::CategoryRating {
                // The 3.1 boundary appears in two adjacent bands, as in the
                // original criteria catalog; the bands are per-category so
                // the first matching band wins.
                bands: vec![
                    CategoryBand::new("Encyclopedia", 1.0, 1.9, 1),
                    CategoryBand::new("Comics & Manga", 2.0, 3.1, 2),
                    CategoryBand::new("Non-fiction", 3.1, 4.0, 3),
                    CategoryBand::new("Fiction", 4.1, 4.5, 4),
                    CategoryBand::new("Education", 4.6, 5.0, 5),
                ],
                default_tier: 3,
            },
        ),
        Criterion::new(
            keys::CONDITION,
            "Physical Condition",
            |b| RawValue::Label(b.condition.clone()),
            label_tiers(
                [
                    "heavily damaged",
                    "lightly damaged",
                    "somewhat good",
                    "good",
                    "very good",
                ],
                3,
            ),
        ),
        Criterion::new(
            keys::RELEVANCE,
            "Content Relevance",
            |b| RawValue::Label(b.relevance.clone()),
            label_tiers(
                [
                    "not relevant",
                    "less relevant",
                    "fairly relevant",
                    "relevant",
                    "very relevant",
                ],
                3,
            ),
        ),
        Criterion::new(
            keys::LOAN_DURATION,
            "Loan Duration",
            |b| RawValue::Int(b.loan_duration_days as i64),
            // Inverted polarity: a short loan turns over fast, so the
            // smallest durations earn the top tier.
            ScoringRule::IntBuckets {
                buckets: vec![
                    IntBucket::new(15, i64::MAX, 1),
                    IntBucket::new(11, 14, 2),
                    IntBucket::new(7, 10, 3),
                    IntBucket::new(3, 6, 4),
                    IntBucket::new(i64::MIN, 2, 5),
                ],
                default_tier: 3,
            },
        ),
    ]
}
