use pretty_assertions::assert_eq;
use shelfrank_core::criteria::keys;
use shelfrank_core::{BookRecord, RankError, RankingEngine, WeightVector};

fn book(id: u64, borrower: u32, condition: &str, relevance: &str, duration: u32) -> BookRecord {
    BookRecord {
        id,
        title: format!("book-{}", id),
        borrower_count: borrower,
        condition: condition.to_string(),
        relevance: relevance.to_string(),
        loan_duration_days: duration,
        ..Default::default()
    }
}

fn default_weights() -> WeightVector {
    WeightVector::new()
        .with(keys::BORROWER_COUNT, 0.30)
        .with(keys::CATEGORY_RATING, 0.20)
        .with(keys::CONDITION, 0.15)
        .with(keys::RELEVANCE, 0.25)
        .with(keys::LOAN_DURATION, 0.10)
}

#[test]
fn ranks_are_a_gapless_permutation() {
    let engine = RankingEngine::default();
    let books = vec![
        book(1, 90, "good", "relevant", 5),
        book(2, 10, "very good", "not relevant", 20),
        book(3, 55, "somewhat good", "very relevant", 2),
        book(4, 33, "lightly damaged", "fairly relevant", 12),
    ];
    let results = engine.rank(&books, &default_weights()).unwrap();

    assert_eq!(results.len(), books.len());
    let mut ranks: Vec<usize> = results.iter().map(|r| r.rank).collect();
    ranks.sort();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    // Output is ordered by rank, i.e. by final score descending.
    for pair in results.windows(2) {
        assert!(pair[0].final_score >= pair[1].final_score);
        assert_eq!(pair[0].rank + 1, pair[1].rank);
    }
}

#[test]
fn one_hot_weights_reduce_to_single_criterion() {
    let engine = RankingEngine::default();
    let books = vec![
        book(1, 45, "good", "relevant", 8),
        book(2, 85, "heavily damaged", "not relevant", 20),
    ];
    let weights = WeightVector::new().with(keys::BORROWER_COUNT, 1.0);
    let results = engine.rank(&books, &weights).unwrap();
    for r in &results {
        assert_eq!(r.final_score, r.normalized[keys::BORROWER_COUNT]);
    }
    // Book 2 has the higher borrower tier, so it wins outright.
    assert_eq!(results[0].book.id, 2);
}

#[test]
fn borrower_count_is_monotone_in_tier_and_final_score() {
    let engine = RankingEngine::default();
    let weights = default_weights();
    let mut prev_tier = 0u8;
    let mut prev_final = 0.0f64;
    for count in [15u32, 25, 45, 65, 85] {
        let results = engine
            .rank(&[book(1, count, "good", "relevant", 8)], &weights)
            .unwrap();
        let tier = results[0].tiers[keys::BORROWER_COUNT];
        assert!(tier >= prev_tier, "tier dropped at borrower_count {}", count);
        assert!(
            results[0].final_score >= prev_final,
            "final score dropped at borrower_count {}",
            count
        );
        prev_tier = tier;
        prev_final = results[0].final_score;
    }
}

#[test]
fn shorter_loan_duration_scores_strictly_higher() {
    let engine = RankingEngine::default();
    let fast = book(1, 50, "good", "relevant", 2);
    let slow = book(2, 50, "good", "relevant", 20);
    let results = engine.rank(&[fast, slow], &default_weights()).unwrap();
    let by_id = |id: u64| results.iter().find(|r| r.book.id == id).unwrap();
    assert!(by_id(1).tiers[keys::LOAN_DURATION] > by_id(2).tiers[keys::LOAN_DURATION]);
    assert_eq!(by_id(1).rank, 1);
}

#[test]
fn ranking_is_idempotent_including_tie_order() {
    let engine = RankingEngine::default();
    // Identical books tie on every criterion; the stable sort keeps them in
    // input order both times.
    let books = vec![
        book(1, 50, "good", "relevant", 5),
        book(2, 50, "good", "relevant", 5),
        book(3, 90, "very good", "very relevant", 1),
    ];
    let first = engine.rank(&books, &default_weights()).unwrap();
    let second = engine.rank(&books, &default_weights()).unwrap();
    assert_eq!(first, second);

    assert_eq!(first[0].book.id, 3);
    assert_eq!(first[1].book.id, 1);
    assert_eq!(first[2].book.id, 2);
    assert_eq!(first[1].final_score, first[2].final_score);
    assert_ne!(first[1].rank, first[2].rank);
}

#[test]
fn all_zero_weights_fail_fast() {
    let engine = RankingEngine::default();
    let books = vec![book(1, 50, "good", "relevant", 5)];
    let weights = WeightVector::new()
        .with(keys::BORROWER_COUNT, 0.0)
        .with(keys::CONDITION, 0.0)
        .with(keys::RELEVANCE, 0.0)
        .with(keys::LOAN_DURATION, 0.0);
    let err = engine.rank(&books, &weights).unwrap_err();
    assert!(matches!(err, RankError::InvalidWeights { .. }));

    let negative = WeightVector::new()
        .with(keys::BORROWER_COUNT, 0.5)
        .with(keys::CONDITION, -0.2);
    assert!(engine.rank(&books, &negative).is_err());
}

#[test]
fn empty_input_is_empty_output() {
    let engine = RankingEngine::default();
    let results = engine.rank(&[], &default_weights()).unwrap();
    assert!(results.is_empty());
}

#[test]
fn two_book_reference_scenario() {
    let engine = RankingEngine::default();
    let a = book(1, 50, "good", "very relevant", 2);
    let b = book(2, 10, "very good", "not relevant", 20);
    // Category criterion deliberately weighted zero; the remaining weights
    // sum to 0.8 and get rescaled by the engine.
    let weights = WeightVector::new()
        .with(keys::BORROWER_COUNT, 0.30)
        .with(keys::CONDITION, 0.15)
        .with(keys::RELEVANCE, 0.25)
        .with(keys::LOAN_DURATION, 0.10);

    let results = engine.rank(&[a, b], &weights).unwrap();
    let by_id = |id: u64| results.iter().find(|r| r.book.id == id).unwrap();

    let a = by_id(1);
    assert_eq!(a.tiers[keys::BORROWER_COUNT], 3);
    assert_eq!(a.tiers[keys::CONDITION], 4);
    assert_eq!(a.tiers[keys::RELEVANCE], 5);
    assert_eq!(a.tiers[keys::LOAN_DURATION], 5);
    assert!((a.final_score - 0.8125).abs() < 1e-9);
    assert_eq!(a.rank, 1);

    let b = by_id(2);
    assert_eq!(b.tiers[keys::BORROWER_COUNT], 1);
    assert_eq!(b.tiers[keys::CONDITION], 5);
    assert_eq!(b.tiers[keys::RELEVANCE], 1);
    assert_eq!(b.tiers[keys::LOAN_DURATION], 1);
    assert!((b.final_score - 0.35).abs() < 1e-9);
    assert_eq!(b.rank, 2);
}

#[test]
fn malformed_records_are_absorbed_not_rejected() {
    let engine = RankingEngine::default();
    let junk = BookRecord {
        id: 1,
        borrower_count: 0,               // below the lowest bucket
        condition: "???".to_string(),    // unknown label
        relevance: String::new(),        // missing label
        loan_duration_days: 500,         // far past the slowest bucket
        category: "Knitting".to_string(),
        ..Default::default()
    };
    let results = engine.rank(&[junk], &default_weights()).unwrap();
    let r = &results[0];
    assert_eq!(r.tiers[keys::BORROWER_COUNT], 1);
    assert_eq!(r.tiers[keys::CONDITION], 3);
    assert_eq!(r.tiers[keys::RELEVANCE], 3);
    assert_eq!(r.tiers[keys::LOAN_DURATION], 1);
    assert_eq!(r.tiers[keys::CATEGORY_RATING], 3);
    assert!(r.final_score >= 0.0 && r.final_score <= 1.0);
    assert_eq!(r.rank, 1);
}

#[test]
fn final_scores_stay_in_unit_interval() {
    let engine = RankingEngine::default();
    let best = BookRecord {
        id: 1,
        category: "Education".to_string(),
        rating: 5.0,
        borrower_count: 100,
        condition: "very good".to_string(),
        relevance: "very relevant".to_string(),
        loan_duration_days: 1,
        ..Default::default()
    };
    let worst = book(2, 0, "heavily damaged", "not relevant", 30);
    let results = engine.rank(&[best, worst], &default_weights()).unwrap();
    assert!((results[0].final_score - 1.0).abs() < 1e-9);
    for r in &results {
        assert!(r.final_score >= 0.0 && r.final_score <= 1.0);
    }
}
