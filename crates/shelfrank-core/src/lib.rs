pub mod catalog;
pub mod config;
pub mod criteria;
pub mod engine;
pub mod models;
pub mod weights;

pub use engine::{RankError, RankingEngine};
pub use models::{BookRecord, ScoreResult};
pub use weights::WeightVector;
