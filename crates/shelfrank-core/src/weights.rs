use crate::engine::RankError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-supplied weights keyed by criterion. Entries need not sum to 1;
/// the engine normalizes over the active criterion set. A missing key
/// means weight 0 (criterion inactive).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct WeightVector {
    entries: BTreeMap<String, f64>,
}

impl WeightVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, weight: f64) -> Self {
        self.set(key, weight);
        self
    }

    pub fn set(&mut self, key: &str, weight: f64) {
        self.entries.insert(key.to_string(), weight);
    }

    pub fn get(&self, key: &str) -> f64 {
        self.entries.get(key).copied().unwrap_or(0.0)
    }

    /// Weights for `keys`, rescaled so they sum to 1.0.
    ///
    /// Fails with [`RankError::InvalidWeights`] on any negative entry or
    /// when no entry is strictly positive; normalization never divides by
    /// zero silently.
    pub fn normalized(&self, keys: &[&str]) -> Result<BTreeMap<String, f64>, RankError> {
        let mut total = 0.0;
        for key in keys {
            let w = self.get(key);
            if w < 0.0 {
                return Err(RankError::InvalidWeights {
                    reason: format!("criterion '{}' has negative weight {}", key, w),
                });
            }
            total += w;
        }
        if total <= 0.0 {
            return Err(RankError::InvalidWeights {
                reason: "at least one criterion weight must be positive".to_string(),
            });
        }
        Ok(keys
            .iter()
            .map(|key| (key.to_string(), self.get(key) / total))
            .collect())
    }
}

impl FromIterator<(String, f64)> for WeightVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
