//! Per-species identifier generation.

use crate::constants::{ID_COUNTER_WIDTH, ID_PREFIX_LEN};
use crate::models::capitalize;
use std::collections::HashMap;

/// Running count of animals seen per lowercased species
///
/// Owned by the caller, so separate runs and tests never share counts.
#[derive(Debug, Default, Clone)]
pub struct SpeciesCounter {
    counts: HashMap<String, u32>,
}

impl SpeciesCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more animal of `species` and return its identifier
    ///
    /// The prefix is the first two characters of the raw species name,
    /// capitalized; the count is zero-padded to two digits and widens past 99.
    pub fn next_id(&mut self, species: &str) -> String {
        let count = self.counts.entry(species.to_lowercase()).or_insert(0);
        *count += 1;

        let prefix: String = species.chars().take(ID_PREFIX_LEN).collect();
        format!(
            "{}{:0width$}",
            capitalize(&prefix),
            count,
            width = ID_COUNTER_WIDTH
        )
    }

    /// Animals counted so far for a species
    pub fn count(&self, species: &str) -> u32 {
        self.counts
            .get(&species.to_lowercase())
            .copied()
            .unwrap_or(0)
    }
}
