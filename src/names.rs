//! Name pool loading and consumption.
//!
//! Parses the sectioned names file, where a line ending in `Names:` opens
//! a species section and the following lines are comma-separated names,
//! into per-species queues consumed front to back.

use crate::constants::NAMES_SECTION_MARKER;
use crate::error::{Result, ZooError};
use std::collections::{HashMap, VecDeque};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::{debug, error};

/// Ordered, consumable candidate names keyed by lowercased species
#[derive(Debug, Default, Clone)]
pub struct NamePool {
    pools: HashMap<String, VecDeque<String>>,
}

impl NamePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a names file, failing with `NamesFileNotFound` when it is absent
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ZooError::NamesFileNotFound {
                path: path.to_path_buf(),
            },
            _ => ZooError::Io(e),
        })?;

        let pool = Self::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} names for {} species from {}",
            pool.total_names(),
            pool.species_count(),
            path.display()
        );
        Ok(pool)
    }

    /// Load a names file, falling back to an empty pool when it is absent
    pub fn load_or_empty(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(err @ ZooError::NamesFileNotFound { .. }) => {
                error!("{}; every animal will receive the placeholder name", err);
                Ok(Self::new())
            }
            other => other,
        }
    }

    /// Parse names from any buffered source
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut pools: HashMap<String, VecDeque<String>> = HashMap::new();
        let mut current_species: Option<String> = None;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.ends_with(NAMES_SECTION_MARKER) {
                let species = line
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_lowercase();
                // A repeated header starts that species over
                pools.insert(species.clone(), VecDeque::new());
                current_species = Some(species);
                continue;
            }

            if line.is_empty() {
                continue;
            }

            if let Some(species) = &current_species {
                let names = line
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string);
                pools.entry(species.clone()).or_default().extend(names);
            }
        }

        Ok(Self { pools })
    }

    /// Dequeue the next unused name for a species, `None` once exhausted
    pub fn next_name(&mut self, species: &str) -> Option<String> {
        self.pools
            .get_mut(&species.to_lowercase())
            .and_then(VecDeque::pop_front)
    }

    /// Names still available for a species
    pub fn remaining(&self, species: &str) -> usize {
        self.pools
            .get(&species.to_lowercase())
            .map_or(0, VecDeque::len)
    }

    pub fn species_count(&self) -> usize {
        self.pools.len()
    }

    pub fn total_names(&self) -> usize {
        self.pools.values().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_names() == 0
    }
}
