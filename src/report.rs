//! Habitat report grouping and serialization.
//!
//! Entries are bucketed by species key, keeping arrival order within each
//! habitat. Serialization writes the preferred habitats first, then every
//! other species in the order it was first seen.

use crate::constants::HABITAT_HEADER_SUFFIX;
use crate::error::Result;
use crate::models::{AnimalEntry, capitalize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Formatted entries grouped by lowercased species
#[derive(Debug, Default, Clone)]
pub struct HabitatReport {
    habitats: HashMap<String, Vec<String>>,
    encounter_order: Vec<String>,
}

impl HabitatReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to its species' habitat
    pub fn add(&mut self, species_key: &str, entry: &AnimalEntry) {
        if !self.habitats.contains_key(species_key) {
            self.encounter_order.push(species_key.to_string());
        }
        self.habitats
            .entry(species_key.to_string())
            .or_default()
            .push(entry.to_string());
    }

    /// Lines recorded for one habitat
    pub fn entries(&self, species_key: &str) -> &[String] {
        self.habitats
            .get(species_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.habitats.is_empty()
    }

    /// Species keys in the order they will be written
    pub fn ordered_species<'a>(&'a self, habitat_order: &'a [String]) -> Vec<&'a str> {
        let preferred = habitat_order
            .iter()
            .map(String::as_str)
            .filter(|species| self.habitats.contains_key(*species));
        let remaining = self
            .encounter_order
            .iter()
            .map(String::as_str)
            .filter(|species| !habitat_order.iter().any(|h| h == species));

        preferred.chain(remaining).collect()
    }

    /// Serialize every habitat, returning how many were written
    pub fn write_to<W: Write>(&self, writer: &mut W, habitat_order: &[String]) -> Result<usize> {
        let species = self.ordered_species(habitat_order);

        for key in &species {
            writeln!(writer, "{}{}", capitalize(key), HABITAT_HEADER_SUFFIX)?;
            writeln!(writer)?;
            for line in self.entries(key) {
                writeln!(writer, "{}", line)?;
            }
            writeln!(writer)?;
        }

        Ok(species.len())
    }

    /// Create or truncate `path` and write the report to it
    pub fn write_file(&self, path: &Path, habitat_order: &[String]) -> Result<usize> {
        let mut writer = BufWriter::new(File::create(path)?);
        let written = self.write_to(&mut writer, habitat_order)?;
        writer.flush()?;

        debug!("Wrote {} habitats to {}", written, path.display());
        Ok(written)
    }

    /// Render the report into a string
    pub fn render(&self, habitat_order: &[String]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, habitat_order)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
