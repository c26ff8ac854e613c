//! Main intake engine.
//!
//! Loads the name pool, walks the arrivals file line by line, derives the
//! ID, birth date and name for each animal, and writes the habitat report
//! once every line has been processed.

#[cfg(test)]
pub mod tests;

use crate::birth_date::gen_birth_date;
use crate::config::ZooConfig;
use crate::error::{Result, ZooError};
use crate::id_generator::SpeciesCounter;
use crate::models::{AnimalEntry, AnimalRecord, ProcessingStats};
use crate::names::NamePool;
use crate::parser::parse_record;
use crate::report::HabitatReport;

use chrono::Datelike;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Per-run state: counters, remaining names and the report being built
///
/// Created fresh for every run so counts and pools never leak between runs.
#[derive(Debug)]
pub struct Intake<'a> {
    config: &'a ZooConfig,
    counter: SpeciesCounter,
    names: NamePool,
    report: HabitatReport,
    exhausted: HashSet<String>,
    placeholder_names_assigned: usize,
}

impl<'a> Intake<'a> {
    pub fn new(config: &'a ZooConfig, names: NamePool) -> Self {
        Self {
            config,
            counter: SpeciesCounter::new(),
            names,
            report: HabitatReport::new(),
            exhausted: HashSet::new(),
            placeholder_names_assigned: 0,
        }
    }

    /// Derive the report entry for one animal and file it under its habitat
    pub fn admit(&mut self, record: AnimalRecord) -> AnimalEntry {
        let species_key = record.species_key();
        let birth_date = gen_birth_date(
            record.age,
            &record.season,
            self.config.reference_date.year(),
        );
        let id = self.counter.next_id(&record.species);
        let name = self.assign_name(&species_key);

        debug!("Admitted {} as {} ({})", record.species, id, name);

        let entry = AnimalEntry::new(id, name, birth_date, record, self.config.reference_date);
        self.report.add(&species_key, &entry);
        entry
    }

    fn assign_name(&mut self, species_key: &str) -> String {
        if let Some(name) = self.names.next_name(species_key) {
            return name;
        }

        if self.exhausted.insert(species_key.to_string()) {
            warn!(
                "No names left for {}; using '{}'",
                species_key, self.config.placeholder_name
            );
        }
        self.placeholder_names_assigned += 1;
        self.config.placeholder_name.clone()
    }

    pub fn report(&self) -> &HabitatReport {
        &self.report
    }

    pub fn counter(&self) -> &SpeciesCounter {
        &self.counter
    }

    pub fn placeholder_names_assigned(&self) -> usize {
        self.placeholder_names_assigned
    }
}

/// Orchestrates one complete intake run from files on disk
#[derive(Debug, Clone)]
pub struct ZooProcessor {
    config: ZooConfig,
}

impl ZooProcessor {
    pub fn new(config: ZooConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Main processing entry point
    ///
    /// A missing names file is recovered with an empty pool. A missing
    /// arrivals file fails with `InputFileNotFound` before anything is
    /// written, as does any malformed line.
    pub fn process(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        info!(
            "Processing arrivals from {}",
            self.config.input_path.display()
        );

        let names = NamePool::load_or_empty(&self.config.names_path)?;
        let input = File::open(&self.config.input_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ZooError::InputFileNotFound {
                path: self.config.input_path.clone(),
            },
            _ => ZooError::Io(e),
        })?;

        let mut intake = Intake::new(&self.config, names);
        let mut stats = ProcessingStats::default();

        for (index, line) in BufReader::new(input).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                stats.blank_lines_skipped += 1;
                continue;
            }

            let record = parse_record(&line, index + 1)?;
            intake.admit(record);
            stats.records_processed += 1;
        }

        stats.habitats_written = intake
            .report()
            .write_file(&self.config.output_path, &self.config.habitat_order)?;
        stats.placeholder_names_assigned = intake.placeholder_names_assigned();
        stats.output_path = Some(self.config.output_path.clone());
        stats.processing_time_ms = start_time.elapsed().as_millis();

        info!(
            "Wrote {} records in {} habitats to {}",
            stats.records_processed,
            stats.habitats_written,
            self.config.output_path.display()
        );

        Ok(stats)
    }
}
