//! Core data structures for zoo intake processing.
//!
//! Defines the parsed arrival record, seasons of birth, the formatted
//! report entry, and run statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::constants::season_anchors;

/// Season of birth recognized by the birth date table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Look up a season label case-insensitively
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    /// Month and day of the seasonal anchor date
    pub fn anchor(&self) -> (u32, u32) {
        match self {
            Season::Spring => season_anchors::SPRING,
            Season::Summer => season_anchors::SUMMER,
            Season::Fall => season_anchors::FALL,
            Season::Winter => season_anchors::WINTER,
        }
    }
}

/// One parsed arrival line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRecord {
    /// Taken as written; a negative age yields a future birth year
    pub age: i64,
    pub sex: String,
    pub species: String,
    /// Raw season text, `unknown` when the line did not say
    pub season: String,
    pub color: String,
    pub weight: String,
    pub origin: String,
}

impl AnimalRecord {
    /// Lowercased species used for counters, name pools and grouping
    pub fn species_key(&self) -> String {
        self.species.to_lowercase()
    }
}

/// A fully derived report line for one animal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalEntry {
    pub id: String,
    pub name: String,
    pub birth_date: String,
    pub color: String,
    pub sex: String,
    pub weight: String,
    pub origin: String,
    pub arrival_date: NaiveDate,
}

impl AnimalEntry {
    pub fn new(
        id: String,
        name: String,
        birth_date: String,
        record: AnimalRecord,
        arrival_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name,
            birth_date,
            color: record.color,
            sex: record.sex,
            weight: record.weight,
            origin: record.origin,
            arrival_date,
        }
    }
}

impl fmt::Display for AnimalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; {}; birth date: {}; {}; {}; {}; {}; arrived {}",
            self.id,
            self.name,
            self.birth_date,
            self.color,
            self.sex,
            self.weight,
            self.origin,
            self.arrival_date.format("%Y-%m-%d")
        )
    }
}

/// Processing statistics
#[derive(Debug, Default, Clone)]
pub struct ProcessingStats {
    pub records_processed: usize,
    pub blank_lines_skipped: usize,
    pub habitats_written: usize,
    pub placeholder_names_assigned: usize,
    /// `None` when no report was written
    pub output_path: Option<PathBuf>,
    pub processing_time_ms: u128,
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
