//! Configuration management.
//!
//! Holds the file locations, habitat ordering, placeholder name and the
//! reference date shared by every record in one run.

use crate::constants::{
    DEFAULT_INPUT_FILE, DEFAULT_NAMES_FILE, DEFAULT_OUTPUT_FILE, HABITAT_ORDER, PLACEHOLDER_NAME,
};
use crate::error::{Result, ZooError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global configuration for one intake run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZooConfig {
    /// Arrivals file, one animal per line
    pub input_path: PathBuf,

    /// Sectioned names file
    pub names_path: PathBuf,

    /// Report destination
    pub output_path: PathBuf,

    /// Species keys written first, in order, when present
    pub habitat_order: Vec<String>,

    /// Name assigned once a species' pool is exhausted
    pub placeholder_name: String,

    /// Supplies the current year for birth dates and the arrival date
    pub reference_date: NaiveDate,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            names_path: PathBuf::from(DEFAULT_NAMES_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            habitat_order: HABITAT_ORDER.iter().map(|s| s.to_string()).collect(),
            placeholder_name: PLACEHOLDER_NAME.to_string(),
            reference_date: Local::now().date_naive(),
        }
    }
}

impl ZooConfig {
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_names_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.names_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Pin the date used for birth years and arrival stamps
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    pub fn with_placeholder_name(mut self, name: impl Into<String>) -> Self {
        self.placeholder_name = name.into();
        self
    }

    /// Reject configurations that could not produce a sensible report
    pub fn validate(&self) -> Result<()> {
        if self.placeholder_name.trim().is_empty() {
            return Err(ZooError::configuration("placeholder name must not be empty"));
        }
        if self.input_path == self.output_path {
            return Err(ZooError::configuration(format!(
                "output path {} would overwrite the input file",
                self.output_path.display()
            )));
        }
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` date given on the command line
pub fn parse_reference_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| ZooError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_fixed_paths() {
        let config = ZooConfig::default();
        assert_eq!(config.input_path, PathBuf::from("arrivingAnimals.txt"));
        assert_eq!(config.names_path, PathBuf::from("animalNames.txt"));
        assert_eq!(config.output_path, PathBuf::from("zooPopulation.txt"));
        assert_eq!(config.habitat_order, vec!["hyena", "lion", "bear", "tiger"]);
        assert_eq!(config.placeholder_name, "Unnamed");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let config = ZooConfig::default()
            .with_input_path("in.txt")
            .with_names_path("names.txt")
            .with_output_path("out.txt")
            .with_reference_date(date)
            .with_placeholder_name("Nameless");

        assert_eq!(config.input_path, PathBuf::from("in.txt"));
        assert_eq!(config.names_path, PathBuf::from("names.txt"));
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
        assert_eq!(config.reference_date, date);
        assert_eq!(config.placeholder_name, "Nameless");
    }

    #[test]
    fn test_validate_rejects_output_over_input() {
        let config = ZooConfig::default()
            .with_input_path("same.txt")
            .with_output_path("same.txt");
        assert!(matches!(
            config.validate(),
            Err(ZooError::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_blank_placeholder() {
        let config = ZooConfig::default().with_placeholder_name("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_reference_date() {
        assert_eq!(
            parse_reference_date("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert!(matches!(
            parse_reference_date("15/03/2024"),
            Err(ZooError::InvalidDate { .. })
        ));
    }
}
