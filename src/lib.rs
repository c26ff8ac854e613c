//! Zoo Intake Library
//!
//! Turns free-text animal arrival notes into a zoo population report
//! grouped by habitat.
//!
//! This library provides tools for:
//! - Loading per-species name pools from a sectioned names file
//! - Parsing arrival lines such as
//!   `4 year old female hyena, born in spring, tan color, 70 pounds, from Friguia Park, Tunisia`
//! - Generating per-species IDs (`Hy01`, `Hy02`, ...) and seasonal birth dates
//! - Writing the report in a fixed habitat order followed by any other species

pub mod birth_date;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod id_generator;
pub mod models;
pub mod names;
pub mod parser;
pub mod processor;
pub mod report;

// Re-export commonly used types
pub use config::ZooConfig;
pub use error::{Result, ZooError};
pub use models::{AnimalEntry, AnimalRecord, ProcessingStats, Season};
pub use processor::ZooProcessor;
