//! Scenario tests for the processor module
//!
//! Drive complete intake runs against arrivals and names files written
//! into temporary directories.


use crate::config::ZooConfig;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const ARRIVALS: &str = "\
4 year old female hyena, born in spring, tan color, 70 pounds, from Friguia Park, Tunisia
12 year old male lion, born in summer, tawny color, 410 pounds, from Zambezi, Zambia

3 year old male hyena, unknown birth season, spotted color, 80 pounds, from Serengeti, Tanzania
6 year old female zebra, born in fall, striped, 500 pounds, from Etosha, Namibia
";

pub const NAMES: &str = "\
Hyena Names:

Shenzi, Banzai

Lion Names:

Scar, Mufasa
";

/// Fixed run date so derived dates are predictable
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// Write arrivals and names into `temp_dir` and build a config pointing at them
pub fn create_intake_files(temp_dir: &TempDir, arrivals: &str, names: Option<&str>) -> ZooConfig {
    let input_path = temp_dir.path().join("arrivingAnimals.txt");
    let names_path = temp_dir.path().join("animalNames.txt");
    let output_path = temp_dir.path().join("zooPopulation.txt");

    fs::write(&input_path, arrivals).unwrap();
    if let Some(names) = names {
        fs::write(&names_path, names).unwrap();
    }

    ZooConfig::default()
        .with_input_path(input_path)
        .with_names_path(names_path)
        .with_output_path(output_path)
        .with_reference_date(reference_date())
}

pub fn output_path(config: &ZooConfig) -> PathBuf {
    config.output_path.clone()
}
