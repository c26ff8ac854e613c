//! Command-line interface components.
//!
//! Every flag is optional; with none given the tool reads
//! `arrivingAnimals.txt` and `animalNames.txt` from the working directory
//! and writes `zooPopulation.txt`.

use crate::config::{ZooConfig, parse_reference_date};
use crate::error::{Result, ZooError};
use crate::models::ProcessingStats;
use crate::processor::ZooProcessor;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::{debug, error};

#[derive(Parser, Debug, Clone)]
#[command(name = "zoo-intake")]
#[command(about = "Turn animal arrival notes into a habitat-grouped zoo population report")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Arrivals file, one animal description per line
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Names file with `<Species> Names:` sections
    #[arg(short, long, value_name = "PATH")]
    pub names: Option<PathBuf>,

    /// Report destination
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Date used for birth years and arrival stamps (YYYY-MM-DD, default today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Build the run configuration, starting from the fixed defaults
    pub fn to_config(&self) -> Result<ZooConfig> {
        let mut config = ZooConfig::default();
        if let Some(input) = &self.input {
            config = config.with_input_path(input);
        }
        if let Some(names) = &self.names {
            config = config.with_names_path(names);
        }
        if let Some(output) = &self.output {
            config = config.with_output_path(output);
        }
        if let Some(date) = &self.date {
            config = config.with_reference_date(parse_reference_date(date)?);
        }
        Ok(config)
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("zoo_intake={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Run one intake
///
/// A missing arrivals file is reported once and yields stats with no
/// output path; every other failure is returned to the caller.
pub fn run(args: &Args) -> Result<ProcessingStats> {
    let processor = ZooProcessor::new(args.to_config()?)?;

    match processor.process() {
        Err(err @ ZooError::InputFileNotFound { .. }) => {
            error!("{}; no report written", err);
            Ok(ProcessingStats::default())
        }
        other => other,
    }
}

/// Print the end-of-run summary to stdout
pub fn print_summary(stats: &ProcessingStats) {
    let Some(output_path) = &stats.output_path else {
        println!("{}", "No report generated".bright_red().bold());
        return;
    };

    println!("\n{}", "Intake Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Animals processed:".bright_cyan(),
        stats.records_processed.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Habitats written:".bright_cyan(),
        stats.habitats_written.to_string().bright_white()
    );
    if stats.placeholder_names_assigned > 0 {
        println!(
            "  {} {}",
            "Unnamed animals:".bright_yellow(),
            stats.placeholder_names_assigned.to_string().bright_yellow()
        );
    }
    println!(
        "  {} {}",
        "Report:".bright_cyan(),
        output_path.display().to_string().bright_white()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    /// Shared buffer that collects formatted log output
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_no_flags_uses_defaults() {
        let args = Args::parse_from(["zoo-intake"]);
        let config = args.to_config().unwrap();

        assert_eq!(config.input_path, PathBuf::from("arrivingAnimals.txt"));
        assert_eq!(config.names_path, PathBuf::from("animalNames.txt"));
        assert_eq!(config.output_path, PathBuf::from("zooPopulation.txt"));
        assert_eq!(args.get_log_level(), "info");
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "zoo-intake",
            "-i",
            "in.txt",
            "--names",
            "n.txt",
            "-o",
            "out.txt",
            "--date",
            "2023-07-04",
            "-v",
        ]);
        let config = args.to_config().unwrap();

        assert_eq!(config.input_path, PathBuf::from("in.txt"));
        assert_eq!(config.names_path, PathBuf::from("n.txt"));
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
        assert_eq!(
            config.reference_date,
            NaiveDate::from_ymd_opt(2023, 7, 4).unwrap()
        );
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn test_bad_date_flag() {
        let args = Args::parse_from(["zoo-intake", "--date", "yesterday"]);
        assert!(matches!(
            args.to_config(),
            Err(ZooError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_run_with_missing_input_reports_without_failing() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.txt");
        let missing = temp_dir.path().join("missing.txt");
        let args = Args::parse_from([
            "zoo-intake",
            "--input",
            missing.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);

        let stats = run(&args).unwrap();

        assert!(stats.output_path.is_none());
        assert_eq!(stats.records_processed, 0);
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_logs_exactly_one_error() {
        let temp_dir = TempDir::new().unwrap();
        let names = temp_dir.path().join("names.txt");
        let missing = temp_dir.path().join("missing.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&names, "Lion Names:\nScar\n").unwrap();

        let args = Args::parse_from([
            "zoo-intake",
            "--input",
            missing.to_str().unwrap(),
            "--names",
            names.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let stats = tracing::subscriber::with_default(subscriber, || run(&args)).unwrap();

        let captured = logs.contents();
        let errors: Vec<&str> = captured
            .lines()
            .filter(|line| line.contains("ERROR"))
            .collect();
        assert_eq!(errors.len(), 1, "captured logs:\n{captured}");
        assert!(errors[0].contains("Input file not found"));
        assert!(stats.output_path.is_none());
        assert!(!output.exists());
    }

    #[test]
    fn test_run_writes_report() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("arrivals.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(
            &input,
            "1 year old male bear, born in winter, black, 90 pounds, from Yellowstone\n",
        )
        .unwrap();

        let no_names = temp_dir.path().join("no-names.txt");
        let args = Args::parse_from([
            "zoo-intake",
            "--input",
            input.to_str().unwrap(),
            "--names",
            no_names.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--date",
            "2024-01-10",
        ]);

        let stats = run(&args).unwrap();

        assert_eq!(stats.records_processed, 1);
        assert_eq!(stats.output_path.as_deref(), Some(output.as_path()));
        let report = fs::read_to_string(&output).unwrap();
        assert!(report.contains("Be01; Unnamed; birth date: 2023-12-21; black; male"));
    }
}
