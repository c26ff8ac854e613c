use anyhow::Context;
use clap::Parser;
use colored::*;
use std::process;
use zoo_intake::cli::{self, Args};
use zoo_intake::ProcessingStats;

fn main() {
    let args = Args::parse();
    cli::setup_logging(&args);

    println!("{}", "Starting zoo intake...".bright_green().bold());

    match run(&args) {
        Ok(stats) => {
            cli::print_summary(&stats);
            process::exit(0);
        }
        Err(error) => {
            // Malformed arrivals and bad configuration abort the run
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ProcessingStats> {
    let stats = cli::run(args).context("Intake run failed")?;
    Ok(stats)
}
