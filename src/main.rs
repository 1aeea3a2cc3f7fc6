mod batch;
mod cli;
mod config;
mod error;
mod loader;
mod report;
mod score;
mod types;

use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::ShockError;
use crate::score::calculator::{IndexWeights, ShockIndexCalculator};
use crate::score::factors::NormalizationParams;
use crate::score::tier::classify_risk;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const USAGE: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, ShockError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Some(cli::Commands::Single(cmd)) => run_single(
            cmd.ccs,
            cmd.eav,
            cmd.cpr,
            cmd.wm,
            cmd.as_json,
            cmd.config.as_deref(),
        ),
        Some(cli::Commands::Batch(cmd)) => run_batch(&cmd),
        None => {
            if let (Some(ccs), Some(eav), Some(cpr), Some(wm)) =
                (cli.ccs, cli.eav, cli.cpr, cli.wm)
            {
                // Legacy flat-argument mode.
                run_single(ccs, eav, cpr, wm, false, None)
            } else {
                cli::Cli::command().print_help()?;
                println!();
                Ok(exit_code::USAGE)
            }
        }
    }
}

fn run_single(
    ccs: f64,
    eav: f64,
    cpr: f64,
    wm: f64,
    as_json: bool,
    config_path: Option<&Path>,
) -> Result<i32, ShockError> {
    let cfg = config::load_config(config_path)?;
    let calculator = ShockIndexCalculator::new(IndexWeights::from_section(&cfg.weights)?);
    let shock_index = calculator.calculate(ccs, eav, cpr, wm)?;
    let risk_tier = classify_risk(shock_index)?;

    if as_json {
        println!("{}", report::json::single_to_json(shock_index, risk_tier)?);
    } else {
        println!("ECDS Shock Index: {shock_index:.4}  ({risk_tier} risk)");
    }
    Ok(exit_code::SUCCESS)
}

fn run_batch(cmd: &cli::BatchCommand) -> Result<i32, ShockError> {
    let cfg = config::load_config(cmd.config.as_deref())?;
    let calculator = ShockIndexCalculator::new(IndexWeights::from_section(&cfg.weights)?);
    let mut params = NormalizationParams::from(&cfg.normalization);
    if let Some(max_shift) = cmd.max_shift {
        params.max_shift = max_shift;
    }
    if let Some(max_weight) = cmd.max_weight {
        params.max_weight = max_weight;
    }

    let measures = loader::load_ncqa_ecds(&cmd.ecds)?;
    let weights = loader::load_cms_measure_weights(&cmd.weights)?;
    let outcome = loader::merge_ecds_and_weights(&measures, &weights);
    if outcome.unmatched_measures > 0 || outcome.unmatched_weights > 0 {
        debug!(
            unmatched_measures = outcome.unmatched_measures,
            unmatched_weights = outcome.unmatched_weights,
            "dropped rows without a join partner"
        );
        eprintln!(
            "warning: dropped {} ECDS row(s) and {} weight row(s) without a join partner",
            outcome.unmatched_measures, outcome.unmatched_weights
        );
    }

    let scored = batch::score_records(&outcome.records, &calculator, &params)?;
    let summary = batch::aggregate_contract(&scored)?;

    if let Some(output) = &cmd.output {
        report::csv::write_scored_csv(output, &scored)?;
        println!("Scored CSV written to {}", output.display());
    } else {
        print!("{}", report::table::to_table(&scored));
    }

    println!();
    if cmd.as_json {
        println!("{}", report::json::summary_to_json(&summary)?);
    } else {
        print!("{}", report::summary_text(&summary));
    }
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
