use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ecds-shock-index",
    version,
    about = "Compute the ECDS Shock Index from normalized factors or CSV files"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    // Legacy flat invocation, kept for callers predating the `single`
    // subcommand.
    #[arg(long, hide = true)]
    pub ccs: Option<f64>,
    #[arg(long, hide = true)]
    pub eav: Option<f64>,
    #[arg(long, hide = true)]
    pub cpr: Option<f64>,
    #[arg(long, hide = true)]
    pub wm: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the index from four pre-computed factor scores
    Single(SingleCommand),
    /// Score all measures from NCQA ECDS and CMS weights CSV files
    Batch(BatchCommand),
}

#[derive(Args)]
pub struct SingleCommand {
    /// Clinical completeness score [0, 1]
    #[arg(long)]
    pub ccs: f64,

    /// ECDS adoption variability score [0, 1]
    #[arg(long)]
    pub eav: f64,

    /// Cutpoint pressure risk score [0, 1]
    #[arg(long)]
    pub cpr: f64,

    /// Weight multiplier score [0, 1]
    #[arg(long)]
    pub wm: f64,

    /// Output result as JSON
    #[arg(long = "json")]
    pub as_json: bool,

    /// Calibration file overriding the default index weights
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct BatchCommand {
    /// Path to NCQA ECDS results CSV
    #[arg(long)]
    pub ecds: PathBuf,

    /// Path to CMS measure weights CSV
    #[arg(long)]
    pub weights: PathBuf,

    /// Max cutpoint shift for CPR normalization (default: 0.5)
    #[arg(long)]
    pub max_shift: Option<f64>,

    /// Max measure weight for WM normalization (default: 5)
    #[arg(long)]
    pub max_weight: Option<f64>,

    /// Write the scored CSV to this path instead of printing the table
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output the contract-level summary as JSON
    #[arg(long = "json")]
    pub as_json: bool,

    /// Calibration file overriding index weights and normalization
    #[arg(long)]
    pub config: Option<PathBuf>,
}
