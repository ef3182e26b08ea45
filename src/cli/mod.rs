//! Command-line parsing for the frontier tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the selection/reporting code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pareto", version, about = "LLM Cost/Score Pareto Frontier")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the frontier, print summary/rankings, and optionally plot/export.
    Frontier(RunArgs),
    /// Print value rankings only (useful for scripting).
    Rank(RunArgs),
    /// Plot a previously exported frontier JSON.
    Plot(PlotArgs),
}

/// Common options for frontier and ranking runs.
#[derive(Debug, Parser, Clone)]
pub struct RunArgs {
    /// Candidate table CSV (columns: name|model, score|accuracy, optional cost).
    #[arg(short = 'f', long)]
    pub csv: Option<PathBuf>,

    /// Price book JSON (llm-prices.json schema), used when the CSV has no
    /// cost column.
    #[arg(long)]
    pub prices: Option<PathBuf>,

    /// Generate a synthetic sample instead of reading a CSV.
    #[arg(long)]
    pub sample: bool,

    /// Number of synthetic candidates to generate.
    #[arg(short = 'n', long, default_value_t = 40)]
    pub sample_count: usize,

    /// Random seed for sample generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Dataset label used in reports and exports.
    #[arg(long, default_value = "candidates")]
    pub label: String,

    /// Score axis label used in reports and exports.
    #[arg(long, default_value = "score")]
    pub score_label: String,

    /// As-of date recorded in exports (YYYY-MM-DD).
    #[arg(long)]
    pub asof: Option<NaiveDate>,

    /// Show top-N best-value and worst-buy names.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Plot cost on a logarithmic axis (enabled by default).
    #[arg(long, default_value_t = true)]
    pub log_x: bool,

    /// Use a linear cost axis.
    #[arg(long)]
    pub linear_x: bool,

    /// Export per-candidate results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the frontier (candidates + selected subsequence) to JSON.
    #[arg(long = "export-frontier")]
    pub export_frontier: Option<PathBuf>,
}

/// Options for plotting a saved frontier.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Frontier JSON file produced by `pareto frontier --export-frontier`.
    #[arg(long, value_name = "JSON")]
    pub frontier: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Plot cost on a logarithmic axis (enabled by default).
    #[arg(long, default_value_t = true)]
    pub log_x: bool,

    /// Use a linear cost axis.
    #[arg(long)]
    pub linear_x: bool,
}
