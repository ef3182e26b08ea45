//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads candidates (CSV + optional price book, or synthetic sample)
//! - runs frontier selection + regret rankings
//! - prints reports/plots
//! - writes optional exports

use std::path::PathBuf;

use clap::Parser;

use crate::cli::{Command, PlotArgs, RunArgs};
use crate::data::SampleConfig;
use crate::error::AppError;

pub mod pipeline;

/// Where the candidates for a run come from.
#[derive(Debug, Clone)]
pub enum InputSource {
    Csv {
        path: PathBuf,
        prices: Option<PathBuf>,
    },
    Sample(SampleConfig),
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: InputSource,
    pub label: String,
    pub score_label: String,
    pub asof: Option<chrono::NaiveDate>,

    pub top_n: usize,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub log_x: bool,

    pub export_results: Option<PathBuf>,
    pub export_frontier: Option<PathBuf>,
}

/// Entry point for the `pareto` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Frontier(args) => handle_run(args, OutputMode::Full),
        Command::Rank(args) => handle_run(args, OutputMode::RankOnly),
        Command::Plot(args) => handle_plot(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    RankOnly,
}

fn handle_run(args: RunArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = run_config_from_args(&args)?;
    let run = pipeline::run(&config)?;

    if mode == OutputMode::Full {
        println!(
            "{}",
            crate::report::format_run_summary(&run.dataset, &run.stats, &run.frontier, &run.row_errors)
        );
    }

    println!("{}", crate::report::format_rankings(&run.rankings));

    if mode == OutputMode::Full && config.plot {
        let plot = crate::plot::render_ascii_plot(
            &run.dataset.candidates,
            &run.frontier,
            config.plot_width,
            config.plot_height,
            config.log_x,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_results {
        crate::io::write_results_csv(path, &run.dataset, &run.regrets)?;
    }
    if let Some(path) = &config.export_frontier {
        crate::io::write_frontier_json(path, &run.dataset, &run.stats, &run.frontier)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::read_frontier_json(&args.frontier)?;
    let plot = crate::plot::render_ascii_plot_from_frontier_file(
        &file,
        args.width,
        args.height,
        args.log_x && !args.linear_x,
    );
    println!("{plot}");
    Ok(())
}

pub fn run_config_from_args(args: &RunArgs) -> Result<RunConfig, AppError> {
    let source = match (&args.csv, args.sample) {
        (Some(path), false) => InputSource::Csv {
            path: path.clone(),
            prices: args.prices.clone(),
        },
        (None, true) => InputSource::Sample(SampleConfig {
            count: args.sample_count,
            seed: args.seed,
            ..SampleConfig::default()
        }),
        (Some(_), true) => {
            return Err(AppError::usage(
                "Pass either `--csv <file>` or `--sample`, not both.",
            ));
        }
        (None, false) => {
            return Err(AppError::usage(
                "No input: pass `--csv <file>` or `--sample`.",
            ));
        }
    };

    Ok(RunConfig {
        source,
        label: args.label.clone(),
        score_label: args.score_label.clone(),
        asof: args.asof,
        top_n: args.top,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        log_x: args.log_x && !args.linear_x,
        export_results: args.export.clone(),
        export_frontier: args.export_frontier.clone(),
    })
}
