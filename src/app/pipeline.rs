//! Shared "run pipeline" logic used by every command front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load candidates -> select frontier -> regrets -> rankings
//!
//! The CLI commands can then focus on presentation (printing vs exports).

use crate::app::{InputSource, RunConfig};
use crate::data::generate_sample;
use crate::domain::{Candidate, Dataset, DatasetStats, Regret};
use crate::error::AppError;
use crate::frontier::select_frontier;
use crate::io::ingest::{RowError, load_candidates};
use crate::pricing::PriceBook;
use crate::report::{Rankings, compute_regrets, rank_value};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset: Dataset,
    pub stats: DatasetStats,
    pub row_errors: Vec<RowError>,
    pub frontier: Vec<Candidate>,
    pub regrets: Vec<Regret>,
    pub rankings: Rankings,
}

/// Execute the full pipeline and return the computed outputs.
pub fn run(config: &RunConfig) -> Result<RunOutput, AppError> {
    // 1) Assemble the dataset.
    let (dataset, row_errors) = match &config.source {
        InputSource::Csv { path, prices } => {
            let book = match prices {
                Some(p) => Some(PriceBook::load(p)?),
                None => None,
            };
            let ingest = load_candidates(path, book.as_ref())?;
            let dataset = Dataset {
                label: config.label.clone(),
                score_label: config.score_label.clone(),
                asof: config.asof,
                candidates: ingest.candidates,
            };
            (dataset, ingest.row_errors)
        }
        InputSource::Sample(sample) => (generate_sample(sample)?, Vec::new()),
    };

    // 2) Stats for reporting.
    let stats = DatasetStats::compute(&dataset.candidates)
        .ok_or_else(|| AppError::no_data("Dataset is empty."))?;

    // 3) Select the frontier.
    let frontier = select_frontier(&dataset.candidates)?;

    // 4) Compute regrets and rankings.
    let regrets = compute_regrets(&dataset.candidates, &frontier)?;
    let rankings = rank_value(&regrets, config.top_n);

    Ok(RunOutput {
        dataset,
        stats,
        row_errors,
        frontier,
        regrets,
        rankings,
    })
}
