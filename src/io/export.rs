//! Export per-candidate results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one row per candidate with its frontier flag and regret.

use std::fs::File;
use std::path::Path;

use crate::domain::{Dataset, Regret};
use crate::error::AppError;

/// Write per-candidate results to a CSV file.
pub fn write_results_csv(path: &Path, dataset: &Dataset, regrets: &[Regret]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record([
            "name",
            "cost_usd_per_mtok",
            "score",
            "on_frontier",
            "frontier_score",
            "regret",
            "dataset",
        ])
        .map_err(|e| AppError::usage(format!("Failed to write export CSV header: {e}")))?;

    for r in regrets {
        let cost = format!("{:.4}", r.candidate.cost);
        let score = format!("{:.4}", r.candidate.score);
        let frontier_score = format!("{:.4}", r.frontier_score);
        let regret = format!("{:.4}", r.regret);
        writer
            .write_record([
                r.candidate.name.as_str(),
                cost.as_str(),
                score.as_str(),
                if r.on_frontier { "true" } else { "false" },
                frontier_score.as_str(),
                regret.as_str(),
                dataset.label.as_str(),
            ])
            .map_err(|e| AppError::usage(format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::usage(format!("Failed to flush export CSV: {e}")))?;

    Ok(())
}
