//! Read/write frontier JSON files.
//!
//! Frontier JSON is the "portable" representation of a run:
//! - dataset metadata (label, score axis, as-of date)
//! - every candidate considered
//! - the selected frontier subsequence
//!
//! The schema is defined by `domain::FrontierFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{Candidate, Dataset, DatasetStats, FrontierFile};
use crate::error::AppError;

/// Write a frontier JSON file.
pub fn write_frontier_json(
    path: &Path,
    dataset: &Dataset,
    stats: &DatasetStats,
    frontier: &[Candidate],
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create frontier JSON '{}': {e}",
            path.display()
        ))
    })?;

    let out = FrontierFile {
        tool: "pareto".to_string(),
        label: dataset.label.clone(),
        score_label: dataset.score_label.clone(),
        asof: dataset.asof,
        stats: stats.clone(),
        candidates: dataset.candidates.clone(),
        frontier: frontier.to_vec(),
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::usage(format!("Failed to write frontier JSON: {e}")))?;

    Ok(())
}

/// Read a frontier JSON file.
pub fn read_frontier_json(path: &Path) -> Result<FrontierFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to open frontier JSON '{}': {e}",
            path.display()
        ))
    })?;
    let out: FrontierFile = serde_json::from_reader(file)
        .map_err(|e| AppError::usage(format!("Invalid frontier JSON: {e}")))?;
    Ok(out)
}
