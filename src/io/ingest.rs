//! CSV ingest and normalization.
//!
//! This module turns a leaderboard-style CSV into a clean set of
//! `(name, cost, score)` candidates that are safe to run selection on.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **No silent cost defaults**: a row whose price cannot be resolved is a
//!   recorded row error, never a guessed number

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{Candidate, DatasetStats};
use crate::error::AppError;
use crate::pricing::PriceBook;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub name: Option<String>,
    pub message: String,
}

/// Ingest output: validated candidates + stats + row errors.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub candidates: Vec<Candidate>,
    pub stats: DatasetStats,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// Load and validate candidates from a CSV file.
///
/// When the CSV has no `cost` column, `book` is consulted per row; rows whose
/// model the book does not know become row errors.
pub fn load_candidates(path: &Path, book: Option<&PriceBook>) -> Result<IngestedData, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::usage(format!("Failed to open CSV '{}': {e}", path.display()))
    })?;
    load_candidates_from_reader(file, book)
}

/// Reader-based ingest (used directly by tests).
pub fn load_candidates_from_reader<R: Read>(
    reader: R,
    book: Option<&PriceBook>,
) -> Result<IngestedData, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| AppError::usage(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    let columns = resolve_columns(&header_map, book.is_some())?;

    let mut candidates = Vec::new();
    let mut row_errors = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();
    let mut rows_read = 0usize;

    for (idx, result) in csv_reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    name: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &columns, book) {
            Ok(candidate) => {
                if !seen_names.insert(candidate.name.to_lowercase()) {
                    row_errors.push(RowError {
                        line,
                        name: Some(candidate.name.clone()),
                        message: "Duplicate model name; names must be unique within a run."
                            .to_string(),
                    });
                    continue;
                }
                candidates.push(candidate);
            }
            Err((name, message)) => row_errors.push(RowError {
                line,
                name,
                message,
            }),
        }
    }

    let rows_used = candidates.len();
    if rows_used == 0 {
        return Err(AppError::no_data(
            "No valid rows remain after validation.",
        ));
    }

    let stats = DatasetStats::compute(&candidates)
        .ok_or_else(|| AppError::no_data("No valid candidates remain after validation."))?;

    Ok(IngestedData {
        candidates,
        stats,
        row_errors,
        rows_read,
        rows_used,
    })
}

/// Resolved column indices for the run.
#[derive(Debug, Clone)]
struct Columns {
    name: usize,
    score: usize,
    cost: Option<usize>,
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿model"). If we don't strip it, schema validation
    // will incorrectly report missing columns.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn resolve_columns(
    header_map: &HashMap<String, usize>,
    have_book: bool,
) -> Result<Columns, AppError> {
    let name = header_map
        .get("name")
        .or_else(|| header_map.get("model"))
        .copied()
        .ok_or_else(|| AppError::usage("Missing required column: `name` (or `model`)."))?;

    let score = header_map
        .get("score")
        .or_else(|| header_map.get("accuracy"))
        .copied()
        .ok_or_else(|| AppError::usage("Missing required column: `score` (or `accuracy`)."))?;

    let cost = header_map.get("cost").copied();
    if cost.is_none() && !have_book {
        return Err(AppError::usage(
            "CSV has no `cost` column; provide one or pass a price book with `--prices`.",
        ));
    }

    Ok(Columns { name, score, cost })
}

fn parse_row(
    record: &StringRecord,
    columns: &Columns,
    book: Option<&PriceBook>,
) -> Result<Candidate, (Option<String>, String)> {
    let name = record
        .get(columns.name)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or((None, "Missing model name.".to_string()))?
        .to_string();

    let score = parse_f64(record.get(columns.score))
        .ok_or_else(|| (Some(name.clone()), "Missing/invalid `score` value.".to_string()))?;

    // Cost column takes precedence; the price book is the fallback.
    let cost = match columns.cost.and_then(|idx| parse_f64(record.get(idx))) {
        Some(cost) => cost,
        None => match book.and_then(|b| b.quote(&name)) {
            Some(quote) => quote.cost(),
            None => {
                let message = if columns.cost.is_some() {
                    "Missing/invalid `cost` value.".to_string()
                } else {
                    "Model not found in price book (price unknown).".to_string()
                };
                return Err((Some(name), message));
            }
        },
    };

    if cost < 0.0 {
        return Err((Some(name), format!("Negative cost ({cost}).")));
    }

    Ok(Candidate { name, cost, score })
}

fn parse_f64(s: Option<&str>) -> Option<f64> {
    let v = s?.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_basic_table() {
        let csv = "model,accuracy,cost\nA,82.7,69.29\nB,79.6,111.03\n";
        let data = load_candidates_from_reader(csv.as_bytes(), None).unwrap();
        assert_eq!(data.rows_read, 2);
        assert_eq!(data.rows_used, 2);
        assert!(data.row_errors.is_empty());
        assert_eq!(data.candidates[0].name, "A");
        assert!((data.stats.cost_max - 111.03).abs() < 1e-12);
    }

    #[test]
    fn bom_on_first_header_is_tolerated() {
        let csv = "\u{feff}name,score,cost\nA,10.0,1.0\n";
        let data = load_candidates_from_reader(csv.as_bytes(), None).unwrap();
        assert_eq!(data.rows_used, 1);
    }

    #[test]
    fn bad_rows_are_reported_not_dropped_silently() {
        let csv = "name,score,cost\nA,10.0,1.0\nB,not-a-number,2.0\nC,5.0,\n";
        let data = load_candidates_from_reader(csv.as_bytes(), None).unwrap();
        assert_eq!(data.rows_read, 3);
        assert_eq!(data.rows_used, 1);
        assert_eq!(data.row_errors.len(), 2);
        assert_eq!(data.row_errors[0].line, 3);
        assert_eq!(data.row_errors[0].name.as_deref(), Some("B"));
    }

    #[test]
    fn duplicate_names_are_row_errors() {
        let csv = "name,score,cost\nA,10.0,1.0\na,11.0,2.0\n";
        let data = load_candidates_from_reader(csv.as_bytes(), None).unwrap();
        assert_eq!(data.rows_used, 1);
        assert_eq!(data.row_errors.len(), 1);
        assert!(data.row_errors[0].message.contains("Duplicate"));
    }

    #[test]
    fn missing_cost_column_without_book_is_usage_error() {
        let csv = "name,score\nA,10.0\n";
        let err = load_candidates_from_reader(csv.as_bytes(), None).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn price_book_fills_missing_cost_column() {
        let book = PriceBook::parse(
            r#"{ "models": [ { "models": [
                { "name": "Claude 4 Sonnet", "input_price": 3.0, "output_price": 15.0 }
            ] } ] }"#,
        )
        .unwrap();

        let csv = "name,score\nClaude 4 Sonnet Thinking,72.08\nMystery Model,50.0\n";
        let data = load_candidates_from_reader(csv.as_bytes(), Some(&book)).unwrap();

        assert_eq!(data.rows_used, 1);
        assert!((data.candidates[0].cost - 18.0).abs() < 1e-12);

        // Unknown price propagates as a row error, never a default cost.
        assert_eq!(data.row_errors.len(), 1);
        assert!(data.row_errors[0].message.contains("price unknown"));
    }

    #[test]
    fn all_rows_invalid_is_no_data_error() {
        let csv = "name,score,cost\nA,,1.0\n";
        let err = load_candidates_from_reader(csv.as_bytes(), None).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
