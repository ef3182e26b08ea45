//! Formatted terminal output for run summaries and rankings.

use crate::domain::{Candidate, Dataset, DatasetStats, Regret};
use crate::io::ingest::RowError;
use crate::report::Rankings;

/// Format the full run summary (dataset stats + frontier table).
pub fn format_run_summary(
    dataset: &Dataset,
    stats: &DatasetStats,
    frontier: &[Candidate],
    row_errors: &[RowError],
) -> String {
    let mut out = String::new();

    out.push_str("=== pareto - LLM Cost/Score Frontier ===\n");
    out.push_str(&format!("Dataset: {}\n", dataset.label));
    if let Some(asof) = dataset.asof {
        out.push_str(&format!("As-of: {asof}\n"));
    }
    out.push_str(&format!("Score: {}\n", dataset.score_label));
    out.push_str(&format!(
        "Candidates: n={} | cost=[{:.2}, {:.2}] $/Mtok | score=[{:.2}, {:.2}]\n",
        stats.n, stats.cost_min, stats.cost_max, stats.score_min, stats.score_max
    ));
    out.push_str(&format!(
        "Frontier: {} of {} candidates ({} dominated)\n",
        frontier.len(),
        stats.n,
        stats.n - frontier.len()
    ));

    if !row_errors.is_empty() {
        out.push_str(&format!("\nSkipped rows ({}):\n", row_errors.len()));
        for e in row_errors {
            match &e.name {
                Some(name) => out.push_str(&format!("  line {}: [{}] {}\n", e.line, name, e.message)),
                None => out.push_str(&format!("  line {}: {}\n", e.line, e.message)),
            }
        }
    }

    out.push_str("\nFrontier (ascending cost):\n");
    out.push_str(&format_frontier_table(frontier));
    out.push('\n');

    out
}

/// Format the best-value / worst-buy tables.
pub fn format_rankings(rankings: &Rankings) -> String {
    let mut out = String::new();

    out.push_str("Best value (frontier, cheapest first):\n");
    out.push_str(&format_regret_table(&rankings.best_value));
    out.push('\n');

    out.push_str("Worst buys (largest regret):\n");
    out.push_str(&format_regret_table(&rankings.worst_buys));

    out
}

fn format_frontier_table(frontier: &[Candidate]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<40} {:>12} {:>10}\n",
        "name", "cost $/Mtok", "score"
    ));
    out.push_str(&format!("{:-<40} {:-<12} {:-<10}\n", "", "", ""));
    for c in frontier {
        out.push_str(&format!(
            "{:<40} {:>12.2} {:>10.2}\n",
            truncate(&c.name, 40),
            c.cost,
            c.score
        ));
    }
    out
}

fn format_regret_table(rows: &[Regret]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<40} {:>12} {:>10} {:>10}\n",
        "name", "cost $/Mtok", "score", "regret"
    ));
    out.push_str(&format!("{:-<40} {:-<12} {:-<10} {:-<10}\n", "", "", "", ""));
    for r in rows {
        out.push_str(&format!(
            "{:<40} {:>12.2} {:>10.2} {:>10.2}\n",
            truncate(&r.candidate.name, 40),
            r.candidate.cost,
            r.candidate.score,
            r.regret
        ));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_frontier_size_and_skips() {
        let dataset = Dataset {
            label: "LiveBench".to_string(),
            score_label: "accuracy (%)".to_string(),
            asof: None,
            candidates: vec![
                Candidate::new("A", 1.0, 10.0),
                Candidate::new("B", 2.0, 20.0),
                Candidate::new("C", 3.0, 5.0),
            ],
        };
        let stats = DatasetStats::compute(&dataset.candidates).unwrap();
        let frontier = crate::frontier::select_frontier(&dataset.candidates).unwrap();
        let errors = vec![RowError {
            line: 5,
            name: Some("Mystery".to_string()),
            message: "Model not found in price book (price unknown).".to_string(),
        }];

        let text = format_run_summary(&dataset, &stats, &frontier, &errors);
        assert!(text.contains("Frontier: 2 of 3 candidates (1 dominated)"));
        assert!(text.contains("line 5: [Mystery]"));
        assert!(text.contains("Dataset: LiveBench"));
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "x".repeat(60);
        let table = format_frontier_table(&[Candidate::new(long, 1.0, 2.0)]);
        let row = table.lines().nth(2).unwrap();
        assert!(row.starts_with(&"x".repeat(39)));
        assert!(row.contains("x."));
    }
}
