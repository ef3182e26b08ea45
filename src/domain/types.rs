//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during frontier selection
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scored, priced model candidate.
///
/// Immutable after construction; `name` is expected to be unique within a
/// comparison run (ingest enforces this).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Model name, e.g. `"Claude 4 Sonnet Thinking"`.
    pub name: String,
    /// Blended cost in USD per 1M tokens (average of input and output rates,
    /// with any variant multipliers already applied).
    pub cost: f64,
    /// Benchmark score. Higher is better; units depend on the dataset
    /// (accuracy %, arena Elo, etc.).
    pub score: f64,
}

impl Candidate {
    pub fn new(name: impl Into<String>, cost: f64, score: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            score,
        }
    }
}

/// A named set of candidates for one comparison run.
///
/// The original scripts kept these as module-level literals; here the dataset
/// is explicit data handed to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Human-readable dataset label, e.g. `"LiveBench Coding"`.
    pub label: String,
    /// Label for the score axis, e.g. `"accuracy (%)"`.
    pub score_label: String,
    /// Date the scores/prices were observed, when known.
    pub asof: Option<NaiveDate>,
    pub candidates: Vec<Candidate>,
}

/// Summary stats about the candidates actually used for selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetStats {
    pub n: usize,
    pub cost_min: f64,
    pub cost_max: f64,
    pub score_min: f64,
    pub score_max: f64,
}

impl DatasetStats {
    /// Compute stats over a candidate slice. Returns `None` when the slice is
    /// empty or contains non-finite values.
    pub fn compute(candidates: &[Candidate]) -> Option<Self> {
        let mut cost_min = f64::INFINITY;
        let mut cost_max = f64::NEG_INFINITY;
        let mut score_min = f64::INFINITY;
        let mut score_max = f64::NEG_INFINITY;

        for c in candidates {
            cost_min = cost_min.min(c.cost);
            cost_max = cost_max.max(c.cost);
            score_min = score_min.min(c.score);
            score_max = score_max.max(c.score);
        }

        if !cost_min.is_finite() || !cost_max.is_finite() || !score_min.is_finite() || !score_max.is_finite()
        {
            return None;
        }

        Some(Self {
            n: candidates.len(),
            cost_min,
            cost_max,
            score_min,
            score_max,
        })
    }
}

/// Per-candidate distance below the frontier (used for ranking and exports).
///
/// `frontier_score` is the best score achievable at a cost less than or equal
/// to the candidate's cost; `regret = frontier_score - score` (0 for frontier
/// members).
#[derive(Debug, Clone)]
pub struct Regret {
    pub candidate: Candidate,
    pub frontier_score: f64,
    pub regret: f64,
    pub on_frontier: bool,
}

/// A saved frontier file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontierFile {
    pub tool: String,
    pub label: String,
    pub score_label: String,
    pub asof: Option<NaiveDate>,
    pub stats: DatasetStats,
    /// Every candidate considered in the run.
    pub candidates: Vec<Candidate>,
    /// The non-dominated subsequence, ordered by ascending cost.
    pub frontier: Vec<Candidate>,
}
