//! Synthetic candidate generation.
//!
//! Generates a deterministic, seeded cloud of (cost, score) candidates that
//! looks like a real leaderboard: costs log-uniform across the configured
//! range, scores following a saturating curve of log-cost with Gaussian
//! noise, plus occasional overpriced/bargain outliers.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{Candidate, Dataset};
use crate::error::AppError;

/// Score reached at the cheap end of the cost range.
const SCORE_FLOOR: f64 = 25.0;

/// Score span covered across the full cost range.
const SCORE_SPAN: f64 = 55.0;

/// Std dev of per-candidate score noise.
const SCORE_SIGMA: f64 = 3.0;

#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub count: usize,
    pub seed: u64,
    /// Cost range in USD per 1M tokens; log-uniform sampling requires > 0.
    pub cost_min: f64,
    pub cost_max: f64,
    /// Probability of an overpriced outlier (score well below the trend).
    pub outlier_prob_over: f64,
    /// Probability of a bargain outlier (score well above the trend).
    pub outlier_prob_under: f64,
    /// Outlier magnitude multiplier (in units of the noise sigma).
    pub outlier_k: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 40,
            seed: 42,
            cost_min: 0.25,
            cost_max: 120.0,
            outlier_prob_over: 0.05,
            outlier_prob_under: 0.05,
            outlier_k: 4.0,
        }
    }
}

/// Generate a deterministic synthetic dataset.
pub fn generate_sample(config: &SampleConfig) -> Result<Dataset, AppError> {
    if config.count == 0 {
        return Err(AppError::usage("Sample count must be > 0."));
    }
    if !(config.cost_min.is_finite()
        && config.cost_max.is_finite()
        && config.cost_min > 0.0
        && config.cost_max > config.cost_min)
    {
        return Err(AppError::usage("Invalid cost range for sample generation."));
    }
    if config.outlier_prob_over < 0.0
        || config.outlier_prob_under < 0.0
        || (config.outlier_prob_over + config.outlier_prob_under) >= 1.0
    {
        return Err(AppError::usage("Invalid outlier probability settings."));
    }
    if !(config.outlier_k.is_finite() && config.outlier_k > 0.0) {
        return Err(AppError::usage("Invalid outlier magnitude setting."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let noise = Normal::new(0.0, SCORE_SIGMA)
        .map_err(|e| AppError::invalid_input(format!("Noise distribution error: {e}")))?;

    let log_span = (config.cost_max / config.cost_min).ln();

    let mut candidates = Vec::with_capacity(config.count);
    for i in 0..config.count {
        // Log-uniform cost across the range.
        let u: f64 = rng.r#gen();
        let cost = config.cost_min * (u * log_span).exp();

        // Saturating trend: cheap models cluster near the floor, expensive
        // models approach floor + span.
        let progress = (cost / config.cost_min).ln() / log_span;
        let mut score = SCORE_FLOOR + SCORE_SPAN * progress.sqrt() + noise.sample(&mut rng);

        let jump: f64 = rng.r#gen();
        if jump < config.outlier_prob_over {
            score -= config.outlier_k * SCORE_SIGMA * (1.0 + rng.r#gen::<f64>());
        } else if jump < config.outlier_prob_over + config.outlier_prob_under {
            score += config.outlier_k * SCORE_SIGMA * (1.0 + rng.r#gen::<f64>());
        }

        candidates.push(Candidate::new(
            format!("model-{:03}", i + 1),
            cost,
            score.clamp(0.0, 100.0),
        ));
    }

    Ok(Dataset {
        label: format!("synthetic sample (seed {})", config.seed),
        score_label: "score (synthetic)".to_string(),
        asof: None,
        candidates,
    })
}
