//! Per-candidate regret against the frontier, and value rankings.

use crate::domain::{Candidate, Regret};
use crate::error::AppError;
use crate::frontier::best_score_at;

/// Value rankings (top-N each side).
#[derive(Debug, Clone)]
pub struct Rankings {
    /// Frontier members, ascending cost (cheapest efficient picks first).
    pub best_value: Vec<Regret>,
    /// Dominated candidates with the largest regret first.
    pub worst_buys: Vec<Regret>,
}

/// Compute each candidate's distance below the frontier step function.
///
/// `frontier` must be the output of `select_frontier` over the same
/// candidates (sorted ascending by cost).
pub fn compute_regrets(
    candidates: &[Candidate],
    frontier: &[Candidate],
) -> Result<Vec<Regret>, AppError> {
    let mut out = Vec::with_capacity(candidates.len());
    for c in candidates {
        let frontier_score = best_score_at(frontier, c.cost).ok_or_else(|| {
            AppError::invalid_input(format!(
                "No frontier point at or below cost {} (candidate '{}'); frontier and candidates are out of sync.",
                c.cost, c.name
            ))
        })?;

        let on_frontier = frontier
            .iter()
            .any(|f| f.name == c.name && f.cost == c.cost && f.score == c.score);

        out.push(Regret {
            candidate: c.clone(),
            frontier_score,
            regret: frontier_score - c.score,
            on_frontier,
        });
    }
    Ok(out)
}

/// Rank the top value picks and worst buys.
pub fn rank_value(regrets: &[Regret], top_n: usize) -> Rankings {
    let mut best_value: Vec<Regret> = regrets.iter().filter(|r| r.on_frontier).cloned().collect();
    best_value.sort_by(|a, b| {
        a.candidate
            .cost
            .partial_cmp(&b.candidate.cost)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    best_value.truncate(top_n);

    let mut worst_buys: Vec<Regret> = regrets.iter().filter(|r| !r.on_frontier).cloned().collect();
    worst_buys.sort_by(|a, b| {
        b.regret
            .partial_cmp(&a.regret)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    worst_buys.truncate(top_n);

    Rankings {
        best_value,
        worst_buys,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::select_frontier;

    fn c(name: &str, cost: f64, score: f64) -> Candidate {
        Candidate::new(name, cost, score)
    }

    #[test]
    fn frontier_members_have_zero_regret() {
        let candidates = vec![c("A", 1.0, 10.0), c("B", 2.0, 20.0), c("C", 3.0, 5.0)];
        let frontier = select_frontier(&candidates).unwrap();
        let regrets = compute_regrets(&candidates, &frontier).unwrap();

        let a = regrets.iter().find(|r| r.candidate.name == "A").unwrap();
        assert!(a.on_frontier);
        assert!((a.regret - 0.0).abs() < 1e-12);

        // C pays more than B for a lower score: regret = 20 - 5.
        let worst = regrets.iter().find(|r| r.candidate.name == "C").unwrap();
        assert!(!worst.on_frontier);
        assert!((worst.regret - 15.0).abs() < 1e-12);
    }

    #[test]
    fn rank_value_orders_both_sides() {
        let candidates = vec![
            c("A", 1.0, 10.0),
            c("B", 2.0, 20.0),
            c("C", 3.0, 5.0),
            c("D", 2.5, 12.0),
        ];
        let frontier = select_frontier(&candidates).unwrap();
        let regrets = compute_regrets(&candidates, &frontier).unwrap();
        let rankings = rank_value(&regrets, 10);

        let best: Vec<&str> = rankings
            .best_value
            .iter()
            .map(|r| r.candidate.name.as_str())
            .collect();
        assert_eq!(best, ["A", "B"]);

        let worst: Vec<&str> = rankings
            .worst_buys
            .iter()
            .map(|r| r.candidate.name.as_str())
            .collect();
        // C's regret (15) is larger than D's (8).
        assert_eq!(worst, ["C", "D"]);
    }
}
