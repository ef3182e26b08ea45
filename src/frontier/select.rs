//! Non-dominated candidate selection.
//!
//! Dominance rule: candidate A dominates candidate B iff
//!
//! - `A.cost < B.cost && A.score >= B.score`, or
//! - `A.cost == B.cost && A.score > B.score`.
//!
//! The frontier is the subsequence of candidates no other candidate dominates,
//! ordered by ascending cost.
//!
//! Tie policy: comparisons are exact f64 equality, no epsilon. Candidates
//! sharing identical cost and identical score are all retained; a candidate
//! sharing cost with a higher-scoring one is dominated.
//!
//! The scan is O(n log n): sort by (cost asc, score desc), then keep a running
//! maximum score and emit only on strict improvement. For strict dominance
//! this is equivalent to the quadratic all-pairs check.

use std::cmp::Ordering;

use crate::domain::Candidate;
use crate::error::AppError;

/// Returns true when `a` dominates `b`.
pub fn dominates(a: &Candidate, b: &Candidate) -> bool {
    (a.cost < b.cost && a.score >= b.score) || (a.cost == b.cost && a.score > b.score)
}

/// Select the Pareto frontier over `candidates`.
///
/// - empty input returns an empty frontier (callers must tolerate this)
/// - non-finite or negative cost, or non-finite score, is rejected before the
///   scan runs; values are never coerced or silently skipped
pub fn select_frontier(candidates: &[Candidate]) -> Result<Vec<Candidate>, AppError> {
    validate(candidates)?;

    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    // Stable sort keeps exact (cost, score) duplicates in input order.
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&i, &j| {
        candidates[i]
            .cost
            .partial_cmp(&candidates[j].cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                candidates[j]
                    .score
                    .partial_cmp(&candidates[i].score)
                    .unwrap_or(Ordering::Equal)
            })
    });

    let mut out: Vec<Candidate> = Vec::new();
    let mut best_score = f64::NEG_INFINITY;

    for &i in &order {
        let c = &candidates[i];
        if c.score > best_score {
            best_score = c.score;
            out.push(c.clone());
        } else if let Some(last) = out.last() {
            // Exact duplicates of a frontier point are equally non-dominated.
            if c.cost == last.cost && c.score == last.score {
                out.push(c.clone());
            }
        }
    }

    Ok(out)
}

/// Best frontier score achievable at cost <= `cost`.
///
/// `frontier` must be sorted by ascending cost (as returned by
/// [`select_frontier`]). Returns `None` when no frontier point is affordable.
pub fn best_score_at(frontier: &[Candidate], cost: f64) -> Option<f64> {
    let mut best = None;
    for c in frontier {
        if c.cost > cost {
            break;
        }
        best = Some(c.score);
    }
    best
}

fn validate(candidates: &[Candidate]) -> Result<(), AppError> {
    for c in candidates {
        if !c.cost.is_finite() {
            return Err(AppError::invalid_input(format!(
                "Candidate '{}' has an undefined cost.",
                c.name
            )));
        }
        if c.cost < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Candidate '{}' has a negative cost ({}).",
                c.name, c.cost
            )));
        }
        if !c.score.is_finite() {
            return Err(AppError::invalid_input(format!(
                "Candidate '{}' has an undefined score.",
                c.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str, cost: f64, score: f64) -> Candidate {
        Candidate::new(name, cost, score)
    }

    fn names(frontier: &[Candidate]) -> Vec<&str> {
        frontier.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn dominated_candidate_is_excluded() {
        // C costs more than B but scores lower.
        let input = vec![c("A", 1.0, 10.0), c("B", 2.0, 20.0), c("C", 3.0, 5.0)];
        let frontier = select_frontier(&input).unwrap();
        assert_eq!(names(&frontier), ["A", "B"]);
    }

    #[test]
    fn equal_cost_keeps_only_highest_score() {
        let input = vec![c("low", 5.0, 10.0), c("high", 5.0, 20.0)];
        let frontier = select_frontier(&input).unwrap();
        assert_eq!(names(&frontier), ["high"]);
    }

    #[test]
    fn strictly_increasing_input_is_kept_whole() {
        let input = vec![
            c("A", 1.0, 10.0),
            c("D", 4.0, 40.0),
            c("B", 2.0, 20.0),
            c("C", 3.0, 30.0),
        ];
        let frontier = select_frontier(&input).unwrap();
        assert_eq!(names(&frontier), ["A", "B", "C", "D"]);
    }

    #[test]
    fn single_candidate_is_its_own_frontier() {
        let input = vec![c("only", 7.5, 42.0)];
        let frontier = select_frontier(&input).unwrap();
        assert_eq!(names(&frontier), ["only"]);
    }

    #[test]
    fn empty_input_yields_empty_frontier() {
        let frontier = select_frontier(&[]).unwrap();
        assert!(frontier.is_empty());
    }

    #[test]
    fn exact_cost_score_duplicates_are_all_retained() {
        let input = vec![c("A", 5.0, 20.0), c("B", 5.0, 20.0), c("C", 5.0, 10.0)];
        let frontier = select_frontier(&input).unwrap();
        assert_eq!(names(&frontier), ["A", "B"]);
    }

    #[test]
    fn equal_score_at_higher_cost_is_dominated() {
        let input = vec![c("cheap", 1.0, 50.0), c("pricey", 9.0, 50.0)];
        let frontier = select_frontier(&input).unwrap();
        assert_eq!(names(&frontier), ["cheap"]);
    }

    #[test]
    fn frontier_is_monotone_in_both_axes() {
        let input = vec![
            c("a", 0.3, 48.4),
            c("b", 111.0, 79.6),
            c("c", 5.4, 56.9),
            c("d", 0.7, 49.3),
            c("e", 37.4, 76.9),
            c("f", 19.6, 72.0),
            c("g", 183.2, 44.9),
            c("h", 1.1, 55.1),
        ];
        let frontier = select_frontier(&input).unwrap();
        for pair in frontier.windows(2) {
            assert!(pair[0].cost < pair[1].cost);
            assert!(pair[1].score > pair[0].score);
        }
    }

    #[test]
    fn matches_quadratic_reference_scan() {
        let input = vec![
            c("a", 0.32, 3.6),
            c("b", 0.34, 48.4),
            c("c", 0.43, 8.9),
            c("d", 1.12, 55.1),
            c("e", 5.42, 56.9),
            c("f", 18.16, 60.4),
            c("g", 26.58, 61.3),
            c("h", 36.83, 64.9),
            c("i", 65.75, 72.0),
            c("j", 69.29, 82.7),
            c("k", 111.03, 79.6),
            c("l", 186.5, 61.7),
        ];

        // Reference: all-pairs dominance check.
        let mut expected: Vec<&str> = input
            .iter()
            .filter(|b| !input.iter().any(|a| dominates(a, b)))
            .map(|x| x.name.as_str())
            .collect();
        expected.sort_unstable();

        let selected = select_frontier(&input).unwrap();
        let mut got = names(&selected);
        got.sort_unstable();
        assert_eq!(got, expected);
    }

    #[test]
    fn frontier_is_a_fixed_point() {
        let input = vec![
            c("A", 1.0, 10.0),
            c("B", 2.0, 20.0),
            c("C", 3.0, 5.0),
            c("D", 2.0, 20.0),
            c("E", 0.5, 10.0),
        ];
        let once = select_frontier(&input).unwrap();
        let twice = select_frontier(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn non_finite_cost_is_rejected() {
        let input = vec![c("ok", 1.0, 10.0), c("bad", f64::NAN, 20.0)];
        let err = select_frontier(&input).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn non_finite_score_is_rejected() {
        let input = vec![c("bad", 1.0, f64::INFINITY)];
        let err = select_frontier(&input).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn negative_cost_is_rejected() {
        let input = vec![c("bad", -0.5, 10.0)];
        let err = select_frontier(&input).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn best_score_at_steps_along_the_frontier() {
        let frontier = vec![c("A", 1.0, 10.0), c("B", 2.0, 20.0), c("C", 8.0, 30.0)];
        assert_eq!(best_score_at(&frontier, 0.5), None);
        assert_eq!(best_score_at(&frontier, 1.0), Some(10.0));
        assert_eq!(best_score_at(&frontier, 5.0), Some(20.0));
        assert_eq!(best_score_at(&frontier, 100.0), Some(30.0));
    }
}
