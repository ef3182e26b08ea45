//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - dominated candidates: `o`
//! - frontier candidates: `F`
//! - frontier connection: `-` line segments
//!
//! The cost axis can be logarithmic (the usual choice for LLM pricing, which
//! spans several orders of magnitude).

use crate::domain::{Candidate, FrontierFile};

/// Render a scatter plot of all candidates with the frontier highlighted.
pub fn render_ascii_plot(
    candidates: &[Candidate],
    frontier: &[Candidate],
    width: usize,
    height: usize,
    log_x: bool,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (c_min, c_max) = cost_range(candidates).unwrap_or((0.1, 100.0));
    let (s_min, s_max) = score_range(candidates).unwrap_or((0.0, 1.0));
    let (s_min, s_max) = pad_range(s_min, s_max, 0.05);

    // Log axis needs strictly positive costs; fall back to linear otherwise.
    let log_x = log_x && c_min > 0.0;
    let x_axis = Axis {
        min: c_min,
        max: c_max,
        log: log_x,
    };

    let mut grid = vec![vec![' '; width]; height];

    // Connect the frontier first so points can overlay the line.
    let mut prev: Option<(usize, usize)> = None;
    for f in frontier {
        let x = x_axis.map(f.cost, width);
        let y = map_y(f.score, s_min, s_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(&mut grid, x0, y0, x, y, '-');
        }
        prev = Some((x, y));
    }

    for c in candidates {
        let x = x_axis.map(c.cost, width);
        let y = map_y(c.score, s_min, s_max, height);
        let ch = if is_frontier_point(frontier, c) { 'F' } else { 'o' };
        grid[y][x] = ch;
    }

    // Build final string. We include a small header with ranges.
    let scale = if log_x { "log " } else { "" };
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: cost=[{c_min:.2}, {c_max:.2}] $/Mtok ({scale}x) | score=[{s_min:.2}, {s_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// Render a plot from a saved frontier JSON file.
pub fn render_ascii_plot_from_frontier_file(
    file: &FrontierFile,
    width: usize,
    height: usize,
    log_x: bool,
) -> String {
    render_ascii_plot(&file.candidates, &file.frontier, width, height, log_x)
}

struct Axis {
    min: f64,
    max: f64,
    log: bool,
}

impl Axis {
    fn map(&self, v: f64, width: usize) -> usize {
        let width = width.max(2);
        let u = if self.log {
            let span = (self.max / self.min).ln();
            if span.abs() < 1e-12 {
                0.5
            } else {
                (v / self.min).ln() / span
            }
        } else if (self.max - self.min).abs() < 1e-12 {
            0.5
        } else {
            (v - self.min) / (self.max - self.min)
        };
        (u.clamp(0.0, 1.0) * (width as f64 - 1.0)).round() as usize
    }
}

fn is_frontier_point(frontier: &[Candidate], c: &Candidate) -> bool {
    frontier
        .iter()
        .any(|f| f.name == c.name && f.cost == c.cost && f.score == c.score)
}

fn cost_range(candidates: &[Candidate]) -> Option<(f64, f64)> {
    let mut min_c = f64::INFINITY;
    let mut max_c = f64::NEG_INFINITY;
    for c in candidates {
        min_c = min_c.min(c.cost);
        max_c = max_c.max(c.cost);
    }
    if min_c.is_finite() && max_c.is_finite() && max_c > min_c {
        Some((min_c, max_c))
    } else {
        None
    }
}

fn score_range(candidates: &[Candidate]) -> Option<(f64, f64)> {
    let mut min_s = f64::INFINITY;
    let mut max_s = f64::NEG_INFINITY;
    for c in candidates {
        min_s = min_s.min(c.score);
        max_s = max_s.max(c.score);
    }
    if min_s.is_finite() && max_s.is_finite() && max_s > min_s {
        Some((min_s, max_s))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_y(s: f64, s_min: f64, s_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((s - s_min) / (s_max - s_min)).clamp(0.0, 1.0);
    // score=max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_golden_snapshot_small() {
        let candidates = vec![
            Candidate::new("A", 1.0, 10.0),
            Candidate::new("B", 10.0, 20.0),
            Candidate::new("C", 10.0, 10.0),
        ];
        let frontier = vec![candidates[0].clone(), candidates[1].clone()];

        let txt = render_ascii_plot(&candidates, &frontier, 10, 5, false);
        let expected = concat!(
            "Plot: cost=[1.00, 10.00] $/Mtok (x) | score=[9.50, 20.50]\n",
            "        -F\n",
            "      --  \n",
            "    --    \n",
            "  --      \n",
            "F-       o\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn log_axis_spreads_decades_evenly() {
        let axis = Axis {
            min: 0.1,
            max: 100.0,
            log: true,
        };
        // Three decades: 0.1 -> col 0, 1.0 -> 1/3, 10 -> 2/3, 100 -> last.
        assert_eq!(axis.map(0.1, 31), 0);
        assert_eq!(axis.map(1.0, 31), 10);
        assert_eq!(axis.map(10.0, 31), 20);
        assert_eq!(axis.map(100.0, 31), 30);
    }

    #[test]
    fn log_request_with_zero_cost_falls_back_to_linear() {
        let candidates = vec![Candidate::new("free", 0.0, 1.0), Candidate::new("x", 10.0, 2.0)];
        let frontier = candidates.clone();
        let txt = render_ascii_plot(&candidates, &frontier, 20, 5, true);
        assert!(txt.contains("(x)"));
        assert!(!txt.contains("(log x)"));
    }
}
