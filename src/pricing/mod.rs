//! Model price book loading and lookup.
//!
//! - JSON price book parsing (`book`)
//! - name-matching heuristics and variant multipliers
//!
//! An unknown price is a distinct, propagated state (`None`), never a numeric
//! default: a zero or guessed cost would silently distort the frontier.

pub mod book;

pub use book::*;
