//! Pareto frontier selection (minimize cost, maximize score).
//!
//! This is the core of the tool: everything else is plumbing that feeds
//! candidates in or renders the selected subsequence out.

pub mod select;

pub use select::*;
