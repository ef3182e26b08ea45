//! `llm-pareto` library crate.
//!
//! The binary (`pareto`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future dashboards, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod frontier;
pub mod io;
pub mod plot;
pub mod pricing;
pub mod report;
