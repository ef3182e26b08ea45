//! Reporting utilities: regrets, rankings, and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the selection code stays clean and testable
//! - output changes are localized (important for golden tests)

pub mod format;
pub mod regret;

pub use format::*;
pub use regret::*;
