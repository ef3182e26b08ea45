//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - scored/priced candidates (`Candidate`) and datasets (`Dataset`)
//! - frontier outputs and regret rankings inputs (`Regret`)
//! - the portable frontier JSON schema (`FrontierFile`)

pub mod types;

pub use types::*;
