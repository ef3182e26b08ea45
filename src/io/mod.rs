//! Input/output helpers.
//!
//! - CSV ingest + validation (`ingest`)
//! - per-candidate result exports (`export`)
//! - frontier JSON read/write (`frontier_file`)

pub mod export;
pub mod frontier_file;
pub mod ingest;

pub use export::*;
pub use frontier_file::*;
pub use ingest::*;
