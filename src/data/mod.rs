//! Dataset sources.
//!
//! - seeded synthetic candidate generation (`sample`)
//!
//! Real datasets come in through `io::ingest`; the generator here exists for
//! demos and plot testing without external data.

pub mod sample;

pub use sample::*;
