//! Utility modules for the estimation pipeline
//!
//! - Reference stream: seeded draws reproducing the reference generator

pub mod reference_stream;

pub use reference_stream::ReferenceStream;
