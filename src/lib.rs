//! Synthetic dictionary generation.
//!
//! Pipeline: [`catalog::Catalog`] supplies fixed vocabulary fragments,
//! [`synth::Synthesizer`] produces candidate words from them,
//! [`builder::Builder`] enforces uniqueness and length bounds into an
//! ordered, size-exact sequence, and [`emit`] serializes the result as a
//! fixed-size constant array in a C header.
//!
//! Generated words are pseudo-English only; no attempt is made to validate
//! them against a real dictionary.

pub mod builder;
pub mod catalog;
pub mod emit;
pub mod error;
pub mod io_utils;
pub mod report;
pub mod synth;

pub use builder::{BuildConfig, Builder};
pub use catalog::{Catalog, WordSet};
pub use emit::{write_dictionary, write_dictionary_file};
pub use error::LexigenError;
pub use report::RunReport;
pub use synth::{Strategy, Synthesizer};
