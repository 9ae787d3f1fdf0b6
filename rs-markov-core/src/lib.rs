//! Character-level Markov text generation library.
//!
//! This crate provides a fixed-order character model including:
//! - Training from a raw character stream or a corpus file
//! - Per-window frequency tables with frozen probability distributions
//! - Inverse-CDF sampling from an injectable random source
//! - Text generation that halts on windows never seen in training
//!
//! The entry point is [`model::generator::LanguageModel`].

/// Language model, frequency tables, sampling and generation.
pub mod model;

/// Corpus file reading.
pub mod corpus;

/// Error type shared by the whole crate.
pub mod error;

pub use error::{ModelError, Result};
pub use model::generator::LanguageModel;
