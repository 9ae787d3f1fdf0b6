//! Top-level module for the character model.
//!
//! - Per-window statistics (`FrequencyTable`)
//! - The trained window map (`NGramModel`)
//! - Random draws (`UniformSource`, `RandomSource`)
//! - Character selection (`sampler`)
//! - The high-level training and generation interface (`LanguageModel`)

/// Ordered per-window character counts and their probabilities.
pub mod frequency;

/// Fixed-order model built by sliding a window over a corpus.
pub mod ngram_model;

/// Uniform random sources, seeded or from entropy.
pub mod random;

/// Inverse-CDF selection of the next character.
pub mod sampler;

/// High-level interface for training and generating text.
pub mod generator;
