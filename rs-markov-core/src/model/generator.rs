use std::fmt;
use std::path::Path;

use log::debug;

use crate::corpus;
use crate::error::{ModelError, Result};
use crate::model::ngram_model::NGramModel;
use crate::model::random::{RandomSource, UniformSource};
use crate::model::sampler;

/// High-level language model: trains on a corpus and generates text.
///
/// # Responsibilities
/// - Own the window length, the trained `NGramModel` and the random source
/// - Train once from a character stream or a corpus file
/// - Extend an initial text one sampled character at a time
///
/// The random source is private state: two models built with the same seed
/// and trained on the same corpus produce the same texts for the same calls.
#[derive(Debug)]
pub struct LanguageModel<R: UniformSource = RandomSource> {
	window_length: usize,
	model: NGramModel,
	source: R,
}

impl LanguageModel<RandomSource> {
	/// Creates a model whose generations change from run to run.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		Self::with_source(window_length, RandomSource::from_entropy())
	}

	/// Creates a model whose generations are reproducible for a given `seed`.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self> {
		Self::with_source(window_length, RandomSource::seeded(seed))
	}
}

impl<R: UniformSource> LanguageModel<R> {
	/// Creates a model drawing its random values from `source`.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn with_source(window_length: usize, source: R) -> Result<Self> {
		Ok(Self { window_length, model: NGramModel::new(window_length)?, source })
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// The trained model (empty until `train` succeeds).
	pub fn model(&self) -> &NGramModel {
		&self.model
	}

	/// Trains the model on a character stream.
	///
	/// # Errors
	/// - `AlreadyTrained` if the model was already trained
	/// - `InsufficientCorpus` if the stream is not longer than the window
	pub fn train<I>(&mut self, chars: I) -> Result<()>
	where
		I: IntoIterator<Item = char>,
	{
		if !self.model.is_empty() {
			return Err(ModelError::AlreadyTrained);
		}
		self.model = NGramModel::train(self.window_length, chars)?;
		Ok(())
	}

	/// Reads a corpus file and trains the model on its characters.
	///
	/// # Errors
	/// Same as [`train`](Self::train), plus I/O errors while reading the file.
	pub fn train_file<P: AsRef<Path>>(&mut self, filepath: P) -> Result<()> {
		let text = corpus::read_corpus(filepath)?;
		self.train(text.chars())
	}

	/// Generates text starting from `initial_text`.
	///
	/// # Behavior
	/// - Returns `initial_text` unchanged if it is shorter than the window, or
	///   if it already holds `target_length` characters or more.
	/// - Otherwise appends sampled characters while
	///   `chars(text) - window_length < target_length`, so the result may
	///   hold up to `target_length + window_length` characters.
	/// - Stops early, without error, when the current window was never seen
	///   during training.
	///
	/// # Notes
	/// - Lengths are counted in characters, not bytes.
	pub fn generate(&mut self, initial_text: &str, target_length: usize) -> String {
		let mut text: Vec<char> = initial_text.chars().collect();
		if self.window_length > text.len() || text.len() >= target_length {
			return initial_text.to_owned();
		}

		let mut window = String::with_capacity(self.window_length * 4);
		while text.len() - self.window_length < target_length {
			window.clear();
			window.extend(&text[text.len() - self.window_length..]);

			let Some(table) = self.model.get(&window) else {
				debug!("Unknown window {:?} after {} character(s), stopping", window, text.len());
				break;
			};
			text.push(sampler::sample_next(table, &mut self.source));
		}

		text.into_iter().collect()
	}
}

impl<R: UniformSource> fmt::Display for LanguageModel<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.model)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Replays a fixed list of draws, cycling when exhausted.
	struct Scripted {
		draws: Vec<f64>,
		next: usize,
	}

	impl UniformSource for Scripted {
		fn next_uniform(&mut self) -> f64 {
			let r = self.draws[self.next % self.draws.len()];
			self.next += 1;
			r
		}
	}

	fn trained(window_length: usize, corpus: &str, seed: u64) -> LanguageModel {
		let mut model = LanguageModel::with_seed(window_length, seed).unwrap();
		model.train(corpus.chars()).unwrap();
		model
	}

	#[test]
	fn initial_text_shorter_than_window_is_returned() {
		let mut model = trained(3, "abcdefgh", 1);
		assert_eq!(model.generate("ab", 10), "ab");
	}

	#[test]
	fn initial_text_already_long_enough_is_returned() {
		let mut model = trained(1, "abcabc", 1);
		assert_eq!(model.generate("abc", 2), "abc");
		assert_eq!(model.generate("abc", 3), "abc");
	}

	#[test]
	fn stopping_rule_is_offset_by_window_length() {
		let mut model = trained(1, "abcabcabc", 7);
		assert_eq!(model.generate("a", 5), "abcabc");

		let mut model = trained(2, "abcabcabc", 7);
		assert_eq!(model.generate("ab", 5), "abcabca");
	}

	#[test]
	fn dead_end_stops_generation() {
		let mut model = trained(2, "xyz", 3);
		assert_eq!(model.generate("xy", 10), "xyz");
	}

	#[test]
	fn unknown_initial_window_yields_initial_text() {
		let mut model = trained(2, "abcabc", 3);
		assert_eq!(model.generate("zz", 10), "zz");
	}

	#[test]
	fn scripted_draws_pick_expected_branches() {
		// After "a": b (cp 0.5), c (cp 1.0)
		let source = Scripted { draws: vec![0.1, 0.5, 0.9], next: 0 };
		let mut model = LanguageModel::with_source(1, source).unwrap();
		model.train("abac".chars()).unwrap();
		// "a" -> b, "b" -> a, "a" -> c, "c" unknown
		assert_eq!(model.generate("a", 10), "abac");
	}

	#[test]
	fn training_twice_is_rejected() {
		let mut model = trained(1, "abc", 1);
		assert!(matches!(model.train("abc".chars()), Err(ModelError::AlreadyTrained)));
	}

	#[test]
	fn failed_training_leaves_model_empty() {
		let mut model = LanguageModel::with_seed(4, 1).unwrap();
		assert!(matches!(model.train("abc".chars()), Err(ModelError::InsufficientCorpus { .. })));
		assert!(model.model().is_empty());
		assert_eq!(model.generate("abcd", 10), "abcd");
	}
}
