use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::fmt;

use log::{debug, info};

use super::frequency::FrequencyTable;
use crate::error::{ModelError, Result};

/// Fixed-order character model mapping each window to its frequency table.
///
/// # Responsibilities
/// - Slide a window of `window_length` characters over a corpus
/// - Count, for every window, which characters follow it
/// - Freeze the probabilities once training is over
///
/// # Invariants
/// - `window_length` is always >= 1
/// - Every key is exactly `window_length` characters long
/// - Every table is non-empty and its probabilities are up to date
#[derive(Clone, Debug)]
pub struct NGramModel {
	/// Number of characters in a window
	window_length: usize,

	/// Mapping from a window to the characters observed right after it
	tables: HashMap<String, FrequencyTable>,
}

impl NGramModel {
	/// Creates an empty model.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength);
		}
		Ok(Self { window_length, tables: HashMap::new() })
	}

	/// Builds a model from a character stream.
	///
	/// The first `window_length` characters form the initial window. Every
	/// following character is counted against the current window, then the
	/// window slides by one. Probabilities are computed once at the end.
	///
	/// # Errors
	/// - `InvalidWindowLength` if `window_length` is 0
	/// - `InsufficientCorpus` if the stream holds `window_length` characters
	///   or fewer, since no transition could be observed
	pub fn train<I>(window_length: usize, chars: I) -> Result<Self>
	where
		I: IntoIterator<Item = char>,
	{
		let mut model = Self::new(window_length)?;
		let mut chars = chars.into_iter();

		let mut window: VecDeque<char> = chars.by_ref().take(window_length).collect();
		if window.len() < window_length {
			return Err(ModelError::InsufficientCorpus { window_length, read: window.len() });
		}

		let mut key = String::new();
		let mut consumed = window_length;
		for next_char in chars {
			key.clear();
			key.extend(window.iter());

			match model.tables.entry(key.clone()) {
				Entry::Occupied(mut entry) => entry.get_mut().observe(next_char),
				Entry::Vacant(entry) => {
					let mut table = FrequencyTable::new();
					table.observe(next_char);
					entry.insert(table);
				}
			}

			window.pop_front();
			window.push_back(next_char);
			consumed += 1;
		}

		if model.tables.is_empty() {
			return Err(ModelError::InsufficientCorpus { window_length, read: consumed });
		}

		for table in model.tables.values_mut() {
			table.calculate_probabilities();
		}

		info!("Trained model: {} window(s) of length {} from {} character(s)", model.tables.len(), window_length, consumed);
		debug!("Transitions recorded: {}", model.tables.values().map(FrequencyTable::total).sum::<usize>());

		Ok(model)
	}

	/// Number of characters in a window.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Returns the frequency table of `window`, if it was seen in training.
	pub fn get(&self, window: &str) -> Option<&FrequencyTable> {
		self.tables.get(window)
	}

	pub fn contains_window(&self, window: &str) -> bool {
		self.tables.contains_key(window)
	}

	/// Iterates over all `(window, table)` pairs, in map order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FrequencyTable)> {
		self.tables.iter().map(|(window, table)| (window.as_str(), table))
	}

	/// Number of distinct windows.
	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}
}

impl fmt::Display for NGramModel {
	/// One `window : table` line per window.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, table) in &self.tables {
			writeln!(f, "{} : {}", window, table)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_window_is_rejected() {
		assert!(matches!(NGramModel::new(0), Err(ModelError::InvalidWindowLength)));
		assert!(matches!(NGramModel::train(0, "abc".chars()), Err(ModelError::InvalidWindowLength)));
	}

	#[test]
	fn corpus_not_longer_than_window_is_rejected() {
		match NGramModel::train(3, "ab".chars()) {
			Err(ModelError::InsufficientCorpus { window_length, read }) => {
				assert_eq!(window_length, 3);
				assert_eq!(read, 2);
			}
			other => panic!("unexpected result: {:?}", other),
		}
		assert!(matches!(
			NGramModel::train(3, "abc".chars()),
			Err(ModelError::InsufficientCorpus { read: 3, .. })
		));
	}

	#[test]
	fn cyclic_corpus_gives_deterministic_chain() {
		let model = NGramModel::train(1, "abcabcabc".chars()).unwrap();
		assert_eq!(model.len(), 3);
		for (window, next) in [("a", 'b'), ("b", 'c'), ("c", 'a')] {
			let table = model.get(window).unwrap();
			assert_eq!(table.len(), 1);
			let record = table.get(next).unwrap();
			assert_eq!(record.p, 1.0);
			assert_eq!(record.cp, 1.0);
		}
	}

	#[test]
	fn last_window_of_corpus_has_no_successor() {
		let model = NGramModel::train(2, "xyz".chars()).unwrap();
		assert_eq!(model.len(), 1);
		assert!(model.contains_window("xy"));
		assert!(!model.contains_window("yz"));
	}

	#[test]
	fn windows_are_counted_in_chars() {
		let model = NGramModel::train(2, "héhéh".chars()).unwrap();
		assert_eq!(model.get("hé").and_then(|t| t.get('h')).map(|r| r.count), Some(2));
		assert_eq!(model.get("éh").and_then(|t| t.get('é')).map(|r| r.count), Some(1));
	}

	#[test]
	fn display_has_one_line_per_window() {
		let model = NGramModel::train(1, "aab".chars()).unwrap();
		let dump = model.to_string();
		let mut lines: Vec<&str> = dump.lines().collect();
		lines.sort();
		assert_eq!(lines, vec!["a : ((a 1 0.5 0.5) (b 1 0.5 1))"]);
	}
}
