use std::fmt;

/// Statistics for one character observed after a given window.
///
/// `p` and `cp` are only meaningful once the owning
/// [`FrequencyTable`] has been through [`FrequencyTable::calculate_probabilities`].
#[derive(Clone, Debug, PartialEq)]
pub struct CharFrequency {
	/// The observed next character.
	pub character: char,
	/// How many times it followed the window (always >= 1).
	pub count: usize,
	/// Probability of the character given the window.
	pub p: f64,
	/// Cumulative probability up to and including this record, in table order.
	pub cp: f64,
}

impl CharFrequency {
	/// Creates a record for a character seen for the first time.
	fn first_seen(character: char) -> Self {
		Self { character, count: 1, p: 0.0, cp: 0.0 }
	}
}

impl fmt::Display for CharFrequency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {} {})", self.character, self.count, self.p, self.cp)
	}
}

/// All the characters observed after one window.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Invariants
/// - Records are kept in first-seen order; sampling tie-breaks depend on it.
/// - Each character appears at most once and every count is strictly positive.
/// - After `calculate_probabilities`, `p` sums to 1.0 and `cp` is
///   non-decreasing, ending at 1.0 (within floating-point tolerance).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencyTable {
	records: Vec<CharFrequency>,
}

impl FrequencyTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self { records: Vec::new() }
	}

	/// Records an occurrence of `next_char`.
	///
	/// - If the character is already present, its count is increased.
	/// - Otherwise a new record is appended with a count of 1.
	pub fn observe(&mut self, next_char: char) {
		match self.records.iter_mut().find(|record| record.character == next_char) {
			Some(record) => record.count += 1,
			None => self.records.push(CharFrequency::first_seen(next_char)),
		}
	}

	/// Computes `p` and `cp` for every record from the counts.
	///
	/// The running sum follows table order, so calling this again with
	/// unchanged counts reproduces exactly the same values.
	pub fn calculate_probabilities(&mut self) {
		let total = self.total();
		if total == 0 {
			return;
		}

		let mut cumulative = 0.0;
		for record in &mut self.records {
			record.p = record.count as f64 / total as f64;
			cumulative += record.p;
			record.cp = cumulative;
		}
	}

	/// Sum of all counts in the table.
	pub fn total(&self) -> usize {
		self.records.iter().map(|record| record.count).sum()
	}

	/// Returns the record for `character`, if it was observed.
	pub fn get(&self, character: char) -> Option<&CharFrequency> {
		self.records.iter().find(|record| record.character == character)
	}

	/// Records in first-seen order.
	pub fn records(&self) -> &[CharFrequency] {
		&self.records
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl fmt::Display for FrequencyTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "(")?;
		for (i, record) in self.records.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", record)?;
		}
		write!(f, ")")
	}
}
