use log::warn;

use super::frequency::FrequencyTable;
use super::random::UniformSource;

/// Character returned when rounding leaves no record with `cp >= r`.
pub const FALLBACK_CHAR: char = ' ';

/// Selects the character for a uniform draw `r` (inverse-CDF lookup).
///
/// Returns the character of the first record, in table order, whose
/// cumulative probability is `>= r`. Since `cp` is non-decreasing this is
/// a binary search over the records.
///
/// Returns `None` if no record qualifies, which only happens if `r` is
/// above the last `cp` because of floating-point rounding.
pub fn select(table: &FrequencyTable, r: f64) -> Option<char> {
	let records = table.records();
	let index = records.partition_point(|record| record.cp < r);
	records.get(index).map(|record| record.character)
}

/// Draws the next character from `table`.
///
/// The table must have gone through `calculate_probabilities` (trained
/// models always have). Falls back to [`FALLBACK_CHAR`] if the draw cannot
/// be matched.
pub fn sample_next<R: UniformSource + ?Sized>(table: &FrequencyTable, source: &mut R) -> char {
	let r = source.next_uniform();
	match select(table, r) {
		Some(c) => c,
		None => {
			let last_cp = table.records().last().map_or(0.0, |record| record.cp);
			warn!("no record matched draw {} (last cp {}), falling back to {:?}", r, last_cp, FALLBACK_CHAR);
			FALLBACK_CHAR
		}
	}
}
