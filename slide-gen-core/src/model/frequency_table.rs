use std::fmt;

use crate::error::{LanguageModelError, Result};

/// One character observed right after a window, with its statistics.
///
/// `probability` and `cumulative_probability` are derived from the counts of
/// the whole table and are only meaningful after
/// [`FrequencyTable::recompute_probabilities`].
#[derive(Clone, Debug, PartialEq)]
pub struct CharOutcome {
	character: char,
	count: usize,
	probability: f64,
	cumulative_probability: f64,
}

impl CharOutcome {
	fn new(character: char) -> Self {
		Self { character, count: 1, probability: 0.0, cumulative_probability: 0.0 }
	}

	pub fn character(&self) -> char {
		self.character
	}

	/// Number of times `character` followed the owning window.
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn probability(&self) -> f64 {
		self.probability
	}

	pub fn cumulative_probability(&self) -> f64 {
		self.cumulative_probability
	}
}

impl fmt::Display for CharOutcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"({:?} {} {:.4} {:.4})",
			self.character, self.count, self.probability, self.cumulative_probability
		)
	}
}

/// Distribution of the characters following a single window.
///
/// Outcomes are kept in the order their character was first seen. Both
/// recomputation and sampling walk that same order, which is what makes the
/// cumulative values usable as a categorical lookup.
///
/// ## Invariants
/// - Each character appears at most once
/// - Every count is >= 1
/// - After `recompute_probabilities`, the last cumulative value is ~1.0
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
	outcomes: Vec<CharOutcome>,
}

impl FrequencyTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.outcomes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.outcomes.is_empty()
	}

	/// Position of `character` in traversal order, if present.
	pub fn index_of(&self, character: char) -> Option<usize> {
		self.outcomes.iter().position(|o| o.character == character)
	}

	/// Returns the outcome at `index` in traversal order.
	///
	/// # Errors
	/// `IndexOutOfRange` if `index >= len()`.
	pub fn get(&self, index: usize) -> Result<&CharOutcome> {
		self.outcomes.get(index).ok_or(LanguageModelError::IndexOutOfRange {
			index,
			size: self.outcomes.len(),
		})
	}

	pub fn first(&self) -> Option<&CharOutcome> {
		self.outcomes.first()
	}

	pub fn iter(&self) -> impl Iterator<Item = &CharOutcome> {
		self.outcomes.iter()
	}

	/// Sum of all counts, i.e. how many times the window was observed.
	pub fn total_count(&self) -> usize {
		self.outcomes.iter().map(|o| o.count).sum()
	}

	/// Records one more occurrence of `character` after this window.
	///
	/// - If the character is already known, its count is increased.
	/// - Otherwise, a new outcome is appended with a count of 1.
	///
	/// Probabilities are left untouched; call `recompute_probabilities` next.
	pub fn update(&mut self, character: char) {
		match self.outcomes.iter_mut().find(|o| o.character == character) {
			Some(outcome) => outcome.count += 1,
			None => self.outcomes.push(CharOutcome::new(character)),
		}
	}

	/// Derives `probability` and `cumulative_probability` from the counts.
	///
	/// Two passes: sum the counts, then normalize while accumulating.
	/// Does nothing on an empty table.
	pub fn recompute_probabilities(&mut self) {
		let total = self.total_count();
		if total == 0 {
			return;
		}

		let mut cumulative = 0.0;
		for outcome in &mut self.outcomes {
			outcome.probability = outcome.count as f64 / total as f64;
			cumulative += outcome.probability;
			outcome.cumulative_probability = cumulative;
		}
	}

	/// Maps a uniform draw in `[0, 1)` to a character.
	///
	/// Returns the first outcome whose cumulative probability reaches `draw`.
	/// A draw above the last cumulative value (rounding shortfall) selects
	/// the last outcome. Returns `None` only for an empty table.
	pub fn sample(&self, draw: f64) -> Option<char> {
		self.outcomes
			.iter()
			.find(|o| o.cumulative_probability >= draw)
			.or_else(|| self.outcomes.last())
			.map(|o| o.character)
	}
}

impl fmt::Display for FrequencyTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "(")?;
		for (i, outcome) in self.outcomes.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{outcome}")?;
		}
		write!(f, ")")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn table_of(chars: &str) -> FrequencyTable {
		let mut table = FrequencyTable::new();
		for c in chars.chars() {
			table.update(c);
		}
		table.recompute_probabilities();
		table
	}

	#[test]
	fn update_counts_and_keeps_first_seen_order() {
		let table = table_of("abcab");
		let seen: Vec<(char, usize)> = table.iter().map(|o| (o.character(), o.count())).collect();
		assert_eq!(seen, vec![('a', 2), ('b', 2), ('c', 1)]);
		assert_eq!(table.total_count(), 5);
	}

	#[test]
	fn probabilities_are_normalized() {
		let table = table_of("aaab");
		assert_eq!(table.get(0).unwrap().probability(), 0.75);
		assert_eq!(table.get(1).unwrap().probability(), 0.25);
		assert_eq!(table.get(0).unwrap().cumulative_probability(), 0.75);
		assert!((table.get(1).unwrap().cumulative_probability() - 1.0).abs() < 1e-12);
	}

	#[test]
	fn sample_boundaries() {
		let table = table_of("abcabcd");
		assert_eq!(table.sample(0.0), Some('a'));
		assert_eq!(table.sample(0.999_999_999), Some('d'));
		assert_eq!(table.sample(1.5), Some('d'));
	}

	#[test]
	fn sample_is_weighted_by_cumulative() {
		// a: 0.5, b: 0.75, c: 1.0
		let table = table_of("aabc");
		assert_eq!(table.sample(0.5), Some('a'));
		assert_eq!(table.sample(0.51), Some('b'));
		assert_eq!(table.sample(0.75), Some('b'));
		assert_eq!(table.sample(0.76), Some('c'));
	}

	#[test]
	fn empty_table() {
		let mut table = FrequencyTable::new();
		table.recompute_probabilities();
		assert!(table.is_empty());
		assert_eq!(table.sample(0.3), None);
		assert!(table.first().is_none());
	}

	#[test]
	fn get_out_of_range() {
		let table = table_of("ab");
		match table.get(2) {
			Err(LanguageModelError::IndexOutOfRange { index, size }) => {
				assert_eq!(index, 2);
				assert_eq!(size, 2);
			}
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[test]
	fn index_of_finds_characters() {
		let table = table_of("xyz");
		assert_eq!(table.index_of('y'), Some(1));
		assert_eq!(table.index_of('q'), None);
	}

	#[test]
	fn display_lists_outcomes_in_order() {
		let table = table_of("ab");
		assert_eq!(table.to_string(), "(('a' 1 0.5000 0.5000) ('b' 1 0.5000 1.0000))");
	}
}
