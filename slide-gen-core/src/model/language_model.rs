use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::path::Path;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::frequency_table::FrequencyTable;
use crate::error::{LanguageModelError, Result};
use crate::io::read_corpus;

/// Character-level sliding-window language model.
///
/// For every window of `window_length` characters seen in the corpus, the
/// model keeps a [`FrequencyTable`] of the characters that followed it.
/// Generation repeatedly samples from the table of the trailing window.
///
/// # Responsibilities
/// - Scan a corpus once and accumulate per-window counts
/// - Keep every table's probabilities consistent with its counts
/// - Generate text from a seed, reproducibly when built with a seed
///
/// # Invariants
/// - `window_length` is always >= 1
/// - Every key of `tables` is exactly `window_length` characters long
/// - No table is empty
#[derive(Debug)]
pub struct LanguageModel {
	window_length: usize,
	tables: HashMap<String, FrequencyTable>,
	rng: StdRng,
}

/// Size summary of a trained model.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ModelStats {
	pub window_length: usize,
	/// Number of distinct windows.
	pub windows: usize,
	/// Number of training steps recorded across all windows.
	pub observations: usize,
}

impl LanguageModel {
	/// Creates a model whose random source is seeded from the OS.
	///
	/// # Errors
	/// `InvalidArgument` if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		Self::with_rng(window_length, StdRng::from_os_rng())
	}

	/// Creates a model with a deterministic random source.
	///
	/// Two models built with the same seed and driven by the same calls
	/// generate identical text.
	///
	/// # Errors
	/// `InvalidArgument` if `window_length` is 0.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self> {
		Self::with_rng(window_length, StdRng::seed_from_u64(seed))
	}

	fn with_rng(window_length: usize, rng: StdRng) -> Result<Self> {
		check_window_length(window_length)?;
		Ok(Self { window_length, tables: HashMap::new(), rng })
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Number of distinct windows learned so far.
	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}

	/// Returns the table learned for `window`, if it was ever seen.
	pub fn table(&self, window: &str) -> Option<&FrequencyTable> {
		self.tables.get(window)
	}

	/// All known windows, sorted.
	pub fn windows(&self) -> Vec<&str> {
		let mut windows: Vec<&str> = self.tables.keys().map(String::as_str).collect();
		windows.sort_unstable();
		windows
	}

	pub fn stats(&self) -> ModelStats {
		ModelStats {
			window_length: self.window_length,
			windows: self.tables.len(),
			observations: self.tables.values().map(FrequencyTable::total_count).sum(),
		}
	}

	/// Learns from a stream of characters.
	///
	/// The first `window_length` characters seed the rolling window; every
	/// following character updates the table of the window before it, and
	/// then slides the window by one. The trailing window of the corpus is
	/// never followed by anything and gets no entry.
	///
	/// Calling `train` again keeps accumulating into the same tables; each
	/// call starts a fresh rolling window.
	///
	/// # Returns
	/// The number of training steps, i.e. corpus length minus window length.
	///
	/// # Errors
	/// `InsufficientInput` if the stream holds fewer than `window_length`
	/// characters. The model is left untouched in that case.
	pub fn train<I>(&mut self, corpus: I) -> Result<usize>
	where
		I: IntoIterator<Item = char>,
	{
		let mut chars = corpus.into_iter();
		let mut window: VecDeque<char> = chars.by_ref().take(self.window_length).collect();
		if window.len() < self.window_length {
			return Err(LanguageModelError::InsufficientInput {
				required: self.window_length,
				actual: window.len(),
			});
		}

		let mut steps = 0;
		for c in chars {
			let key: String = window.iter().collect();
			let table = self.tables.entry(key).or_insert_with_key(|key| {
				trace!("new window {key:?}");
				FrequencyTable::new()
			});
			table.update(c);
			table.recompute_probabilities();

			window.pop_front();
			window.push_back(c);
			steps += 1;
		}

		debug!("trained on {} steps, {} windows known", steps, self.tables.len());
		Ok(steps)
	}

	/// Reads a corpus file and trains on its characters.
	pub fn train_file<P: AsRef<Path>>(&mut self, filename: P) -> Result<usize> {
		let corpus = read_corpus(&filename)?;
		self.train(corpus.chars())
	}

	/// Generates up to `count` characters following `seed_text`.
	///
	/// # Returns
	/// `seed_text` followed by the generated characters.
	///
	/// # Behavior
	/// - A seed shorter than one window is returned unchanged.
	/// - Generation stops early when the trailing window was never seen
	///   during training; the text produced so far is returned.
	pub fn generate(&mut self, seed_text: &str, count: usize) -> String {
		let mut output = seed_text.to_owned();
		let seed_len = seed_text.chars().count();
		if seed_len < self.window_length {
			return output;
		}

		let mut window: VecDeque<char> = seed_text.chars().skip(seed_len - self.window_length).collect();
		let mut emitted = 0;
		while emitted < count {
			let key: String = window.iter().collect();
			let Some(table) = self.tables.get(&key) else {
				trace!("window {key:?} never seen, stopping");
				break;
			};
			let draw: f64 = self.rng.random();
			let Some(c) = table.sample(draw) else {
				break;
			};

			output.push(c);
			window.pop_front();
			window.push_back(c);
			emitted += 1;
		}

		debug!("generated {emitted}/{count} characters");
		output
	}

	/// Picks a known window uniformly at random.
	///
	/// Windows are drawn from the sorted list so that seeded models stay
	/// reproducible. Returns `None` for an untrained model.
	pub fn random_window(&mut self) -> Option<String> {
		let mut windows: Vec<&String> = self.tables.keys().collect();
		windows.sort_unstable();
		windows.into_iter().choose(&mut self.rng).cloned()
	}

	/// Human-readable dump of every window and its table, sorted by window.
	pub fn to_text(&self) -> String {
		self.to_string()
	}
}

/// Fails with `InvalidArgument` unless `window_length >= 1`.
pub(crate) fn check_window_length(window_length: usize) -> Result<()> {
	if window_length == 0 {
		return Err(LanguageModelError::InvalidArgument(
			"window length must be >= 1".to_owned(),
		));
	}
	Ok(())
}

impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut entries: Vec<(&String, &FrequencyTable)> = self.tables.iter().collect();
		entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
		for (window, table) in entries {
			writeln!(f, "{window:?} : {table}")?;
		}
		Ok(())
	}
}
