use crate::error::Result;
use crate::model::language_model::{check_window_length, LanguageModel};

/// Seed used when a reproducible ("fixed") run is requested without an
/// explicit seed.
pub const FIXED_SEED: u64 = 20;

/// Parameters needed to build a `LanguageModel`.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelConfig {
	/// Number of characters in a window (must be >= 1).
	pub window_length: usize,

	/// Seed for the random source. `None` draws from the OS.
	pub seed: Option<u64>,
}

impl Default for ModelConfig {
	fn default() -> Self {
		Self { window_length: 3, seed: None }
	}
}

impl ModelConfig {
	/// Checks the parameters without building anything.
	///
	/// # Errors
	/// `InvalidArgument` if `window_length` is 0.
	pub fn validate(&self) -> Result<()> {
		check_window_length(self.window_length)
	}

	/// Builds an untrained model from this configuration.
	pub fn build(&self) -> Result<LanguageModel> {
		match self.seed {
			Some(seed) => LanguageModel::with_seed(self.window_length, seed),
			None => LanguageModel::new(self.window_length),
		}
	}
}
