//! Character-level sliding-window text generation library.
//!
//! This crate provides:
//! - Per-window character frequency tables
//! - Training from a character stream or a corpus file
//! - Weighted random generation, reproducible with a seed
//! - Model configuration and error types

/// Frequency tables and the language model itself.
pub mod model;

/// Model construction parameters.
pub mod config;

/// Error type shared by the whole crate.
pub mod error;

/// Corpus loading.
///
/// Not exposed, reached through `LanguageModel::train_file`.
pub(crate) mod io;

pub use config::{FIXED_SEED, ModelConfig};
pub use error::{LanguageModelError, Result};
pub use model::frequency_table::{CharOutcome, FrequencyTable};
pub use model::language_model::{LanguageModel, ModelStats};
