use std::io;

use thiserror::Error;

/// Errors raised by the sliding-window language model.
///
/// A window unseen during training is not an error: generation simply stops
/// and returns what it produced so far.
#[derive(Error, Debug)]
pub enum LanguageModelError {
	/// A construction or configuration parameter is out of range.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// The corpus does not even fill the first window.
	#[error("insufficient input: need at least {required} characters, got {actual}")]
	InsufficientInput { required: usize, actual: usize },

	/// Positional access past the end of a frequency table.
	#[error("index {index} is out of range for a table of size {size}")]
	IndexOutOfRange { index: usize, size: usize },

	/// The corpus could not be read.
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LanguageModelError>;
