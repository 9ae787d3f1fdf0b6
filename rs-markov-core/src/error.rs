use thiserror::Error;

/// Errors raised while building a language model.
///
/// Dead ends during generation are not errors: generation simply stops
/// and returns the text produced so far.
#[derive(Error, Debug)]
pub enum ModelError {
	#[error("Window length must be >= 1")]
	InvalidWindowLength,

	#[error("Corpus too short: {read} character(s) read, more than {window_length} required")]
	InsufficientCorpus { window_length: usize, read: usize },

	#[error("Model is already trained")]
	AlreadyTrained,

	#[error("IO Error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
