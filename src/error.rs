/* src/error.rs */

use std::io;

/// Errors produced while reading from or writing to the console.
///
/// A token that fails to parse as the requested type is not an error: it is
/// recorded by [`Console::was_last_read_valid`](crate::Console::was_last_read_valid)
/// and recovered by the validated reads.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// Input was closed before a token or line could be read.
	#[error("end of input")]
	EndOfInput,

	/// Input bytes do not form valid UTF-8.
	#[error("input is not valid UTF-8 after {valid_up_to} bytes")]
	InvalidUtf8 {
		/// Length of the valid prefix.
		valid_up_to: usize,
	},

	/// The underlying input source or output sink failed.
	#[error(transparent)]
	Io(#[from] io::Error),
}

impl Error {
	/// Check whether the input source has been exhausted.
	#[must_use]
	pub fn is_end_of_input(&self) -> bool {
		matches!(self, Self::EndOfInput)
	}
}
