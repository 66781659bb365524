/* src/console.rs */

use std::any::type_name;
use std::fmt::{self, Display};
use std::io::{self, BufRead, Stdout, Write};
use std::str::FromStr;

use crate::Error;
use crate::bridge::{self, Utf8Stdin};
use crate::reader::TokenReader;

/// Console reader and writer that remembers whether the last typed read
/// succeeded.
///
/// Input is any [`BufRead`] carrying UTF-8, output is any [`Write`]. Output
/// is flushed before every read so prompts are visible while the read
/// blocks.
///
/// ```
/// use std::io::Cursor;
/// use unicode_console::Console;
///
/// let mut console = Console::new(Cursor::new("abc\n3\n"), Vec::new());
/// let n: u32 = console
/// 	.read_validated_with(|n: &u32| (1..=4).contains(n), "1 to 4 please", "a number please")
/// 	.unwrap();
/// assert_eq!(n, 3);
/// assert_eq!(console.output(), b"a number please\n");
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
	input: TokenReader<R>,
	output: W,
	last_read_valid: bool,
}

impl Console<Utf8Stdin, Stdout> {
	/// Create a console over the process standard streams.
	///
	/// Console output is switched to UTF-8 the first time this is called in
	/// the process. Input goes through [`Utf8Stdin`].
	#[must_use]
	pub fn stdio() -> Self {
		if let Err(e) = bridge::configure_output() {
			tracing::warn!(error = %e, "could not switch console output to UTF-8");
		}
		Self::new(Utf8Stdin::new(), io::stdout())
	}
}

impl<R: BufRead, W: Write> Console<R, W> {
	/// Create a console reading from `input` and writing to `output`.
	#[must_use]
	pub fn new(input: R, output: W) -> Self {
		Self {
			input: TokenReader::new(input),
			output,
			last_read_valid: true,
		}
	}

	/// Write `item` without a trailing newline.
	///
	/// # Errors
	///
	/// Returns [`Error::Io`] when the output sink fails.
	pub fn print(&mut self, item: impl Display) -> Result<&mut Self, Error> {
		write!(self.output, "{item}")?;
		Ok(self)
	}

	/// Write `item` followed by `\n`.
	///
	/// # Errors
	///
	/// Returns [`Error::Io`] when the output sink fails.
	pub fn println(&mut self, item: impl Display) -> Result<&mut Self, Error> {
		writeln!(self.output, "{item}")?;
		Ok(self)
	}

	/// Support for the `write!` and `writeln!` macros, for printing several
	/// items at once.
	///
	/// # Errors
	///
	/// Returns an error when the output sink fails.
	pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
		self.output.write_fmt(args)
	}

	/// Flush buffered output.
	///
	/// # Errors
	///
	/// Returns [`Error::Io`] when the output sink fails.
	pub fn flush(&mut self) -> Result<&mut Self, Error> {
		self.output.flush()?;
		Ok(self)
	}

	/// Whether the most recent typed read parsed as the requested type.
	///
	/// Line reads never change this.
	#[must_use]
	pub fn was_last_read_valid(&self) -> bool {
		self.last_read_valid
	}

	/// Read one whitespace-delimited token as `T`.
	///
	/// On a type mismatch the rest of the input line is discarded, the
	/// validity flag is cleared, and `T::default()` is returned.
	///
	/// # Errors
	///
	/// Returns [`Error::EndOfInput`] when input is exhausted, and
	/// [`Error::InvalidUtf8`] or [`Error::Io`] when the source fails.
	pub fn read<T>(&mut self) -> Result<T, Error>
	where
		T: FromStr + Default,
	{
		self.output.flush()?;
		let token = match self.input.read_token() {
			Ok(Some(token)) => token,
			Ok(None) => {
				self.last_read_valid = false;
				tracing::debug!(target_type = type_name::<T>(), "end of input");
				return Err(Error::EndOfInput);
			}
			Err(e) => {
				self.last_read_valid = false;
				if matches!(e, Error::InvalidUtf8 { .. }) {
					self.input.discard_line()?;
				}
				return Err(e);
			}
		};

		if let Ok(value) = token.parse::<T>() {
			self.last_read_valid = true;
			tracing::trace!(%token, target_type = type_name::<T>(), "read token");
			Ok(value)
		} else {
			self.last_read_valid = false;
			let discarded = self.input.discard_line()?;
			tracing::debug!(
				%token,
				target_type = type_name::<T>(),
				discarded,
				"token does not parse as the requested type"
			);
			Ok(T::default())
		}
	}

	/// Read one token into `place`, for chaining prompts and reads.
	///
	/// `place` is reset to `T::default()` on a type mismatch.
	///
	/// # Errors
	///
	/// Same as [`Console::read`].
	pub fn read_into<T>(&mut self, place: &mut T) -> Result<&mut Self, Error>
	where
		T: FromStr + Default,
	{
		*place = self.read()?;
		Ok(self)
	}

	/// Read a full line, without its `\n`. The line may be empty.
	///
	/// # Errors
	///
	/// Returns [`Error::EndOfInput`] when input is exhausted, and
	/// [`Error::InvalidUtf8`] or [`Error::Io`] when the source fails.
	pub fn read_line(&mut self) -> Result<String, Error> {
		self.output.flush()?;
		let line = self.input.read_line()?.ok_or(Error::EndOfInput)?;
		tracing::trace!(len = line.len(), "read line");
		Ok(line)
	}

	/// Read tokens until one parses as `T`, printing `error_message` after
	/// each one that does not.
	///
	/// # Errors
	///
	/// Same as [`Console::read`]; the loop stops at the first error.
	pub fn read_validated<T>(&mut self, error_message: &str) -> Result<T, Error>
	where
		T: FromStr + Default,
	{
		loop {
			let value = self.read::<T>()?;
			if self.last_read_valid {
				return Ok(value);
			}
			self.println(error_message)?;
		}
	}

	/// Read tokens until one parses as `T` and passes `is_valid`, printing
	/// `error_message` after every rejected token whatever the cause.
	///
	/// # Errors
	///
	/// Same as [`Console::read`]; the loop stops at the first error.
	pub fn read_validated_if<T>(
		&mut self,
		mut is_valid: impl FnMut(&T) -> bool,
		error_message: &str,
	) -> Result<T, Error>
	where
		T: FromStr + Default,
	{
		loop {
			let value = self.read::<T>()?;
			if self.last_read_valid {
				if is_valid(&value) {
					return Ok(value);
				}
				tracing::debug!(target_type = type_name::<T>(), "value rejected by predicate");
			}
			self.println(error_message)?;
		}
	}

	/// Read tokens until one parses as `T` and passes `is_valid`.
	///
	/// Prints `type_message` when a token is not a `T` and `custom_message`
	/// when it is but `is_valid` rejects it.
	///
	/// # Errors
	///
	/// Same as [`Console::read`]; the loop stops at the first error.
	pub fn read_validated_with<T>(
		&mut self,
		mut is_valid: impl FnMut(&T) -> bool,
		custom_message: &str,
		type_message: &str,
	) -> Result<T, Error>
	where
		T: FromStr + Default,
	{
		loop {
			let value = self.read::<T>()?;
			if !self.last_read_valid {
				self.println(type_message)?;
			} else if is_valid(&value) {
				return Ok(value);
			} else {
				tracing::debug!(target_type = type_name::<T>(), "value rejected by predicate");
				self.println(custom_message)?;
			}
		}
	}

	/// Read lines until one passes `is_valid`, printing `error_message` after
	/// each rejected line.
	///
	/// # Errors
	///
	/// Same as [`Console::read_line`]; the loop stops at the first error.
	pub fn read_line_validated(
		&mut self,
		mut is_valid: impl FnMut(&str) -> bool,
		error_message: &str,
	) -> Result<String, Error> {
		loop {
			let line = self.read_line()?;
			if is_valid(&line) {
				return Ok(line);
			}
			tracing::debug!(len = line.len(), "line rejected by predicate");
			self.println(error_message)?;
		}
	}

	/// Borrow the output sink.
	#[must_use]
	pub fn output(&self) -> &W {
		&self.output
	}

	/// Take back the input source and output sink.
	///
	/// Input that was buffered but not yet read stays in `R`.
	#[must_use]
	pub fn into_parts(self) -> (R, W) {
		(self.input.into_inner(), self.output)
	}
}
