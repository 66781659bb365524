/* src/reader.rs */

use std::io::{self, BufRead};

use crate::Error;

/// Sequential token and line reader over buffered input.
#[derive(Debug)]
pub(crate) struct TokenReader<R> {
	inner: R,
}

impl<R: BufRead> TokenReader<R> {
	pub(crate) fn new(inner: R) -> Self {
		Self { inner }
	}

	pub(crate) fn into_inner(self) -> R {
		self.inner
	}

	/// Read the next whitespace-delimited token.
	///
	/// Leading whitespace, newlines included, is skipped. The whitespace byte
	/// that ends the token is left in the input. Returns `None` when input
	/// ends before a token starts.
	pub(crate) fn read_token(&mut self) -> Result<Option<String>, Error> {
		let started = self.scan(|buf| match buf.iter().position(|&b| !is_space(b)) {
			Some(n) => (n, true),
			None => (buf.len(), false),
		})?;
		if !started {
			return Ok(None);
		}

		let mut bytes = Vec::new();
		self.scan(|buf| match buf.iter().position(|&b| is_space(b)) {
			Some(n) => {
				bytes.extend_from_slice(&buf[..n]);
				(n, true)
			}
			None => {
				bytes.extend_from_slice(buf);
				(buf.len(), false)
			}
		})?;
		decode(bytes).map(Some)
	}

	/// Read up to the next `\n`, which is consumed but not returned. A `\r`
	/// right before it is dropped too, so `\r\n` files read the same as on
	/// a text-mode stream.
	///
	/// Returns `None` only when input ends before any byte is read.
	pub(crate) fn read_line(&mut self) -> Result<Option<String>, Error> {
		let mut bytes = Vec::new();
		if self.inner.read_until(b'\n', &mut bytes)? == 0 {
			return Ok(None);
		}
		if bytes.ends_with(b"\r\n") {
			bytes.truncate(bytes.len() - 2);
		} else if bytes.last() == Some(&b'\n') {
			bytes.pop();
		}
		decode(bytes).map(Some)
	}

	/// Drop everything up to and including the next `\n`.
	pub(crate) fn discard_line(&mut self) -> Result<usize, Error> {
		Ok(self.inner.skip_until(b'\n')?)
	}

	/// Feed buffered bytes to `step` until it reports completion.
	///
	/// `step` returns the number of bytes to consume and whether it is done.
	/// Returns `false` if input ended first.
	fn scan(&mut self, mut step: impl FnMut(&[u8]) -> (usize, bool)) -> Result<bool, Error> {
		loop {
			let (used, done) = match self.inner.fill_buf() {
				Ok([]) => return Ok(false),
				Ok(buf) => step(buf),
				Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
				Err(e) => return Err(e.into()),
			};
			self.inner.consume(used);
			if done {
				return Ok(true);
			}
		}
	}
}

/// Whitespace as understood by C stream extraction, vertical tab included.
fn is_space(b: u8) -> bool {
	matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

fn decode(bytes: Vec<u8>) -> Result<String, Error> {
	String::from_utf8(bytes).map_err(|e| Error::InvalidUtf8 {
		valid_up_to: e.utf8_error().valid_up_to(),
	})
}
