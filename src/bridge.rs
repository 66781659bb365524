/* src/bridge.rs */

//! Platform text encoding bridge.
//!
//! Everything above this module sees UTF-8 bytes. On Windows an interactive
//! console is read as UTF-16 and transcoded here; every other input passes
//! through unchanged.

use std::io::{self, BufRead, Read};
#[cfg(windows)]
use std::io::BufReader;

#[cfg(windows)]
mod windows;

/// Switch console output to UTF-8.
///
/// Only the first call in a process does anything; later calls return
/// `Ok(())`. A no-op outside Windows.
#[cfg(windows)]
pub(crate) fn configure_output() -> io::Result<()> {
	use std::sync::Once;

	static CONFIGURE: Once = Once::new();
	let mut result = Ok(());
	CONFIGURE.call_once(|| result = windows::set_utf8_output_code_page());
	result
}

#[cfg(not(windows))]
pub(crate) fn configure_output() -> io::Result<()> {
	Ok(())
}

/// Standard input delivered as UTF-8.
///
/// Reads from a Windows console go through the wide-character console API
/// and are transcoded, with `\r\n` reduced to `\n`. Redirected input and
/// input on other platforms is passed through as-is, straight from the
/// process-wide buffer of [`io::Stdin`], so any number of `Utf8Stdin`
/// values and plain `io::stdin()` readers see one shared stream.
///
/// A Windows console keeps a private buffer of transcoded text; input
/// typed ahead of a read stays with the `Utf8Stdin` that read it.
#[derive(Debug)]
pub struct Utf8Stdin {
	source: Source,
}

#[derive(Debug)]
enum Source {
	Shared(SharedStdin),
	#[cfg(windows)]
	Console(BufReader<windows::WideConsole>),
}

impl Utf8Stdin {
	/// Attach to the process standard input.
	#[must_use]
	pub fn new() -> Self {
		#[cfg(windows)]
		if let Some(console) = windows::WideConsole::open() {
			tracing::debug!("reading standard input through the wide console API");
			return Self {
				source: Source::Console(BufReader::new(console)),
			};
		}
		Self {
			source: Source::Shared(SharedStdin::default()),
		}
	}
}

impl Default for Utf8Stdin {
	fn default() -> Self {
		Self::new()
	}
}

impl Read for Utf8Stdin {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let available = self.fill_buf()?;
		let n = available.len().min(buf.len());
		buf[..n].copy_from_slice(&available[..n]);
		self.consume(n);
		Ok(n)
	}
}

impl BufRead for Utf8Stdin {
	fn fill_buf(&mut self) -> io::Result<&[u8]> {
		match &mut self.source {
			Source::Shared(stdin) => stdin.fill_buf(),
			#[cfg(windows)]
			Source::Console(console) => console.fill_buf(),
		}
	}

	fn consume(&mut self, amt: usize) {
		match &mut self.source {
			Source::Shared(stdin) => stdin.consume(amt),
			#[cfg(windows)]
			Source::Console(console) => console.consume(amt),
		}
	}
}

/// View of the buffer inside [`io::Stdin`].
///
/// `fill_buf` copies what std has buffered without consuming it, and
/// `consume` advances std's buffer. Nothing is held between calls, so bytes
/// not consumed here remain available to every other reader of stdin.
#[derive(Debug)]
struct SharedStdin {
	stdin: io::Stdin,
	peeked: Vec<u8>,
}

impl Default for SharedStdin {
	fn default() -> Self {
		Self {
			stdin: io::stdin(),
			peeked: Vec::new(),
		}
	}
}

impl SharedStdin {
	fn fill_buf(&mut self) -> io::Result<&[u8]> {
		self.peeked.clear();
		let mut lock = self.stdin.lock();
		self.peeked.extend_from_slice(lock.fill_buf()?);
		Ok(&self.peeked)
	}

	fn consume(&mut self, amt: usize) {
		let amt = amt.min(self.peeked.len());
		self.stdin.lock().consume(amt);
		self.peeked.clear();
	}
}

/// Incremental UTF-16 to UTF-8 transcoder.
///
/// A high surrogate or `\r` at the end of a chunk is held back until the
/// next chunk shows what follows it. Unpaired surrogates become U+FFFD.
#[cfg_attr(not(windows), allow(dead_code))]
#[derive(Debug, Default)]
pub(crate) struct Utf16Decoder {
	pending_surrogate: Option<u16>,
	pending_cr: bool,
}

#[cfg_attr(not(windows), allow(dead_code))]
impl Utf16Decoder {
	pub(crate) fn decode(&mut self, units: &[u16], out: &mut Vec<u8>) {
		let mut joined: Vec<u16> = self.pending_surrogate.take().into_iter().collect();
		joined.extend_from_slice(units);
		if joined.last().is_some_and(|u| (0xD800..=0xDBFF).contains(u)) {
			self.pending_surrogate = joined.pop();
		}

		for c in char::decode_utf16(joined).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)) {
			if self.pending_cr {
				self.pending_cr = false;
				if c != '\n' {
					out.push(b'\r');
				}
			}
			if c == '\r' {
				self.pending_cr = true;
				continue;
			}
			let mut utf8 = [0u8; 4];
			out.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
		}
	}

	/// Flush whatever is held back once input has ended.
	pub(crate) fn finish(&mut self, out: &mut Vec<u8>) {
		if self.pending_surrogate.take().is_some() {
			if self.pending_cr {
				out.push(b'\r');
				self.pending_cr = false;
			}
			out.extend_from_slice(char::REPLACEMENT_CHARACTER.to_string().as_bytes());
		}
		if self.pending_cr {
			out.push(b'\r');
			self.pending_cr = false;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn decode_chunks(chunks: &[&[u16]]) -> String {
		let mut decoder = Utf16Decoder::default();
		let mut out = Vec::new();
		for chunk in chunks {
			decoder.decode(chunk, &mut out);
		}
		decoder.finish(&mut out);
		String::from_utf8(out).unwrap()
	}

	fn utf16(s: &str) -> Vec<u16> {
		s.encode_utf16().collect()
	}

	#[test]
	fn stdin_can_move_between_threads() {
		fn assert_send<T: Send>() {}
		assert_send::<Utf8Stdin>();
	}

	#[test]
	fn plain_text() {
		let units = utf16("Åå Ää Öö Ññ Üü α δ λ μ π τ");
		assert_eq!(decode_chunks(&[&units]), "Åå Ää Öö Ññ Üü α δ λ μ π τ");
	}

	#[test]
	fn crlf_becomes_lf() {
		let units = utf16("one\r\ntwo\r\n");
		assert_eq!(decode_chunks(&[&units]), "one\ntwo\n");
	}

	#[test]
	fn crlf_split_across_chunks() {
		let units = utf16("line\r\n");
		let (a, b) = units.split_at(5);
		assert_eq!(decode_chunks(&[a, b]), "line\n");
	}

	#[test]
	fn lone_cr_is_kept() {
		let units = utf16("a\rb\r");
		assert_eq!(decode_chunks(&[&units]), "a\rb\r");
	}

	#[test]
	fn surrogate_pair_split_across_chunks() {
		let units = utf16("x🦀y");
		// 'x', high surrogate | low surrogate, 'y'
		let (a, b) = units.split_at(2);
		assert_eq!(decode_chunks(&[a, b]), "x🦀y");
	}

	#[test]
	fn unpaired_surrogates_are_replaced() {
		assert_eq!(decode_chunks(&[&[0xDC00, 0x0041]]), "\u{FFFD}A");
		assert_eq!(decode_chunks(&[&[0x0041, 0xD800]]), "A\u{FFFD}");
	}

	#[test]
	fn long_line_is_not_truncated() {
		let line = "ü".repeat(5000);
		let units = utf16(&line);
		let chunks: Vec<&[u16]> = units.chunks(1024).collect();
		assert_eq!(decode_chunks(&chunks), line);
	}
}
