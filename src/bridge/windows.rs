/* src/bridge/windows.rs */

#![allow(unsafe_code)]

use std::io::{self, Read};
use std::ptr;

use windows_sys::Win32::Foundation::{HANDLE, INVALID_HANDLE_VALUE};
use windows_sys::Win32::Globalization::CP_UTF8;
use windows_sys::Win32::System::Console::{
	CONSOLE_MODE, GetConsoleMode, GetStdHandle, ReadConsoleW, STD_INPUT_HANDLE, SetConsoleOutputCP,
};

use super::Utf16Decoder;

/// UTF-16 code units requested per `ReadConsoleW` call.
const CHUNK_UNITS: usize = 1 << 10;

/// Ctrl+Z at the start of a read marks end of input on a Windows console.
const END_OF_INPUT: u16 = 0x1A;

pub(crate) fn set_utf8_output_code_page() -> io::Result<()> {
	// SAFETY: takes a plain integer, no memory is shared.
	if unsafe { SetConsoleOutputCP(CP_UTF8) } == 0 {
		return Err(io::Error::last_os_error());
	}
	Ok(())
}

/// Console input handle owned by the process.
#[derive(Debug)]
struct ConsoleHandle(HANDLE);

// SAFETY: the standard input handle belongs to the process, not to the
// thread that fetched it, and the console API may be called on it from any
// thread. It is never closed here.
unsafe impl Send for ConsoleHandle {}

/// Standard input read as UTF-16 from an interactive console.
#[derive(Debug)]
pub(crate) struct WideConsole {
	handle: ConsoleHandle,
	decoder: Utf16Decoder,
	decoded: Vec<u8>,
	pos: usize,
	ended: bool,
}

impl WideConsole {
	/// Returns `None` when standard input is not a console, e.g. a pipe or
	/// a file.
	pub(crate) fn open() -> Option<Self> {
		// SAFETY: takes a plain integer, no memory is shared.
		let handle = unsafe { GetStdHandle(STD_INPUT_HANDLE) };
		if handle.is_null() || handle == INVALID_HANDLE_VALUE {
			return None;
		}
		let mut mode: CONSOLE_MODE = 0;
		// SAFETY: `mode` is a live local for the duration of the call.
		if unsafe { GetConsoleMode(handle, &mut mode) } == 0 {
			return None;
		}
		Some(Self {
			handle: ConsoleHandle(handle),
			decoder: Utf16Decoder::default(),
			decoded: Vec::new(),
			pos: 0,
			ended: false,
		})
	}

	/// Read console chunks until some UTF-8 is available or input ends.
	fn refill(&mut self) -> io::Result<()> {
		self.decoded.clear();
		self.pos = 0;
		let mut units = [0u16; CHUNK_UNITS];
		while self.decoded.is_empty() && !self.ended {
			let mut read = 0u32;
			// SAFETY: `units` has room for CHUNK_UNITS code units and `read`
			// is a live local; no input control structure is passed.
			let ok = unsafe {
				ReadConsoleW(
					self.handle.0,
					units.as_mut_ptr().cast(),
					CHUNK_UNITS as u32,
					&mut read,
					ptr::null(),
				)
			};
			if ok == 0 {
				return Err(io::Error::last_os_error());
			}
			let chunk = &units[..read as usize];
			if chunk.first().is_none_or(|&u| u == END_OF_INPUT) {
				self.ended = true;
				self.decoder.finish(&mut self.decoded);
			} else {
				self.decoder.decode(chunk, &mut self.decoded);
			}
		}
		Ok(())
	}
}

impl Read for WideConsole {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		if self.pos == self.decoded.len() {
			self.refill()?;
		}
		let available = &self.decoded[self.pos..];
		let n = available.len().min(buf.len());
		buf[..n].copy_from_slice(&available[..n]);
		self.pos += n;
		Ok(n)
	}
}
