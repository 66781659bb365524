/* tests/helpers/mod.rs */

use std::io::Cursor;

use unicode_console::Console;

/// Console fed from a fixed input script, printing into memory.
pub(crate) type Scripted = Console<Cursor<Vec<u8>>, Vec<u8>>;

pub(crate) fn scripted(input: &str) -> Scripted {
	Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Everything the console has printed so far.
pub(crate) fn printed(console: &Scripted) -> &str {
	std::str::from_utf8(console.output()).expect("console output is UTF-8")
}

/// Printed output split into lines, trailing newline dropped.
pub(crate) fn printed_lines(console: &Scripted) -> Vec<&str> {
	printed(console).lines().collect()
}
