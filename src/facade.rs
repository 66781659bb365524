/* src/facade.rs */

//! Free functions over a console bound to the standard streams.
//!
//! Each thread gets its own [`Console`], created on first use, so the
//! validity flag is never shared between threads. Code that needs an
//! explicit console should build one with [`Console::stdio`] and pass it
//! around instead.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::Stdout;
use std::str::FromStr;

use crate::{Console, Error, Utf8Stdin};

/// Console type behind the free functions.
pub type StdConsole = Console<Utf8Stdin, Stdout>;

thread_local! {
	static CONSOLE: RefCell<StdConsole> = RefCell::new(Console::stdio());
}

/// Run `f` with this thread's standard console.
///
/// # Panics
///
/// Panics if called again from inside `f`.
pub fn with_console<T>(f: impl FnOnce(&mut StdConsole) -> T) -> T {
	CONSOLE.with(|console| f(&mut console.borrow_mut()))
}

/// See [`Console::print`].
///
/// # Errors
///
/// Returns [`Error::Io`] when standard output fails.
pub fn print(item: impl Display) -> Result<(), Error> {
	with_console(|c| c.print(item).map(drop))
}

/// See [`Console::println`].
///
/// # Errors
///
/// Returns [`Error::Io`] when standard output fails.
pub fn println(item: impl Display) -> Result<(), Error> {
	with_console(|c| c.println(item).map(drop))
}

/// See [`Console::read`].
///
/// # Errors
///
/// Same as [`Console::read`].
pub fn read<T: FromStr + Default>() -> Result<T, Error> {
	with_console(|c| c.read())
}

/// See [`Console::read_into`].
///
/// # Errors
///
/// Same as [`Console::read`].
pub fn read_into<T: FromStr + Default>(place: &mut T) -> Result<(), Error> {
	with_console(|c| c.read_into(place).map(drop))
}

/// See [`Console::read_line`].
///
/// # Errors
///
/// Same as [`Console::read_line`].
pub fn read_line() -> Result<String, Error> {
	with_console(|c| c.read_line())
}

/// See [`Console::read_validated`].
///
/// # Errors
///
/// Same as [`Console::read`].
pub fn read_validated<T: FromStr + Default>(error_message: &str) -> Result<T, Error> {
	with_console(|c| c.read_validated(error_message))
}

/// See [`Console::read_validated_if`].
///
/// # Errors
///
/// Same as [`Console::read`].
pub fn read_validated_if<T: FromStr + Default>(
	is_valid: impl FnMut(&T) -> bool,
	error_message: &str,
) -> Result<T, Error> {
	with_console(|c| c.read_validated_if(is_valid, error_message))
}

/// See [`Console::read_validated_with`].
///
/// # Errors
///
/// Same as [`Console::read`].
pub fn read_validated_with<T: FromStr + Default>(
	is_valid: impl FnMut(&T) -> bool,
	custom_message: &str,
	type_message: &str,
) -> Result<T, Error> {
	with_console(|c| c.read_validated_with(is_valid, custom_message, type_message))
}

/// See [`Console::read_line_validated`].
///
/// # Errors
///
/// Same as [`Console::read_line`].
pub fn read_line_validated(
	is_valid: impl FnMut(&str) -> bool,
	error_message: &str,
) -> Result<String, Error> {
	with_console(|c| c.read_line_validated(is_valid, error_message))
}

/// See [`Console::was_last_read_valid`].
#[must_use]
pub fn was_last_read_valid() -> bool {
	with_console(|c| c.was_last_read_valid())
}
