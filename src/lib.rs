/* src/lib.rs */

//! UTF-8 console input and output with typed, validated reads.
//!
//! [`Console`] wraps an input source and an output sink:
//!
//! - [`Console::read`] parses one whitespace-delimited token as any
//!   `FromStr + Default` type and records whether it parsed, see
//!   [`Console::was_last_read_valid`].
//! - [`Console::read_validated`], [`Console::read_validated_if`] and
//!   [`Console::read_validated_with`] keep reading and printing an error
//!   message until the input is valid.
//! - [`Console::read_line`] and [`Console::read_line_validated`] work on
//!   whole lines.
//!
//! [`Console::stdio`] binds a console to the process standard streams
//! through [`Utf8Stdin`], which transcodes Windows console input to UTF-8.
//! The [`facade`] module offers the same operations as free functions.
//!
//! ```
//! use std::io::Cursor;
//! use unicode_console::Console;
//!
//! let mut console = Console::new(Cursor::new("x\n9\n2\n"), Vec::new());
//! console.print("Pick a number between 1 and 4: ").unwrap();
//! let n: i32 = console
//! 	.read_validated_with(
//! 		|n: &i32| (1..=4).contains(n),
//! 		"That's outside of the range. Try again.",
//! 		"That's not a number. Try again.",
//! 	)
//! 	.unwrap();
//! assert_eq!(n, 2);
//! ```

mod bridge;
mod console;
mod error;
pub mod facade;
mod reader;

pub use crate::bridge::Utf8Stdin;
pub use crate::console::Console;
pub use crate::error::Error;
