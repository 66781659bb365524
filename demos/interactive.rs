/* demos/interactive.rs */
#![allow(missing_docs)]

use tracing_subscriber::EnvFilter;
use unicode_console::{Console, Error};

fn main() -> Result<(), Error> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let mut console = Console::stdio();

	console.println("Write something! Maybe unicode Åå Ää Öö Ññ Üü α δ λ μ π τ")?;
	let line = console.read_line()?;
	writeln!(console, "You wrote: \"{line}\".")?;

	console.print("\nNow write a number between 1 and 4: ")?;
	let number: i32 = console.read_validated_with(
		|n: &i32| (1..=4).contains(n),
		"That's outside of the range. Try again.",
		"That's not a number. Try again.",
	)?;
	writeln!(console, "Thanks, you wrote {number}.")?;

	let mut first = String::new();
	let mut second = String::new();
	console
		.print("\nNow write something interesting: ")?
		.read_into(&mut first)?
		.print("Yes, something more please: ")?
		.read_into(&mut second)?;
	writeln!(
		console,
		"This is what you wrote, but the other way around: {second} {first}"
	)?;

	Ok(())
}
