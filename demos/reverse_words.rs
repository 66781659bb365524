/* demos/reverse_words.rs */
#![allow(missing_docs)]

use unicode_console::{Error, facade};

fn main() -> Result<(), Error> {
	facade::print("How many words? ")?;
	let count: usize =
		facade::read_validated_if(|n: &usize| *n > 0, "Give a positive whole number.")?;

	let mut words = Vec::with_capacity(count);
	for i in 1..=count {
		facade::print(format_args!("word {i}: "))?;
		words.push(facade::read::<String>()?);
	}

	words.reverse();
	facade::println(words.join(" "))?;
	Ok(())
}
