use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole corpus file into memory.
///
/// The content is kept verbatim (line breaks included) since every character,
/// newlines too, is part of the training stream.
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
