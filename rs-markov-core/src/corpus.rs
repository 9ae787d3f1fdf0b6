use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Reads a corpus file and returns its whole content.
///
/// - Reads the entire file into memory as UTF-8
/// - Keeps line breaks: the model is trained on the raw character stream
pub fn read_corpus<P: AsRef<Path>>(filepath: P) -> Result<String> {
	let mut contents = String::new();
	File::open(&filepath)?.read_to_string(&mut contents)?;
	debug!("Read corpus {} ({} bytes)", filepath.as_ref().display(), contents.len());
	Ok(contents)
}
