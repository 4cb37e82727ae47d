use super::parse_answers;
use crate::Answer;
use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::Path};

/// Reads all answers from a GeoJSON document.
pub fn read_answers(mut reader: impl Read) -> Result<Vec<Answer>> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_answers(&buffer)
}

/// Reads all answers from a GeoJSON file.
pub fn read_answers_from_path(path: &Path) -> Result<Vec<Answer>> {
	let file = File::open(path).with_context(|| format!("opening {path:?}"))?;
	read_answers(file).with_context(|| format!("reading answers from {path:?}"))
}
