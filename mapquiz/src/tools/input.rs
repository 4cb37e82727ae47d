use anyhow::{Result, ensure};
use mapquiz_geometry::{AnswerSelection, geojson::read_answers_from_path};
use std::path::PathBuf;

/// Reads the answers of all input files, in argument order.
pub fn read_selection(inputs: &[PathBuf]) -> Result<AnswerSelection> {
	let mut selection = AnswerSelection::new();
	for path in inputs {
		let answers = read_answers_from_path(path)?;
		log::debug!("read {} answer(s) from {path:?}", answers.len());
		selection.extend(answers);
	}
	ensure!(!selection.is_empty(), "no answers found in the input files");
	Ok(selection)
}
