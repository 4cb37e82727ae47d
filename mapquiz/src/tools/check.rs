use super::input::read_selection;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON files with answer regions
	#[arg(required = true)]
	inputs: Vec<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let selection = read_selection(&arguments.inputs)?;
	for answer in &selection {
		answer
			.region
			.verify()
			.with_context(|| format!("answer '{}' is invalid", answer.label))?;
	}
	eprintln!("{} region(s) are valid", selection.len());
	Ok(())
}
