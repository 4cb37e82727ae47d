use super::input::read_selection;
use crate::config::Config;
use anyhow::{Context, Result};
use mapquiz_geometry::NarrowingPipeline;
use std::{fs, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON files with the selected answers (Polygon, Feature or FeatureCollection),
	/// in the order they were chosen
	#[arg(required = true, verbatim_doc_comment)]
	inputs: Vec<PathBuf>,

	/// write the result to this file instead of stdout
	#[arg(long, short, value_name = "FILE")]
	output: Option<PathBuf>,

	/// round coordinates to this many decimal places
	#[arg(long, value_name = "int")]
	precision: Option<u8>,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let selection = read_selection(&arguments.inputs)?;
	let evaluation = NarrowingPipeline::new(config.combine).evaluate(&selection)?;

	let precision = arguments.precision.or(config.output.precision);
	let json = evaluation.result.to_json(precision);
	let text = if config.output.pretty {
		serde_json::to_string_pretty(&json)?
	} else {
		json.to_string()
	};

	match &arguments.output {
		Some(path) => fs::write(path, text + "\n").with_context(|| format!("writing {path:?}"))?,
		None => println!("{text}"),
	}

	let areas = &evaluation.areas;
	log::info!(
		"{} answer(s): union {:.2} km², remaining {:.2} km²",
		selection.len(),
		areas.union_km2,
		areas.intersection_km2
	);
	if let Some(percent) = areas.reduction_percent() {
		log::info!("area reduced by {percent:.1}%");
	}
	if !evaluation.has_valid_region() {
		eprintln!("no overlap: the selected answers have no area in common");
	}

	Ok(())
}
