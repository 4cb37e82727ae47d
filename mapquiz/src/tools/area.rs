use super::input::read_selection;
use crate::config::Config;
use anyhow::Result;
use mapquiz_geometry::{AnswerSelection, BooleanOverlay, GeometryNormalizer, GeometryTrait};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON files with answer regions
	#[arg(required = true)]
	inputs: Vec<PathBuf>,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let selection = read_selection(&arguments.inputs)?;
	for line in area_report(&selection, config)? {
		println!("{line}");
	}
	Ok(())
}

/// One line per answer: label, part count after normalization and area in km².
fn area_report(selection: &AnswerSelection, config: &Config) -> Result<Vec<String>> {
	let operation = BooleanOverlay::new(config.combine.min_part_area);
	let normalizer = GeometryNormalizer::new(&operation);
	selection
		.iter()
		.map(|answer| -> Result<String> {
			let geometry = normalizer
				.normalize(&answer.region)
				.map_err(|e| e.context(&format!("answer '{}'", answer.label)))?;
			Ok(format!(
				"{}: {} part(s), {:.2} km²",
				answer.label,
				geometry.part_count(),
				geometry.area_km2()
			))
		})
		.collect()
}
