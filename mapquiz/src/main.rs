mod config;
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use config::Config;
use std::path::PathBuf;

/// Narrows a map down to the area all selected quiz answers have in common.
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
	arg_required_else_help = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// YAML file with combine and output settings
	#[arg(long, short, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Combine answer regions into their union and intersection
	Combine(tools::combine::Subcommand),

	/// Show the area of every answer region
	Area(tools::area::Subcommand),

	/// Validate answer regions
	Check(tools::check::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let config = match &cli.config {
		Some(path) => Config::from_path(path)?,
		None => Config::default(),
	};

	match &cli.command {
		Commands::Combine(arguments) => tools::combine::run(arguments, &config),
		Commands::Area(arguments) => tools::area::run(arguments, &config),
		Commands::Check(arguments) => tools::check::run(arguments),
	}
}
