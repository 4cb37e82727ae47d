use anyhow::{Context, Result};
use mapquiz_geometry::CombineOptions;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Settings read from the `--config` YAML file. Every section is optional.
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// How answer regions are combined
	#[serde(default)]
	pub combine: CombineOptions,

	/// How results are written
	#[serde(default)]
	pub output: OutputConfig,
}

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
	/// Round coordinates to this many decimal places
	pub precision: Option<u8>,

	/// Indent the written JSON
	pub pretty: bool,
}

impl Config {
	pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
		let mut text = String::new();
		reader.read_to_string(&mut text)?;
		Self::from_string(&text)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		if text.trim().is_empty() {
			return Ok(Self::default());
		}
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		Self::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn parse_example_config() {
		let cfg = Config::from_path(Path::new("../testdata/config.yml")).unwrap();
		assert_eq!(
			cfg,
			Config {
				combine: CombineOptions {
					min_part_area: 0.000001,
					fail_safe: false,
				},
				output: OutputConfig {
					precision: Some(4),
					pretty: true,
				},
			}
		);
	}

	#[test]
	fn empty_config_is_default() {
		assert_eq!(Config::from_string("").unwrap(), Config::default());
		assert_eq!(Config::from_string("\n  \n").unwrap(), Config::default());
	}

	#[test]
	fn partial_config() {
		let cfg = Config::from_string("output:\n  pretty: true\n").unwrap();
		assert_eq!(cfg.combine, CombineOptions::default());
		assert_eq!(cfg.output.precision, None);
		assert!(cfg.output.pretty);
	}

	#[test]
	fn unknown_fields_are_rejected() {
		assert!(Config::from_string("server:\n  port: 8080\n").is_err());
		assert!(Config::from_string("combine:\n  tolerance: 1\n").is_err());
		assert!(Config::from_string("output:\n  indent: 2\n").is_err());
	}

	#[test]
	fn from_reader() {
		let cfg = Config::from_reader("combine:\n  fail_safe: false\n".as_bytes()).unwrap();
		assert!(!cfg.combine.fail_safe);
	}
}
