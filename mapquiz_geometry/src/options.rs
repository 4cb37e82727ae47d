use crate::DEFAULT_MIN_PART_AREA;
use serde::Deserialize;

/// Tuning of the combination step.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CombineOptions {
	/// Result parts with a planar area (square degrees) at or below this value are
	/// discarded. This is what makes regions that only touch intersect to nothing.
	pub min_part_area: f64,

	/// When `true`, a failed union or intersection step yields an empty result
	/// instead of an error.
	pub fail_safe: bool,
}

impl Default for CombineOptions {
	fn default() -> Self {
		Self {
			min_part_area: DEFAULT_MIN_PART_AREA,
			fail_safe: true,
		}
	}
}
