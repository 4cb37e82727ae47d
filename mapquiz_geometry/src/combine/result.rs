use crate::{
	ClosedRing, GeometryTrait,
	geojson::parts_to_json,
	math::{AreaSummary, total_area_km2},
	merge_bounds,
};
use serde_json::{Value, json};

/// Output of a combination: the cumulative union and the cumulative intersection,
/// each flattened into a list of one-ring parts.
///
/// Both lists are empty for an empty selection. An empty `intersection` is the
/// "no overlap" terminal state of a quiz.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombinationResult {
	pub union: Vec<ClosedRing>,
	pub intersection: Vec<ClosedRing>,
}

impl CombinationResult {
	pub fn new(union: Vec<ClosedRing>, intersection: Vec<ClosedRing>) -> Self {
		Self { union, intersection }
	}

	pub fn empty() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.union.is_empty() && self.intersection.is_empty()
	}

	/// Whether any common area is left.
	pub fn has_overlap(&self) -> bool {
		!self.intersection.is_empty()
	}

	pub fn union_area_km2(&self) -> f64 {
		total_area_km2(&self.union)
	}

	pub fn intersection_area_km2(&self) -> f64 {
		total_area_km2(&self.intersection)
	}

	pub fn area_summary(&self) -> AreaSummary {
		AreaSummary::new(self.union_area_km2(), self.intersection_area_km2())
	}

	pub fn union_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.union.iter().filter_map(ClosedRing::compute_bounds))
	}

	pub fn intersection_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.intersection.iter().filter_map(ClosedRing::compute_bounds))
	}

	/// `{"unionGeometry": [...], "intersectionGeometry": [...]}`, each entry a GeoJSON Polygon.
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		json!({
			"unionGeometry": parts_to_json(&self.union, precision),
			"intersectionGeometry": parts_to_json(&self.intersection, precision),
		})
	}
}
