use crate::{ClosedRing, Geometry};
use geo::{GeodesicArea, orient::Direction, orient::Orient};

pub const SQUARE_METERS_PER_SQUARE_KILOMETER: f64 = 1_000_000.0;

/// Planar area (square degrees) at or below which a ring counts as collapsed.
pub const DEGENERATE_PLANAR_AREA: f64 = 1e-12;

/// Geographic area of a ring in km², measured on the WGS84 ellipsoid.
///
/// The winding order of the input does not matter. Rings with fewer than 4 points,
/// non-finite coordinates or a collapsed planar area measure 0.
pub fn ring_area_km2(ring: &ClosedRing) -> f64 {
	if ring.len() < 4 || !ring.coordinates().iter().all(|c| c.is_finite()) {
		return 0.0;
	}
	if ring.signed_planar_area().abs() <= DEGENERATE_PLANAR_AREA {
		return 0.0;
	}

	let polygon = ring.to_polygon().orient(Direction::Default);
	let area = polygon.geodesic_area_unsigned() / SQUARE_METERS_PER_SQUARE_KILOMETER;
	if area.is_finite() { area.max(0.0) } else { 0.0 }
}

/// Area of a geometry in km²: the sum over its parts.
pub fn area_km2(geometry: &Geometry) -> f64 {
	total_area_km2(geometry.parts())
}

/// Sum of the areas of all parts in km².
pub fn total_area_km2(parts: &[ClosedRing]) -> f64 {
	parts.iter().map(ring_area_km2).sum()
}

/// Union and intersection areas of a combination result.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AreaSummary {
	pub union_km2: f64,
	pub intersection_km2: f64,
}

impl AreaSummary {
	pub fn new(union_km2: f64, intersection_km2: f64) -> Self {
		Self {
			union_km2,
			intersection_km2,
		}
	}

	/// How much the intersection narrowed the union down, in percent.
	/// `None` unless both areas are positive.
	pub fn reduction_percent(&self) -> Option<f64> {
		if self.union_km2 > 0.0 && self.intersection_km2 > 0.0 {
			Some((self.union_km2 - self.intersection_km2) / self.union_km2 * 100.0)
		} else {
			None
		}
	}

	/// A remaining area strictly above zero.
	pub fn has_valid_region(&self) -> bool {
		self.intersection_km2 > 0.0
	}
}
