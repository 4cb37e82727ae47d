use crate::{ClosedRing, Region};
use serde_json::{Value, json};

/// The GeoJSON `Polygon` geometry of a region, with all of its rings.
pub fn region_to_json(region: &Region) -> Value {
	json!({
		"type": "Polygon",
		"coordinates": region.rings().iter().map(|ring| ring.to_coord_json(None)).collect::<Vec<_>>(),
	})
}

/// A one-ring GeoJSON `Polygon` geometry.
pub fn ring_to_json(ring: &ClosedRing, precision: Option<u8>) -> Value {
	json!({
		"type": "Polygon",
		"coordinates": [ring.to_coord_json(precision)],
	})
}

/// Every part as its own one-ring GeoJSON `Polygon`.
pub fn parts_to_json(parts: &[ClosedRing], precision: Option<u8>) -> Value {
	Value::Array(parts.iter().map(|ring| ring_to_json(ring, precision)).collect())
}
