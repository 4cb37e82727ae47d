use super::{Coordinates, GeometryTrait};
use crate::{GeometryError, GeometryResult, math};
use serde_json::Value;
use std::fmt::Debug;

/// Represents a closed ring: a connected series of coordinates forming a loop.
/// The first and last points must be identical to form a closed shape.
///
/// Rings are the parts every combination result is flattened into; each one is
/// published as a one-ring GeoJSON Polygon.
#[derive(Clone, PartialEq)]
pub struct ClosedRing(pub Vec<Coordinates>);

impl ClosedRing {
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn coordinates(&self) -> &[Coordinates] {
		&self.0
	}

	/// Planar signed area in square degrees (shoelace formula).
	/// Positive for counterclockwise rings, negative for clockwise ones.
	pub fn signed_planar_area(&self) -> f64 {
		let mut sum = 0f64;
		if let Some(mut p2) = self.0.last() {
			for p1 in &self.0 {
				sum += (p2.x() - p1.x()) * (p1.y() + p2.y());
				p2 = p1;
			}
		}
		sum / 2.0
	}

	/// Returns the coordinates of the ring as a JSON array.
	/// If a precision is specified, coordinates are rounded accordingly.
	pub fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|coord| coord.to_json(precision)).collect::<Vec<_>>())
	}

	pub fn to_line_string(&self) -> geo::LineString<f64> {
		geo::LineString::new(self.0.iter().copied().map(geo::Coord::from).collect())
	}

	/// A `geo::Polygon` with this ring as exterior and no holes.
	pub fn to_polygon(&self) -> geo::Polygon<f64> {
		geo::Polygon::new(self.to_line_string(), Vec::new())
	}
}

impl GeometryTrait for ClosedRing {
	fn area_km2(&self) -> f64 {
		math::ring_area_km2(self)
	}

	/// Verifies that the ring is valid by checking:
	/// - It has at least 4 coordinates (3 unique points plus the closing point).
	/// - It is closed, i.e., the first and last points are identical.
	/// - Every coordinate lies within [-180,180]×[-90,90].
	fn verify(&self) -> GeometryResult<()> {
		if self.0.len() < 4 {
			return Err(GeometryError::invalid(format!(
				"ring must have at least 4 points, but has {}",
				self.0.len()
			)));
		}
		if self.0.first() != self.0.last() {
			return Err(GeometryError::invalid("ring must be closed"));
		}
		for (index, coord) in self.0.iter().enumerate() {
			coord.verify().map_err(|e| e.context(&format!("point {index}")))?;
		}
		Ok(())
	}

	fn contains_point(&self, x: f64, y: f64) -> bool {
		let coords = &self.0;
		if coords.len() < 4 {
			return false;
		}

		let mut inside = false;
		let mut j = coords.len() - 1;

		for i in 0..coords.len() {
			let xi = coords[i].x();
			let yi = coords[i].y();
			let xj = coords[j].x();
			let yj = coords[j].y();

			if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
				inside = !inside;
			}
			j = i;
		}

		inside
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		if self.0.is_empty() {
			return None;
		}

		let mut x_min = f64::MAX;
		let mut y_min = f64::MAX;
		let mut x_max = f64::MIN;
		let mut y_max = f64::MIN;

		for coord in &self.0 {
			x_min = x_min.min(coord.x());
			y_min = y_min.min(coord.y());
			x_max = x_max.max(coord.x());
			y_max = y_max.max(coord.y());
		}

		Some([x_min, y_min, x_max, y_max])
	}
}

impl Debug for ClosedRing {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl FromIterator<Coordinates> for ClosedRing {
	fn from_iter<I: IntoIterator<Item = Coordinates>>(iter: I) -> Self {
		ClosedRing(iter.into_iter().collect())
	}
}

/// Builds a ring from literal `[lon, lat]` pairs, e.g. `ClosedRing::from(&[[0, 0], [1, 0], ...])`.
impl<'a, P, const N: usize> From<&'a [P; N]> for ClosedRing
where
	Coordinates: From<&'a P>,
{
	fn from(points: &'a [P; N]) -> Self {
		points.iter().map(Coordinates::from).collect()
	}
}

/// Converts a `geo::LineString<f64>` into a `ClosedRing`, preserving the order of coordinates.
impl From<geo::LineString<f64>> for ClosedRing {
	fn from(geometry: geo::LineString<f64>) -> Self {
		geometry.into_iter().map(Coordinates::from).collect()
	}
}

impl From<&ClosedRing> for ClosedRing {
	fn from(ring: &ClosedRing) -> Self {
		ring.clone()
	}
}
