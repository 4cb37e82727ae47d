use super::PlanarSetOperation;
use crate::{ClosedRing, Coordinates, Geometry, GeometryError, GeometryResult, GeometryTrait};
use geo::{BooleanOps, MultiPolygon};
use std::{
	any::Any,
	panic::{AssertUnwindSafe, catch_unwind},
};

/// Default planar area (square degrees) below which a result part is discarded.
pub const DEFAULT_MIN_PART_AREA: f64 = 1e-10;

/// [`PlanarSetOperation`] backed by the `geo` crate's boolean operations.
///
/// Result parts whose planar area is at or below `min_part_area` are dropped, so
/// regions touching only along an edge or in a corner intersect to nothing. Panics of
/// the clipping engine surface as [`GeometryError::Operation`].
///
/// Parts are outer rings only. A result that encloses a hole larger than
/// `min_part_area` fails with [`GeometryError::Operation`]; the hole is never filled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BooleanOverlay {
	min_part_area: f64,
}

impl BooleanOverlay {
	#[must_use]
	pub fn new(min_part_area: f64) -> Self {
		Self {
			min_part_area: min_part_area.max(0.0),
		}
	}

	pub fn min_part_area(&self) -> f64 {
		self.min_part_area
	}

	fn run<F>(&self, name: &str, a: &Geometry, b: &Geometry, op: F) -> GeometryResult<Option<Geometry>>
	where
		F: Fn(&MultiPolygon<f64>, &MultiPolygon<f64>) -> MultiPolygon<f64>,
	{
		let a = a.to_multi_polygon();
		let b = b.to_multi_polygon();
		let output = catch_unwind(AssertUnwindSafe(|| op(&a, &b)))
			.map_err(|payload| GeometryError::operation(format!("{name} panicked: {}", panic_message(payload.as_ref()))))?;
		self.collect_parts(name, output)
	}

	fn collect_parts(&self, name: &str, output: MultiPolygon<f64>) -> GeometryResult<Option<Geometry>> {
		let mut parts = Vec::with_capacity(output.0.len());
		for polygon in output {
			let (exterior, interiors) = polygon.into_inner();
			let holes = interiors
				.into_iter()
				.map(ClosedRing::from)
				.filter(|hole| hole.signed_planar_area().abs() > self.min_part_area)
				.count();
			if holes > 0 {
				return Err(GeometryError::operation(format!(
					"{name} produced a part enclosing {holes} hole(s), which a single outer ring cannot represent"
				)));
			}

			let ring = ClosedRing::from(exterior);
			if !ring.coordinates().iter().all(Coordinates::is_finite) {
				return Err(GeometryError::operation(format!("{name} produced non-finite coordinates")));
			}
			let planar_area = ring.signed_planar_area().abs();
			if ring.len() < 4 || planar_area <= self.min_part_area {
				log::debug!("{name} discarded a degenerate part ({} points, {planar_area:e} deg²)", ring.len());
				continue;
			}
			parts.push(ring);
		}
		Ok(Geometry::from_parts(parts))
	}
}

impl Default for BooleanOverlay {
	fn default() -> Self {
		Self::new(DEFAULT_MIN_PART_AREA)
	}
}

impl PlanarSetOperation for BooleanOverlay {
	fn union(&self, a: &Geometry, b: &Geometry) -> GeometryResult<Option<Geometry>> {
		self.run("union", a, b, |a, b| BooleanOps::union(a, b))
	}

	fn intersect(&self, a: &Geometry, b: &Geometry) -> GeometryResult<Option<Geometry>> {
		if bounds_are_disjoint(a, b) {
			return Ok(None);
		}
		self.run("intersection", a, b, |a, b| BooleanOps::intersection(a, b))
	}
}

fn bounds_are_disjoint(a: &Geometry, b: &Geometry) -> bool {
	match (a.compute_bounds(), b.compute_bounds()) {
		(Some(a), Some(b)) => a[2] < b[0] || b[2] < a[0] || a[3] < b[1] || b[3] < a[1],
		_ => true,
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(msg) = payload.downcast_ref::<&str>() {
		(*msg).to_string()
	} else if let Some(msg) = payload.downcast_ref::<String>() {
		msg.clone()
	} else {
		"unknown cause".to_string()
	}
}
