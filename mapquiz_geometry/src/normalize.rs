use crate::{ClosedRing, Geometry, GeometryError, GeometryResult, GeometryTrait, PlanarSetOperation, Region};

/// Turns a raw [`Region`] into the canonical [`Geometry`] the combiner works on.
///
/// A single-ring region passes through unchanged. A multi-ring region is reduced by a
/// left-to-right union of its rings, so overlapping or touching rings merge and
/// disjoint rings become separate parts of a `Multi`.
pub struct GeometryNormalizer<'a, O: PlanarSetOperation + ?Sized> {
	operation: &'a O,
}

impl<'a, O: PlanarSetOperation + ?Sized> GeometryNormalizer<'a, O> {
	pub fn new(operation: &'a O) -> Self {
		Self { operation }
	}

	/// Normalizes `region`.
	///
	/// # Errors
	/// [`GeometryError::InvalidGeometry`] if the region has no rings, a ring is not
	/// closed or has fewer than 4 points, or the rings enclose no area at all.
	/// [`GeometryError::Operation`] if a union step fails, including when the rings
	/// together enclose a hole.
	pub fn normalize(&self, region: &Region) -> GeometryResult<Geometry> {
		region.verify()?;

		let geometry = match region.rings() {
			[ring] => Geometry::Single(ring.clone()),
			rings => self.union_rings(rings)?,
		};

		log::debug!(
			"normalized region with {} ring(s) into {} part(s), {:.1} km²",
			region.ring_count(),
			geometry.part_count(),
			geometry.area_km2()
		);
		Ok(geometry)
	}

	fn union_rings(&self, rings: &[ClosedRing]) -> GeometryResult<Geometry> {
		let mut accumulator: Option<Geometry> = None;
		for (index, ring) in rings.iter().enumerate() {
			let next = Geometry::Single(ring.clone());
			accumulator = match accumulator {
				None => Some(next),
				Some(current) => self
					.operation
					.union(&current, &next)
					.map_err(|e| e.context(&format!("union with ring {index}")))?,
			};
		}
		accumulator.ok_or_else(|| GeometryError::invalid("region rings enclose no area"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::BooleanOverlay;
	use approx::assert_relative_eq;
	use pretty_assertions::assert_eq;

	fn square(x: f64, y: f64, size: f64) -> ClosedRing {
		ClosedRing::from(&[[x, y], [x + size, y], [x + size, y + size], [x, y + size], [x, y]])
	}

	fn normalize(region: &Region) -> GeometryResult<Geometry> {
		GeometryNormalizer::new(&BooleanOverlay::default()).normalize(region)
	}

	#[test]
	fn single_ring_passes_through() {
		let ring = square(0.0, 0.0, 10.0);
		let geometry = normalize(&Region::new(vec![ring.clone()])).unwrap();
		assert_eq!(geometry, Geometry::Single(ring));
	}

	#[test]
	fn disjoint_rings_become_multi() {
		let scandinavia = ClosedRing::from(&[[10, 71], [31, 71], [31, 55], [10, 55], [10, 71]]);
		let barcelona = ClosedRing::from(&[[1.5, 42.0], [3.0, 42.0], [3.0, 40.5], [1.5, 40.5], [1.5, 42.0]]);
		let region = Region::new(vec![scandinavia.clone(), barcelona.clone()]);

		let geometry = normalize(&region).unwrap();
		assert!(geometry.is_multi());
		assert_eq!(geometry.part_count(), 2);
		assert_relative_eq!(
			geometry.area_km2(),
			scandinavia.area_km2() + barcelona.area_km2(),
			max_relative = 1e-6
		);
	}

	#[test]
	fn overlapping_rings_merge() {
		let region = Region::new(vec![square(0.0, 0.0, 10.0), square(5.0, 5.0, 10.0)]);
		let geometry = normalize(&region).unwrap();
		assert!(!geometry.is_multi());
		assert_eq!(geometry.compute_bounds(), Some([0.0, 0.0, 15.0, 15.0]));
	}

	#[test]
	fn three_rings_fold_left_to_right() {
		let region = Region::new(vec![
			square(0.0, 0.0, 4.0),
			square(3.0, 0.0, 4.0),
			square(20.0, 20.0, 2.0),
		]);
		let geometry = normalize(&region).unwrap();
		assert_eq!(geometry.part_count(), 2);
		assert_eq!(geometry.compute_bounds(), Some([0.0, 0.0, 22.0, 22.0]));
	}

	#[test]
	fn rings_enclosing_a_hole_fail() {
		let open_frame = ClosedRing::from(&[
			[0, 0],
			[10, 0],
			[10, 2],
			[2, 2],
			[2, 8],
			[10, 8],
			[10, 10],
			[0, 10],
			[0, 0],
		]);
		let bar = ClosedRing::from(&[[8, 2], [10, 2], [10, 8], [8, 8], [8, 2]]);
		let error = normalize(&Region::new(vec![open_frame, bar])).unwrap_err();
		assert!(error.is_operation());
		assert!(
			error
				.to_string()
				.starts_with("geometry operation failed: union with ring 1: union produced a part enclosing 1 hole(s)")
		);
	}

	#[test]
	fn empty_region_is_invalid() {
		let error = normalize(&Region::new(Vec::new())).unwrap_err();
		assert!(error.is_invalid_geometry());
		assert_eq!(
			error.to_string(),
			"invalid geometry: region must have at least one ring"
		);
	}

	#[test]
	fn short_ring_is_invalid() {
		let region = Region::new(vec![square(0.0, 0.0, 1.0), ClosedRing::from(&[[0, 0], [1, 1], [0, 0]])]);
		let error = normalize(&region).unwrap_err();
		assert!(error.is_invalid_geometry());
		assert_eq!(
			error.to_string(),
			"invalid geometry: ring 1: ring must have at least 4 points, but has 3"
		);
	}

	#[test]
	fn collapsed_rings_enclose_no_area() {
		let line = ClosedRing::from(&[[0, 0], [5, 0], [10, 0], [0, 0]]);
		let region = Region::new(vec![line.clone(), line]);
		let error = normalize(&region).unwrap_err();
		assert_eq!(error, GeometryError::invalid("region rings enclose no area"));
	}
}
