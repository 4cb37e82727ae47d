use super::CombinationResult;
use crate::{ClosedRing, Geometry, GeometryResult, GeometryTrait, PlanarSetOperation};

/// Folds an ordered list of geometries into their cumulative union and intersection.
///
/// The combiner is stateless: every call recomputes the result from scratch. A single
/// input is returned as is, without invoking any binary operation, so its reported
/// area is exactly its own. The intersection fold stops at the first empty step.
pub struct PolygonCombiner<'a, O: PlanarSetOperation + ?Sized> {
	operation: &'a O,
}

impl<'a, O: PlanarSetOperation + ?Sized> PolygonCombiner<'a, O> {
	pub fn new(operation: &'a O) -> Self {
		Self { operation }
	}

	/// Combines `geometries`, replacing a failed operation with an empty result.
	///
	/// The failure is logged, never a partially folded accumulator returned.
	pub fn combine(&self, geometries: &[Geometry]) -> CombinationResult {
		match self.try_combine(geometries) {
			Ok(result) => result,
			Err(error) => {
				log::warn!(
					"combining {} geometries failed, reporting an empty result: {error}",
					geometries.len()
				);
				CombinationResult::empty()
			}
		}
	}

	/// Combines `geometries`, propagating the first failed operation.
	///
	/// # Errors
	/// [`GeometryError::Operation`](crate::GeometryError::Operation) if a union or
	/// intersection step cannot be computed.
	pub fn try_combine(&self, geometries: &[Geometry]) -> GeometryResult<CombinationResult> {
		let result = match geometries {
			[] => CombinationResult::empty(),
			[single] => {
				let parts = single.clone().into_parts();
				CombinationResult::new(parts.clone(), parts)
			}
			[first, rest @ ..] => {
				let union = self.fold_union(first, rest)?;
				let intersection = self.fold_intersection(first, rest)?;
				CombinationResult::new(flatten(union), flatten(intersection))
			}
		};

		let summary = result.area_summary();
		log::info!(
			"combined {} geometries: union {} part(s) {:.1} km², intersection {} part(s) {:.1} km²{}",
			geometries.len(),
			result.union.len(),
			summary.union_km2,
			result.intersection.len(),
			summary.intersection_km2,
			summary
				.reduction_percent()
				.map(|percent| format!(", reduced by {percent:.1}%"))
				.unwrap_or_default()
		);
		Ok(result)
	}

	fn fold_union(&self, first: &Geometry, rest: &[Geometry]) -> GeometryResult<Option<Geometry>> {
		let mut accumulator = Some(first.clone());
		for (index, geometry) in rest.iter().enumerate() {
			accumulator = match accumulator {
				None => Some(geometry.clone()),
				Some(current) => self
					.operation
					.union(&current, geometry)
					.map_err(|e| e.context(&format!("union step {}", index + 1)))?,
			};
			log::debug!("union step {}: {}", index + 1, describe(accumulator.as_ref()));
		}
		Ok(accumulator)
	}

	fn fold_intersection(&self, first: &Geometry, rest: &[Geometry]) -> GeometryResult<Option<Geometry>> {
		let mut accumulator = first.clone();
		for (index, geometry) in rest.iter().enumerate() {
			let step = index + 1;
			match self
				.operation
				.intersect(&accumulator, geometry)
				.map_err(|e| e.context(&format!("intersection step {step}")))?
			{
				Some(next) => accumulator = next,
				None => {
					log::debug!(
						"intersection step {step}: empty, skipping {} remaining geometries",
						rest.len() - step
					);
					return Ok(None);
				}
			}
			log::debug!("intersection step {step}: {}", describe(Some(&accumulator)));
		}
		Ok(Some(accumulator))
	}
}

fn flatten(geometry: Option<Geometry>) -> Vec<ClosedRing> {
	geometry.map(Geometry::into_parts).unwrap_or_default()
}

fn describe(geometry: Option<&Geometry>) -> String {
	match geometry {
		Some(geometry) => format!(
			"{} with {} part(s), {:.1} km²",
			geometry.get_type_name(),
			geometry.part_count(),
			geometry.area_km2()
		),
		None => String::from("empty"),
	}
}
