use super::AnswerSelection;
use crate::{
	BooleanOverlay, CombinationResult, CombineOptions, GeometryNormalizer, GeometryResult, PlanarSetOperation,
	PolygonCombiner, math::AreaSummary,
};

/// Outcome of evaluating an answer selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evaluation {
	pub result: CombinationResult,
	pub areas: AreaSummary,
}

impl Evaluation {
	fn new(result: CombinationResult) -> Self {
		let areas = result.area_summary();
		Self { result, areas }
	}

	/// Whether the selected answers leave a strictly positive area.
	pub fn has_valid_region(&self) -> bool {
		self.areas.has_valid_region()
	}

	/// Area of the narrowed-down region in km², 0 when nothing is left.
	pub fn final_area_km2(&self) -> f64 {
		self.areas.intersection_km2
	}
}

/// Runs normalize → combine → measure for an [`AnswerSelection`].
///
/// The pipeline holds no state between calls; every evaluation starts from the
/// selection it is given.
#[derive(Clone, Debug)]
pub struct NarrowingPipeline<O: PlanarSetOperation = BooleanOverlay> {
	operation: O,
	options: CombineOptions,
}

impl NarrowingPipeline<BooleanOverlay> {
	pub fn new(options: CombineOptions) -> Self {
		Self {
			operation: BooleanOverlay::new(options.min_part_area),
			options,
		}
	}
}

impl Default for NarrowingPipeline<BooleanOverlay> {
	fn default() -> Self {
		Self::new(CombineOptions::default())
	}
}

impl<O: PlanarSetOperation> NarrowingPipeline<O> {
	pub fn with_operation(operation: O, options: CombineOptions) -> Self {
		Self { operation, options }
	}

	pub fn options(&self) -> &CombineOptions {
		&self.options
	}

	/// Evaluates `selection`.
	///
	/// # Errors
	/// [`GeometryError::InvalidGeometry`](crate::GeometryError::InvalidGeometry) for a
	/// malformed region, named by its answer label. With `fail_safe` disabled, also
	/// [`GeometryError::Operation`](crate::GeometryError::Operation) for a failed step.
	pub fn evaluate(&self, selection: &AnswerSelection) -> GeometryResult<Evaluation> {
		let normalizer = GeometryNormalizer::new(&self.operation);
		let mut geometries = Vec::with_capacity(selection.len());
		for answer in selection {
			match normalizer.normalize(&answer.region) {
				Ok(geometry) => geometries.push(geometry),
				Err(error) if error.is_operation() && self.options.fail_safe => {
					log::warn!(
						"normalizing answer '{}' failed, reporting an empty result: {error}",
						answer.label
					);
					return Ok(Evaluation::default());
				}
				Err(error) => return Err(error.context(&format!("answer '{}'", answer.label))),
			}
		}

		let combiner = PolygonCombiner::new(&self.operation);
		let result = if self.options.fail_safe {
			combiner.combine(&geometries)
		} else {
			combiner.try_combine(&geometries)?
		};
		Ok(Evaluation::new(result))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Answer, ClosedRing, Geometry, GeometryError, Region};
	use approx::assert_relative_eq;
	use pretty_assertions::assert_eq;

	fn rect(label: &str, x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Answer {
		Answer::new(
			label,
			Region::from(&[[
				[x_min, y_min],
				[x_max, y_min],
				[x_max, y_max],
				[x_min, y_max],
				[x_min, y_min],
			]]),
		)
	}

	fn snowmobile() -> Answer {
		Answer::new(
			"Snøscooter",
			Region::from(&[
				[[10.0, 71.0], [31.0, 71.0], [31.0, 65.0], [10.0, 65.0], [10.0, 71.0]],
				[[1.5, 42.0], [3.0, 42.0], [3.0, 40.5], [1.5, 40.5], [1.5, 42.0]],
			]),
		)
	}

	struct BrokenOperation;

	impl PlanarSetOperation for BrokenOperation {
		fn union(&self, _: &Geometry, _: &Geometry) -> GeometryResult<Option<Geometry>> {
			Err(GeometryError::operation("broken"))
		}

		fn intersect(&self, _: &Geometry, _: &Geometry) -> GeometryResult<Option<Geometry>> {
			Err(GeometryError::operation("broken"))
		}
	}

	#[test]
	fn empty_selection() {
		let evaluation = NarrowingPipeline::default().evaluate(&AnswerSelection::new()).unwrap();
		assert_eq!(evaluation, Evaluation::default());
		assert!(!evaluation.has_valid_region());
		assert_eq!(evaluation.final_area_km2(), 0.0);
	}

	#[test]
	fn quiz_flow_narrows_and_goes_back() {
		let pipeline = NarrowingPipeline::default();
		let mut selection = AnswerSelection::new();

		selection.push(rect("Tog", -10.0, 36.0, 30.0, 71.0));
		let first = pipeline.evaluate(&selection).unwrap();
		assert!(first.has_valid_region());
		assert_eq!(first.areas.reduction_percent(), Some(0.0));

		selection.push(rect("Rødvin", -10.0, 35.0, 18.0, 71.0));
		let second = pipeline.evaluate(&selection).unwrap();
		assert!(second.final_area_km2() < first.final_area_km2());

		selection.push(snowmobile());
		let third = pipeline.evaluate(&selection).unwrap();
		assert!(third.has_valid_region());
		assert_eq!(third.result.intersection.len(), 2);
		assert!(third.final_area_km2() < second.final_area_km2());
		assert!(third.areas.reduction_percent().unwrap() > 50.0);

		selection.pop();
		let back = pipeline.evaluate(&selection).unwrap();
		assert_relative_eq!(back.final_area_km2(), second.final_area_km2(), max_relative = 1e-9);

		selection.clear();
		assert_eq!(pipeline.evaluate(&selection).unwrap(), Evaluation::default());
	}

	#[test]
	fn no_overlap_is_not_an_error() {
		let selection = AnswerSelection::from(vec![
			rect("north", 0.0, 50.0, 10.0, 60.0),
			rect("south", 0.0, -60.0, 10.0, -50.0),
		]);
		let evaluation = NarrowingPipeline::default().evaluate(&selection).unwrap();
		assert!(!evaluation.has_valid_region());
		assert_eq!(evaluation.result.union.len(), 2);
		assert!(evaluation.areas.union_km2 > 0.0);
	}

	#[test]
	fn invalid_region_names_the_answer() {
		let selection = AnswerSelection::from(vec![
			rect("fine", 0.0, 0.0, 10.0, 10.0),
			rect("broken", 0.0, 0.0, 200.0, 10.0),
		]);
		let error = NarrowingPipeline::default().evaluate(&selection).unwrap_err();
		assert_eq!(
			error,
			GeometryError::invalid("answer 'broken': ring 0: point 1: longitude 200 is out of range")
		);
	}

	#[test]
	fn square_inside_a_hole_is_never_reported() {
		let frame = Answer::new(
			"frame",
			Region::new(vec![
				ClosedRing::from(&[[0, 0], [10, 0], [10, 2], [2, 2], [2, 8], [10, 8], [10, 10], [0, 10], [0, 0]]),
				ClosedRing::from(&[[8, 2], [10, 2], [10, 8], [8, 8], [8, 2]]),
			]),
		);
		let selection = AnswerSelection::from(vec![frame, rect("inside", 4.0, 4.0, 6.0, 6.0)]);

		let evaluation = NarrowingPipeline::default().evaluate(&selection).unwrap();
		assert!(!evaluation.has_valid_region());
		assert!(evaluation.result.intersection.is_empty());

		let strict = NarrowingPipeline::new(CombineOptions {
			fail_safe: false,
			..CombineOptions::default()
		});
		let error = strict.evaluate(&selection).unwrap_err();
		assert!(error.is_operation());
		assert!(error.to_string().contains("answer 'frame': union with ring 1"));
	}

	#[test]
	fn failed_operation_honors_fail_safe() {
		let selection = AnswerSelection::from(vec![
			rect("a", 0.0, 0.0, 10.0, 10.0),
			rect("b", 5.0, 5.0, 15.0, 15.0),
		]);

		let safe = NarrowingPipeline::with_operation(BrokenOperation, CombineOptions::default());
		assert_eq!(safe.evaluate(&selection).unwrap(), Evaluation::default());

		let strict = NarrowingPipeline::with_operation(
			BrokenOperation,
			CombineOptions {
				fail_safe: false,
				..CombineOptions::default()
			},
		);
		assert!(strict.evaluate(&selection).unwrap_err().is_operation());

		let multi_ring = AnswerSelection::from(vec![snowmobile()]);
		assert_eq!(safe.evaluate(&multi_ring).unwrap(), Evaluation::default());
		assert!(strict.evaluate(&multi_ring).unwrap_err().is_operation());
	}
}
