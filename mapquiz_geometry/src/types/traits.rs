use super::Coordinates;
use crate::GeometryResult;
use std::fmt::Debug;

/// Common interface of the area-bearing shapes of the engine.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Geographic area in km². Empty or degenerate shapes measure 0.
	fn area_km2(&self) -> f64;

	/// Verifies the structural validity of the shape (ring length, closure, coordinate range).
	fn verify(&self) -> GeometryResult<()>;

	/// Checks if a point is inside this shape.
	///
	/// Points exactly on the boundary may return either value.
	fn contains_point(&self, x: f64, y: f64) -> bool;

	/// Returns `Some([x_min, y_min, x_max, y_max])`, or `None` if the shape is empty.
	fn compute_bounds(&self) -> Option<[f64; 4]>;

	/// The midpoint of the bounding box.
	fn center(&self) -> Option<Coordinates> {
		self
			.compute_bounds()
			.map(|[x_min, y_min, x_max, y_max]| Coordinates::new((x_min + x_max) / 2.0, (y_min + y_max) / 2.0))
	}
}

/// Merges a sequence of bounding boxes into one.
pub fn merge_bounds(bounds: impl IntoIterator<Item = [f64; 4]>) -> Option<[f64; 4]> {
	bounds.into_iter().reduce(|a, b| {
		[
			a[0].min(b[0]),
			a[1].min(b[1]),
			a[2].max(b[2]),
			a[3].max(b[3]),
		]
	})
}
