use crate::{Geometry, GeometryResult};

/// Binary planar set operations over normalized geometries.
///
/// Both operations return `Ok(None)` for an empty result (no area left, including
/// regions that only touch along a boundary) and `Err(GeometryError::Operation)` when
/// the result cannot be computed.
pub trait PlanarSetOperation {
	/// Planar union. Overlapping or touching parts coalesce, disjoint parts stay separate.
	fn union(&self, a: &Geometry, b: &Geometry) -> GeometryResult<Option<Geometry>>;

	/// Planar intersection: the area common to both operands.
	fn intersect(&self, a: &Geometry, b: &Geometry) -> GeometryResult<Option<Geometry>>;
}

impl<T: PlanarSetOperation + ?Sized> PlanarSetOperation for &T {
	fn union(&self, a: &Geometry, b: &Geometry) -> GeometryResult<Option<Geometry>> {
		(**self).union(a, b)
	}

	fn intersect(&self, a: &Geometry, b: &Geometry) -> GeometryResult<Option<Geometry>> {
		(**self).intersect(a, b)
	}
}

impl<T: PlanarSetOperation + ?Sized> PlanarSetOperation for Box<T> {
	fn union(&self, a: &Geometry, b: &Geometry) -> GeometryResult<Option<Geometry>> {
		(**self).union(a, b)
	}

	fn intersect(&self, a: &Geometry, b: &Geometry) -> GeometryResult<Option<Geometry>> {
		(**self).intersect(a, b)
	}
}
