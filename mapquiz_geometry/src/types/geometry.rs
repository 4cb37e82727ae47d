use super::{ClosedRing, GeometryTrait, merge_bounds};
use crate::{GeometryResult, math};
use std::fmt::Debug;

/// The canonical shape the combiner works on.
///
/// A `Single` is one simple polygon. A `Multi` is a set of disjoint (or touching) parts,
/// produced by unioning multi-ring input or by a combination step with a disconnected
/// result. A `Multi` always holds at least two parts; use [`Geometry::from_parts`] to
/// build one from an arbitrary list.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Single(ClosedRing),
	Multi(Vec<ClosedRing>),
}

impl Geometry {
	/// `None` for no parts, `Single` for exactly one, `Multi` otherwise.
	pub fn from_parts(mut parts: Vec<ClosedRing>) -> Option<Self> {
		match parts.len() {
			0 => None,
			1 => parts.pop().map(Geometry::Single),
			_ => Some(Geometry::Multi(parts)),
		}
	}

	pub fn parts(&self) -> &[ClosedRing] {
		match self {
			Geometry::Single(ring) => std::slice::from_ref(ring),
			Geometry::Multi(parts) => parts,
		}
	}

	/// Flattens the geometry into its `Single` parts.
	pub fn into_parts(self) -> Vec<ClosedRing> {
		match self {
			Geometry::Single(ring) => vec![ring],
			Geometry::Multi(parts) => parts,
		}
	}

	pub fn part_count(&self) -> usize {
		match self {
			Geometry::Single(_) => 1,
			Geometry::Multi(parts) => parts.len(),
		}
	}

	pub fn is_multi(&self) -> bool {
		matches!(self, Geometry::Multi(_))
	}

	pub fn get_type_name(&self) -> &'static str {
		match self {
			Geometry::Single(_) => "Single",
			Geometry::Multi(_) => "Multi",
		}
	}

	pub fn to_multi_polygon(&self) -> geo::MultiPolygon<f64> {
		geo::MultiPolygon::new(self.parts().iter().map(ClosedRing::to_polygon).collect())
	}
}

impl GeometryTrait for Geometry {
	fn area_km2(&self) -> f64 {
		math::total_area_km2(self.parts())
	}

	fn verify(&self) -> GeometryResult<()> {
		for (index, ring) in self.parts().iter().enumerate() {
			ring.verify().map_err(|e| e.context(&format!("part {index}")))?;
		}
		Ok(())
	}

	fn contains_point(&self, x: f64, y: f64) -> bool {
		self.parts().iter().any(|ring| ring.contains_point(x, y))
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.parts().iter().filter_map(ClosedRing::compute_bounds))
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Geometry::Single(ring) => f.debug_tuple("Single").field(ring).finish(),
			Geometry::Multi(parts) => f.debug_tuple("Multi").field(parts).finish(),
		}
	}
}

impl From<ClosedRing> for Geometry {
	fn from(ring: ClosedRing) -> Self {
		Geometry::Single(ring)
	}
}
