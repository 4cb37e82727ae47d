use super::{ClosedRing, GeometryTrait};
use crate::{GeometryError, GeometryResult};
use std::fmt::Debug;

/// A raw polygon record as delivered by a quiz answer: the `coordinates` of a GeoJSON
/// `Polygon`.
///
/// Every ring is an outer boundary. A region with several rings means "any of these
/// areas" and is resolved into a single [`Geometry`](crate::Geometry) by the
/// [`GeometryNormalizer`](crate::GeometryNormalizer). Regions are never mutated once
/// built.
#[derive(Clone, PartialEq)]
pub struct Region(Vec<ClosedRing>);

impl Region {
	pub fn new(rings: Vec<ClosedRing>) -> Self {
		Self(rings)
	}

	pub fn rings(&self) -> &[ClosedRing] {
		&self.0
	}

	pub fn ring_count(&self) -> usize {
		self.0.len()
	}

	pub fn is_multi_ring(&self) -> bool {
		self.0.len() > 1
	}

	/// Checks that the region has at least one ring and that every ring is valid.
	pub fn verify(&self) -> GeometryResult<()> {
		if self.0.is_empty() {
			return Err(GeometryError::invalid("region must have at least one ring"));
		}
		for (index, ring) in self.0.iter().enumerate() {
			ring.verify().map_err(|e| e.context(&format!("ring {index}")))?;
		}
		Ok(())
	}

	pub fn is_valid(&self) -> bool {
		self.verify().is_ok()
	}

	pub fn into_rings(self) -> Vec<ClosedRing> {
		self.0
	}
}

impl Debug for Region {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Region").field(&self.0).finish()
	}
}

impl FromIterator<ClosedRing> for Region {
	fn from_iter<I: IntoIterator<Item = ClosedRing>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a, R, const N: usize> From<&'a [R; N]> for Region
where
	ClosedRing: From<&'a R>,
{
	fn from(rings: &'a [R; N]) -> Self {
		rings.iter().map(ClosedRing::from).collect()
	}
}
