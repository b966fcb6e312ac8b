use super::RingGeometry;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A polygon: ring 0 is the outer boundary, any further rings are holes.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn new(exterior: RingGeometry) -> Self {
		Self(vec![exterior])
	}

	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	#[must_use]
	pub fn rings(&self) -> &[RingGeometry] {
		&self.0
	}

	#[must_use]
	pub fn ring_count(&self) -> usize {
		self.0.len()
	}

	/// Outer area minus the area of the holes.
	#[must_use]
	pub fn area(&self) -> f64 {
		let mut rings = self.0.iter();
		let Some(outer) = rings.next() else {
			return 0.0;
		};
		rings.fold(outer.area(), |sum, hole| sum - hole.area())
	}

	pub fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "Polygon must have at least one ring");
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	/// Projects all rings from Web-Mercator meters to WGS84 degrees.
	#[must_use]
	pub fn to_geographic(&self) -> PolygonGeometry {
		PolygonGeometry(self.0.iter().map(RingGeometry::to_geographic).collect())
	}

	#[must_use]
	pub fn to_mercator(&self) -> PolygonGeometry {
		PolygonGeometry(self.0.iter().map(RingGeometry::to_mercator).collect())
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);
