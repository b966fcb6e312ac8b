use super::Coordinates;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Tolerance used to decide whether a projected ring still closes.
pub const CLOSURE_EPSILON: f64 = 1e-9;

/// Minimum length of a valid ring: three distinct points plus the closing repeat.
pub const MIN_RING_LEN: usize = 4;

/// A closed ring of coordinates, the boundary of one polygon.
/// The first and last points are identical.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn push(&mut self, c: Coordinates) {
		self.0.push(c);
	}

	#[must_use]
	pub fn first(&self) -> Option<&Coordinates> {
		self.0.first()
	}

	#[must_use]
	pub fn last(&self) -> Option<&Coordinates> {
		self.0.last()
	}

	/// True when the ring is non-empty and its last point equals its first.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		self.0.len() > 1 && self.0.first() == self.0.last()
	}

	/// Checks that the ring has at least 4 points (3 unique plus the closing point)
	/// and is closed.
	pub fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= MIN_RING_LEN, "Ring must have at least 4 points");
		ensure!(self.is_closed(), "Ring must be closed");
		Ok(())
	}

	/// Signed area (shoelace); positive for counterclockwise rings.
	#[must_use]
	pub fn area(&self) -> f64 {
		let mut sum = 0f64;
		if let Some(mut p2) = self.0.last() {
			for p1 in &self.0 {
				sum += (p2.x() - p1.x()) * (p1.y() + p2.y());
				p2 = p1;
			}
		}
		sum / 2.0
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		let first = self.0.first()?;
		let mut bounds = [first.x(), first.y(), first.x(), first.y()];
		for c in &self.0 {
			bounds[0] = bounds[0].min(c.x());
			bounds[1] = bounds[1].min(c.y());
			bounds[2] = bounds[2].max(c.x());
			bounds[3] = bounds[3].max(c.y());
		}
		Some(bounds)
	}

	/// Rounds every vertex to `precision` decimal places.
	#[must_use]
	pub fn round(&self, precision: u8) -> RingGeometry {
		RingGeometry(self.0.iter().map(|c| c.round(precision)).collect())
	}

	/// Keeps every `stride`-th vertex of the ring and closes the result again.
	///
	/// Rings of 4 points or fewer are returned as they are. If the decimated ring
	/// would end up with fewer than 3 points (or fewer than 4 after closing), the
	/// input is returned unchanged: the ring cannot be thinned further without
	/// becoming invalid.
	#[must_use]
	pub fn thin(&self, stride: usize) -> RingGeometry {
		if self.0.len() <= MIN_RING_LEN {
			return self.clone();
		}

		let core = if self.is_closed() {
			&self.0[..self.0.len() - 1]
		} else {
			&self.0[..]
		};

		let mut kept: Vec<Coordinates> = core.iter().step_by(stride.max(1)).copied().collect();
		if kept.len() < 3 {
			return self.clone();
		}

		if kept.first() != kept.last() {
			kept.push(kept[0]);
		}
		if kept.len() < MIN_RING_LEN {
			return self.clone();
		}

		RingGeometry(kept)
	}

	/// Projects every vertex from Web-Mercator meters to WGS84 degrees.
	///
	/// If the source ring was closed, the closing point is forced back onto the
	/// first point whenever the two drifted apart by at most [`CLOSURE_EPSILON`].
	#[must_use]
	pub fn to_geographic(&self) -> RingGeometry {
		let mut ring = RingGeometry(self.0.iter().map(Coordinates::to_geographic).collect());
		if self.is_closed() {
			ring.reclose(CLOSURE_EPSILON);
		}
		ring
	}

	/// Projects every vertex from WGS84 degrees to Web-Mercator meters.
	#[must_use]
	pub fn to_mercator(&self) -> RingGeometry {
		let mut ring = RingGeometry(self.0.iter().map(Coordinates::to_mercator).collect());
		if self.is_closed() {
			ring.reclose(CLOSURE_EPSILON);
		}
		ring
	}

	/// Restores exact closure: a last point within `epsilon` of the first is replaced
	/// by a copy of it, any other last point gets a closing copy appended.
	pub fn reclose(&mut self, epsilon: f64) {
		let (Some(first), Some(last)) = (self.0.first().copied(), self.0.last().copied()) else {
			return;
		};
		if first == last && self.0.len() > 1 {
			return;
		}
		if self.0.len() > 1 && first.approx_eq(&last, epsilon) {
			let n = self.0.len();
			self.0[n - 1] = first;
		} else {
			self.0.push(first);
		}
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn square() -> RingGeometry {
		RingGeometry::from(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]])
	}

	/// Closed ring of `n` distinct points on a circle plus the closing repeat.
	fn circle(n: usize) -> RingGeometry {
		let mut ring: RingGeometry = (0..n)
			.map(|i| {
				let a = i as f64 / n as f64 * std::f64::consts::TAU;
				Coordinates::new(a.cos() * 100.0, a.sin() * 100.0)
			})
			.collect::<Vec<_>>()
			.into();
		ring.reclose(0.0);
		ring
	}

	// ── verify ──────────────────────────────────────────────────────────

	#[test]
	fn verify_valid() {
		assert!(square().verify().is_ok());
	}

	#[test]
	fn verify_too_few_points() {
		let ring = RingGeometry::from(&[[0, 0], [1, 1], [0, 0]]);
		assert!(ring.verify().is_err());
	}

	#[test]
	fn verify_not_closed() {
		let ring = RingGeometry::from(&[[0, 0], [1, 0], [1, 1], [0, 1]]);
		assert!(ring.verify().is_err());
	}

	// ── area / bounds ───────────────────────────────────────────────────

	#[test]
	fn area_sign_follows_winding() {
		assert_eq!(square().area(), 100.0);
		let cw = RingGeometry::from(&[[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]]);
		assert_eq!(cw.area(), -100.0);
	}

	#[test]
	fn compute_bounds() {
		assert_eq!(square().compute_bounds(), Some([0.0, 0.0, 10.0, 10.0]));
		assert!(RingGeometry::new().compute_bounds().is_none());
	}

	// ── thin ────────────────────────────────────────────────────────────

	#[test]
	fn thin_leaves_minimal_rings_alone() {
		let ring = RingGeometry::from(&[[0, 0], [1, 0], [1, 1], [0, 0]]);
		assert_eq!(ring.thin(2), ring);
		assert_eq!(ring.thin(7), ring);
	}

	#[test]
	fn thin_keeps_every_second_point() {
		let ring = RingGeometry::from(&[[0, 0], [1, 0], [2, 0], [2, 1], [2, 2], [1, 2], [0, 2], [0, 1], [0, 0]]);
		let thinned = ring.thin(2);
		assert_eq!(thinned, RingGeometry::from(&[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]]));
	}

	#[test]
	fn thin_stride_one_is_a_noop() {
		let ring = circle(20);
		assert_eq!(ring.thin(1), ring);
		assert_eq!(ring.thin(0), ring);
	}

	#[test]
	fn thin_closes_open_input() {
		let ring = RingGeometry::from(&[[0, 0], [1, 0], [2, 0], [2, 1], [2, 2], [0, 2]]);
		let thinned = ring.thin(2);
		assert_eq!(thinned, RingGeometry::from(&[[0, 0], [2, 0], [2, 2], [0, 0]]));
	}

	#[test]
	fn thin_aborts_below_three_points() {
		let ring = circle(10);
		// 10 core points at stride 5 keep indices 0 and 5 only
		assert_eq!(ring.thin(5), ring);
		assert_eq!(ring.thin(11), ring);
	}

	#[test]
	fn thin_aborts_when_kept_points_collapse() {
		// the only kept points are [0,0], [5,5], [0,0]; closing would leave 3 points
		let ring = RingGeometry::from(&[[0, 0], [1, 0], [5, 5], [1, 1], [0, 0], [0, 1], [0, 0]]);
		assert_eq!(ring.thin(2), ring);
	}

	#[rstest]
	fn thin_preserves_validity(
		#[values(4, 5, 6, 9, 17, 64, 500)] n: usize,
		#[values(0, 1, 2, 3, 4, 5, 7, 11, 12, 100)] stride: usize,
	) {
		let ring = circle(n);
		let thinned = ring.thin(stride);
		assert!(thinned == ring || (thinned.is_closed() && thinned.len() >= MIN_RING_LEN));
		assert!(thinned.verify().is_ok());
	}

	#[test]
	fn thin_reduces_vertex_count() {
		let ring = circle(500);
		assert_eq!(ring.thin(2).len(), 251);
		assert_eq!(ring.thin(11).len(), 47);
	}

	// ── projection ──────────────────────────────────────────────────────

	#[test]
	fn to_geographic_keeps_ring_closed() {
		let ring = RingGeometry::from(&[
			[4_187_724.3, 7_509_380.1],
			[4_187_824.7, 7_509_380.1],
			[4_187_824.7, 7_509_480.9],
			[4_187_724.3, 7_509_380.1],
		]);
		let geo = ring.to_geographic();
		assert_eq!(geo.len(), 4);
		assert!(geo.is_closed());
		assert!(geo.first().unwrap().x() < 38.0);
	}

	#[test]
	fn to_geographic_leaves_open_rings_open() {
		let ring = RingGeometry::from(&[[0.0, 0.0], [1000.0, 0.0], [1000.0, 1000.0]]);
		assert!(!ring.to_geographic().is_closed());
	}

	#[test]
	fn reclose_snaps_drifted_end() {
		let mut ring = RingGeometry::from(&[[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0 + 1e-12, 1.0]]);
		ring.reclose(CLOSURE_EPSILON);
		assert_eq!(ring.len(), 4);
		assert!(ring.is_closed());
	}

	#[test]
	fn reclose_appends_when_far_apart() {
		let mut ring = RingGeometry::from(&[[1.0, 1.0], [2.0, 1.0], [2.0, 2.0]]);
		ring.reclose(CLOSURE_EPSILON);
		assert_eq!(ring.len(), 4);
		assert!(ring.is_closed());
	}

	#[test]
	fn round_quantizes_all_vertices() {
		let ring = RingGeometry::from(&[[0.123_456_7, 1.0], [1.0, 0.987_654_3], [0.123_456_7, 1.0]]);
		assert_eq!(ring.round(5), RingGeometry::from(&[[0.12346, 1.0], [1.0, 0.98765], [0.12346, 1.0]]));
	}

	#[test]
	fn serializes_as_nested_arrays() {
		let ring = RingGeometry::from(&[[0, 0], [1, 0], [0, 0]]);
		assert_eq!(serde_json::to_string(&ring).unwrap(), "[[0.0,0.0],[1.0,0.0],[0.0,0.0]]");
	}
}
