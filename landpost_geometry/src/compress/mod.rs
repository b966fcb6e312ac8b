//! Size-bounded encoding of single-ring polygon features.
//!
//! [`compress_feature`] quantizes the outer ring to [`COORDINATE_PRECISION`] decimal
//! places and then decimates it with a growing stride (2, 3, ... up to
//! [`MAX_STRIDE`] exclusive) until the compact JSON text fits the byte budget.
//! The result is best effort: when the stride ladder runs out, or the ring is too
//! small to thin any further, the smallest candidate seen so far is returned even if
//! it is still over budget.

use crate::{GeoFeature, Geometry, PolygonGeometry, RingGeometry, math::COORDINATE_PRECISION};
use anyhow::Result;
use log::debug;

/// First stride that is no longer tried.
pub const MAX_STRIDE: usize = 12;

/// Outcome of [`compress_feature`].
#[derive(Clone, Debug, PartialEq)]
pub struct CompressedFeature {
	pub feature: GeoFeature,
	/// Byte length of the compact JSON text of `feature`.
	pub size: usize,
	/// Stride that produced the ring, `None` if no thinning was applied.
	pub stride: Option<usize>,
	pub budget: usize,
}

impl CompressedFeature {
	#[must_use]
	pub fn is_within_budget(&self) -> bool {
		self.size <= self.budget
	}
}

fn with_ring(feature: &GeoFeature, ring: RingGeometry) -> GeoFeature {
	GeoFeature {
		id: feature.id.clone(),
		properties: feature.properties.clone(),
		geometry: Geometry::Polygon(PolygonGeometry::new(ring)),
	}
}

/// Derives a feature whose serialization fits `budget` bytes where possible.
///
/// Only features with a single-ring polygon are touched; everything else is passed
/// through as a copy. The input is never modified, and the returned size never
/// exceeds the size of the input.
pub fn compress_feature(feature: &GeoFeature, budget: usize) -> Result<CompressedFeature> {
	let original_size = feature.serialized_size()?;

	let Some(ring) = feature.single_ring() else {
		debug!("compression skipped for {} geometry", feature.geometry.type_name());
		return Ok(CompressedFeature {
			feature: feature.clone(),
			size: original_size,
			stride: None,
			budget,
		});
	};

	let rounded = ring.round(COORDINATE_PRECISION);
	let mut best = with_ring(feature, rounded.clone());
	let mut best_size = best.serialized_size()?;
	let mut best_stride = None;

	if best_size > original_size {
		best = feature.clone();
		best_size = original_size;
	}

	let mut stride = 2;
	while best_size > budget && stride < MAX_STRIDE {
		let thinned = rounded.thin(stride);
		if thinned == rounded {
			debug!("ring of {} points cannot be thinned at stride {stride}", rounded.len());
			break;
		}

		let candidate = with_ring(feature, thinned);
		let size = candidate.serialized_size()?;
		debug!("stride {stride}: {} points, {size} bytes", candidate.single_ring().map_or(0, RingGeometry::len));
		if size < best_size {
			best = candidate;
			best_size = size;
			best_stride = Some(stride);
		}
		stride += 1;
	}

	debug!("compressed feature from {original_size} to {best_size} bytes (budget {budget})");

	Ok(CompressedFeature {
		feature: best,
		size: best_size,
		stride: best_stride,
		budget,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Coordinates, math::mercator_to_geographic};
	use rstest::rstest;

	const BUDGET: usize = 3600;

	/// Closed, noisy outline of `n` points around central Moscow in degrees.
	fn parcel(n: usize) -> GeoFeature {
		let mut points: Vec<Coordinates> = (0..n)
			.map(|i| {
				let a = i as f64 / n as f64 * std::f64::consts::TAU;
				let r = 0.01 + 0.000_123_456_789 * (i % 7) as f64;
				Coordinates::new(37.618_964_748_741_39 + r * a.cos(), 55.752_892_540_796_026 + r * a.sin())
			})
			.collect();
		points.push(points[0]);
		GeoFeature::from_ring(RingGeometry(points))
	}

	#[test]
	fn small_ring_is_only_rounded() {
		let feature = GeoFeature::from_ring(RingGeometry::from(&[
			[37.611_111_11, 55.711_111_11],
			[37.622_222_22, 55.711_111_11],
			[37.622_222_22, 55.722_222_22],
			[37.611_111_11, 55.722_222_22],
			[37.611_111_11, 55.711_111_11],
		]));
		let result = compress_feature(&feature, BUDGET).unwrap();
		assert!(result.is_within_budget());
		assert_eq!(result.stride, None);
		let ring = result.feature.single_ring().unwrap();
		assert_eq!(ring.len(), 5);
		assert_eq!(ring.first(), Some(&Coordinates::new(37.61111, 55.71111)));
	}

	#[test]
	fn large_ring_is_thinned_into_budget() {
		let feature = parcel(500);
		let before = feature.serialized_size().unwrap();
		assert!(before > 3 * BUDGET);

		let result = compress_feature(&feature, BUDGET).unwrap();
		let ring = result.feature.single_ring().unwrap();
		assert!(result.size <= BUDGET, "size {}", result.size);
		assert!(result.stride.unwrap() >= 2);
		assert!(ring.len() <= 251);
		assert!(ring.verify().is_ok());
		assert_eq!(result.size, result.feature.serialized_size().unwrap());
	}

	#[test]
	fn unreachable_budget_stops_at_last_stride() {
		let result = compress_feature(&parcel(500), 200).unwrap();
		assert!(!result.is_within_budget());
		assert_eq!(result.stride, Some(MAX_STRIDE - 1));
		// 500 core points at stride 11, plus the closing point
		assert_eq!(result.feature.single_ring().unwrap().len(), 47);
	}

	#[test]
	fn stops_when_ring_cannot_shrink() {
		// 8 points: stride 2 keeps 4, stride 3 keeps 3, stride 4 would keep 2
		let result = compress_feature(&parcel(8), 10).unwrap();
		assert_eq!(result.stride, Some(3));
		assert_eq!(result.feature.single_ring().unwrap().len(), 4);
	}

	#[rstest]
	#[case(5)]
	#[case(40)]
	#[case(333)]
	#[case(2000)]
	fn never_grows(#[case] n: usize) {
		let feature = parcel(n);
		for budget in [0, 500, 3600, 100_000] {
			let result = compress_feature(&feature, budget).unwrap();
			assert!(result.size <= feature.serialized_size().unwrap());
		}
	}

	#[test]
	fn input_is_left_untouched() {
		let feature = parcel(300);
		let copy = feature.clone();
		let _ = compress_feature(&feature, BUDGET).unwrap();
		assert_eq!(feature, copy);
	}

	#[test]
	fn properties_survive_compression() {
		let mut feature = parcel(600);
		feature.set_property("source", "nspd");
		let result = compress_feature(&feature, BUDGET).unwrap();
		assert_eq!(result.feature.properties.get_str("source"), Some("nspd"));
	}

	#[test]
	fn other_geometries_pass_through() {
		let [lon, lat] = mercator_to_geographic(4_187_724.123_456, 7_509_380.654_321);
		let point = GeoFeature::new(Geometry::new_point([lon, lat]));
		let result = compress_feature(&point, 1).unwrap();
		assert_eq!(result.feature, point);

		let holed = GeoFeature::new(Geometry::new_polygon(&[
			[[0.123_456_789, 0.0], [10.0, 0.0], [10.0, 10.0], [0.123_456_789, 0.0]],
			[[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]],
		]));
		assert_eq!(compress_feature(&holed, 1).unwrap().feature, holed);
	}
}
