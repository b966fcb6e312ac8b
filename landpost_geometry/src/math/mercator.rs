//! Spherical Web-Mercator (EPSG:3857) ⇄ WGS84 (EPSG:4326) point transforms.
//!
//! Both directions use the sphere with the WGS84 semi-major axis as radius, which is
//! what EPSG:3857 defines. Neither direction validates its input: any finite pair is
//! transformed.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Sphere radius of EPSG:3857 in meters.
pub const RADIUS: f64 = 6_378_137.0;

/// Latitude at which the Web-Mercator square ends, in degrees.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Converts Web-Mercator meters `[x, y]` into `[longitude, latitude]` degrees.
#[must_use]
pub fn mercator_to_geographic(x: f64, y: f64) -> [f64; 2] {
	let lon = (x / RADIUS).to_degrees();
	let lat = (2.0 * (y / RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
	[lon, lat]
}

/// Converts `[longitude, latitude]` degrees into Web-Mercator meters `[x, y]`.
///
/// Latitudes beyond [`MAX_MERCATOR_LAT`] are clamped, because the forward transform
/// diverges towards the poles.
#[must_use]
pub fn geographic_to_mercator(lon: f64, lat: f64) -> [f64; 2] {
	let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
	let x = RADIUS * lon.to_radians();
	let y = RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
	[x, y]
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::{assert_abs_diff_eq, assert_relative_eq};
	use rstest::rstest;

	#[test]
	fn origin_maps_to_origin() {
		let [lon, lat] = mercator_to_geographic(0.0, 0.0);
		assert_abs_diff_eq!(lon, 0.0);
		assert_abs_diff_eq!(lat, 0.0);
	}

	#[test]
	fn square_corner_maps_to_limits() {
		let edge = RADIUS * std::f64::consts::PI;
		let [lon, lat] = mercator_to_geographic(edge, edge);
		assert_relative_eq!(lon, 180.0, epsilon = 1e-9);
		assert_relative_eq!(lat, MAX_MERCATOR_LAT, epsilon = 1e-9);
	}

	#[test]
	fn moscow_in_degrees() {
		// Red Square, EPSG:3857
		let [lon, lat] = mercator_to_geographic(4_187_724.0, 7_509_380.0);
		assert_abs_diff_eq!(lon, 37.6193, epsilon = 1e-3);
		assert_abs_diff_eq!(lat, 55.7531, epsilon = 1e-3);
	}

	#[rstest]
	#[case(4_187_724.0, 7_509_380.0)]
	#[case(-13_627_665.0, 4_548_676.0)]
	#[case(16_833_200.0, -4_011_300.0)]
	#[case(1.5, -2.5e6)]
	#[case(-20_000_000.0, 19_000_000.0)]
	fn round_trip_within_relative_bound(#[case] x: f64, #[case] y: f64) {
		let [lon, lat] = mercator_to_geographic(x, y);
		let [x2, y2] = geographic_to_mercator(lon, lat);
		assert_relative_eq!(x2, x, max_relative = 1e-6);
		assert_relative_eq!(y2, y, max_relative = 1e-6);
	}

	#[test]
	fn forward_clamps_poles() {
		let [_, y] = geographic_to_mercator(0.0, 90.0);
		assert!(y.is_finite());
		let [_, y_max] = geographic_to_mercator(0.0, MAX_MERCATOR_LAT);
		assert_eq!(y, y_max);
	}
}
