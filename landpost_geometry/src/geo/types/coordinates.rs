use crate::math::{geographic_to_mercator, mercator_to_geographic, round_to};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A single `[x, y]` position. Whether it holds Web-Mercator meters or WGS84 degrees
/// depends on where it came from; converting between the two is always explicit.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	/// Quantizes both components to `precision` decimal places.
	#[must_use]
	pub fn round(&self, precision: u8) -> Self {
		Self([round_to(self.0[0], precision), round_to(self.0[1], precision)])
	}

	/// Interprets the position as Web-Mercator meters and returns longitude/latitude degrees.
	#[must_use]
	pub fn to_geographic(&self) -> Self {
		Self(mercator_to_geographic(self.0[0], self.0[1]))
	}

	/// Interprets the position as longitude/latitude degrees and returns Web-Mercator meters.
	#[must_use]
	pub fn to_mercator(&self) -> Self {
		Self(geographic_to_mercator(self.0[0], self.0[1]))
	}

	/// True when both components differ by at most `epsilon`.
	#[must_use]
	pub fn approx_eq(&self, other: &Coordinates, epsilon: f64) -> bool {
		(self.0[0] - other.0[0]).abs() <= epsilon && (self.0[1] - other.0[1]).abs() <= epsilon
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
