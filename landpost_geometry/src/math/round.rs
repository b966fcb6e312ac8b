/// Number of decimal places every coordinate is quantized to before budgeting.
pub const COORDINATE_PRECISION: u8 = 5;

/// Rounds `value` to the nearest multiple of `10^-precision`.
#[must_use]
pub fn round_to(value: f64, precision: u8) -> f64 {
	let factor = 10f64.powi(i32::from(precision));
	(value * factor).round() / factor
}
