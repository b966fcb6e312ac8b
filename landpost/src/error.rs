use thiserror::Error;

/// Failure kinds of the submission pipeline.
///
/// Library functions return `anyhow::Result`; callers that need to branch on the
/// kind use `err.downcast_ref::<LandpostError>()`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LandpostError {
	#[error("no parcel found for {0:?}")]
	NotFound(String),

	#[error("unsupported geometry type {0:?}, expected a Polygon")]
	UnsupportedGeometry(String),

	#[error("transport failure: {0}")]
	TransportFailure(String),

	#[error("invalid submission: {0}")]
	InvalidPayload(String),

	#[error("compressed feature is {size} bytes, over the budget of {budget} bytes")]
	BudgetExceeded { size: usize, budget: usize },
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::anyhow;

	#[test]
	fn messages_interpolate_details() {
		assert_eq!(
			LandpostError::NotFound("77:05:0001001:123".into()).to_string(),
			"no parcel found for \"77:05:0001001:123\""
		);
		assert_eq!(
			LandpostError::BudgetExceeded { size: 4500, budget: 3600 }.to_string(),
			"compressed feature is 4500 bytes, over the budget of 3600 bytes"
		);
	}

	#[test]
	fn survives_anyhow_round_trip() {
		let err = anyhow!(LandpostError::UnsupportedGeometry("Point".into()));
		assert_eq!(
			err.downcast_ref::<LandpostError>(),
			Some(&LandpostError::UnsupportedGeometry("Point".into()))
		);
	}
}
