use super::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// An open sequence of coordinates.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);
