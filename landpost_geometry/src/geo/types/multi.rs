use super::{Coordinates, LineStringGeometry, PolygonGeometry};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiPointGeometry(pub Vec<Coordinates>);

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

crate::impl_from_array!(
	MultiPointGeometry,
	Coordinates,
	MultiLineStringGeometry,
	LineStringGeometry,
	MultiPolygonGeometry,
	PolygonGeometry
);
