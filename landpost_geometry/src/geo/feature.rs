use super::*;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// GeoJSON feature id, which may be a string or a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
	String(String),
	Number(serde_json::Number),
}

impl From<&str> for FeatureId {
	fn from(value: &str) -> Self {
		FeatureId::String(value.to_string())
	}
}

impl From<String> for FeatureId {
	fn from(value: String) -> Self {
		FeatureId::String(value)
	}
}

impl From<u64> for FeatureId {
	fn from(value: u64) -> Self {
		FeatureId::Number(value.into())
	}
}

/// A GeoJSON feature: `{"type":"Feature","properties":{...},"geometry":{...}}`.
///
/// Features are values. Every transformation in this workspace derives a new
/// feature instead of changing one in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct GeoFeature {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<FeatureId>,
	#[serde(default)]
	pub properties: GeoProperties,
	pub geometry: Geometry,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			properties: GeoProperties::new(),
			geometry,
		}
	}

	pub fn set_id<T: Into<FeatureId>>(&mut self, id: T) {
		self.id = Some(id.into());
	}

	/// Wraps a drawn outline into a feature without any attributes.
	#[must_use]
	pub fn from_ring(ring: RingGeometry) -> Self {
		Self::new(Geometry::Polygon(PolygonGeometry::new(ring)))
	}

	pub fn set_property<V: Into<serde_json::Value>>(&mut self, key: &str, value: V) {
		self.properties.insert(key, value);
	}

	/// Returns the outer ring when the geometry is a polygon with exactly one ring.
	#[must_use]
	pub fn single_ring(&self) -> Option<&RingGeometry> {
		match &self.geometry {
			Geometry::Polygon(polygon) if polygon.ring_count() == 1 => polygon.exterior(),
			_ => None,
		}
	}

	/// Compact JSON text of the feature, the canonical form every size budget refers to.
	pub fn to_json_string(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Byte length of [`GeoFeature::to_json_string`].
	pub fn serialized_size(&self) -> Result<usize> {
		Ok(serde_json::to_vec(self)?.len())
	}

	pub fn from_json_str(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}
}
