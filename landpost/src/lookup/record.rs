//! Search-provider response records.
//!
//! Field names follow the provider's JSON. Scalar fields are kept as raw JSON
//! values because the provider sends numbers and strings interchangeably.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a search response. Candidates are found under `data.features`, or
/// under `features` for older API versions.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProviderResponse {
	#[serde(default)]
	pub data: Option<ProviderData>,
	#[serde(default)]
	pub features: Option<Vec<ProviderFeature>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProviderData {
	#[serde(default)]
	pub features: Option<Vec<ProviderFeature>>,
}

impl ProviderResponse {
	#[must_use]
	pub fn candidates(&self) -> &[ProviderFeature] {
		let nested = self.data.as_ref().and_then(|d| d.features.as_deref()).unwrap_or_default();
		if nested.is_empty() {
			self.features.as_deref().unwrap_or_default()
		} else {
			nested
		}
	}
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProviderFeature {
	#[serde(default)]
	pub geometry: Option<RawGeometry>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub properties: ProviderProperties,
}

/// Geometry as the provider sends it, before its type has been checked.
#[derive(Clone, Debug, Deserialize)]
pub struct RawGeometry {
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default)]
	pub coordinates: Value,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProviderProperties {
	pub label: Option<Value>,
	pub descr: Option<Value>,
	#[serde(rename = "externalKey")]
	pub external_key: Option<Value>,
	#[serde(rename = "categoryName")]
	pub category_name: Option<Value>,
	pub readable_address: Option<Value>,
	pub address: Option<Value>,
	#[serde(rename = "fullAddress")]
	pub full_address: Option<Value>,
	#[serde(rename = "systemInfo")]
	pub system_info: Option<SystemInfo>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub options: ProviderOptions,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SystemInfo {
	pub updated: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProviderOptions {
	pub cad_num: Option<Value>,
	pub readable_address: Option<Value>,
	pub address: Option<Value>,
	#[serde(rename = "fullAddress")]
	pub full_address: Option<Value>,
	pub land_record_type: Option<Value>,
	pub land_record_subtype: Option<Value>,
	pub land_record_reg_date: Option<Value>,
	pub quarter_cad_number: Option<Value>,
	pub specified_area: Option<Value>,
	pub declared_area: Option<Value>,
	pub land_record_area: Option<Value>,
	pub status: Option<Value>,
	pub land_record_category_type: Option<Value>,
	pub permitted_use_established_by_document: Option<Value>,
	pub ownership_type: Option<Value>,
	pub right_type: Option<Value>,
	pub cost_value: Option<Value>,
	pub cost_index: Option<Value>,
	pub cost_application_date: Option<Value>,
	pub cost_registration_date: Option<Value>,
	pub cost_determination_date: Option<Value>,
	pub determination_couse: Option<Value>,
}
