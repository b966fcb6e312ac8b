use crate::{
	LandpostError,
	attributes::{LegalAttributes, PackedLegalAttributes, is_truthy, unpack},
};
use anyhow::{Context, Result};
use landpost_geometry::{GeoFeature, GeoProperties, Geometry};
use serde_json::Value;

const DEFAULT_SOURCE: &str = "webapp";

/// Expected shape of one incoming submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
	/// Backend body: `{"feature": ..., "user_id": ...}`, or a bare feature with a
	/// top-level `user_id`. A missing or zero user id is rejected.
	Backend,
	/// Host message: a bare feature or geometry, the sender is known to the host.
	HostMessage,
}

/// A submission as the receiving side sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct InboundParcel {
	pub user_id: Option<u64>,
	pub geometry: Geometry,
	/// `"КН <cad_num> • <source>"`, or just the source when no cadastral number came along.
	pub source_label: String,
	pub legal: Option<LegalAttributes>,
}

fn invalid(message: impl Into<String>) -> anyhow::Error {
	LandpostError::InvalidPayload(message.into()).into()
}

/// Reads a user id sent as a number or as numeric text. Zero counts as absent.
fn user_id(value: Option<&Value>) -> Option<u64> {
	let id = match value? {
		Value::Number(n) => n.as_u64(),
		Value::String(s) => s.trim().parse().ok(),
		_ => None,
	}?;
	(id != 0).then_some(id)
}

/// Splits a GeoJSON object into geometry and properties.
fn feature_parts(value: &Value) -> Result<(Geometry, GeoProperties)> {
	let (geometry, properties) = match value.get("type").and_then(Value::as_str) {
		Some("Feature") if value.get("geometry").is_some() => {
			let feature: GeoFeature = serde_json::from_value(value.clone()).context("reading feature")?;
			(feature.geometry, feature.properties)
		}
		Some("Polygon" | "MultiPolygon") => {
			let geometry: Geometry = serde_json::from_value(value.clone()).context("reading geometry")?;
			(geometry, GeoProperties::new())
		}
		_ => return Err(invalid("expected a GeoJSON Feature or Polygon")),
	};

	match geometry {
		Geometry::Polygon(_) | Geometry::MultiPolygon(_) => Ok((geometry, properties)),
		other => Err(LandpostError::UnsupportedGeometry(other.type_name().to_string()).into()),
	}
}

fn trimmed<'a>(properties: &'a GeoProperties, key: &str) -> Option<&'a str> {
	properties.get_str(key).map(str::trim).filter(|s| !s.is_empty())
}

fn source_label(properties: &GeoProperties) -> String {
	let source = trimmed(properties, "source").unwrap_or(DEFAULT_SOURCE);
	match trimmed(properties, "cad_num") {
		Some(cad_num) => format!("КН {cad_num} • {source}"),
		None => source.to_string(),
	}
}

fn legal(properties: &GeoProperties) -> Result<Option<LegalAttributes>> {
	let Some(packed) = properties.get("legal").filter(|v| is_truthy(v)) else {
		return Ok(None);
	};
	let packed: PackedLegalAttributes = serde_json::from_value(packed.clone()).context("reading legal record")?;
	Ok(Some(unpack(&packed)))
}

/// Decodes one submission produced by the dispatch router.
pub fn decode_submission(body: &str, kind: Submission) -> Result<InboundParcel> {
	let body: Value = serde_json::from_str(body).map_err(|err| invalid(err.to_string()))?;
	if !body.is_object() {
		return Err(invalid("expected a JSON object"));
	}

	let user_id = user_id(body.get("user_id"));
	if kind == Submission::Backend && user_id.is_none() {
		return Err(invalid("no user_id"));
	}

	let feature = body.get("feature").filter(|v| is_truthy(v)).unwrap_or(&body);
	let (geometry, properties) = feature_parts(feature)?;

	Ok(InboundParcel {
		user_id,
		geometry,
		source_label: source_label(&properties),
		legal: legal(&properties)?,
	})
}
