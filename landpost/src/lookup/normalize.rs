use super::{ProviderFeature, ProviderResponse};
use crate::{
	LandpostError,
	attributes::{
		LegalAttributes, UNKNOWN, format_date, format_number, is_truthy, pack, text_or_unknown, value_text,
	},
};
use anyhow::{Context, Result};
use landpost_geometry::{GeoFeature, Geometry, PolygonGeometry};
use log::debug;

/// Reads one optional text field of a candidate.
type Accessor = fn(&ProviderFeature) -> Option<String>;

/// Provider fields that may carry the parcel's address, most specific first.
const ADDRESS_FIELDS: [Accessor; 6] = [
	|f: &ProviderFeature| value_text(f.properties.options.readable_address.as_ref()),
	|f: &ProviderFeature| value_text(f.properties.readable_address.as_ref()),
	|f: &ProviderFeature| value_text(f.properties.options.address.as_ref()),
	|f: &ProviderFeature| value_text(f.properties.address.as_ref()),
	|f: &ProviderFeature| value_text(f.properties.options.full_address.as_ref()),
	|f: &ProviderFeature| value_text(f.properties.full_address.as_ref()),
];

/// Provider fields that may carry the cadastral number.
const CAD_NUM_FIELDS: [Accessor; 3] = [
	|f: &ProviderFeature| value_text(f.properties.options.cad_num.as_ref()),
	|f: &ProviderFeature| value_text(f.properties.label.as_ref()),
	|f: &ProviderFeature| value_text(f.properties.descr.as_ref()),
];

/// Secondary identifiers tried when no candidate has a matching `cad_num`.
const LOOSE_ID_FIELDS: [Accessor; 3] = [
	|f: &ProviderFeature| value_text(f.properties.label.as_ref()),
	|f: &ProviderFeature| value_text(f.properties.descr.as_ref()),
	|f: &ProviderFeature| value_text(f.properties.external_key.as_ref()),
];

/// Evaluates `chain` in order and returns the first present value.
fn first_present(chain: &[Accessor], feature: &ProviderFeature) -> Option<String> {
	chain.iter().find_map(|get| get(feature))
}

/// Picks the candidate describing `requested_id`: an exact `cad_num` match, else a
/// match on label, description or external key, else the first candidate.
pub fn select_candidate<'a>(candidates: &'a [ProviderFeature], requested_id: &str) -> Result<&'a ProviderFeature> {
	let wanted = requested_id.trim();

	if let Some(feature) = candidates
		.iter()
		.find(|f| CAD_NUM_FIELDS[0](f).as_deref() == Some(wanted))
	{
		return Ok(feature);
	}

	if let Some(feature) = candidates
		.iter()
		.find(|f| LOOSE_ID_FIELDS.iter().any(|get| get(f).as_deref() == Some(wanted)))
	{
		debug!("no exact cad_num match for {wanted:?}, matched a secondary identifier");
		return Ok(feature);
	}

	let first = candidates
		.first()
		.ok_or_else(|| LandpostError::NotFound(wanted.to_string()))?;
	debug!("no candidate matches {wanted:?}, using the first of {}", candidates.len());
	Ok(first)
}

/// Assembles the full registry record of a candidate; every field the provider
/// left out is [`UNKNOWN`].
pub fn legal_attributes(feature: &ProviderFeature) -> LegalAttributes {
	let p = &feature.properties;
	let o = &p.options;
	LegalAttributes {
		object_type: text_or_unknown(o.land_record_type.as_ref()),
		parcel_subtype: text_or_unknown(o.land_record_subtype.as_ref()),
		registration_date: format_date(o.land_record_reg_date.as_ref()),
		cadastral_number: first_present(&CAD_NUM_FIELDS, feature).unwrap_or_else(|| UNKNOWN.to_string()),
		cadastral_quarter: text_or_unknown(o.quarter_cad_number.as_ref()),
		address: first_present(&ADDRESS_FIELDS, feature).unwrap_or_else(|| UNKNOWN.to_string()),
		// zero counts as missing for this field only
		specified_area: format_number(o.specified_area.as_ref().filter(|v| is_truthy(v)), "кв. м"),
		declared_area: format_number(o.declared_area.as_ref(), "кв. м"),
		record_area: format_number(o.land_record_area.as_ref(), "кв. м"),
		status: text_or_unknown(o.status.as_ref()),
		land_category: text_or_unknown(o.land_record_category_type.as_ref()),
		permitted_use: text_or_unknown(o.permitted_use_established_by_document.as_ref()),
		ownership_form: text_or_unknown(o.ownership_type.as_ref()),
		right_type: text_or_unknown(o.right_type.as_ref()),
		cadastral_cost: format_number(o.cost_value.as_ref(), "руб."),
		cost_index: format_number(o.cost_index.as_ref(), ""),
		cost_application_date: format_date(o.cost_application_date.as_ref()),
		cost_registration_date: format_date(o.cost_registration_date.as_ref()),
		cost_determination_date: format_date(o.cost_determination_date.as_ref()),
		cost_determination_basis: text_or_unknown(o.determination_couse.as_ref()),
		dataset_category: text_or_unknown(p.category_name.as_ref()),
		record_updated: text_or_unknown(p.system_info.as_ref().and_then(|s| s.updated.as_ref())),
	}
}

/// Reads the candidate's polygon and projects it from Web-Mercator to WGS84.
fn geographic_polygon(feature: &ProviderFeature) -> Result<PolygonGeometry> {
	let raw = feature
		.geometry
		.as_ref()
		.ok_or_else(|| LandpostError::UnsupportedGeometry("none".to_string()))?;
	if raw.kind != "Polygon" {
		return Err(LandpostError::UnsupportedGeometry(raw.kind.clone()).into());
	}

	let polygon: PolygonGeometry =
		serde_json::from_value(raw.coordinates.clone()).context("reading polygon coordinates")?;
	polygon
		.exterior()
		.ok_or_else(|| LandpostError::UnsupportedGeometry("Polygon without rings".to_string()))?;

	Ok(polygon.to_geographic())
}

/// Turns a provider response into the canonical parcel feature for `requested_id`.
///
/// The feature carries `source` (the provider's name), `cad_num` (the requested
/// identifier) and `legal` (the packed registry record) and its polygon is in
/// WGS84 degrees.
pub fn normalize(response: &ProviderResponse, requested_id: &str, source: &str) -> Result<GeoFeature> {
	let candidate = select_candidate(response.candidates(), requested_id)?;
	let polygon = geographic_polygon(candidate)?;

	let legal = legal_attributes(candidate);
	debug!("normalized {requested_id:?} at {:?}", legal.address);

	let mut feature = GeoFeature::new(Geometry::Polygon(polygon));
	feature.set_property("source", source);
	feature.set_property("cad_num", requested_id.trim());
	feature.set_property("legal", serde_json::to_value(pack(Some(&legal)))?);
	Ok(feature)
}
