pub mod compress;
pub mod lookup;
pub mod receive;
pub mod send;

use anyhow::{Context, Result};
use landpost::geometry::GeoFeature;
use std::{fs, path::Path};

/// Reads a GeoJSON feature from `path`, or from stdin when `path` is `-`.
pub fn read_feature(path: &Path) -> Result<GeoFeature> {
	let text = if path.as_os_str() == "-" {
		std::io::read_to_string(std::io::stdin()).context("reading stdin")?
	} else {
		fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?
	};
	GeoFeature::from_json_str(&text).with_context(|| format!("parsing feature from {path:?}"))
}
