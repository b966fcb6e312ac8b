use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LookupConfig {
	/// Search endpoint, queried with `?query=<cadastral number>&thematicSearchId=1`.
	pub url: String,

	/// Proxy tried once when the direct request fails; the full search URL is
	/// passed to it in the `url` query parameter.
	pub fallback_proxy_url: Option<String>,

	/// Referer sent to the search endpoint.
	pub referer: String,

	/// Per-request timeout.
	pub timeout_seconds: u64,

	/// Provenance tag written into the `source` property of looked-up features.
	pub provider_name: String,
}

impl Default for LookupConfig {
	fn default() -> Self {
		Self {
			url: "https://nspd.gov.ru/api/geoportal/v2/search/geoportal".to_string(),
			fallback_proxy_url: Some("https://corsproxy.io/".to_string()),
			referer: "https://nspd.gov.ru/map".to_string(),
			timeout_seconds: 12,
			provider_name: "nspd".to_string(),
		}
	}
}

impl LookupConfig {
	pub fn override_optional_url(&mut self, url: &Option<String>) {
		if let Some(url) = url {
			self.url = url.clone();
		}
	}
}
