use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
	/// Base URL of the backend; features are POSTed to `<backend_url>/api/webapp`.
	pub backend_url: Option<String>,

	/// Byte ceiling the compressor aims for.
	pub compression_budget: usize,

	/// Byte ceiling of the host's message channel; larger payloads go out
	/// through the backend only.
	pub dispatch_limit: usize,
}

impl Default for DispatchConfig {
	fn default() -> Self {
		Self {
			backend_url: None,
			compression_budget: 3600,
			dispatch_limit: 4000,
		}
	}
}

impl DispatchConfig {
	pub fn override_optional_backend_url(&mut self, backend_url: &Option<String>) {
		if backend_url.is_some() {
			self.backend_url = backend_url.clone();
		}
	}
	pub fn override_optional_compression_budget(&mut self, budget: &Option<usize>) {
		if let Some(budget) = budget {
			self.compression_budget = *budget;
		}
	}
}
