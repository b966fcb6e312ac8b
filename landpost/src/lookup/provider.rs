use super::{ProviderResponse, normalize};
use crate::{LandpostError, config::LookupConfig};
use anyhow::{Result, bail};
use async_trait::async_trait;
use landpost_geometry::GeoFeature;
use log::{info, warn};
use reqwest::{
	Client, Url,
	header::{ACCEPT, REFERER, USER_AGENT},
};
use std::time::Duration;

const BROWSER_AGENT: &str =
	"Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// A geodata search service that resolves cadastral numbers.
#[async_trait]
pub trait LookupProvider: Send + Sync {
	/// Provenance tag for features built from this provider's records.
	fn name(&self) -> &str;

	/// Runs one search. Transport problems are reported as
	/// [`LandpostError::TransportFailure`].
	async fn search(&self, query: &str) -> Result<ProviderResponse>;

	/// Searches for `cad_num` and normalizes the best candidate.
	async fn lookup(&self, cad_num: &str) -> Result<GeoFeature> {
		let response = self.search(cad_num.trim()).await?;
		normalize(&response, cad_num, self.name())
	}
}

/// [`LookupProvider`] talking HTTP to the search endpoint, with a single retry
/// through the configured proxy.
#[derive(Debug)]
pub struct HttpLookupProvider {
	client: Client,
	config: LookupConfig,
}

impl HttpLookupProvider {
	pub fn new(config: LookupConfig) -> Result<HttpLookupProvider> {
		let client = Client::builder()
			.timeout(Duration::from_secs(config.timeout_seconds))
			.build()?;
		Ok(HttpLookupProvider { client, config })
	}

	fn search_url(&self, query: &str) -> Result<Url> {
		Ok(Url::parse_with_params(
			&self.config.url,
			&[("query", query), ("thematicSearchId", "1")],
		)?)
	}

	fn proxy_url(&self, target: &Url) -> Result<Option<Url>> {
		match &self.config.fallback_proxy_url {
			Some(proxy) => Ok(Some(Url::parse_with_params(proxy, &[("url", target.as_str())])?)),
			None => Ok(None),
		}
	}

	async fn fetch(&self, url: Url) -> Result<ProviderResponse> {
		info!("GET {url}");
		let response = self
			.client
			.get(url)
			.header(USER_AGENT, BROWSER_AGENT)
			.header(ACCEPT, "application/json, text/plain, */*")
			.header(REFERER, &self.config.referer)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			bail!("search endpoint answered {status}");
		}
		Ok(response.json::<ProviderResponse>().await?)
	}
}

#[async_trait]
impl LookupProvider for HttpLookupProvider {
	fn name(&self) -> &str {
		&self.config.provider_name
	}

	async fn search(&self, query: &str) -> Result<ProviderResponse> {
		let url = self.search_url(query)?;

		let err = match self.fetch(url.clone()).await {
			Ok(response) => return Ok(response),
			Err(err) => err,
		};

		let Some(proxy_url) = self.proxy_url(&url)? else {
			return Err(LandpostError::TransportFailure(err.to_string()).into());
		};

		warn!("direct search failed ({err}), retrying through proxy");
		self
			.fetch(proxy_url)
			.await
			.map_err(|err| LandpostError::TransportFailure(err.to_string()).into())
	}
}
