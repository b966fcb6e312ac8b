use super::{PrimaryChannel, PrimaryEnvelope};
use crate::LandpostError;
use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

/// Path the backend accepts parcel submissions on.
pub const SUBMIT_PATH: &str = "api/webapp";

/// [`PrimaryChannel`] POSTing the envelope as JSON to the backend.
#[derive(Debug)]
pub struct HttpPrimaryChannel {
	client: Client,
	url: Url,
}

impl HttpPrimaryChannel {
	pub fn new(backend_url: &str) -> Result<HttpPrimaryChannel> {
		let mut base = Url::parse(backend_url)?;
		if !base.path().ends_with('/') {
			let path = format!("{}/", base.path());
			base.set_path(&path);
		}
		let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
		Ok(HttpPrimaryChannel {
			client,
			url: base.join(SUBMIT_PATH)?,
		})
	}

	pub fn url(&self) -> &Url {
		&self.url
	}
}

#[async_trait]
impl PrimaryChannel for HttpPrimaryChannel {
	async fn send(&self, envelope: &PrimaryEnvelope<'_>) -> Result<()> {
		let response = self
			.client
			.post(self.url.clone())
			.json(envelope)
			.send()
			.await
			.map_err(|err| LandpostError::TransportFailure(err.to_string()))?;

		let status = response.status();
		debug!("backend answered {status}");
		if !status.is_success() {
			return Err(LandpostError::TransportFailure(format!("backend answered {status}")).into());
		}
		Ok(())
	}
}
