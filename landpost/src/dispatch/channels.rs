use crate::LandpostError;
use anyhow::Result;
use async_trait::async_trait;
use landpost_geometry::{GeoFeature, GeoProperties, Geometry};
use serde::Serialize;

/// Body sent to the backend: `{"feature": ..., "user_id": ...}`.
#[derive(Debug, Serialize)]
pub struct PrimaryEnvelope<'a> {
	pub feature: &'a GeoFeature,
	pub user_id: u64,
}

/// Body sent through the host's message primitive: the bare feature, without an id
/// or any other envelope field.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct SecondaryPayload<'a> {
	pub properties: &'a GeoProperties,
	pub geometry: &'a Geometry,
}

impl<'a> From<&'a GeoFeature> for SecondaryPayload<'a> {
	fn from(feature: &'a GeoFeature) -> Self {
		Self {
			properties: &feature.properties,
			geometry: &feature.geometry,
		}
	}
}

/// Reliable, size-tolerant delivery to the backend.
#[async_trait]
pub trait PrimaryChannel: Send + Sync {
	async fn send(&self, envelope: &PrimaryEnvelope<'_>) -> Result<()>;
}

/// An absent backend refuses every envelope. Anonymous submissions never reach it.
#[async_trait]
impl<P: PrimaryChannel> PrimaryChannel for Option<P> {
	async fn send(&self, envelope: &PrimaryEnvelope<'_>) -> Result<()> {
		match self {
			Some(channel) => channel.send(envelope).await,
			None => Err(LandpostError::TransportFailure("no backend configured".to_string()).into()),
		}
	}
}

/// The host's "send small structured message" primitive.
pub trait SecondaryChannel {
	fn send_data(&self, payload: &str) -> Result<()>;
}

/// User-facing primitives of the host application.
pub trait HostUi {
	fn show_alert(&self, text: &str);
	fn close(&self);
}
