use super::{HostUi, PrimaryChannel, PrimaryEnvelope, SecondaryChannel, SecondaryPayload};
use crate::{LandpostError, config::DispatchConfig};
use anyhow::Result;
use landpost_geometry::{CompressedFeature, GeoFeature, compress_feature};
use log::{debug, info, warn};

pub const SUBMITTED_NOTICE: &str = "Parcel submitted.";
pub const PRIMARY_ONLY_NOTICE: &str =
	"The parcel outline is too detailed for a direct message; it was sent through the backend only.";

/// How one channel fared during a dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelStatus {
	Sent,
	Failed(String),
	Skipped,
}

/// Result of [`DispatchRouter::dispatch`]. Channel failures are recorded here,
/// never raised.
#[derive(Clone, Debug, PartialEq)]
pub struct DispatchOutcome {
	pub compressed: CompressedFeature,
	pub primary: ChannelStatus,
	pub secondary: ChannelStatus,
}

impl DispatchOutcome {
	#[must_use]
	pub fn size(&self) -> usize {
		self.compressed.size
	}

	#[must_use]
	pub fn within_budget(&self) -> bool {
		self.compressed.is_within_budget()
	}

	/// True when at least one channel accepted the payload.
	#[must_use]
	pub fn delivered(&self) -> bool {
		self.primary == ChannelStatus::Sent || self.secondary == ChannelStatus::Sent
	}
}

/// Compresses features and fans them out to the delivery channels.
pub struct DispatchRouter<P, S, H> {
	primary: P,
	secondary: S,
	host: H,
	budget: usize,
	dispatch_limit: usize,
}

impl<P, S, H> DispatchRouter<P, S, H>
where
	P: PrimaryChannel,
	S: SecondaryChannel,
	H: HostUi,
{
	pub fn new(primary: P, secondary: S, host: H, config: &DispatchConfig) -> Self {
		Self {
			primary,
			secondary,
			host,
			budget: config.compression_budget,
			dispatch_limit: config.dispatch_limit,
		}
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn primary(&self) -> &P {
		&self.primary
	}

	pub fn secondary(&self) -> &S {
		&self.secondary
	}

	async fn deliver_primary(&self, feature: &GeoFeature, user_id: u64) -> Result<()> {
		self.primary.send(&PrimaryEnvelope { feature, user_id }).await
	}

	fn deliver_secondary(&self, feature: &GeoFeature) -> Result<()> {
		let payload = serde_json::to_string(&SecondaryPayload::from(feature))?;
		self.secondary.send_data(&payload)
	}

	/// Compresses `feature` and sends it.
	///
	/// The backend is tried whenever `user_id` is known; the host channel only
	/// while the compressed payload fits the dispatch limit. Either way the user is
	/// told the parcel was submitted and the host is asked to close. Only a failure
	/// to serialize the feature is returned as an error.
	pub async fn dispatch(&self, feature: &GeoFeature, user_id: Option<u64>) -> Result<DispatchOutcome> {
		let compressed = compress_feature(feature, self.budget)?;
		if !compressed.is_within_budget() {
			let exceeded = LandpostError::BudgetExceeded {
				size: compressed.size,
				budget: self.budget,
			};
			warn!("{exceeded}, sending the best effort");
		}

		let primary = match user_id {
			Some(user_id) => match self.deliver_primary(&compressed.feature, user_id).await {
				Ok(()) => ChannelStatus::Sent,
				// never surfaced to the user
				Err(err) => {
					debug!("primary channel failed: {err}");
					ChannelStatus::Failed(err.to_string())
				}
			},
			None => {
				debug!("no user id, primary channel skipped");
				ChannelStatus::Skipped
			}
		};

		let secondary = if compressed.size <= self.dispatch_limit {
			match self.deliver_secondary(&compressed.feature) {
				Ok(()) => ChannelStatus::Sent,
				Err(err) => {
					warn!("secondary channel failed: {err}");
					ChannelStatus::Failed(err.to_string())
				}
			}
		} else {
			info!(
				"payload of {} bytes exceeds the dispatch limit of {}",
				compressed.size, self.dispatch_limit
			);
			self.host.show_alert(PRIMARY_ONLY_NOTICE);
			ChannelStatus::Skipped
		};

		let outcome = DispatchOutcome {
			compressed,
			primary,
			secondary,
		};
		if !outcome.delivered() {
			warn!("no channel accepted the parcel");
		}

		self.host.show_alert(SUBMITTED_NOTICE);
		self.host.close();
		Ok(outcome)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::bail;
	use async_trait::async_trait;
	use landpost_geometry::{Coordinates, RingGeometry};
	use std::sync::Mutex;

	#[derive(Default)]
	struct Backend {
		fail: bool,
		bodies: Mutex<Vec<String>>,
	}

	#[async_trait]
	impl PrimaryChannel for Backend {
		async fn send(&self, envelope: &PrimaryEnvelope<'_>) -> Result<()> {
			if self.fail {
				bail!(LandpostError::TransportFailure("connection reset".into()));
			}
			self.bodies.lock().unwrap().push(serde_json::to_string(envelope)?);
			Ok(())
		}
	}

	#[derive(Default)]
	struct Messages(Mutex<Vec<String>>);

	impl SecondaryChannel for Messages {
		fn send_data(&self, payload: &str) -> Result<()> {
			self.0.lock().unwrap().push(payload.to_string());
			Ok(())
		}
	}

	#[derive(Default)]
	struct Host {
		alerts: Mutex<Vec<String>>,
		closed: Mutex<usize>,
	}

	impl HostUi for Host {
		fn show_alert(&self, text: &str) {
			self.alerts.lock().unwrap().push(text.to_string());
		}
		fn close(&self) {
			*self.closed.lock().unwrap() += 1;
		}
	}

	fn router(fail: bool, dispatch_limit: usize) -> DispatchRouter<Backend, Messages, Host> {
		let backend = Backend {
			fail,
			..Backend::default()
		};
		let config = DispatchConfig {
			dispatch_limit,
			..DispatchConfig::default()
		};
		DispatchRouter::new(backend, Messages::default(), Host::default(), &config)
	}

	fn rectangle() -> GeoFeature {
		GeoFeature::from_ring(RingGeometry::from(&[
			[37.6, 55.7],
			[37.7, 55.7],
			[37.7, 55.8],
			[37.6, 55.8],
			[37.6, 55.7],
		]))
	}

	#[tokio::test]
	async fn small_feature_goes_through_both_channels() {
		let router = router(false, 4000);
		let outcome = router.dispatch(&rectangle(), Some(7)).await.unwrap();

		assert_eq!(outcome.primary, ChannelStatus::Sent);
		assert_eq!(outcome.secondary, ChannelStatus::Sent);
		assert!(outcome.compressed.is_within_budget());

		let bodies = router.primary().bodies.lock().unwrap();
		assert!(bodies[0].ends_with(r#""user_id":7}"#));
		let messages = router.secondary().0.lock().unwrap();
		assert!(messages[0].starts_with(r#"{"type":"Feature","properties":{}"#));
		assert_eq!(*router.host().alerts.lock().unwrap(), vec![SUBMITTED_NOTICE.to_string()]);
		assert_eq!(*router.host().closed.lock().unwrap(), 1);
	}

	#[tokio::test]
	async fn primary_failure_is_recorded_not_raised() {
		let router = router(true, 4000);
		let outcome = router.dispatch(&rectangle(), Some(7)).await.unwrap();
		assert!(matches!(outcome.primary, ChannelStatus::Failed(ref msg) if msg.contains("connection reset")));
		assert_eq!(outcome.secondary, ChannelStatus::Sent);
		assert!(outcome.delivered());
		assert_eq!(*router.host().closed.lock().unwrap(), 1);
	}

	#[tokio::test]
	async fn missing_user_skips_primary() {
		let router = router(false, 4000);
		let outcome = router.dispatch(&rectangle(), None).await.unwrap();
		assert_eq!(outcome.primary, ChannelStatus::Skipped);
		assert!(router.primary().bodies.lock().unwrap().is_empty());
		assert_eq!(outcome.secondary, ChannelStatus::Sent);
	}

	#[tokio::test]
	async fn oversized_payload_skips_secondary_and_tells_user() {
		let router = router(false, 100);
		let outcome = router.dispatch(&rectangle(), Some(1)).await.unwrap();
		assert!(outcome.size() > 100);
		assert_eq!(outcome.primary, ChannelStatus::Sent);
		assert_eq!(outcome.secondary, ChannelStatus::Skipped);
		assert!(router.secondary().0.lock().unwrap().is_empty());
		assert_eq!(
			*router.host().alerts.lock().unwrap(),
			vec![PRIMARY_ONLY_NOTICE.to_string(), SUBMITTED_NOTICE.to_string()]
		);
	}

	#[tokio::test]
	async fn nothing_delivered_still_reports_submitted() {
		let router = router(true, 10);
		let outcome = router.dispatch(&rectangle(), Some(1)).await.unwrap();
		assert!(!outcome.delivered());
		assert!(router.host().alerts.lock().unwrap().contains(&SUBMITTED_NOTICE.to_string()));
	}

	#[tokio::test]
	async fn sends_the_compressed_feature() {
		let mut ring: Vec<Coordinates> = (0..800)
			.map(|i| {
				let a = f64::from(i) / 800.0 * std::f64::consts::TAU;
				Coordinates::new(37.618_964_748 + 0.01 * a.cos(), 55.752_892_541 + 0.01 * a.sin())
			})
			.collect();
		ring.push(ring[0]);
		let feature = GeoFeature::from_ring(RingGeometry(ring));

		let router = router(false, 4000);
		let outcome = router.dispatch(&feature, Some(1)).await.unwrap();
		assert!(outcome.size() <= 3600);
		assert_eq!(outcome.secondary, ChannelStatus::Sent);
		let sent = router.secondary().0.lock().unwrap()[0].len();
		assert!(sent <= outcome.size());
	}
}
