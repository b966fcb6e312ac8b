use super::{Generation, Session};
use crate::{
	dispatch::{DispatchOutcome, DispatchRouter, HostUi, PrimaryChannel, SecondaryChannel},
	lookup::LookupProvider,
};
use anyhow::Result;
use landpost_geometry::{GeoFeature, RingGeometry};
use log::{debug, info, warn};

pub const NOTHING_TO_SEND_NOTICE: &str = "Draw a parcel or look one up by cadastral number first.";

/// The host-facing pipeline: owns the session, the lookup provider and the router.
pub struct Workflow<L, P, S, H> {
	session: Session,
	provider: L,
	router: DispatchRouter<P, S, H>,
}

impl<L, P, S, H> Workflow<L, P, S, H>
where
	L: LookupProvider,
	P: PrimaryChannel,
	S: SecondaryChannel,
	H: HostUi,
{
	pub fn new(provider: L, router: DispatchRouter<P, S, H>) -> Self {
		Self {
			session: Session::new(),
			provider,
			router,
		}
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	pub fn router(&self) -> &DispatchRouter<P, S, H> {
		&self.router
	}

	/// Accepts an outline from the drawing tool as the current feature.
	pub fn draw_completed(&mut self, ring: RingGeometry) -> Result<Generation> {
		ring.verify()?;
		let generation = self.session.begin();
		let mut feature = GeoFeature::from_ring(ring);
		feature.set_property("source", "draw");
		self.session.commit(generation, feature);
		Ok(generation)
	}

	pub fn provider(&self) -> &L {
		&self.provider
	}

	/// Starts a lookup run whose result arrives later through
	/// [`Workflow::finish_lookup`]. Any draw or lookup started afterwards overtakes it.
	pub fn begin_lookup(&mut self) -> Generation {
		self.session.begin()
	}

	/// Settles a lookup run and returns whether its parcel became the current
	/// feature. Results and failures of overtaken runs are dropped without alerting
	/// the user; a failure of the newest run is shown as one alert and returned.
	pub fn finish_lookup(&mut self, generation: Generation, cad_num: &str, result: Result<GeoFeature>) -> Result<bool> {
		if !self.session.is_latest(generation) {
			debug!("lookup of {cad_num:?} was overtaken, dropping its result");
			return Ok(false);
		}
		match result {
			Ok(feature) => {
				info!("found parcel {cad_num:?}");
				Ok(self.session.commit(generation, feature))
			}
			Err(err) => {
				warn!("lookup of {cad_num:?} failed: {err}");
				self.router.host().show_alert(&format!("Lookup failed: {err}"));
				Err(err)
			}
		}
	}

	/// Looks up `cad_num` and makes the parcel the current feature.
	pub async fn lookup(&mut self, cad_num: &str) -> Result<Generation> {
		let generation = self.begin_lookup();
		let result = self.provider.lookup(cad_num).await;
		self.finish_lookup(generation, cad_num, result)?;
		Ok(generation)
	}

	/// Dispatches the current feature and clears the slot. Without a current
	/// feature the user is told so and nothing is sent.
	pub async fn submit(&mut self, user_id: Option<u64>) -> Result<Option<DispatchOutcome>> {
		let Some(feature) = self.session.take() else {
			self.router.host().show_alert(NOTHING_TO_SEND_NOTICE);
			return Ok(None);
		};
		self.router.dispatch(&feature, user_id).await.map(Some)
	}
}
