use landpost_geometry::GeoFeature;
use log::debug;

/// Identifies one pipeline run. Only the newest generation may install its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Holds the single current feature.
///
/// Each draw or lookup calls [`Session::begin`] first and hands the returned
/// generation back to [`Session::commit`] when it settles. A run that was overtaken
/// by a newer one in the meantime is dropped instead of replacing the newer result.
/// The slot is only ever replaced as a whole.
#[derive(Debug, Default)]
pub struct Session {
	latest: u64,
	current: Option<GeoFeature>,
}

impl Session {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a new run, invalidating every run started before it.
	pub fn begin(&mut self) -> Generation {
		self.latest += 1;
		Generation(self.latest)
	}

	#[must_use]
	pub fn is_latest(&self, generation: Generation) -> bool {
		generation.0 == self.latest
	}

	/// Installs `feature` if `generation` is still the newest run.
	pub fn commit(&mut self, generation: Generation, feature: GeoFeature) -> bool {
		if !self.is_latest(generation) {
			debug!("discarding result of stale run {generation:?} (latest is {})", self.latest);
			return false;
		}
		self.current = Some(feature);
		true
	}

	#[must_use]
	pub fn current(&self) -> Option<&GeoFeature> {
		self.current.as_ref()
	}

	/// Empties the slot and returns what it held.
	pub fn take(&mut self) -> Option<GeoFeature> {
		self.current.take()
	}
}
