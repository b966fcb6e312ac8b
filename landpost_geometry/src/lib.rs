//! Geometry value types and the size-bounded polygon encoding used by `landpost`.
//!
//! - [`geo`] holds the GeoJSON-shaped value types ([`Coordinates`], [`RingGeometry`],
//!   [`PolygonGeometry`], [`Geometry`], [`GeoFeature`]).
//! - [`math`] holds coordinate rounding and the spherical Web-Mercator projection.
//! - [`compress`] shrinks a single-ring polygon feature until its serialization fits a byte budget.

pub mod compress;
mod geo;
pub mod math;

pub use compress::*;
pub use geo::*;
