//! Land-parcel submission pipeline.
//!
//! A parcel outline is either drawn by hand or looked up by cadastral number
//! ([`lookup`]). The resulting feature is compressed under a byte budget and handed
//! to a reliable backend channel and, when small enough, to the host's size-limited
//! message channel ([`dispatch`]). [`session`] holds the single current-feature slot
//! the host UI works against.

pub mod attributes;
pub mod config;
pub mod dispatch;
mod error;
pub mod lookup;
pub mod session;

pub use error::LandpostError;
pub use landpost_geometry as geometry;
