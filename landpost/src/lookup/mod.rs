//! Cadastral-number lookup: provider records in, canonical parcel features out.

mod normalize;
mod provider;
mod record;

pub use normalize::*;
pub use provider::*;
pub use record::*;
