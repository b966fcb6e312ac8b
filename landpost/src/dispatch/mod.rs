//! Delivery of a compressed parcel feature.
//!
//! The primary channel is the backend: reliable, tolerant of large payloads, and
//! best effort from the caller's point of view. The secondary channel is the host's
//! small-message primitive, used only while the payload fits its ceiling.
//! [`decode_submission`] reads either payload back on the receiving side.

mod channels;
mod console;
mod http;
mod inbound;
mod router;

pub use channels::*;
pub use console::*;
pub use http::*;
pub use inbound::*;
pub use router::*;
