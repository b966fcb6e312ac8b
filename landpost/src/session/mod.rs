//! The current-feature slot and the pipeline runs that fill it.

mod state;
mod workflow;

pub use state::*;
pub use workflow::*;
