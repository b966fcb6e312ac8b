//! Runtime configuration, read from a YAML file.
//!
//! - [`Config`]: top-level loader
//! - [`LookupConfig`]: cadastral search endpoint and its fallback proxy
//! - [`DispatchConfig`]: backend endpoint and the two byte ceilings
//!
//! Every section and field is optional; missing values fall back to the defaults
//! the pipeline was tuned for.

mod dispatch;
mod lookup;
mod main;

pub use dispatch::DispatchConfig;
pub use lookup::LookupConfig;
pub use main::Config;
