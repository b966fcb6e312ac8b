//! Registry attributes of a land parcel and their short-keyed wire form.
//!
//! [`LegalAttributes`] carries the registry's human-readable field labels;
//! [`PackedLegalAttributes`] carries the same values under the short keys of
//! [`KEY_TABLE`]. Both always hold every field: a value the registry did not
//! provide is [`UNKNOWN`], never null and never omitted.

mod format;
mod legal;

pub use format::*;
pub use legal::*;
