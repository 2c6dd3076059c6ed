//! Domain value objects and types.
//!
//! This module contains the user-facing value objects: the phone candidate
//! itself, validated country tokens, the fixed set of output formats, and the
//! label table for number classifications. Construction of a candidate never
//! fails; all validation is deferred to resolution.

pub mod candidate;
pub mod country;
pub mod format_spec;
pub mod type_label;

pub use candidate::PhoneCandidate;
pub use country::CountryCode;
pub use format_spec::FormatSpec;
pub use type_label::NumberType;
