//! Phone number resolution over libphonenumber metadata.
//!
//! A [`PhoneCandidate`] wraps a raw phone-number string plus an optional,
//! ordered list of candidate countries. A string like `"0470 12 34 56"` is
//! meaningless without knowing (or inferring) a country, and the same digits
//! may be valid in several regions - resolution turns the pair into a single
//! validated number that can be formatted, classified and compared.
//!
//! # Architecture
//!
//! - **domain**: the candidate value object, country tokens, format specs and
//!   the type-label table
//! - **error**: custom error types for precise error handling
//! - **engine**: the trait seam to the external metadata engine, with the
//!   `phonenumber`-backed production implementation
//! - **resolver**: ordered-country resolution with international
//!   auto-detection fallback
//! - **formatter**: format/type dispatch and E.164 canonicalization
//!
//! # Example
//!
//! ```
//! use phone_resolver::{CountryCode, PhoneCandidate, PhoneFormatter};
//!
//! let formatter = PhoneFormatter::default();
//!
//! // Self-describing international input needs no hints.
//! let intl = PhoneCandidate::new("+32470123456");
//! assert_eq!(formatter.format_national(&intl)?, "0470 12 34 56");
//!
//! // National input resolves through its country hints, in order.
//! let hinted = PhoneCandidate::new("0470123456")
//!     .with_countries([CountryCode::new("US").unwrap(), CountryCode::new("BE").unwrap()]);
//! assert_eq!(formatter.format_e164(&hinted)?, "+32470123456");
//! # Ok::<(), phone_resolver::FormatError>(())
//! ```

pub mod domain;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod resolver;

pub use domain::{CountryCode, FormatSpec, NumberType, PhoneCandidate};
pub use engine::{LibphoneEngine, PhoneEngine, ResolvedNumber};
pub use error::{
    CountryTokenError, CountryTokenResult, FormatError, FormatResult, ParseFailure, ResolveError,
    ResolveResult,
};
pub use formatter::PhoneFormatter;
pub use resolver::Resolver;
