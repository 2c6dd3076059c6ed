//! The external phone-metadata engine seam.
//!
//! Per-region dialing-plan knowledge lives in an external engine, not in this
//! crate. [`PhoneEngine`] is the trait boundary the resolver and formatter
//! talk to; [`LibphoneEngine`] is the production implementation backed by the
//! `phonenumber` crate's bundled libphonenumber metadata. Tests substitute
//! their own engines at the same seam.

pub mod libphone;

pub use libphone::LibphoneEngine;

use crate::domain::{CountryCode, FormatSpec, NumberType};
use crate::error::ParseFailure;

/// A fully parsed, region-disambiguated phone number.
///
/// Opaque handle owned by the engine that produced it: only engines construct
/// these, and only engines know how to format or classify them. The core
/// borrows one for the duration of a single request and never caches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNumber(phonenumber::PhoneNumber);

impl ResolvedNumber {
    /// Wrap an engine-produced number. Intended for [`PhoneEngine`]
    /// implementations, including test doubles.
    pub fn new(inner: phonenumber::PhoneNumber) -> Self {
        Self(inner)
    }

    /// Borrow the engine-level representation.
    pub fn as_inner(&self) -> &phonenumber::PhoneNumber {
        &self.0
    }
}

/// The operations this crate needs from a phone-metadata engine.
///
/// Implementations are expected to be stateless and cheap to share; the
/// production engine is a process-wide singleton. All operations are
/// synchronous, bounded, local computation.
pub trait PhoneEngine: Send + Sync {
    /// Parse a raw string, optionally against a candidate country.
    ///
    /// A hinted parse succeeds only when the string both parses and is valid
    /// for the region it lands in; leniently-parseable-but-invalid numbers
    /// are reported as failures so that ordered fallback can move on to the
    /// next hint. With `None`, the string must carry its own calling code.
    fn parse(
        &self,
        raw: &str,
        country: Option<CountryCode>,
    ) -> Result<ResolvedNumber, ParseFailure>;

    /// Render a resolved number in the requested representation.
    fn format(&self, number: &ResolvedNumber, spec: FormatSpec) -> String;

    /// Render a resolved number as it would be dialed from `country`.
    fn format_out_of_country(&self, number: &ResolvedNumber, country: CountryCode) -> String;

    /// Render a resolved number for dialing from a mobile handset in
    /// `country`, optionally stripped of decorative characters.
    fn format_for_mobile_dialing(
        &self,
        number: &ResolvedNumber,
        country: CountryCode,
        remove_formatting: bool,
    ) -> String;

    /// The region a resolved number belongs to.
    fn region_for(&self, number: &ResolvedNumber) -> Option<CountryCode>;

    /// The engine's raw classification of a resolved number.
    fn type_of(&self, number: &ResolvedNumber) -> NumberType;
}
