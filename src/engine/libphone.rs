//! Production engine backed by the `phonenumber` crate.

use super::{PhoneEngine, ResolvedNumber};
use crate::domain::{CountryCode, FormatSpec, NumberType};
use crate::error::ParseFailure;
use once_cell::sync::Lazy;
use phonenumber::{metadata, Mode};
use std::panic;

static GLOBAL: Lazy<LibphoneEngine> = Lazy::new(LibphoneEngine::new);

/// Stateless engine over the bundled libphonenumber metadata.
///
/// Thread-safe and cheap to share; [`global`](Self::global) returns the
/// process-wide instance. The crate has no dedicated out-of-country or
/// mobile-dialing formatters, so those are composed from its formatting
/// modes: national inside the number's own region, international elsewhere,
/// and E.164 when decoration is stripped.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibphoneEngine;

impl LibphoneEngine {
    /// Create a new engine. All instances share the same metadata.
    pub fn new() -> Self {
        Self
    }

    /// The shared process-wide instance.
    pub fn global() -> &'static LibphoneEngine {
        &GLOBAL
    }
}

fn mode_for(spec: FormatSpec) -> Mode {
    match spec {
        FormatSpec::International => Mode::International,
        FormatSpec::National => Mode::National,
        FormatSpec::E164 => Mode::E164,
        FormatSpec::Rfc3966 => Mode::Rfc3966,
    }
}

impl PhoneEngine for LibphoneEngine {
    fn parse(
        &self,
        raw: &str,
        country: Option<CountryCode>,
    ) -> Result<ResolvedNumber, ParseFailure> {
        let id = country.map(CountryCode::id);
        let input = raw.to_owned();

        // The metadata parser panics on some malformed inputs; report a panic
        // as an ordinary parse failure.
        let outcome = panic::catch_unwind(move || phonenumber::parse(id, &input));

        let number = match outcome {
            Ok(Ok(number)) => number,
            Ok(Err(err)) => {
                return Err(ParseFailure {
                    raw: raw.to_owned(),
                    reason: err.to_string(),
                });
            }
            Err(_) => {
                tracing::warn!(raw, "metadata engine panicked during parse");
                return Err(ParseFailure {
                    raw: raw.to_owned(),
                    reason: "parser panicked".to_owned(),
                });
            }
        };

        // Parsing alone is lenient; the number must also be valid for the
        // region it resolved into.
        if !phonenumber::is_valid(&number) {
            return Err(ParseFailure {
                raw: raw.to_owned(),
                reason: "number is not valid for the resolved region".to_owned(),
            });
        }

        Ok(ResolvedNumber::new(number))
    }

    fn format(&self, number: &ResolvedNumber, spec: FormatSpec) -> String {
        phonenumber::format(number.as_inner())
            .mode(mode_for(spec))
            .to_string()
    }

    fn format_out_of_country(&self, number: &ResolvedNumber, country: CountryCode) -> String {
        let spec = if self.region_for(number) == Some(country) {
            FormatSpec::National
        } else {
            FormatSpec::International
        };
        self.format(number, spec)
    }

    fn format_for_mobile_dialing(
        &self,
        number: &ResolvedNumber,
        country: CountryCode,
        remove_formatting: bool,
    ) -> String {
        if remove_formatting {
            return self.format(number, FormatSpec::E164);
        }
        self.format_out_of_country(number, country)
    }

    fn region_for(&self, number: &ResolvedNumber) -> Option<CountryCode> {
        number
            .as_inner()
            .country()
            .id()
            .map(CountryCode::from_id)
    }

    fn type_of(&self, number: &ResolvedNumber) -> NumberType {
        number.as_inner().number_type(&metadata::DATABASE)
    }
}
