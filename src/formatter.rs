//! Format and type dispatch over resolved candidates.

use crate::domain::{type_label, CountryCode, FormatSpec, NumberType, PhoneCandidate};
use crate::engine::PhoneEngine;
use crate::error::{
    CountryTokenResult, FormatError, FormatResult, ResolveError, ResolveResult,
};
use crate::resolver::Resolver;

/// Formats, types and canonicalizes candidates.
///
/// Every operation resolves the candidate first (nothing is cached between
/// calls) and then delegates the actual rendering or classification to the
/// engine. Resolution failures propagate unchanged.
///
/// # Example
///
/// ```
/// use phone_resolver::{CountryCode, PhoneCandidate, PhoneFormatter};
///
/// let formatter = PhoneFormatter::default();
/// let candidate = PhoneCandidate::new("0470123456").with_country(CountryCode::new("BE")?);
///
/// assert_eq!(formatter.format_e164(&candidate)?, "+32470123456");
/// assert_eq!(formatter.format_national(&candidate)?, "0470 12 34 56");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PhoneFormatter<'e> {
    resolver: Resolver<'e>,
}

impl<'e> PhoneFormatter<'e> {
    /// Create a formatter over the given engine.
    pub fn new(engine: &'e dyn PhoneEngine) -> Self {
        Self {
            resolver: Resolver::new(engine),
        }
    }

    /// The resolver this formatter dispatches through.
    pub fn resolver(&self) -> &Resolver<'e> {
        &self.resolver
    }

    fn engine(&self) -> &'e dyn PhoneEngine {
        self.resolver.engine()
    }

    /// Render the candidate in the requested representation.
    ///
    /// A distinct precondition applies before resolution is even attempted:
    /// with no country hint and no international prefix the output could not
    /// be canonical, so formatting is refused outright - even when
    /// auto-detection might have resolved the number. Only the head of the
    /// hint list and the raw prefix are inspected; the resolver is not
    /// consulted for this check.
    ///
    /// # Errors
    ///
    /// `FormatError::MissingCountry` for the ambiguity precondition, or a
    /// propagated `ResolveError` when resolution itself fails.
    pub fn format(&self, candidate: &PhoneCandidate, spec: FormatSpec) -> FormatResult<String> {
        if candidate.countries().first().is_none() && !candidate.has_international_prefix() {
            return Err(FormatError::MissingCountry {
                raw: candidate.raw().to_string(),
            });
        }

        let number = self.resolver.resolve(candidate)?;
        Ok(self.engine().format(&number, spec))
    }

    /// Render the candidate using a human-friendly format token.
    ///
    /// # Errors
    ///
    /// `FormatError::UnknownToken` for unrecognized tokens - never a silent
    /// default - plus everything [`format`](Self::format) can return.
    pub fn format_token(&self, candidate: &PhoneCandidate, token: &str) -> FormatResult<String> {
        let spec = FormatSpec::from_token(token)
            .ok_or_else(|| FormatError::UnknownToken(token.to_string()))?;
        self.format(candidate, spec)
    }

    /// Render in international format, e.g. `+32 470 12 34 56`.
    pub fn format_international(&self, candidate: &PhoneCandidate) -> FormatResult<String> {
        self.format(candidate, FormatSpec::International)
    }

    /// Render in national format, e.g. `0470 12 34 56`.
    pub fn format_national(&self, candidate: &PhoneCandidate) -> FormatResult<String> {
        self.format(candidate, FormatSpec::National)
    }

    /// Render in E.164 format, e.g. `+32470123456`.
    pub fn format_e164(&self, candidate: &PhoneCandidate) -> FormatResult<String> {
        self.format(candidate, FormatSpec::E164)
    }

    /// Render as an RFC 3966 `tel:` URI.
    pub fn format_rfc3966(&self, candidate: &PhoneCandidate) -> FormatResult<String> {
        self.format(candidate, FormatSpec::Rfc3966)
    }

    /// Render the candidate as it would be dialed from an arbitrary
    /// destination country. The token names where the call is placed *from*,
    /// not a resolution hint, and is validated against the region catalogue
    /// before anything else happens.
    ///
    /// # Errors
    ///
    /// `CountryTokenError::Unrecognized` for a bad token (checked before any
    /// formatting attempt), or a propagated resolution failure.
    pub fn format_for_country(
        &self,
        candidate: &PhoneCandidate,
        token: &str,
    ) -> CountryTokenResult<String> {
        let country = CountryCode::new(token)?;
        let number = self.resolver.resolve(candidate)?;
        Ok(self.engine().format_out_of_country(&number, country))
    }

    /// Render the candidate for dialing from a mobile handset in the given
    /// country, optionally stripping decorative characters.
    ///
    /// # Errors
    ///
    /// Same as [`format_for_country`](Self::format_for_country).
    pub fn format_for_mobile_dialing(
        &self,
        candidate: &PhoneCandidate,
        token: &str,
        remove_formatting: bool,
    ) -> CountryTokenResult<String> {
        let country = CountryCode::new(token)?;
        let number = self.resolver.resolve(candidate)?;
        Ok(self
            .engine()
            .format_for_mobile_dialing(&number, country, remove_formatting))
    }

    /// The resolved number's own region.
    pub fn region(&self, candidate: &PhoneCandidate) -> ResolveResult<CountryCode> {
        let number = self.resolver.resolve(candidate)?;
        self.engine()
            .region_for(&number)
            .ok_or_else(|| ResolveError::CountryMismatch {
                raw: candidate.raw().to_string(),
            })
    }

    /// The engine's raw classification of the resolved number.
    pub fn number_type(&self, candidate: &PhoneCandidate) -> ResolveResult<NumberType> {
        let number = self.resolver.resolve(candidate)?;
        Ok(self.engine().type_of(&number))
    }

    /// The classification mapped through the label table. Types with no
    /// label yield `Ok(None)` - the lookup miss is the sentinel, not an
    /// error.
    pub fn type_label(&self, candidate: &PhoneCandidate) -> ResolveResult<Option<&'static str>> {
        Ok(type_label::label_for(self.number_type(candidate)?))
    }

    /// The canonical E.164 string used for persistence and export.
    ///
    /// Always resolves; this path is not subject to the ambiguity
    /// precondition of [`format`](Self::format), since its output is
    /// canonical by construction.
    pub fn canonicalize(&self, candidate: &PhoneCandidate) -> ResolveResult<String> {
        let number = self.resolver.resolve(candidate)?;
        Ok(self.engine().format(&number, FormatSpec::E164))
    }
}

impl Default for PhoneFormatter<'static> {
    fn default() -> Self {
        Self {
            resolver: Resolver::default(),
        }
    }
}
