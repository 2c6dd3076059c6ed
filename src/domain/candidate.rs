//! PhoneCandidate value object.

use super::CountryCode;
use crate::formatter::PhoneFormatter;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A raw phone number string plus an ordered list of candidate countries.
///
/// The candidate is an immutable value object: narrowing the country hints
/// produces a new instance and leaves the original untouched, so a base
/// number can be reused across successive country assumptions without
/// aliasing surprises. Construction never fails - a candidate is just data,
/// and every failure is deferred to resolution.
///
/// An empty hint list means "no hint": resolution then relies on the
/// international prefix for auto-detection.
///
/// # Example
///
/// ```
/// use phone_resolver::{CountryCode, PhoneCandidate};
///
/// let base = PhoneCandidate::new("0470 12 34 56");
/// let belgian = base.with_country(CountryCode::new("BE")?);
///
/// assert!(base.countries().is_empty());
/// assert_eq!(belgian.countries().len(), 1);
/// assert_eq!(belgian.raw(), base.raw());
/// # Ok::<(), phone_resolver::CountryTokenError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneCandidate {
    raw: String,
    countries: Vec<CountryCode>,
}

impl PhoneCandidate {
    /// Create a candidate with no country hints.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            countries: Vec::new(),
        }
    }

    /// Reconstruct a candidate from its canonical (E.164) string form.
    ///
    /// The country context is intentionally dropped: a canonical string is
    /// self-describing through its leading `+`.
    pub fn from_canonical(canonical: impl Into<String>) -> Self {
        Self::new(canonical)
    }

    /// Return a new candidate with the hint list replaced by a single country.
    pub fn with_country(&self, country: CountryCode) -> Self {
        self.with_countries([country])
    }

    /// Return a new candidate with the hint list replaced, in priority order.
    ///
    /// The receiver is unaffected.
    pub fn with_countries<I>(&self, countries: I) -> Self
    where
        I: IntoIterator<Item = CountryCode>,
    {
        Self {
            raw: self.raw.clone(),
            countries: countries.into_iter().collect(),
        }
    }

    /// The raw input string, exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The candidate countries, in priority order. Empty means "no hint".
    pub fn countries(&self) -> &[CountryCode] {
        &self.countries
    }

    /// Whether the raw string carries the international prefix marker.
    pub fn has_international_prefix(&self) -> bool {
        self.raw.starts_with('+')
    }

    /// Serialize to the canonical JSON form: a bare JSON string holding the
    /// E.164 representation. Fails if the candidate cannot be resolved.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Reconstruct from the canonical JSON form produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl fmt::Display for PhoneCandidate {
    /// Shows the raw input. The canonical E.164 form is only available
    /// through the fallible resolution path.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

// Serde support - serialize as the canonical E.164 string, resolving through
// the shared engine. Resolution failure surfaces as a serialization error.
impl Serialize for PhoneCandidate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let canonical = PhoneFormatter::default()
            .canonicalize(self)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&canonical)
    }
}

// Serde support - deserialize from the canonical string. No validation here:
// construction never fails, and a bad string fails at first resolution.
impl<'de> Deserialize<'de> for PhoneCandidate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PhoneCandidate::from_canonical(s))
    }
}
