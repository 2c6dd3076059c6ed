//! CountryCode value object.

use crate::error::CountryTokenError;
use phonenumber::country;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated ISO 3166-1 alpha-2 country token.
///
/// Recognition is delegated entirely to the metadata engine's region
/// catalogue; this crate maintains no country list of its own. Input is
/// case-insensitive.
///
/// # Example
///
/// ```
/// use phone_resolver::CountryCode;
///
/// let be = CountryCode::new("be").unwrap();
/// assert_eq!(be.as_str(), "BE");
/// assert!(CountryCode::new("ZZ").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode(country::Id);

impl CountryCode {
    /// Create a new CountryCode from a token.
    ///
    /// # Errors
    ///
    /// Returns `CountryTokenError::Unrecognized` if the token is not part of
    /// the engine's region catalogue.
    pub fn new(token: &str) -> Result<Self, CountryTokenError> {
        let trimmed = token.trim();
        trimmed
            .to_ascii_uppercase()
            .parse::<country::Id>()
            .map(Self)
            .map_err(|_| CountryTokenError::Unrecognized(trimmed.to_string()))
    }

    /// Whether a token is recognized by the region catalogue.
    pub fn is_valid_token(token: &str) -> bool {
        Self::new(token).is_ok()
    }

    /// Get the token as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub(crate) fn id(self) -> country::Id {
        self.0
    }

    pub(crate) fn from_id(id: country::Id) -> Self {
        Self(id)
    }
}

impl FromStr for CountryCode {
    type Err = CountryTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Serde support - serialize as string
impl Serialize for CountryCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CountryCode::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_valid() {
        let code = CountryCode::new("BE").unwrap();
        assert_eq!(code.as_str(), "BE");
    }

    #[test]
    fn test_country_case_insensitive() {
        assert_eq!(CountryCode::new("us").unwrap().as_str(), "US");
        assert_eq!(CountryCode::new(" nl ").unwrap().as_str(), "NL");
    }

    #[test]
    fn test_country_rejects_unknown_tokens() {
        assert!(CountryCode::new("ZZ").is_err());
        assert!(CountryCode::new("").is_err());
        assert!(CountryCode::new("Belgium").is_err());

        let err = CountryCode::new("ZZ").unwrap_err();
        assert!(matches!(err, CountryTokenError::Unrecognized(token) if token == "ZZ"));
    }

    #[test]
    fn test_is_valid_token() {
        assert!(CountryCode::is_valid_token("FR"));
        assert!(!CountryCode::is_valid_token("ZZ"));
    }

    #[test]
    fn test_country_display() {
        let code = CountryCode::new("GB").unwrap();
        assert_eq!(format!("{}", code), "GB");
    }

    #[test]
    fn test_country_serialization() {
        let code = CountryCode::new("BE").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"BE\"");
    }

    #[test]
    fn test_country_deserialization() {
        let code: CountryCode = serde_json::from_str("\"BE\"").unwrap();
        assert_eq!(code.as_str(), "BE");

        let result: Result<CountryCode, _> = serde_json::from_str("\"ZZ\"");
        assert!(result.is_err());
    }
}
