//! FormatSpec value object.

use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;

/// The fixed set of output representations for a resolved number.
///
/// Each variant maps to exactly one formatting mode of the metadata engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatSpec {
    /// International formatting with country code and spacing, e.g. `+32 470 12 34 56`.
    International,

    /// National formatting without country code, e.g. `0470 12 34 56`.
    National,

    /// E.164: `+` followed by digits only, e.g. `+32470123456`. The canonical
    /// persistence form.
    E164,

    /// RFC 3966 `tel:` URI formatting.
    Rfc3966,
}

impl FormatSpec {
    /// Parse a human-friendly token (`"INTERNATIONAL"`, `"e164"`, ...).
    ///
    /// Returns `None` for unrecognized tokens; callers decide how to fail.
    pub fn from_token(token: &str) -> Option<FormatSpec> {
        match token.trim().to_ascii_uppercase().as_str() {
            "INTERNATIONAL" => Some(Self::International),
            "NATIONAL" => Some(Self::National),
            "E164" => Some(Self::E164),
            "RFC3966" => Some(Self::Rfc3966),
            _ => None,
        }
    }

    /// Get the canonical token for this spec.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::International => "INTERNATIONAL",
            Self::National => "NATIONAL",
            Self::E164 => "E164",
            Self::Rfc3966 => "RFC3966",
        }
    }
}

impl FromStr for FormatSpec {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| FormatError::UnknownToken(s.to_string()))
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
