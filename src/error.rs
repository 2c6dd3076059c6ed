//! Error types for phone number resolution and formatting.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Each concern gets its own enum; resolution failures propagate unchanged into the
//! formatting errors through transparent variants.

use thiserror::Error;

/// Errors that can occur while resolving a candidate into a parsed number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No supplied or auto-detected country yielded a successful parse.
    ///
    /// Carries the original raw input for diagnostics. The resolver never
    /// retries; the caller must supply a different country hint and re-invoke.
    #[error("phone number {raw:?} does not match any supplied or detected country")]
    CountryMismatch { raw: String },
}

/// Errors that can occur while formatting a candidate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Formatting was requested without a country hint on a number that does
    /// not carry an international prefix. The output would be non-canonical,
    /// so this fails regardless of whether resolution could succeed.
    #[error("cannot format phone number {raw:?}: no country hint and no international prefix")]
    MissingCountry { raw: String },

    /// The requested format token is not one of the recognized specs.
    #[error("unknown format token: {0:?}")]
    UnknownToken(String),

    /// Resolution failed before any formatting was attempted.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Errors that can occur when a caller-supplied destination country token is used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountryTokenError {
    /// The token is not part of the engine's region catalogue.
    #[error("unrecognized country token: {0:?}")]
    Unrecognized(String),

    /// Resolution failed after the token itself checked out.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// A single failed parse attempt at the engine boundary.
///
/// The resolver discards these silently while walking the candidate countries;
/// only the aggregate [`ResolveError`] is reported to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unparseable phone number {raw:?}: {reason}")]
pub struct ParseFailure {
    /// The raw input handed to the engine.
    pub raw: String,

    /// The engine's description of the failure.
    pub reason: String,
}

/// Convenience type alias for Results with ResolveError
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Convenience type alias for Results with FormatError
pub type FormatResult<T> = Result<T, FormatError>;

/// Convenience type alias for Results with CountryTokenError
pub type CountryTokenResult<T> = Result<T, CountryTokenError>;
