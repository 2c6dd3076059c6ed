//! Ordered-country resolution of phone candidates.

use crate::domain::PhoneCandidate;
use crate::engine::{LibphoneEngine, PhoneEngine, ResolvedNumber};
use crate::error::{ResolveError, ResolveResult};

/// Resolves a [`PhoneCandidate`] into a parsed number.
///
/// The algorithm is deterministic, ordered and short-circuiting: explicit
/// country hints are authoritative and tried first in caller priority order;
/// auto-detection is a fallback reserved for self-describing numbers that
/// carry a `+` prefix. Nothing is retried and nothing is cached - every call
/// re-resolves from the candidate.
///
/// The engine is injected at construction; [`Resolver::default`] wires the
/// shared [`LibphoneEngine`].
pub struct Resolver<'e> {
    engine: &'e dyn PhoneEngine,
}

impl<'e> Resolver<'e> {
    /// Create a resolver over the given engine.
    pub fn new(engine: &'e dyn PhoneEngine) -> Self {
        Self { engine }
    }

    /// The engine this resolver delegates to.
    pub fn engine(&self) -> &'e dyn PhoneEngine {
        self.engine
    }

    /// Resolve a candidate into a single parsed number.
    ///
    /// Each country hint is attempted in order and the first success wins.
    /// Per-country failures are discarded without further reporting; only the
    /// aggregate failure at the end surfaces, carrying the raw input.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::CountryMismatch` when no hint and no
    /// auto-detection attempt yields a valid number.
    pub fn resolve(&self, candidate: &PhoneCandidate) -> ResolveResult<ResolvedNumber> {
        for &country in candidate.countries() {
            match self.engine.parse(candidate.raw(), Some(country)) {
                Ok(number) => {
                    tracing::debug!(
                        raw = candidate.raw(),
                        country = %country,
                        "resolved against country hint"
                    );
                    return Ok(number);
                }
                Err(failure) => {
                    // Hint mismatches are deliberately swallowed here.
                    tracing::trace!(country = %country, %failure, "country hint rejected");
                }
            }
        }

        if candidate.has_international_prefix() {
            if let Ok(number) = self.engine.parse(candidate.raw(), None) {
                tracing::debug!(raw = candidate.raw(), "resolved via auto-detection");
                return Ok(number);
            }
        }

        Err(ResolveError::CountryMismatch {
            raw: candidate.raw().to_string(),
        })
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(LibphoneEngine::global())
    }
}
