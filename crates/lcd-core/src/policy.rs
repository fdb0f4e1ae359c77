//! Immutable search policy.

use serde::{Deserialize, Serialize};

use crate::errors::ErrorInfo;

/// Flags controlling how the search engine explores and validates candidates.
///
/// A value is built once per run and passed by reference; changing a flag means
/// building a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Fix the leading `k` columns to the identity and search the remaining `n - k`.
    pub append_identity: bool,
    /// Break scalar-multiple and row-order symmetry while enumerating rows.
    pub restrict_generation: bool,
    /// Only accept generator matrices spanning a Hermitian LCD code.
    pub require_hermitian_lcd: bool,
    /// Partition the first-row candidates across independent workers.
    pub multithreaded: bool,
    /// Worker count for the parallel search; `0` picks the rayon default.
    pub threads: usize,
}

impl ValidatorConfig {
    /// Adds every flag to an error payload.
    pub fn annotate(&self, info: ErrorInfo) -> ErrorInfo {
        info.with_context("append_identity", self.append_identity.to_string())
            .with_context("restrict_generation", self.restrict_generation.to_string())
            .with_context(
                "require_hermitian_lcd",
                self.require_hermitian_lcd.to_string(),
            )
            .with_context("multithreaded", self.multithreaded.to_string())
    }
}
