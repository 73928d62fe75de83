//! Typed errors raised at the storage seam.
//!
//! Store functions return `anyhow::Result` but construct these variants for
//! failures callers may want to match on (a missing record, a rejected
//! mood score). Everything else stays as contextual `anyhow` errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("mood score must be between 1 and 10, got {0}")]
    InvalidScore(i64),
}
