//! # Error Taxonomy
//!
//! Two layers of failure, kept deliberately distinct:
//!
//! * [`LookupError`]: what a single repository lookup can report.
//! * [`QueryError`]: what an aggregate query reports to its caller.
//!
//! A failed *secondary* lookup (a vehicle count, a sample list) never
//! becomes a `QueryError`; it is recovered locally into a
//! [`Resolved::Degraded`](crate::fleet::Resolved) field so the caller can
//! still tell "truly zero" apart from "lookup failed".

use thiserror::Error;

/// The kind of record a key was resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Client,
    Vehicle,
    WeightSamples,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Client => write!(f, "client"),
            Entity::Vehicle => write!(f, "vehicle"),
            Entity::WeightSamples => write!(f, "weight samples"),
        }
    }
}

/// Outcome of a single repository lookup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("{entity} does not exist: {key}")]
    NotFound { entity: Entity, key: String },

    /// The backing store failed to answer (injected fault, timeout at the
    /// store level, ...). Carries the store's own description.
    #[error("lookup of {entity} {key} failed: {reason}")]
    Backend {
        entity: Entity,
        key: String,
        reason: String,
    },
}

impl LookupError {
    pub fn not_found(entity: Entity, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn backend(entity: Entity, key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Backend {
            entity,
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Fatal outcome of an aggregate query.
///
/// Only a failed *primary* lookup (the queried client or vehicle itself)
/// ends up here; everything else degrades in place.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("{entity} does not exist: {key}")]
    NotFound { entity: Entity, key: String },

    #[error("query failed: {0}")]
    Lookup(LookupError),
}

impl From<LookupError> for QueryError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound { entity, key } => QueryError::NotFound { entity, key },
            other => QueryError::Lookup(other),
        }
    }
}

impl QueryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
