//! # Core Layer
//!
//! The query engine: concurrent fan-out over the repository port, merge of
//! partial results into derived views, and deterministic assembly of the
//! final sequences.
//!
//! ## Contents
//! * **[`dispatch`]**: Bounded fan-out/fan-in over per-key lookups.
//! * **[`service`]**: The four aggregate queries.
//! * **[`assemble`]**: Deterministic ordering of merged results.
//! * **[`memory`]**: The bundled in-memory repository adapter.
//!
//! ## Dependency Rule
//! * Depends only on `fleetscope-common`; never on the CLI.
//! * Everything here works against [`FleetRepository`], not a concrete
//!   store.
//!
//! [`FleetRepository`]: fleetscope_common::fleet::FleetRepository

pub mod assemble;
pub mod dispatch;
pub mod memory;
pub mod service;
