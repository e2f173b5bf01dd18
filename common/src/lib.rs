//! # Shared Layer
//!
//! Models, contracts and configuration shared by every fleetscope crate.
//!
//! ## Contents
//! * **[`fleet`]**: The record types, derived views and the repository port.
//! * **[`error`]**: The lookup/query error taxonomy.
//! * **[`config`]**: Per-query tuning knobs.
//!
//! ## Dependency Rule
//! * This crate depends on nothing else in the workspace.
//! * `core` and `cli` depend on it; adapters implement the ports declared here.

pub mod config;
pub mod error;
pub mod fleet;
