//! # Fleet Domain Model
//!
//! The record types the repository hands out, the derived views the
//! aggregation service computes from them, and the repository port itself.
//!
//! Records are read-only snapshots for the duration of a query; nothing in
//! this workspace creates, mutates or deletes them.

pub mod records;
pub mod repository;
pub mod resolved;
pub mod views;

pub use records::{Client, Vehicle, WeightSample};
pub use repository::FleetRepository;
pub use resolved::Resolved;
pub use views::{ClientSummary, VehicleDetail, VehicleRow};
