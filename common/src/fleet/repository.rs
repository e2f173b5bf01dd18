//! The central **abstraction** for record lookups.
//!
//! This module defines the port that any record store (the bundled
//! in-memory adapter, a real database, a test double) must implement.
//!
//! **Architectural Note:**
//! The aggregation service depends strictly on this trait rather than on a
//! concrete store. This keeps the fan-out/merge logic independent of where
//! the records actually live and lets tests substitute fault-injecting
//! doubles.

use async_trait::async_trait;

use crate::error::LookupError;
use crate::fleet::records::{Client, Vehicle, WeightSample};

/// Read-only lookups against the three record collections.
///
/// Every method is a pure read with no side effects; implementations must
/// be safe to call from any number of tasks at once. Lookups may carry
/// latency (a remote store, or the simulated one) but must not block the
/// executor.
#[async_trait]
pub trait FleetRepository: Send + Sync {
    /// Every client in the store, in no particular order.
    async fn all_clients(&self) -> Result<Vec<Client>, LookupError>;

    /// A single client. `NotFound` when no client carries that name.
    async fn client_by_name(&self, name: &str) -> Result<Client, LookupError>;

    /// A single vehicle. `NotFound` when no vehicle carries that VIN.
    async fn vehicle_by_vin(&self, vin: &str) -> Result<Vehicle, LookupError>;

    /// The VINs of every vehicle referencing `client`. An unknown client
    /// yields an empty list, not an error.
    async fn vins_of_client(&self, client: &str) -> Result<Vec<String>, LookupError>;

    /// All weight samples recorded for `vin`. A vehicle that was never
    /// weighed yields an empty list, not an error.
    async fn samples_of_vin(&self, vin: &str) -> Result<Vec<WeightSample>, LookupError>;
}
