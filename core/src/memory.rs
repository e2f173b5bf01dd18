//! # In-Memory Repository Adapter
//!
//! A static, read-only record store with simulated lookup latency. It
//! stands in for the real measurement database: every lookup sleeps for a
//! configurable duration (plus optional jitter, so completion order stays
//! honest) before answering.
//!
//! Tests drive it through the fault-injection hooks to exercise the
//! degraded-result paths without a real backend.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use fleetscope_common::error::{Entity, LookupError};
use fleetscope_common::fleet::{Client, FleetRepository, Vehicle, WeightSample};

#[derive(Default)]
struct Faults {
    vin_lists: HashSet<String>,
    sample_lists: HashSet<String>,
}

/// An immutable snapshot of the three record collections.
#[derive(Default)]
pub struct InMemoryFleet {
    clients: HashMap<String, Client>,
    vehicles: HashMap<String, Vehicle>,
    samples: HashMap<String, Vec<WeightSample>>,
    latency: Duration,
    jitter: Duration,
    faults: Faults,
}

impl InMemoryFleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-lookup sleep before answering. Zero by default.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Random extra delay in `0..=jitter` added on top of the base
    /// latency, so concurrent lookups complete in shuffled order.
    pub fn with_jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_client(mut self, name: &str, contact_name: &str, contact_email: &str) -> Self {
        self.clients.insert(
            name.to_string(),
            Client {
                name: name.to_string(),
                contact_name: contact_name.to_string(),
                contact_email: contact_email.to_string(),
            },
        );
        self
    }

    pub fn with_vehicle(mut self, vin: &str, client: &str, mileage: u64) -> Self {
        self.vehicles.insert(
            vin.to_string(),
            Vehicle {
                vin: vin.to_string(),
                client: client.to_string(),
                mileage,
            },
        );
        self
    }

    pub fn with_samples(mut self, vin: &str, weights: &[f64]) -> Self {
        self.samples.insert(
            vin.to_string(),
            weights.iter().copied().map(WeightSample::new).collect(),
        );
        self
    }

    /// Makes every `vins_of_client` lookup for `client` fail.
    pub fn fail_vins_of(mut self, client: &str) -> Self {
        self.faults.vin_lists.insert(client.to_string());
        self
    }

    /// Makes every `samples_of_vin` lookup for `vin` fail.
    pub fn fail_samples_of(mut self, vin: &str) -> Self {
        self.faults.sample_lists.insert(vin.to_string());
        self
    }

    /// The demo fleet: three clients, nine vehicles and their weighings.
    pub fn sample_fleet() -> Self {
        Self::new()
            .with_client("Bobs Burgers", "Bob Belcher", "bob@bestburgers.com")
            .with_client("Dunder Mifflin", "Michael Scott", "bestboss@dunermifflin.com")
            .with_client("CIA", "Stan Smith", "stan@cia.com")
            .with_vehicle("123456789G", "Bobs Burgers", 100_783)
            .with_vehicle("123E456789G", "Bobs Burgers", 107_598)
            .with_vehicle("23E456789G", "Bobs Burgers", 178_783)
            .with_vehicle("23EFU456789G", "Dunder Mifflin", 124_783)
            .with_vehicle("23EFU4FW56789G", "Dunder Mifflin", 10_783)
            .with_vehicle("23EFfwU4FW56789G", "Dunder Mifflin", 14_783)
            .with_vehicle("23EFU4FW5fe6789G", "Dunder Mifflin", 1_100_783)
            .with_vehicle("23EFU4FW5678f39G", "CIA", 103)
            .with_vehicle("23EFU4FW5678ff39G", "CIA", 0)
            .with_samples("123456789G", &[32.1, 106.0, 5.36])
            .with_samples("123E456789G", &[104.0, 2342.0])
            .with_samples("23E456789G", &[9182.0, 2346.0, 56856.0])
            .with_samples("23EFU456789G", &[10.236, 10234.6, 5_347_890.0])
            .with_samples("23EFU4FW56789G", &[0.2, 23467.0, 10.6, 786.0])
            .with_samples("23EFfwU4FW56789G", &[14.0, 1564.0, 134.0, 1442.0])
            .with_samples("23EFU4FW5fe6789G", &[10.36, 16.0])
            .with_samples("23EFU4FW5678f39G", &[17.0])
            .with_samples("23EFU4FW5678ff39G", &[10.6, 11000.0])
    }

    async fn simulate_latency(&self) {
        let mut delay = self.latency;
        if !self.jitter.is_zero() {
            let extra = rand::rng().random_range(0..=self.jitter.as_millis() as u64);
            delay += Duration::from_millis(extra);
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl FleetRepository for InMemoryFleet {
    async fn all_clients(&self) -> Result<Vec<Client>, LookupError> {
        self.simulate_latency().await;
        Ok(self.clients.values().cloned().collect())
    }

    async fn client_by_name(&self, name: &str) -> Result<Client, LookupError> {
        self.simulate_latency().await;
        self.clients
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::not_found(Entity::Client, name))
    }

    async fn vehicle_by_vin(&self, vin: &str) -> Result<Vehicle, LookupError> {
        self.simulate_latency().await;
        self.vehicles
            .get(vin)
            .cloned()
            .ok_or_else(|| LookupError::not_found(Entity::Vehicle, vin))
    }

    async fn vins_of_client(&self, client: &str) -> Result<Vec<String>, LookupError> {
        self.simulate_latency().await;
        if self.faults.vin_lists.contains(client) {
            return Err(LookupError::backend(Entity::Client, client, "injected fault"));
        }
        Ok(self
            .vehicles
            .values()
            .filter(|vehicle| vehicle.client == client)
            .map(|vehicle| vehicle.vin.clone())
            .collect())
    }

    async fn samples_of_vin(&self, vin: &str) -> Result<Vec<WeightSample>, LookupError> {
        self.simulate_latency().await;
        if self.faults.sample_lists.contains(vin) {
            return Err(LookupError::backend(
                Entity::WeightSamples,
                vin,
                "injected fault",
            ));
        }
        // A vehicle that was never weighed has an empty list, not an error.
        Ok(self.samples.get(vin).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_client_is_not_found() {
        let store = InMemoryFleet::sample_fleet();
        let err = store.client_by_name("does-not-exist").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn unknown_client_owns_no_vins() {
        let store = InMemoryFleet::sample_fleet();
        let vins = store.vins_of_client("does-not-exist").await.unwrap();
        assert!(vins.is_empty());
    }

    #[tokio::test]
    async fn unweighed_vehicle_has_empty_samples() {
        let store = InMemoryFleet::new().with_vehicle("NEW1", "Bobs Burgers", 12);
        let samples = store.samples_of_vin("NEW1").await.unwrap();
        assert!(samples.is_empty());
    }

    #[tokio::test]
    async fn injected_fault_surfaces_as_backend_error() {
        let store = InMemoryFleet::sample_fleet().fail_samples_of("123456789G");
        let err = store.samples_of_vin("123456789G").await.unwrap_err();
        assert!(!err.is_not_found());
    }
}
