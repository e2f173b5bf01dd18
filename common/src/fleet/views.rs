//! # Derived Views
//!
//! Read-only projections computed by joining records at query time.
//! None of these are ever persisted.

use super::resolved::Resolved;

/// A client plus how many vehicles reference it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientSummary {
    pub name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub vehicle_count: Resolved<usize>,
}

/// One row of a client's vehicle roster: the VIN, its odometer reading and
/// the largest weight ever sampled for it (0.0 when no samples exist).
///
/// The two derived fields come from independent lookups and degrade
/// independently.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleRow {
    pub vin: String,
    pub mileage: Resolved<u64>,
    pub largest_weight: Resolved<f64>,
}

/// A vehicle joined with its owning client's contact fields and the full
/// sample list.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleDetail {
    pub vin: String,
    pub client_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub mileage: u64,
    pub weights: Resolved<Vec<f64>>,
}

impl ClientSummary {
    pub fn is_degraded(&self) -> bool {
        self.vehicle_count.is_degraded()
    }
}

impl VehicleRow {
    pub fn is_degraded(&self) -> bool {
        self.mileage.is_degraded() || self.largest_weight.is_degraded()
    }
}
