//! # Deterministic Assembly
//!
//! Concurrent merges complete in arbitrary order, so the raw view
//! collections come out shuffled. Everything leaving the service is sorted
//! by its natural key here, making identical queries over identical data
//! yield identical sequences.

use fleetscope_common::fleet::{ClientSummary, VehicleRow};

/// Client summaries, sorted by client name.
pub fn client_summaries(mut summaries: Vec<ClientSummary>) -> Vec<ClientSummary> {
    summaries.sort_by(|a, b| a.name.cmp(&b.name));
    summaries
}

/// Vehicle rows, sorted by VIN.
pub fn vehicle_rows(mut rows: Vec<VehicleRow>) -> Vec<VehicleRow> {
    rows.sort_by(|a, b| a.vin.cmp(&b.vin));
    rows
}
