//! # Query Service
//!
//! Implements the four aggregate queries over an injected
//! [`FleetRepository`]. Each query fans out its per-key lookups through
//! [`FanOut`](crate::dispatch::FanOut), merges the keyed outcomes into
//! derived views and hands them to [`assemble`](crate::assemble) for
//! deterministic ordering.
//!
//! Failure policy: a missing *primary* entity (the queried client or
//! vehicle, or a vehicle's owning client) is fatal. Every *secondary*
//! lookup recovers locally into a [`Resolved::Degraded`] field carrying
//! the documented default and the cause, so a failed count is never
//! mistaken for a genuine zero.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use fleetscope_common::config::QueryConfig;
use fleetscope_common::error::{LookupError, QueryError};
use fleetscope_common::fleet::records::largest_weight;
use fleetscope_common::fleet::{
    ClientSummary, FleetRepository, Resolved, VehicleDetail, VehicleRow,
};

use crate::assemble;
use crate::dispatch::FanOut;

/// Cause recorded on fields whose lookup was aborted by the deadline or a
/// fail-fast sibling before it produced an outcome.
const ABORTED_CAUSE: &str = "lookup aborted before completion";

/// The aggregation engine. Cheap to clone; all state is shared.
#[derive(Clone)]
pub struct QueryService {
    repo: Arc<dyn FleetRepository>,
    config: QueryConfig,
}

impl QueryService {
    pub fn new(repo: Arc<dyn FleetRepository>, config: QueryConfig) -> Self {
        Self {
            repo,
            config: config.normalized(),
        }
    }

    /// Every client with the number of vehicles referencing it, sorted by
    /// client name.
    pub async fn client_roster(&self) -> Result<Vec<ClientSummary>, QueryError> {
        let clients = self.repo.all_clients().await?;
        debug!(clients = clients.len(), "fanning out vehicle counts");

        let fanout = FanOut::new(&self.config);
        let repo = self.repo.clone();
        let mut counts = fanout
            .dispatch(
                clients.iter().map(|client| client.name.clone()),
                move |name: String| {
                    let repo = repo.clone();
                    async move { repo.vins_of_client(&name).await }
                },
            )
            .await;

        let summaries = clients
            .into_iter()
            .map(|client| {
                let vehicle_count = resolve_count(counts.remove(&client.name), &client.name);
                ClientSummary {
                    name: client.name,
                    contact_name: client.contact_name,
                    contact_email: client.contact_email,
                    vehicle_count,
                }
            })
            .collect();

        Ok(assemble::client_summaries(summaries))
    }

    /// One client joined with its vehicle count. The client record and the
    /// VIN list resolve concurrently; only the client itself is fatal.
    pub async fn client_summary(&self, name: &str) -> Result<ClientSummary, QueryError> {
        let (client, vins) = tokio::join!(
            self.repo.client_by_name(name),
            self.repo.vins_of_client(name),
        );
        let client = client?;

        Ok(ClientSummary {
            name: client.name,
            contact_name: client.contact_name,
            contact_email: client.contact_email,
            vehicle_count: resolve_count(Some(vins), name),
        })
    }

    /// The vehicle roster of one client: per VIN, the odometer reading and
    /// the largest sampled weight. Up to 2xN lookups run concurrently
    /// under one shared bound; the two fields of each row come from
    /// independent lookups and degrade independently.
    pub async fn vehicle_rows(&self, client: &str) -> Result<Vec<VehicleRow>, QueryError> {
        let (owner, vins) = tokio::join!(
            self.repo.client_by_name(client),
            self.repo.vins_of_client(client),
        );
        // Unknown client is NotFound, matching the summary endpoint.
        owner?;
        let mut vins = vins?;

        let mut seen = HashSet::new();
        vins.retain(|vin| seen.insert(vin.clone()));
        debug!(client, vehicles = vins.len(), "fanning out row lookups");

        let fanout = FanOut::new(&self.config);
        let vehicle_repo = self.repo.clone();
        let sample_repo = self.repo.clone();
        let (mut vehicles, mut samples) = tokio::join!(
            fanout.dispatch(vins.clone(), move |vin: String| {
                let repo = vehicle_repo.clone();
                async move { repo.vehicle_by_vin(&vin).await }
            }),
            fanout.dispatch(vins.clone(), move |vin: String| {
                let repo = sample_repo.clone();
                async move { repo.samples_of_vin(&vin).await }
            }),
        );

        let rows = vins
            .into_iter()
            .map(|vin| {
                let mileage = match vehicles.remove(&vin) {
                    Some(Ok(vehicle)) => Resolved::Complete(vehicle.mileage),
                    outcome => Resolved::degraded(0, degradation_cause(&vin, "vehicle", outcome)),
                };
                let largest_weight = match samples.remove(&vin) {
                    Some(Ok(list)) => Resolved::Complete(largest_weight(&list)),
                    outcome => {
                        Resolved::degraded(0.0, degradation_cause(&vin, "weight samples", outcome))
                    }
                };
                VehicleRow {
                    vin,
                    mileage,
                    largest_weight,
                }
            })
            .collect();

        Ok(assemble::vehicle_rows(rows))
    }

    /// One vehicle joined with its owner's contact fields and the full
    /// weight list. The vehicle record and sample list resolve
    /// concurrently; the owner is resolved once the vehicle is known.
    ///
    /// A vehicle whose owning client is gone is a hard NotFound: the
    /// projection is meaningless without contact information.
    pub async fn vehicle_detail(&self, vin: &str) -> Result<VehicleDetail, QueryError> {
        let (vehicle, samples) = tokio::join!(
            self.repo.vehicle_by_vin(vin),
            self.repo.samples_of_vin(vin),
        );
        let vehicle = vehicle?;
        let owner = self.repo.client_by_name(&vehicle.client).await?;

        let weights = match samples {
            Ok(list) => Resolved::Complete(list.iter().map(|sample| sample.weight).collect()),
            Err(err) => {
                warn!(vin, %err, "sample lookup failed, reporting empty weight list");
                Resolved::degraded(Vec::new(), err.to_string())
            }
        };

        Ok(VehicleDetail {
            vin: vehicle.vin,
            client_name: owner.name,
            contact_name: owner.contact_name,
            contact_email: owner.contact_email,
            mileage: vehicle.mileage,
            weights,
        })
    }
}

/// Collapses a VIN-list outcome into the count field: length on success,
/// degraded zero on failure or an aborted lookup.
fn resolve_count(
    outcome: Option<Result<Vec<String>, LookupError>>,
    client: &str,
) -> Resolved<usize> {
    match outcome {
        Some(Ok(vins)) => Resolved::Complete(vins.len()),
        Some(Err(err)) => {
            warn!(client, %err, "vehicle list lookup failed, reporting degraded zero count");
            Resolved::degraded(0, err.to_string())
        }
        None => {
            warn!(client, "vehicle list lookup aborted, reporting degraded zero count");
            Resolved::degraded(0, ABORTED_CAUSE)
        }
    }
}

fn degradation_cause<T>(
    vin: &str,
    what: &str,
    outcome: Option<Result<T, LookupError>>,
) -> String {
    match outcome {
        Some(Err(err)) => {
            warn!(vin, %err, "{what} lookup failed, reporting degraded field");
            err.to_string()
        }
        _ => {
            warn!(vin, "{what} lookup aborted, reporting degraded field");
            ABORTED_CAUSE.to_string()
        }
    }
}
