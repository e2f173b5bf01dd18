//! End-to-end query scenarios against the in-memory store, covering the
//! seeded demo fleet, degraded-lookup handling and deadline behaviour.

use std::sync::Arc;
use std::time::Duration;

use fleetscope_common::config::QueryConfig;
use fleetscope_common::error::QueryError;
use fleetscope_common::fleet::Resolved;
use fleetscope_core::memory::InMemoryFleet;
use fleetscope_core::service::QueryService;

fn service(store: InMemoryFleet) -> QueryService {
    QueryService::new(Arc::new(store), QueryConfig::default())
}

#[tokio::test]
async fn roster_counts_every_clients_vehicles() {
    let service = service(InMemoryFleet::sample_fleet());

    let summaries = service.client_roster().await.unwrap();

    let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Bobs Burgers", "CIA", "Dunder Mifflin"]);

    let counts: Vec<usize> = summaries
        .iter()
        .map(|s| *s.vehicle_count.value())
        .collect();
    assert_eq!(counts, [3, 2, 4]);
    assert!(summaries.iter().all(|s| !s.is_degraded()));
}

#[tokio::test]
async fn identical_queries_return_identical_output() {
    let service = service(
        InMemoryFleet::sample_fleet().with_jitter(Duration::from_millis(5)),
    );

    let first = service.client_roster().await.unwrap();
    let second = service.client_roster().await.unwrap();
    assert_eq!(first, second);

    let rows_a = service.vehicle_rows("Dunder Mifflin").await.unwrap();
    let rows_b = service.vehicle_rows("Dunder Mifflin").await.unwrap();
    assert_eq!(rows_a, rows_b);
}

#[tokio::test]
async fn client_summary_counts_owned_vehicles() {
    let service = service(InMemoryFleet::sample_fleet());

    let summary = service.client_summary("Bobs Burgers").await.unwrap();

    assert_eq!(summary.name, "Bobs Burgers");
    assert_eq!(summary.contact_name, "Bob Belcher");
    assert_eq!(summary.contact_email, "bob@bestburgers.com");
    assert_eq!(summary.vehicle_count, Resolved::Complete(3));
}

#[tokio::test]
async fn unknown_client_summary_is_not_found() {
    let service = service(InMemoryFleet::sample_fleet());

    let err = service.client_summary("does-not-exist").await.unwrap_err();
    assert!(matches!(err, QueryError::NotFound { .. }));
}

#[tokio::test]
async fn client_without_vehicles_counts_zero() {
    let store = InMemoryFleet::sample_fleet().with_client(
        "Pied Piper",
        "Richard Hendricks",
        "richard@piedpiper.com",
    );
    let service = service(store);

    let summary = service.client_summary("Pied Piper").await.unwrap();

    // A genuine zero, not a degraded fallback.
    assert_eq!(summary.vehicle_count, Resolved::Complete(0));
}

#[tokio::test]
async fn vehicle_rows_join_odometer_and_largest_weight() {
    let service = service(InMemoryFleet::sample_fleet());

    let rows = service.vehicle_rows("Bobs Burgers").await.unwrap();

    let vins: Vec<&str> = rows.iter().map(|r| r.vin.as_str()).collect();
    assert_eq!(vins, ["123456789G", "123E456789G", "23E456789G"]);

    assert_eq!(rows[0].mileage, Resolved::Complete(100_783));
    assert_eq!(rows[0].largest_weight, Resolved::Complete(106.0));
    assert_eq!(rows[1].largest_weight, Resolved::Complete(2342.0));
    assert_eq!(rows[2].largest_weight, Resolved::Complete(56856.0));
}

#[tokio::test]
async fn vehicle_rows_for_unknown_client_is_not_found() {
    let service = service(InMemoryFleet::sample_fleet());

    let err = service.vehicle_rows("does-not-exist").await.unwrap_err();
    assert!(matches!(err, QueryError::NotFound { .. }));
}

#[tokio::test]
async fn unweighed_vehicle_rows_report_zero_maximum() {
    let store = InMemoryFleet::sample_fleet().with_vehicle("NEWVIN1", "CIA", 50);
    let service = service(store);

    let rows = service.vehicle_rows("CIA").await.unwrap();
    let row = rows.iter().find(|r| r.vin == "NEWVIN1").unwrap();

    assert_eq!(row.largest_weight, Resolved::Complete(0.0));
    assert!(!row.is_degraded());
}

#[tokio::test]
async fn vehicle_detail_joins_owner_contact_fields() {
    let service = service(InMemoryFleet::sample_fleet());

    let detail = service.vehicle_detail("23EFU456789G").await.unwrap();

    assert_eq!(detail.client_name, "Dunder Mifflin");
    assert_eq!(detail.contact_name, "Michael Scott");
    assert_eq!(detail.mileage, 124_783);
    assert_eq!(
        detail.weights,
        Resolved::Complete(vec![10.236, 10234.6, 5_347_890.0])
    );
}

#[tokio::test]
async fn unknown_vehicle_detail_is_not_found() {
    let service = service(InMemoryFleet::sample_fleet());

    let err = service.vehicle_detail("NOPE").await.unwrap_err();
    assert!(matches!(err, QueryError::NotFound { .. }));
}

#[tokio::test]
async fn vehicle_with_deleted_owner_is_not_found() {
    // The foreign key is by value only, so an orphaned vehicle can exist;
    // the detail view is meaningless without contact fields.
    let store = InMemoryFleet::new().with_vehicle("ORPHAN1", "Gone Corp", 10);
    let service = service(store);

    let err = service.vehicle_detail("ORPHAN1").await.unwrap_err();
    assert!(matches!(err, QueryError::NotFound { .. }));
}

#[tokio::test]
async fn failed_vin_list_degrades_count_instead_of_masking_it() {
    let store = InMemoryFleet::sample_fleet().fail_vins_of("CIA");
    let service = service(store);

    let summaries = service.client_roster().await.unwrap();
    let cia = summaries.iter().find(|s| s.name == "CIA").unwrap();

    assert_eq!(*cia.vehicle_count.value(), 0);
    assert!(cia.is_degraded());
    assert!(cia.vehicle_count.cause().is_some());

    // The other clients are unaffected.
    let bobs = summaries.iter().find(|s| s.name == "Bobs Burgers").unwrap();
    assert_eq!(bobs.vehicle_count, Resolved::Complete(3));
}

#[tokio::test]
async fn failed_sample_list_degrades_only_the_weight_field() {
    let store = InMemoryFleet::sample_fleet().fail_samples_of("123456789G");
    let service = service(store);

    let rows = service.vehicle_rows("Bobs Burgers").await.unwrap();
    let row = rows.iter().find(|r| r.vin == "123456789G").unwrap();

    // The two fields come from independent lookups.
    assert_eq!(row.mileage, Resolved::Complete(100_783));
    assert!(row.largest_weight.is_degraded());
    assert_eq!(*row.largest_weight.value(), 0.0);
}

#[tokio::test]
async fn failed_sample_list_degrades_detail_weights() {
    let store = InMemoryFleet::sample_fleet().fail_samples_of("23EFU456789G");
    let service = service(store);

    let detail = service.vehicle_detail("23EFU456789G").await.unwrap();

    assert!(detail.weights.is_degraded());
    assert!(detail.weights.value().is_empty());
    // The primary record still resolved fully.
    assert_eq!(detail.mileage, 124_783);
}

#[tokio::test(start_paused = true)]
async fn expired_deadline_degrades_instead_of_hanging() {
    let store = InMemoryFleet::sample_fleet().with_latency(Duration::from_secs(10));
    let config = QueryConfig {
        deadline: Some(Duration::from_secs(1)),
        ..QueryConfig::default()
    };
    let service = QueryService::new(Arc::new(store), config);

    let summaries = service.client_roster().await.unwrap();

    assert_eq!(summaries.len(), 3);
    assert!(summaries.iter().all(|s| s.is_degraded()));
    assert!(summaries.iter().all(|s| *s.vehicle_count.value() == 0));
}
