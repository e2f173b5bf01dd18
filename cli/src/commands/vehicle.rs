use std::time::Instant;

use colored::*;
use fleetscope_common::fleet::Resolved;
use fleetscope_core::service::QueryService;

use crate::terminal::{print, spinner};

pub async fn run(service: &QueryService, vin: &str) -> anyhow::Result<()> {
    let spinner = spinner::start("Joining vehicle, owner and weighings...");
    let started = Instant::now();
    let result = service.vehicle_detail(vin).await;
    spinner.finish_and_clear();

    let detail = result?;
    print::tree_head(0, &detail.vin);

    let weights: ColoredString = match &detail.weights {
        Resolved::Complete(list) if list.is_empty() => "never weighed".dimmed(),
        Resolved::Complete(list) => join_weights(list).normal(),
        Resolved::Degraded { cause, .. } => format!("unavailable ({cause})").yellow(),
    };

    print::as_tree_one_level(vec![
        ("Owner".to_string(), detail.client_name.normal()),
        ("Contact".to_string(), detail.contact_name.normal()),
        ("Email".to_string(), detail.contact_email.normal()),
        ("Mileage".to_string(), detail.mileage.to_string().normal()),
        ("Weights".to_string(), weights),
    ]);

    print::summary_line(1, "vehicle", started.elapsed());
    Ok(())
}

fn join_weights(weights: &[f64]) -> String {
    weights
        .iter()
        .map(|weight| weight.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
