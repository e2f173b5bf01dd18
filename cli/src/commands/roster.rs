use std::time::Instant;

use colored::*;
use fleetscope_common::fleet::ClientSummary;
use fleetscope_core::service::QueryService;

use crate::terminal::{print, spinner};

pub async fn run(service: &QueryService) -> anyhow::Result<()> {
    let spinner = spinner::start("Counting vehicles per client...");
    let started = Instant::now();
    let result = service.client_roster().await;
    spinner.finish_and_clear();

    let summaries = result?;
    if summaries.is_empty() {
        print::no_results();
        return Ok(());
    }

    for (idx, summary) in summaries.iter().enumerate() {
        print_summary(idx, summary);
        if idx + 1 != summaries.len() {
            println!();
        }
    }

    print::summary_line(summaries.len(), "clients", started.elapsed());
    Ok(())
}

pub fn print_summary(idx: usize, summary: &ClientSummary) {
    print::tree_head(idx, &summary.name);
    print::as_tree_one_level(vec![
        ("Contact".to_string(), summary.contact_name.normal()),
        ("Email".to_string(), summary.contact_email.normal()),
        (
            "Vehicles".to_string(),
            print::resolved_value(&summary.vehicle_count),
        ),
    ]);
}
