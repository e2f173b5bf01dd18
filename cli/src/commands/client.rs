use std::time::Instant;

use fleetscope_core::service::QueryService;

use crate::commands::roster;
use crate::terminal::{print, spinner};

pub async fn run(service: &QueryService, name: &str) -> anyhow::Result<()> {
    let spinner = spinner::start("Resolving client and vehicle count...");
    let started = Instant::now();
    let result = service.client_summary(name).await;
    spinner.finish_and_clear();

    let summary = result?;
    roster::print_summary(0, &summary);
    print::summary_line(1, "client", started.elapsed());
    Ok(())
}
