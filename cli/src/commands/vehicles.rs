use std::time::Instant;

use fleetscope_core::service::QueryService;

use crate::terminal::{print, spinner};

pub async fn run(service: &QueryService, client: &str) -> anyhow::Result<()> {
    let spinner = spinner::start("Joining vehicle records and weighings...");
    let started = Instant::now();
    let result = service.vehicle_rows(client).await;
    spinner.finish_and_clear();

    let rows = result?;
    if rows.is_empty() {
        print::no_results();
        return Ok(());
    }

    for (idx, row) in rows.iter().enumerate() {
        print::tree_head(idx, &row.vin);
        print::as_tree_one_level(vec![
            ("Mileage".to_string(), print::resolved_value(&row.mileage)),
            (
                "Largest weight".to_string(),
                print::resolved_value(&row.largest_weight),
            ),
        ]);
        if idx + 1 != rows.len() {
            println!();
        }
    }

    print::summary_line(rows.len(), "vehicles", started.elapsed());
    Ok(())
}
