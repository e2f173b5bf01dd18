mod commands;
mod terminal;

use std::sync::Arc;
use std::time::Duration;

use commands::{CommandLine, Commands, client, roster, vehicle, vehicles};
use fleetscope_common::config::QueryConfig;
use fleetscope_core::memory::InMemoryFleet;
use fleetscope_core::service::QueryService;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let config = QueryConfig {
        max_concurrency: commands.limit,
        fail_fast: commands.fail_fast,
        deadline: commands.deadline_ms.map(Duration::from_millis),
    };

    // The bundled demo store. Lookups carry simulated latency so the
    // fan-out actually has something to parallelize.
    let store = InMemoryFleet::sample_fleet()
        .with_latency(Duration::from_millis(commands.latency_ms))
        .with_jitter(Duration::from_millis(commands.latency_ms / 4));
    let service = QueryService::new(Arc::new(store), config);

    match commands.command {
        Commands::Clients => {
            print::header("client roster");
            roster::run(&service).await
        }
        Commands::Client { name } => {
            print::header("client summary");
            client::run(&service, &name).await
        }
        Commands::Vehicles { client } => {
            print::header("vehicle roster");
            vehicles::run(&service, &client).await
        }
        Commands::Vehicle { vin } => {
            print::header("vehicle detail");
            vehicle::run(&service, &vin).await
        }
    }
}
