pub mod client;
pub mod roster;
pub mod vehicle;
pub mod vehicles;

use clap::{Parser, Subcommand};
use fleetscope_common::config::DEFAULT_MAX_CONCURRENCY;

#[derive(Parser)]
#[command(name = "fleetscope")]
#[command(about = "Read-only fleet queries over clients, vehicles and weighings.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Maximum number of concurrently in-flight store lookups
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub limit: usize,

    /// Abort sibling lookups as soon as one fails
    #[arg(long, global = true)]
    pub fail_fast: bool,

    /// Per-query deadline in milliseconds; expired lookups surface as
    /// incomplete fields instead of hanging the query
    #[arg(long, global = true)]
    pub deadline_ms: Option<u64>,

    /// Simulated latency of a single store lookup, in milliseconds
    #[arg(long, global = true, default_value_t = 750)]
    pub latency_ms: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every client with its vehicle count
    #[command(alias = "cs")]
    Clients,
    /// Show one client and its vehicle count
    #[command(alias = "c")]
    Client { name: String },
    /// List a client's vehicles with odometer and largest weighed weight
    #[command(alias = "vs")]
    Vehicles { client: String },
    /// Show one vehicle with its owner's contact info and all weighings
    #[command(alias = "v")]
    Vehicle { vin: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
