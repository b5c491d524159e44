use clap::{Parser, Subcommand};

/// CLI arguments for locpage-cli
#[derive(Debug, Parser)]
#[command(
    name = "locpage",
    version,
    about = "CLI for inspecting location data and rendering page view-models"
)]
pub struct CliArgs {
    /// Location source: JSON, JSON.gz or a .bin snapshot
    #[arg(short = 'l', long = "locations", global = true, default_value = "data/locations.json")]
    pub locations: String,

    /// Directory holding one sub-directory of content documents per tenant
    #[arg(short = 't', long = "tenants", global = true, default_value = "data/tenants")]
    pub tenants: String,

    /// Optional engine config (JSON)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the location index
    Stats,

    /// List all states
    States,

    /// List the cities of a state
    Cities {
        /// State code (e.g. TX)
        state: String,
    },

    /// Show zip codes and neighborhoods of a city
    Zips {
        /// City name (e.g. "San Antonio")
        city: String,
    },

    /// Parse a host into (service, city, state)
    ParseHost {
        /// Host header (e.g. plumbing-austin-tx.example.com)
        host: String,
    },

    /// Resolve a request and print the page view-model as JSON
    Render {
        /// Host header
        host: String,
        /// Request path
        #[arg(default_value = "/")]
        path: String,
    },

    /// Write a bincode snapshot of the location index
    Snapshot {
        /// Output file (e.g. data/locations.bin)
        output: String,
    },
}
