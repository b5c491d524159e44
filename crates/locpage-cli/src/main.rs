//! locpage-cli: command-line interface for locpage-core
//!
//! Inspects the location index and renders page view-models without an
//! HTTP server in front.
//!
//! Usage examples
//! --------------
//!
//! - Show index stats
//!   $ locpage stats
//!
//! - List the cities of a state
//!   $ locpage cities TX
//!
//! - See how a host is split
//!   $ locpage parse-host plumbing-san-antonio-tx.example.com
//!
//! - Render a page (tenant documents under `--tenants/<apex>/`)
//!   $ locpage render plumbing-austin-tx.example.com /about
//!
//! Set `RUST_LOG=debug` to see loader and resolver diagnostics.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use locpage_core::{
    classify, parse, DirectorySource, EngineConfig, LocationIndex, PageRequest, PageResolver,
    TemplateEngine,
};
use log::info;
use std::sync::Arc;

fn load_index(path: &str) -> anyhow::Result<LocationIndex> {
    #[cfg(feature = "binary")]
    let index = if path.ends_with(".bin") {
        LocationIndex::load(path)
    } else {
        LocationIndex::load_cached(path)
    };
    #[cfg(not(feature = "binary"))]
    let index = LocationIndex::load(path);
    let index = index.with_context(|| format!("loading locations from {path}"))?;
    info!("location index ready: {:?}", index.stats());
    Ok(index)
}

fn load_config(path: Option<&str>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(path) => {
            EngineConfig::load_from_path(path).with_context(|| format!("reading config {path}"))
        }
        None => Ok(EngineConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    run(CliArgs::parse())
}

/// Dispatches one subcommand. Only the data commands load the index.
fn run(args: CliArgs) -> anyhow::Result<()> {
    match args.command {
        Commands::Stats => {
            let stats = load_index(&args.locations)?.stats();
            println!("Location index statistics:");
            println!("  States: {}", stats.states);
            println!("  Cities: {}", stats.cities);
            println!("  Zip codes: {}", stats.zip_codes);
            println!("  Neighborhoods: {}", stats.neighborhoods);
        }

        Commands::States => {
            for s in load_index(&args.locations)?.states() {
                println!("{} ({})", s.name, s.code);
            }
        }

        Commands::Cities { state } => {
            let index = load_index(&args.locations)?;
            match index.state_name(&state) {
                Some(name) => {
                    println!("Cities in {name}:");
                    for city in index.cities(&state) {
                        match &city.zip {
                            Some(zip) => println!("- {} {zip}", city.name),
                            None => println!("- {}", city.name),
                        }
                    }
                }
                None => eprintln!("State {state} not found"),
            }
        }

        Commands::Zips { city } => {
            let index = load_index(&args.locations)?;
            let zips = index.zip_codes_for_city(&city);
            if zips.is_empty() {
                println!("No zip codes found for: {city}");
            } else {
                println!("Zip codes: {}", zips.join(", "));
            }
            let hoods = index.neighborhoods(&city);
            if !hoods.is_empty() {
                println!("Neighborhoods: {}", hoods.join(", "));
            }
        }

        Commands::ParseHost { host } => {
            println!("{}", serde_json::to_string_pretty(&parse(&host))?);
            println!("kind: {:?}", classify(&host));
        }

        Commands::Render { host, path } => {
            let config = load_config(args.config.as_deref())?;
            let index = load_index(&args.locations)?;
            let resolver = PageResolver::new(Arc::new(index), TemplateEngine::new(), config);
            let source = DirectorySource::new(&args.tenants);
            let view = resolver.render(&source, &PageRequest::new(host, path));
            println!("{}", serde_json::to_string_pretty(&view)?);
        }

        Commands::Snapshot { output } => {
            #[cfg(feature = "binary")]
            {
                load_index(&args.locations)?
                    .save_snapshot(&output)
                    .with_context(|| format!("writing snapshot {output}"))?;
                println!("Snapshot written to {output}");
            }
            #[cfg(not(feature = "binary"))]
            anyhow::bail!("cannot write {output}: built without the `binary` feature");
        }
    }

    Ok(())
}
