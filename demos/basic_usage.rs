//! Basic usage example for locpage-rs
//!
//! This example demonstrates how to:
//! - Load the location index
//! - Parse service/city/state hosts
//! - Render page view-models for a tenant

use locpage_rs::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== locpage-rs Basic Usage Example ===\n");

    // Load the index from the bundled sample data
    println!("Loading location index...");
    let index = LocationIndex::load("data/locations.json")?;
    let stats = index.stats();
    println!(
        "✓ Loaded {} states, {} cities, {} zip codes\n",
        stats.states, stats.cities, stats.zip_codes
    );

    // Example 1: Parse a host
    println!("--- Example 1: Parse a host ---");
    let triple = parse("waterdamage-san-antonio-tx.example.com");
    println!("{triple:?}");
    println!("{:?}\n", classify("tx.example.com"));

    // Example 2: Render a city page
    println!("--- Example 2: Render a city page ---");
    let resolver = PageResolver::new(Arc::new(index), TemplateEngine::new(), EngineConfig::default());
    let source = DirectorySource::new("data/tenants");
    let view = resolver.render(
        &source,
        &PageRequest::new("waterdamage-san-antonio-tx.example.com", "/"),
    );
    if let PageViewModel::City(page) = &view {
        println!("Title: {}", page.title);
        println!("Description: {}", page.description);
        for (key, block) in &page.blocks {
            println!("  {key}: {block}");
        }
        println!("Nearby:");
        for link in &page.nearby_cities {
            println!("  - {} -> {}", link.name, link.link);
        }
    }
    println!();

    // Example 3: Every page of one host
    println!("--- Example 3: Titles of all pages on one host ---");
    for path in ["/", "/about", "/contact", "/services", "/water-damage"] {
        let view = resolver.render(
            &source,
            &PageRequest::new("waterdamage-austin-tx.example.com", path),
        );
        println!("{path:<14} {}", view.title().unwrap_or("<not found>"));
    }
    println!();

    // Example 4: The JSON handed to a renderer
    println!("--- Example 4: View-model as JSON ---");
    let view = resolver.render(&source, &PageRequest::new("tx.example.com", "/"));
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
