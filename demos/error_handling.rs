//! Error handling example for locpage-rs
//!
//! This example demonstrates how load errors surface and how unresolvable
//! requests degrade to a not-found page instead of failing.

use locpage_rs::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== locpage-rs Error Handling Example ===\n");

    // Example 1: Loading a missing source is an error
    println!("--- Example 1: Loading a missing location source ---");
    match LocationIndex::load("data/does-not-exist.json") {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(e) => println!("✗ Failed to load: {e}"),
    }
    println!();

    let index = LocationIndex::load("data/locations.json")?;
    let resolver = PageResolver::new(Arc::new(index), TemplateEngine::new(), EngineConfig::default());
    let source = DirectorySource::new("data/tenants");

    // Example 2: Hosts that do not resolve
    println!("--- Example 2: Unresolvable hosts ---");
    let hosts = [
        "zz.example.com",
        "austin-tx.example.com",
        "waterdamage-lubbock-tx.example.com",
        "-tx.example.com",
    ];
    for host in hosts {
        let content = load_tenant(&source, "example.com");
        match resolver.resolve(&PageRequest::new(host, "/"), &content) {
            Ok(view) => println!("  {host}: {:?}", view.title()),
            Err(e) if e.is_not_found() => println!("  {host}: not found ({e})"),
            Err(e) => return Err(e),
        }
    }
    println!();

    // Example 3: render() never fails
    println!("--- Example 3: render() falls back to the not-found page ---");
    let view = resolver.render(&source, &PageRequest::new("waterdamage-austin-tx.example.com", "/nope"));
    println!("  not found: {}", view.is_not_found());
    println!();

    // Example 4: A tenant without documents still renders
    println!("--- Example 4: Unknown tenant ---");
    let view = resolver.render(&source, &PageRequest::new("plumbing-austin-tx.unknown.com", "/"));
    println!("  title: {:?}", view.title());

    Ok(())
}
