use criterion::{criterion_group, criterion_main, Criterion};
use locpage_core::host::parse;
use locpage_core::prelude::*;
use std::hint::black_box;
use std::path::PathBuf;
use std::sync::Arc;

const TEXT: &str = "{Fast|Quick|Rapid} [service] in [City], [State]. \
                    {Call|Ring} [Phone No.] {today|now}. Serving [Zip Codes].";

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn bench_substitute(c: &mut Criterion) {
    let engine = TemplateEngine::new();
    let zips = vec!["78701".to_string(), "78702".to_string()];
    let ctx = TemplateContext {
        service_name: "Plumbing",
        city_name: "Austin",
        state_abbr: "TX",
        state_full_name: "Texas",
        zip_codes: &zips,
        ..TemplateContext::default()
    };
    c.bench_function("substitute", |b| {
        b.iter(|| engine.substitute(black_box(TEXT), &ctx))
    });
}

fn bench_parse_host(c: &mut Criterion) {
    c.bench_function("parse_host", |b| {
        b.iter(|| parse(black_box("plumbing-san-antonio-tx.example.com")))
    });
}

fn bench_render_city(c: &mut Criterion) {
    let index = LocationIndex::load(fixtures().join("locations.json")).expect("fixture index");
    let resolver = PageResolver::new(Arc::new(index), TemplateEngine::new(), EngineConfig::default());
    let source = DirectorySource::new(fixtures().join("tenants"));
    let content = load_tenant(&source, "example.com");
    let request = PageRequest::new("waterdamage-austin-tx.example.com", "/");
    c.bench_function("resolve_city_page", |b| {
        b.iter(|| resolver.resolve(black_box(&request), &content))
    });
}

criterion_group!(benches, bench_substitute, bench_parse_host, bench_render_city);
criterion_main!(benches);
