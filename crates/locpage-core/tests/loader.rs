use locpage_core::prelude::*;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

fn fixture_json() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/locations.json");
    fs::read_to_string(path).expect("fixture")
}

#[test]
fn loads_plain_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locations.json");
    fs::write(&path, fixture_json()).unwrap();

    let index = LocationIndex::load(&path).unwrap();
    let stats = index.stats();
    assert_eq!(stats.states, 3);
    assert_eq!(stats.cities, 8);
    assert_eq!(stats.neighborhoods, 3);
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzipped_json() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locations.json.gz");
    let mut enc = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    enc.write_all(fixture_json().as_bytes()).unwrap();
    enc.finish().unwrap();

    let index = LocationIndex::load(&path).unwrap();
    assert_eq!(index.state_name("tx"), Some("Texas"));
}

#[cfg(feature = "binary")]
#[test]
fn snapshot_is_written_and_reused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locations.json");
    fs::write(&path, fixture_json()).unwrap();

    let first = LocationIndex::load_cached(&path).unwrap();
    let bin = dir.path().join("locations.json.bin");
    assert!(bin.exists());

    // The snapshot wins over a source that no longer parses.
    fs::write(&path, "not json").unwrap();
    let second = LocationIndex::load_cached(&path).unwrap();
    assert_eq!(first.stats(), second.stats());

    let direct = LocationIndex::load(&bin).unwrap();
    assert_eq!(direct.cities_in_state("tx"), first.cities_in_state("tx"));
}

#[test]
fn unreadable_sources_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(LocationIndex::load(dir.path().join("missing.json")).is_err());

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ nope").unwrap();
    assert!(matches!(LocationIndex::load(&bad), Err(PageError::Json(_))));
}

#[test]
fn directory_source_reads_documents_and_rejects_traversal() {
    let dir = tempfile::tempdir().unwrap();
    let tenant = dir.path().join("acme.com");
    fs::create_dir_all(&tenant).unwrap();
    fs::write(
        tenant.join("required.json"),
        json!({"Company Name": "Acme"}).to_string(),
    )
    .unwrap();
    fs::write(tenant.join("services.json"), "[{\"name\": \"Plumbing\"}]").unwrap();

    let source = DirectorySource::new(dir.path());
    let content = load_tenant(&source, "acme.com");
    assert_eq!(content.required.company_name(), Some("Acme"));
    assert_eq!(content.services[0].slug, "plumbing");
    assert!(content.main_content.texts.is_empty());

    assert!(source.fetch("../acme.com", DocumentKind::Required).is_err());
}

#[test]
fn engine_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, r#"{"nearby_city_limit": 3, "scheme": "http"}"#).unwrap();

    let config = EngineConfig::load_from_path(&path).unwrap();
    assert_eq!(config.nearby_city_limit, 3);
    assert_eq!(config.scheme, "http");
    assert_eq!(config.faq_limit, 5);
}
