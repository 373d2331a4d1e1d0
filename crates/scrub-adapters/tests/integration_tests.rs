//! Adapters wired into the core services.

use scrub_adapters::{LocalDocuments, MemoryDocuments, StorageSnapshot};
use scrub_core::{
    application::{CleanService, Operation},
    domain::{Preset, StorageClearOptions, TemplateType, Value},
};
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn json_to_toml_through_clean_service() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("config.json");
    let output = dir.path().join("config.toml");
    std::fs::write(
        &input,
        r#"{"name": "app", "debug": true, "exampleUrl": "http://x", "db": {"host": "", "port": 5432}}"#,
    )
    .unwrap();

    let service = CleanService::new(Box::new(LocalDocuments::new()));
    service
        .process_to(&input, &output, &Operation::Preset(Preset::Production), true)
        .unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("name = \"app\""));
    assert!(text.contains("port = 5432"));
    assert!(!text.contains("debug"));
    assert!(!text.contains("exampleUrl"));
    assert!(!text.contains("host"));
}

#[test]
fn memory_documents_back_the_service() {
    let docs = MemoryDocuments::new();
    docs.insert("in.json", Value::from(json!({"a": 1, "demo": {"b": 2}})))
        .unwrap();

    let service = CleanService::new(Box::new(docs.clone()));
    service
        .process_to(
            "in.json",
            "out.json",
            &Operation::Template(TemplateType::Blank),
            false,
        )
        .unwrap();

    assert_eq!(
        docs.get(Path::new("out.json")),
        Some(Value::from(json!({"a": 1})))
    );
}

#[test]
fn snapshot_file_is_cleared_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(
        &path,
        r#"{
            "localStorage": {"theme": "light", "language": "en", "cart": "[1,2]"},
            "sessionStorage": {"wizardStep": "3"},
            "cookies": "sid=xyz; theme=light"
        }"#,
    )
    .unwrap();

    let areas = StorageSnapshot::load(&path).unwrap().areas();
    let cleaner = areas.cleaner();
    let plan = cleaner.plan(&StorageClearOptions::safe_default()).unwrap();
    cleaner.clear(&StorageClearOptions::safe_default());
    assert_eq!(areas.removed(&plan).unwrap(), 2);
    areas.snapshot().unwrap().save(&path).unwrap();

    let after = StorageSnapshot::load(&path).unwrap();
    let local = after.local_storage.unwrap();
    assert_eq!(local.keys().collect::<Vec<_>>(), vec!["language", "theme"]);
    assert!(after.session_storage.unwrap().is_empty());
    assert_eq!(after.cookies.as_deref(), Some("sid=xyz; theme=light"));
    assert!(after.expired_cookies.is_empty());
}
