//! Integration tests for scrub-core.

use pretty_assertions::assert_eq;
use scrub_core::{
    domain::{StorageClearOptions, shortcuts},
    prelude::*,
};
use serde_json::json;

fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn user() -> Record {
    value(json!({
        "id": 42,
        "name": "John Doe",
        "email": "john@example.com",
        "password": "hunter2",
        "bio": "",
        "tags": [],
        "avatar": null,
        "exampleField": "remove me",
        "demoMode": true,
        "settings": {
            "theme": "dark",
            "sampleLayout": "grid",
            "notifications": { "placeholderText": "x", "email": null }
        },
        "createdAt": "2024-01-01"
    }))
    .into_object()
    .unwrap()
}

#[test]
fn templates_strip_progressively_less() {
    let input = Value::Object(user());

    let blank = create_template(&input, TemplateType::Blank);
    assert_eq!(
        blank,
        value(json!({
            "id": 42,
            "name": "John Doe",
            "email": "john@example.com",
            "password": "hunter2",
            "settings": { "theme": "dark" },
            "createdAt": "2024-01-01"
        }))
    );

    let minimal = create_template(&input, TemplateType::Minimal);
    let minimal = minimal.as_object().unwrap();
    assert!(minimal.contains_key("avatar"));
    assert!(!minimal.contains_key("bio"));
    assert!(!minimal.contains_key("demoMode"));

    assert_eq!(create_template(&input, TemplateType::Full), input);
}

#[test]
fn workflows_prepare_for_their_audience() {
    let api = shortcuts::workflows::api_ready(&user());
    assert!(!api.contains_key("id"));
    assert!(!api.contains_key("createdAt"));
    assert!(api.contains_key("password"));

    let form = shortcuts::workflows::form_ready(&user());
    assert!(!form.contains_key("password"));
    assert!(form.contains_key("avatar"));
    assert!(form.contains_key("bio"));

    let report = shortcuts::workflows::debug(&user());
    assert_eq!(report.original, user());
    assert_eq!(report.size, user().to_string().len());
    assert_eq!(report.keys.len(), user().len());
    assert!(!report.cleaned.contains_key("bio"));
}

#[test]
fn production_preset_removes_development_keys() {
    let input = value(json!({ "name": "app", "debug": true, "dev": {"port": 1}, "test": 1 }))
        .into_object()
        .unwrap();
    let cleaned = apply_preset(&input, Preset::Production);
    assert_eq!(Value::Object(cleaned), value(json!({ "name": "app" })));
}

#[test]
fn names_parse_from_strings() {
    assert_eq!("prod".parse::<Preset>().unwrap(), Preset::Production);
    assert_eq!("api_ready".parse::<Workflow>().unwrap(), Workflow::ApiReady);
    assert_eq!("FULL".parse::<TemplateType>().unwrap(), TemplateType::Full);
    assert!("staging".parse::<Preset>().is_err());
}

#[test]
fn options_deserialize_from_camel_case() {
    let options: CleaningOptions = value(json!({
        "removeNull": true,
        "keepOnlyFields": ["a", "b"],
        "removeFields": ["b"]
    }))
    .deserialize_into()
    .unwrap();

    let input = value(json!({ "a": 1, "b": 2, "c": null }))
        .into_object()
        .unwrap();
    assert_eq!(Value::Object(clean_object(&input, &options)), value(json!({ "a": 1 })));
}

#[test]
fn arrays_are_cleaned_element_wise_and_deduplicated() {
    let items = value(json!([
        { "name": "a", "demo": 1 },
        { "example": 1 },
        { "name": "a" },
        "text"
    ]))
    .into_array()
    .unwrap();

    let cleaned = clean_array(&items, &TemplateType::Blank.options().unwrap());
    assert_eq!(
        unique(&cleaned),
        value(json!([{ "name": "a" }, "text"])).into_array().unwrap()
    );
}

#[test]
fn storage_options_round_trip_through_json() {
    let options: StorageClearOptions = serde_json::from_value(json!({
        "cookies": true,
        "excludeKeys": ["theme"]
    }))
    .unwrap();
    assert!(options.local_storage);
    assert!(options.session_storage);
    assert!(options.cookies);
    assert!(options.is_excluded("theme"));
}
