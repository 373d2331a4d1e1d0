//! The recursive record cleaner and the template/preset builders on top of it.
//!
//! Per key, in strict precedence order:
//!
//! 1. deny-list (`remove_fields`)
//! 2. allow-list (`keep_only_fields`)
//! 3. example prefix (`remove_examples`)
//! 4. `null` (`remove_null`)
//! 5. undefined (`remove_undefined`)
//! 6. `""` / `[]` (`remove_empty`)
//! 7. nested object: clean recursively, drop the key if nothing survives
//! 8. keep verbatim (arrays are never cleaned inside)

use tracing::trace;

use crate::domain::{
    options::{CleaningOptions, Preset, TemplateType, Workflow, is_example_key},
    value::{Record, Value},
};

/// Why a key was dropped. Only used for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropReason {
    Denied,
    NotAllowed,
    Example,
    Null,
    Undefined,
    Empty,
    EmptyNested,
}

fn drop_reason(key: &str, value: &Value, options: &CleaningOptions) -> Option<DropReason> {
    if options.remove_fields.contains(key) {
        return Some(DropReason::Denied);
    }
    if options
        .keep_only_fields
        .as_ref()
        .is_some_and(|allowed| !allowed.contains(key))
    {
        return Some(DropReason::NotAllowed);
    }
    if options.remove_examples && is_example_key(key) {
        return Some(DropReason::Example);
    }
    if options.remove_null && value.is_null() {
        return Some(DropReason::Null);
    }
    if options.remove_undefined && value.is_undefined() {
        return Some(DropReason::Undefined);
    }
    if options.remove_empty && value.is_empty_text_or_array() {
        return Some(DropReason::Empty);
    }
    None
}

/// Clean a record, returning a new filtered copy in the original key order.
pub fn clean_object(record: &Record, options: &CleaningOptions) -> Record {
    let mut cleaned = Record::with_capacity(record.len());

    for (key, value) in record.iter() {
        if let Some(reason) = drop_reason(key, value, options) {
            trace!(key, ?reason, "dropped");
            continue;
        }

        match value {
            Value::Object(nested) => {
                let nested = clean_object(nested, options);
                if nested.is_empty() {
                    trace!(key, reason = ?DropReason::EmptyNested, "dropped");
                } else {
                    cleaned.insert(key, nested);
                }
            }
            other => {
                cleaned.insert(key, other.clone());
            }
        }
    }

    cleaned
}

/// Clean any value. Non-object input is returned unchanged.
pub fn clean_value(value: &Value, options: &CleaningOptions) -> Value {
    match value {
        Value::Object(record) => Value::Object(clean_object(record, options)),
        other => other.clone(),
    }
}

/// Clean each object element and drop those that end up empty.
///
/// Non-object elements pass through unchanged. Output order follows input
/// order and the output is never longer than the input.
pub fn clean_array(items: &[Value], options: &CleaningOptions) -> Vec<Value> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(record) => {
                let cleaned = clean_object(record, options);
                (!cleaned.is_empty()).then_some(Value::Object(cleaned))
            }
            other => Some(other.clone()),
        })
        .collect()
}

/// Remove duplicates by compact JSON text; the first occurrence wins.
///
/// Equality is key-order sensitive: `{"a":1,"b":2}` and `{"b":2,"a":1}` are
/// distinct.
pub fn unique(items: &[Value]) -> Vec<Value> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(item.canonical_json()))
        .cloned()
        .collect()
}

/// Flatten one level of nested arrays.
pub fn flatten(items: &[Value]) -> Vec<Value> {
    let mut flat = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Array(inner) => flat.extend(inner.iter().cloned()),
            other => flat.push(other.clone()),
        }
    }
    flat
}

/// Build a template of the given type.
///
/// Non-object input, and the `example`/`full` types, yield an unchanged copy.
pub fn create_template(value: &Value, template: TemplateType) -> Value {
    match template.options() {
        Some(options) => clean_value(value, &options),
        None => value.clone(),
    }
}

/// Apply an environment preset.
pub fn apply_preset(record: &Record, preset: Preset) -> Record {
    clean_object(record, &preset.options())
}

/// Apply the option bundle of a workflow.
pub fn apply_workflow(record: &Record, workflow: Workflow) -> Record {
    clean_object(record, &workflow.options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        Value::from(value).into_object().unwrap()
    }

    // ── scenarios ────────────────────────────────────────────────────────

    #[test]
    fn removes_examples_and_empty_strings() {
        let input = record(json!({"id": 1, "name": "x", "exampleField": "y", "empty": ""}));
        let opts = CleaningOptions::new()
            .remove_empty(true)
            .remove_examples(true);
        assert_eq!(clean_object(&input, &opts), record(json!({"id": 1, "name": "x"})));
    }

    #[test]
    fn nested_record_emptied_by_null_removal_is_pruned() {
        let input = record(json!({"a": {"b": null}}));
        let opts = CleaningOptions::new().remove_null(true);
        assert!(clean_object(&input, &opts).is_empty());
    }

    #[test]
    fn blank_template_drops_demo_key() {
        let input = Value::from(json!({"x": 1, "demo": 2}));
        assert_eq!(
            create_template(&input, TemplateType::Blank),
            Value::from(json!({"x": 1}))
        );
    }

    #[test]
    fn example_template_is_unchanged() {
        let input = Value::from(json!({"x": 1, "demo": 2}));
        assert_eq!(create_template(&input, TemplateType::Example), input);
        assert_eq!(create_template(&input, TemplateType::Full), input);
    }

    #[test]
    fn clean_array_drops_records_that_empty_out() {
        let items = vec![Value::from(json!({"a": 1})), Value::from(json!({"example": 1}))];
        let opts = CleaningOptions::new().remove_examples(true);
        assert_eq!(clean_array(&items, &opts), vec![Value::from(json!({"a": 1}))]);
    }

    #[test]
    fn unique_keeps_first_occurrence() {
        let items = vec![
            Value::from(json!({"a": 1})),
            Value::from(json!({"a": 1})),
            Value::from(json!({"b": 2})),
        ];
        assert_eq!(
            unique(&items),
            vec![Value::from(json!({"a": 1})), Value::from(json!({"b": 2}))]
        );
    }

    // ── precedence ───────────────────────────────────────────────────────

    #[test]
    fn deny_list_beats_allow_list() {
        let input = record(json!({"a": 1, "b": 2}));
        let opts = CleaningOptions::new()
            .keep_only(["a", "b"])
            .remove_fields(["a"]);
        assert_eq!(clean_object(&input, &opts), record(json!({"b": 2})));
    }

    #[test]
    fn allow_list_applies_at_every_level() {
        let input = record(json!({"user": {"name": "x", "age": 3}, "other": 1}));
        let opts = CleaningOptions::new().keep_only(["user", "name"]);
        assert_eq!(
            clean_object(&input, &opts),
            record(json!({"user": {"name": "x"}}))
        );
    }

    #[test]
    fn undefined_only_removed_when_requested() {
        let input = Record::new().with("a", Value::Undefined).with("b", 1_i64);
        let kept = clean_object(&input, &CleaningOptions::new().remove_null(true));
        assert!(kept.get("a").is_some_and(Value::is_undefined));

        let dropped = clean_object(&input, &CleaningOptions::new().remove_undefined(true));
        assert_eq!(dropped.keys().collect::<Vec<_>>(), ["b"]);
    }

    #[test]
    fn arrays_pass_through_verbatim() {
        let input = record(json!({"a": [{"example": 1}], "b": [""]}));
        let opts = CleaningOptions::new()
            .remove_examples(true)
            .remove_empty(true);
        assert_eq!(clean_object(&input, &opts), input);
    }

    #[test]
    fn empty_nested_input_is_dropped_even_without_options() {
        let input = record(json!({"a": {}, "b": 1}));
        assert_eq!(
            clean_object(&input, &CleaningOptions::default()),
            record(json!({"b": 1}))
        );
    }

    #[test]
    fn zero_and_false_are_not_empty() {
        let input = record(json!({"n": 0, "f": false}));
        let opts = CleaningOptions::new().strip_blanks();
        assert_eq!(clean_object(&input, &opts), input);
    }

    #[test]
    fn key_order_is_preserved() {
        let input = record(json!({"z": 1, "drop": null, "a": 2, "m": {"y": 1, "x": 2}}));
        let cleaned = clean_object(&input, &CleaningOptions::new().remove_null(true));
        assert_eq!(cleaned.to_string(), r#"{"z":1,"a":2,"m":{"y":1,"x":2}}"#);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = record(json!({"a": null}));
        let snapshot = input.clone();
        let _ = clean_object(&input, &CleaningOptions::new().remove_null(true));
        assert_eq!(input, snapshot);
    }

    // ── non-object input ─────────────────────────────────────────────────

    #[test]
    fn primitives_pass_through() {
        let opts = CleaningOptions::new().strip_blanks().remove_examples(true);
        for value in [
            Value::Null,
            Value::from("text"),
            Value::from(3_i64),
            Value::Array(vec![Value::Null]),
        ] {
            assert_eq!(clean_value(&value, &opts), value);
            assert_eq!(create_template(&value, TemplateType::Blank), value);
        }
    }

    #[test]
    fn clean_array_passes_primitives_through() {
        let items = vec![Value::from(1_i64), Value::from(json!({}))];
        assert_eq!(
            clean_array(&items, &CleaningOptions::default()),
            vec![Value::from(1_i64)]
        );
    }

    // ── presets & workflows ──────────────────────────────────────────────

    #[test]
    fn production_preset_strips_debug_info() {
        let input = record(json!({
            "data": {"users": [], "debug": "x", "exampleData": "y", "totalCount": 2},
            "success": true,
            "demoField": null
        }));
        assert_eq!(
            apply_preset(&input, Preset::Production),
            record(json!({"data": {"totalCount": 2}, "success": true}))
        );
    }

    #[test]
    fn development_preset_is_identity() {
        let input = record(json!({"a": null, "exampleB": "", "c": []}));
        assert_eq!(apply_preset(&input, Preset::Development), input);
    }

    #[test]
    fn minimal_template_keeps_nulls() {
        let input = Value::from(json!({"a": null, "b": "", "demo": 1}));
        assert_eq!(
            create_template(&input, TemplateType::Minimal),
            Value::from(json!({"a": null}))
        );
    }

    #[test]
    fn form_ready_drops_credentials() {
        let input = record(json!({"user": "x", "password": "p", "token": "t", "note": null}));
        assert_eq!(
            apply_workflow(&input, Workflow::FormReady),
            record(json!({"user": "x", "note": null}))
        );
    }

    #[test]
    fn flatten_is_one_level() {
        let items = vec![
            Value::from(1_i64),
            Value::from(json!([2, [3]])),
        ];
        assert_eq!(
            flatten(&items),
            vec![Value::from(1_i64), Value::from(2_i64), Value::from(json!([3]))]
        );
    }
}
