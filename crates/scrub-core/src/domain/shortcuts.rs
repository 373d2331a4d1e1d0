//! Shortcut families over the cleaner.
//!
//! ```rust
//! use scrub_core::domain::{Value, shortcuts};
//! use serde_json::json;
//!
//! let data = Value::from(json!({"name": "x", "demoContent": "y", "bio": ""}));
//! assert_eq!(shortcuts::clean(&data), Value::from(json!({"name": "x"})));
//! ```

pub use quick::blank as clean;

/// Template- and environment-oriented one-liners.
pub mod quick {
    use crate::domain::cleaner::{apply_preset, clean_object, create_template};
    use crate::domain::options::{CleaningOptions, Preset, TemplateType};
    use crate::domain::value::{Record, Value};

    /// Remove examples, blanks and example-named fields.
    pub fn blank(data: &Value) -> Value {
        create_template(data, TemplateType::Blank)
    }

    /// Remove examples and empty values, keep nulls.
    pub fn minimal(data: &Value) -> Value {
        create_template(data, TemplateType::Minimal)
    }

    /// Unchanged copy.
    pub fn example(data: &Value) -> Value {
        create_template(data, TemplateType::Example)
    }

    pub fn prod(data: &Record) -> Record {
        apply_preset(data, Preset::Production)
    }

    /// Drop empty and undefined values; nulls and examples stay for debugging.
    pub fn dev(data: &Record) -> Record {
        clean_object(
            data,
            &CleaningOptions::new()
                .remove_empty(true)
                .remove_undefined(true),
        )
    }

    pub fn test(data: &Record) -> Record {
        apply_preset(data, Preset::Testing)
    }
}

/// Field-level filters.
pub mod fields {
    use crate::domain::cleaner::clean_object;
    use crate::domain::options::CleaningOptions;
    use crate::domain::value::Record;

    pub fn no_examples(data: &Record) -> Record {
        clean_object(data, &CleaningOptions::new().remove_examples(true))
    }

    pub fn no_empty(data: &Record) -> Record {
        clean_object(data, &CleaningOptions::new().remove_empty(true))
    }

    pub fn no_nulls(data: &Record) -> Record {
        clean_object(
            data,
            &CleaningOptions::new()
                .remove_null(true)
                .remove_undefined(true),
        )
    }

    pub fn only<I, S>(data: &Record, fields: I) -> Record
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        clean_object(data, &CleaningOptions::new().keep_only(fields))
    }

    pub fn without<I, S>(data: &Record, fields: I) -> Record
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        clean_object(data, &CleaningOptions::new().remove_fields(fields))
    }
}

/// Sequence helpers.
pub mod arrays {
    use crate::domain::cleaner;
    use crate::domain::options::CleaningOptions;
    use crate::domain::value::Value;

    pub fn clean(items: &[Value], options: &CleaningOptions) -> Vec<Value> {
        cleaner::clean_array(items, options)
    }

    pub fn unique(items: &[Value]) -> Vec<Value> {
        cleaner::unique(items)
    }

    pub fn flatten(items: &[Value]) -> Vec<Value> {
        cleaner::flatten(items)
    }
}

/// End-to-end preparations.
pub mod workflows {
    use serde::Serialize;

    use crate::domain::cleaner::apply_workflow;
    use crate::domain::options::Workflow;
    use crate::domain::value::{Record, Value};

    /// Side-by-side view of a record before and after empty-value removal.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct DebugReport {
        pub original: Record,
        pub cleaned: Record,
        /// Top-level key names of `original`.
        pub keys: Vec<String>,
        /// Length of `original` as compact JSON text, in UTF-16 code units.
        pub size: usize,
    }

    impl DebugReport {
        pub fn new(data: &Record) -> Self {
            Self {
                original: data.clone(),
                cleaned: apply_workflow(data, Workflow::Debug),
                keys: data.keys().map(str::to_owned).collect(),
                size: data.to_string().encode_utf16().count(),
            }
        }

        /// Re-express the report in the value model.
        pub fn into_value(self) -> Value {
            Record::new()
                .with("original", self.original)
                .with("cleaned", self.cleaned)
                .with(
                    "keys",
                    Value::Array(self.keys.into_iter().map(Value::from).collect()),
                )
                .with("size", self.size as u64)
                .into()
        }
    }

    pub fn api_ready(data: &Record) -> Record {
        apply_workflow(data, Workflow::ApiReady)
    }

    pub fn form_ready(data: &Record) -> Record {
        apply_workflow(data, Workflow::FormReady)
    }

    pub fn debug(data: &Record) -> DebugReport {
        DebugReport::new(data)
    }
}

/// Template constructors by name.
pub mod template {
    use crate::domain::cleaner::create_template;
    use crate::domain::options::TemplateType;
    use crate::domain::value::Value;

    pub fn create(data: &Value, template: TemplateType) -> Value {
        create_template(data, template)
    }

    pub fn blank(data: &Value) -> Value {
        create_template(data, TemplateType::Blank)
    }

    pub fn minimal(data: &Value) -> Value {
        create_template(data, TemplateType::Minimal)
    }

    pub fn example(data: &Value) -> Value {
        create_template(data, TemplateType::Example)
    }

    pub fn full(data: &Value) -> Value {
        create_template(data, TemplateType::Full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::{CleaningOptions, TemplateType};
    use crate::domain::value::{Record, Value};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_user() -> Record {
        Value::from(json!({
            "id": "123",
            "name": "John Doe",
            "email": "john@example.com",
            "phone": "",
            "avatar": null,
            "exampleField": "This is example data",
            "demoContent": "Demo content here",
            "testValue": "test",
            "preferences": {
                "theme": "dark",
                "notifications": true,
                "sampleSetting": "sample",
                "emptyArray": []
            },
            "metadata": {
                "created": "2023-01-01",
                "updated": null,
                "version": "1.0.0",
                "exampleMetadata": "Should be removed"
            }
        }))
        .into_object()
        .unwrap()
    }

    #[test]
    fn quick_blank_on_user_profile() {
        let cleaned = quick::blank(&Value::Object(sample_user()));
        assert_eq!(
            cleaned,
            Value::from(json!({
                "id": "123",
                "name": "John Doe",
                "email": "john@example.com",
                "preferences": {"theme": "dark", "notifications": true},
                "metadata": {"created": "2023-01-01", "version": "1.0.0"}
            }))
        );
    }

    #[test]
    fn quick_dev_keeps_nulls_and_examples() {
        let cleaned = quick::dev(&sample_user());
        assert!(cleaned.get("avatar").is_some_and(Value::is_null));
        assert!(cleaned.contains_key("exampleField"));
        assert!(!cleaned.contains_key("phone"));
    }

    #[test]
    fn fields_only_and_without() {
        let user = sample_user();
        let only = fields::only(&user, ["id", "name"]);
        assert_eq!(only.keys().collect::<Vec<_>>(), ["id", "name"]);

        let without = fields::without(&user, ["preferences", "metadata"]);
        assert!(!without.contains_key("preferences"));
        assert_eq!(without.len(), user.len() - 2);
    }

    #[test]
    fn fields_no_nulls_prunes_nested() {
        let cleaned = fields::no_nulls(&sample_user());
        assert!(!cleaned.contains_key("avatar"));
        let metadata = cleaned.get("metadata").and_then(Value::as_object).unwrap();
        assert!(!metadata.contains_key("updated"));
    }

    #[test]
    fn api_ready_strips_server_fields() {
        let cleaned = workflows::api_ready(&sample_user());
        assert!(!cleaned.contains_key("id"));
        assert!(!cleaned.contains_key("avatar"));
        assert!(!cleaned.contains_key("exampleField"));
    }

    #[test]
    fn debug_report_describes_original() {
        let data = Value::from(json!({"a": "", "b": 1})).into_object().unwrap();
        let report = workflows::debug(&data);
        assert_eq!(report.keys, ["a", "b"]);
        assert_eq!(report.size, r#"{"a":"","b":1}"#.len());
        assert_eq!(report.cleaned.keys().collect::<Vec<_>>(), ["b"]);

        let value = report.into_value();
        assert_eq!(
            value.as_object().and_then(|r| r.get("size")),
            Some(&Value::from(14_u64))
        );
    }

    #[test]
    fn debug_size_counts_utf16_units() {
        let data = Value::from(json!({"name": "é", "icon": "😀"}))
            .into_object()
            .unwrap();
        // 2 units for the emoji, 1 for é, 21 for the ASCII around them.
        assert_eq!(workflows::debug(&data).size, 24);

        let single = Value::from(json!({"name": "é"})).into_object().unwrap();
        assert_eq!(workflows::debug(&single).size, 12);
    }

    #[test]
    fn arrays_family_delegates() {
        let items = vec![
            Value::from(json!({"a": 1, "demo": 2})),
            Value::from(json!({"a": 1})),
        ];
        let cleaned = arrays::clean(&items, &CleaningOptions::new().remove_examples(true));
        assert_eq!(arrays::unique(&cleaned).len(), 1);
        assert_eq!(arrays::flatten(&[Value::Array(items.clone())]), items);
    }

    #[test]
    fn template_family_matches_create() {
        let data = Value::Object(sample_user());
        assert_eq!(template::blank(&data), template::create(&data, TemplateType::Blank));
        assert_eq!(template::full(&data), data);
        assert_eq!(quick::example(&data), data);
        assert_eq!(
            quick::minimal(&data),
            template::create(&data, TemplateType::Minimal)
        );
    }
}
