//! Data model for documentation metadata — read-only input to the emitter.
//!
//! Mirrors the atomdoc metadata layout: a `classes` table keyed by class
//! name, each class carrying its properties and methods. Every optional
//! field accepts both a missing key and an explicit `null`.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Complete metadata tree. Insertion order of `classes` is emission order.
#[derive(Debug, Default, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "nullable")]
    pub classes: IndexMap<String, ClassInfo>,
}

/// A single documented class.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    /// Falls back to the table key when empty
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Source file the class was documented in
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub super_class: Option<String>,
    /// Static properties
    #[serde(default, deserialize_with = "nullable")]
    pub class_properties: Vec<Property>,
    #[serde(default, deserialize_with = "nullable")]
    pub instance_properties: Vec<Property>,
    /// Static methods
    #[serde(default, deserialize_with = "nullable")]
    pub class_methods: Vec<Method>,
    #[serde(default, deserialize_with = "nullable")]
    pub instance_methods: Vec<Method>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Free text, may embed a brace-delimited type token like `{Number}`
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub arguments: Vec<Argument>,
    #[serde(default, deserialize_with = "nullable")]
    pub return_values: Vec<ReturnValue>,
}

/// Parsed `@param`-style entry.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub name: String,
    /// Raw documentation type token, e.g. `Number` or `Function`
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub is_optional: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ReturnValue {
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ClassInfo {
    /// Name to declare the class under: its own name, or the table key.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        if self.name.is_empty() {
            key
        } else {
            &self.name
        }
    }
}

/// Treat an explicit `null` the same as a missing key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nulls_degrade_to_defaults() {
        let json = r#"{
            "classes": {
                "Foo": {
                    "name": "Foo",
                    "description": null,
                    "superClass": null,
                    "classProperties": null,
                    "instanceMethods": [
                        { "name": "bar", "arguments": null, "returnValues": null }
                    ]
                }
            }
        }"#;
        let meta: Metadata = serde_json::from_str(json).unwrap();
        let foo = &meta.classes["Foo"];
        assert!(foo.description.is_none());
        assert!(foo.class_properties.is_empty());
        assert!(foo.instance_properties.is_empty());
        assert!(foo.instance_methods[0].arguments.is_empty());
        assert!(foo.instance_methods[0].return_values.is_empty());
    }

    #[test]
    fn argument_keys_are_camel_case() {
        let json = r#"{ "name": "cb", "type": "Function", "isOptional": true, "description": "called" }"#;
        let arg: Argument = serde_json::from_str(json).unwrap();
        assert_eq!(arg.type_name.as_deref(), Some("Function"));
        assert!(arg.is_optional);
    }

    #[test]
    fn class_order_follows_input() {
        let json = r#"{ "classes": { "Zeta": {}, "Alpha": {}, "Mid": {} } }"#;
        let meta: Metadata = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = meta.classes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn empty_name_falls_back_to_key() {
        let class = ClassInfo::default();
        assert_eq!(class.display_name("Foo"), "Foo");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let json = r#"{ "name": "Foo", "srcUrl": "https://x", "sections": [] }"#;
        let class: ClassInfo = serde_json::from_str(json).unwrap();
        assert_eq!(class.name, "Foo");
    }
}
