//! Property and method signatures.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use tracing::trace;

use super::comment::DocComment;
use super::group::{group_arguments, render_params};
use super::types::{map_type, Position};
use super::{Emitter, Modifier, CONSTRUCTOR};
use crate::model::{Method, Property, ReturnValue};

/// First brace-delimited token in a property summary, e.g. `{Number}`.
static RE_SUMMARY_TYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{(.*?)\}").unwrap());

const INDENT: &str = "\t";

impl Emitter {
    pub(super) fn emit_property(&mut self, property: &Property, modifier: Modifier) {
        let mut doc = DocComment::new();
        if let Some(desc) = property.description.as_deref().filter(|d| !d.is_empty()) {
            doc.text(desc);
        }
        doc.write_to(&mut self.output, INDENT);

        let token = property.summary.as_deref().and_then(summary_type);
        self.output.push_str(&format!(
            "{}{}{}: {};\n",
            INDENT,
            modifier.prefix(),
            property.name,
            map_type(token, Position::Other)
        ));
    }

    pub(super) fn emit_method(&mut self, method: &Method, modifier: Modifier) {
        let mut doc = DocComment::new();
        if let Some(desc) = method.description.as_deref().filter(|d| !d.is_empty()) {
            doc.text(desc);
        }
        for arg in &method.arguments {
            doc.text(&tag_line(
                "@param",
                arg.type_name.as_deref(),
                arg.description.as_deref(),
            ));
        }
        for ret in &method.return_values {
            doc.text(&tag_line(
                "@returns",
                ret.type_name.as_deref(),
                ret.description.as_deref(),
            ));
        }
        doc.write_to(&mut self.output, INDENT);

        let params = group_arguments(&method.arguments);
        if params.len() < method.arguments.len() {
            trace!(
                method = %method.name,
                before = method.arguments.len(),
                after = params.len(),
                "folded arguments"
            );
        }

        self.output.push_str(INDENT);
        self.output.push_str(modifier.prefix());
        self.output.push_str(&method.name);
        self.output.push('(');
        self.output.push_str(&render_params(&params));

        if method.name == CONSTRUCTOR {
            self.output.push_str(");\n");
            return;
        }
        self.output.push_str("): ");
        self.output.push_str(&return_type(&method.return_values));
        self.output.push_str(";\n");
    }
}

/// Extract the type token from the first `{...}` group of a summary.
fn summary_type(summary: &str) -> Option<&str> {
    RE_SUMMARY_TYPE
        .captures(summary)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// `@param {type} description`, with the braces omitted for untyped entries.
fn tag_line(tag: &str, type_name: Option<&str>, description: Option<&str>) -> String {
    let mut line = tag.to_string();
    if let Some(ty) = type_name.filter(|t| !t.is_empty()) {
        line.push_str(&format!(" {{{}}}", map_type(Some(ty), Position::Other)));
    }
    if let Some(desc) = description.filter(|d| !d.is_empty()) {
        line.push(' ');
        line.push_str(desc);
    }
    line
}

/// Union of the distinct mapped return types.
///
/// No return values means `void`; return values that are all untyped mean
/// `any`. Untyped entries never contribute to a non-empty union.
fn return_type(returns: &[ReturnValue]) -> String {
    if returns.is_empty() {
        return "void".to_string();
    }

    let types: IndexSet<&str> = returns
        .iter()
        .filter_map(|ret| ret.type_name.as_deref())
        .filter(|ty| !ty.is_empty())
        .map(|ty| map_type(Some(ty), Position::Other))
        .collect();

    if types.is_empty() {
        return "any".to_string();
    }
    types.into_iter().collect::<Vec<_>>().join(" | ")
}
