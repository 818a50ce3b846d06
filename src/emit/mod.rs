//! Declaration emitter — metadata tree to an ambient declaration module.
//!
//! Output is built top to bottom in a single buffer. Members are
//! tab-indented; final indentation is left to a [`crate::format::Formatter`].

mod class;
pub mod comment;
pub mod group;
mod member;
pub mod types;

use crate::model::Metadata;
use tracing::debug;

/// Name of the method that is emitted without a return annotation.
pub const CONSTRUCTOR: &str = "constructor";

/// Configuration for declaration emission.
#[derive(Clone, Debug)]
pub struct EmitConfig {
    /// Name of the `declare module` wrapper
    pub(crate) module_name: String,
    /// Superclass treated as implicit and never printed in `extends`
    pub(crate) implicit_base: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            module_name: "AtomTypes".to_string(),
            implicit_base: "Model".to_string(),
        }
    }
}

impl EmitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name of the wrapping ambient module.
    pub fn module_name(mut self, value: impl Into<String>) -> Self {
        self.module_name = value.into();
        self
    }

    /// Set the superclass that is omitted from `extends` clauses.
    pub fn implicit_base(mut self, value: impl Into<String>) -> Self {
        self.implicit_base = value.into();
        self
    }
}

/// Emits one ambient module for a whole metadata tree.
pub struct Emitter {
    config: EmitConfig,
    /// Output buffer
    output: String,
}

impl Emitter {
    pub fn new(config: EmitConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Emit the raw (unformatted) declaration document.
    pub fn emit(mut self, meta: &Metadata) -> String {
        self.output
            .push_str(&format!("declare module {} {{\n", self.config.module_name));

        for (i, (key, class)) in meta.classes.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            debug!(class = class.display_name(key), "emitting class");
            self.emit_class(key, class);
        }

        self.output.push_str("}\n");
        self.output
    }
}

/// Whether a member belongs to the class or to its instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modifier {
    Static,
    Instance,
}

impl Modifier {
    fn prefix(self) -> &'static str {
        match self {
            Modifier::Static => "static ",
            Modifier::Instance => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClassInfo;

    fn class(name: &str) -> ClassInfo {
        ClassInfo {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn emit(meta: &Metadata) -> String {
        Emitter::new(EmitConfig::new()).emit(meta)
    }

    #[test]
    fn empty_metadata_is_an_empty_module() {
        assert_eq!(emit(&Metadata::default()), "declare module AtomTypes {\n}\n");
    }

    #[test]
    fn module_name_is_configurable() {
        let out = Emitter::new(EmitConfig::new().module_name("Editor")).emit(&Metadata::default());
        assert!(out.starts_with("declare module Editor {\n"));
    }

    #[test]
    fn classes_emitted_once_in_input_order() {
        let mut meta = Metadata::default();
        for name in ["Workspace", "Atom", "Pane"] {
            meta.classes.insert(name.to_string(), class(name));
        }
        let out = emit(&meta);

        let positions: Vec<usize> = ["class Workspace ", "class Atom ", "class Pane "]
            .iter()
            .map(|&header| {
                assert_eq!(out.matches(header).count(), 1, "{header} in {out}");
                out.find(header).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn classes_separated_by_one_blank_line() {
        let mut meta = Metadata::default();
        meta.classes.insert("A".to_string(), class("A"));
        meta.classes.insert("B".to_string(), class("B"));
        let out = emit(&meta);
        assert!(out.contains("class A {\n}\n\n/**\n"), "{out}");
        assert!(out.ends_with("class B {\n}\n}\n"), "{out}");
    }
}
