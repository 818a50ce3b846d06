//! Class blocks: doc comment, header and member groups.

use super::comment::DocComment;
use super::{Emitter, Modifier};
use crate::model::ClassInfo;

impl Emitter {
    pub(super) fn emit_class(&mut self, key: &str, class: &ClassInfo) {
        let mut doc = DocComment::new();
        if let Some(desc) = class.description.as_deref().filter(|d| !d.is_empty()) {
            doc.text(desc).blank();
        }
        if let Some(ref filename) = class.filename {
            doc.line(&format!("file: {}", filename));
        }
        doc.write_to(&mut self.output, "");

        self.output.push_str("class ");
        self.output.push_str(class.display_name(key));
        if let Some(parent) = self.superclass(class) {
            self.output.push_str(" extends ");
            self.output.push_str(parent);
        }
        self.output.push_str(" {\n");

        // Member groups, one blank line between non-empty groups
        let mut started = false;
        if !class.class_properties.is_empty() {
            self.begin_group(&mut started);
            for property in &class.class_properties {
                self.emit_property(property, Modifier::Static);
            }
        }
        if !class.instance_properties.is_empty() {
            self.begin_group(&mut started);
            for property in &class.instance_properties {
                self.emit_property(property, Modifier::Instance);
            }
        }
        if !class.class_methods.is_empty() {
            self.begin_group(&mut started);
            for method in &class.class_methods {
                self.emit_method(method, Modifier::Static);
            }
        }
        if !class.instance_methods.is_empty() {
            self.begin_group(&mut started);
            for method in &class.instance_methods {
                self.emit_method(method, Modifier::Instance);
            }
        }

        self.output.push_str("}\n");
    }

    /// Declared superclass, unless it is missing or the implicit base.
    fn superclass<'a>(&self, class: &'a ClassInfo) -> Option<&'a str> {
        class
            .super_class
            .as_deref()
            .filter(|parent| !parent.is_empty() && *parent != self.config.implicit_base)
    }

    fn begin_group(&mut self, started: &mut bool) {
        if *started {
            self.output.push('\n');
        }
        *started = true;
    }
}
