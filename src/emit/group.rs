//! Argument grouping — rebuild callback and options-bag parameter types.
//!
//! Documentation often describes a callback as a `Function` argument
//! followed by a flat run of the arguments the callback receives, and an
//! options bag as an `Object` argument followed by its fields:
//!
//! ```text
//! @param {Function} callback
//! @param {String} path    <- received by callback
//! @param {Number} size    <- received by callback
//! ```
//!
//! A single backward scan folds each such run into the type of the
//! argument that owns it, so the signature above prints as
//! `callback: (path: string, size: number) => void`.

use std::collections::VecDeque;
use std::fmt;

use super::types::{map_type, Position};
use crate::model::Argument;

/// A parameter as printed in a signature. `ty` is already mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub optional: bool,
    pub ty: String,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.optional { "?" } else { "" };
        write!(f, "{}{}: {}", self.name, marker, self.ty)
    }
}

/// Render parameters as a comma-separated `name?: type` list.
pub fn render_params<'a>(params: impl IntoIterator<Item = &'a Param>) -> String {
    params
        .into_iter()
        .map(Param::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fold trailing argument runs into `Function` and `Object` arguments.
///
/// Scans from last to first with one pending list. A `Function` or
/// `Object` argument seen while the pending list is non-empty takes the
/// whole pending list as its callback parameters or record fields, and
/// the pending list is cleared. Every argument, folded or not, is then
/// prepended to the pending list, which ends up as the printed parameter
/// list in source order.
///
/// The input is left untouched; folded types live only in the returned
/// parameters.
pub fn group_arguments(args: &[Argument]) -> Vec<Param> {
    let mut pending: VecDeque<Param> = VecDeque::with_capacity(args.len());

    for arg in args.iter().rev() {
        let token = arg.type_name.as_deref();
        let ty = match token {
            Some(kind @ ("Function" | "Object")) if !pending.is_empty() => {
                let members = render_params(&pending);
                pending.clear();
                if kind == "Function" {
                    format!("({}) => void", members)
                } else {
                    format!("{{{}}}", members)
                }
            }
            _ => map_type(token, Position::Argument).to_string(),
        };

        pending.push_front(Param {
            name: arg.name.clone(),
            optional: arg.is_optional,
            ty,
        });
    }

    pending.into()
}
