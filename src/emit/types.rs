//! Type mapper — documentation type tokens to TypeScript type expressions.

/// Where a type token appears. Some aliases only apply to inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Method parameter, including members folded into a callback or record
    Argument,
    /// Property, return value or doc-comment annotation
    Other,
}

/// Map a documentation type token to a type expression.
///
/// Never fails: unrecognized tokens pass through verbatim on the assumption
/// that they name a class or interface declared elsewhere.
pub fn map_type(token: Option<&str>, position: Position) -> &str {
    match token.unwrap_or_default() {
        "" => "any",
        "Array" | "array" => "any[]",
        "Promise" => "Promise<any>",
        "Number" => "number",
        "String" => "string",
        "Boolean" | "Bool" => "boolean",
        "Point" if position == Position::Argument => "IPoint",
        "Range" if position == Position::Argument => "IRange",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn other(token: &str) -> &str {
        map_type(Some(token), Position::Other)
    }

    #[test]
    fn missing_or_empty_is_any() {
        assert_eq!(map_type(None, Position::Other), "any");
        assert_eq!(map_type(Some(""), Position::Argument), "any");
    }

    #[test]
    fn primitives() {
        assert_eq!(other("Number"), "number");
        assert_eq!(other("String"), "string");
        assert_eq!(other("Boolean"), "boolean");
        assert_eq!(other("Bool"), "boolean");
    }

    #[test]
    fn containers() {
        assert_eq!(other("Array"), "any[]");
        assert_eq!(other("array"), "any[]");
        assert_eq!(other("Promise"), "Promise<any>");
    }

    #[test]
    fn point_and_range_only_alias_in_argument_position() {
        assert_eq!(map_type(Some("Point"), Position::Argument), "IPoint");
        assert_eq!(map_type(Some("Range"), Position::Argument), "IRange");
        assert_eq!(other("Point"), "Point");
        assert_eq!(other("Range"), "Range");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        assert_eq!(other("TextEditor"), "TextEditor");
        assert_eq!(other("Function"), "Function");
        // Case matters: only the exact documented spellings are aliased
        assert_eq!(other("number"), "number");
        assert_eq!(other("BOOLEAN"), "BOOLEAN");
    }
}
