//! Documentation comment builder.

/// A `/** ... */` block collected line by line.
#[derive(Debug, Default)]
pub struct DocComment {
    lines: Vec<String>,
}

impl DocComment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append free text, one comment line per source line.
    pub fn text(&mut self, text: &str) -> &mut Self {
        for line in text.split('\n') {
            self.line(line.strip_suffix('\r').unwrap_or(line));
        }
        self
    }

    /// Append a single line. `*/` is escaped so it cannot end the block.
    pub fn line(&mut self, line: &str) -> &mut Self {
        self.lines.push(line.replace("*/", "*\\/"));
        self
    }

    /// Append a bare ` *` separator.
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Write the block to `out`, each line prefixed with `indent`.
    pub fn write_to(&self, out: &mut String, indent: &str) {
        out.push_str(indent);
        out.push_str("/**\n");
        for line in &self.lines {
            out.push_str(indent);
            if line.is_empty() {
                out.push_str(" *\n");
            } else {
                out.push_str(" * ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str(indent);
        out.push_str(" */\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(comment: &DocComment, indent: &str) -> String {
        let mut out = String::new();
        comment.write_to(&mut out, indent);
        out
    }

    #[test]
    fn empty_block() {
        assert_eq!(written(&DocComment::new(), ""), "/**\n */\n");
    }

    #[test]
    fn multi_line_text_is_reflowed() {
        let mut comment = DocComment::new();
        comment.text("First line.\r\nSecond line.\n\nAfter gap.");
        assert_eq!(
            written(&comment, "\t"),
            "\t/**\n\t * First line.\n\t * Second line.\n\t *\n\t * After gap.\n\t */\n"
        );
    }

    #[test]
    fn separator_and_lines() {
        let mut comment = DocComment::new();
        comment.text("Desc").blank().line("file: a.js");
        assert_eq!(written(&comment, ""), "/**\n * Desc\n *\n * file: a.js\n */\n");
    }

    #[test]
    fn comment_terminator_is_escaped() {
        let mut comment = DocComment::new();
        comment.text("matches /* and */ literally");
        let out = written(&comment, "");
        assert_eq!(out.matches("*/").count(), 1);
        assert!(out.contains("and *\\/ literally"));
    }
}
