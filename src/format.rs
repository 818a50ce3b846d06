//! Formatter — whitespace normalization of the emitted document.
//!
//! Formatters are dry-run by contract: they take text and return text,
//! never touching a file. [`BuiltinFormatter`] re-indents by block depth;
//! [`CommandFormatter`] hands the document to an external program.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::string::FromUtf8Error;

use thiserror::Error;
use tracing::debug;

/// Options passed to every formatter.
#[derive(Clone, Debug)]
pub struct FormatOptions {
    /// Spaces per indentation level when converting tabs
    pub indent_size: usize,
    /// Indent with spaces instead of tabs
    pub convert_tabs_to_spaces: bool,
    /// Force `\n` line endings instead of keeping the input's terminator
    pub replace_line_endings: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_size: 4,
            convert_tabs_to_spaces: true,
            replace_line_endings: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unbalanced closing brace at line {line}")]
    Unbalanced { line: usize },

    #[error("{depth} unclosed block(s) at end of document")]
    Unclosed { depth: usize },

    #[error("failed to run formatter `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error talking to formatter `{program}`")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("formatter `{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("formatter output is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

/// Trait for normalizing the whitespace of a declaration document.
pub trait Formatter {
    fn format(&self, text: &str, options: &FormatOptions) -> Result<String, FormatError>;
}

/// In-process formatter for the declaration subset the emitter produces.
///
/// - indentation is recomputed from block depth: a line ending in `{` opens
///   a block, a line starting with `}` closes one; braces anywhere else,
///   including comments and member signatures, do not count
/// - doc comment continuation lines are aligned one space in, under `/**`
/// - trailing whitespace is stripped, runs of blank lines collapse to one,
///   blank lines before a closing `}` are dropped
/// - the document ends with exactly one line terminator
pub struct BuiltinFormatter;

impl Formatter for BuiltinFormatter {
    fn format(&self, text: &str, options: &FormatOptions) -> Result<String, FormatError> {
        let newline = if !options.replace_line_endings && text.contains("\r\n") {
            "\r\n"
        } else {
            "\n"
        };
        let unit = if options.convert_tabs_to_spaces {
            " ".repeat(options.indent_size)
        } else {
            "\t".to_string()
        };

        let mut out: Vec<String> = Vec::new();
        let mut depth: usize = 0;
        let mut in_comment = false;

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();

            if line.is_empty() {
                if out
                    .last()
                    .is_some_and(|prev| !prev.is_empty() && !prev.ends_with('{'))
                {
                    out.push(String::new());
                }
                continue;
            }

            if in_comment {
                let pad = if line.starts_with('*') { " " } else { "" };
                out.push(format!("{}{}{}", unit.repeat(depth), pad, line));
                in_comment = !line.contains("*/");
                continue;
            }

            if line.starts_with("/*") {
                out.push(format!("{}{}", unit.repeat(depth), line));
                in_comment = !line[2..].contains("*/");
                continue;
            }

            if line.starts_with("//") {
                out.push(format!("{}{}", unit.repeat(depth), line));
                continue;
            }

            // Only block lines move the depth: `}` opening a line closes one,
            // `{` ending a line opens one. Braces inside a member signature
            // come from documentation type tokens and are left alone.
            if line.starts_with('}') {
                depth = depth
                    .checked_sub(1)
                    .ok_or(FormatError::Unbalanced { line: idx + 1 })?;
                if out.last().is_some_and(String::is_empty) {
                    out.pop();
                }
            }
            out.push(format!("{}{}", unit.repeat(depth), line));
            if line.ends_with('{') {
                depth += 1;
            }
        }

        if depth != 0 {
            return Err(FormatError::Unclosed { depth });
        }
        while out.last().is_some_and(String::is_empty) {
            out.pop();
        }

        let mut formatted = out.join(newline);
        formatted.push_str(newline);
        Ok(formatted)
    }
}

/// Formatter backed by an external program reading stdin and writing stdout.
///
/// The program is expected to carry its own style configuration, so
/// [`FormatOptions`] are not forwarded.
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    program: String,
    args: Vec<String>,
}

impl CommandFormatter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split a command line on whitespace: `"prettier --parser typescript"`.
    pub fn parse(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self::new(program, words.collect()))
    }
}

impl Formatter for CommandFormatter {
    fn format(&self, text: &str, _options: &FormatOptions) -> Result<String, FormatError> {
        debug!(program = %self.program, args = ?self.args, "running external formatter");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FormatError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Feed stdin from a second thread so a chatty child cannot block on
        // a full stdout pipe while we are still writing.
        let stdin = child.stdin.take();
        let (written, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut pipe) => pipe.write_all(text.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (written, output)
        });

        let output = output.map_err(|source| FormatError::Io {
            program: self.program.clone(),
            source,
        })?;
        if !output.status.success() {
            return Err(FormatError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written.map_err(|source| FormatError::Io {
            program: self.program.clone(),
            source,
        })?;

        Ok(String::from_utf8(output.stdout)?)
    }
}
