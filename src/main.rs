//! docdts — generate an ambient TypeScript declaration module from API
//! documentation metadata.
//!
//! Reads atomdoc-style JSON metadata (classes, properties, methods and their
//! argument/return descriptors), emits one `declare module` block and
//! normalizes its whitespace:
//!
//! - **stdin mode**: `docdts < metadata.json > atom.d.ts`
//! - **file mode**: `docdts api/*.json -o atom.d.ts`

mod emit;
mod format;
mod load;
mod model;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use indexmap::IndexSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use emit::{EmitConfig, Emitter};
use format::{BuiltinFormatter, CommandFormatter, FormatOptions, Formatter};
use load::{JsonFileLoader, JsonReaderLoader, MetadataLoader};

#[derive(Parser)]
#[command(
    name = "docdts",
    about = "Generate an ambient TypeScript declaration module from API documentation metadata"
)]
struct Cli {
    /// Metadata JSON files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Write the declarations to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Name of the wrapping `declare module` block
    #[arg(short = 'm', long = "module", default_value = "AtomTypes")]
    module: String,

    /// Superclass that every class implicitly extends; never printed
    #[arg(long, default_value = "Model")]
    implicit_base: String,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 4)]
    indent_size: usize,

    /// Indent with tabs instead of spaces
    #[arg(long)]
    use_tabs: bool,

    /// External formatter reading stdin and writing stdout,
    /// e.g. "prettier --parser typescript"
    #[arg(long, conflicts_with = "no_format")]
    formatter: Option<String>,

    /// Print the raw, tab-indented document without formatting
    #[arg(long)]
    no_format: bool,

    /// Log more to stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Nothing is written until the whole document is formatted.
    let document = run(&cli)?;

    match cli.output {
        Some(ref path) => fs::write(path, &document)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", document),
    }
    Ok(())
}

/// Load, emit and format. Returns the final document.
fn run(cli: &Cli) -> Result<String> {
    let meta = if cli.files.is_empty() {
        JsonReaderLoader::new(io::stdin().lock(), "<stdin>").load()?
    } else {
        let paths = expand_globs(&cli.files)?;
        JsonFileLoader::new(paths).load()?
    };

    let config = EmitConfig::new()
        .module_name(&cli.module)
        .implicit_base(&cli.implicit_base);
    let raw = Emitter::new(config).emit(&meta);
    info!(classes = meta.classes.len(), bytes = raw.len(), "emitted declarations");

    if cli.no_format {
        return Ok(raw);
    }

    let formatter: Box<dyn Formatter> = match cli.formatter.as_deref() {
        Some(command) => Box::new(
            CommandFormatter::parse(command).context("--formatter must name a program")?,
        ),
        None => Box::new(BuiltinFormatter),
    };
    let options = FormatOptions {
        indent_size: cli.indent_size,
        convert_tabs_to_spaces: !cli.use_tabs,
        replace_line_endings: false,
    };
    formatter
        .format(&raw, &options)
        .context("failed to format declarations")
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Expand glob patterns into real file paths, keeping command-line order.
/// Matches within one pattern come back sorted; repeats are dropped.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: IndexSet<PathBuf> = IndexSet::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.insert(path.to_path_buf());
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    if files.is_empty() {
        anyhow::bail!("no input files matched: {}", patterns.join(" "));
    }
    Ok(files.into_iter().collect())
}
