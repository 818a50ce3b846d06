//! Metadata loaders — JSON files or a single reader (stdin).

use std::cell::RefCell;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::model::Metadata;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid metadata in {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of a metadata tree.
pub trait MetadataLoader {
    fn load(&self) -> Result<Metadata, LoadError>;
}

/// Loads and merges one or more JSON metadata files, in order.
///
/// A class that appears in more than one file keeps the position of its
/// first appearance and the contents of its last.
pub struct JsonFileLoader {
    paths: Vec<PathBuf>,
}

impl JsonFileLoader {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl MetadataLoader for JsonFileLoader {
    fn load(&self) -> Result<Metadata, LoadError> {
        let mut merged = Metadata::default();
        for path in &self.paths {
            let meta = read_file(path)?;
            info!(path = %path.display(), classes = meta.classes.len(), "loaded metadata");
            for (name, class) in meta.classes {
                if merged.classes.insert(name.clone(), class).is_some() {
                    warn!(class = %name, path = %path.display(), "duplicate class, later definition wins");
                }
            }
        }
        Ok(merged)
    }
}

fn read_file(path: &Path) -> Result<Metadata, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        origin: path.display().to_string(),
        source,
    })
}

/// Loads a single JSON document from a reader. The first load consumes it.
pub struct JsonReaderLoader<R> {
    reader: RefCell<R>,
    origin: String,
}

impl<R: Read> JsonReaderLoader<R> {
    pub fn new(reader: R, origin: impl Into<String>) -> Self {
        Self {
            reader: RefCell::new(reader),
            origin: origin.into(),
        }
    }
}

impl<R: Read> MetadataLoader for JsonReaderLoader<R> {
    fn load(&self) -> Result<Metadata, LoadError> {
        let mut content = String::new();
        self.reader
            .borrow_mut()
            .read_to_string(&mut content)
            .map_err(|source| LoadError::Io {
                path: PathBuf::from(&self.origin),
                source,
            })?;
        serde_json::from_str(&content).map_err(|source| LoadError::Parse {
            origin: self.origin.clone(),
            source,
        })
    }
}
