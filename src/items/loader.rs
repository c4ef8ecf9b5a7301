//! Catalog loading from JSON
//!
//! A catalog document is an object with an `items` array. Bad entries are
//! recorded and skipped; the rest still load.

use std::fmt;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use super::{Collection, Item};

/// Fatal catalog loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog format error: {0}")]
    Format(String),
}

/// A non-fatal problem with one part of a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadIssue {
    /// Index in the `items` array, if the problem is with one entry
    pub index: Option<usize>,
    pub message: String,
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "item {}: {}", index, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Items loaded from one or more catalog documents
#[derive(Debug, Default)]
pub struct Catalog {
    pub items: Collection,
    pub issues: Vec<LoadIssue>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog document, returning how many items were registered
    pub fn load_str(&mut self, text: &str) -> Result<usize, LoadError> {
        let document: serde_json::Value = serde_json::from_str(text)?;
        let serde_json::Value::Object(mut document) = document else {
            return Err(LoadError::Format(format!(
                "expected an object at the top level, got {}",
                json_type_name(&document)
            )));
        };

        let entries = match document.remove("items") {
            None => return Ok(0),
            Some(serde_json::Value::Array(entries)) => entries,
            Some(other) => {
                self.record(
                    None,
                    format!(
                        "base-level items collection expected list, got {}",
                        json_type_name(&other)
                    ),
                );
                return Ok(0);
            }
        };

        let mut loaded = 0;
        for (index, entry) in entries.into_iter().enumerate() {
            let result = Item::from_json(entry).and_then(|item| self.items.register(item, false));
            match result {
                Ok(()) => loaded += 1,
                Err(e) => self.record(Some(index), e.to_string()),
            }
        }

        debug!("Loaded {} catalog items", loaded);
        Ok(loaded)
    }

    /// Load a catalog file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let loaded = self.load_str(&text)?;
        debug!("Loaded {} items from {}", loaded, path.display());
        Ok(loaded)
    }

    fn record(&mut self, index: Option<usize>, message: String) {
        let issue = LoadIssue { index, message };
        warn!("Catalog issue: {}", issue);
        self.issues.push(issue);
    }
}

/// Load a single catalog document
pub fn load_catalog_str(text: &str) -> Result<Catalog, LoadError> {
    let mut catalog = Catalog::new();
    catalog.load_str(text)?;
    Ok(catalog)
}

/// Load a single catalog file
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let mut catalog = Catalog::new();
    catalog.load_file(path)?;
    Ok(catalog)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "object",
    }
}
