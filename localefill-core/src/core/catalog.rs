//! Catalog loading and saving.
//!
//! A [`Catalog`] is one language's locale file: a tree of string keys whose
//! values are either nested objects or leaf scalars. Key order is preserved
//! through a load → save cycle (`serde_json` is built with `preserve_order`).

use crate::{LocalefillError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A nested locale catalog backed by an ordered JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    root: Map<String, Value>,
}

impl Catalog {
    /// Wraps an already-built root object.
    pub fn from_root(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`LocalefillError::Io`] if the file cannot be read,
    /// [`LocalefillError::Json`] if it is not valid JSON, or
    /// [`LocalefillError::InvalidCatalog`] if the root is not a JSON object.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&content)?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(LocalefillError::InvalidCatalog(format!(
                "root of {} must be a JSON object, found {}",
                path.as_ref().display(),
                json_type_name(&other)
            ))),
        }
    }

    /// Serializes the catalog to `path`, overwriting any existing file.
    ///
    /// Output is pretty-printed with 2-space indentation, non-ASCII left
    /// unescaped, with a trailing newline.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut json = serde_json::to_string_pretty(&self.root)?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }

    /// The root object.
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the catalog has no top-level keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl TryFrom<Value> for Catalog {
    type Error = LocalefillError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(LocalefillError::InvalidCatalog(format!(
                "root must be a JSON object, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
