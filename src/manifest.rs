//! Rewrites the downloaded template's `package.json`.
//!
//! Only `name`, `author` and `description` are touched. Every other field
//! keeps its value and its position. The write is a plain overwrite, so a
//! crash mid-write can leave a truncated manifest behind.

use crate::{
    constants::MANIFEST_FILENAME,
    error::{Error, Result},
};
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Values written into the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFields {
    pub name: String,
    pub author: String,
    pub description: String,
}

/// Loads, patches and persists a project manifest.
pub struct ManifestRewriter {
    path: PathBuf,
}

impl ManifestRewriter {
    pub fn new<P: AsRef<Path>>(project_dir: P) -> Self {
        Self { path: project_dir.as_ref().join(MANIFEST_FILENAME) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `fields` to the manifest on disk.
    ///
    /// The file is left untouched if it cannot be read or parsed.
    pub fn apply(&self, fields: &ManifestFields) -> Result<()> {
        self.apply_with(fields, |path, content| fs::write(path, content))
    }

    /// Same as [`apply`](Self::apply), persisting through `write`.
    pub fn apply_with<F>(&self, fields: &ManifestFields, write: F) -> Result<()>
    where
        F: FnOnce(&Path, &str) -> io::Result<()>,
    {
        let original = self.read()?;
        let mut manifest = self.parse(&original)?;

        patch(&mut manifest, fields);

        let mut serialized = serde_json::to_string_pretty(&Value::Object(manifest))?;
        if original.ends_with('\n') {
            serialized.push('\n');
        }

        log::debug!("Writing manifest '{}'", self.path.display());
        write(&self.path, &serialized).map_err(|source| Error::ManifestWriteError {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| Error::ManifestNotFoundError {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn parse(&self, content: &str) -> Result<Map<String, Value>> {
        let parse_error = |reason: String| Error::ManifestParseError {
            path: self.path.display().to_string(),
            reason,
        };

        match serde_json::from_str::<Value>(content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(parse_error("top-level value is not an object".to_string())),
            Err(e) => Err(parse_error(e.to_string())),
        }
    }
}

/// Overwrites the target fields, appending the ones that are missing.
fn patch(manifest: &mut Map<String, Value>, fields: &ManifestFields) {
    manifest.insert("name".to_string(), Value::String(fields.name.clone()));
    manifest.insert("author".to_string(), Value::String(fields.author.clone()));
    manifest.insert("description".to_string(), Value::String(fields.description.clone()));
}
