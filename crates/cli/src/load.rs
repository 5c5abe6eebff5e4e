// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading result documents and expectation files from disk.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::assert::Expectations;
use crate::pattern::PatternError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML in {}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Read a JSON document.
pub fn load_json(path: &Path) -> Result<Value, LoadError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a JSON or YAML document, chosen by extension.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    if !is_yaml(path) {
        return load_json(path);
    }
    let content = read(path)?;
    serde_yaml::from_str(&content).map_err(|source| LoadError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and resolve an expectations file.
pub fn load_expectations(path: &Path) -> Result<Expectations, LoadError> {
    let document = load_document(path)?;
    tracing::debug!(path = %path.display(), "loaded expectations");
    Ok(Expectations::from_json(&document)?)
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
