// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Loading dataset records from a local knowledge-graph file.
//!
//! The file is a JSON array of dataset records, the same shape the seller
//! agent appends to after minting.

use std::path::Path;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::types::Record;

/// Read every record from `path`.
///
/// # Errors
///
/// [`CatalogError::Seed`] if the file cannot be read, and
/// [`CatalogError::SeedFormat`] if it is not a JSON array of objects.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Seed {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<Record> =
        serde_json::from_str(&raw).map_err(|source| CatalogError::SeedFormat {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), count = records.len(), "Loaded seed records");
    Ok(records)
}
