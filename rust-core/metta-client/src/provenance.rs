// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Provenance lookups.
//!
//! The catalog keeps the lineage of every dataset (minting, storage,
//! validation attestations). The client returns it as an opaque record.

use crate::client::{absorb, CatalogClient};
use crate::error::Result;
use crate::types::Record;

impl CatalogClient {
    /// Fetch provenance via `GET {endpoint}/dataset/{token_id}/provenance`.
    pub fn try_get_provenance(&self, token_id: &str) -> Result<Record> {
        self.get_json(&["dataset", token_id, "provenance"])
    }

    /// Fetch provenance, or `None` on any failure.
    pub fn get_provenance(&self, token_id: &str) -> Option<Record> {
        absorb("get provenance", self.try_get_provenance(token_id))
    }
}
