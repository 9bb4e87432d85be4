// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Dataset search.

use crate::client::{absorb, CatalogClient};
use crate::error::Result;
use crate::types::{Record, SearchFilters, SearchResponse};

impl CatalogClient {
    /// Search the catalog via `POST {endpoint}/search`.
    ///
    /// The filters are sent verbatim. Returns the `datasets` array of the
    /// response, or an empty list if the key is absent. Unlike
    /// [`query_datasets`](Self::query_datasets), a failed request is an `Err`
    /// rather than an empty result.
    pub fn try_query_datasets(&self, filters: &SearchFilters) -> Result<Vec<Record>> {
        let response: SearchResponse = self.post_json(&["search"], filters)?;
        Ok(response.datasets)
    }

    /// Search the catalog. Failures are logged and yield an empty list, so
    /// "no matches" and "query failed" look the same to the caller.
    pub fn query_datasets(&self, filters: &SearchFilters) -> Vec<Record> {
        absorb("query datasets", self.try_query_datasets(filters)).unwrap_or_default()
    }
}
