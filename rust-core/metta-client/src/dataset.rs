// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Dataset record operations: store, fetch and validation updates.
//!
//! Each operation comes in two forms. The `try_*` form returns the error.
//! The plain form logs it and returns `false` / `None`, so callers that only
//! care whether a call went through can keep going item by item.

use reqwest::Method;
use serde::Serialize;

use crate::client::{absorb, CatalogClient};
use crate::error::Result;
use crate::types::Record;

impl CatalogClient {
    /// Store a dataset record via `POST {endpoint}/store`.
    ///
    /// Succeeds on any 2xx status; the response body is ignored.
    pub fn try_store_dataset(&self, record: &Record) -> Result<()> {
        self.send_unit(Method::POST, &["store"], record)
    }

    /// Store a dataset record. Returns `true` only on a 2xx response.
    pub fn store_dataset(&self, record: &Record) -> bool {
        absorb("store dataset", self.try_store_dataset(record)).is_some()
    }

    /// Fetch a dataset record via `GET {endpoint}/dataset/{token_id}`.
    ///
    /// # Errors
    ///
    /// A 404 surfaces as [`CatalogError::Status`](crate::error::CatalogError::Status)
    /// like any other non-2xx status.
    pub fn try_get_dataset(&self, token_id: &str) -> Result<Record> {
        self.get_json(&["dataset", token_id])
    }

    /// Fetch a dataset record, or `None` on any failure.
    pub fn get_dataset(&self, token_id: &str) -> Option<Record> {
        absorb("get dataset", self.try_get_dataset(token_id))
    }

    /// Submit a validation update via
    /// `PUT {endpoint}/dataset/{token_id}/validation`.
    ///
    /// The body is serialized as-is; pass a
    /// [`ValidationUpdate`](crate::types::ValidationUpdate) or a raw
    /// [`Record`].
    pub fn try_update_validation<V>(&self, token_id: &str, validation: &V) -> Result<()>
    where
        V: Serialize + ?Sized,
    {
        self.send_unit(Method::PUT, &["dataset", token_id, "validation"], validation)
    }

    /// Submit a validation update. Returns `true` only on a 2xx response.
    pub fn update_validation<V>(&self, token_id: &str, validation: &V) -> bool
    where
        V: Serialize + ?Sized,
    {
        absorb(
            "update validation",
            self.try_update_validation(token_id, validation),
        )
        .is_some()
    }
}
