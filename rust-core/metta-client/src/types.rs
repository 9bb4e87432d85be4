// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Data types exchanged with the catalog.
//!
//! Dataset and provenance records are kept as open JSON maps: the catalog owns
//! their schema, the client only carries them. Filters and validation updates
//! get typed helpers, but both serialize to plain JSON objects.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque JSON object as stored by the catalog.
///
/// Dataset records usually carry `tokenId`, a `metadata` object (name,
/// category, size) and a `validation` object (status, score), but nothing
/// here depends on that.
pub type Record = Map<String, Value>;

/// Score at or above which a dataset that passed integrity and schema
/// checks counts as verified.
pub const QUALITY_THRESHOLD: u32 = 70;

// ---------------------------------------------------------------------------
// ValidationStatus
// ---------------------------------------------------------------------------

/// Outcome of a validator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// Integrity, schema and quality checks all passed.
    Verified,
    /// Integrity and schema passed, quality fell below the threshold.
    PartiallyVerified,
    /// Integrity or schema failed.
    Failed,
}

impl ValidationStatus {
    /// Combine the individual check results into an overall status.
    pub fn determine(integrity_ok: bool, schema_ok: bool, quality_score: u32) -> Self {
        match (integrity_ok && schema_ok, quality_score >= QUALITY_THRESHOLD) {
            (true, true) => ValidationStatus::Verified,
            (true, false) => ValidationStatus::PartiallyVerified,
            (false, _) => ValidationStatus::Failed,
        }
    }

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationStatus::Verified => "verified",
            ValidationStatus::PartiallyVerified => "partially_verified",
            ValidationStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ValidationUpdate
// ---------------------------------------------------------------------------

/// Validation result submitted against a token ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationUpdate {
    pub status: ValidationStatus,
    /// Quality score, 0–100.
    pub score: u32,
    /// Content identifier of the uploaded attestation report.
    #[serde(rename = "attestationCID")]
    pub attestation_cid: String,
    /// Address of the validator that produced the attestation.
    pub validator: String,
    /// When the update was produced. Serialized as RFC 3339.
    pub timestamp: DateTime<Utc>,
}

impl ValidationUpdate {
    /// Create an update stamped with the current time.
    pub fn new(
        status: ValidationStatus,
        score: u32,
        attestation_cid: impl Into<String>,
        validator: impl Into<String>,
    ) -> Self {
        Self {
            status,
            score,
            attestation_cid: attestation_cid.into(),
            validator: validator.into(),
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchFilters
// ---------------------------------------------------------------------------

/// Filter set for `/search`, sent verbatim as a JSON object.
///
/// The typed setters cover the filters the catalog is known to accept;
/// [`SearchFilters::with`] adds anything else.
///
/// ```
/// use metta_client::types::{SearchFilters, ValidationStatus};
///
/// let filters = SearchFilters::new()
///     .category("Computer Vision")
///     .validation_status(ValidationStatus::Verified);
/// assert_eq!(filters.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchFilters(Record);

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary filter, replacing any previous value for `key`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn category(self, category: impl Into<String>) -> Self {
        self.with("category", category.into())
    }

    pub fn validation_status(self, status: ValidationStatus) -> Self {
        self.with("validation_status", status.as_str())
    }

    pub fn min_quality_score(self, score: u32) -> Self {
        self.with("min_quality_score", score)
    }

    /// Seller wallet address.
    pub fn seller(self, address: impl Into<String>) -> Self {
        self.with("seller", address.into())
    }

    /// Minimum size in the catalog's notation, e.g. `"1GB"`.
    pub fn min_size(self, size: impl Into<String>) -> Self {
        self.with("min_size", size.into())
    }

    /// Free-text keywords extracted from a buyer request.
    pub fn keywords<I, S>(self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<Value> = keywords
            .into_iter()
            .map(|w| Value::String(w.into()))
            .collect();
        self.with("keywords", words)
    }

    /// Buyer intent classification (e.g. `"search"`).
    pub fn intent(self, intent: impl Into<String>) -> Self {
        self.with("intent", intent.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_record(&self) -> &Record {
        &self.0
    }

    pub fn into_record(self) -> Record {
        self.0
    }
}

impl From<Record> for SearchFilters {
    fn from(record: Record) -> Self {
        Self(record)
    }
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// Body of a successful `/search` response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub datasets: Vec<Record>,
}
