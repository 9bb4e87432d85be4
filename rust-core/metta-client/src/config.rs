// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Client configuration.
//!
//! Defaults match the agents that talk to the catalog:
//! - endpoint: `http://localhost:3001/api/metta`
//! - no credential
//! - 30 second per-request timeout

use std::time::Duration;

/// Default catalog endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001/api/metta";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable overriding the endpoint.
pub const ENDPOINT_ENV: &str = "METTA_ENDPOINT";

/// Environment variable holding the bearer credential.
pub const API_KEY_ENV: &str = "METTA_API_KEY";

/// Configuration for a [`CatalogClient`](crate::client::CatalogClient).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the catalog API; operation paths are appended to it.
    pub endpoint: String,
    /// Optional static bearer token sent on every request.
    pub credential: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a configuration from `METTA_ENDPOINT` and `METTA_API_KEY`,
    /// falling back to the defaults for anything unset or empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            endpoint: non_empty(ENDPOINT_ENV).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            credential: non_empty(API_KEY_ENV),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Attach a bearer credential.
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            credential: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
