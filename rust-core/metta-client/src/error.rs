// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Error types for the MeTTa catalog client.
//!
//! Strict operations (`try_*`) return [`Result<T>`], an alias for
//! `std::result::Result<T, CatalogError>`. The absorbing operations never
//! return these errors; they log them and fall back to an empty value.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for catalog client operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The configured endpoint is not an absolute http(s) URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The configured credential cannot be sent as an HTTP header value.
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// Connection refused, DNS failure or timeout. Timeouts are not
    /// reported separately.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with a non-2xx status.
    #[error("Catalog returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, or the canonical reason phrase when the body is empty.
        message: String,
    },

    /// The response body was not the JSON shape the operation expects.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The seed file could not be read.
    #[error("Failed to read seed file {}: {source}", path.display())]
    Seed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a JSON array of objects.
    #[error("Malformed seed file {}: {source}", path.display())]
    SeedFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// The error message followed by every distinct cause in its source chain,
    /// joined with `: `. Transport errors only name the cause (connection
    /// refused, DNS failure, timeout) further down the chain.
    pub fn detail(&self) -> String {
        let mut rendered = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let message = cause.to_string();
            if !rendered.contains(&message) {
                rendered.push_str(": ");
                rendered.push_str(&message);
            }
            source = cause.source();
        }
        rendered
    }
}

/// Crate-level result alias using [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
