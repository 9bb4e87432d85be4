// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Catalog client configuration, authentication, and HTTP transport layer.
//!
//! [`CatalogClient`] owns the endpoint URL, the blocking HTTP client and the
//! optional bearer credential. The catalog operations themselves are defined
//! as `impl CatalogClient` blocks in [`dataset`](crate::dataset),
//! [`search`](crate::search) and [`provenance`](crate::provenance).

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{CatalogError, Result};

/// Blocking client for the MeTTa dataset catalog.
///
/// Every operation performs exactly one HTTP request. There are no retries;
/// a request either completes within the configured timeout or fails.
///
/// # Examples
///
/// ```rust,no_run
/// use metta_client::client::CatalogClient;
/// use metta_client::config::ClientConfig;
/// use metta_client::types::SearchFilters;
///
/// # fn main() -> metta_client::error::Result<()> {
/// let client = CatalogClient::new(ClientConfig::default())?;
/// let found = client.query_datasets(&SearchFilters::new().category("Computer Vision"));
/// println!("{} datasets", found.len());
/// # Ok(())
/// # }
/// ```
pub struct CatalogClient {
    /// Parsed base URL; operation paths are appended as extra segments.
    endpoint: Url,
    /// Underlying connection-pooled HTTP client.
    http: Client,
    /// Pre-rendered `Authorization` header, if a credential was configured.
    auth: Option<HeaderValue>,
    timeout: Duration,
}

impl CatalogClient {
    // -- Constructors -------------------------------------------------------

    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidEndpoint`] if the endpoint is not an
    /// absolute http(s) URL, and [`CatalogError::InvalidCredential`] if the
    /// credential contains characters not allowed in a header.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = parse_endpoint(&config.endpoint)?;

        let auth = match config.credential.as_deref() {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|e| CatalogError::InvalidCredential(e.to_string()))?;
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        // reqwest is built without a bundled rustls provider. An Err here only
        // means another provider is already installed.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CatalogError::Transport)?;

        debug!(endpoint = %endpoint, authenticated = auth.is_some(), "Catalog client ready");

        Ok(Self {
            endpoint,
            http,
            auth,
            timeout: config.timeout,
        })
    }

    /// Create a client configured from `METTA_ENDPOINT` / `METTA_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    // -- Accessors ----------------------------------------------------------

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether requests carry an `Authorization` header.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    // -- Internal HTTP helpers ----------------------------------------------

    /// Append `segments` to the endpoint path. Each segment is percent-encoded,
    /// so a token ID containing `/` stays one segment.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidEndpoint(self.endpoint.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn apply_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some(value) => builder.header(AUTHORIZATION, value.clone()),
            None => builder,
        }
    }

    fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<Response> {
        let url = self.url(segments)?;
        debug!(%method, %url, "Sending catalog request");

        let mut builder = self.apply_auth(self.http.request(method, url));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        check_status(response)
    }

    /// GET and decode the JSON body.
    pub(crate) fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let response = self.send::<()>(Method::GET, segments, None)?;
        decode(response)
    }

    /// POST a JSON body and decode the JSON response.
    pub(crate) fn post_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, segments, Some(body))?;
        decode(response)
    }

    /// Send a JSON body and only check the status; the response body is
    /// ignored.
    pub(crate) fn send_unit<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<()> {
        self.send(method, segments, Some(body)).map(|_| ())
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("authenticated", &self.auth.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Log a failed strict call, with its full cause chain, and collapse it
/// into `None`.
pub(crate) fn absorb<T>(operation: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(error = %err.detail(), "Failed to {operation}");
            None
        }
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| CatalogError::InvalidEndpoint(format!("{raw}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CatalogError::InvalidEndpoint(format!(
            "{raw}: unsupported scheme {}",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(CatalogError::InvalidEndpoint(format!("{raw}: missing host")));
    }

    Ok(url)
}

/// Turn a non-2xx response into [`CatalogError::Status`].
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let message = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("unknown status").to_string()
    } else {
        body
    };

    Err(CatalogError::Status {
        status: status.as_u16(),
        message,
    })
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text()?;
    serde_json::from_str(&body).map_err(CatalogError::Decode)
}
