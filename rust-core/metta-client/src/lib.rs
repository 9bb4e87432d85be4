// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! # MeTTa Catalog Client
//!
//! A blocking Rust client for the MeTTa dataset catalog: the knowledge graph
//! that stores dataset metadata, validation results and provenance for the
//! marketplace.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use metta_client::client::CatalogClient;
//! use metta_client::config::ClientConfig;
//!
//! fn main() -> metta_client::error::Result<()> {
//!     let client = CatalogClient::new(ClientConfig::default().with_credential("api-key"))?;
//!     if let Some(dataset) = client.get_dataset("1") {
//!         println!("{}", dataset["metadata"]["name"]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] — Endpoint, authentication, and HTTP transport.
//! - [`config`] — Client configuration and environment overrides.
//! - [`dataset`] — Store, fetch and validation updates.
//! - [`search`] — Filtered dataset search.
//! - [`provenance`] — Provenance lookups.
//! - [`types`] — Records, filters and validation types.
//! - [`seed`] — Loading records from a local knowledge-graph file.
//! - [`error`] — Error types and the crate-level `Result` alias.

pub mod client;
pub mod config;
pub mod dataset;
pub mod search;
pub mod provenance;
pub mod types;
pub mod seed;
pub mod error;

pub use client::CatalogClient;
pub use config::ClientConfig;
pub use error::{CatalogError, Result};
pub use types::{Record, SearchFilters, ValidationStatus, ValidationUpdate};
