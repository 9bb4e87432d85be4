// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//!
//! MeTTa catalog demo — seeds the catalog from a local knowledge-graph file,
//! runs sample queries and pushes a validation update.

mod demo;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use metta_client::config::{API_KEY_ENV, DEFAULT_ENDPOINT, ENDPOINT_ENV};
use metta_client::{seed, CatalogClient, ClientConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sample knowledge-graph file shipped with the demo.
const BUNDLED_DATA_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/example_mettta.kg");

// ---------------------------------------------------------------------------
// CLI argument parsing
// ---------------------------------------------------------------------------

/// MeTTa knowledge graph integration demo.
#[derive(Parser, Debug)]
#[command(name = "metta-demo", version = VERSION, about = "MeTTa catalog client demo")]
struct Cli {
    /// Base URL of the catalog API.
    #[arg(long, env = ENDPOINT_ENV, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Bearer token sent with every request.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// JSON array of dataset records to seed the catalog with. Defaults to
    /// the sample file bundled with the demo.
    #[arg(long, default_value = BUNDLED_DATA_FILE)]
    data_file: PathBuf,

    /// Token whose validation is updated.
    #[arg(long, default_value = "1")]
    token_id: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::default().with_endpoint(cli.endpoint);
    if let Some(key) = cli.api_key.filter(|k| !k.is_empty()) {
        config = config.with_credential(key);
    }
    let client = CatalogClient::new(config).context("failed to create catalog client")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "🧠 MeTTa Knowledge Graph Integration Demo")?;
    writeln!(out, "==================================================")?;
    tracing::info!(endpoint = %client.endpoint(), "Using catalog");

    let records = match seed::load_records(&cli.data_file) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to load knowledge graph data");
            Vec::new()
        }
    };
    if records.is_empty() {
        writeln!(out, "❌ No knowledge graph data found")?;
        return Ok(());
    }
    writeln!(out, "📚 Loaded {} datasets from knowledge graph", records.len())?;

    demo::store_all(&client, &records, &mut out)?;
    demo::run_queries(&client, &mut out)?;
    demo::run_updates(&client, &cli.token_id, &mut out)?;

    writeln!(out, "\n🎉 MeTTa Knowledge Graph demo completed!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_file_is_bundled_sample() {
        let cli = Cli::parse_from(["metta-demo"]);
        assert_eq!(cli.data_file, PathBuf::from(BUNDLED_DATA_FILE));

        let records = seed::load_records(&cli.data_file).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(demo::dataset_name(&records[0]), "Urban Street Scenes");
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "metta-demo",
            "--endpoint",
            "http://catalog.internal:3001/api/metta",
            "--data-file",
            "/srv/metta/example.kg",
            "--token-id",
            "7",
        ]);
        assert_eq!(cli.endpoint, "http://catalog.internal:3001/api/metta");
        assert_eq!(cli.data_file, PathBuf::from("/srv/metta/example.kg"));
        assert_eq!(cli.token_id, "7");
    }
}
