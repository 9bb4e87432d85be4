// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//!
//! Demonstration steps: seed the catalog, run the sample queries, push a
//! validation update and read the result back.
//!
//! Every step writes its report to `out` and keeps going when an individual
//! call fails.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::Value;

use metta_client::{CatalogClient, Record, SearchFilters, ValidationStatus, ValidationUpdate};

/// Seller address used by the "by seller" sample query.
pub const SAMPLE_SELLER: &str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";

const RULE: &str = "==================================================";

/// One sample query and the record field shown next to each hit.
pub struct SampleQuery {
    pub title: &'static str,
    pub filters: SearchFilters,
    pub label: &'static str,
    pub detail: &'static [&'static str],
}

/// The sample queries, in the order they are shown.
pub fn sample_queries() -> Vec<SampleQuery> {
    vec![
        SampleQuery {
            title: "Find Computer Vision datasets",
            filters: SearchFilters::new().category("Computer Vision"),
            label: "Token",
            detail: &["tokenId"],
        },
        SampleQuery {
            title: "Find verified datasets",
            filters: SearchFilters::new().validation_status(ValidationStatus::Verified),
            label: "Score",
            detail: &["validation", "score"],
        },
        SampleQuery {
            title: "Find high-quality datasets (score >= 80)",
            filters: SearchFilters::new().min_quality_score(80),
            label: "Score",
            detail: &["validation", "score"],
        },
        SampleQuery {
            title: "Find datasets by specific seller",
            filters: SearchFilters::new().seller(SAMPLE_SELLER),
            label: "Category",
            detail: &["metadata", "category"],
        },
        SampleQuery {
            title: "Find large datasets (>1GB)",
            filters: SearchFilters::new().min_size("1GB"),
            label: "Size",
            detail: &["metadata", "size"],
        },
    ]
}

/// Render the value at `path` for display. Strings print without quotes;
/// missing fields print as `?`.
pub fn field(record: &Record, path: &[&str]) -> String {
    let Some((first, rest)) = path.split_first() else {
        return "?".to_string();
    };

    let mut current = record.get(*first);
    for key in rest {
        current = current.and_then(|v| v.get(*key));
    }

    match current {
        None | Some(Value::Null) => "?".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn dataset_name(record: &Record) -> String {
    field(record, &["metadata", "name"])
}

/// Store every record, reporting each one. Returns how many were stored.
pub fn store_all<W: Write>(
    client: &CatalogClient,
    records: &[Record],
    out: &mut W,
) -> io::Result<usize> {
    writeln!(out, "\n💾 Storing datasets in MeTTa...")?;

    let mut stored = 0;
    for record in records {
        let name = dataset_name(record);
        if client.store_dataset(record) {
            stored += 1;
            writeln!(out, "   ✅ {} {name}", "Stored:".green())?;
        } else {
            writeln!(out, "   ❌ {} {name}", "Failed to store:".red())?;
        }
    }

    writeln!(out, "   {stored}/{} datasets stored", records.len())?;
    Ok(stored)
}

/// Run the sample queries and list the hits of each.
pub fn run_queries<W: Write>(client: &CatalogClient, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n🔍 Demonstrating MeTTa Knowledge Graph Queries")?;
    writeln!(out, "{RULE}")?;

    for (n, query) in sample_queries().iter().enumerate() {
        writeln!(out, "\n{}. {}:", n + 1, query.title)?;

        let hits = client.query_datasets(&query.filters);
        if hits.is_empty() {
            writeln!(out, "   {}", "(no datasets)".dimmed())?;
        }
        for hit in &hits {
            writeln!(
                out,
                "   - {} ({}: {})",
                dataset_name(hit),
                query.label,
                field(hit, query.detail)
            )?;
        }
    }
    Ok(())
}

/// Submit a validation update for `token_id`, then show the dataset and its
/// provenance as the catalog now reports them.
pub fn run_updates<W: Write>(
    client: &CatalogClient,
    token_id: &str,
    out: &mut W,
) -> io::Result<bool> {
    writeln!(out, "\n🔄 Demonstrating MeTTa Knowledge Graph Updates")?;
    writeln!(out, "{RULE}")?;

    let update = ValidationUpdate::new(
        ValidationStatus::Verified,
        95,
        "QmNewAttestation123",
        "0xNewValidator123",
    );

    let updated = client.update_validation(token_id, &update);
    if updated {
        writeln!(out, "✅ Updated validation for token {token_id}")?;
    } else {
        writeln!(out, "❌ Failed to update validation for token {token_id}")?;
    }

    if let Some(dataset) = client.get_dataset(token_id) {
        writeln!(out, "📊 Updated dataset: {}", dataset_name(&dataset))?;
        writeln!(out, "   Quality Score: {}", field(&dataset, &["validation", "score"]))?;
        writeln!(out, "   Status: {}", field(&dataset, &["validation", "status"]))?;
    }

    if let Some(provenance) = client.get_provenance(token_id) {
        writeln!(out, "🧬 Provenance for token {token_id}:")?;
        let rendered = serde_json::to_string_pretty(&provenance).unwrap_or_default();
        for line in rendered.lines() {
            writeln!(out, "   {line}")?;
        }
    }

    Ok(updated)
}
