//! `search` command handler.

use std::path::PathBuf;

use prospecta_core::{AppConfig, CompanyRecord, ExistingCompanyIndex};
use prospecta_pipeline::{CancelSignal, ProspectingPipeline};
use prospecta_search::{RegistryClient, RegistryMatch};

const MISSING: &str = "\u{2014}";

#[derive(Debug)]
pub(crate) struct SearchArgs {
    pub keyword: String,
    pub limit: usize,
    pub existing: Option<PathBuf>,
    pub enrich: bool,
    pub export: bool,
}

/// Run one prospecting search and print the companies found.
///
/// Ctrl-C stops the run between two network calls; whatever was found by
/// then is still filtered, printed, and exported.
///
/// # Errors
///
/// Returns an error for a blank keyword, unusable search credentials, an
/// unreadable `--existing` file, or an invalid filter-table file. Search,
/// scraping, enrichment, and export failures are logged and do not fail the
/// command.
pub(crate) async fn run_search(config: &AppConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let existing = args
        .existing
        .as_deref()
        .map(ExistingCompanyIndex::load)
        .transpose()?;
    let pipeline = ProspectingPipeline::from_config(config)?;

    let cancel = CancelSignal::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupted, stopping after the current request");
                cancel.cancel();
            }
        })
    };

    let found = pipeline.run(&args.keyword, args.limit, &cancel).await;
    interrupt.abort();
    let mut records = found?;

    if let Some(index) = &existing {
        let (kept, dropped) = index.retain_new(records);
        tracing::info!(dropped, known = index.len(), "already-known companies removed");
        records = kept;
    }

    if records.is_empty() {
        println!("No companies found for \"{}\".", args.keyword);
        return Ok(());
    }

    let registry = if args.enrich {
        enrich(config, &records).await?
    } else {
        vec![None; records.len()]
    };

    println!("{} companies for \"{}\":", records.len(), args.keyword);
    for (record, registry_match) in records.iter().zip(&registry) {
        println!("  {}", format_company_line(record, registry_match.as_ref()));
    }

    if args.export {
        let written = prospecta_pipeline::export(&records, &args.keyword, &config.export_dir);
        if let Some(path) = written {
            println!("Exported to {}", path.display());
        }
    }

    Ok(())
}

async fn enrich(
    config: &AppConfig,
    records: &[CompanyRecord],
) -> anyhow::Result<Vec<Option<RegistryMatch>>> {
    let registry = RegistryClient::from_config(config)?;
    let mut matches = Vec::with_capacity(records.len());
    for record in records {
        matches.push(registry.lookup(&record.name).await);
    }
    let enriched = matches.iter().filter(|m| m.is_some()).count();
    tracing::info!(enriched, total = records.len(), "registry enrichment done");
    Ok(matches)
}

/// `Name | site | phone | email`, plus registry codes when known.
fn format_company_line(record: &CompanyRecord, registry: Option<&RegistryMatch>) -> String {
    let mut line = format!(
        "{} | {} | {} | {}",
        record.name,
        record.website,
        record.phone.as_deref().unwrap_or(MISSING),
        record.email.as_deref().unwrap_or(MISSING),
    );
    if let Some(found) = registry {
        line.push_str(&format!(
            " | SIREN {} | NAF {}",
            or_missing(&found.siren),
            or_missing(&found.naf)
        ));
    }
    line
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() {
        MISSING
    } else {
        value
    }
}
