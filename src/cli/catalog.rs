//! Catalog browsing command handlers: list, show, search.

use super::{emit, Workspace};
use crate::config::AppConfig;
use crate::model::CatalogFilter;
use crate::search::search_components;
use crate::store::{Catalog, DocumentStore};
use anyhow::Result;

/// List catalog records matching the filter.
pub fn run_list(config: &AppConfig, filter: &CatalogFilter) -> Result<()> {
    let workspace = Workspace::from_config(config)?;
    let filter = (!filter.is_empty()).then_some(filter);
    let records = workspace.catalog.list_records(filter);
    tracing::debug!("{} records listed", records.len());
    emit(&config.output, |reporter| reporter.records_report(&records))
}

/// Show a stored document together with its catalog record.
pub fn run_show(config: &AppConfig, filename: &str) -> Result<()> {
    let workspace = Workspace::from_config(config)?;
    let doc = workspace.store.load(filename)?;
    let record = workspace.catalog.get_record(filename);
    if record.is_none() {
        tracing::warn!("{} is stored but not cataloged", filename);
    }
    emit(&config.output, |reporter| {
        reporter.document_report(&doc, record.as_ref())
    })
}

/// Search one stored document's components for a keyword.
pub fn run_search(config: &AppConfig, filename: &str, keyword: &str) -> Result<()> {
    let workspace = Workspace::from_config(config)?;
    let doc = workspace.store.load(filename)?;
    let hits = search_components(&doc.content, keyword)?;
    emit(&config.output, |reporter| {
        reporter.search_report(filename, keyword, &hits)
    })
}
