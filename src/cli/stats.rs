//! Statistics command handler.

use super::{emit, Workspace};
use crate::config::AppConfig;
use crate::model::CatalogFilter;
use crate::stats::StatisticsEngine;
use anyhow::Result;

/// Compute and report corpus statistics, optionally filtered.
///
/// Unreadable documents never fail the command; they are listed in the
/// report's `skipped` section.
pub fn run_stats(config: &AppConfig, filter: &CatalogFilter) -> Result<()> {
    let workspace = Workspace::from_config(config)?;
    let filter = (!filter.is_empty()).then_some(filter);
    let stats = StatisticsEngine::new().compute(&workspace.catalog, &workspace.store, filter);
    emit(&config.output, |reporter| reporter.stats_report(&stats, filter))
}
