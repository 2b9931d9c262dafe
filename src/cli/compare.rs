//! Pairwise comparison command handlers.

use super::{emit, exit_codes, Workspace};
use crate::config::AppConfig;
use crate::diff::DiffEngine;
use crate::similarity::TermSimilarityEngine;
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_diff(config: &AppConfig, first: &str, second: &str) -> Result<i32> {
    let workspace = Workspace::from_config(config)?;
    let result = DiffEngine::new().diff_stored(&workspace.store, first, second)?;

    tracing::info!(
        "Diff {} vs {}: {} only in first, {} only in second",
        first,
        second,
        result.only_in_first.len(),
        result.only_in_second.len()
    );

    emit(&config.output, |reporter| {
        reporter.diff_report(first, second, &result)
    })?;

    if config.behavior.fail_on_change && !result.is_identical() {
        return Ok(exit_codes::CHANGES_DETECTED);
    }
    Ok(exit_codes::SUCCESS)
}

/// Run the compare-terms command.
pub fn run_compare_terms(config: &AppConfig, first: &str, second: &str) -> Result<()> {
    let workspace = Workspace::from_config(config)?;
    let result = TermSimilarityEngine::new().compare_stored(&workspace.store, first, second)?;
    tracing::info!(
        "Term similarity {} vs {}: {:.3}",
        first,
        second,
        result.similarity_score
    );
    emit(&config.output, |reporter| {
        reporter.similarity_report(first, second, &result)
    })
}
