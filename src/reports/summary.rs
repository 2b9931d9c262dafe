//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffResult;
use crate::ingest::ImportSummary;
use crate::model::{CatalogFilter, CatalogRecord, Component, SbomDocument};
use crate::similarity::SimilarityResult;
use crate::stats::{CorpusStatistics, Distribution};
use serde_json::Value;

/// Distribution entries shown per section.
const DISTRIBUTION_ROWS: usize = 10;

/// Components listed per diff side before eliding the rest.
const DIFF_ROWS: usize = 20;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn header(&self, lines: &mut Vec<String>, title: &str) {
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
    }

    fn field(&self, label: &str, value: impl std::fmt::Display) -> String {
        format!("{}  {}", self.color(label, "cyan"), value)
    }

    fn distribution(&self, lines: &mut Vec<String>, title: &str, dist: &Distribution) {
        if dist.is_empty() {
            return;
        }
        lines.push(String::new());
        lines.push(self.color(title, "bold"));
        for (value, count) in dist.iter().take(DISTRIBUTION_ROWS) {
            lines.push(format!("  {count:>6}  {value}"));
        }
        if dist.len() > DISTRIBUTION_ROWS {
            lines.push(self.color(
                &format!("  ... and {} more", dist.len() - DISTRIBUTION_ROWS),
                "dim",
            ));
        }
    }

    fn component_list(&self, lines: &mut Vec<String>, marker: &str, color: &str, values: &[Value]) {
        for component in values.iter().take(DIFF_ROWS) {
            let component = Component::from_value(component);
            lines.push(format!(
                "  {} {}",
                self.color(marker, color),
                component.display_name()
            ));
        }
        if values.len() > DIFF_ROWS {
            lines.push(self.color(&format!("    ... and {} more", values.len() - DIFF_ROWS), "dim"));
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn diff_report(&self, first: &str, second: &str, result: &DiffResult) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.header(&mut lines, "SBOM Diff Summary");
        lines.push(self.field("Files:", format!("{first} → {second}")));
        lines.push(self.field(
            "Size:",
            format!(
                "{} → {} distinct components ({} in common)",
                result.summary.first_total, result.summary.second_total, result.summary.common
            ),
        ));
        lines.push(String::new());

        if result.is_identical() {
            lines.push(format!("  {}", self.color("No differences", "dim")));
            return Ok(lines.join("\n"));
        }

        let removed = result.only_in_first.len();
        let added = result.only_in_second.len();
        if removed > 0 {
            lines.push(self.color(
                &format!("Only in {first} ({removed} {}):", plural(removed, "component", "components")),
                "bold",
            ));
            self.component_list(&mut lines, "-", "red", &result.only_in_first);
        }
        if added > 0 {
            if removed > 0 {
                lines.push(String::new());
            }
            lines.push(self.color(
                &format!("Only in {second} ({added} {}):", plural(added, "component", "components")),
                "bold",
            ));
            self.component_list(&mut lines, "+", "green", &result.only_in_second);
        }
        Ok(lines.join("\n"))
    }

    fn similarity_report(
        &self,
        first: &str,
        second: &str,
        result: &SimilarityResult,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.header(&mut lines, "Term Similarity");
        lines.push(self.field("Files:", format!("{first} ↔ {second}")));

        let percent = result.similarity_score * 100.0;
        let score_color = if percent > 90.0 {
            "green"
        } else if percent > 50.0 {
            "yellow"
        } else {
            "red"
        };
        lines.push(self.field(
            "Similarity:",
            self.color(&format!("{percent:.1}%"), score_color),
        ));
        lines.push(self.field(
            "Terms:",
            format!(
                "{} / {} distinct, {} shared",
                result.term_types.first, result.term_types.second, result.term_types.common
            ),
        ));

        if !result.common_terms.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Top common terms:", "bold"));
            for (term, counts) in result.common_terms.iter().take(DISTRIBUTION_ROWS) {
                lines.push(format!(
                    "  {:>6}  {term} ({} + {})",
                    counts.total, counts.file1_count, counts.file2_count
                ));
            }
        }
        for (title, terms) in [
            (format!("Only in {first}:"), &result.unique_to_first),
            (format!("Only in {second}:"), &result.unique_to_second),
        ] {
            if terms.is_empty() {
                continue;
            }
            lines.push(String::new());
            lines.push(self.color(&title, "bold"));
            for (term, count) in terms.iter().take(DISTRIBUTION_ROWS) {
                lines.push(format!("  {count:>6}  {term}"));
            }
        }
        Ok(lines.join("\n"))
    }

    fn stats_report(
        &self,
        stats: &CorpusStatistics,
        filter: Option<&CatalogFilter>,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.header(&mut lines, "SBOM Corpus Statistics");
        if let Some(filter) = filter.filter(|f| !f.is_empty()) {
            lines.push(self.field("Filter:", filter.description()));
        }
        lines.push(self.field(
            "SBOMs:",
            format!("{} ({} readable)", stats.total_sboms, stats.readable_sboms),
        ));
        lines.push(self.field("Components:", stats.total_components));
        lines.push(self.field(
            "Average:",
            format!(
                "{:.1} components, {:.1} unique licenses per SBOM",
                stats.average_components_per_sbom, stats.average_unique_licenses
            ),
        ));

        self.distribution(&mut lines, "Operating systems:", &stats.os_distribution);
        self.distribution(&mut lines, "Categories:", &stats.category_distribution);
        self.distribution(&mut lines, "Binary types:", &stats.binary_type_distribution);
        self.distribution(&mut lines, "Top suppliers:", &stats.supplier_distribution);
        self.distribution(&mut lines, "Top manufacturers:", &stats.manufacturer_distribution);
        self.distribution(&mut lines, "Top licenses:", &stats.license_distribution);

        lines.push(String::new());
        lines.push(self.color("Platforms:", "bold"));
        for (platform, p) in &stats.platforms {
            lines.push(format!(
                "  {:<8} {:>4} {}  {:>7} components  {:.1} avg",
                platform.to_string(),
                p.count,
                plural(p.count, "SBOM ", "SBOMs"),
                p.total_components,
                p.average_components
            ));
        }

        if stats.has_partial_failure() {
            lines.push(String::new());
            lines.push(self.color(
                &format!(
                    "Skipped {} unreadable {}:",
                    stats.skipped.len(),
                    plural(stats.skipped.len(), "document", "documents")
                ),
                "yellow",
            ));
            for skip in &stats.skipped {
                lines.push(format!("  {} ({})", skip.filename, skip.reason));
            }
        }
        Ok(lines.join("\n"))
    }

    fn records_report(&self, records: &[CatalogRecord]) -> Result<String, ReportError> {
        if records.is_empty() {
            return Ok(self.color("No SBOMs cataloged", "dim"));
        }
        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(self.color(
            &format!(
                "{:<40} {:<20} {:<14} {:<10} {:>6} {:>8}",
                "FILENAME", "APP", "OS", "TYPE", "COMPS", "LICENSES"
            ),
            "bold",
        ));
        for r in records {
            lines.push(format!(
                "{:<40} {:<20} {:<14} {:<10} {:>6} {:>8}",
                r.filename,
                r.app_name,
                r.os_or_unknown(),
                r.binary_type_or_unknown(),
                r.total_components,
                r.unique_licenses
            ));
        }
        Ok(lines.join("\n"))
    }

    fn document_report(
        &self,
        doc: &SbomDocument,
        record: Option<&CatalogRecord>,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.header(&mut lines, "SBOM Summary");
        lines.push(self.field("File:", &doc.filename));
        lines.push(self.field("Format:", doc.dialect()));
        lines.push(self.field("Components:", doc.component_count()));
        lines.push(self.field("Licenses:", format!("{} distinct", doc.unique_license_count())));

        if let Some(r) = record {
            lines.push(String::new());
            lines.push(self.color("Catalog:", "bold"));
            lines.push(format!("  App:           {}", r.app_name));
            lines.push(format!("  Version:       {}", r.version.as_deref().unwrap_or("-")));
            lines.push(format!("  Category:      {}", r.category_or_unknown()));
            lines.push(format!("  OS:            {}", r.os_or_unknown()));
            lines.push(format!("  Binary type:   {}", r.binary_type_or_unknown()));
            lines.push(format!("  Supplier:      {}", r.supplier_or_unknown()));
            lines.push(format!("  Manufacturer:  {}", r.manufacturer_or_unknown()));
            lines.push(format!("  Uploaded:      {}", r.upload_date.format("%Y-%m-%d %H:%M UTC")));
        }

        let components = doc.normalized();
        if !components.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Components:", "bold"));
            for c in &components {
                lines.push(format!("  {}  {}", c.display_name(), self.color(&c.licenses.join(", "), "dim")));
            }
        }
        Ok(lines.join("\n"))
    }

    fn search_report(&self, filename: &str, keyword: &str, hits: &[Value]) -> Result<String, ReportError> {
        let mut lines = vec![format!(
            "{} {} in {} matching '{}'",
            self.color(&hits.len().to_string(), "bold"),
            plural(hits.len(), "component", "components"),
            filename,
            keyword
        )];
        for hit in hits {
            lines.push(format!("  {}", Component::from_value(hit).display_name()));
        }
        Ok(lines.join("\n"))
    }

    fn import_report(&self, summary: &ImportSummary) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.header(&mut lines, "Import Summary");
        lines.push(format!(
            "  {} imported, {} already cataloged, {} failed",
            self.color(&summary.imported.len().to_string(), "green"),
            summary.skipped.len(),
            self.color(
                &summary.failed.len().to_string(),
                if summary.has_failures() { "red" } else { "dim" }
            )
        ));
        for name in &summary.imported {
            lines.push(format!("  {} {name}", self.color("+", "green")));
        }
        for failure in &summary.failed {
            lines.push(format!(
                "  {} {}: {}",
                self.color("!", "red"),
                failure.filename,
                failure.reason
            ));
        }
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
