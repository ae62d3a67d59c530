//! Batch processing and export for the `run` and `demo` commands.
//!
//! Export failures are logged and skipped rather than propagated so one
//! unwritable output does not cost the other.

use std::fmt::Write as _;
use std::path::PathBuf;

use labelnorm_core::LabelPair;
use labelnorm_pipeline::LabelNormalizer;

/// Labels used by `labelnorm demo`.
pub(crate) const SAMPLE_LABELS: &[&str] = &[
    "6X30G CHIPS LISSE NAT CRF CLAS",
    "1L PET PUR JUS POMME CRF EXTRA",
    "PAPERMATE 4 Magic+ effaceurs fins réécr",
    "Désodorisant 2.5ml 4scent",
    "5 BQ ALU 1,5L PROFONDE",
];

#[derive(Debug, Clone)]
pub(crate) struct ExportOptions {
    /// Output path without extension.
    pub stem: String,
    pub xlsx: bool,
}

impl ExportOptions {
    fn path_with(&self, extension: &str) -> PathBuf {
        PathBuf::from(format!("{}.{extension}", self.stem))
    }
}

/// Normalizes `labels`, exports the results and prints a summary with a
/// preview of the first `preview_count` pairs.
pub(crate) fn process_labels<S: AsRef<str>>(
    normalizer: &LabelNormalizer,
    labels: &[S],
    options: &ExportOptions,
    preview_count: usize,
) {
    if labels.is_empty() {
        println!("no labels to process");
        return;
    }

    println!("processing {} labels...", labels.len());
    let pairs = normalizer.normalize_batch(labels);
    let written = export_batch(&pairs, options);

    println!();
    println!("summary:");
    println!("  labels processed: {}", pairs.len());
    if written.is_empty() {
        println!("  files written:    none");
    } else {
        let names: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
        println!("  files written:    {}", names.join(", "));
    }

    if preview_count > 0 && !pairs.is_empty() {
        println!();
        println!("preview:");
        print!("{}", render_preview(&pairs, preview_count));
    }
}

/// Writes the TSV and, when enabled, the spreadsheet export. Returns the
/// paths that were written successfully.
pub(crate) fn export_batch(pairs: &[LabelPair], options: &ExportOptions) -> Vec<PathBuf> {
    let mut written = Vec::new();

    let tsv_path = options.path_with("tsv");
    match labelnorm_export::write_tsv(pairs, &tsv_path) {
        Ok(()) => written.push(tsv_path),
        Err(e) => tracing::error!(error = %e, "TSV export failed"),
    }

    if options.xlsx {
        let xlsx_path = options.path_with("xlsx");
        match labelnorm_export::write_xlsx(pairs, &xlsx_path) {
            Ok(()) => written.push(xlsx_path),
            Err(e) => tracing::error!(error = %e, "spreadsheet export failed"),
        }
    }

    written
}

/// Numbered `original → normalized` listing of the first `limit` pairs.
pub(crate) fn render_preview(pairs: &[LabelPair], limit: usize) -> String {
    let mut out = String::new();
    for (i, pair) in pairs.iter().take(limit).enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{:2}. {}", i + 1, pair.original);
        let _ = writeln!(out, "    → {}", pair.normalized);
    }
    out
}

/// Prints each label's normalized form, or all records as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn print_normalized(
    normalizer: &LabelNormalizer,
    labels: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let results: Vec<_> = labels.iter().map(|label| normalizer.normalize(label)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for label in &results {
            println!("{} → {}", label.original, label.normalized);
        }
    }
    Ok(())
}
