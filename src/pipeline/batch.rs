// Batch labeling: one engine call per document, fanned out concurrently.
//
// Labeling is CPU-bound, so each document runs on tokio's blocking pool.
// `buffered` bounds how many run at once and keeps results in input order,
// which keeps batch output reproducible.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use crate::label::{LabelGenerator, LabelResult};

/// One article's text, identified by a caller-chosen name (usually a file name).
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub text: String,
}

/// A document and the labels generated for it.
#[derive(Debug, Clone, Serialize)]
pub struct LabeledDocument {
    pub name: String,
    #[serde(flatten)]
    pub result: LabelResult,
}

/// A document that could not be labeled, with the reason.
#[derive(Debug, Clone, Serialize)]
pub struct FailedDocument {
    pub name: String,
    pub error: String,
}

/// Everything a batch run produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub labeled: Vec<LabeledDocument>,
    pub failed: Vec<FailedDocument>,
}

impl BatchReport {
    /// Documents that passed the length gate and got at least one label.
    pub fn labeled_count(&self) -> usize {
        self.labeled.iter().filter(|d| !d.result.is_empty()).count()
    }

    /// Documents that passed the length gate but yielded no labels.
    pub fn empty_count(&self) -> usize {
        self.labeled
            .iter()
            .filter(|d| !d.result.is_too_short && d.result.is_empty())
            .count()
    }

    pub fn too_short_count(&self) -> usize {
        self.labeled.iter().filter(|d| d.result.is_too_short).count()
    }
}

/// Options for a batch run.
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub max_labels: i64,
    /// Maximum documents labeled at the same time (at least 1)
    pub concurrency: usize,
    /// Draw a progress bar on stderr
    pub progress: bool,
}

/// Read every regular file in `dir` as a document, sorted by file name.
///
/// Files that can't be read as UTF-8 text are returned as failures rather
/// than aborting the whole directory.
pub fn load_directory(dir: &Path) -> Result<(Vec<Document>, Vec<FailedDocument>)> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    let mut failed = Vec::new();

    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match fs::read_to_string(&path) {
            Ok(text) => documents.push(Document { name, text }),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Failed to read document, skipping");
                failed.push(FailedDocument {
                    name,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok((documents, failed))
}

/// Label `documents` with `generator`, at most `options.concurrency` at a time.
///
/// Results come back in the same order as `documents`. A panicking worker
/// is recorded as a failure for its document only.
pub async fn label_documents(
    generator: Arc<dyn LabelGenerator>,
    documents: Vec<Document>,
    options: BatchOptions,
) -> BatchReport {
    let total = documents.len();
    let concurrency = options.concurrency.max(1);
    let max_labels = options.max_labels;

    info!(
        documents = total,
        concurrency,
        generator = generator.name(),
        "Starting batch labeling"
    );

    let pb = if options.progress {
        let pb = ProgressBar::new(total as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("  Labeling [{bar:30}] {pos}/{len} ({eta})")
        {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<(String, Result<LabelResult>)> =
        stream::iter(documents.into_iter().map(|doc| {
            let generator = Arc::clone(&generator);
            let pb = pb.clone();
            async move {
                let Document { name, text } = doc;
                let result = tokio::task::spawn_blocking(move || {
                    generator.generate(&text, max_labels)
                })
                .await
                .context("labeling task panicked");
                pb.inc(1);
                (name, result)
            }
        }))
        .buffered(concurrency)
        .collect()
        .await;
    pb.finish_and_clear();

    let mut report = BatchReport::default();
    for (name, result) in results {
        match result {
            Ok(result) => report.labeled.push(LabeledDocument { name, result }),
            Err(e) => {
                warn!(document = %name, error = %e, "Failed to label document");
                report.failed.push(FailedDocument {
                    name,
                    error: format!("{e:#}"),
                });
            }
        }
    }

    info!(
        labeled = report.labeled_count(),
        empty = report.empty_count(),
        too_short = report.too_short_count(),
        failed = report.failed.len(),
        "Batch labeling finished"
    );

    report
}

/// Load a directory and label everything in it.
pub async fn label_directory(
    generator: Arc<dyn LabelGenerator>,
    dir: &Path,
    options: BatchOptions,
) -> Result<BatchReport> {
    let (documents, read_failures) = load_directory(dir)?;
    let mut report = label_documents(generator, documents, options).await;
    let mut failed = read_failures;
    failed.append(&mut report.failed);
    report.failed = failed;
    Ok(report)
}
