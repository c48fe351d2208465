use std::env;

use anyhow::{Context, Result};

use crate::label::MAX_LABELS;

/// Default number of documents labeled in parallel by `batch`.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored, human-readable terminal output (default)
    Text,
    /// One JSON document on stdout
    Json,
}

/// Settings loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Every value has a
/// default, and command-line flags override whatever is set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Requested label count (FEEDLABEL_MAX_LABELS). Passed to the engine
    /// as-is; out-of-range values are clamped there, not here.
    pub max_labels: i64,
    /// Documents labeled in parallel (FEEDLABEL_CONCURRENCY)
    pub concurrency: usize,
    /// Output format (FEEDLABEL_OUTPUT = "text" | "json")
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_labels: MAX_LABELS as i64,
            concurrency: DEFAULT_CONCURRENCY,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. `load` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_labels = match lookup("FEEDLABEL_MAX_LABELS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("FEEDLABEL_MAX_LABELS is not an integer: {raw:?}"))?,
            None => defaults.max_labels,
        };

        let concurrency = match lookup("FEEDLABEL_CONCURRENCY") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("FEEDLABEL_CONCURRENCY is not a number: {raw:?}"))?,
            None => defaults.concurrency,
        };
        if concurrency == 0 {
            anyhow::bail!("FEEDLABEL_CONCURRENCY must be at least 1");
        }

        let output = match lookup("FEEDLABEL_OUTPUT").as_deref().map(str::trim) {
            Some("json") => OutputFormat::Json,
            Some("text") | Some("") | None => OutputFormat::Text,
            Some(other) => anyhow::bail!(
                "FEEDLABEL_OUTPUT must be \"text\" or \"json\", got {other:?}"
            ),
        };

        Ok(Self {
            max_labels,
            concurrency,
            output,
        })
    }
}
