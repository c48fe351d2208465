use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use feedlabel::config::{Config, OutputFormat};
use feedlabel::label::preprocess::{ai_excerpt, clean};
use feedlabel::label::Labeler;
use feedlabel::output::{terminal, to_json};
use feedlabel::pipeline::batch::{self, BatchOptions};

/// feedlabel: generate short topic labels for feed articles.
///
/// Works offline on Latin-script and CJK text. Input may be plain text or
/// HTML; markup is stripped before labeling.
#[derive(Parser)]
#[command(name = "feedlabel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Label one article (reads stdin when no file is given)
    Label {
        /// Article file (text or HTML)
        file: Option<PathBuf>,

        /// Labels to generate, 1-5 (anything else means 5)
        #[arg(long, allow_negative_numbers = true)]
        max_labels: Option<i64>,

        /// Print JSON instead of colored text
        #[arg(long)]
        json: bool,
    },

    /// Label every file in a directory
    Batch {
        /// Directory of article files
        dir: PathBuf,

        /// Number of documents to label in parallel
        #[arg(long)]
        concurrency: Option<usize>,

        /// Labels to generate per document, 1-5 (anything else means 5)
        #[arg(long, allow_negative_numbers = true)]
        max_labels: Option<i64>,

        /// Print JSON instead of colored text
        #[arg(long)]
        json: bool,
    },

    /// Print the cleaned, length-capped excerpt that would be sent to an AI labeler
    Excerpt {
        /// Article file (reads stdin when omitted)
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("feedlabel=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Label {
            file,
            max_labels,
            json,
        } => {
            let text = read_input(file.as_deref())?;
            let max_labels = max_labels.unwrap_or(config.max_labels);
            let result = Labeler::new().generate_labels(&text, max_labels);

            if json || config.output == OutputFormat::Json {
                println!("{}", to_json(&result)?);
            } else {
                let source = file
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "stdin".to_string());
                terminal::display_result(&source, &clean(&text), &result);
            }
        }

        Commands::Batch {
            dir,
            concurrency,
            max_labels,
            json,
        } => {
            let json = json || config.output == OutputFormat::Json;
            let concurrency = concurrency.unwrap_or(config.concurrency);
            if concurrency == 0 {
                anyhow::bail!("--concurrency must be at least 1");
            }

            let options = BatchOptions {
                max_labels: max_labels.unwrap_or(config.max_labels),
                concurrency,
                progress: !json,
            };

            info!(dir = %dir.display(), "Labeling directory");
            let report = batch::label_directory(Arc::new(Labeler::new()), &dir, options).await?;

            if json {
                println!("{}", to_json(&report)?);
            } else {
                terminal::display_batch(&report);
            }
        }

        Commands::Excerpt { file } => {
            let text = read_input(file.as_deref())?;
            println!("{}", ai_excerpt(&text));
        }
    }

    Ok(())
}

/// Read article text from `path`, or from stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read article text from stdin")?;
            Ok(text)
        }
    }
}
