use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use cinder::config::Config;
use cinder::keywords::analyzer::TfIdfAnalyzer;
use cinder::keywords::scorer::KeywordScorer;
use cinder::keywords::segment::SegmenterBackend;
use cinder::resources::Resources;

/// Cinder: TF-IDF keyword extraction.
///
/// Ranks the terms of a short document by how distinctive they are,
/// using a precomputed IDF dictionary and a stopword list.
#[derive(Parser)]
#[command(name = "cinder", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the top keywords from a document
    Extract {
        /// Document text (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the document from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Number of keywords to return (default: CINDER_TOP_N or 5)
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// List the lowest-scoring keywords first
        #[arg(long)]
        ascending: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Segmenter to use: unicode or jieba (default: CINDER_SEGMENTER, else jieba when built in)
        #[arg(long)]
        segmenter: Option<SegmenterBackend>,
    },

    /// Show loaded resources (entry counts, skipped lines)
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging on stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cinder=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            text,
            file,
            top,
            ascending,
            json,
            segmenter,
        } => {
            let mut config = Config::load()?;
            if let Some(backend) = segmenter {
                config.segmenter = backend;
            }
            let n = top.unwrap_or(config.top_n);
            let highest_first = !ascending;

            let document = read_document(text, file)?;

            let resources = Resources::load(&config)?;
            let scorer = KeywordScorer::new(config.unknown_idf.resolve(&resources.idf));
            let analyzer = TfIdfAnalyzer::new(resources, config.segmenter.build()?, scorer);

            info!(
                chars = document.chars().count(),
                segmenter = %config.segmenter,
                n,
                "Extracting keywords"
            );
            let keywords = analyzer.analyze_top_n(Some(&document), highest_first, n);

            if json {
                println!("{}", cinder::output::to_json(&keywords)?);
            } else {
                cinder::output::terminal::display_keywords(&keywords, &document, highest_first);
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            let resources = Resources::load(&config)?;
            cinder::status::show(&config, &resources);
        }
    }

    Ok(())
}

/// Resolve the document from the positional argument, a file, or stdin.
fn read_document(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read document {}", path.display()));
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("No document given. Pass TEXT, --file PATH, or pipe text on stdin.");
    }
    let mut buf = String::new();
    stdin
        .lock()
        .read_to_string(&mut buf)
        .context("Failed to read document from stdin")?;
    Ok(buf)
}
