//! docsim command-line entrypoint.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use docsim::config::Config;
use docsim::embedding::{EmbeddingProvider, MiniLmEmbedder};
use docsim::extraction::{Document, TesseractExtractor};
use docsim::pipeline::ComparisonPipeline;
use docsim::report::ComparisonReport;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

type Pipeline = ComparisonPipeline<TesseractExtractor, MiniLmEmbedder>;

#[derive(Debug, Parser)]
#[command(name = "docsim", version, about = "Compare two scanned documents for textual similarity")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// MiniLM model directory (overrides DOCSIM_MODEL_PATH)
    #[arg(long, global = true, value_name = "DIR")]
    model_path: Option<PathBuf>,

    /// Use deterministic stub embeddings instead of a model
    #[arg(long, global = true, conflicts_with = "model_path")]
    stub: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Per-document extraction budget in seconds; 0 disables it
    #[arg(long, global = true, value_name = "SECS")]
    extract_timeout: Option<u64>,

    /// Per-text embedding budget in seconds; 0 disables it
    #[arg(long, global = true, value_name = "SECS")]
    embed_timeout: Option<u64>,

    /// Lowercase text before embedding
    #[arg(long, global = true)]
    fold_case: bool,

    /// Drop punctuation before embedding
    #[arg(long, global = true)]
    strip_punctuation: bool,

    /// Keep inference on the CPU even when a GPU backend is compiled in
    #[arg(long, global = true)]
    no_gpu: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare two documents and exit
    Compare {
        /// First document (image, PDF or plain text)
        a: PathBuf,
        /// Second document
        b: PathBuf,
    },
    /// Prompt for document pairs until EOF or `quit`
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    let pipeline = build_pipeline(&config, cli.no_gpu)?;

    match cli.command {
        Command::Compare { ref a, ref b } => {
            let report = compare(&pipeline, a, b).await?;
            print_report(&report, cli.json)?;
        }
        Command::Interactive => run_interactive(&pipeline, cli.json).await?,
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env().context("failed to read DOCSIM_* environment")?;

    if cli.stub {
        config.model_path = None;
    } else if let Some(path) = &cli.model_path {
        config.model_path = Some(path.clone());
    }
    if let Some(secs) = cli.extract_timeout {
        config.extract_timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }
    if let Some(secs) = cli.embed_timeout {
        config.embed_timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }
    config.fold_case |= cli.fold_case;
    config.strip_punctuation |= cli.strip_punctuation;

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn build_pipeline(config: &Config, no_gpu: bool) -> Result<Pipeline> {
    let minilm_config = config.minilm_config().with_allow_gpu(!no_gpu);
    if minilm_config.testing_stub {
        tracing::warn!("No DOCSIM_MODEL_PATH configured, running embedder in stub mode");
    }
    let embedder = MiniLmEmbedder::load(minilm_config).context("failed to load embedding model")?;
    let extractor = TesseractExtractor::new(config.tesseract_config());

    tracing::info!(
        stub = embedder.is_stub(),
        dim = embedder.embedding_dim(),
        ocr_lang = %config.ocr_lang,
        "docsim ready"
    );

    Ok(ComparisonPipeline::with_config(
        extractor,
        embedder,
        config.pipeline_config(),
    ))
}

async fn compare(pipeline: &Pipeline, a: &Path, b: &Path) -> Result<ComparisonReport> {
    let doc_a = Document::from_path(a).with_context(|| format!("cannot compare {}", a.display()))?;
    let doc_b = Document::from_path(b).with_context(|| format!("cannot compare {}", b.display()))?;

    let result = pipeline.compare_documents(&doc_a, &doc_b).await?;
    Ok(ComparisonReport::new(&doc_a, &doc_b, result)
        .with_stub_embeddings(pipeline.embedder().is_stub()))
}

fn print_report(report: &ComparisonReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}

async fn run_interactive(pipeline: &Pipeline, json: bool) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some(a) = prompt(&mut lines, "Document A: ").await? else {
            break;
        };
        let Some(b) = prompt(&mut lines, "Document B: ").await? else {
            break;
        };

        match compare(pipeline, &a, &b).await {
            Ok(report) => print_report(&report, json)?,
            Err(e) => {
                tracing::debug!(error = ?e, "Comparison failed");
                eprintln!("error: {e:#}");
            }
        }
        println!();
    }

    Ok(())
}

/// Reads one path. `None` on EOF, a blank line, or `quit`/`exit`.
async fn prompt<R>(lines: &mut tokio::io::Lines<R>, label: &str) -> Result<Option<PathBuf>>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    let mut stdout = tokio::io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;

    let Some(line) = lines.next_line().await? else {
        return Ok(None);
    };

    let entry = line.trim().trim_matches(|c| c == '"' || c == '\'');
    if entry.is_empty() || entry.eq_ignore_ascii_case("quit") || entry.eq_ignore_ascii_case("exit")
    {
        return Ok(None);
    }

    Ok(Some(PathBuf::from(entry)))
}
