//! CLI entrypoint for simtriage
//!
//! Wires together all layers using dependency injection: configuration →
//! corpus store → optional gateway → use cases.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simtriage_application::{
    ClassifyRequestUseCase, ProcessBatchUseCase, SynthesizeStepsUseCase,
};
use simtriage_domain::CorpusStore;
use simtriage_infrastructure::{load_corpus, ConfigLoader, FileConfig, OpenAiGateway};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simtriage", version, about)]
struct Cli {
    /// Path to a config file (overrides ./simtriage.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip config file discovery and use built-in defaults
    #[arg(long, global = true, conflicts_with = "config")]
    no_config: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify one request and synthesize its step list
    Predict {
        /// The customer request text
        request: String,
    },
    /// Process a file of requests (one per line) into a JSON array
    Batch {
        /// Input file with one request per non-empty line
        #[arg(long)]
        input: PathBuf,
        /// Output file for the JSON array of results
        #[arg(long, default_value = "results.json")]
        output: PathBuf,
    },
    /// Show corpus size and per-category exemplar counts
    Corpus,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let corpus = load_corpus(&config.corpus.path).with_context(|| {
        format!("Failed to load corpus from {}", config.corpus.path.display())
    })?;

    match cli.command {
        Command::Predict { request } => predict(&config, &corpus, &request).await,
        Command::Batch { input, output } => batch(&config, &corpus, &input, &output).await,
        Command::Corpus => {
            corpus_stats(&corpus);
            Ok(())
        }
    }
}

/// Assemble the pipeline. A missing credential yields `gateway = None`,
/// which routes every model-backed operation to its fallback path.
fn build_pipeline(config: &FileConfig) -> ProcessBatchUseCase {
    let gateway = OpenAiGateway::from_env(config.request_timeout())
        .map(|g| Arc::new(g) as Arc<dyn simtriage_application::LlmGateway>);
    let settings = config.model_settings();

    ProcessBatchUseCase::new(
        ClassifyRequestUseCase::new(gateway.clone(), settings.clone()),
        SynthesizeStepsUseCase::new(gateway, settings),
    )
    .with_exemplar_limit(config.corpus.exemplar_limit)
}

async fn predict(config: &FileConfig, corpus: &CorpusStore, request: &str) -> Result<()> {
    let pipeline = build_pipeline(config);
    let result = pipeline.process_one(request, corpus).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn batch(
    config: &FileConfig,
    corpus: &CorpusStore,
    input: &PathBuf,
    output: &PathBuf,
) -> Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read requests from {}", input.display()))?;
    let requests: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    info!(count = requests.len(), "Loaded requests");

    let pipeline = build_pipeline(config);
    let results = pipeline.execute(&requests, corpus).await;

    let file = std::fs::File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    serde_json::to_writer_pretty(file, &results)?;

    println!("Wrote {} results to {}", results.len(), output.display());
    for (i, (request, result)) in requests.iter().zip(&results).enumerate() {
        let preview: String = request.chars().take(60).collect();
        println!();
        println!("Request {}: {}", i + 1, preview);
        println!("  Category: {}", result.category);
        println!("  Steps: {}", result.steps.len());
        if result.is_fallback() {
            println!("  (fallback result)");
        }
    }
    Ok(())
}

fn corpus_stats(corpus: &CorpusStore) {
    println!("Corpus: {} exemplars", corpus.len());
    for (category, count) in corpus.category_counts() {
        println!("  {:<40} {}", category.to_string(), count);
    }
}
