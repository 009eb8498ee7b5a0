use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use engine::{Analyzer, Config, FileTextExtractor, RelevanceJitter, TextExtractor, Vocabulary};

/// Heuristic resume analysis engine.
#[derive(Debug, Parser)]
#[command(name = "engine", version)]
struct Cli {
    /// Resume file to analyze (.pdf; .doc/.docx/.jpg/.jpeg/.png are
    /// extracted by the upload service)
    file: PathBuf,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Resume analysis engine v{}", env!("CARGO_PKG_VERSION"));

    let document = FileTextExtractor.extract(&cli.file)?;
    info!(
        file = %document.file_name,
        chars = document.text.len(),
        "Text extracted"
    );

    let jitter = match config.relevance_seed {
        Some(seed) => RelevanceJitter::seeded(seed),
        None => RelevanceJitter::from_entropy(),
    };

    let mut analyzer = Analyzer::new(Vocabulary::default(), jitter);
    let result = analyzer.analyze(&document);
    info!(
        overall = result.overall_score,
        ats = result.ats_score,
        recommendations = result.recommendations.len(),
        "Analysis complete"
    );

    let json = if cli.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{json}");

    Ok(())
}
