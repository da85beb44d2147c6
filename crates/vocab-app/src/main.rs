use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vocab_config::ConfigStore;
use vocab_core::{ChunkStore, Pipeline, StdinPrompt};
use vocab_lexicon::{Credentials, LexicalService, OxfordDictionary};

mod cli;

use self::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout is reserved for the definition prompt
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ConfigStore::new(&cli.data_dir)
        .load_and_merge(cli.overrides())
        .context("Failed to load configuration")?;

    let service = OxfordDictionary::new(
        config.lexicon.api_url.clone(),
        Credentials {
            app_id: config.lexicon.app_id.clone(),
            app_key: config.lexicon.app_key.clone(),
        },
    );
    tracing::info!("Fetching definitions from {}", service.metadata().name);

    let prompt = StdinPrompt::stdio();
    let pipeline = Pipeline::new(&config, ChunkStore::new(&cli.data_dir), &service, &prompt);
    tracing::info!("Stages: {:?}", pipeline.plan());

    let report = pipeline.run().await.context("Run aborted")?;

    tracing::info!(
        "Processed {} chunks ({} reused), {} words, {} typed by hand",
        report.chunks_processed,
        report.chunks_reused,
        report.words_looked_up,
        report.manual_definitions
    );
    if let Some(cleared) = report.cleared_lookups {
        tracing::info!("Cleared {} lookups from the vocabulary database", cleared);
    }
    tracing::info!("Flashcards written to {}", pipeline.store().merged_path().display());

    Ok(())
}
