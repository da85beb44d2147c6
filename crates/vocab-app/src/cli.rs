use std::path::PathBuf;

use clap::Parser;
use vocab_config::ConfigOverrides;

/// Turn e-reader vocabulary lookups into flashcard CSV
#[derive(Debug, Parser)]
#[command(name = "vocab-deck", version)]
pub struct Cli {
    /// Application ID from the dictionary service
    #[arg(long = "app_id")]
    pub app_id: Option<String>,

    /// Application key from the dictionary service
    #[arg(long = "app_key")]
    pub app_key: Option<String>,

    /// The absolute path to your vocab.db file
    #[arg(long = "vocab")]
    pub vocab: Option<PathBuf>,

    /// Clear vocab.db at the end of a successful run
    #[arg(long, overrides_with = "no_clear")]
    pub clear: bool,

    #[arg(long = "no-clear", overrides_with = "clear")]
    pub no_clear: bool,

    /// Service language code for words without a stored language (default en-us)
    #[arg(long)]
    pub lang: Option<String>,

    /// Skip reading the vocab database and reuse existing chunk files
    #[arg(long, overrides_with = "no_skip")]
    pub skip: bool,

    #[arg(long = "no-skip", overrides_with = "skip")]
    pub no_skip: bool,

    /// Words per chunk file (default 30)
    #[arg(long = "chunk-size")]
    pub chunk_size: Option<usize>,

    /// Read at most this many words from the database
    #[arg(long, overrides_with = "no_limit")]
    pub limit: Option<usize>,

    /// Drop a stored --limit and read every word
    #[arg(long = "no-limit", overrides_with = "limit")]
    pub no_limit: bool,

    /// Base URL of the dictionary API
    #[arg(long = "api-url")]
    pub api_url: Option<String>,

    /// Directory for the config, chunk files and exports
    #[arg(long = "data-dir", default_value = "data")]
    pub data_dir: PathBuf,
}

fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Cli {
    /// Only flags that were actually passed override the stored config
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            app_id: self.app_id.clone(),
            app_key: self.app_key.clone(),
            api_url: self.api_url.clone(),
            vocab_path: self.vocab.clone(),
            clear: flag(self.clear, self.no_clear),
            lang: self.lang.clone(),
            skip: flag(self.skip, self.no_skip),
            chunk_size: self.chunk_size,
            limit: if self.no_limit {
                Some(None)
            } else {
                self.limit.map(Some)
            },
        }
    }
}
