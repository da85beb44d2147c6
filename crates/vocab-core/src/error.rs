use std::path::PathBuf;

use vocab_lexicon::LookupError;
use vocab_types::ChunkId;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Cannot read vocabulary database {path:?}: {source}")]
    DataAccess {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write export {path:?}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Chunk {0} has columns of different lengths")]
    MisalignedChunk(ChunkId),

    #[error("No chunk manifest at {0:?}; run once without --skip")]
    MissingManifest(PathBuf),

    #[error("Chunk size must be at least 1")]
    InvalidChunkSize,

    #[error("No vocabulary database configured")]
    MissingVocabPath,

    #[error("Operator input closed before a definition was entered for {0}")]
    PromptClosed(String),

    #[error("Failed to read operator input: {0}")]
    Prompt(#[source] std::io::Error),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| PipelineError::Io { path, source }
    }

    pub(crate) fn data_access(path: impl Into<PathBuf>) -> impl FnOnce(rusqlite::Error) -> Self {
        let path = path.into();
        move |source| PipelineError::DataAccess { path, source }
    }
}
