pub mod error;
pub mod export;
pub mod fetcher;
pub mod merge;
pub mod partition;
pub mod pipeline;
pub mod processor;
pub mod prompt;
pub mod reader;
pub mod store;

#[cfg(test)]
mod testing;

pub use error::PipelineError;
pub use fetcher::{Definition, DefinitionFetcher, DefinitionSource};
pub use pipeline::{Pipeline, RunReport, StagePlan};
pub use prompt::{DefinitionPrompt, LinePrompt, StdinPrompt};
pub use store::ChunkStore;
