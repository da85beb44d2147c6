pub mod types;

pub use types::{ChunkId, ChunkManifest, VocabularyChunk, VocabularyEntry};
