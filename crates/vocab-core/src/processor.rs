use vocab_types::ChunkId;

use crate::export::write_chunk_export;
use crate::{ChunkStore, DefinitionFetcher, DefinitionSource, PipelineError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkOutcome {
    pub id: ChunkId,
    pub words: usize,
    /// Definitions typed in by the operator
    pub manual: usize,
}

/// Enriches one persisted chunk and writes its export
pub struct ChunkProcessor<'a> {
    store: &'a ChunkStore,
    fetcher: &'a DefinitionFetcher<'a>,
}

impl<'a> ChunkProcessor<'a> {
    pub fn new(store: &'a ChunkStore, fetcher: &'a DefinitionFetcher<'a>) -> Self {
        Self { store, fetcher }
    }

    pub async fn process(&self, id: ChunkId) -> Result<ChunkOutcome, PipelineError> {
        let mut chunk = self.store.load_chunk(id)?;
        tracing::info!("Processing {} ({} words)", id, chunk.len());

        let mut definitions = Vec::with_capacity(chunk.len());
        let mut manual = 0;
        for entry in chunk.entries() {
            let definition = self.fetcher.fetch(&entry).await?;
            if definition.source == DefinitionSource::Operator {
                manual += 1;
            }
            definitions.push(definition.text);
        }

        chunk
            .attach_definitions(definitions)
            .map_err(|_| PipelineError::MisalignedChunk(id))?;
        write_chunk_export(&self.store.export_path(id), id, &chunk)?;

        Ok(ChunkOutcome {
            id,
            words: chunk.len(),
            manual,
        })
    }
}
