use vocab_types::{VocabularyChunk, VocabularyEntry};

use crate::PipelineError;

/// Split entries into contiguous chunks of at most `chunk_size`, keeping order.
/// Yields `ceil(n / chunk_size)` chunks; an empty input yields none.
pub fn partition(
    entries: &[VocabularyEntry],
    chunk_size: usize,
) -> Result<Vec<VocabularyChunk>, PipelineError> {
    if chunk_size == 0 {
        return Err(PipelineError::InvalidChunkSize);
    }

    Ok(entries
        .chunks(chunk_size)
        .map(VocabularyChunk::from_entries)
        .collect())
}
