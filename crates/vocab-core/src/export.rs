use std::path::Path;

use serde::Serialize;
use vocab_types::{ChunkId, VocabularyChunk};

use crate::PipelineError;

/// One flashcard row
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    stem: &'a str,
    usage: i64,
    lang: &'a str,
    definition: &'a str,
}

/// Write an enriched chunk as CSV with a `stem,usage,lang,definition` header
pub fn write_chunk_export(
    path: &Path,
    id: ChunkId,
    chunk: &VocabularyChunk,
) -> Result<(), PipelineError> {
    let definitions = match &chunk.definitions {
        Some(defs) if chunk.is_aligned() => defs,
        _ => return Err(PipelineError::MisalignedChunk(id)),
    };

    let export_err = |source| PipelineError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(export_err)?;
    for (((stem, usage), lang), definition) in chunk
        .stems
        .iter()
        .zip(&chunk.usages)
        .zip(&chunk.langs)
        .zip(definitions)
    {
        writer
            .serialize(ExportRow {
                stem,
                usage: *usage,
                lang,
                definition,
            })
            .map_err(export_err)?;
    }
    writer.flush().map_err(PipelineError::io(path))?;

    Ok(())
}
