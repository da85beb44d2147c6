use std::path::Path;

use rusqlite::{Connection, OpenFlags, params};
use vocab_types::VocabularyEntry;

use crate::PipelineError;

/// One row per stem, keeping the highest usage count across its lookups
const VOCABULARY_QUERY: &str = "
    SELECT words.stem, MAX(lookups.usage), words.lang
        FROM words
        JOIN lookups
        ON words.id = lookups.word_key
        GROUP BY words.stem
        ORDER BY words.stem
        LIMIT ?1
";

/// Read the distinct stems from an e-reader vocabulary database.
///
/// `lookups.usage` must hold integer counts. Stock Kindle databases store the
/// lookup's context sentence there instead and are rejected with `DataAccess`.
/// The connection is read-only and dropped before returning.
pub fn read_vocabulary(
    path: &Path,
    limit: Option<usize>,
) -> Result<Vec<VocabularyEntry>, PipelineError> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(PipelineError::data_access(path))?;

    // SQLite treats a negative LIMIT as unbounded
    let limit = limit.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX));

    let mut stmt = conn
        .prepare(VOCABULARY_QUERY)
        .map_err(PipelineError::data_access(path))?;

    let entries = stmt
        .query_map(params![limit], |row| {
            Ok(VocabularyEntry {
                stem: row.get(0)?,
                usage: row.get(1)?,
                lang: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            })
        })
        .and_then(|rows| rows.collect::<Result<Vec<_>, _>>())
        .map_err(PipelineError::data_access(path))?;

    tracing::info!("Read {} stems from {}", entries.len(), path.display());
    Ok(entries)
}

/// Delete every lookup and word from the vocabulary database.
/// Returns the number of lookups removed.
pub fn clear_vocabulary(path: &Path) -> Result<usize, PipelineError> {
    let mut conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)
        .map_err(PipelineError::data_access(path))?;

    let tx = conn.transaction().map_err(PipelineError::data_access(path))?;
    let removed = tx
        .execute("DELETE FROM lookups", [])
        .map_err(PipelineError::data_access(path))?;
    tx.execute("DELETE FROM words", [])
        .map_err(PipelineError::data_access(path))?;
    tx.commit().map_err(PipelineError::data_access(path))?;

    tracing::info!("Cleared {} lookups from {}", removed, path.display());
    Ok(removed)
}
