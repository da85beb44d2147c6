use serde::{Deserialize, Serialize};

/// One distinct stem read from the e-reader database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub stem: String,
    /// Highest lookup count seen for the stem
    pub usage: i64,
    /// Language tag as stored by the reader ("en", "de", ...)
    pub lang: String,
}

impl VocabularyEntry {
    pub fn new(stem: impl Into<String>, usage: i64, lang: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            usage,
            lang: lang.into(),
        }
    }
}

/// Contiguous slice of the vocabulary, stored column-wise.
///
/// `definitions` stays `None` until the chunk has been enriched, after
/// which it holds one definition per stem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyChunk {
    pub stems: Vec<String>,
    pub usages: Vec<i64>,
    pub langs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<String>>,
}

impl VocabularyChunk {
    pub fn from_entries(entries: &[VocabularyEntry]) -> Self {
        let mut chunk = Self {
            stems: Vec::with_capacity(entries.len()),
            usages: Vec::with_capacity(entries.len()),
            langs: Vec::with_capacity(entries.len()),
            definitions: None,
        };

        for entry in entries {
            chunk.stems.push(entry.stem.clone());
            chunk.usages.push(entry.usage);
            chunk.langs.push(entry.lang.clone());
        }

        chunk
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }

    pub fn is_enriched(&self) -> bool {
        self.definitions.is_some()
    }

    /// All columns have the same length
    pub fn is_aligned(&self) -> bool {
        let n = self.stems.len();
        n == self.usages.len()
            && n == self.langs.len()
            && self.definitions.as_ref().is_none_or(|defs| defs.len() == n)
    }

    /// Iterate the chunk row by row
    pub fn entries(&self) -> impl Iterator<Item = VocabularyEntry> + '_ {
        self.stems
            .iter()
            .zip(&self.usages)
            .zip(&self.langs)
            .map(|((stem, usage), lang)| VocabularyEntry::new(stem.clone(), *usage, lang.clone()))
    }

    pub fn into_entries(self) -> Vec<VocabularyEntry> {
        self.stems
            .into_iter()
            .zip(self.usages)
            .zip(self.langs)
            .map(|((stem, usage), lang)| VocabularyEntry { stem, usage, lang })
            .collect()
    }

    /// Attach the definitions column. Returns the definitions back if
    /// their count does not match the number of stems.
    pub fn attach_definitions(&mut self, definitions: Vec<String>) -> Result<(), Vec<String>> {
        if definitions.len() != self.len() {
            return Err(definitions);
        }
        self.definitions = Some(definitions);
        Ok(())
    }
}

/// Index of a partition, stable across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkId(pub usize);

impl ChunkId {
    pub fn file_stem(&self) -> String {
        format!("part{}", self.0)
    }

    /// Name of the persisted chunk record
    pub fn chunk_file_name(&self) -> String {
        format!("{}.json", self.file_stem())
    }

    /// Name of the per-chunk tabular export
    pub fn export_file_name(&self) -> String {
        format!("{}.csv", self.file_stem())
    }
}

impl std::fmt::Display for ChunkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_stem())
    }
}

/// Ordered list of the chunks written by the last partitioning pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkManifest {
    pub chunk_size: usize,
    pub total_entries: usize,
    pub chunks: Vec<ChunkId>,
}

impl ChunkManifest {
    pub fn new(chunk_size: usize, total_entries: usize, count: usize) -> Self {
        Self {
            chunk_size,
            total_entries,
            chunks: (0..count).map(ChunkId).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
