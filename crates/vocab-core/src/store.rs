use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use vocab_types::{ChunkId, ChunkManifest, VocabularyChunk, VocabularyEntry};

use crate::PipelineError;
use crate::partition::partition;

pub const MANIFEST_FILE_NAME: &str = "manifest.json";
pub const MERGED_FILE_NAME: &str = "vocab.csv";

/// Working data area holding chunk records, the manifest and exports
#[derive(Debug, Clone)]
pub struct ChunkStore {
    dir: PathBuf,
}

impl ChunkStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn chunk_path(&self, id: ChunkId) -> PathBuf {
        self.dir.join(id.chunk_file_name())
    }

    pub fn export_path(&self, id: ChunkId) -> PathBuf {
        self.dir.join(id.export_file_name())
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE_NAME)
    }

    pub fn merged_path(&self) -> PathBuf {
        self.dir.join(MERGED_FILE_NAME)
    }

    /// Partition the vocabulary, write every chunk and then the manifest
    /// listing them. Same-named files from earlier runs are overwritten.
    pub fn write_partitions(
        &self,
        entries: &[VocabularyEntry],
        chunk_size: usize,
    ) -> Result<ChunkManifest, PipelineError> {
        let chunks = partition(entries, chunk_size)?;
        fs::create_dir_all(&self.dir).map_err(PipelineError::io(&self.dir))?;

        let manifest = ChunkManifest::new(chunk_size, entries.len(), chunks.len());
        for (id, chunk) in manifest.chunks.iter().zip(&chunks) {
            self.save_chunk(*id, chunk)?;
        }
        write_json(&self.manifest_path(), &manifest)?;

        tracing::info!(
            "Wrote {} chunks of up to {} entries to {}",
            manifest.len(),
            chunk_size,
            self.dir.display()
        );
        Ok(manifest)
    }

    pub fn load_manifest(&self) -> Result<ChunkManifest, PipelineError> {
        let path = self.manifest_path();
        if !path.exists() {
            return Err(PipelineError::MissingManifest(path));
        }
        read_json(&path)
    }

    pub fn save_chunk(&self, id: ChunkId, chunk: &VocabularyChunk) -> Result<(), PipelineError> {
        write_json(&self.chunk_path(id), chunk)
    }

    pub fn load_chunk(&self, id: ChunkId) -> Result<VocabularyChunk, PipelineError> {
        let chunk: VocabularyChunk = read_json(&self.chunk_path(id))?;
        if !chunk.is_aligned() {
            return Err(PipelineError::MisalignedChunk(id));
        }
        Ok(chunk)
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PipelineError> {
    let data = serde_json::to_string(value).map_err(|source| PipelineError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, data).map_err(PipelineError::io(path))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PipelineError> {
    let data = fs::read_to_string(path).map_err(PipelineError::io(path))?;
    serde_json::from_str(&data).map_err(|source| PipelineError::Json {
        path: path.to_path_buf(),
        source,
    })
}
