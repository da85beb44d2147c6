use std::path::Path;

use vocab_config::Config;
use vocab_lexicon::LexicalService;
use vocab_types::ChunkManifest;

use crate::merge::merge_exports;
use crate::processor::ChunkProcessor;
use crate::reader::{clear_vocabulary, read_vocabulary};
use crate::{ChunkStore, DefinitionFetcher, DefinitionPrompt, PipelineError};

/// Which stages a run goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagePlan {
    /// Read the database and rewrite the chunk files
    pub extract: bool,
    /// Keep exports left by an earlier, interrupted run
    pub reuse_exports: bool,
    /// Empty the source database after merging
    pub clear: bool,
}

impl StagePlan {
    pub fn from_config(config: &Config) -> Self {
        Self {
            extract: !config.skip,
            reuse_exports: config.skip,
            clear: config.clear,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub chunks_processed: usize,
    pub chunks_reused: usize,
    pub words_looked_up: usize,
    pub manual_definitions: usize,
    pub cleared_lookups: Option<usize>,
}

/// Reader → Partitioner → Chunk Processor → Merger
pub struct Pipeline<'a> {
    config: &'a Config,
    store: ChunkStore,
    service: &'a dyn LexicalService,
    prompt: &'a dyn DefinitionPrompt,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a Config,
        store: ChunkStore,
        service: &'a dyn LexicalService,
        prompt: &'a dyn DefinitionPrompt,
    ) -> Self {
        Self {
            config,
            store,
            service,
            prompt,
        }
    }

    pub fn plan(&self) -> StagePlan {
        StagePlan::from_config(self.config)
    }

    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    pub async fn run(&self) -> Result<RunReport, PipelineError> {
        let plan = self.plan();

        let manifest = if plan.extract {
            self.extract()?
        } else {
            tracing::info!("Skipping database read, reusing chunks in {}", self.store.dir().display());
            self.store.load_manifest()?
        };

        let mut report = self.enrich(&manifest, plan.reuse_exports).await?;
        merge_exports(&self.store, &manifest)?;

        if plan.clear {
            report.cleared_lookups = Some(clear_vocabulary(self.vocab_path()?)?);
        }

        Ok(report)
    }

    /// Stage one: read the vocabulary and persist it as chunks
    pub fn extract(&self) -> Result<ChunkManifest, PipelineError> {
        let entries = read_vocabulary(self.vocab_path()?, self.config.limit)?;
        self.store.write_partitions(&entries, self.config.chunk_size)
    }

    /// Stage two: enrich every chunk listed in the manifest
    pub async fn enrich(
        &self,
        manifest: &ChunkManifest,
        reuse_exports: bool,
    ) -> Result<RunReport, PipelineError> {
        let fetcher = DefinitionFetcher::new(self.service, self.prompt, self.config.lang.clone());
        let processor = ChunkProcessor::new(&self.store, &fetcher);
        let mut report = RunReport::default();

        for id in &manifest.chunks {
            if reuse_exports && self.store.export_path(*id).exists() {
                tracing::info!("Export for {} already present, skipping", id);
                report.chunks_reused += 1;
                continue;
            }

            let outcome = processor.process(*id).await?;
            report.chunks_processed += 1;
            report.words_looked_up += outcome.words;
            report.manual_definitions += outcome.manual;
        }

        Ok(report)
    }

    fn vocab_path(&self) -> Result<&Path, PipelineError> {
        self.config
            .vocab_path
            .as_deref()
            .ok_or(PipelineError::MissingVocabPath)
    }
}
