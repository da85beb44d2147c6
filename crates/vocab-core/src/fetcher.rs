use vocab_lexicon::{LexicalService, service_language_code};
use vocab_types::VocabularyEntry;

use crate::{DefinitionPrompt, PipelineError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionSource {
    Service,
    Operator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub text: String,
    pub source: DefinitionSource,
}

/// Resolves one word at a time: dictionary service first, operator second
pub struct DefinitionFetcher<'a> {
    service: &'a dyn LexicalService,
    prompt: &'a dyn DefinitionPrompt,
    /// Service code used for entries that carry no language tag
    fallback_lang: String,
}

impl<'a> DefinitionFetcher<'a> {
    pub fn new(
        service: &'a dyn LexicalService,
        prompt: &'a dyn DefinitionPrompt,
        fallback_lang: impl Into<String>,
    ) -> Self {
        Self {
            service,
            prompt,
            fallback_lang: fallback_lang.into(),
        }
    }

    /// Service language code for a stored tag
    pub fn service_code(&self, tag: &str) -> Result<String, PipelineError> {
        if tag.is_empty() {
            return Ok(self.fallback_lang.clone());
        }
        Ok(service_language_code(tag)?.to_string())
    }

    pub async fn fetch(&self, entry: &VocabularyEntry) -> Result<Definition, PipelineError> {
        let code = self.service_code(&entry.lang)?;
        let word = entry.stem.to_lowercase();

        match self.service.lookup(&code, &word).await {
            Ok(text) => {
                tracing::debug!("{} -> {}", word, text);
                Ok(Definition {
                    text,
                    source: DefinitionSource::Service,
                })
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Lookup failed for {}: {}", entry.stem, e);
                let text = self.prompt.ask(&entry.stem, entry.usage).await?;
                Ok(Definition {
                    text,
                    source: DefinitionSource::Operator,
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}
