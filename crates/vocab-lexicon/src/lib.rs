mod error;
mod language;
mod oxford;
mod response;

pub use error::LookupError;
pub use language::{SUPPORTED_LANGUAGES, service_language_code};
pub use oxford::{Credentials, OxfordDictionary};
pub use response::first_definition;

/// Remote dictionary that resolves a word to a definition
#[async_trait::async_trait]
pub trait LexicalService: Send + Sync {
    /// Look up `word` using the service's own language code
    async fn lookup(&self, service_lang: &str, word: &str) -> Result<String, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ServiceMetadata;
}

#[derive(Debug, Clone)]
pub struct ServiceMetadata {
    pub name: String,
}
