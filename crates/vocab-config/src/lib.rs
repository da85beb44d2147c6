use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod error;
pub mod lexicon;
pub mod overrides;
pub mod store;

pub use self::error::ConfigError;
pub use self::lexicon::LexiconConfig;
pub use self::overrides::ConfigOverrides;
pub use self::store::ConfigStore;

fn default_lang() -> String {
    "en-us".to_string()
}

fn default_chunk_size() -> usize {
    30
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Credentials and endpoint for the dictionary service
    #[serde(flatten)]
    pub lexicon: LexiconConfig,
    /// Path to the e-reader's vocab.db
    #[serde(alias = "vocab")]
    pub vocab_path: Option<PathBuf>,
    /// Empty the source database once the export is written
    pub clear: bool,
    /// Service language code used for words without a stored tag
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Reuse the chunk files from a previous run instead of re-reading the database
    pub skip: bool,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Read at most this many stems from the database
    pub limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon: LexiconConfig::default(),
            vocab_path: None,
            clear: false,
            lang: default_lang(),
            skip: false,
            chunk_size: default_chunk_size(),
            limit: None,
        }
    }
}

impl Config {
    /// Check that the merged configuration is usable for a run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lexicon.app_id.is_empty() {
            return Err(ConfigError::MissingField("app_id"));
        }
        if self.lexicon.app_key.is_empty() {
            return Err(ConfigError::MissingField("app_key"));
        }
        if !self.skip && self.vocab_path.is_none() {
            return Err(ConfigError::MissingField("vocab"));
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.lang, "en-us");
        assert_eq!(config.chunk_size, 30);
        assert!(!config.skip);
        assert!(!config.clear);
        assert_eq!(
            config.lexicon.api_url,
            "https://od-api.oxforddictionaries.com:443/api/v2"
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = serde_json::from_str(
            r#"{"app_id": "id", "app_key": "key", "vocab": "/tmp/vocab.db", "skip": true}"#,
        )
        .unwrap();

        assert_eq!(config.lexicon.app_id, "id");
        assert_eq!(config.vocab_path, Some(PathBuf::from("/tmp/vocab.db")));
        assert!(config.skip);
        assert_eq!(config.lang, "en-us");
        assert_eq!(config.chunk_size, 30);
    }

    #[test]
    fn test_validate_requires_vocab_unless_skipping() {
        let mut config = Config::default();
        config.lexicon.app_id = "id".into();
        config.lexicon.app_key = "key".into();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField("vocab"))
        ));

        config.skip = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_chunk_size() {
        let mut config = Config::default();
        config.lexicon.app_id = "id".into();
        config.lexicon.app_key = "key".into();
        config.vocab_path = Some("vocab.db".into());
        config.chunk_size = 0;

        assert!(matches!(config.validate(), Err(ConfigError::InvalidChunkSize)));
    }

    #[test]
    fn test_validate_requires_credentials() {
        let config = Config {
            vocab_path: Some("vocab.db".into()),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField("app_id"))
        ));
    }
}
