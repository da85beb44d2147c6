use std::path::PathBuf;

use crate::Config;

/// Values supplied on the command line. `None` means "not passed" and
/// keeps whatever is stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub app_id: Option<String>,
    pub app_key: Option<String>,
    pub api_url: Option<String>,
    pub vocab_path: Option<PathBuf>,
    pub clear: Option<bool>,
    pub lang: Option<String>,
    pub skip: Option<bool>,
    pub chunk_size: Option<usize>,
    /// `Some(None)` removes a stored limit
    pub limit: Option<Option<usize>>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut Config) {
        if let Some(app_id) = self.app_id {
            config.lexicon.app_id = app_id;
        }
        if let Some(app_key) = self.app_key {
            config.lexicon.app_key = app_key;
        }
        if let Some(api_url) = self.api_url {
            config.lexicon.api_url = api_url;
        }
        if let Some(vocab_path) = self.vocab_path {
            config.vocab_path = Some(vocab_path);
        }
        if let Some(clear) = self.clear {
            config.clear = clear;
        }
        if let Some(lang) = self.lang {
            config.lang = lang;
        }
        if let Some(skip) = self.skip {
            config.skip = skip;
        }
        if let Some(chunk_size) = self.chunk_size {
            config.chunk_size = chunk_size;
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
    }
}
