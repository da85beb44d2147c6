//! Shared fixtures for the pipeline tests

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use rusqlite::{Connection, params};
use vocab_lexicon::{LexicalService, LookupError, ServiceMetadata};

use crate::{DefinitionPrompt, PipelineError};

/// Build a minimal vocab.db with integer usage counts: `(stem, lang, usages)` per word
pub fn create_vocab_db(dir: &Path, words: &[(&str, &str, &[i64])]) -> PathBuf {
    let path = dir.join("vocab.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE words (id TEXT PRIMARY KEY, word TEXT, stem TEXT, lang TEXT);
         CREATE TABLE lookups (id TEXT PRIMARY KEY, word_key TEXT, usage INTEGER);",
    )
    .unwrap();

    let mut lookup_id = 0;
    for (i, (stem, lang, usages)) in words.iter().enumerate() {
        let word_id = format!("{lang}:{stem}:{i}");
        conn.execute(
            "INSERT INTO words (id, word, stem, lang) VALUES (?1, ?2, ?3, ?4)",
            params![word_id, stem, stem, lang],
        )
        .unwrap();

        for usage in *usages {
            lookup_id += 1;
            conn.execute(
                "INSERT INTO lookups (id, word_key, usage) VALUES (?1, ?2, ?3)",
                params![lookup_id.to_string(), word_id, usage],
            )
            .unwrap();
        }
    }

    path
}

/// Canned dictionary that records every request it receives
#[derive(Default)]
pub struct StubService {
    definitions: Vec<(String, String)>,
    unauthorized: bool,
    pub requests: Mutex<Vec<(String, String)>>,
}

impl StubService {
    pub fn with(definitions: &[(&str, &str)]) -> Self {
        Self {
            definitions: definitions
                .iter()
                .map(|(w, d)| (w.to_string(), d.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn rejecting_credentials() -> Self {
        Self {
            unauthorized: true,
            ..Self::default()
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LexicalService for StubService {
    async fn lookup(&self, service_lang: &str, word: &str) -> Result<String, LookupError> {
        self.requests
            .lock()
            .unwrap()
            .push((service_lang.to_string(), word.to_string()));

        if self.unauthorized {
            return Err(LookupError::Unauthorized(403));
        }

        self.definitions
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, d)| d.clone())
            .ok_or_else(|| LookupError::NotFound(word.to_string()))
    }

    fn metadata(&self) -> ServiceMetadata {
        ServiceMetadata {
            name: "stub".to_string(),
        }
    }
}

/// Operator that answers from a script and remembers what was asked
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<String>>,
    pub asked: Mutex<Vec<(String, i64)>>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn ask_count(&self) -> usize {
        self.asked.lock().unwrap().len()
    }
}

#[async_trait]
impl DefinitionPrompt for ScriptedPrompt {
    async fn ask(&self, word: &str, usage: i64) -> Result<String, PipelineError> {
        self.asked.lock().unwrap().push((word.to_string(), usage));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| PipelineError::PromptClosed(word.to_string()))
    }
}
