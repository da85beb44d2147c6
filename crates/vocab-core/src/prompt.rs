use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tokio::sync::Mutex;

use crate::PipelineError;

/// Source of manual definitions when the dictionary lookup fails
#[async_trait]
pub trait DefinitionPrompt: Send + Sync {
    /// Ask the operator for a definition of `word`, blocking until answered
    async fn ask(&self, word: &str, usage: i64) -> Result<String, PipelineError>;
}

/// Line-oriented prompt over one long-lived reader/writer pair.
///
/// The reader is kept across calls so lines buffered ahead of the current
/// answer (piped or pasted input) are still there for the next prompt.
pub struct LinePrompt<R, W> {
    io: Mutex<(R, W)>,
}

/// Prompts on stdout and reads answers from stdin
pub type StdinPrompt = LinePrompt<BufReader<Stdin>, Stdout>;

impl StdinPrompt {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        self.io.into_inner()
    }
}

#[async_trait]
impl<R, W> DefinitionPrompt for LinePrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn ask(&self, word: &str, usage: i64) -> Result<String, PipelineError> {
        let mut io = self.io.lock().await;
        let (reader, writer) = &mut *io;

        let message = format!("usage: {usage}\nDefinition not found for ->{word}<-, input your own:\n");
        writer
            .write_all(message.as_bytes())
            .await
            .map_err(PipelineError::Prompt)?;
        writer.flush().await.map_err(PipelineError::Prompt)?;

        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .await
            .map_err(PipelineError::Prompt)?;

        if read == 0 {
            return Err(PipelineError::PromptClosed(word.to_string()));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
