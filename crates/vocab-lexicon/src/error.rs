#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Credentials rejected by dictionary service (HTTP {0})")]
    Unauthorized(u16),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("API error: HTTP {0}")]
    ApiError(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No definition found for {0}")]
    NotFound(String),
}

impl LookupError {
    /// Failures that the operator can paper over by typing a definition.
    /// Unsupported languages and rejected credentials would fail the same
    /// way for every word, so they are not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            LookupError::UnsupportedLanguage(_) | LookupError::Unauthorized(_)
        )
    }
}
