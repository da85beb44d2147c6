use crate::LookupError;

/// Stored e-reader language tag to dictionary service code
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[("en", "en-us"), ("de", "de")];

/// Translate a stored language tag into the code the service expects
pub fn service_language_code(tag: &str) -> Result<&'static str, LookupError> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(stored, _)| *stored == tag)
        .map(|(_, code)| *code)
        .ok_or_else(|| LookupError::UnsupportedLanguage(tag.to_string()))
}
