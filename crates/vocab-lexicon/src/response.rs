use crate::LookupError;

/// Pull `results[0].lexicalEntries[0].entries[0].senses[0].definitions[0]`
/// out of an entries response. Anything past the first definition is ignored.
pub fn first_definition(json: &serde_json::Value, word: &str) -> Result<String, LookupError> {
    let results = json["results"]
        .as_array()
        .ok_or_else(|| LookupError::MalformedResponse("missing results".to_string()))?;

    let first = results
        .first()
        .ok_or_else(|| LookupError::NotFound(word.to_string()))?;

    first["lexicalEntries"]
        .get(0)
        .and_then(|lexical| lexical["entries"].get(0))
        .and_then(|entry| entry["senses"].get(0))
        .and_then(|sense| sense["definitions"].get(0))
        .and_then(|definition| definition.as_str())
        .map(str::to_string)
        .ok_or_else(|| LookupError::MalformedResponse("no definition in first sense".to_string()))
}
