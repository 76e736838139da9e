use serde::de::DeserializeOwned;
use serde_json::Value;

const PREVIEW_LENGTH: usize = 200;
const FENCE: &str = "```";

/// Removes a surrounding fenced-code-block marker, including any info string such as
/// `json` after the opening fence. Text without a fence is only trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix(FENCE) else {
        return trimmed;
    };

    let body =
        rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    let body = body.trim_end();
    body.strip_suffix(FENCE).unwrap_or(body).trim()
}

/// Finds the JSON value in a model response.
///
/// The fence-stripped text is parsed as a whole first. Failing that, the first
/// well-formed array or object embedded in the text wins.
pub fn extract_json(raw: &str) -> Result<Value, ModelOutputError> {
    let text = strip_code_fence(raw);

    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    for (start, _) in text.match_indices(|c: char| c == '[' || c == '{') {
        let mut values = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        if let Some(Ok(value)) = values.next() {
            return Ok(value);
        }
    }

    Err(ModelOutputError::NoJson)
}

/// Parses a non-empty JSON array of `T` out of a model response.
pub fn parse_list<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, ModelOutputError> {
    let value = extract_json(raw)?;
    let items: Vec<T> =
        serde_json::from_value(value).map_err(|e| ModelOutputError::Shape(e.to_string()))?;

    if items.is_empty() {
        return Err(ModelOutputError::Empty);
    }

    Ok(items)
}

pub fn parse_text(raw: &str) -> Result<String, ModelOutputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ModelOutputError::Empty);
    }
    Ok(text.to_string())
}

/// Shortened single-line form of a model response for log output.
pub fn preview(raw: &str) -> String {
    let flat = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.is_empty() {
        return String::from("[EMPTY]");
    }

    match flat.char_indices().nth(PREVIEW_LENGTH) {
        Some((cut, _)) => format!(
            "{}... ({} chars total)",
            &flat[..cut],
            raw.chars().count()
        ),
        None => flat,
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelOutputError {
    #[error("no JSON found in model output")]
    NoJson,
    #[error("unexpected JSON shape: {0}")]
    Shape(String),
    #[error("model output is empty")]
    Empty,
}
