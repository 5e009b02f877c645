use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::{Category, Classification, ClassificationSource, ProductivityScore};

const CATEGORY_FIELD: &str = "categoria";
const SCORE_FIELD: &str = "pontuacao_produtividade";
const REASON_FIELD: &str = "razao";

const DEFAULT_SCORE: f64 = 50.0;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(?:[.,]\d+)?").unwrap());
pub const MISSING_REASON: &str = "Classificação sem justificativa do modelo";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseParseError {
    #[error("model response is empty")]
    Empty,
    #[error("no JSON object found in model response")]
    NoJsonObject,
}

/// Turns the model's raw classification answer into a [`Classification`].
///
/// Fields are read independently: a malformed score falls back to 50, a
/// missing category is derived from the score and a missing reason gets a
/// static placeholder. Only the absence of any JSON object is an error.
pub fn parse_classification(raw: &str) -> Result<Classification, ResponseParseError> {
    let object = extract_json_object(raw)?;

    let score = ProductivityScore::new(read_score(object.get(SCORE_FIELD)).unwrap_or(DEFAULT_SCORE));

    let category = match read_text(object.get(CATEGORY_FIELD)) {
        Some(label) => Category::from_model_label(label),
        None => Category::from_score(score.value()),
    };

    let reason = read_text(object.get(REASON_FIELD)).unwrap_or(MISSING_REASON);

    Ok(Classification::with_category(
        category,
        score,
        reason,
        ClassificationSource::Model,
    ))
}

/// Finds a JSON object in free-form model output.
///
/// The whole trimmed response is tried first; otherwise every balanced
/// `{...}` span is tried in order of appearance and the first one that
/// parses as an object wins.
pub fn extract_json_object(raw: &str) -> Result<Map<String, Value>, ResponseParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ResponseParseError::Empty);
    }

    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        if let Ok(Value::Object(object)) = serde_json::from_str(trimmed) {
            return Ok(object);
        }
    }

    let mut search_from = 0;
    while let Some(offset) = trimmed[search_from..].find('{') {
        let start = search_from + offset;
        if let Some(end) = matching_brace(trimmed, start) {
            if let Ok(Value::Object(object)) = serde_json::from_str(&trimmed[start..=end]) {
                return Ok(object);
            }
        }
        search_from = start + 1;
    }

    Err(ResponseParseError::NoJsonObject)
}

/// Byte index of the `}` closing the `{` at `start`, skipping braces inside
/// string literals.
fn matching_brace(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + index);
                }
            }
            _ => {}
        }
    }

    None
}

/// Reads a score given as a number or as decorated text such as `"73%"`.
fn read_score(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_decorated_number(text),
        _ => None,
    }
}

/// Takes the first numeric token, so `"80/100"` reads as 80.
fn parse_decorated_number(text: &str) -> Option<f64> {
    let token = FIRST_NUMBER.find(text)?.as_str().replace(',', ".");

    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn read_text(value: Option<&Value>) -> Option<&str> {
    match value? {
        Value::String(text) if !text.trim().is_empty() => Some(text.as_str()),
        _ => None,
    }
}
