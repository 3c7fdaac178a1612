//! Narrative response decoding.

use crate::extract_json;
use motionmanga_core::{Page, StoryDocument};
use motionmanga_error::{DecodeError, DecodeErrorKind};
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

/// Decode the narrative model's response into the canonical story shape.
///
/// Accepts `{"pages": {...}, "character_concept": "..."}` or a flat object
/// whose keys are all page identifiers. Page order follows the document.
/// When `raw` is not valid JSON, an object inside a code fence or
/// surrounding prose is used instead.
///
/// # Errors
///
/// Returns a [`DecodeError`] if no JSON object can be read, if `pages` is
/// not an object, if a page text is not a string, if `character_concept` is
/// neither a string nor null, or if there are no pages.
///
/// # Examples
///
/// ```
/// use motionmanga_narrative::decode;
///
/// let nested = decode(r#"{"pages": {"page_1": "A"}, "character_concept": "Hero"}"#).unwrap();
/// let flat = decode(r#"{"page_1": "A"}"#).unwrap();
///
/// assert_eq!(nested.pages(), flat.pages());
/// assert_eq!(nested.character_concept(), "Hero");
/// assert_eq!(flat.character_concept(), "");
/// ```
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn decode(raw: &str) -> Result<StoryDocument, DecodeError> {
    let value = parse_object(raw)?;
    let mut object = match value {
        Value::Object(object) => object,
        other => {
            return Err(DecodeError::new(DecodeErrorKind::NotAnObject(
                json_type(&other).to_string(),
            )));
        }
    };

    let (pages, character_concept) = match object.remove("pages") {
        Some(Value::Object(pages)) => {
            let concept = match object.remove("character_concept") {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(concept)) => concept,
                Some(_) => {
                    return Err(DecodeError::new(DecodeErrorKind::InvalidCharacterConcept));
                }
            };
            (pages, concept)
        }
        Some(other) => {
            return Err(DecodeError::new(DecodeErrorKind::InvalidPages(
                json_type(&other).to_string(),
            )));
        }
        None => (object, String::new()),
    };

    let pages = collect_pages(pages)?;
    if pages.is_empty() {
        return Err(DecodeError::new(DecodeErrorKind::NoPages));
    }

    debug!(
        pages = pages.len(),
        has_concept = !character_concept.is_empty(),
        "Decoded story"
    );
    Ok(StoryDocument::new(pages, character_concept))
}

fn parse_object(raw: &str) -> Result<Value, DecodeError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Ok(value),
        Err(direct) => {
            let candidate = extract_json(raw)
                .ok_or_else(|| DecodeError::new(DecodeErrorKind::InvalidJson(direct.to_string())))?;
            warn!("Narrative response was not bare JSON, using embedded object");
            serde_json::from_str(candidate)
                .map_err(|e| DecodeError::new(DecodeErrorKind::InvalidJson(e.to_string())))
        }
    }
}

fn collect_pages(pages: Map<String, Value>) -> Result<Vec<Page>, DecodeError> {
    pages
        .into_iter()
        .map(|(id, text)| match text {
            Value::String(text) => Ok(Page::new(id, text)),
            _ => Err(DecodeError::new(DecodeErrorKind::InvalidPageText(id))),
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
