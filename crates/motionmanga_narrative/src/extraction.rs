//! Utilities for extracting JSON from model responses.
//!
//! Responses requested as JSON occasionally arrive wrapped in a markdown code
//! block or surrounded by commentary. These helpers recover the object.

/// Extract a JSON object from a response that may contain markdown or prose.
///
/// Strategies, in order:
/// 1. Markdown code blocks: ```json ... ``` or ``` ... ```
/// 2. Balanced braces: { ... }
///
/// Returns `None` when neither yields a candidate.
///
/// # Examples
///
/// ```
/// use motionmanga_narrative::extract_json;
///
/// let response = "Here is the story:\n\
///     \n\
///     ```json\n\
///     {\"page_1\": \"Rain falls.\"}\n\
///     ```\n";
///
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "{\"page_1\": \"Rain falls.\"}");
/// ```
pub fn extract_json(response: &str) -> Option<&str> {
    if let Some(block) = extract_from_code_block(response) {
        if block.starts_with('{') {
            return Some(block);
        }
        if let Some(object) = extract_balanced(block, '{', '}') {
            return Some(object);
        }
    }

    extract_balanced(response, '{', '}')
}

/// Content of the first fenced code block.
///
/// An unterminated fence yields everything after the opening line.
fn extract_from_code_block(response: &str) -> Option<&str> {
    let start = response.find("```")?;
    let after_fence = start + 3;
    // Skip the language tag, if any
    let content_start = response[after_fence..]
        .find('\n')
        .map(|n| after_fence + n + 1)
        .unwrap_or(after_fence);

    let content = match response[content_start..].find("```") {
        Some(end) => &response[content_start..content_start + end],
        None => &response[content_start..],
    };
    Some(content.trim())
}

/// Text from the first `open` to its matching `close`, ignoring
/// delimiters inside JSON strings.
fn extract_balanced(response: &str, open: char, close: char) -> Option<&str> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&response[start..start + i + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
