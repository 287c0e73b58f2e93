use serde_json::Value;

use crate::models::CitationLink;

/// Pulls generated text out of a generateContent-shaped response,
/// tolerating the couple of shapes the provider is known to emit.
#[must_use]
pub fn extract_text(value: &Value) -> Option<String> {
    if let Some(parts) = value
        .get("candidates")
        .and_then(|candidates| candidates.as_array())
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
    {
        let text = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|text| text.as_str()))
            .collect::<Vec<_>>()
            .join("");
        if !text.is_empty() {
            return Some(text);
        }
    }
    if let Some(text) = value.get("text").and_then(|text| text.as_str())
        && !text.is_empty()
    {
        return Some(text.to_string());
    }
    None
}

/// Slices the first JSON object or array out of surrounding prose or
/// code fences. Models asked for strict JSON still wrap it sometimes.
#[must_use]
pub fn extract_json_fragment(text: &str) -> Option<String> {
    let start = text
        .char_indices()
        .find(|(_, c)| *c == '{' || *c == '[')
        .map(|(idx, _)| idx)?;
    let sliced = &text[start..];
    let end = sliced
        .char_indices()
        .rev()
        .find(|(_, c)| *c == '}' || *c == ']')
        .map(|(idx, c)| idx + c.len_utf8())?;
    Some(sliced[..end].to_string())
}

/// Strict array-of-strings parse. Anything else (prose, objects, mixed
/// arrays) collapses to `None` so callers can treat it as "no matches".
#[must_use]
pub fn parse_string_array(text: &str) -> Option<Vec<String>> {
    let fragment = extract_json_fragment(text)?;
    let value: Value = serde_json::from_str(&fragment).ok()?;
    let items = value.as_array()?;
    items
        .iter()
        .map(|item| item.as_str().map(ToString::to_string))
        .collect()
}

/// Reads grounding citations from a response. Entries with no URL are
/// dropped right here, not downstream; a missing title falls back to a
/// generic label.
#[must_use]
pub fn parse_citations(value: &Value) -> Vec<CitationLink> {
    let Some(chunks) = value
        .get("candidates")
        .and_then(|candidates| candidates.as_array())
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("groundingMetadata"))
        .and_then(|meta| meta.get("groundingChunks"))
        .and_then(|chunks| chunks.as_array())
    else {
        return Vec::new();
    };

    chunks
        .iter()
        .filter_map(|chunk| {
            let web = chunk.get("web")?;
            let url = web.get("uri").and_then(|uri| uri.as_str())?;
            let title = web
                .get("title")
                .and_then(|title| title.as_str())
                .filter(|title| !title.is_empty())
                .unwrap_or("Web Source");
            Some(CitationLink {
                title: title.to_string(),
                url: url.to_string(),
            })
        })
        .collect()
}
