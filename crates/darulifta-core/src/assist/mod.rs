//! Boundary to the external generative-text capability. Every entry
//! point degrades to a neutral value (a fixed string or an empty list)
//! when the credential is missing or the remote call misbehaves; AI
//! output must never make the primary flow fail.

mod client;
mod parse;
mod prompt;

pub use client::AssistClient;
pub use parse::{extract_json_fragment, extract_text, parse_citations, parse_string_array};

/// Returned whenever no credential is configured.
pub const UNAVAILABLE_TEXT: &str =
    "AI service is currently unavailable. Please check back later.";

/// Returned when the remote call fails after being attempted.
pub const ERROR_TEXT: &str = "An error occurred while communicating with the AI service.";

/// Returned when the remote call succeeds but carries no usable text.
pub const NO_RESPONSE_TEXT: &str = "No response generated.";

/// Always rendered alongside instant-insight advisories.
pub const INSIGHT_DISCLAIMER: &str = "Disclaimer: This is an AI generated response and is NOT a fatwa. Please submit your question for a formal ruling.";

/// Minimum question-details length before instant insight may be asked.
pub const INSIGHT_MIN_DETAIL_CHARS: usize = 10;

/// Upper bound on autocomplete suggestions handed back to callers.
pub const SUGGEST_LIMIT: usize = 5;
