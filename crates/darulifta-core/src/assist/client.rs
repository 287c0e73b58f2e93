use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::{Value, json};

use crate::config::AssistConfig;
use crate::error::{IftaError, Result};
use crate::models::GroundedAnswer;

use super::parse::{extract_text, parse_citations, parse_string_array};
use super::prompt::{freeform_prompt, grounded_prompt, rank_prompt, suggest_prompt};
use super::{ERROR_TEXT, NO_RESPONSE_TEXT, SUGGEST_LIMIT, UNAVAILABLE_TEXT};

/// Blocking client for the generateContent capability. One request per
/// call, awaited to completion; the per-request timeout is the only
/// cancellation mechanism.
#[derive(Debug, Clone)]
pub struct AssistClient {
    config: AssistConfig,
    http: Client,
}

impl AssistClient {
    pub fn new(config: AssistConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|err| IftaError::Internal(format!("assist client build failed: {err}")))?;
        Ok(Self { config, http })
    }

    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.config.has_credential()
    }

    #[must_use]
    pub fn config(&self) -> &AssistConfig {
        &self.config
    }

    /// Advisory text for the submission form and the generic assistant.
    /// Never fails: missing key and transport errors map to fixed strings.
    #[must_use]
    pub fn freeform(&self, question: &str, context: Option<&str>) -> String {
        if !self.has_credential() {
            return UNAVAILABLE_TEXT.to_string();
        }
        match self.generate(&freeform_prompt(question, context), false, false) {
            Ok(value) => extract_text(&value).unwrap_or_else(|| NO_RESPONSE_TEXT.to_string()),
            Err(_) => ERROR_TEXT.to_string(),
        }
    }

    /// Relevance-ordered record ids for a query, or an empty list on any
    /// failure (missing key, transport error, malformed response).
    #[must_use]
    pub fn rank(&self, query: &str, listing: &[(String, String)]) -> Vec<String> {
        if !self.has_credential() || listing.is_empty() {
            return Vec::new();
        }
        let Ok(value) = self.generate(&rank_prompt(query, listing), true, false) else {
            return Vec::new();
        };
        extract_text(&value)
            .and_then(|text| parse_string_array(&text))
            .unwrap_or_default()
    }

    /// Completion phrases for a partial query. Same silent degradation
    /// as `rank`; autocomplete must never surface an error.
    #[must_use]
    pub fn suggest(&self, partial: &str, titles: &[String]) -> Vec<String> {
        if !self.has_credential() {
            return Vec::new();
        }
        let Ok(value) = self.generate(&suggest_prompt(partial, titles, SUGGEST_LIMIT), true, false)
        else {
            return Vec::new();
        };
        let mut suggestions = extract_text(&value)
            .and_then(|text| parse_string_array(&text))
            .unwrap_or_default();
        suggestions.truncate(SUGGEST_LIMIT);
        suggestions
    }

    /// Open-domain grounded search: generated text plus web citations.
    #[must_use]
    pub fn grounded(&self, query: &str) -> GroundedAnswer {
        if !self.has_credential() {
            return GroundedAnswer {
                text: UNAVAILABLE_TEXT.to_string(),
                sources: Vec::new(),
            };
        }
        match self.generate(&grounded_prompt(query), false, true) {
            Ok(value) => GroundedAnswer {
                text: extract_text(&value).unwrap_or_else(|| NO_RESPONSE_TEXT.to_string()),
                sources: parse_citations(&value),
            },
            Err(_) => GroundedAnswer {
                text: ERROR_TEXT.to_string(),
                sources: Vec::new(),
            },
        }
    }

    fn generate(&self, prompt: &str, want_json: bool, grounded: bool) -> Result<Value> {
        let Some(key) = self.config.api_key.as_deref() else {
            return Err(IftaError::Internal("assist credential missing".to_string()));
        };
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        );

        let mut payload = json!({
            "contents": [{"parts": [{"text": prompt}]}]
        });
        if want_json {
            payload["generationConfig"] = json!({"responseMimeType": "application/json"});
        }
        if grounded {
            payload["tools"] = json!([{"google_search": {}}]);
        }

        let response = self
            .http
            .post(url)
            .query(&[("key", key)])
            .json(&payload)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(IftaError::Internal(format!(
                "assist call returned non-success status: {status}"
            )));
        }
        Ok(response.json::<Value>()?)
    }
}
