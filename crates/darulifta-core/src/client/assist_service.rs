use crate::assist::{INSIGHT_DISCLAIMER, INSIGHT_MIN_DETAIL_CHARS};
use crate::error::{IftaError, Result};
use crate::models::{GroundedAnswer, Insight};

impl super::DarulIfta {
    /// Non-binding advisory for an in-progress question. Refused until
    /// the details are substantial enough to say anything about; once
    /// invoked, the result always carries the fixed disclaimer.
    pub fn instant_insight(&self, title: &str, details: &str) -> Result<Insight> {
        if details.trim().chars().count() < INSIGHT_MIN_DETAIL_CHARS {
            return Err(IftaError::Validation(format!(
                "question details must be at least {INSIGHT_MIN_DETAIL_CHARS} characters"
            )));
        }
        let question = format!("Question Title: {title}. Details: {details}");
        let advisory = self.assist().freeform(
            &question,
            Some("Use typical Hanafi Fiqh methodology if applicable, but keep it general if unsure."),
        );
        Ok(Insight {
            advisory,
            disclaimer: INSIGHT_DISCLAIMER.to_string(),
        })
    }

    /// Open-domain grounded search ("AI Sir"): generated text plus web
    /// citations. Degrades to the fixed unavailable text, never errors
    /// past validation.
    pub fn grounded_search(&self, query: &str) -> Result<GroundedAnswer> {
        let query = query.trim();
        if query.is_empty() {
            return Err(IftaError::Validation("query is required".to_string()));
        }
        Ok(self.assist().grounded(query))
    }
}
