use serde::{Deserialize, Serialize};

use super::Fatwa;

/// A web citation attached to a grounded answer. Entries without a URL
/// are dropped at the parse boundary and never reach callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundedAnswer {
    pub text: String,
    #[serde(default)]
    pub sources: Vec<CitationLink>,
}

/// Advisory text for an in-progress question. The disclaimer always
/// accompanies the advisory; it is part of the value, not presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub advisory: String,
    pub disclaimer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub fatwas: Vec<Fatwa>,
    pub ai_ranked: bool,
}
