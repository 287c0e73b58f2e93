use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IftaError;

/// Fixed category set for published rulings. The display labels are the
/// canonical wire form; they never change without a data migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Beliefs & Creed")]
    Beliefs,
    #[serde(rename = "Prayer (Salah)")]
    Prayer,
    #[serde(rename = "Fasting (Sawm)")]
    Fasting,
    #[serde(rename = "Zakat & Charity")]
    Zakat,
    #[serde(rename = "Marriage & Divorce")]
    Marriage,
    #[serde(rename = "Business & Trade")]
    Business,
    #[serde(rename = "Inheritance")]
    Inheritance,
    #[serde(rename = "Social Manners")]
    Social,
    #[serde(rename = "Miscellaneous")]
    Misc,
}

impl Category {
    pub const ALL: [Self; 9] = [
        Self::Beliefs,
        Self::Prayer,
        Self::Fasting,
        Self::Zakat,
        Self::Marriage,
        Self::Business,
        Self::Inheritance,
        Self::Social,
        Self::Misc,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beliefs => "Beliefs & Creed",
            Self::Prayer => "Prayer (Salah)",
            Self::Fasting => "Fasting (Sawm)",
            Self::Zakat => "Zakat & Charity",
            Self::Marriage => "Marriage & Divorce",
            Self::Business => "Business & Trade",
            Self::Inheritance => "Inheritance",
            Self::Social => "Social Manners",
            Self::Misc => "Miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = IftaError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == raw)
            .ok_or_else(|| IftaError::InvalidCategory(raw.to_string()))
    }
}

/// Category filter for browse/search. `All` is the sentinel meaning
/// "no category restriction".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    One(Category),
}

impl CategorySelector {
    /// Parses the address-level form: the literal `All` (or an absent/empty
    /// value) selects everything, anything else must be a known category label.
    pub fn parse(raw: Option<&str>) -> crate::error::Result<Self> {
        match raw.map(str::trim) {
            None | Some("" | "All") => Ok(Self::All),
            Some(label) => Ok(Self::One(label.parse()?)),
        }
    }

    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::One(selected) => selected == category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fatwa {
    pub id: String,
    pub fatwa_number: String,
    pub question_title: String,
    pub question_details: String,
    pub answer: String,
    pub category: Category,
    pub date: String,
    pub views: u64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mufti_name: Option<String>,
}

/// A visitor's question as submitted from the ask form. Submissions are
/// acknowledged for follow-up by a mufti; they do not become published
/// records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSubmission {
    pub name: String,
    pub email: String,
    pub category: Category,
    pub title: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAck {
    pub tracking_id: String,
}

/// Publishing input; identifier, number, date, and author are assigned
/// by the store at publish time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatwaDraft {
    pub question_title: String,
    pub question_details: String,
    pub answer: String,
    pub category: Category,
    #[serde(default)]
    pub citations: Vec<String>,
}
