mod account;
mod assist;
mod fatwa;

pub use account::{MuftiAccount, UserAccount};
pub use assist::{CitationLink, GroundedAnswer, Insight, SearchOutcome};
pub use fatwa::{Category, CategorySelector, Fatwa, FatwaDraft, QuestionAck, QuestionSubmission};
