//! Plaintext transcript export: fixed multi-line templates plus
//! deterministic, filesystem-safe file names.

use chrono::Utc;

use crate::models::{Fatwa, UserAccount};

#[must_use]
pub fn record_transcript(record: &Fatwa) -> String {
    let mufti = record.mufti_name.as_deref().unwrap_or("Darul-Ifta");
    format!(
        "Fatwa Transcript\n\
         ----------------\n\
         Fatwa Number: {}\n\
         Category: {}\n\
         Date: {}\n\
         \n\
         Question: {}\n\
         {}\n\
         \n\
         Answer:\n\
         {}\n\
         \n\
         Answered by: {}\n",
        record.fatwa_number,
        record.category,
        record.date,
        record.question_title,
        record.question_details,
        record.answer,
        mufti,
    )
}

#[must_use]
pub fn record_transcript_filename(record: &Fatwa) -> String {
    format!("fatwa-{}.txt", safe_file_segment(&record.fatwa_number))
}

#[must_use]
pub fn profile_transcript(account: &UserAccount) -> String {
    format!(
        "User Profile Download\n\
         ---------------------\n\
         Email: {}\n\
         Phone: {}\n\
         Status: Verified\n\
         Date: {}\n",
        account.email,
        account.phone,
        Utc::now().format("%Y-%m-%d"),
    )
}

#[must_use]
pub fn profile_transcript_filename(account: &UserAccount) -> String {
    format!("user-profile-{}.txt", safe_file_segment(&account.phone))
}

/// Forward slashes would split the name into path segments; everything
/// else in a fatwa number or phone string is already safe enough.
fn safe_file_segment(raw: &str) -> String {
    raw.replace('/', "-")
}
