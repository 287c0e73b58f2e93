use std::sync::atomic::Ordering;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{IftaError, Result};
use crate::export::{record_transcript, record_transcript_filename};
use crate::models::{Fatwa, FatwaDraft, QuestionAck, QuestionSubmission};
use crate::seed::seed_fatwas;

use super::DarulIfta;

/// Display label used in published fatwa numbers.
const HIJRI_YEAR_LABEL: &str = "1445";

impl DarulIfta {
    pub fn all_fatwas(&self) -> Result<Vec<Fatwa>> {
        Ok(self.records_read()?.all().to_vec())
    }

    /// Detail lookup. Unknown identifiers (including the empty string)
    /// are a `NotFound`, never a panic.
    pub fn fatwa(&self, id: &str) -> Result<Fatwa> {
        self.records_read()?
            .find(id)
            .cloned()
            .ok_or_else(|| IftaError::NotFound(format!("fatwa: {id}")))
    }

    pub fn featured_fatwas(&self, limit: usize) -> Result<Vec<Fatwa>> {
        Ok(self
            .records_read()?
            .all()
            .iter()
            .filter(|record| record.featured)
            .take(limit)
            .cloned()
            .collect())
    }

    pub fn recent_fatwas(&self, limit: usize) -> Result<Vec<Fatwa>> {
        Ok(self.records_read()?.all().iter().take(limit).cloned().collect())
    }

    /// Publishes a new ruling under the current mufti session. The store
    /// assigns a uuid identifier, a `<year>-<seq>/Mufti` fatwa number,
    /// today's date, and the author name.
    pub fn publish_fatwa(&self, draft: FatwaDraft) -> Result<Fatwa> {
        let mufti = self
            .muftis_read()?
            .current()
            .cloned()
            .ok_or_else(|| IftaError::PermissionDenied("publishing requires a mufti session".to_string()))?;

        require_field(&draft.question_title, "question_title")?;
        require_field(&draft.question_details, "question_details")?;
        require_field(&draft.answer, "answer")?;

        let sequence = self.publish_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let record = Fatwa {
            id: Uuid::new_v4().to_string(),
            fatwa_number: format!("{HIJRI_YEAR_LABEL}-{sequence}/Mufti"),
            question_title: draft.question_title.trim().to_string(),
            question_details: draft.question_details.trim().to_string(),
            answer: draft.answer.trim().to_string(),
            category: draft.category,
            date: Utc::now().format("%Y-%m-%d").to_string(),
            views: 0,
            featured: true,
            citations: draft.citations,
            mufti_name: Some(mufti.name),
        };
        self.records_write()?.append(record.clone());
        Ok(record)
    }

    /// Accepts a visitor question and hands back a tracking id. The
    /// submission is not stored: answers arrive out of band, and only
    /// mufti publishing creates records.
    pub fn submit_question(&self, submission: &QuestionSubmission) -> Result<QuestionAck> {
        require_field(&submission.name, "name")?;
        require_field(&submission.email, "email")?;
        require_field(&submission.title, "title")?;
        require_field(&submission.details, "details")?;
        let short_id = Uuid::new_v4().simple().to_string();
        Ok(QuestionAck {
            tracking_id: format!("TMP-{}", &short_id[..8]),
        })
    }

    pub fn record_transcript(&self, id: &str) -> Result<(String, String)> {
        let record = self.fatwa(id)?;
        Ok((record_transcript_filename(&record), record_transcript(&record)))
    }

    /// Restores the seed set; the test-lifecycle equivalent of a reload.
    pub fn reset_records(&self) -> Result<()> {
        self.records_write()?.reset(seed_fatwas());
        Ok(())
    }
}

pub(super) fn require_field(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IftaError::Validation(format!("{field} is required")));
    }
    Ok(())
}
