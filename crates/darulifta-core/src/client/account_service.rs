use crate::error::{IftaError, Result};
use crate::export::{profile_transcript, profile_transcript_filename};
use crate::models::{MuftiAccount, UserAccount};

use super::DarulIfta;
use super::record_service::require_field;

impl DarulIfta {
    /// Registers a user and makes them the current session (auto-login
    /// on signup is preserved behavior). Duplicate emails fail without
    /// touching the stored account or the session.
    pub fn register_user(&self, candidate: UserAccount) -> Result<UserAccount> {
        require_field(&candidate.email, "email")?;
        require_field(&candidate.password, "password")?;
        require_field(&candidate.phone, "phone")?;
        if self.users_write()?.register(candidate.clone()) {
            Ok(candidate)
        } else {
            Err(IftaError::DuplicateKey(format!("user: {}", candidate.email)))
        }
    }

    pub fn login_user(&self, email: &str, password: &str) -> Result<UserAccount> {
        let mut users = self.users_write()?;
        if users.login(email, password) {
            users
                .current()
                .cloned()
                .ok_or_else(|| IftaError::Internal("session missing after login".to_string()))
        } else {
            Err(IftaError::CredentialMismatch)
        }
    }

    pub fn logout_user(&self) -> Result<()> {
        self.users_write()?.logout();
        Ok(())
    }

    pub fn current_user(&self) -> Result<Option<UserAccount>> {
        Ok(self.users_read()?.current().cloned())
    }

    pub fn register_mufti(&self, candidate: MuftiAccount) -> Result<MuftiAccount> {
        require_field(&candidate.username, "username")?;
        require_field(&candidate.email, "email")?;
        require_field(&candidate.name, "name")?;
        require_field(&candidate.password, "password")?;
        if self.muftis_write()?.register(candidate.clone()) {
            Ok(candidate)
        } else {
            Err(IftaError::DuplicateKey(format!(
                "mufti: {}",
                candidate.username
            )))
        }
    }

    pub fn login_mufti(&self, username: &str, password: &str) -> Result<MuftiAccount> {
        let mut muftis = self.muftis_write()?;
        if muftis.login(username, password) {
            muftis
                .current()
                .cloned()
                .ok_or_else(|| IftaError::Internal("session missing after login".to_string()))
        } else {
            Err(IftaError::CredentialMismatch)
        }
    }

    pub fn logout_mufti(&self) -> Result<()> {
        self.muftis_write()?.logout();
        Ok(())
    }

    pub fn current_mufti(&self) -> Result<Option<MuftiAccount>> {
        Ok(self.muftis_read()?.current().cloned())
    }

    /// Transcript of the current user's profile; requires a session.
    pub fn profile_transcript(&self) -> Result<(String, String)> {
        let account = self
            .current_user()?
            .ok_or_else(|| IftaError::PermissionDenied("no user session".to_string()))?;
        Ok((
            profile_transcript_filename(&account),
            profile_transcript(&account),
        ))
    }
}
