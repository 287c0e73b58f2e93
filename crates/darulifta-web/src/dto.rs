use serde::{Deserialize, Serialize};

use darulifta_core::models::{Category, Fatwa, MuftiAccount, UserAccount};

#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SiteResponse {
    pub featured: Vec<Fatwa>,
    pub recent: Vec<Fatwa>,
    pub categories: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub fatwas: Vec<Fatwa>,
    pub total: usize,
    pub ai_ranked: bool,
}

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub name: String,
    pub email: String,
    pub category: Category,
    pub title: String,
    pub details: String,
}

#[derive(Debug, Deserialize)]
pub struct InsightRequest {
    pub title: String,
    pub details: String,
}

#[derive(Debug, Deserialize)]
pub struct GroundedRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub question_title: String,
    pub question_details: String,
    pub answer: String,
    pub category: Category,
    #[serde(default)]
    pub citations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
    pub phone: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginUserRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterMuftiRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginMuftiRequest {
    pub username: String,
    pub password: String,
}

/// Session views never echo the stored password back out.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub email: String,
    pub phone: String,
}

impl From<UserAccount> for UserProfile {
    fn from(account: UserAccount) -> Self {
        Self {
            email: account.email,
            phone: account.phone,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MuftiProfile {
    pub username: String,
    pub email: String,
    pub name: String,
}

impl From<MuftiAccount> for MuftiProfile {
    fn from(account: MuftiAccount) -> Self {
        Self {
            username: account.username,
            email: account.email,
            name: account.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserSessionResponse {
    pub user: Option<UserProfile>,
}

#[derive(Debug, Serialize)]
pub struct MuftiSessionResponse {
    pub mufti: Option<MuftiProfile>,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub status: &'static str,
}
