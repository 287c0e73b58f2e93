use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use darulifta_core::models::{
    Category, CategorySelector, FatwaDraft, MuftiAccount, QuestionSubmission, UserAccount,
};

use crate::WebState;
use crate::dto::{
    BrowseQuery, GroundedRequest, InsightRequest, LoginMuftiRequest, LoginUserRequest,
    LogoutResponse, MuftiSessionResponse, PublishRequest, QuestionRequest, RegisterMuftiRequest,
    RegisterUserRequest, SearchResponse, SiteResponse, SuggestQuery, SuggestResponse,
    UserSessionResponse,
};
use crate::error::{ifta_error_response, join_error_response};

const FEATURED_LIMIT: usize = 4;
const RECENT_LIMIT: usize = 6;

pub async fn site(State(state): State<WebState>) -> Response {
    let featured = match state.app.featured_fatwas(FEATURED_LIMIT) {
        Ok(featured) => featured,
        Err(err) => return ifta_error_response(err, "site.load"),
    };
    let recent = match state.app.recent_fatwas(RECENT_LIMIT) {
        Ok(recent) => recent,
        Err(err) => return ifta_error_response(err, "site.load"),
    };
    let categories = Category::ALL.iter().map(|category| category.as_str()).collect();
    (
        StatusCode::OK,
        Json(SiteResponse {
            featured,
            recent,
            categories,
        }),
    )
        .into_response()
}

/// Browse view. Category and query arrive in the address, so searches
/// are shareable. A non-empty query goes through the full search path
/// (filter + conditional AI rerank); the rerank call blocks, so it runs
/// off the async runtime.
pub async fn browse(State(state): State<WebState>, Query(query): Query<BrowseQuery>) -> Response {
    let selector = match CategorySelector::parse(query.category.as_deref()) {
        Ok(selector) => selector,
        Err(err) => return ifta_error_response(err, "fatwas.browse"),
    };
    let text = query.q.unwrap_or_default();

    if text.trim().is_empty() {
        return match state.app.browse(selector, "") {
            Ok(fatwas) => search_response(fatwas, false),
            Err(err) => ifta_error_response(err, "fatwas.browse"),
        };
    }

    let app = state.app.clone();
    let outcome = tokio::task::spawn_blocking(move || app.search(selector, &text)).await;
    match outcome {
        Ok(Ok(outcome)) => search_response(outcome.fatwas, outcome.ai_ranked),
        Ok(Err(err)) => ifta_error_response(err, "fatwas.search"),
        Err(_) => join_error_response("fatwas.search"),
    }
}

fn search_response(fatwas: Vec<darulifta_core::Fatwa>, ai_ranked: bool) -> Response {
    let total = fatwas.len();
    (
        StatusCode::OK,
        Json(SearchResponse {
            fatwas,
            total,
            ai_ranked,
        }),
    )
        .into_response()
}

pub async fn detail(State(state): State<WebState>, Path(id): Path<String>) -> Response {
    match state.app.fatwa(&id) {
        Ok(fatwa) => (StatusCode::OK, Json(fatwa)).into_response(),
        Err(err) => ifta_error_response(err, "fatwas.detail"),
    }
}

pub async fn record_transcript(
    State(state): State<WebState>,
    Path(id): Path<String>,
) -> Response {
    match state.app.record_transcript(&id) {
        Ok((filename, body)) => plaintext_download(&filename, body),
        Err(err) => ifta_error_response(err, "fatwas.transcript"),
    }
}

pub async fn suggest(State(state): State<WebState>, Query(query): Query<SuggestQuery>) -> Response {
    let app = state.app.clone();
    let suggestions = tokio::task::spawn_blocking(move || app.suggestions(&query.q)).await;
    match suggestions {
        Ok(Ok(suggestions)) => {
            (StatusCode::OK, Json(SuggestResponse { suggestions })).into_response()
        }
        Ok(Err(err)) => ifta_error_response(err, "search.suggest"),
        Err(_) => join_error_response("search.suggest"),
    }
}

pub async fn submit_question(
    State(state): State<WebState>,
    Json(request): Json<QuestionRequest>,
) -> Response {
    let submission = QuestionSubmission {
        name: request.name,
        email: request.email,
        category: request.category,
        title: request.title,
        details: request.details,
    };
    match state.app.submit_question(&submission) {
        Ok(ack) => (StatusCode::OK, Json(ack)).into_response(),
        Err(err) => ifta_error_response(err, "questions.submit"),
    }
}

pub async fn instant_insight(
    State(state): State<WebState>,
    Json(request): Json<InsightRequest>,
) -> Response {
    let app = state.app.clone();
    let insight =
        tokio::task::spawn_blocking(move || app.instant_insight(&request.title, &request.details))
            .await;
    match insight {
        Ok(Ok(insight)) => (StatusCode::OK, Json(insight)).into_response(),
        Ok(Err(err)) => ifta_error_response(err, "questions.insight"),
        Err(_) => join_error_response("questions.insight"),
    }
}

pub async fn grounded_search(
    State(state): State<WebState>,
    Json(request): Json<GroundedRequest>,
) -> Response {
    let app = state.app.clone();
    let answer =
        tokio::task::spawn_blocking(move || app.grounded_search(&request.query)).await;
    match answer {
        Ok(Ok(answer)) => (StatusCode::OK, Json(answer)).into_response(),
        Ok(Err(err)) => ifta_error_response(err, "search.grounded"),
        Err(_) => join_error_response("search.grounded"),
    }
}

pub async fn publish(
    State(state): State<WebState>,
    Json(request): Json<PublishRequest>,
) -> Response {
    let draft = FatwaDraft {
        question_title: request.question_title,
        question_details: request.question_details,
        answer: request.answer,
        category: request.category,
        citations: request.citations,
    };
    match state.app.publish_fatwa(draft) {
        Ok(fatwa) => (StatusCode::CREATED, Json(fatwa)).into_response(),
        Err(err) => ifta_error_response(err, "fatwas.publish"),
    }
}

pub async fn register_user(
    State(state): State<WebState>,
    Json(request): Json<RegisterUserRequest>,
) -> Response {
    let candidate = UserAccount {
        email: request.email,
        password: request.password,
        phone: request.phone,
    };
    match state.app.register_user(candidate) {
        Ok(account) => (
            StatusCode::CREATED,
            Json(UserSessionResponse {
                user: Some(account.into()),
            }),
        )
            .into_response(),
        Err(err) => ifta_error_response(err, "users.register"),
    }
}

pub async fn login_user(
    State(state): State<WebState>,
    Json(request): Json<LoginUserRequest>,
) -> Response {
    match state.app.login_user(&request.email, &request.password) {
        Ok(account) => (
            StatusCode::OK,
            Json(UserSessionResponse {
                user: Some(account.into()),
            }),
        )
            .into_response(),
        Err(err) => ifta_error_response(err, "users.login"),
    }
}

pub async fn logout_user(State(state): State<WebState>) -> Response {
    match state.app.logout_user() {
        Ok(()) => (StatusCode::OK, Json(LogoutResponse { status: "ok" })).into_response(),
        Err(err) => ifta_error_response(err, "users.logout"),
    }
}

pub async fn current_user(State(state): State<WebState>) -> Response {
    match state.app.current_user() {
        Ok(user) => (
            StatusCode::OK,
            Json(UserSessionResponse {
                user: user.map(Into::into),
            }),
        )
            .into_response(),
        Err(err) => ifta_error_response(err, "users.me"),
    }
}

pub async fn profile_transcript(State(state): State<WebState>) -> Response {
    match state.app.profile_transcript() {
        Ok((filename, body)) => plaintext_download(&filename, body),
        Err(err) => ifta_error_response(err, "users.transcript"),
    }
}

pub async fn register_mufti(
    State(state): State<WebState>,
    Json(request): Json<RegisterMuftiRequest>,
) -> Response {
    let candidate = MuftiAccount {
        username: request.username,
        email: request.email,
        name: request.name,
        password: request.password,
    };
    match state.app.register_mufti(candidate) {
        Ok(account) => (
            StatusCode::CREATED,
            Json(MuftiSessionResponse {
                mufti: Some(account.into()),
            }),
        )
            .into_response(),
        Err(err) => ifta_error_response(err, "muftis.register"),
    }
}

pub async fn login_mufti(
    State(state): State<WebState>,
    Json(request): Json<LoginMuftiRequest>,
) -> Response {
    match state.app.login_mufti(&request.username, &request.password) {
        Ok(account) => (
            StatusCode::OK,
            Json(MuftiSessionResponse {
                mufti: Some(account.into()),
            }),
        )
            .into_response(),
        Err(err) => ifta_error_response(err, "muftis.login"),
    }
}

pub async fn logout_mufti(State(state): State<WebState>) -> Response {
    match state.app.logout_mufti() {
        Ok(()) => (StatusCode::OK, Json(LogoutResponse { status: "ok" })).into_response(),
        Err(err) => ifta_error_response(err, "muftis.logout"),
    }
}

pub async fn current_mufti(State(state): State<WebState>) -> Response {
    match state.app.current_mufti() {
        Ok(mufti) => (
            StatusCode::OK,
            Json(MuftiSessionResponse {
                mufti: mufti.map(Into::into),
            }),
        )
            .into_response(),
        Err(err) => ifta_error_response(err, "muftis.me"),
    }
}

fn plaintext_download(filename: &str, body: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}
