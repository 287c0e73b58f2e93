use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};

use darulifta_core::DarulIfta;

mod dto;
mod error;
mod handlers;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) app: DarulIfta,
}

impl WebState {
    fn new(app: DarulIfta) -> Self {
        Self { app }
    }
}

/// Start the JSON web surface and block until shutdown.
///
/// # Errors
/// Returns an error when the runtime cannot be created, the socket
/// cannot be bound, or the server exits with a runtime failure.
pub fn serve_web(app: DarulIfta, host: &str, port: u16) -> Result<()> {
    let state = WebState::new(app);
    let bind_addr = format!("{host}:{port}");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build web runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind web server at {bind_addr}"))?;
        println!("darulifta listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app_router(state))
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await
            .context("web server failed")
    })
}

pub(crate) fn app_router(state: WebState) -> Router {
    Router::new()
        .route("/api/site", get(handlers::site))
        .route("/api/fatwas", get(handlers::browse).post(handlers::publish))
        .route("/api/fatwas/{id}", get(handlers::detail))
        .route("/api/fatwas/{id}/transcript", get(handlers::record_transcript))
        .route("/api/suggest", get(handlers::suggest))
        .route("/api/questions", post(handlers::submit_question))
        .route("/api/questions/insight", post(handlers::instant_insight))
        .route("/api/search/grounded", post(handlers::grounded_search))
        .route("/api/users/register", post(handlers::register_user))
        .route("/api/users/login", post(handlers::login_user))
        .route("/api/users/logout", post(handlers::logout_user))
        .route("/api/users/me", get(handlers::current_user))
        .route("/api/users/me/transcript", get(handlers::profile_transcript))
        .route("/api/muftis/register", post(handlers::register_mufti))
        .route("/api/muftis/login", post(handlers::login_mufti))
        .route("/api/muftis/logout", post(handlers::logout_mufti))
        .route("/api/muftis/me", get(handlers::current_mufti))
        .with_state(state)
}
