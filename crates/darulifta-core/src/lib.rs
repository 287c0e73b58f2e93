// Public fallible APIs in this crate share one concrete error contract (`IftaError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod assist;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod search;
pub mod seed;
pub mod store;
pub mod suggest;

pub use client::DarulIfta;
pub use config::AssistConfig;
pub use error::{IftaError, Result};
pub use models::{Category, CategorySelector, Fatwa, MuftiAccount, UserAccount};
