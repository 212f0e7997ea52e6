//! Librarium Library Management Record-Keeper
//!
//! A Rust implementation of the Librarium record-keeping server,
//! providing a REST JSON API for managing librarian accounts, book
//! inventory, categories, and borrow/return log operations.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
