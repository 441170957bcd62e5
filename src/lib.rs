//! Bookshelf
//!
//! An in-memory book catalog served as a REST JSON API. Records live only in
//! process memory behind a single lock and are lost on exit.

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

impl AppState {
    /// State over an empty catalog
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository::Repository::new())),
        }
    }
}
