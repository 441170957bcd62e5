//! Integration tests for the Bookshelf server

mod server_tests;

use std::path::Path;

use bookshelf_server::{api, AppConfig, AppState};

/// Router over an empty catalog, serving static files from `static_dir`
pub fn test_app(static_dir: &Path) -> axum::Router {
    let mut config = AppConfig::default();
    config.static_files.dir = static_dir.to_path_buf();
    api::create_router(AppState::new(config))
}
