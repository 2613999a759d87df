//! userbase-rs library
//!
//! HTTP CRUD service for a single MongoDB `users` collection.

use shadow_rs::shadow;
shadow!(build);

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod server;
pub mod state;

pub use state::AppState;

pub fn pkg_name() -> &'static str {
    build::PROJECT_NAME
}

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
