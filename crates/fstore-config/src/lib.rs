//! Configuration and file locations for fstore
//!
//! This crate provides:
//! - Platform paths for config and cache files
//! - Configuration file discovery (TOML)
//! - Application configuration (AppConfig) with environment overrides

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, API_SERVER_URL_ENV};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir, download_dir};
