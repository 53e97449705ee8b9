//! Configuration and file management for relai-deck
//!
//! This crate provides:
//! - The cache directory used for log files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::{load_config_file, CONFIG_FILE};
pub use paths::cache_dir;
