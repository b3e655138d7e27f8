// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::path::Path;

use crate::paths::{AppDir, Layout};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct HelperConfig {
    pub paths: PathsConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Directory layout configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PathsConfig {
    /// Directory the base path is derived from (crate `src` dir if unset)
    #[serde(default)]
    pub anchor: Option<String>,
    /// Parent directories ascended from the anchor
    pub levels: usize,
}

/// Demo server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    /// Pending connection queue length of the listener
    pub backlog: i32,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log file (stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file (stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Seconds a connection may take before it is dropped
    pub request_timeout: u64,
}

impl PathsConfig {
    pub fn layout(&self) -> Layout {
        let layout = match &self.anchor {
            Some(anchor) => Layout::new(anchor),
            None => Layout::default(),
        };
        layout.with_levels(self.levels)
    }
}

impl LoggingConfig {
    pub fn access_log_path(&self, layout: &Layout) -> Option<String> {
        self.access_log_file
            .as_deref()
            .map(|file| resolve_log_file(layout, file))
    }

    pub fn error_log_path(&self, layout: &Layout) -> Option<String> {
        self.error_log_file
            .as_deref()
            .map(|file| resolve_log_file(layout, file))
    }
}

/// Relative log files live in the layout's log directory
fn resolve_log_file(layout: &Layout, file: &str) -> String {
    if Path::new(file).is_absolute() {
        file.to_string()
    } else {
        layout.resolve(AppDir::Logs, file)
    }
}
