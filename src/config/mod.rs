// Configuration module entry point
// Loads layered configuration: defaults, optional file, environment

mod types;

use std::net::SocketAddr;

use crate::paths::{Layout, DEFAULT_LEVELS};

pub use types::{HelperConfig, LoggingConfig, PathsConfig, PerformanceConfig, ServerConfig};

/// Config file looked up by [`HelperConfig::load`] (extension optional)
pub const DEFAULT_CONFIG_FILE: &str = "webhelpers";

impl HelperConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from specified file path (without extension)
    /// A missing file is not an error; `WEBHELPERS_*` variables override it,
    /// with `__` between nested keys (`WEBHELPERS_SERVER__PORT`)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("WEBHELPERS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("paths.levels", u64::try_from(DEFAULT_LEVELS).unwrap_or(2))?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.backlog", 128)?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.request_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    pub fn layout(&self) -> Layout {
        self.paths.layout()
    }
}
