//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file, then applies
//! the `POSTGRES_*` environment variable overrides. `AppConfig` is the root
//! configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Glob pattern for template files
pub const TEMPLATE_GLOB: &str = "templates/**/*";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "marquee=debug";

/// Server header value sent with every response (compile-time concatenation)
pub const SERVER_HEADER: &str = formatcp!("marquee/{}", env!("CARGO_PKG_VERSION"));

/// Cache-Control for the movie list page. The page reflects live database
/// state, so upstream caches must not hold it.
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// User-Facing Status Strings
// =============================================================================

/// Status line when the health-check query succeeds
pub const STATUS_DB_CONNECTED: &str = "DB connected successfully";

/// Status line when the health-check query fails
pub const STATUS_DB_UNREACHABLE: &str = "Failed to connect to DB";

/// Confirmation message for a successful insert
pub const MSG_INSERT_OK: &str = "Movie inserted successfully";

/// Confirmation message for a failed insert
pub const MSG_INSERT_FAILED: &str = "Failed to insert movie";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// PostgreSQL connection settings
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl HttpServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8000
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

/// PostgreSQL connection settings.
///
/// Each field can be overridden by the corresponding `POSTGRES_*` environment
/// variable, which takes precedence over both the config file and the
/// built-in defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseConfig::default_host")]
    pub host: String,
    #[serde(default = "DatabaseConfig::default_user")]
    pub user: String,
    #[serde(default = "DatabaseConfig::default_password")]
    pub password: String,
    #[serde(default = "DatabaseConfig::default_dbname")]
    pub dbname: String,
    #[serde(default = "DatabaseConfig::default_port")]
    pub port: u16,
    /// Maximum pool size. When unset, the pool library default applies.
    pub pool_size: Option<usize>,
}

impl DatabaseConfig {
    fn default_host() -> String {
        "localhost".to_string()
    }

    fn default_user() -> String {
        "your_username".to_string()
    }

    fn default_password() -> String {
        "your_password".to_string()
    }

    fn default_dbname() -> String {
        "your_database".to_string()
    }

    fn default_port() -> u16 {
        5432
    }

    /// Apply `POSTGRES_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup function. A `POSTGRES_PORT`
    /// value that does not parse as a port number is ignored.
    pub fn apply_overrides_from(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(host) = get("POSTGRES_HOST") {
            self.host = host;
        }
        if let Some(user) = get("POSTGRES_USER") {
            self.user = user;
        }
        if let Some(password) = get("POSTGRES_PASSWORD") {
            self.password = password;
        }
        if let Some(dbname) = get("POSTGRES_DB") {
            self.dbname = dbname;
        }
        if let Some(port) = get("POSTGRES_PORT").and_then(|p| p.parse().ok()) {
            self.port = port;
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            user: Self::default_user(),
            password: Self::default_password(),
            dbname: Self::default_dbname(),
            port: Self::default_port(),
            pool_size: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfig {
    /// Site title shown in the page heading. Defaults to the host name.
    pub site_name: Option<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to built-in
    /// defaults when the file does not exist, then apply environment
    /// overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = if path.as_ref().exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<AppConfig>(&contents)?
        } else {
            AppConfig::default()
        };

        config.database.apply_env_overrides();
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
