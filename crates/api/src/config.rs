use std::path::PathBuf;

/// Default acknowledgment shown to a guest after leaving a wish.
pub const DEFAULT_WISH_ACK_MESSAGE: &str = "Thank you for your wishes!";

/// Default location of the gallery page content.
pub const DEFAULT_GALLERY_CONFIG: &str = "content/gallery.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for the database pool to close on shutdown (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Path of the gallery media list (default: `content/gallery.json`).
    pub gallery_config: PathBuf,
    /// Text returned with every successfully stored wish.
    pub wish_ack_message: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `3000`                       |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                         |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                         |
    /// | `GALLERY_CONFIG`       | `content/gallery.json`       |
    /// | `WISH_ACK_MESSAGE`     | `Thank you for your wishes!` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = parse_env("PORT", "3000", "u16")?;

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_env("REQUEST_TIMEOUT_SECS", "30", "u64")?;
        let shutdown_timeout_secs: u64 = parse_env("SHUTDOWN_TIMEOUT_SECS", "30", "u64")?;

        let gallery_config = PathBuf::from(env_or("GALLERY_CONFIG", DEFAULT_GALLERY_CONFIG));
        let wish_ack_message = env_or("WISH_ACK_MESSAGE", DEFAULT_WISH_ACK_MESSAGE);

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            gallery_config,
            wish_ack_message,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

fn parse_env<T: std::str::FromStr>(
    name: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = env_or(name, default);
    value.parse().map_err(|_| ConfigError::Invalid {
        name,
        expected,
        value,
    })
}
