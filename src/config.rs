//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for trivia-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:5000"`).
    pub bind_address: String,

    /// SQLite (or other) database URL (default: `"sqlite://trivia.db"`).
    /// Supports any sqlx-compatible connection string – swap the scheme to
    /// migrate to Postgres (`postgres://…`) or MySQL (`mysql://…`).
    pub database_url: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins.
    /// `None` means wildcard (development default).
    pub cors_allowed_origins: Option<String>,

    /// Comma-separated list of allowed CORS request headers.
    /// `None` means wildcard.
    pub cors_allowed_headers: Option<String>,

    /// Comma-separated list of allowed CORS methods.
    /// `None` means wildcard.
    pub cors_allowed_methods: Option<String>,

    /// Serve Swagger UI at `/swagger-ui` (default: true).
    /// Disable in production to avoid exposing the API structure.
    pub enable_swagger: bool,

    /// Number of questions per pagination page (default: 10).
    pub page_size: u32,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("TRIVIA_BIND", "0.0.0.0:5000"),
            database_url: env_or("TRIVIA_DATABASE_URL", "sqlite://trivia.db"),
            log_level: env_or("TRIVIA_LOG", "info"),
            log_json: std::env::var("TRIVIA_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            cors_allowed_origins: std::env::var("TRIVIA_CORS_ORIGINS").ok(),
            cors_allowed_headers: std::env::var("TRIVIA_CORS_HEADERS").ok(),
            cors_allowed_methods: std::env::var("TRIVIA_CORS_METHODS").ok(),
            enable_swagger: std::env::var("TRIVIA_ENABLE_SWAGGER")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
            page_size: parse_env("TRIVIA_PAGE_SIZE", 10),
        }
    }
}

impl Default for Config {
    /// Defaults only, ignoring the environment. Used by tests.
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_owned(),
            database_url: "sqlite://trivia.db".to_owned(),
            log_level: "info".to_owned(),
            log_json: false,
            cors_allowed_origins: None,
            cors_allowed_headers: None,
            cors_allowed_methods: None,
            enable_swagger: true,
            page_size: 10,
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
