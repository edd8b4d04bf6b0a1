//! Runtime configuration for the admin UI

/// Backend used when `ROOMIE_API_URL` is not set
pub const DEFAULT_API_URL: &str = "https://hello-backend-five.vercel.app";
/// Request timeout used when `ROOMIE_API_TIMEOUT_MS` is not set or invalid
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;
/// Rows per page for every table unless a page overrides it
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Application configuration, resolved once at startup
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    pub default_page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from the environment.
    ///
    /// In the browser only build-time values exist, so wasm builds read
    /// `option_env!`. Native builds prefer the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(lookup_env)
    }

    /// Resolve configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup("ROOMIE_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout_ms = lookup("ROOMIE_API_TIMEOUT_MS")
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            request_timeout_ms,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn compile_time_env(key: &str) -> Option<String> {
    let value = match key {
        "ROOMIE_API_URL" => option_env!("ROOMIE_API_URL"),
        "ROOMIE_API_TIMEOUT_MS" => option_env!("ROOMIE_API_TIMEOUT_MS"),
        "ROOMIE_LOG" => option_env!("ROOMIE_LOG"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(target_arch = "wasm32")]
fn lookup_env(key: &str) -> Option<String> {
    compile_time_env(key)
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup_env(key: &str) -> Option<String> {
    std::env::var(key).ok().or_else(|| compile_time_env(key))
}

/// Log level requested through `ROOMIE_LOG`, defaulting to `INFO`
pub fn log_level() -> tracing::Level {
    match lookup_env("ROOMIE_LOG").as_deref().map(str::trim) {
        Some("trace") => tracing::Level::TRACE,
        Some("debug") => tracing::Level::DEBUG,
        Some("warn") => tracing::Level::WARN,
        Some("error") => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
