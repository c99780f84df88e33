use shared_types::{ApiConfig, AppConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "CLINIC_API_BASE_URL";

/// `config.toml` from the workspace root, baked in so web builds need no
/// filesystem access.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Resolve the backend config once and cache it. Safe to call repeatedly;
/// only the first call does any work.
///
/// Priority: runtime `CLINIC_API_BASE_URL` (native targets, `.env`
/// honoured), compile-time `CLINIC_API_BASE_URL`, `config.toml`, default.
pub fn load() -> &'static ApiConfig {
    CONFIG.get_or_init(|| {
        let config = resolve(runtime_override(), option_env!("CLINIC_API_BASE_URL"), EMBEDDED_CONFIG);
        tracing::info!(base_url = %config.base_url, "clinic api configured");
        config
    })
}

/// Pick the effective config from the available sources.
pub fn resolve(runtime: Option<String>, build_time: Option<&str>, file: &str) -> ApiConfig {
    if let Some(url) = runtime.filter(|u| !u.trim().is_empty()) {
        return ApiConfig::new(url);
    }
    if let Some(url) = build_time.filter(|u| !u.trim().is_empty()) {
        return ApiConfig::new(url);
    }
    parse_config(file).api.normalized()
}

/// Parse `config.toml` contents. Unparseable input logs a warning and
/// yields defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
        AppConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_override() -> Option<String> {
    let _ = dotenvy::dotenv();
    std::env::var(BASE_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_override() -> Option<String> {
    None
}
