use shared_types::ClientConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Config file used when `SEARCH_CONFIG` is not set.
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_CONFIG_PATH: &str = "search.toml";

/// The workspace `search.toml`, compiled in. The browser has no filesystem
/// or process environment, so web builds configure from this.
#[cfg_attr(not(any(target_arch = "wasm32", test)), allow(dead_code))]
const EMBEDDED_CONFIG: &str = include_str!("../../../search.toml");

/// Parse a TOML config document.
pub fn parse_client_config(contents: &str) -> Result<ClientConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Point the client at a different service. Empty values are ignored.
fn apply_service_url(mut config: ClientConfig, url: Option<String>) -> ClientConfig {
    if let Some(url) = url.filter(|url| !url.is_empty()) {
        config.service.base_url = url;
    }
    config
}

/// Where the config document comes from on this target, and its contents.
#[cfg(not(target_arch = "wasm32"))]
fn config_source() -> (String, std::io::Result<String>) {
    let path = std::env::var("SEARCH_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let contents = std::fs::read_to_string(&path);
    (path, contents)
}

#[cfg(target_arch = "wasm32")]
fn config_source() -> (String, std::io::Result<String>) {
    ("<embedded search.toml>".to_string(), Ok(EMBEDDED_CONFIG.to_string()))
}

/// Runtime `SEARCH_SERVICE_URL` on native targets.
#[cfg(not(target_arch = "wasm32"))]
fn service_url_override() -> Option<String> {
    std::env::var("SEARCH_SERVICE_URL").ok()
}

/// Web builds take `SEARCH_SERVICE_URL` from the build environment.
#[cfg(target_arch = "wasm32")]
fn service_url_override() -> Option<String> {
    option_env!("SEARCH_SERVICE_URL").map(str::to_string)
}

/// Read the config for this target, parse it, and store it in the global
/// `OnceLock`. Safe to call multiple times; only the first call has effect.
///
/// A missing or unparseable document falls back to defaults.
pub fn load_client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let (source, contents) = config_source();
        let config = match contents {
            Ok(contents) => parse_client_config(&contents).unwrap_or_else(|e| {
                tracing::warn!(source = %source, error = %e, "Failed to parse config, using defaults");
                ClientConfig::default()
            }),
            Err(e) => {
                tracing::warn!(source = %source, error = %e, "Config not found, using defaults");
                ClientConfig::default()
            }
        };
        let config = apply_service_url(config, service_url_override());
        tracing::info!(source = %source, base_url = %config.service.base_url, "Search client configured");
        config
    })
}

/// Get the loaded config, or defaults if `load_client_config()` hasn't run.
pub fn client_config() -> &'static ClientConfig {
    static DEFAULT: OnceLock<ClientConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(ClientConfig::default))
}
