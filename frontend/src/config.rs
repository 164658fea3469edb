//! Backend API configuration.
//!
//! The frontend talks to one of two backends: a local development server or
//! the hosted production service. Which one is decided from the hostname the
//! page was served from, once, when the application starts:
//!
//! ```text
//! hostname ──▶ Environment ──▶ base URL ──▶ Endpoints
//! ```
//!
//! [`ApiConfig::resolve`] takes the hostname explicitly so the whole
//! resolution is a pure function; [`ApiConfig::from_window`] is the thin
//! browser wrapper used by the application entry point.

use std::fmt;
use std::time::Duration;

use crate::types::{AppError, AppResult};

/// Local development backend.
pub const BACKEND_URL_DEV: &str = "http://localhost:8000";

/// Hosted production backend.
pub const BACKEND_URL_PROD: &str = "https://bda-final-project.onrender.com";

/// Request timeout (in milliseconds).
///
/// Audio summarisation is slow, so this is 5 minutes.
pub const REQUEST_TIMEOUT_MS: u64 = 300_000;

/// Maximum audio file size for upload (in bytes).
///
/// 500 MB limit.
pub const MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Maximum logs to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Application name shown in the UI.
pub const APP_NAME: &str = "Smart Note";

const DEV_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];
const LAN_PREFIX: &str = "192.168.";

// =============================================================================
// Environment
// =============================================================================

/// Where the frontend is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Served from the local machine or the LAN.
    Development,
    /// Served from anywhere else.
    Production,
}

impl Environment {
    /// Classify a page hostname.
    ///
    /// `localhost`, `127.0.0.1` and any `192.168.*` address are development;
    /// every other string, including the empty one, is production.
    pub fn from_hostname(hostname: &str) -> Self {
        if DEV_HOSTNAMES.contains(&hostname) || hostname.starts_with(LAN_PREFIX) {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Backend URLs
// =============================================================================

/// The pair of backend base URLs to choose from.
///
/// Defaults to [`BACKEND_URL_DEV`] and [`BACKEND_URL_PROD`]. Values are not
/// validated; whatever is given is used verbatim as a prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendUrls {
    pub development: String,
    pub production: String,
}

impl BackendUrls {
    pub fn new(development: impl Into<String>, production: impl Into<String>) -> Self {
        Self {
            development: development.into(),
            production: production.into(),
        }
    }

    /// Base URL for the given environment.
    pub fn select(&self, environment: Environment) -> &str {
        match environment {
            Environment::Development => &self.development,
            Environment::Production => &self.production,
        }
    }
}

impl Default for BackendUrls {
    fn default() -> Self {
        Self::new(BACKEND_URL_DEV, BACKEND_URL_PROD)
    }
}

// =============================================================================
// Endpoints
// =============================================================================

/// Logical backend endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `POST` an audio file for summarisation.
    ProcessAudio,
    /// `POST` a YouTube URL for summarisation.
    ProcessYoutube,
    /// `GET` liveness probe.
    Health,
    /// `GET` API description.
    Root,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::ProcessAudio,
        Endpoint::ProcessYoutube,
        Endpoint::Health,
        Endpoint::Root,
    ];

    /// Lookup key, e.g. `"PROCESS_AUDIO"`.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::ProcessAudio => "PROCESS_AUDIO",
            Endpoint::ProcessYoutube => "PROCESS_YOUTUBE",
            Endpoint::Health => "HEALTH",
            Endpoint::Root => "ROOT",
        }
    }

    /// Path appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ProcessAudio => "/process_audio/",
            Endpoint::ProcessYoutube => "/process_youtube/",
            Endpoint::Health => "/health",
            Endpoint::Root => "/",
        }
    }

    /// Inverse of [`Endpoint::name`]. Keys are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|endpoint| endpoint.name() == name)
    }
}

/// Fully qualified URL of every endpoint, all sharing one base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub process_audio: String,
    pub process_youtube: String,
    pub health: String,
    pub root: String,
}

impl Endpoints {
    pub fn build(base_url: &str) -> Self {
        let url = |endpoint: Endpoint| format!("{}{}", base_url, endpoint.path());
        Self {
            process_audio: url(Endpoint::ProcessAudio),
            process_youtube: url(Endpoint::ProcessYoutube),
            health: url(Endpoint::Health),
            root: url(Endpoint::Root),
        }
    }

    pub fn get(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::ProcessAudio => &self.process_audio,
            Endpoint::ProcessYoutube => &self.process_youtube,
            Endpoint::Health => &self.health,
            Endpoint::Root => &self.root,
        }
    }
}

// =============================================================================
// ApiConfig
// =============================================================================

/// Resolved, immutable API configuration.
///
/// Built once at start-up and shared with the rest of the application
/// through the Leptos context.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    hostname: String,
    environment: Environment,
    base_url: String,
    endpoints: Endpoints,
    timeout: Duration,
    max_file_size: u64,
}

impl ApiConfig {
    /// Resolve the configuration for a page served from `hostname`.
    pub fn resolve(hostname: &str, urls: &BackendUrls) -> Self {
        let environment = Environment::from_hostname(hostname);
        let base_url = urls.select(environment).to_string();
        let endpoints = Endpoints::build(&base_url);

        Self {
            hostname: hostname.to_string(),
            environment,
            base_url,
            endpoints,
            timeout: Duration::from_millis(REQUEST_TIMEOUT_MS),
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Resolve from `window.location.hostname` with the default backends.
    ///
    /// An unreadable hostname is treated as empty, i.e. production.
    pub fn from_window() -> Self {
        let hostname = gloo_utils::window()
            .location()
            .hostname()
            .unwrap_or_else(|e| {
                log::warn!("⚠️  Could not read page hostname: {:?}", e);
                String::new()
            });

        Self::resolve(&hostname, &BackendUrls::default())
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> &str {
        self.endpoints.get(endpoint)
    }

    /// Timeout applied to every backend request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// URL for an endpoint key such as `"HEALTH"`.
    ///
    /// Unknown keys fall back to the base URL.
    pub fn get_api_url(&self, name: &str) -> &str {
        match Endpoint::from_name(name) {
            Some(endpoint) => self.endpoint(endpoint),
            None => &self.base_url,
        }
    }

    /// Reject uploads larger than the configured maximum.
    pub fn check_file_size(&self, size: u64) -> AppResult<()> {
        if size > self.max_file_size {
            return Err(AppError::Validation(format!(
                "File is too large: {} (max {})",
                format_size(size),
                format_size(self.max_file_size)
            )));
        }
        Ok(())
    }

    /// Log where the frontend thinks it is running.
    pub fn log_summary(&self) {
        log::info!("🌍 Environment: {}", self.environment);
        log::info!("  - API base URL: {}", self.base_url);
        log::info!("  - Frontend hostname: {}", self.hostname);
    }
}

/// Format a byte count in MB with one decimal.
pub fn format_size(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(hostname: &str) -> ApiConfig {
        ApiConfig::resolve(hostname, &BackendUrls::default())
    }

    #[test]
    fn test_development_hostnames() {
        for hostname in ["localhost", "127.0.0.1", "192.168.0.1", "192.168.1.42", "192.168."] {
            let config = resolve(hostname);
            assert_eq!(config.environment(), Environment::Development, "{}", hostname);
            assert_eq!(config.base_url(), BACKEND_URL_DEV);
        }
    }

    #[test]
    fn test_production_hostnames() {
        for hostname in [
            "",
            "::1",
            "app.example.com",
            "bda-final-project-1.onrender.com",
            "localhost.example.com",
            "10.0.0.1",
            "192.169.0.1",
            "LOCALHOST",
        ] {
            let config = resolve(hostname);
            assert_eq!(config.environment(), Environment::Production, "{:?}", hostname);
            assert_eq!(config.base_url(), BACKEND_URL_PROD);
        }
    }

    #[test]
    fn test_localhost_scenario() {
        let config = resolve("localhost");
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.get_api_url("ROOT"), "http://localhost:8000/");
        assert_eq!(config.hostname(), "localhost");
    }

    #[test]
    fn test_production_scenario() {
        let config = resolve("app.example.com");
        assert_eq!(config.base_url(), "https://bda-final-project.onrender.com");
        assert_eq!(
            config.endpoints().process_youtube,
            "https://bda-final-project.onrender.com/process_youtube/"
        );
    }

    #[test]
    fn test_endpoints_share_base_url() {
        let urls = BackendUrls::new("http://dev.internal:9000", "not even a url");
        for hostname in ["localhost", "example.org"] {
            let config = ApiConfig::resolve(hostname, &urls);
            let base = config.base_url().to_string();
            let endpoints = config.endpoints();
            assert_eq!(endpoints.process_audio, format!("{}/process_audio/", base));
            assert_eq!(endpoints.process_youtube, format!("{}/process_youtube/", base));
            assert_eq!(endpoints.health, format!("{}/health", base));
            assert_eq!(endpoints.root, format!("{}/", base));
        }
        assert_eq!(ApiConfig::resolve("example.org", &urls).base_url(), "not even a url");
    }

    #[test]
    fn test_get_api_url() {
        let config = resolve("127.0.0.1");
        assert_eq!(config.get_api_url("HEALTH"), config.endpoints().health);
        assert_eq!(config.get_api_url("PROCESS_AUDIO"), config.endpoints().process_audio);
        assert_eq!(config.get_api_url("PROCESS_YOUTUBE"), config.endpoints().process_youtube);
        assert_eq!(config.get_api_url("UNKNOWN_KEY"), config.base_url());
        assert_eq!(config.get_api_url(""), config.base_url());
        assert_eq!(config.get_api_url("health"), config.base_url());
    }

    #[test]
    fn test_endpoint_names_round_trip() {
        for endpoint in Endpoint::ALL {
            assert_eq!(Endpoint::from_name(endpoint.name()), Some(endpoint));
        }
        assert_eq!(Endpoint::from_name("UNKNOWN_KEY"), None);
    }

    #[test]
    fn test_constants() {
        let config = resolve("localhost");
        assert_eq!(config.timeout(), Duration::from_millis(300_000));
        assert_eq!(config.max_file_size(), 524_288_000);
    }

    #[test]
    fn test_check_file_size() {
        let config = resolve("localhost");
        assert!(config.check_file_size(0).is_ok());
        assert!(config.check_file_size(MAX_FILE_SIZE).is_ok());

        let err = config.check_file_size(MAX_FILE_SIZE + 1).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("max 500.0 MB"));
    }
}
