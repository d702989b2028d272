/*
 * Responsibility
 * - 環境変数や設定の読み込み (サービス URL, timeout, 保護対象 prefix など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use axum::http::Method;
use url::Url;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Routes the authentication middleware gates.
///
/// Anything outside the prefix set passes through untouched. A method outside
/// the method set also passes through, so the router can answer 405 instead of
/// the middleware masking it as an auth failure.
#[derive(Clone, Debug)]
pub struct ProtectedRoutes {
    prefixes: Vec<String>,
    methods: Vec<Method>,
}

impl ProtectedRoutes {
    pub fn new(prefixes: Vec<String>, methods: Vec<Method>) -> Self {
        Self { prefixes, methods }
    }

    pub fn matches(&self, path: &str, method: &Method) -> bool {
        self.methods.contains(method) && self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    /// Full URL of the authentication authority's validation endpoint.
    pub validate_url: Url,
    /// Full URL of the downstream message endpoint.
    pub forward_url: Url,

    /// Inbound route the gateway proxies (registered for POST).
    pub message_path: String,
    pub protected: ProtectedRoutes,

    /// Applied to every outbound call (validation and forwarding).
    pub upstream_timeout: Duration,
    /// Whether the original request body is forwarded downstream.
    pub forward_request_body: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("GATEWAY_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8003);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("GATEWAY_PORT"))?;

        let app_env = AppEnv::from_env();

        let auth_service_url = std::env::var("AUTH_SERVICE_URL")
            .map_err(|_| ConfigError::Missing("AUTH_SERVICE_URL"))?;
        let auth_validation_path =
            std::env::var("AUTH_VALIDATION_PATH").unwrap_or_else(|_| "/validate".to_string());

        let chat_service_url = std::env::var("CHAT_SERVICE_URL")
            .map_err(|_| ConfigError::Missing("CHAT_SERVICE_URL"))?;
        let chat_message_path =
            std::env::var("CHAT_MESSAGE_PATH").unwrap_or_else(|_| "/api/v1/message".to_string());

        let validate_url = join_url(&auth_service_url, &auth_validation_path)
            .ok_or(ConfigError::Invalid("AUTH_SERVICE_URL"))?;
        let forward_url = join_url(&chat_service_url, &chat_message_path)
            .ok_or(ConfigError::Invalid("CHAT_SERVICE_URL"))?;

        let message_path = std::env::var("GATEWAY_MESSAGE_PATH")
            .unwrap_or_else(|_| "/api/v1/message".to_string());
        if !message_path.starts_with('/') {
            return Err(ConfigError::Invalid("GATEWAY_MESSAGE_PATH"));
        }

        let prefixes = std::env::var("PROTECTED_PATH_PREFIXES")
            .unwrap_or_else(|_| "/api/v1".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let methods = std::env::var("PROTECTED_METHODS")
            .unwrap_or_else(|_| "POST".to_string())
            .split(',')
            .map(|s| Method::from_str(s.trim().to_ascii_uppercase().as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ConfigError::Invalid("PROTECTED_METHODS"))?;

        let upstream_timeout = std::env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        let forward_request_body = std::env::var("FORWARD_REQUEST_BODY")
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(true);

        Ok(Self {
            addr,
            app_env,
            validate_url,
            forward_url,
            message_path,
            protected: ProtectedRoutes::new(prefixes, methods),
            upstream_timeout,
            forward_request_body,
        })
    }
}

impl From<ConfigError> for AppError {
    fn from(_: ConfigError) -> Self {
        AppError::Internal
    }
}

// Base and path are configured separately; joining is plain concatenation
// (with a trailing-slash guard), not Url::join semantics.
fn join_url(base: &str, path: &str) -> Option<Url> {
    Url::parse(&format!("{}{}", base.trim_end_matches('/'), path)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_trailing_slash() {
        let url = join_url("http://localhost:8001/", "/validate").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8001/validate");
    }

    #[test]
    fn join_url_rejects_garbage() {
        assert!(join_url("not a url", "/validate").is_none());
    }

    #[test]
    fn protected_routes_match_prefix_and_method() {
        let protected =
            ProtectedRoutes::new(vec!["/api/v1".to_string()], vec![Method::POST]);

        assert!(protected.matches("/api/v1/message", &Method::POST));
        assert!(!protected.matches("/health", &Method::POST));
        // Wrong method falls through to the router's own 405.
        assert!(!protected.matches("/api/v1/message", &Method::GET));
    }
}
