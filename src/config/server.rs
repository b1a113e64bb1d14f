//! HTTP server configuration.

use std::env;

const LOCAL_HOST: &str = "127.0.0.1";
const ALL_INTERFACES: &str = "0.0.0.0";

/// Address the HTTP server binds to
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: LOCAL_HOST.to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// Without an explicit `HOST`, the server binds to all interfaces when
    /// running under Kubernetes or Docker and to localhost otherwise.
    pub fn from_env() -> Self {
        let in_container = env::var("KUBERNETES_SERVICE_HOST").is_ok()
            || env::var("DOCKER_CONTAINER").is_ok();
        let host = resolve_host(env::var("HOST").ok(), in_container);

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        Self { host, port }
    }

    /// `host:port` pair for `HttpServer::bind`
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn resolve_host(host_override: Option<String>, in_container: bool) -> String {
    match host_override {
        Some(host) if !host.trim().is_empty() => host.trim().to_string(),
        _ if in_container => ALL_INTERFACES.to_string(),
        _ => LOCAL_HOST.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 8080));
    }

    #[test]
    fn test_resolve_host() {
        assert_eq!(resolve_host(None, false), "127.0.0.1");
        assert_eq!(resolve_host(None, true), "0.0.0.0");
        assert_eq!(resolve_host(Some("10.0.0.5".to_string()), true), "10.0.0.5");
        assert_eq!(resolve_host(Some("  ".to_string()), false), "127.0.0.1");
    }
}
