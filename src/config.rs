//! Configuration resolution and constants.
//!
//! Settings come from CLI flags, then environment variables, then built-in
//! defaults. Everything is resolved once at startup into `AppConfig`, which
//! is immutable for the process lifetime.

// =============================================================================
// Defaults
// =============================================================================

/// Default listening port when neither --port nor PORT is set
pub const DEFAULT_PORT: u16 = 5100;

/// Default reported version when neither --app-version nor APP_VERSION is set
pub const DEFAULT_VERSION: &str = "v1.0.0";

/// Service name reported in response bodies
pub const SERVICE_NAME: &str = "devops-demo";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "devops_demo=debug,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Probe responses must never be served from an upstream cache: a stale
/// `/health` answer would defeat the point of the check.
pub const CACHE_CONTROL_PROBE: &str = "no-store";

/// Seconds to wait for in-flight connections during graceful shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 10;

/// Resolved application configuration. Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening port
    pub port: u16,
    /// Version string reported by `/version`
    pub version: String,
}

impl AppConfig {
    /// Resolve configuration with priority: CLI > environment > default.
    ///
    /// A `PORT` value that does not parse as a port number falls back to
    /// [`DEFAULT_PORT`] with a warning rather than aborting startup.
    pub fn resolve(cli_port: Option<u16>, cli_version: Option<String>) -> Self {
        Self {
            port: resolve_port(cli_port, std::env::var("PORT").ok().as_deref()),
            version: resolve_version(cli_version, std::env::var("APP_VERSION").ok()),
        }
    }
}

fn resolve_port(cli: Option<u16>, env: Option<&str>) -> u16 {
    if let Some(port) = cli {
        return port;
    }
    match env {
        None => DEFAULT_PORT,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(
                value = %raw,
                default = DEFAULT_PORT,
                "PORT is not a valid port number, using default"
            );
            DEFAULT_PORT
        }),
    }
}

fn resolve_version(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env).unwrap_or_else(|| DEFAULT_VERSION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(resolve_port(None, None), DEFAULT_PORT);
    }

    #[test]
    fn port_comes_from_env() {
        assert_eq!(resolve_port(None, Some("8080")), 8080);
    }

    #[test]
    fn cli_port_overrides_env() {
        assert_eq!(resolve_port(Some(9000), Some("8080")), 9000);
    }

    #[test]
    fn non_numeric_port_falls_back_to_default() {
        assert_eq!(resolve_port(None, Some("not-a-port")), DEFAULT_PORT);
    }

    #[test]
    fn out_of_range_port_falls_back_to_default() {
        assert_eq!(resolve_port(None, Some("70000")), DEFAULT_PORT);
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        assert_eq!(resolve_port(None, Some("")), DEFAULT_PORT);
    }

    #[test]
    fn version_defaults_when_unset() {
        assert_eq!(resolve_version(None, None), DEFAULT_VERSION);
    }

    #[test]
    fn version_comes_from_env() {
        assert_eq!(resolve_version(None, Some("v2.3.1".into())), "v2.3.1");
    }

    #[test]
    fn cli_version_overrides_env() {
        assert_eq!(
            resolve_version(Some("v3.0.0".into()), Some("v2.3.1".into())),
            "v3.0.0"
        );
    }
}
