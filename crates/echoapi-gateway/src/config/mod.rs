//! Server config loader (strict parsing + env overrides).
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults (`0.0.0.0:5000`)
//! 2. YAML file named by `ECHOAPI_CONFIG`, if set
//! 3. `PORT` env var, when it parses as a port number

pub mod schema;

use std::fs;

use echoapi_core::error::{Result, EchoApiError};

pub use schema::{ServerConfig, ServerSection, DEFAULT_PORT};

/// Env var naming an optional YAML config file.
pub const CONFIG_PATH_ENV: &str = "ECHOAPI_CONFIG";
/// Env var overriding the listen port.
pub const PORT_ENV: &str = "PORT";

/// Load config from the environment.
pub fn load() -> Result<ServerConfig> {
    let mut cfg = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => load_from_file(&path)?,
        Err(_) => ServerConfig::default(),
    };
    let port_env = std::env::var(PORT_ENV).ok();
    cfg.server.port = resolve_port(port_env.as_deref(), cfg.server.port);
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| EchoApiError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| EchoApiError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Pick the listen port from a raw `PORT` value.
///
/// Unset keeps `fallback` silently; an unparseable value keeps it with a
/// warning. Never an error.
pub fn resolve_port(raw: Option<&str>, fallback: u16) -> u16 {
    let Some(raw) = raw else {
        return fallback;
    };
    match raw.trim().parse::<u16>() {
        Ok(port) => port,
        Err(e) => {
            tracing::warn!(value = %raw, error = %e, fallback, "ignoring unparseable PORT");
            fallback
        }
    }
}
