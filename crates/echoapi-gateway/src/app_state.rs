//! Shared application state for the echo API.
//!
//! `AppState` is the composition root: it owns the validated config and the
//! metrics registry, and axum hands a clone of it to every handler. Tests
//! build their own instance, so counters never leak between them.

use std::sync::Arc;

use echoapi_core::error::Result;

use crate::config::ServerConfig;
use crate::obs::ApiMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    metrics: ApiMetrics,
}

impl AppState {
    /// Build application state from a config.
    /// Returns Result so main can report a bad config instead of panicking.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: ApiMetrics::new(),
            }),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ApiMetrics {
        &self.inner.metrics
    }
}
