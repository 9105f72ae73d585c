//! In-process request metrics.
//!
//! Counters live in `DashMap`-backed atomics owned by `AppState` and are
//! rendered by the `/metrics` handler in Prometheus text format.

pub mod metrics;

pub use metrics::{ApiMetrics, CounterVec};
