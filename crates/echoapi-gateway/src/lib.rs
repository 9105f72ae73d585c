//! echoapi gateway library entry.
//!
//! Wires config, the shared metrics registry, the echo handler, and the
//! operational endpoints into one axum router. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod obs;
pub mod ops;
pub mod router;
