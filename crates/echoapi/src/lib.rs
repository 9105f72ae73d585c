//! Top-level facade crate for echoapi.
//!
//! Re-exports the core payload types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use echoapi_core::*;
}

pub mod gateway {
    pub use echoapi_gateway::*;
}
