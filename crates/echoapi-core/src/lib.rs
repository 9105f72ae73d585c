//! echoapi core: the echo payload model, the body parse chain, and the HTML
//! renderer shared by the gateway and its tests.
//!
//! Nothing here knows about HTTP servers or sockets. The gateway hands in
//! plain strings and byte slices and gets back owned values, which keeps the
//! parsing policy testable without spinning up a router.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed request
//! bodies are never an error: they fall through the parse chain instead.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod echo;
pub mod error;

/// Shared result type.
pub use error::{Result, EchoApiError};
