//! Application HTTP handlers.

pub mod echo;

pub use echo::{echo, ECHO_ENDPOINT};
