//! Echo payload model (what `/api` reflects back).
//!
//! - `body`: the four-way body representation and its parse chain.
//! - `render`: HTML rendering of a captured request.

pub mod body;
pub mod render;

pub use body::EchoBody;
pub use render::{render_page, GREETING};

/// One captured request, alive only while its response is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct EchoPayload {
    /// HTTP method as sent (e.g. "POST").
    pub method: String,
    /// Header name/value pairs in arrival order, repeated names collapsed.
    pub headers: Vec<(String, String)>,
    /// Parsed body.
    pub body: EchoBody,
}

/// Fold repeated header names into one comma-joined value (RFC 9110 list
/// semantics). Order follows the first occurrence of each name.
pub fn collapse_headers<I>(pairs: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut out: Vec<(String, String)> = Vec::new();
    for (name, value) in pairs {
        match out.iter_mut().find(|(seen, _)| seen.eq_ignore_ascii_case(&name)) {
            Some((_, joined)) => {
                joined.push_str(", ");
                joined.push_str(&value);
            }
            None => out.push((name, value)),
        }
    }
    out
}
