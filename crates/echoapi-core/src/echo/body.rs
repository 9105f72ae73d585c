//! Request body representation and the ordered parse chain.
//!
//! Each `try_*` step returns `Some` only when its representation applies.
//! `EchoBody::parse` walks them in order and the first hit wins:
//! JSON, then form (url-encoded or multipart), then raw text, then an
//! empty object.

use std::convert::Infallible;

use bytes::Bytes;
use futures::{executor::block_on, stream};
use serde_json::Value;

/// Media type that enables url-encoded form decoding.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
/// Media type that enables multipart form decoding.
pub const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

/// Parsed request body.
#[derive(Debug, Clone, PartialEq)]
pub enum EchoBody {
    /// Well-formed JSON document.
    Json(Value),
    /// Decoded form fields, first value per key, in submission order.
    Form(Vec<(String, String)>),
    /// Anything else that is not empty (UTF-8, lossy).
    Raw(String),
    /// No body at all; rendered as `{}`.
    Empty,
}

impl EchoBody {
    /// Run the parse chain over a request body.
    pub fn parse(content_type: Option<&str>, raw: &[u8]) -> Self {
        try_json(raw)
            .or_else(|| try_form(content_type, raw))
            .or_else(|| try_raw(raw))
            .unwrap_or(EchoBody::Empty)
    }

    /// Short tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            EchoBody::Json(_) => "json",
            EchoBody::Form(_) => "form",
            EchoBody::Raw(_) => "raw",
            EchoBody::Empty => "empty",
        }
    }
}

/// Attempt to read the body as a JSON document.
///
/// Tried on every body whatever its `Content-Type`, so `text/plain` `[1,2]`
/// comes back as JSON. Syntax errors are not reported to the caller; they
/// only mean the next representation gets a chance.
pub fn try_json(raw: &[u8]) -> Option<EchoBody> {
    match serde_json::from_slice::<Value>(raw) {
        Ok(v) => Some(EchoBody::Json(v)),
        Err(e) => {
            if !raw.is_empty() {
                tracing::trace!(error = %e, "body is not json, falling back");
            }
            None
        }
    }
}

/// Attempt to decode a form body, url-encoded or `multipart/form-data`.
/// Requires a form content type and at least one text field.
pub fn try_form(content_type: Option<&str>, raw: &[u8]) -> Option<EchoBody> {
    let content_type = content_type?;
    let pairs = match essence(content_type) {
        Some(e) if e.eq_ignore_ascii_case(FORM_CONTENT_TYPE) => {
            serde_urlencoded::from_bytes::<Vec<(String, String)>>(raw).ok()?
        }
        Some(e) if e.eq_ignore_ascii_case(MULTIPART_CONTENT_TYPE) => {
            multipart_fields(content_type, raw)?
        }
        _ => return None,
    };

    let fields = first_values(pairs);
    if fields.is_empty() {
        None
    } else {
        Some(EchoBody::Form(fields))
    }
}

/// Text fields of a multipart body, in order. File parts are skipped.
fn multipart_fields(content_type: &str, raw: &[u8]) -> Option<Vec<(String, String)>> {
    let boundary = multer::parse_boundary(content_type).ok()?;
    let chunk = Bytes::copy_from_slice(raw);
    let stream = stream::once(async move { Ok::<Bytes, Infallible>(chunk) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    // the whole body is already in memory, so no poll ever waits on I/O
    let fields = block_on(async move {
        let mut pairs = Vec::new();
        while let Some(field) = multipart.next_field().await? {
            if field.file_name().is_some() {
                continue;
            }
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            pairs.push((name, field.text().await?));
        }
        Ok::<_, multer::Error>(pairs)
    });

    match fields {
        Ok(pairs) => Some(pairs),
        Err(e) => {
            tracing::trace!(error = %e, "malformed multipart body, falling back");
            None
        }
    }
}

/// Repeated key: first value wins, order of first appearance kept.
fn first_values(pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (k, v) in pairs {
        if !fields.iter().any(|(seen, _)| *seen == k) {
            fields.push((k, v));
        }
    }
    fields
}

/// Keep any non-empty body as text.
pub fn try_raw(raw: &[u8]) -> Option<EchoBody> {
    if raw.is_empty() {
        None
    } else {
        Some(EchoBody::Raw(String::from_utf8_lossy(raw).into_owned()))
    }
}

fn essence(content_type: &str) -> Option<&str> {
    content_type.split(';').next().map(str::trim)
}
