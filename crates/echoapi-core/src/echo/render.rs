//! HTML rendering for `/api` responses.
//!
//! Layout is plain and stable: greeting, method, header table, body. Every
//! echoed string goes through `escape_html`.

use std::fmt::Write;

use super::{EchoBody, EchoPayload};

/// Fixed greeting on every echo page.
pub const GREETING: &str = "Welcome to our demo API";

/// Render the full response page for one captured request.
pub fn render_page(payload: &EchoPayload) -> String {
    let mut out = String::with_capacity(1024);

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(
        out,
        "<html>\n<head><meta charset=\"utf-8\"><title>Demo API</title></head>\n<body>"
    );
    let _ = writeln!(out, "<h1>{}</h1>", GREETING);
    let _ = writeln!(
        out,
        "<h2>Method</h2>\n<p class=\"method\">{}</p>",
        escape_html(&payload.method)
    );

    let _ = writeln!(out, "<h2>Headers</h2>\n<table class=\"headers\">");
    for (name, value) in &payload.headers {
        let _ = writeln!(
            out,
            "<tr><th>{}</th><td>{}</td></tr>",
            escape_html(name),
            escape_html(value)
        );
    }
    let _ = writeln!(out, "</table>");

    let _ = writeln!(out, "<h2>Body</h2>");
    render_body(&payload.body, &mut out);

    let _ = writeln!(out, "</body>\n</html>");
    out
}

/// Render one body variant.
pub fn render_body(body: &EchoBody, out: &mut String) {
    match body {
        EchoBody::Json(v) => {
            let pretty = serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string());
            let _ = writeln!(out, "<pre class=\"json\">{}</pre>", escape_html(&pretty));
        }
        EchoBody::Form(fields) => {
            let _ = writeln!(out, "<table class=\"form\">");
            for (k, v) in fields {
                let _ = writeln!(
                    out,
                    "<tr><th>{}</th><td>{}</td></tr>",
                    escape_html(k),
                    escape_html(v)
                );
            }
            let _ = writeln!(out, "</table>");
        }
        EchoBody::Raw(s) => {
            let _ = writeln!(out, "<pre class=\"raw\">{}</pre>", escape_html(s));
        }
        EchoBody::Empty => {
            let _ = writeln!(out, "<pre class=\"empty\">{{}}</pre>");
        }
    }
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
