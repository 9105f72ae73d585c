//! Metrics registry for the echo API.
//!
//! Each family declares its label names up front. Label sets are flattened
//! into key vectors in that declared order, so the same labels always map to
//! the same series whatever order callers pass them in, and render as
//! `name{method="POST",endpoint="/api"}`. Each series is an `AtomicU64`:
//! increments never take a lock on the value itself.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Metric name for echo requests.
pub const API_REQUESTS_TOTAL: &str = "api_requests_total";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Helper to escape HELP text.
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Monotonic counter family keyed by label set.
pub struct CounterVec {
    label_names: &'static [&'static str],
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// New family with the given label names, in exposition order.
    pub fn new(label_names: &'static [&'static str]) -> Self {
        Self {
            label_names,
            map: DashMap::new(),
        }
    }

    /// Reorder caller labels into declared order. Undeclared labels are
    /// dropped; missing ones are empty.
    fn label_key(&self, labels: &[(&str, &str)]) -> Vec<(String, String)> {
        self.label_names
            .iter()
            .map(|name| {
                let value = labels
                    .iter()
                    .find(|(k, _)| k == name)
                    .map(|(_, v)| *v)
                    .unwrap_or_default();
                (name.to_string(), value.to_string())
            })
            .collect()
    }

    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(self.label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value of one series; 0 if never observed.
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&self.label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, escape_help(help));
        let _ = writeln!(out, "# TYPE {} counter", name);

        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (label_str, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();

        for (label_str, val) in rows {
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

/// All metrics exported by the service.
pub struct ApiMetrics {
    pub api_requests: CounterVec,
    start_time_secs: u64,
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiMetrics {
    pub fn new() -> Self {
        let start_time_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self {
            api_requests: CounterVec::new(&["method", "endpoint"]),
            start_time_secs,
        }
    }

    /// Count one echo request.
    pub fn record_request(&self, method: &str, endpoint: &str) {
        self.api_requests
            .inc(&[("method", method), ("endpoint", endpoint)]);
    }

    /// Requests seen so far for one (method, endpoint) pair.
    pub fn requests(&self, method: &str, endpoint: &str) -> u64 {
        self.api_requests
            .get(&[("method", method), ("endpoint", endpoint)])
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.api_requests
            .render(API_REQUESTS_TOTAL, "Total API requests", &mut out);

        let _ = writeln!(
            out,
            "# HELP process_start_time_seconds {}",
            "Start time of the process since unix epoch in seconds."
        );
        let _ = writeln!(out, "# TYPE process_start_time_seconds gauge");
        let _ = writeln!(out, "process_start_time_seconds {}", self.start_time_secs);
        out
    }
}
