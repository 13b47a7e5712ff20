//! Per-request trace identifiers.
//!
//! Accepts a W3C `traceparent` header or the `x-trace-id`/`x-request-id`
//! pair, and generates fresh ids when neither is present.

use actix_web::http::header::HeaderMap;
use actix_web::{HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const TRACE_ID_HEADER: &str = "x-trace-id";
pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const W3C_TRACEPARENT_HEADER: &str = "traceparent";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    pub trace_id: String,
    pub span_id: String,
    pub parent_span_id: Option<String>,
    pub request_id: String,
}

impl TraceContext {
    pub fn new() -> Self {
        let trace_id = Uuid::new_v4().simple().to_string();
        Self {
            request_id: trace_id.clone(),
            trace_id,
            span_id: generate_span_id(),
            parent_span_id: None,
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|h| h.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        if let Some(ctx) = header(W3C_TRACEPARENT_HEADER).and_then(|tp| Self::parse_traceparent(&tp)) {
            return match header(REQUEST_ID_HEADER) {
                Some(request_id) => Self { request_id, ..ctx },
                None => ctx,
            };
        }

        let trace_id = header(TRACE_ID_HEADER).unwrap_or_else(|| Uuid::new_v4().simple().to_string());
        let request_id = header(REQUEST_ID_HEADER).unwrap_or_else(|| trace_id.clone());

        Self {
            trace_id,
            span_id: generate_span_id(),
            parent_span_id: None,
            request_id,
        }
    }

    /// `version-trace_id-parent_id-flags`, e.g. `00-<32 hex>-<16 hex>-01`
    fn parse_traceparent(value: &str) -> Option<Self> {
        let parts: Vec<&str> = value.split('-').collect();
        if parts.len() != 4 {
            return None;
        }
        let (trace_id, parent_id) = (parts[1], parts[2]);
        if !is_hex(trace_id, 32) || !is_hex(parent_id, 16) {
            return None;
        }
        Some(Self {
            trace_id: trace_id.to_string(),
            span_id: generate_span_id(),
            parent_span_id: Some(parent_id.to_string()),
            request_id: trace_id.to_string(),
        })
    }
}

impl Default for TraceContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trace_id={} span_id={}", self.trace_id, self.span_id)
    }
}

fn is_hex(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_hexdigit())
}

fn generate_span_id() -> String {
    Uuid::new_v4().simple().to_string()[..16].to_string()
}

/// Trace context stored by the request logging middleware, or a fresh one
pub fn get_trace_context(req: &HttpRequest) -> TraceContext {
    req.extensions()
        .get::<TraceContext>()
        .cloned()
        .unwrap_or_else(TraceContext::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::{HeaderName, HeaderValue};

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_generates_ids_without_headers() {
        let ctx = TraceContext::from_headers(&HeaderMap::new());
        assert_eq!(ctx.trace_id.len(), 32);
        assert_eq!(ctx.span_id.len(), 16);
        assert_eq!(ctx.request_id, ctx.trace_id);
        assert!(ctx.parent_span_id.is_none());
    }

    #[test]
    fn test_traceparent_wins() {
        let ctx = TraceContext::from_headers(&headers(&[
            ("traceparent", "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"),
            ("x-trace-id", "ignored"),
        ]));
        assert_eq!(ctx.trace_id, "4bf92f3577b34da6a3ce929d0e0e4736");
        assert_eq!(ctx.parent_span_id.as_deref(), Some("00f067aa0ba902b7"));
    }

    #[test]
    fn test_malformed_traceparent_falls_back() {
        let ctx = TraceContext::from_headers(&headers(&[
            ("traceparent", "00-short-id-01"),
            ("x-trace-id", "abc123"),
            ("x-request-id", "req-7"),
        ]));
        assert_eq!(ctx.trace_id, "abc123");
        assert_eq!(ctx.request_id, "req-7");
    }
}
