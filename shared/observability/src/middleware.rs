//! HTTP request logging for actix-web.
//!
//! Every request gets a [`TraceContext`] in its extensions and a span that
//! wraps the handler. Completed requests are logged with status and
//! duration: 5xx at error, 4xx and slow requests at warn, the rest at info.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    time::Instant,
};
use tracing::{debug, error, info, span, warn, Instrument, Level};

use crate::trace_context::{TraceContext, REQUEST_ID_HEADER};

#[derive(Debug, Clone)]
pub struct RequestLogConfig {
    pub service_name: String,
    /// Path prefixes that are passed through without logging
    pub exclude_paths: Vec<String>,
    pub slow_request_threshold_ms: u64,
}

impl Default for RequestLogConfig {
    fn default() -> Self {
        Self {
            service_name: "goodbooks-dashboard".to_string(),
            exclude_paths: vec!["/health".to_string(), "/favicon.ico".to_string()],
            slow_request_threshold_ms: 1000,
        }
    }
}

impl RequestLogConfig {
    pub fn for_service(name: impl Into<String>) -> Self {
        Self {
            service_name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_slow_threshold(mut self, ms: u64) -> Self {
        self.slow_request_threshold_ms = ms;
        self
    }

    pub fn exclude_path(mut self, path: impl Into<String>) -> Self {
        self.exclude_paths.push(path.into());
        self
    }

    fn is_excluded(&self, path: &str) -> bool {
        self.exclude_paths.iter().any(|p| path.starts_with(p.as_str()))
    }
}

#[derive(Clone)]
pub struct RequestLogger {
    config: Rc<RequestLogConfig>,
}

impl RequestLogger {
    pub fn new(config: RequestLogConfig) -> Self {
        Self { config: Rc::new(config) }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggerService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerService {
            service: Rc::new(service),
            config: self.config.clone(),
        }))
    }
}

pub struct RequestLoggerService<S> {
    service: Rc<S>,
    config: Rc<RequestLogConfig>,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let config = self.config.clone();
        let service = self.service.clone();

        Box::pin(async move {
            let path = req.path().to_string();
            if config.is_excluded(&path) {
                return service.call(req).await;
            }
            let method = req.method().to_string();

            let trace_ctx = TraceContext::from_headers(req.headers());
            req.extensions_mut().insert(trace_ctx.clone());

            debug!(
                trace_id = %trace_ctx.trace_id,
                method = %method,
                path = %path,
                query = %req.query_string(),
                "→ request"
            );

            let request_span = span!(
                Level::INFO,
                "http_request",
                trace_id = %trace_ctx.trace_id,
                span_id = %trace_ctx.span_id,
                method = %method,
                path = %path,
                service = %config.service_name,
            );

            let start = Instant::now();
            let result = service.call(req).instrument(request_span).await;
            let duration_ms = start.elapsed().as_millis() as u64;

            match result {
                Ok(mut res) => {
                    let status = res.status().as_u16();
                    if status >= 500 {
                        error!(trace_id = %trace_ctx.trace_id, status, duration_ms, "← {} {} {} {}ms", method, path, status, duration_ms);
                    } else if status >= 400 {
                        warn!(trace_id = %trace_ctx.trace_id, status, duration_ms, "← {} {} {} {}ms", method, path, status, duration_ms);
                    } else if duration_ms > config.slow_request_threshold_ms {
                        warn!(trace_id = %trace_ctx.trace_id, status, duration_ms, "← SLOW {} {} {} {}ms", method, path, status, duration_ms);
                    } else {
                        info!(trace_id = %trace_ctx.trace_id, status, duration_ms, "← {} {} {} {}ms", method, path, status, duration_ms);
                    }

                    if let Ok(value) = HeaderValue::from_str(&trace_ctx.request_id) {
                        res.headers_mut()
                            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                    }
                    Ok(res)
                }
                Err(e) => {
                    error!(
                        trace_id = %trace_ctx.trace_id,
                        duration_ms,
                        error = %e,
                        "← {} {} ERROR {}ms",
                        method, path, duration_ms
                    );
                    Err(e)
                }
            }
        })
    }
}

/// Request logging middleware with default settings for a service
pub fn request_logging(service_name: impl Into<String>) -> RequestLogger {
    RequestLogger::new(RequestLogConfig::for_service(service_name))
}
