//! Prometheus request metrics
//!
//! `HttpMetrics` owns its own `Registry` rather than the process-global
//! default, so every app instance (and every test) starts from zero.
//! `RequestMetrics` is the middleware that feeds it; wrap it last so it is
//! the outermost layer and sees every response, including error ones.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use expense_core::AppError;
use futures::future::LocalBoxFuture;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::future::{ready, Ready};
use std::time::{Duration, Instant};

/// Endpoint label for requests that matched no route
pub const UNMATCHED_ENDPOINT: &str = "unmatched";

/// Request counter and latency histogram
#[derive(Clone)]
pub struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration: HistogramVec,
}

impl HttpMetrics {
    /// Create the instruments and register them in a fresh registry
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP Requests"),
            &["method", "endpoint", "status_code"],
        )?;

        let request_duration = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request latency in seconds",
            ),
            &["method", "endpoint"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration,
        })
    }

    /// Record one finished request
    pub fn observe(&self, method: &str, endpoint: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        self.requests_total
            .with_label_values(&[method, endpoint, status.as_str()])
            .inc();
        self.request_duration
            .with_label_values(&[method, endpoint])
            .observe(elapsed.as_secs_f64());
    }

    /// Requests counted so far for one label set
    pub fn request_count(&self, method: &str, endpoint: &str, status: u16) -> u64 {
        let status = status.to_string();
        self.requests_total
            .with_label_values(&[method, endpoint, status.as_str()])
            .get()
    }

    /// Text exposition of every registered metric
    pub fn render(&self) -> Result<String, AppError> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(|e| AppError::Internal(format!("Failed to encode metrics: {}", e)))?;

        String::from_utf8(buffer)
            .map_err(|e| AppError::Internal(format!("Metrics are not valid UTF-8: {}", e)))
    }
}

/// Middleware recording every request into `HttpMetrics`
pub struct RequestMetrics {
    metrics: HttpMetrics,
}

impl RequestMetrics {
    /// Create the middleware factory
    pub fn new(metrics: HttpMetrics) -> Self {
        Self { metrics }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestMetricsService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestMetricsService {
            service,
            metrics: self.metrics.clone(),
        }))
    }
}

/// Service produced by `RequestMetrics`
pub struct RequestMetricsService<S> {
    service: S,
    metrics: HttpMetrics,
}

impl<S, B> Service<ServiceRequest> for RequestMetricsService<S>
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
        let started = Instant::now();
        let method = req.method().to_string();
        let metrics = self.metrics.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let elapsed = started.elapsed();

            match &result {
                Ok(res) => {
                    let endpoint = res
                        .request()
                        .match_pattern()
                        .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_string());
                    metrics.observe(&method, &endpoint, res.status().as_u16(), elapsed);
                }
                Err(err) => {
                    let status = err.as_response_error().status_code();
                    metrics.observe(&method, UNMATCHED_ENDPOINT, status.as_u16(), elapsed);
                }
            }

            result
        })
    }
}
