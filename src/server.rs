//! HTTP listener serving the Prometheus text exposition format.

use std::{convert::Infallible, net::SocketAddr, sync::Arc};

use bytes::Bytes;
use http_body_util::Full;
use hyper::{
    Method, Request, Response, StatusCode,
    body::Incoming,
    header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderValue},
    service::service_fn,
};
use hyper_util::{
    rt::{TokioExecutor, TokioIo},
    server::conn::auto::Builder,
};
use prometheus::{Encoder, Registry, TextEncoder};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::{
    core::{ExporterError, Result},
    metrics::MetricSource,
};

/// Configuration for the metrics endpoint
pub struct MetricsEndpointConfig {
    /// Address to listen on.
    pub address: SocketAddr,
    /// Path the metrics are served under.
    pub metrics_path: String,
    /// Exporter self-metrics, gathered on every request.
    pub registry: Registry,
    /// Source of the per-scrape networkd metrics.
    pub source: Arc<dyn MetricSource>,
}

/// The shared state between HTTP requests
struct MetricsHandlerState {
    metrics_path: String,
    registry: Registry,
    source: Arc<dyn MetricSource>,
}

/// Serves metrics until the listener fails.
///
/// Every connection is handled on its own task, so overlapping scrapes run
/// concurrently.
///
/// # Errors
/// Returns [`ExporterError::Listen`] if the address cannot be bound and
/// [`ExporterError::Io`] if accepting connections fails.
pub async fn run_metrics_endpoint(config: MetricsEndpointConfig) -> Result<()> {
    let listener = TcpListener::bind(config.address)
        .await
        .map_err(|source| ExporterError::Listen {
            address: config.address,
            source,
        })?;

    info!(
        address = config.address.to_string(),
        path = %config.metrics_path,
        "Starting metrics listener"
    );

    let handler_state = Arc::new(MetricsHandlerState {
        metrics_path: config.metrics_path,
        registry: config.registry,
        source: config.source,
    });

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let handler_state = handler_state.clone();

        tokio::task::spawn(async move {
            if let Err(err) = Builder::new(TokioExecutor::new())
                .serve_connection(
                    io,
                    service_fn(move |req: Request<Incoming>| {
                        let handler_state = handler_state.clone();
                        async move { Ok::<_, Infallible>(handle_request(req, &handler_state).await) }
                    }),
                )
                .await
            {
                warn!(error = %err, "Error serving connection for metrics listener");
            }
        });
    }
}

async fn handle_request<B>(req: Request<B>, state: &MetricsHandlerState) -> Response<Full<Bytes>> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    drop(req);

    match (&method, path.as_str()) {
        (&Method::GET, path) if path == state.metrics_path => render_metrics(state).await,
        (&Method::GET, "/") => text_response(
            StatusCode::OK,
            format!(
                "systemd-networkd exporter. Metrics are exposed via {}",
                state.metrics_path
            ),
        ),
        _ => text_response(StatusCode::NOT_FOUND, "Invalid URL".to_string()),
    }
}

async fn render_metrics(state: &MetricsHandlerState) -> Response<Full<Bytes>> {
    let mut families = state.registry.gather();
    families.extend(state.source.scrape().await);

    let mut buffer = vec![];
    if let Err(err) = TextEncoder::new().encode(&families, &mut buffer) {
        error!("failed to encode metrics: {}", err);
        return text_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string());
    }

    let length = buffer.len();
    let mut response = Response::new(Full::new(Bytes::from(buffer)));
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(prometheus::TEXT_FORMAT));
    headers.insert(CONTENT_LENGTH, HeaderValue::from(length));
    response
}

fn text_response(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response
}
