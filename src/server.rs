//! HTTP surface: the Grafana SimpleJSON endpoints plus metrics and health.
//!
//! Routes:
//!
//! - `GET /` — datasource connectivity test, returns 200
//! - `POST /annotations` — outage annotations for a time range
//! - `POST /search`, `POST /query` — part of the SimpleJSON protocol; no
//!   timeseries source is registered, so both return empty arrays
//! - `GET /metrics` — Prometheus exposition of the declared catalog
//! - `GET /health`, `GET /healthz` — liveness

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, error};

use pingwatch_provider::CheckProvider;
use pingwatch_types::{Annotation, QueryWindow};

use crate::annotations::{AnnotateError, AnnotationEngine};
use crate::metrics;

/// Serve the SimpleJSON and metrics endpoints until the task is dropped.
pub async fn run<P>(addr: SocketAddr, engine: Arc<AnnotationEngine<P>>) -> anyhow::Result<()>
where
    P: CheckProvider + 'static,
{
    let listener = TcpListener::bind(addr).await?;

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let engine = engine.clone();

        tokio::spawn(async move {
            let service = service_fn(move |req: Request<Incoming>| {
                let engine = engine.clone();
                async move { Ok::<_, std::convert::Infallible>(handle_request(req, &engine).await) }
            });

            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                debug!(error = %e, "connection error");
            }
        });
    }
}

async fn handle_request<P: CheckProvider>(
    req: Request<Incoming>,
    engine: &AnnotationEngine<P>,
) -> Response<Full<Bytes>> {
    match (req.method(), req.uri().path()) {
        (&Method::GET, "/") => text_response(StatusCode::OK, "OK"),
        (&Method::POST, "/annotations") => annotations_route(req, engine).await,
        (&Method::POST, "/search") | (&Method::POST, "/query") => {
            json_response(StatusCode::OK, "[]".to_string())
        }
        (&Method::GET, "/metrics") => Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "text/plain; version=0.0.4; charset=utf-8")
            .body(Full::new(Bytes::from(metrics::render_exposition())))
            .unwrap(),
        (&Method::GET, "/health") | (&Method::GET, "/healthz") => {
            text_response(StatusCode::OK, "OK")
        }
        _ => text_response(StatusCode::NOT_FOUND, "Not Found"),
    }
}

async fn annotations_route<P: CheckProvider>(
    req: Request<Incoming>,
    engine: &AnnotationEngine<P>,
) -> Response<Full<Bytes>> {
    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => return text_response(StatusCode::BAD_REQUEST, &format!("bad body: {}", e)),
    };

    let request: AnnotationsRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => return text_response(StatusCode::BAD_REQUEST, &format!("bad request: {}", e)),
    };

    let query = request
        .annotation
        .get("query")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    let window = request.range.window();

    match engine.annotations(query, window).await {
        Ok(annotations) => {
            let events: Vec<AnnotationEvent<'_>> = annotations
                .iter()
                .map(|ann| AnnotationEvent::new(&request.annotation, ann))
                .collect();
            match serde_json::to_string(&events) {
                Ok(json) => json_response(StatusCode::OK, json),
                Err(e) => {
                    error!(error = %e, "failed to serialize annotations");
                    text_response(StatusCode::INTERNAL_SERVER_ERROR, "serialization failed")
                }
            }
        }
        Err(err @ AnnotateError::Pattern(_)) => {
            text_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
        Err(err @ AnnotateError::Provider(_)) => {
            error!(error = %err, "annotation request failed");
            text_response(StatusCode::BAD_GATEWAY, &err.to_string())
        }
    }
}

fn text_response(status: StatusCode, body: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}

fn json_response(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

/// SimpleJSON annotation request body.
#[derive(Debug, Deserialize)]
struct AnnotationsRequest {
    range: TimeRange,
    #[serde(default)]
    annotation: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct TimeRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl TimeRange {
    fn window(&self) -> QueryWindow {
        QueryWindow::new(self.from.timestamp(), self.to.timestamp())
    }
}

/// SimpleJSON annotation response entry. Instants are epoch milliseconds and
/// the originating annotation object is echoed back, per the protocol.
#[derive(Debug, Serialize)]
struct AnnotationEvent<'a> {
    annotation: &'a serde_json::Value,
    time: i64,
    #[serde(rename = "timeEnd")]
    time_end: i64,
    title: &'a str,
    text: &'a str,
    tags: &'a [String],
    #[serde(rename = "isRegion")]
    is_region: bool,
}

impl<'a> AnnotationEvent<'a> {
    fn new(request: &'a serde_json::Value, ann: &'a Annotation) -> Self {
        Self {
            annotation: request,
            time: ann.time_ms(),
            time_end: ann.time_end_ms(),
            title: &ann.title,
            text: &ann.text,
            tags: &ann.tags,
            is_region: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_annotations_request() {
        let json = r#"{
            "range": {
                "from": "2016-04-15T13:44:39.070Z",
                "to": "2016-04-15T14:44:39.070Z"
            },
            "annotation": {
                "name": "outages",
                "datasource": "pingwatch",
                "enable": true,
                "query": "example\\.com"
            }
        }"#;

        let request: AnnotationsRequest = serde_json::from_str(json).unwrap();
        let window = request.range.window();

        assert_eq!(window.from, 1_460_727_879);
        assert_eq!(window.to, 1_460_731_479);
        assert_eq!(
            request.annotation.get("query").and_then(|v| v.as_str()),
            Some("example\\.com")
        );
    }

    #[test]
    fn test_request_without_annotation_object() {
        let json = r#"{
            "range": {
                "from": "2016-04-15T13:44:39Z",
                "to": "2016-04-15T14:44:39Z"
            }
        }"#;

        let request: AnnotationsRequest = serde_json::from_str(json).unwrap();
        assert!(request.annotation.get("query").is_none());
    }

    #[test]
    fn test_annotation_event_serialization() {
        let source = serde_json::json!({"name": "outages", "query": ""});
        let ann = Annotation {
            time: 100,
            time_end: 200,
            title: "web".to_string(),
            text: "example.com".to_string(),
            tags: vec!["down".to_string(), "example.com".to_string()],
        };

        let event = AnnotationEvent::new(&source, &ann);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["time"], 100_000);
        assert_eq!(json["timeEnd"], 200_000);
        assert_eq!(json["title"], "web");
        assert_eq!(json["text"], "example.com");
        assert_eq!(json["tags"][0], "down");
        assert_eq!(json["isRegion"], true);
        assert_eq!(json["annotation"]["name"], "outages");
    }
}
