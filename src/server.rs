//! HTTP surface.
//!
//! - `GET /` liveness
//! - `POST /slides/read` flatten a presentation and list its template cells
//! - `POST /slides/write` write content pairs, legacy slide data or records

use crate::api::{GoogleSlides, SlidesApi};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{ContentPair, ContentRecord};
use crate::service::{ReadOutcome, SlidesService, WriteOutcome};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

/// Body of `POST /slides/read`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReadRequest {
    pub document_id: String,
}

/// Body of `POST /slides/write`. Exactly one content field must be set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WriteRequest {
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_pairs: Option<Vec<ContentPair>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides_data_json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<ContentRecord>>,
}

/// Content of a write request.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteMode {
    /// Element ids already resolved by the caller
    Direct(Vec<ContentPair>),
    /// JSON-encoded slide list, flattened to pairs
    SlidesJson(String),
    /// Structured records placed into the template table
    Templated(Vec<ContentRecord>),
}

impl WriteRequest {
    /// Resolve which write mode the request asks for.
    pub fn mode(self) -> Result<WriteMode> {
        match (self.content_pairs, self.slides_data_json, self.records) {
            (Some(pairs), None, None) => Ok(WriteMode::Direct(pairs)),
            (None, Some(json), None) => Ok(WriteMode::SlidesJson(json)),
            (None, None, Some(records)) => Ok(WriteMode::Templated(records)),
            (None, None, None) => Err(Error::InvalidRequest(
                "Provide one of content_pairs, slides_data_json or records".to_string(),
            )),
            _ => Err(Error::InvalidRequest(
                "content_pairs, slides_data_json and records are mutually exclusive".to_string(),
            )),
        }
    }
}

#[derive(Serialize)]
struct Health {
    message: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Error returned from handlers, rendered as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(Error::InvalidRequest(rejection.body_text()))
    }
}

/// HTTP status for an error.
pub fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::PermissionDenied(_) => StatusCode::FORBIDDEN,
        Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        Error::RemoteService { .. } | Error::Http(_) => StatusCode::BAD_GATEWAY,
        Error::TimedOut(_) => StatusCode::GATEWAY_TIMEOUT,
        Error::Configuration(_) | Error::Json(_) | Error::Io(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn detail_for(err: &Error) -> String {
    match err {
        Error::PermissionDenied(id) => format!(
            "Access denied to document: {}. Ensure the service account has access.",
            id
        ),
        Error::Configuration(_) => "Service account configuration error".to_string(),
        other => other.to_string(),
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            log::error!("{} {}", status.as_u16(), error_chain(&self.0));
        } else {
            log::warn!("{} {}", status.as_u16(), self.0);
        }

        let body = ErrorBody {
            detail: detail_for(&self.0),
        };
        (status, Json(body)).into_response()
    }
}

/// Generic 500 for a handler that panicked. The panic message is logged only.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    log::error!("500 handler panicked: {}", message);

    let body = ErrorBody {
        detail: "Internal server error".to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

type SharedService<C> = Arc<SlidesService<C>>;

/// Build the router over a service.
pub fn router<C: SlidesApi>(service: SlidesService<C>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/slides/read", post(read_slides::<C>))
        .route("/slides/write", post(write_slides::<C>))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(Arc::new(service))
}

async fn health() -> Json<Health> {
    Json(Health {
        message: "Slides Content API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn read_slides<C: SlidesApi>(
    State(service): State<SharedService<C>>,
    body: std::result::Result<Json<ReadRequest>, JsonRejection>,
) -> std::result::Result<Json<ReadOutcome>, ApiError> {
    let Json(request) = body?;
    Ok(Json(service.read(&request.document_id).await?))
}

async fn write_slides<C: SlidesApi>(
    State(service): State<SharedService<C>>,
    body: std::result::Result<Json<WriteRequest>, JsonRejection>,
) -> std::result::Result<Json<WriteOutcome>, ApiError> {
    let Json(request) = body?;
    let document_id = request.document_id.clone();

    let outcome = match request.mode()? {
        WriteMode::Direct(pairs) => service.write_pairs(&document_id, &pairs).await?,
        WriteMode::SlidesJson(json) => service.write_slides_json(&document_id, &json).await?,
        WriteMode::Templated(records) => service.write_records(&document_id, &records).await?,
    };

    log::info!("{} ({})", outcome.message, document_id);
    Ok(Json(outcome))
}

/// Run the server with the Google Slides client until Ctrl-C.
pub async fn serve(config: Config) -> Result<()> {
    let client = GoogleSlides::new(&config)?;
    let service = SlidesService::with_locator(client, config.locator.clone());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!(
        "Listening on {} (credentials: {}, template slides: {:?})",
        addr,
        config.credentials_file.display(),
        config.locator.template_slides
    );

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Cannot listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_mode_resolution() {
        let req: WriteRequest = serde_json::from_str(
            r#"{"document_id": "d", "content_pairs": [{"object_id": "a", "content": "x"}]}"#,
        )
        .unwrap();
        assert_eq!(
            req.mode().unwrap(),
            WriteMode::Direct(vec![ContentPair::new("a", "x")])
        );

        let req: WriteRequest =
            serde_json::from_str(r#"{"document_id": "d", "records": []}"#).unwrap();
        assert_eq!(req.mode().unwrap(), WriteMode::Templated(vec![]));
    }

    #[test]
    fn test_write_mode_ambiguous_or_missing() {
        let req: WriteRequest = serde_json::from_str(
            r#"{"document_id": "d", "content_pairs": [], "records": []}"#,
        )
        .unwrap();
        assert!(matches!(req.mode(), Err(Error::InvalidRequest(_))));

        let req: WriteRequest = serde_json::from_str(r#"{"document_id": "d"}"#).unwrap();
        assert!(matches!(req.mode(), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&Error::NotFound("d".into())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&Error::PermissionDenied("d".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_for(&Error::RemoteService {
                status: 500,
                message: "x".into()
            }),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&Error::InvalidRequest("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&Error::Configuration("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&Error::TimedOut("x".into())),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn test_configuration_detail_hides_paths() {
        let err = Error::Configuration("Service account file not readable: /secret/key.json".into());
        assert_eq!(detail_for(&err), "Service account configuration error");
    }
}
