//! HTTP surface for the document stamper

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::Result;
use crate::pdf::{attachment_filename, process_document};

/// Shared state for route handlers
#[derive(Clone)]
pub struct AppState {
    /// Template stamped on every request; read fresh each time
    pub template: PathBuf,
}

/// Unified API error type for route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("processing failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<crate::Error> for ApiError {
    fn from(e: crate::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

/// Body of `POST /process-pdf`. Both fields are required; presence is
/// checked in the handler so the error payload stays under our control.
#[derive(Deserialize)]
pub struct ProcessRequest {
    pub name: Option<String>,
    pub roll_no: Option<String>,
}

async fn welcome() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Welcome to the PDF Processing API!" }))
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Stamp the template with the request's name/roll number and return the
/// result as a downloadable PDF.
async fn process_pdf(
    State(state): State<AppState>,
    Json(req): Json<ProcessRequest>,
) -> std::result::Result<Response, ApiError> {
    let (Some(name), Some(roll_no)) = (req.name, req.roll_no) else {
        return Err(ApiError::BadRequest(
            "Name and roll_no are required".to_string(),
        ));
    };

    let bytes = process_document(&state.template, &name, &roll_no)?;

    info!(name = %name, roll_no = %roll_no, size = bytes.len(), "stamped document");

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}\"",
                attachment_filename(&name, &roll_no)
            ),
        ),
    ];

    Ok((headers, bytes).into_response())
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/process-pdf", post(process_pdf))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind and serve the API
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
