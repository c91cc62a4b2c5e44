//! # rubric-server
//!
//! Browser front end for rubric-extract: an upload form, an extraction
//! endpoint that answers with the workbook as a download, and a health check.

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, HeaderName, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use rubric_core::{
    extract_workbook, parse_page_numbers, ExtractError, PdfOptions, TableStrategy, DEFAULT_PAGES,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Largest accepted upload.
const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Response header carrying the JSON-encoded notices of an extraction.
const NOTICES_HEADER: HeaderName = HeaderName::from_static("x-rubric-notices");

const FORM_HTML: &str = include_str!("form.html");

/// rubric-server - upload a PDF, download its tables as a workbook
#[derive(Parser, Debug)]
#[command(name = "rubric-server")]
#[command(author, version, about, long_about = None)]
struct Config {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3000")]
    addr: String,

    /// Table finding strategy: lattice (ruled cells) or stream (aligned text)
    #[arg(long, default_value_t = TableStrategy::Lattice)]
    strategy: TableStrategy,
}

impl Config {
    fn pdf_options(&self) -> PdfOptions {
        PdfOptions {
            strategy: self.strategy,
            ..PdfOptions::default()
        }
    }
}

#[derive(Clone)]
struct AppState {
    options: Arc<PdfOptions>,
}

/// Health check response.
#[derive(Serialize, Deserialize)]
pub struct Health {
    /// Server status ("ok" when healthy).
    pub status: String,
    /// Server version from Cargo.toml.
    pub version: String,
}

/// Error body returned for failed extractions.
#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

enum AppError {
    BadRequest(String),
    Extraction(ExtractError),
    Internal(String),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        AppError::Extraction(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => {
                tracing::warn!("Rejected extraction request: {}", message);
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Extraction(err) => {
                tracing::error!("Extraction failed: {}", err);
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            AppError::Internal(message) => {
                tracing::error!("Extraction request failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = ErrorBody {
            error: format!("Error: {message}"),
        };
        (status, Json(body)).into_response()
    }
}

/// Health check endpoint handler.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Upload form handler.
pub async fn form() -> Html<&'static str> {
    Html(FORM_HTML)
}

/// Run one extraction from a multipart upload.
///
/// Fields: `file` (the PDF, required) and `pages` (comma-separated, optional).
async fn extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut upload: Option<Vec<u8>> = None;
    let mut pages = DEFAULT_PAGES.to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                upload = Some(bytes.to_vec());
            }
            Some("pages") => {
                pages = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            _ => {}
        }
    }

    let upload = upload
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::BadRequest("no PDF file uploaded".to_string()))?;
    let page_numbers = parse_page_numbers(&pages);
    tracing::info!(
        "Extracting pages {:?} from {} byte upload",
        page_numbers,
        upload.len()
    );

    let options = Arc::clone(&state.options);
    let artifact = tokio::task::spawn_blocking(move || {
        extract_workbook(&upload, &page_numbers, &options)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    let notices = serde_json::to_string(&artifact.notices)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let disposition = format!("attachment; filename=\"{}\"", artifact.file_name);

    Ok((
        [
            (header::CONTENT_TYPE, artifact.content_type),
            (header::CONTENT_DISPOSITION, disposition),
            (NOTICES_HEADER, notices),
        ],
        artifact.bytes,
    )
        .into_response())
}

/// Create the application router.
///
/// This is separated from `main()` to allow testing.
fn create_router(options: PdfOptions) -> Router {
    let state = AppState {
        options: Arc::new(options),
    };

    Router::new()
        .route("/", get(form))
        .route("/health", get(health))
        .route("/extract", post(extract))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    let app = create_router(config.pdf_options());

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!("rubric-server listening on {}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
#[path = "../../pdf/tests/common/mod.rs"]
mod fixtures;
