//! Project download endpoint.

use axum::Router;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;

use srcpack_core::ProjectBundler;

use crate::error::ApiError;
use crate::state::AppState;

/// Download route group.
pub fn routes() -> Router<AppState> {
    Router::new().route("/download-project", get(download_project))
}

/// `GET /download-project`
///
/// Builds the ZIP snapshot of the configured project layout and returns it
/// as a downloadable attachment. The build is synchronous filesystem work,
/// so it runs on a blocking task; each request owns its own buffer.
pub async fn download_project(State(state): State<AppState>) -> Result<Response, ApiError> {
    let config = state.bundle_config.as_ref().clone();
    let filename = format!("{}.zip", config.archive_root);

    let bundle = tokio::task::spawn_blocking(move || ProjectBundler::new(config).build())
        .await
        .map_err(|e| ApiError::Internal {
            message: format!("bundle task failed: {e}"),
        })??;

    tracing::info!(
        files_added = bundle.report.files_added,
        inputs_skipped = bundle.report.inputs_skipped,
        bytes = bundle.bytes.len(),
        duration_ms = u64::try_from(bundle.report.duration.as_millis()).unwrap_or(u64::MAX),
        "built project bundle"
    );

    let disposition = HeaderValue::from_str(&format!("attachment; filename={filename}")).map_err(
        |e| ApiError::Internal {
            message: format!("invalid disposition header: {e}"),
        },
    )?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/zip")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bundle.bytes,
    )
        .into_response())
}
