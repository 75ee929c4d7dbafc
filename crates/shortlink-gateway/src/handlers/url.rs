use crate::error::{AppError, Result};
use crate::model::CreateUrlRequest;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{HOST, LOCATION};
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use shortlink_core::ShortCode;
use tracing::debug;

/// `POST /urls/new`
///
/// The body is parsed as JSON whatever its content type. Answers
/// `201 Created` with `<host>/<code>` followed by a newline.
pub async fn create_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response> {
    let request: CreateUrlRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::MalformedBody(e.to_string()))?;

    let code = state.shortener().shorten(&request.url).await?;

    let host = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(state.public_base());

    debug!(code = %code, url = %request.url, "created short url");
    Ok((StatusCode::CREATED, format!("{}\n", code.to_url(host))).into_response())
}

/// Redirects `/<code>` to the stored URL with `302 Found`.
///
/// Installed as the router fallback: the whole path after the leading slash
/// is the code, so `/` resolves the empty code and paths with further
/// slashes fail on the `/` symbol.
pub async fn redirect_handler(State(state): State<AppState>, uri: Uri) -> Result<Response> {
    let path = uri.path();
    let code = ShortCode::new_unchecked(path.strip_prefix('/').unwrap_or(path));

    let url = state.redirector().resolve(&code).await?;

    let location =
        HeaderValue::from_str(&url).map_err(|e| AppError::InvalidLocation(e.to_string()))?;

    Ok((StatusCode::FOUND, [(LOCATION, location)]).into_response())
}
