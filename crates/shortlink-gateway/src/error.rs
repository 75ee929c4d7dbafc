use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shortlink_redirector::ResolveError;
use shortlink_shortener::ShortenerError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors surfaced by the HTTP handlers.
///
/// | Error | Status |
/// |---|---|
/// | malformed request body, invalid URL, invalid short code | 422 |
/// | short code not found | 404 |
/// | storage failure, unusable stored URL | 500 |
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MalformedBody(String),
    #[error("URL is not valid.\n")]
    InvalidUrl,
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("{0}")]
    Storage(String),
    #[error("stored url cannot be used as a redirect target: {0}")]
    InvalidLocation(String),
}

impl From<ShortenerError> for AppError {
    fn from(error: ShortenerError) -> Self {
        match error {
            ShortenerError::InvalidUrl(_) => AppError::InvalidUrl,
            ShortenerError::Storage(source) => AppError::Storage(source.to_string()),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedBody(_) | AppError::InvalidUrl => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Resolve(ResolveError::InvalidCode(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Resolve(ResolveError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Resolve(ResolveError::StoreFailure(_))
            | AppError::Storage(_)
            | AppError::InvalidLocation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Resolve(ResolveError::NotFound { .. }) => status.into_response(),
            AppError::Resolve(ResolveError::StoreFailure(source)) => {
                error!(error = %source, "failed to resolve short code");
                status.into_response()
            }
            AppError::InvalidLocation(_) => {
                error!(error = %self, "failed to redirect");
                status.into_response()
            }
            AppError::Storage(_) => {
                error!(error = %self, "failed to store url");
                (status, self.to_string()).into_response()
            }
            other => (status, other.to_string()).into_response(),
        }
    }
}
