use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_url_handler, health_handler, redirect_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the router.
    ///
    /// Redirects are served by the fallback so that every path not claimed by
    /// another route, including `/` and multi-segment paths, is treated as a
    /// short code. The fixed routes use symbols outside the code alphabet and
    /// therefore never shadow a valid code. Requests to a fixed route with a
    /// method it does not serve are handed to the redirect handler too, so
    /// they fail on the path's first invalid symbol instead of answering 405.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/_health", get(health_handler))
            .route("/urls/new", post(create_url_handler))
            .fallback(redirect_handler)
            .method_not_allowed_fallback(redirect_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
