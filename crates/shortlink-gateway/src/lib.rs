//! HTTP front end of the URL shortener.
//!
//! Routes:
//!
//! * `POST /urls/new` with `{"url": "..."}` stores a URL and answers
//!   `201 Created` with `<host>/<code>`.
//! * `GET /_health` reports liveness.
//! * `GET /<code>` (any other path) redirects to the stored URL with
//!   `302 Found`.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use state::AppState;
