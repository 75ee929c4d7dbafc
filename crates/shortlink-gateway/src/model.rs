pub mod url;

pub use url::{CreateUrlRequest, HealthResponse};
