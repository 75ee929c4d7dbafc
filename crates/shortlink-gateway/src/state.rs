use std::sync::Arc;

use shortlink_redirector::Redirector;
use shortlink_shortener::Shortener;

/// Everything a request handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    redirector: Arc<dyn Redirector>,
    shortener: Arc<dyn Shortener>,
    public_base: String,
}

impl AppState {
    pub fn new(
        redirector: Arc<dyn Redirector>,
        shortener: Arc<dyn Shortener>,
        public_base: impl Into<String>,
    ) -> Self {
        Self {
            redirector,
            shortener,
            public_base: public_base.into(),
        }
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    /// Host used in short URLs when a request carries no `Host` header.
    pub fn public_base(&self) -> &str {
        &self.public_base
    }
}
