// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Author recorded when a request does not name one.
    pub default_author: Arc<str>,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, default_author: impl Into<Arc<str>>) -> Self {
        Self {
            services,
            default_author: default_author.into(),
        }
    }

    pub fn author_or_default(&self, author: Option<String>) -> String {
        author
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.default_author.to_string())
    }
}
