//! Carousel error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("Invalid carousel configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Malformed showcase content: {0}")]
    Content(#[source] serde_json::Error),
    #[error("Malformed settings: {0}")]
    Settings(#[source] serde_json::Error),
}

impl CarouselError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}
