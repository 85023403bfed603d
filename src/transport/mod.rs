//! HTTP dispatch and body encoding.

pub mod http;
pub mod multipart;

pub use http::HttpTransport;
pub use multipart::{FileSource, MultipartForm, MultipartFormContent};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Transport error: {0}")]
    Other(String),
}
