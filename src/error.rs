use crate::transport::TransportError;
use thiserror::Error;

/// Message used when the server gives no usable explanation for a failure.
pub const FALLBACK_MESSAGE: &str = "An error has occurred.";

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Field path that caused the error (e.g., "voice.samples[0].sample_id")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, raw body excerpt)
    pub details: Option<String>,
    /// Source of the error (e.g., "response", "GET v1/voices")
    pub source: Option<String>,
    /// HTTP status code, when the error came from a response
    pub status_code: Option<u16>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_status_code(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }
}

/// Unified error type for the ElevenLabs client.
///
/// Every facade call either yields its typed result or exactly one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("ElevenLabs client is not initialized: call set_api_key or configure an API key first")]
    NotInitialized,

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        status: Option<u16>,
        message: String,
        context: ErrorContext,
    },

    #[error("Malformed response: {message}{}", format_context(.context))]
    MalformedResponse {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(status) = ctx.status_code {
        parts.push(format!("status: {}", status));
    }
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a validation error for a failed response.
    pub fn validation(status: Option<u16>, msg: impl Into<String>) -> Self {
        let mut context = ErrorContext::new().with_source("response");
        if let Some(code) = status {
            context = context.with_status_code(code);
        }
        Error::Validation {
            status,
            message: msg.into(),
            context,
        }
    }

    /// Create a new malformed-response error with structured context
    pub fn malformed_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::MalformedResponse {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn is_not_initialized(&self) -> bool {
        matches!(self, Error::NotInitialized)
    }

    /// HTTP status of the failed response, if this error came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Validation { status, .. } => *status,
            Error::Transport(TransportError::Http(e)) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Server-provided (or fallback) message of a validation error.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Validation { message, .. }
            | Error::MalformedResponse { message, .. }
            | Error::Configuration { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Validation { context, .. }
            | Error::MalformedResponse { context, .. }
            | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
