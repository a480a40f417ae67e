/*
[INPUT]:  Error sources (translation, HTTP, API, serialization, config, WebSocket)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Categories an exchange error message can be classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExchangeErrorKind {
    OrderNotFound,
    PermissionDenied,
    AuthenticationFailed,
    InsufficientFunds,
    OrderUncancellable,
}

impl fmt::Display for ExchangeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExchangeErrorKind::OrderNotFound => "order not found",
            ExchangeErrorKind::PermissionDenied => "permission denied",
            ExchangeErrorKind::AuthenticationFailed => "authentication failed",
            ExchangeErrorKind::InsufficientFunds => "insufficient funds",
            ExchangeErrorKind::OrderUncancellable => "order uncancellable",
        };
        f.write_str(name)
    }
}

/// Main error type for the WEEX connector
#[derive(Error, Debug)]
pub enum WeexError {
    /// Feed kind is not one WEEX streams
    #[error("Unsupported feed type: {feed}")]
    UnsupportedFeed { feed: String },

    /// Public feed requested without a symbol
    #[error("Feed {feed} requires a symbol")]
    MissingSymbol { feed: String },

    /// Framework operation WEEX cannot perform
    #[error("Unsupported operation: {operation}")]
    UnsupportedOperation { operation: String },

    /// Exchange rejected the call with a recognised error message
    #[error("Exchange error ({kind}): {message}")]
    Exchange {
        kind: ExchangeErrorKind,
        message: String,
    },

    /// API returned an error response no pattern recognised
    #[error("API error (code {code}): {message}")]
    Api { code: String, message: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML configuration could not be parsed
    #[error("Configuration parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// WebSocket error
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WeexError {
    /// Check if the error is retryable by the caller
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            WeexError::Http(_) | WeexError::WebSocket(_) | WeexError::InvalidResponse(_)
        )
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            WeexError::Exchange {
                kind: ExchangeErrorKind::AuthenticationFailed | ExchangeErrorKind::PermissionDenied,
                ..
            }
        )
    }

    /// Exchange error category, if the exchange message was recognised
    pub fn exchange_kind(&self) -> Option<ExchangeErrorKind> {
        match self {
            WeexError::Exchange { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        WeexError::Api {
            code: status.as_u16().to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for WEEX connector operations
pub type Result<T> = std::result::Result<T, WeexError>;
