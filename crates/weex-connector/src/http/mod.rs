/*
[INPUT]:  HTTP client configuration and WEEX public endpoints
[OUTPUT]: Typed API results and classified exchange errors
[POS]:    HTTP layer - REST API communication and error taxonomy
[UPDATE]: When adding new endpoints or error patterns
*/

pub mod client;
pub mod error;
pub mod patterns;
pub mod public;

pub use error::{ExchangeErrorKind, Result, WeexError};
pub use patterns::{classify_exchange_error, exchange_error};

pub use client::{ClientConfig, WeexClient};
