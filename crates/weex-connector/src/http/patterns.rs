/*
[INPUT]:  Raw error messages returned by WEEX
[OUTPUT]: Exchange error category, or None when no pattern matches
[POS]:    HTTP layer - static error-pattern tables
[UPDATE]: When WEEX documents new error messages
*/

use crate::http::error::{ExchangeErrorKind, WeexError};

pub const ORDER_NOT_FOUND_ERRORS: &[&str] = &["FAILED_ORDER_NOT_FOUND", "Order does not exist"];

pub const PERMISSION_ERRORS: &[&str] = &[
    "Invalid permissions",
    "Invalid API Key",
    "Incorrect API key/Passphrase",
];

pub const AUTHENTICATION_ERRORS: &[&str] = &[
    "API verification failed",
    "Header \"ACCESS_KEY\" is required",
    "Header \"ACCESS_SIGN\" is required",
    "Header \"ACCESS_PASSPHRASE\" is required",
    "Request timestamp expired",
];

pub const MISSING_FUNDS_ERRORS: &[&str] = &["Account balance is insufficient", "Insufficient balance"];

pub const ORDER_UNCANCELLABLE_ERRORS: &[&str] = &[
    "Order cannot be cancelled",
    "Order is already filled",
    "Order is already cancelled",
];

/// Categories in match priority order
pub const ERROR_PATTERNS: &[(ExchangeErrorKind, &[&str])] = &[
    (ExchangeErrorKind::OrderNotFound, ORDER_NOT_FOUND_ERRORS),
    (ExchangeErrorKind::PermissionDenied, PERMISSION_ERRORS),
    (ExchangeErrorKind::AuthenticationFailed, AUTHENTICATION_ERRORS),
    (ExchangeErrorKind::InsufficientFunds, MISSING_FUNDS_ERRORS),
    (ExchangeErrorKind::OrderUncancellable, ORDER_UNCANCELLABLE_ERRORS),
];

/// Classify an exchange error message by case-sensitive substring match.
///
/// Returns `None` for unrecognised messages; the caller treats those as
/// generic failures.
pub fn classify_exchange_error(message: &str) -> Option<ExchangeErrorKind> {
    ERROR_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|pattern| message.contains(pattern)))
        .map(|(kind, _)| *kind)
}

/// Turn a rejected API call into the crate error, classified when possible
pub fn exchange_error(code: impl Into<String>, message: impl Into<String>) -> WeexError {
    let message = message.into();
    match classify_exchange_error(&message) {
        Some(kind) => WeexError::Exchange { kind, message },
        None => WeexError::Api {
            code: code.into(),
            message,
        },
    }
}
