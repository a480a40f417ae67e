/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public WEEX connector crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod exchange;
pub mod http;
pub mod precision;
pub mod types;
pub mod ws;

pub use config::{ConnectionLimits, ConnectorConfig};

// Re-export the framework-facing adapters
pub use exchange::{
    RestExchangeAdapter,
    WebSocketExchangeAdapter,
    WebsocketEndpoints,
    WeexExchange,
    WeexWebSocketExchange,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    ExchangeErrorKind,
    Result,
    WeexClient,
    WeexError,
    classify_exchange_error,
};

pub use precision::{DEFAULT_PRECISION, apply_market_status_fixes, precision_from_step_size};

// Re-export all types
pub use types::*;

// Re-export commonly used types from ws
pub use ws::{
    ChannelParams,
    DataType,
    MessageType,
    OutboundMessage,
    ParsedMessage,
    WeexWebSocket,
    format_channel,
    format_channel_with_suffix,
    is_authenticated_channel,
    normalize_symbol,
    normalize_symbol_with_suffix,
    parse_message,
};
