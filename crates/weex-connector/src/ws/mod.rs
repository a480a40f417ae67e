/*
[INPUT]:  Feed subscriptions and raw WEEX frames
[OUTPUT]: Channel names, classified messages, outbound control frames
[POS]:    WebSocket layer - real-time data streams
[UPDATE]: When adding new channels or changing message handling
*/

pub mod channel;
pub mod client;
pub mod message;

pub use channel::{
    ChannelParams, FeedDescriptor, SUPPORTED_FEEDS, format_channel, format_channel_with_suffix,
    format_feed_channel, format_feed_channel_with_suffix, is_authenticated_channel, map_interval,
    normalize_symbol, normalize_symbol_with_suffix,
};
pub use client::WeexWebSocket;
pub use message::{
    DataType, MessageType, OutboundMessage, ParsedMessage, PingData, parse_message, parse_text,
};
