/*
[INPUT]:  Framework stream requests (feeds, channels, raw frames)
[OUTPUT]: WEEX channel names, control messages, classified frames
[POS]:    Exchange layer - WebSocket adapter for WEEX spot
[UPDATE]: When WEEX stream protocol or limits change
*/

use std::collections::BTreeMap;

use crate::config::{ConnectionLimits, ConnectorConfig};
use crate::exchange::rest::EXCHANGE_NAME;
use crate::exchange::traits::{WebSocketExchangeAdapter, WebsocketEndpoints};
use crate::http::Result;
use crate::types::WebsocketFeed;
use crate::ws::channel::INTERVAL_MAPPING;
use crate::ws::message::AUTH_HEADER_NAMES;
use crate::ws::{
    ChannelParams, FeedDescriptor, OutboundMessage, ParsedMessage, PingData, SUPPORTED_FEEDS,
    format_channel_with_suffix, is_authenticated_channel, normalize_symbol_with_suffix,
    parse_message,
};

/// WEEX spot WebSocket connector
#[derive(Debug, Clone, Default)]
pub struct WeexWebSocketExchange {
    config: ConnectorConfig,
}

impl WeexWebSocketExchange {
    pub fn new(config: ConnectorConfig) -> Self {
        Self { config }
    }
}

impl WebSocketExchangeAdapter for WeexWebSocketExchange {
    fn name(&self) -> &'static str {
        EXCHANGE_NAME
    }

    fn exchange_feeds(&self) -> BTreeMap<WebsocketFeed, bool> {
        BTreeMap::from([
            (WebsocketFeed::Ticker, true),
            (WebsocketFeed::Trades, true),
            (WebsocketFeed::L2Book, true),
            (WebsocketFeed::Candle, true),
            (WebsocketFeed::Orders, true),
            (WebsocketFeed::Portfolio, true),
            // spot exchange, no positions
            (WebsocketFeed::Position, false),
        ])
    }

    fn websocket_endpoints(&self) -> WebsocketEndpoints {
        WebsocketEndpoints {
            public: self.config.websocket_public_url.clone(),
            private: self.config.websocket_private_url.clone(),
        }
    }

    fn supported_feeds(&self) -> &'static [FeedDescriptor] {
        &SUPPORTED_FEEDS
    }

    fn intervals_mapping(&self) -> &'static [(&'static str, &'static str)] {
        &INTERVAL_MAPPING
    }

    fn ping_message(&self) -> OutboundMessage {
        OutboundMessage::keepalive()
    }

    fn pong_message(&self, ping: &PingData) -> OutboundMessage {
        OutboundMessage::pong(ping)
    }

    fn subscribe_message(&self, channel: &str) -> OutboundMessage {
        OutboundMessage::subscribe(channel)
    }

    fn unsubscribe_message(&self, channel: &str) -> OutboundMessage {
        OutboundMessage::unsubscribe(channel)
    }

    fn parse_symbol(&self, symbol: &str) -> String {
        normalize_symbol_with_suffix(symbol, &self.config.supported_symbols_suffix)
    }

    fn format_channel(
        &self,
        feed: &str,
        symbol: Option<&str>,
        params: &ChannelParams,
    ) -> Result<String> {
        format_channel_with_suffix(feed, symbol, params, &self.config.supported_symbols_suffix)
    }

    fn is_authenticated_channel(&self, channel: &str) -> bool {
        is_authenticated_channel(channel)
    }

    fn authentication_headers(&self) -> BTreeMap<&'static str, String> {
        AUTH_HEADER_NAMES
            .iter()
            .map(|name| (*name, String::new()))
            .collect()
    }

    fn parse_message(&self, message: &serde_json::Value) -> ParsedMessage {
        parse_message(message)
    }

    fn max_connections(&self) -> u32 {
        self.config.connection_limits.max_connections_per_ip
    }

    fn connection_limits(&self) -> ConnectionLimits {
        self.config.connection_limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ws::{DataType, MessageType};
    use serde_json::json;

    #[test]
    fn position_feed_is_not_supported() {
        let feeds = WeexWebSocketExchange::default().exchange_feeds();
        assert_eq!(feeds.get(&WebsocketFeed::Position), Some(&false));
        assert_eq!(feeds.values().filter(|supported| **supported).count(), 6);
    }

    #[test]
    fn endpoints_come_from_config() {
        let endpoints = WeexWebSocketExchange::default().websocket_endpoints();
        assert_eq!(endpoints.public, "wss://ws-spot.weex.com/v2/ws/public");
        assert_eq!(endpoints.private, "wss://ws-spot.weex.com/v2/ws/private");
    }

    #[test]
    fn ping_round_trip_through_adapter() {
        let exchange = WeexWebSocketExchange::default();
        let parsed = exchange.parse_message(&json!({ "event": "ping", "time": 1234 }));
        let ping = parsed.ping_data.expect("ping data");
        assert_eq!(
            serde_json::to_value(exchange.pong_message(&ping)).unwrap(),
            json!({ "event": "pong", "time": 1234 })
        );
    }

    #[test]
    fn payload_is_classified_through_adapter() {
        let parsed = WeexWebSocketExchange::default()
            .parse_message(&json!({ "event": "payload", "channel": "ticker.BTCUSDT_SPBL" }));
        assert_eq!(parsed.message_type, Some(MessageType::Data));
        assert_eq!(parsed.data_type, Some(DataType::Ticker));
    }

    #[test]
    fn authentication_headers_are_empty_placeholders() {
        let headers = WeexWebSocketExchange::default().authentication_headers();
        assert_eq!(headers.len(), 4);
        assert!(headers.values().all(String::is_empty));
        assert!(headers.contains_key("ACCESS-SIGN"));
    }

    #[test]
    fn symbols_use_configured_suffix() {
        let config = ConnectorConfig::from_yaml_str("supported_symbols_suffix: _XYZ\n")
            .expect("yaml config");
        let exchange = WeexWebSocketExchange::new(config);

        assert_eq!(exchange.parse_symbol("BTCUSDT"), "BTCUSDT_XYZ");
        assert_eq!(
            exchange
                .format_channel("ticker", Some("BTCUSDT"), &ChannelParams::default())
                .unwrap(),
            "ticker.BTCUSDT_XYZ"
        );
        assert_eq!(
            WeexWebSocketExchange::default().parse_symbol("BTCUSDT"),
            "BTCUSDT_SPBL"
        );
    }

    #[test]
    fn limits_match_published_values() {
        let exchange = WeexWebSocketExchange::default();
        assert_eq!(exchange.max_connections(), 100);
        let limits = exchange.connection_limits();
        assert_eq!(limits.max_subscriptions_per_connection, 100);
        assert_eq!(limits.operations_per_hour, 240);
    }
}
