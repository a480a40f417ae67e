/*
[INPUT]:  Trading framework exchange contract
[OUTPUT]: Traits a concrete connector satisfies
[POS]:    Exchange layer - seams the framework composes against
[UPDATE]: When the framework contract changes
*/

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::config::{ConnectionLimits, ConnectorConfig};
use crate::http::{ExchangeErrorKind, Result};
use crate::types::{
    AccountKind, DefaultBalance, ExchangeType, MarketStatus, OrderDescriptor, OrderParams,
    TraderOrderType, WebsocketFeed,
};
use crate::ws::{ChannelParams, FeedDescriptor, OutboundMessage, ParsedMessage, PingData};

/// REST side of an exchange connector
#[async_trait]
pub trait RestExchangeAdapter: Send + Sync {
    fn name(&self) -> &'static str;

    fn is_supporting_exchange(&self, candidate: &str) -> bool {
        self.name().eq_ignore_ascii_case(candidate)
    }

    fn supported_exchange_types(&self) -> Vec<ExchangeType>;

    /// Select the account the following calls operate on
    async fn switch_to_account(&self, account: AccountKind) -> Result<()>;

    fn additional_connector_config(&self) -> ConnectorConfig;

    fn market_status_fixes(&self, status: MarketStatus) -> MarketStatus;

    fn order_additional_params(&self, order: &OrderDescriptor) -> OrderParams;

    fn supported_time_frames(&self) -> Vec<&'static str>;

    fn default_balance(&self) -> DefaultBalance;

    fn parse_account_type(&self, raw: &str) -> AccountKind;

    fn max_orders_count(&self, symbol: &str, order_type: TraderOrderType) -> usize;

    /// `None` leaves the error to the framework's generic handling
    fn classify_error(&self, message: &str) -> Option<ExchangeErrorKind>;
}

/// Stream side of an exchange connector
pub trait WebSocketExchangeAdapter: Send + Sync {
    fn name(&self) -> &'static str;

    fn is_supporting_exchange(&self, candidate: &str) -> bool {
        self.name().eq_ignore_ascii_case(candidate)
    }

    fn exchange_feeds(&self) -> BTreeMap<WebsocketFeed, bool>;

    fn websocket_endpoints(&self) -> WebsocketEndpoints;

    fn supported_feeds(&self) -> &'static [FeedDescriptor];

    fn intervals_mapping(&self) -> &'static [(&'static str, &'static str)];

    fn ping_message(&self) -> OutboundMessage;

    fn pong_message(&self, ping: &PingData) -> OutboundMessage;

    fn subscribe_message(&self, channel: &str) -> OutboundMessage;

    fn unsubscribe_message(&self, channel: &str) -> OutboundMessage;

    fn parse_symbol(&self, symbol: &str) -> String;

    fn format_channel(&self, feed: &str, symbol: Option<&str>, params: &ChannelParams)
    -> Result<String>;

    fn is_authenticated_channel(&self, channel: &str) -> bool;

    fn authentication_headers(&self) -> BTreeMap<&'static str, String>;

    fn parse_message(&self, message: &serde_json::Value) -> ParsedMessage;

    fn max_connections(&self) -> u32;

    fn connection_limits(&self) -> ConnectionLimits;
}

/// Public and private stream URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsocketEndpoints {
    pub public: String,
    pub private: String,
}
