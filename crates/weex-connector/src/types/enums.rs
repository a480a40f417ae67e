/*
[INPUT]:  Framework enumerations and WEEX wire tokens
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - closed vocabularies shared by REST and WebSocket sides
[UPDATE]: When the framework contract or WEEX token set changes
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::http::WeexError;

/// Canonical account kinds understood by the trading framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountKind {
    Cash,
    Margin,
    Future,
}

impl AccountKind {
    /// Map a WEEX account-type token to a canonical kind.
    ///
    /// Matching ignores case; unknown tokens fall back to `Cash`.
    pub fn from_exchange_token(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "EXCHANGE" | "SPOT" | "SPOT_V2" | "FUND" | "OTC_SGD" => AccountKind::Cash,
            "CONTRACT" | "USD_MIX" | "USDT_MIX" => AccountKind::Future,
            _ => AccountKind::Cash,
        }
    }
}

/// WebSocket feed kinds exposed by WEEX
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Ticker,
    Depth,
    Trades,
    Kline,
    Account,
    Orders,
    Fill,
}

impl FeedKind {
    pub const ALL: [FeedKind; 7] = [
        FeedKind::Ticker,
        FeedKind::Depth,
        FeedKind::Trades,
        FeedKind::Kline,
        FeedKind::Account,
        FeedKind::Orders,
        FeedKind::Fill,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedKind::Ticker => "ticker",
            FeedKind::Depth => "depth",
            FeedKind::Trades => "trades",
            FeedKind::Kline => "kline",
            FeedKind::Account => "account",
            FeedKind::Orders => "orders",
            FeedKind::Fill => "fill",
        }
    }

    /// Private feeds need an authenticated connection and take no symbol
    pub fn is_private(&self) -> bool {
        matches!(self, FeedKind::Account | FeedKind::Orders | FeedKind::Fill)
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedKind {
    type Err = WeexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| WeexError::UnsupportedFeed {
                feed: s.to_string(),
            })
    }
}

/// Framework-level feed families and whether WEEX streams them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebsocketFeed {
    Ticker,
    Trades,
    L2Book,
    Candle,
    Orders,
    Portfolio,
    Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeType {
    Spot,
    Future,
}

/// Order types as the framework submits them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraderOrderType {
    BuyMarket,
    BuyLimit,
    SellMarket,
    SellLimit,
    StopLoss,
    StopLossLimit,
    TakeProfit,
    TakeProfitLimit,
    TrailingStop,
}

/// WEEX `force` order parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceMode {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "postOnly")]
    PostOnly,
    #[serde(rename = "fok")]
    Fok,
    #[serde(rename = "ioc")]
    Ioc,
}
