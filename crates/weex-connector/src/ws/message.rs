/*
[INPUT]:  Decoded WEEX WebSocket payloads
[OUTPUT]: ParsedMessage values and fixed-shape outbound messages
[POS]:    WebSocket layer - message classification and reply construction
[UPDATE]: When WEEX adds events or changes frame layout
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::Result;

/// Control/data classification of an inbound frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Ping,
    SubscriptionAck,
    UnsubscriptionAck,
    Data,
}

/// Payload family of a data frame, derived from its channel name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Ticker,
    Orderbook,
    Trades,
    Kline,
    Account,
    Orders,
    Fills,
}

/// Server time carried by a ping, echoed back in the pong
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingData {
    pub time: Option<Value>,
}

/// Normalized view of one inbound frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// `event` exactly as sent, whatever its JSON type
    pub event_type: Option<Value>,
    pub channel: Option<String>,
    pub data: Option<Value>,
    pub timestamp: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping_data: Option<PingData>,
}

impl ParsedMessage {
    /// The `event` field when it is a string
    pub fn event(&self) -> Option<&str> {
        self.event_type.as_ref().and_then(Value::as_str)
    }

    pub fn is_ping(&self) -> bool {
        self.message_type == Some(MessageType::Ping)
    }

    /// Frame timestamp as UTC, when it is an integer millisecond value
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        let millis = match self.timestamp.as_ref()? {
            Value::Number(number) => number.as_i64()?,
            Value::String(raw) => raw.parse().ok()?,
            _ => return None,
        };
        DateTime::from_timestamp_millis(millis)
    }

    /// Pong reply for a ping frame; `None` for anything else
    pub fn pong_reply(&self) -> Option<OutboundMessage> {
        self.ping_data.as_ref().map(OutboundMessage::pong)
    }
}

/// Messages the connector sends to WEEX
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum OutboundMessage {
    Subscribe { channel: String },
    Unsubscribe { channel: String },
    Pong { time: Option<Value> },
}

impl OutboundMessage {
    pub fn subscribe(channel: impl Into<String>) -> Self {
        OutboundMessage::Subscribe {
            channel: channel.into(),
        }
    }

    pub fn unsubscribe(channel: impl Into<String>) -> Self {
        OutboundMessage::Unsubscribe {
            channel: channel.into(),
        }
    }

    pub fn pong(ping: &PingData) -> Self {
        OutboundMessage::Pong {
            time: ping.time.clone(),
        }
    }

    /// Client-side keepalive template; the time is filled from a server ping
    pub fn keepalive() -> Self {
        OutboundMessage::Pong { time: None }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Classify a decoded frame. First matching rule wins.
///
/// Frames with an unrecognised `event` keep their fields but get no
/// `message_type`.
pub fn parse_message(message: &Value) -> ParsedMessage {
    let event_type = message.get("event").cloned();
    let event = event_type.as_ref().and_then(Value::as_str);
    let channel = message.get("channel").and_then(Value::as_str);

    let mut parsed = ParsedMessage {
        event_type: event_type.clone(),
        channel: channel.map(str::to_string),
        data: message.get("data").cloned(),
        timestamp: message.get("timestamp").cloned(),
        ..ParsedMessage::default()
    };

    match event {
        Some("ping") => {
            parsed.message_type = Some(MessageType::Ping);
            parsed.ping_data = Some(PingData {
                time: message.get("time").cloned(),
            });
        }
        Some("subscribed") => parsed.message_type = Some(MessageType::SubscriptionAck),
        Some("unsubscribed") => parsed.message_type = Some(MessageType::UnsubscriptionAck),
        Some("payload") => {
            parsed.message_type = Some(MessageType::Data);
            parsed.data_type = classify_channel(channel.unwrap_or_default());
        }
        _ => {}
    }

    parsed
}

/// Decode and classify a raw text frame
pub fn parse_text(raw: &str) -> Result<ParsedMessage> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(parse_message(&value))
}

/// Public channels match by substring, private ones by exact name
fn classify_channel(channel: &str) -> Option<DataType> {
    if channel.contains("ticker") {
        Some(DataType::Ticker)
    } else if channel.contains("depth") {
        Some(DataType::Orderbook)
    } else if channel.contains("trades") {
        Some(DataType::Trades)
    } else if channel.contains("kline") {
        Some(DataType::Kline)
    } else {
        match channel {
            "account" => Some(DataType::Account),
            "orders" => Some(DataType::Orders),
            "fill" => Some(DataType::Fills),
            _ => None,
        }
    }
}

/// Header names for the private stream login; the framework fills the values
pub const AUTH_HEADER_NAMES: [&str; 4] = [
    "ACCESS-KEY",
    "ACCESS-PASSPHRASE",
    "ACCESS-TIMESTAMP",
    "ACCESS-SIGN",
];
