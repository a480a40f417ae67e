/*
[INPUT]:  WEEX WebSocket URLs and channel subscriptions
[OUTPUT]: ParsedMessage stream delivered over an mpsc channel
[POS]:    WebSocket layer - thin stream transport (no reconnection)
[UPDATE]: When adding channels or changing connection handling
*/

use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tokio::sync::{Mutex, mpsc};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tracing::{debug, info, warn};

use crate::config::ConnectorConfig;
use crate::http::{Result, WeexError};
use crate::types::FeedKind;
use crate::ws::channel::{ChannelParams, format_feed_channel_with_suffix};
use crate::ws::message::{OutboundMessage, ParsedMessage, parse_text};

const CHANNEL_CAPACITY: usize = 100;
const SUBSCRIPTION_LOG_LIMIT: usize = 10;
const PARSE_FAIL_LOG_LIMIT: usize = 3;
const RAW_LOG_MAX_BYTES: usize = 1024;

static SUBSCRIBE_LOG_COUNT: AtomicUsize = AtomicUsize::new(0);
static PARSE_FAIL_LOG_COUNT: AtomicUsize = AtomicUsize::new(0);

/// WebSocket client for WEEX spot streams.
///
/// Server pings are answered inside the reader task; every decoded frame,
/// pings included, is forwarded to the receiver.
#[derive(Debug)]
pub struct WeexWebSocket {
    public_url: String,
    private_url: String,
    symbol_suffix: String,
    message_tx: mpsc::Sender<ParsedMessage>,
    message_rx: Option<mpsc::Receiver<ParsedMessage>>,
    outbound: Arc<Mutex<Option<OutboundSlot>>>,
    next_generation: AtomicU64,
}

/// Sender of the live connection, tagged so a finished reader task only
/// clears the slot it created
#[derive(Debug)]
struct OutboundSlot {
    generation: u64,
    sender: mpsc::Sender<WsMessage>,
}

impl WeexWebSocket {
    /// Create a client pointed at the default WEEX endpoints
    pub fn new() -> Self {
        Self::with_config(&ConnectorConfig::default())
    }

    pub fn with_config(config: &ConnectorConfig) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        Self {
            public_url: config.websocket_public_url.clone(),
            private_url: config.websocket_private_url.clone(),
            symbol_suffix: config.supported_symbols_suffix.clone(),
            message_tx: tx,
            message_rx: Some(rx),
            outbound: Arc::new(Mutex::new(None)),
            next_generation: AtomicU64::new(0),
        }
    }

    /// Get the message receiver
    pub fn take_receiver(&mut self) -> Option<mpsc::Receiver<ParsedMessage>> {
        self.message_rx.take()
    }

    /// Connect to the public market-data stream
    pub async fn connect_public(&self) -> Result<()> {
        self.connect_stream(&self.public_url).await
    }

    /// Connect to the private stream; login is handled by the framework
    pub async fn connect_private(&self) -> Result<()> {
        self.connect_stream(&self.private_url).await
    }

    pub async fn is_connected(&self) -> bool {
        self.outbound.lock().await.is_some()
    }

    /// Subscribe to a feed, formatting the channel from the symbol
    pub async fn subscribe(
        &self,
        feed: FeedKind,
        symbol: Option<&str>,
        params: &ChannelParams,
    ) -> Result<String> {
        let channel = format_feed_channel_with_suffix(feed, symbol, params, &self.symbol_suffix)?;
        self.send(OutboundMessage::subscribe(channel.clone())).await?;
        Ok(channel)
    }

    /// Unsubscribe from a feed previously subscribed with the same arguments
    pub async fn unsubscribe(
        &self,
        feed: FeedKind,
        symbol: Option<&str>,
        params: &ChannelParams,
    ) -> Result<String> {
        let channel = format_feed_channel_with_suffix(feed, symbol, params, &self.symbol_suffix)?;
        self.send(OutboundMessage::unsubscribe(channel.clone())).await?;
        Ok(channel)
    }

    /// Close the outbound side; the reader task sends a close frame
    pub async fn disconnect(&self) {
        let mut guard = self.outbound.lock().await;
        guard.take();
    }

    async fn connect_stream(&self, url: &str) -> Result<()> {
        let mut guard = self.outbound.lock().await;
        if guard.is_some() {
            return Err(WeexError::WebSocket("WebSocket already connected".to_string()));
        }

        let (ws_stream, _response) = connect_async(url)
            .await
            .map_err(|err| WeexError::WebSocket(err.to_string()))?;
        info!(url, "ws connected");

        let (mut write, mut read) = ws_stream.split();
        let (outbound_tx, mut outbound_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        *guard = Some(OutboundSlot {
            generation,
            sender: outbound_tx,
        });
        drop(guard);

        let message_tx = self.message_tx.clone();
        let outbound_state = self.outbound.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    outbound = outbound_rx.recv() => {
                        match outbound {
                            Some(message) => {
                                if write.send(message).await.is_err() {
                                    break;
                                }
                            }
                            None => {
                                let _ = write.send(WsMessage::Close(None)).await;
                                break;
                            }
                        }
                    }
                    incoming = read.next() => {
                        match incoming {
                            Some(Ok(WsMessage::Close(_))) => {
                                let _ = write.send(WsMessage::Close(None)).await;
                                break;
                            }
                            Some(Ok(WsMessage::Ping(_))) | Some(Ok(WsMessage::Pong(_))) => {}
                            Some(Ok(message)) => {
                                let Some(parsed) = Self::decode_frame(message) else {
                                    continue;
                                };
                                if let Some(pong) = parsed.pong_reply()
                                    && let Some(frame) = encode_frame(&pong)
                                    && write.send(frame).await.is_err()
                                {
                                    break;
                                }
                                if message_tx.send(parsed).await.is_err() {
                                    break;
                                }
                            }
                            Some(Err(err)) => {
                                warn!(error = %err, "ws read failed");
                                break;
                            }
                            None => break,
                        }
                    }
                }
            }

            let mut guard = outbound_state.lock().await;
            if guard
                .as_ref()
                .is_some_and(|slot| slot.generation == generation)
            {
                *guard = None;
            }
            info!(generation, "ws stream closed");
        });

        Ok(())
    }

    async fn send(&self, message: OutboundMessage) -> Result<()> {
        let sender = {
            let guard = self.outbound.lock().await;
            guard
                .as_ref()
                .map(|slot| slot.sender.clone())
                .ok_or_else(|| WeexError::WebSocket("WebSocket not connected".to_string()))?
        };

        let text = message.to_json()?;
        sender
            .send(WsMessage::Text(text.into()))
            .await
            .map_err(|_| WeexError::WebSocket("WebSocket send channel closed".to_string()))?;

        log_subscription_sent(&message);
        Ok(())
    }

    fn decode_frame(message: WsMessage) -> Option<ParsedMessage> {
        let text: String = match message {
            WsMessage::Text(text) => text.to_string(),
            WsMessage::Binary(bytes) => String::from_utf8(bytes.to_vec()).ok()?,
            _ => return None,
        };

        match parse_text(&text) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                log_parse_fail_once(&err, &text);
                None
            }
        }
    }
}

impl Default for WeexWebSocket {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_frame(message: &OutboundMessage) -> Option<WsMessage> {
    message
        .to_json()
        .ok()
        .map(|text| WsMessage::Text(text.into()))
}

fn log_subscription_sent(message: &OutboundMessage) {
    let count = SUBSCRIBE_LOG_COUNT.fetch_add(1, Ordering::Relaxed);
    if count >= SUBSCRIPTION_LOG_LIMIT {
        return;
    }

    let (action, channel) = match message {
        OutboundMessage::Subscribe { channel } => ("subscribe", channel.as_str()),
        OutboundMessage::Unsubscribe { channel } => ("unsubscribe", channel.as_str()),
        OutboundMessage::Pong { .. } => return,
    };
    info!(
        sample_index = count + 1,
        sample_limit = SUBSCRIPTION_LOG_LIMIT,
        action,
        channel,
        "ws subscription sent"
    );
}

fn log_parse_fail_once(err: &WeexError, raw: &str) {
    let count = PARSE_FAIL_LOG_COUNT.fetch_add(1, Ordering::Relaxed);
    if count < PARSE_FAIL_LOG_LIMIT {
        info!(
            sample_index = count + 1,
            sample_limit = PARSE_FAIL_LOG_LIMIT,
            error = %err,
            bytes = raw.len(),
            "ws message parse failed"
        );
        let preview = truncate_for_log(raw, RAW_LOG_MAX_BYTES);
        debug!(
            sample_index = count + 1,
            sample_limit = PARSE_FAIL_LOG_LIMIT,
            message = %preview,
            "ws message parse failed"
        );
    }
}

fn truncate_for_log(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }
    let mut end = max_len;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::with_capacity(end + 3);
    out.push_str(&value[..end]);
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;
    use tokio::time::{Duration, sleep};
    use tokio_tungstenite::accept_async;

    /// Local server that accepts every connection and drains it until close
    async fn spawn_sink_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let Ok(mut ws) = accept_async(stream).await else {
                        return;
                    };
                    while let Some(Ok(message)) = ws.next().await {
                        if message.is_close() {
                            break;
                        }
                    }
                });
            }
        });
        format!("ws://{addr}")
    }

    #[test]
    fn decode_frame_classifies_text() {
        let frame = WsMessage::Text(r#"{"event":"ping","time":99}"#.to_string().into());
        let parsed = WeexWebSocket::decode_frame(frame).expect("frame should decode");
        assert!(parsed.is_ping());
    }

    #[test]
    fn decode_frame_drops_garbage() {
        let frame = WsMessage::Text("not json".to_string().into());
        assert!(WeexWebSocket::decode_frame(frame).is_none());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let value = "ééé";
        assert_eq!(truncate_for_log(value, 3), "é...");
        assert_eq!(truncate_for_log("abc", 10), "abc");
    }

    #[tokio::test]
    async fn send_without_connection_fails() {
        let ws = WeexWebSocket::new();
        assert!(!ws.is_connected().await);
        let err = ws
            .subscribe(FeedKind::Ticker, Some("BTCUSDT"), &ChannelParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, WeexError::WebSocket(_)));
    }

    #[tokio::test]
    async fn subscribe_rejects_missing_symbol_before_sending() {
        let ws = WeexWebSocket::new();
        let err = ws
            .subscribe(FeedKind::Depth, None, &ChannelParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, WeexError::MissingSymbol { .. }));
    }

    #[tokio::test]
    async fn reconnect_after_disconnect_keeps_new_connection() {
        let config = ConnectorConfig {
            websocket_public_url: spawn_sink_server().await,
            ..ConnectorConfig::default()
        };
        let ws = WeexWebSocket::with_config(&config);

        ws.connect_public().await.unwrap();
        ws.disconnect().await;
        ws.connect_public().await.unwrap();

        // let the first reader task run its cleanup
        sleep(Duration::from_millis(200)).await;

        assert!(ws.is_connected().await);
        let channel = ws
            .subscribe(FeedKind::Ticker, Some("BTCUSDT"), &ChannelParams::default())
            .await
            .unwrap();
        assert_eq!(channel, "ticker.BTCUSDT_SPBL");
    }

    #[tokio::test]
    async fn subscribe_uses_configured_suffix() {
        let config = ConnectorConfig {
            websocket_public_url: spawn_sink_server().await,
            supported_symbols_suffix: "_XYZ".to_string(),
            ..ConnectorConfig::default()
        };
        let ws = WeexWebSocket::with_config(&config);
        ws.connect_public().await.unwrap();

        let channel = ws
            .subscribe(FeedKind::Depth, Some("BTCUSDT"), &ChannelParams::levels(200))
            .await
            .unwrap();
        assert_eq!(channel, "depth.BTCUSDT_XYZ.200");
        ws.disconnect().await;
    }
}
