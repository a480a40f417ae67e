/*
[INPUT]:  Feed kinds and symbols
[OUTPUT]: Parsed WEEX stream frames
[POS]:    Examples - WebSocket stream handling
[UPDATE]: When WebSocket API changes
*/

use tokio::time::{Duration, timeout};
use tracing_subscriber::EnvFilter;
use weex_connector::*;

/// Example: WEEX public WebSocket streams
///
/// Pings are answered by the client; every other frame arrives on the
/// receiver already classified.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== WEEX WebSocket Example ===\n");

    let adapter = WeexWebSocketExchange::default();
    for descriptor in adapter.supported_feeds() {
        let channel = adapter
            .format_channel(
                descriptor.kind.as_str(),
                Some("BTCUSDT"),
                &ChannelParams::default(),
            )
            .unwrap_or_else(|e| format!("<{}>", e));
        println!(
            "  {:<8} -> {:<40} private={}",
            descriptor.kind.as_str(), channel, descriptor.is_private
        );
    }

    let mut ws = WeexWebSocket::new();
    let mut receiver = ws.take_receiver().expect("Receiver already taken");

    if let Err(e) = ws.connect_public().await {
        eprintln!("\n✗ Connect failed: {}", e);
        return;
    }
    println!("\n✓ Connected to public stream");

    for (feed, params) in [
        (FeedKind::Ticker, ChannelParams::default()),
        (FeedKind::Depth, ChannelParams::levels(15)),
        (FeedKind::Kline, ChannelParams::interval("1m")),
    ] {
        match ws.subscribe(feed, Some("BTCUSDT"), &params).await {
            Ok(channel) => println!("✓ Subscribed {}", channel),
            Err(e) => println!("✗ Subscribe {} failed: {}", feed, e),
        }
    }

    println!("\nReceiving for 10 seconds...");
    let _ = timeout(Duration::from_secs(10), async {
        while let Some(msg) = receiver.recv().await {
            println!(
                "  {:?} {:?} {}",
                msg.message_type,
                msg.data_type,
                msg.channel.as_deref().unwrap_or("-")
            );
        }
    })
    .await;

    ws.disconnect().await;
    println!("\n✓ WebSocket example complete");
}
