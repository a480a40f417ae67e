/*
[INPUT]:  Symbol identifier (e.g., "BTCUSDT")
[OUTPUT]: Server time and market statuses with fixed precision
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use tracing_subscriber::EnvFilter;
use weex_connector::*;

/// Example: Query market metadata (no authentication required)
///
/// Run with `RUST_LOG=weex_connector=debug` to see the precision fix-ups.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== WEEX Market Data Example ===\n");

    let client = match WeexClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.spot_base_url());

    match client.fetch_server_time().await {
        Ok(time) => println!("✓ Server time: {}", time),
        Err(e) => println!("✗ Error: {}", e),
    }

    let symbol = "BTCUSDT";
    println!("\nQuerying market {}...", symbol);
    match client.fetch_market(symbol).await {
        Ok(market) => println!(
            "✓ {} amount precision {:?}, price precision {:?}",
            market.symbol, market.precision.amount, market.precision.price
        ),
        Err(e) => match e.exchange_kind() {
            Some(kind) => println!("✗ Exchange rejected the call ({}): {}", kind, e),
            None => println!("✗ Error: {}", e),
        },
    }

    println!("\nQuerying all markets...");
    match client.fetch_markets().await {
        Ok(markets) => println!("✓ {} spot markets", markets.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
