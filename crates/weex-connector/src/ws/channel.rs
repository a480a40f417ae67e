/*
[INPUT]:  Canonical symbols, feed kind names, optional depth/interval params
[OUTPUT]: WEEX channel strings ready for subscribe/unsubscribe
[POS]:    WebSocket layer - symbol and channel translation
[UPDATE]: When WEEX adds feeds or changes channel templates
*/

use tracing::debug;

use crate::config::SPOT_SYMBOL_SUFFIX;
use crate::http::{Result, WeexError};
use crate::types::FeedKind;

/// Depth levels used when the caller does not ask for a specific book size
pub const DEFAULT_DEPTH_LEVELS: u32 = 15;

/// Kline interval used when the caller does not pass one
pub const DEFAULT_KLINE_INTERVAL: &str = "MINUTE_1";

/// Channel template for one feed kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedDescriptor {
    pub kind: FeedKind,
    pub channel_pattern: &'static str,
    pub description: &'static str,
    pub is_private: bool,
}

/// Indexed by `FeedKind` discriminant
pub static SUPPORTED_FEEDS: [FeedDescriptor; 7] = [
    FeedDescriptor {
        kind: FeedKind::Ticker,
        channel_pattern: "ticker.{symbol}",
        description: "24hr ticker statistics",
        is_private: false,
    },
    FeedDescriptor {
        kind: FeedKind::Depth,
        // levels: 15 or 200
        channel_pattern: "depth.{symbol}.{levels}",
        description: "Order book depth updates",
        is_private: false,
    },
    FeedDescriptor {
        kind: FeedKind::Trades,
        channel_pattern: "trades.{symbol}",
        description: "Public trade executions",
        is_private: false,
    },
    FeedDescriptor {
        kind: FeedKind::Kline,
        channel_pattern: "kline.LAST_PRICE.{symbol}.{interval}",
        description: "Candlestick/K-line updates",
        is_private: false,
    },
    FeedDescriptor {
        kind: FeedKind::Account,
        channel_pattern: "account",
        description: "Account balance updates",
        is_private: true,
    },
    FeedDescriptor {
        kind: FeedKind::Orders,
        channel_pattern: "orders",
        description: "Order status updates",
        is_private: true,
    },
    FeedDescriptor {
        kind: FeedKind::Fill,
        channel_pattern: "fill",
        description: "Trade execution updates",
        is_private: true,
    },
];

/// Framework time frame to WEEX WebSocket interval token
pub static INTERVAL_MAPPING: [(&str, &str); 13] = [
    ("1m", "MINUTE_1"),
    ("5m", "MINUTE_5"),
    ("15m", "MINUTE_15"),
    ("30m", "MINUTE_30"),
    ("1h", "HOUR_1"),
    ("2h", "HOUR_2"),
    ("4h", "HOUR_4"),
    ("6h", "HOUR_6"),
    ("8h", "HOUR_8"),
    ("12h", "HOUR_12"),
    ("1d", "DAY_1"),
    ("1w", "WEEK_1"),
    ("1M", "MONTH_1"),
];

/// Tokens whose presence anywhere in a channel name marks it private
const PRIVATE_CHANNEL_TOKENS: [&str; 3] = ["account", "orders", "fill"];

/// Optional parameters for templated channels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelParams {
    pub levels: Option<u32>,
    pub interval: Option<String>,
}

impl ChannelParams {
    pub fn levels(levels: u32) -> Self {
        Self {
            levels: Some(levels),
            interval: None,
        }
    }

    pub fn interval(interval: impl Into<String>) -> Self {
        Self {
            levels: None,
            interval: Some(interval.into()),
        }
    }
}

pub fn feed_descriptor(kind: FeedKind) -> &'static FeedDescriptor {
    &SUPPORTED_FEEDS[kind as usize]
}

/// Map a framework time frame (`1h`) to the WEEX token (`HOUR_1`)
pub fn map_interval(time_frame: &str) -> Option<&'static str> {
    INTERVAL_MAPPING
        .iter()
        .find(|(frame, _)| *frame == time_frame)
        .map(|(_, token)| *token)
}

/// Append the spot suffix unless the symbol already carries it.
pub fn normalize_symbol(symbol: &str) -> String {
    normalize_symbol_with_suffix(symbol, SPOT_SYMBOL_SUFFIX)
}

/// [`normalize_symbol`] with a configured suffix
pub fn normalize_symbol_with_suffix(symbol: &str, suffix: &str) -> String {
    if symbol.ends_with(suffix) {
        symbol.to_string()
    } else {
        format!("{symbol}{suffix}")
    }
}

/// Build the WEEX channel for a feed given by name.
///
/// Unknown feed names fail with [`WeexError::UnsupportedFeed`].
pub fn format_channel(feed: &str, symbol: Option<&str>, params: &ChannelParams) -> Result<String> {
    format_channel_with_suffix(feed, symbol, params, SPOT_SYMBOL_SUFFIX)
}

/// [`format_channel`] with a configured symbol suffix
pub fn format_channel_with_suffix(
    feed: &str,
    symbol: Option<&str>,
    params: &ChannelParams,
    suffix: &str,
) -> Result<String> {
    let kind: FeedKind = feed.parse()?;
    format_feed_channel_with_suffix(kind, symbol, params, suffix)
}

/// Build the WEEX channel for a typed feed kind.
///
/// Private feeds ignore `symbol`; public feeds require one.
pub fn format_feed_channel(
    kind: FeedKind,
    symbol: Option<&str>,
    params: &ChannelParams,
) -> Result<String> {
    format_feed_channel_with_suffix(kind, symbol, params, SPOT_SYMBOL_SUFFIX)
}

pub fn format_feed_channel_with_suffix(
    kind: FeedKind,
    symbol: Option<&str>,
    params: &ChannelParams,
    suffix: &str,
) -> Result<String> {
    let descriptor = feed_descriptor(kind);
    if descriptor.is_private {
        return Ok(descriptor.channel_pattern.to_string());
    }

    let symbol = symbol.ok_or_else(|| WeexError::MissingSymbol {
        feed: kind.to_string(),
    })?;
    let symbol = normalize_symbol_with_suffix(symbol, suffix);

    let channel = match kind {
        FeedKind::Depth => {
            let levels = params.levels.unwrap_or(DEFAULT_DEPTH_LEVELS).to_string();
            render(
                descriptor.channel_pattern,
                &[("symbol", symbol.as_str()), ("levels", levels.as_str())],
            )
        }
        FeedKind::Kline => {
            let requested = params.interval.as_deref().unwrap_or(DEFAULT_KLINE_INTERVAL);
            let interval = map_interval(requested).unwrap_or(requested);
            render(
                descriptor.channel_pattern,
                &[("symbol", symbol.as_str()), ("interval", interval)],
            )
        }
        _ => render(descriptor.channel_pattern, &[("symbol", symbol.as_str())]),
    };

    debug!(feed = %kind, channel = %channel, "formatted channel");
    Ok(channel)
}

/// Whether a channel needs the authenticated connection.
///
/// This is a substring test: any channel containing `account`, `orders`
/// or `fill` counts as private, including public channels whose symbol
/// happens to contain one of those tokens.
pub fn is_authenticated_channel(channel: &str) -> bool {
    PRIVATE_CHANNEL_TOKENS
        .iter()
        .any(|token| channel.contains(token))
}

fn render(pattern: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(pattern.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{key}}}"), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("BTCUSDT")]
    #[case("BTCUSDT_SPBL")]
    #[case("")]
    fn normalize_is_idempotent(#[case] symbol: &str) {
        let once = normalize_symbol(symbol);
        assert_eq!(normalize_symbol(&once), once);
        assert!(once.ends_with("_SPBL"));
    }

    #[test]
    fn every_feed_resolves_all_placeholders() {
        for kind in FeedKind::ALL {
            let channel = format_channel(kind.as_str(), Some("BTCUSDT"), &ChannelParams::default())
                .expect("known feed should format");
            assert!(!channel.is_empty());
            assert!(!channel.contains('{') && !channel.contains('}'), "{channel}");
        }
    }

    #[rstest]
    #[case("ticker", ChannelParams::default(), "ticker.BTCUSDT_SPBL")]
    #[case("trades", ChannelParams::default(), "trades.BTCUSDT_SPBL")]
    #[case("depth", ChannelParams::default(), "depth.BTCUSDT_SPBL.15")]
    #[case("depth", ChannelParams::levels(200), "depth.BTCUSDT_SPBL.200")]
    #[case("kline", ChannelParams::default(), "kline.LAST_PRICE.BTCUSDT_SPBL.MINUTE_1")]
    #[case("kline", ChannelParams::interval("4h"), "kline.LAST_PRICE.BTCUSDT_SPBL.HOUR_4")]
    #[case("kline", ChannelParams::interval("1M"), "kline.LAST_PRICE.BTCUSDT_SPBL.MONTH_1")]
    #[case("kline", ChannelParams::interval("WEEK_1"), "kline.LAST_PRICE.BTCUSDT_SPBL.WEEK_1")]
    fn formats_public_channels(
        #[case] feed: &str,
        #[case] params: ChannelParams,
        #[case] expected: &str,
    ) {
        assert_eq!(format_channel(feed, Some("BTCUSDT"), &params).unwrap(), expected);
    }

    #[rstest]
    #[case("account")]
    #[case("orders")]
    #[case("fill")]
    fn private_channels_ignore_symbol(#[case] feed: &str) {
        assert_eq!(
            format_channel(feed, Some("BTCUSDT"), &ChannelParams::default()).unwrap(),
            feed
        );
        assert_eq!(format_channel(feed, None, &ChannelParams::default()).unwrap(), feed);
    }

    #[test]
    fn unknown_feed_is_rejected() {
        let err = format_channel("bogus_feed", Some("BTCUSDT"), &ChannelParams::default())
            .unwrap_err();
        assert!(matches!(err, WeexError::UnsupportedFeed { ref feed } if feed == "bogus_feed"));
    }

    #[test]
    fn public_feed_without_symbol_is_rejected() {
        let err = format_channel("ticker", None, &ChannelParams::default()).unwrap_err();
        assert!(matches!(err, WeexError::MissingSymbol { .. }));
    }

    #[test]
    fn authenticated_channel_uses_substring_match() {
        assert!(is_authenticated_channel("orders"));
        assert!(is_authenticated_channel("my_orders_feed"));
        assert!(is_authenticated_channel("ticker.fillUSDT_SPBL"));
        assert!(!is_authenticated_channel("ticker.BTCUSDT_SPBL"));
    }

    #[test]
    fn descriptors_line_up_with_feed_kinds() {
        for kind in FeedKind::ALL {
            assert_eq!(feed_descriptor(kind).kind, kind);
            assert_eq!(feed_descriptor(kind).is_private, kind.is_private());
        }
    }

    #[test]
    fn configured_suffix_replaces_spot_suffix() {
        assert_eq!(normalize_symbol_with_suffix("BTCUSDT", "_XYZ"), "BTCUSDT_XYZ");
        assert_eq!(normalize_symbol_with_suffix("BTCUSDT_XYZ", "_XYZ"), "BTCUSDT_XYZ");
        assert_eq!(
            format_channel_with_suffix("depth", Some("BTCUSDT"), &ChannelParams::default(), "_XYZ")
                .unwrap(),
            "depth.BTCUSDT_XYZ.15"
        );
    }

    #[test]
    fn interval_mapping_passes_unknown_frames_through() {
        assert_eq!(map_interval("12h"), Some("HOUR_12"));
        assert_eq!(map_interval("3m"), None);
    }
}
