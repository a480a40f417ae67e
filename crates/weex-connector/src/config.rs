/*
[INPUT]:  Built-in WEEX constants or an optional YAML override file
[OUTPUT]: Connector configuration (endpoints, rate limits, symbol suffix)
[POS]:    Configuration layer - static exchange description
[UPDATE]: When WEEX changes endpoints or published limits
*/

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http::{Result, WeexError};

pub const SPOT_API_URL: &str = "https://api-spot.weex.com";
pub const CONTRACT_API_URL: &str = "https://api-contract.weex.com";
pub const WS_PUBLIC_URL: &str = "wss://ws-spot.weex.com/v2/ws/public";
pub const WS_PRIVATE_URL: &str = "wss://ws-spot.weex.com/v2/ws/private";

/// Suffix WEEX appends to spot pair names (`BTCUSDT_SPBL`)
pub const SPOT_SYMBOL_SUFFIX: &str = "_SPBL";

/// Bar intervals WEEX serves, in framework notation
pub const SUPPORTED_TIME_FRAMES: [&str; 13] = [
    "1m", "5m", "15m", "30m", "1h", "2h", "4h", "6h", "8h", "12h", "1d", "1w", "1M",
];

/// Orders accepted per batch request
pub const MAX_BATCH_ORDERS: usize = 50;

/// WebSocket connection and subscription limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionLimits {
    pub max_connections_per_ip: u32,
    pub max_subscriptions_per_connection: u32,
    pub operations_per_hour: u32,
    pub connection_requests_per_5min: u32,
}

impl Default for ConnectionLimits {
    fn default() -> Self {
        Self {
            max_connections_per_ip: 100,
            max_subscriptions_per_connection: 100,
            operations_per_hour: 240,
            connection_requests_per_5min: 300,
        }
    }
}

/// Connector configuration handed to the framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    pub spot_api_url: String,
    pub contract_api_url: String,
    pub websocket_public_url: String,
    pub websocket_private_url: String,
    /// Requests per second on public endpoints
    pub rate_limit: u32,
    /// Requests per second on private endpoints
    pub private_rate_limit: u32,
    pub supported_symbols_suffix: String,
    pub connection_limits: ConnectionLimits,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            spot_api_url: SPOT_API_URL.to_string(),
            contract_api_url: CONTRACT_API_URL.to_string(),
            websocket_public_url: WS_PUBLIC_URL.to_string(),
            websocket_private_url: WS_PRIVATE_URL.to_string(),
            rate_limit: 20,
            private_rate_limit: 10,
            supported_symbols_suffix: SPOT_SYMBOL_SUFFIX.to_string(),
            connection_limits: ConnectionLimits::default(),
        }
    }
}

impl ConnectorConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML; absent keys keep their defaults
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the connector cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.rate_limit == 0 || self.private_rate_limit == 0 {
            return Err(WeexError::Config("rate limits must be positive".to_string()));
        }
        if self.supported_symbols_suffix.is_empty() {
            return Err(WeexError::Config("symbol suffix must not be empty".to_string()));
        }
        for url in [&self.websocket_public_url, &self.websocket_private_url] {
            if !url.starts_with("wss://") && !url.starts_with("ws://") {
                return Err(WeexError::Config(format!("not a websocket url: {url}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_limits() {
        let config = ConnectorConfig::default();
        assert_eq!(config.rate_limit, 20);
        assert_eq!(config.private_rate_limit, 10);
        assert_eq!(config.supported_symbols_suffix, "_SPBL");
        assert_eq!(config.connection_limits.operations_per_hour, 240);
        assert_eq!(config.connection_limits.connection_requests_per_5min, 300);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = r#"
rate_limit: 5
connection_limits:
  max_connections_per_ip: 10
"#;
        let config = ConnectorConfig::from_yaml_str(yaml).expect("yaml should parse");
        assert_eq!(config.rate_limit, 5);
        assert_eq!(config.private_rate_limit, 10);
        assert_eq!(config.spot_api_url, SPOT_API_URL);
        assert_eq!(config.connection_limits.max_connections_per_ip, 10);
        assert_eq!(config.connection_limits.max_subscriptions_per_connection, 100);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(ConnectorConfig::from_yaml_str("rate_limit: [not, a, number]").is_err());
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let err = ConnectorConfig::from_yaml_str("rate_limit: 0").unwrap_err();
        assert!(matches!(err, WeexError::Config(_)));

        let err = ConnectorConfig::from_yaml_str("websocket_public_url: https://ws-spot.weex.com")
            .unwrap_err();
        assert!(matches!(err, WeexError::Config(ref msg) if msg.contains("https://")));
    }

    #[test]
    fn time_frames_cover_minute_to_month() {
        assert_eq!(SUPPORTED_TIME_FRAMES.first(), Some(&"1m"));
        assert_eq!(SUPPORTED_TIME_FRAMES.last(), Some(&"1M"));
    }
}
