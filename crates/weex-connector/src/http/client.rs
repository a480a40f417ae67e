/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client and envelope-unwrapping send helper
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::config::{ConnectorConfig, SPOT_SYMBOL_SUFFIX};
use crate::http::patterns::exchange_error;
use crate::http::{Result, WeexError};
use crate::types::ApiResponse;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Public REST client for the WEEX spot API
#[derive(Debug, Clone)]
pub struct WeexClient {
    http_client: Client,
    spot_base_url: Url,
    symbol_suffix: String,
}

impl WeexClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::from_connector_config(&ConnectorConfig::default(), config)
    }

    /// Create a client against an explicit spot base URL
    pub fn with_config_and_base_url(config: ClientConfig, spot_base_url: &str) -> Result<Self> {
        Self::build(config, spot_base_url, SPOT_SYMBOL_SUFFIX)
    }

    /// Create a client from loaded connector settings (spot URL, symbol suffix)
    pub fn from_connector_config(
        connector: &ConnectorConfig,
        config: ClientConfig,
    ) -> Result<Self> {
        Self::build(
            config,
            &connector.spot_api_url,
            &connector.supported_symbols_suffix,
        )
    }

    fn build(config: ClientConfig, spot_base_url: &str, symbol_suffix: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            spot_base_url: Url::parse(spot_base_url)?,
            symbol_suffix: symbol_suffix.to_string(),
        })
    }

    pub fn spot_base_url(&self) -> &Url {
        &self.spot_base_url
    }

    pub fn symbol_suffix(&self) -> &str {
        &self.symbol_suffix
    }

    /// Build request builder for spot endpoints
    pub(crate) fn spot_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.spot_base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and unwrap the `{code, msg, data}` envelope.
    ///
    /// Non-success codes become [`WeexError::Exchange`] when the message
    /// matches a known pattern, [`WeexError::Api`] otherwise.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope: ApiResponse<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(WeexError::api_error(status, body)),
            Err(err) => return Err(err.into()),
        };

        if !envelope.is_success() {
            debug!(code = %envelope.code, msg = %envelope.msg, "weex api error");
            return Err(exchange_error(envelope.code, envelope.msg));
        }

        envelope
            .data
            .ok_or_else(|| WeexError::InvalidResponse("response has no data".to_string()))
    }
}
