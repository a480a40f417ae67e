/*
[INPUT]:  WEEX market metadata and framework order descriptors
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - short-lived values built per translation call
[UPDATE]: When market metadata fields or order parameters change
*/

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::{ForceMode, TraderOrderType};

/// Raw exchange metadata attached to a market
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketInfo {
    /// Minimum amount increment as a decimal string
    #[serde(
        rename = "stepSize",
        default,
        deserialize_with = "serde_helpers::deserialize_opt_numeric_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub step_size: Option<String>,
    /// Minimum price increment as a decimal string
    #[serde(
        rename = "tickSize",
        default,
        deserialize_with = "serde_helpers::deserialize_opt_numeric_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_size: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Decimal places for order amount and price
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketPrecision {
    pub amount: Option<u32>,
    pub price: Option<u32>,
}

/// One tradable instrument as handed to the framework
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketStatus {
    pub symbol: String,
    #[serde(default)]
    pub info: MarketInfo,
    #[serde(default)]
    pub precision: MarketPrecision,
}

impl MarketStatus {
    pub fn new(symbol: impl Into<String>, info: MarketInfo) -> Self {
        Self {
            symbol: symbol.into(),
            info,
            precision: MarketPrecision::default(),
        }
    }
}

/// Spot product entry from the public products endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub symbol: String,
    #[serde(rename = "baseCoin", default)]
    pub base_coin: String,
    #[serde(rename = "quoteCoin", default)]
    pub quote_coin: String,
    #[serde(rename = "priceScale", default)]
    pub price_scale: Option<u32>,
    #[serde(rename = "quantityScale", default)]
    pub quantity_scale: Option<u32>,
    #[serde(flatten)]
    pub info: MarketInfo,
}

impl From<ProductInfo> for MarketStatus {
    fn from(product: ProductInfo) -> Self {
        let mut info = product.info;
        info.extra
            .insert("baseCoin".to_string(), Value::String(product.base_coin));
        info.extra
            .insert("quoteCoin".to_string(), Value::String(product.quote_coin));

        Self {
            symbol: product.symbol,
            info,
            precision: MarketPrecision {
                amount: product.quantity_scale,
                price: product.price_scale,
            },
        }
    }
}

/// The parts of a framework order the connector reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDescriptor {
    pub order_id: Option<String>,
    pub order_type: Option<TraderOrderType>,
}

/// Extra parameters sent alongside an order creation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<ForceMode>,
}

impl OrderParams {
    pub fn is_empty(&self) -> bool {
        self.client_order_id.is_none() && self.force.is_none()
    }
}

/// Empty balance structure returned before the first balance fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultBalance {
    pub info: Map<String, Value>,
    pub datetime: Option<DateTime<Utc>>,
    pub timestamp: Option<i64>,
    pub total: BTreeMap<String, Decimal>,
    pub free: BTreeMap<String, Decimal>,
    pub used: BTreeMap<String, Decimal>,
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// WEEX sends increments both as JSON strings and as bare numbers
    pub fn deserialize_opt_numeric_string<'de, D>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) => Ok(Some(raw)),
            Some(Value::Number(number)) => Ok(Some(number.to_string())),
            Some(other) => Err(serde::de::Error::custom(format!(
                "expected numeric string, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn market_info_accepts_numeric_increments() {
        let info: MarketInfo = serde_json::from_value(json!({
            "stepSize": 0.001,
            "tickSize": "0.01",
            "status": "online"
        }))
        .expect("market info should deserialize");

        assert_eq!(info.step_size.as_deref(), Some("0.001"));
        assert_eq!(info.tick_size.as_deref(), Some("0.01"));
        assert_eq!(info.extra.get("status"), Some(&json!("online")));
    }

    #[test]
    fn product_converts_to_market_status() {
        let product: ProductInfo = serde_json::from_value(json!({
            "symbol": "BTCUSDT_SPBL",
            "baseCoin": "BTC",
            "quoteCoin": "USDT",
            "priceScale": 2,
            "quantityScale": 6
        }))
        .expect("product should deserialize");

        let status = MarketStatus::from(product);
        assert_eq!(status.symbol, "BTCUSDT_SPBL");
        assert_eq!(status.precision.amount, Some(6));
        assert_eq!(status.precision.price, Some(2));
        assert!(status.info.step_size.is_none());
        assert_eq!(status.info.extra.get("baseCoin"), Some(&json!("BTC")));
    }

    #[test]
    fn order_params_skip_absent_fields() {
        let params = OrderParams {
            client_order_id: Some("42".to_string()),
            force: None,
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "clientOrderId": "42" })
        );
        assert!(OrderParams::default().is_empty());
    }

    #[test]
    fn default_balance_has_empty_shape() {
        let value = serde_json::to_value(DefaultBalance::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "info": {},
                "datetime": null,
                "timestamp": null,
                "total": {},
                "free": {},
                "used": {}
            })
        );
    }
}
