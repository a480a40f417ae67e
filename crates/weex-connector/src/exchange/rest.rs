/*
[INPUT]:  Framework REST requests (account switch, market status, orders)
[OUTPUT]: WEEX-specific parameters, fixed market statuses, classified errors
[POS]:    Exchange layer - REST adapter for WEEX spot
[UPDATE]: When WEEX account model or order parameters change
*/

use async_trait::async_trait;
use tracing::debug;

use crate::config::{ConnectorConfig, MAX_BATCH_ORDERS, SUPPORTED_TIME_FRAMES};
use crate::exchange::traits::RestExchangeAdapter;
use crate::http::{ExchangeErrorKind, Result, WeexError, classify_exchange_error};
use crate::precision::apply_market_status_fixes;
use crate::types::{
    AccountKind, DefaultBalance, ExchangeType, ForceMode, MarketStatus, OrderDescriptor,
    OrderParams, TraderOrderType,
};

pub const EXCHANGE_NAME: &str = "weex";

/// WEEX spot REST connector
#[derive(Debug, Clone, Default)]
pub struct WeexExchange {
    config: ConnectorConfig,
}

impl WeexExchange {
    /// Market statuses need step/tick size fix-ups
    pub const FIX_MARKET_STATUS: bool = true;
    /// Spot only, no margin type to set
    pub const SUPPORTS_SET_MARGIN_TYPE: bool = false;
    /// Market buys may be sized by quote cost
    pub const ENABLE_SPOT_BUY_MARKET_WITH_COST: bool = true;

    pub fn new(config: ConnectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }
}

#[async_trait]
impl RestExchangeAdapter for WeexExchange {
    fn name(&self) -> &'static str {
        EXCHANGE_NAME
    }

    fn supported_exchange_types(&self) -> Vec<ExchangeType> {
        vec![ExchangeType::Spot]
    }

    async fn switch_to_account(&self, account: AccountKind) -> Result<()> {
        match account {
            AccountKind::Cash => Ok(()),
            AccountKind::Margin => Err(WeexError::UnsupportedOperation {
                operation: "margin trading is not supported on WEEX".to_string(),
            }),
            AccountKind::Future => Err(WeexError::UnsupportedOperation {
                operation: "futures trading requires the WEEX contract connector".to_string(),
            }),
        }
    }

    fn additional_connector_config(&self) -> ConnectorConfig {
        self.config.clone()
    }

    fn market_status_fixes(&self, mut status: MarketStatus) -> MarketStatus {
        apply_market_status_fixes(&mut status);
        status
    }

    fn order_additional_params(&self, order: &OrderDescriptor) -> OrderParams {
        let force = match order.order_type {
            Some(
                TraderOrderType::StopLoss
                | TraderOrderType::TakeProfit
                | TraderOrderType::BuyLimit
                | TraderOrderType::SellLimit,
            ) => Some(ForceMode::Normal),
            _ => None,
        };

        let params = OrderParams {
            client_order_id: order.order_id.clone().filter(|id| !id.is_empty()),
            force,
        };
        debug!(?params, "order additional params");
        params
    }

    fn supported_time_frames(&self) -> Vec<&'static str> {
        SUPPORTED_TIME_FRAMES.to_vec()
    }

    fn default_balance(&self) -> DefaultBalance {
        DefaultBalance::default()
    }

    fn parse_account_type(&self, raw: &str) -> AccountKind {
        AccountKind::from_exchange_token(raw)
    }

    fn max_orders_count(&self, _symbol: &str, _order_type: TraderOrderType) -> usize {
        MAX_BATCH_ORDERS
    }

    fn classify_error(&self, message: &str) -> Option<ExchangeErrorKind> {
        classify_exchange_error(message)
    }
}
