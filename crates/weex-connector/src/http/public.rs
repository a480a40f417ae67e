/*
[INPUT]:  Symbol identifiers
[OUTPUT]: Server time and market metadata with precision fix-ups applied
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{Result, WeexClient};
use crate::precision::apply_market_status_fixes;
use crate::types::{MarketStatus, ProductInfo};
use crate::ws::normalize_symbol_with_suffix;
use reqwest::Method;

impl WeexClient {
    /// Exchange server time in milliseconds
    ///
    /// GET /api/spot/v1/public/time
    pub async fn fetch_server_time(&self) -> Result<i64> {
        let builder = self.spot_request(Method::GET, "/api/spot/v1/public/time")?;
        self.send_json(builder).await
    }

    /// All spot products as framework market statuses
    ///
    /// GET /api/spot/v1/public/products
    pub async fn fetch_markets(&self) -> Result<Vec<MarketStatus>> {
        let builder = self.spot_request(Method::GET, "/api/spot/v1/public/products")?;
        let products: Vec<ProductInfo> = self.send_json(builder).await?;
        Ok(products.into_iter().map(into_fixed_status).collect())
    }

    /// One spot product; the symbol is normalized with the client's suffix
    ///
    /// GET /api/spot/v1/public/product?symbol={symbol}
    pub async fn fetch_market(&self, symbol: &str) -> Result<MarketStatus> {
        let builder = self
            .spot_request(Method::GET, "/api/spot/v1/public/product")?
            .query(&[(
                "symbol",
                normalize_symbol_with_suffix(symbol, self.symbol_suffix()),
            )]);
        let product: ProductInfo = self.send_json(builder).await?;
        Ok(into_fixed_status(product))
    }
}

fn into_fixed_status(product: ProductInfo) -> MarketStatus {
    let mut status = MarketStatus::from(product);
    apply_market_status_fixes(&mut status);
    status
}
