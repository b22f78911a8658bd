use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

use crate::config::oracle::{BINANCE_API_URL, TICKER_PRICE_PATH};
use crate::models::{
    quotes::{Quote, QuotePair},
    token::TokenSymbol,
};

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("HTTP request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("quote service returned {0}: {1}")]
    Status(StatusCode, String),
    #[error("malformed quote response: {0}")]
    Parse(String),
    #[error("quote service returned a non-positive price: {0}")]
    NonPositive(Decimal),
}

/// Source of spot prices for the tracked tokens.
#[async_trait]
pub trait PriceOracle: Send + Sync {
    async fn fetch(&self, symbol: TokenSymbol) -> Result<Quote, OracleError>;

    /// Fetches both legs; fails if either one does.
    async fn quote_pair(
        &self,
        base: TokenSymbol,
        quote: TokenSymbol,
    ) -> Result<QuotePair, OracleError> {
        let base_price = self.fetch(base).await?;
        let quote_price = self.fetch(quote).await?;

        Ok(QuotePair::new((base, base_price), (quote, quote_price)))
    }
}

/// Binance public ticker endpoint.
pub struct BinanceOracle {
    client: Client,
    base_url: String,
}

impl BinanceOracle {
    pub fn new() -> Self {
        Self::with_base_url(BINANCE_API_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        BinanceOracle {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for BinanceOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceOracle for BinanceOracle {
    async fn fetch(&self, symbol: TokenSymbol) -> Result<Quote, OracleError> {
        let url = format!("{}{}", self.base_url, TICKER_PRICE_PATH);
        let response = self
            .client
            .get(&url)
            .query(&[("symbol", symbol.ticker())])
            .send()
            .await?;
        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(OracleError::Parse(e.to_string())),
            Err(_) => Value::Null,
        };

        if !status.is_success() {
            let message = body["msg"]
                .as_str()
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error"))
                .to_string();

            return Err(OracleError::Status(status, message));
        }

        let quote = parse_ticker_response(&body)?;

        debug!("{}: {} USD", symbol, quote.price());

        Ok(quote)
    }
}

fn parse_ticker_response(body: &Value) -> Result<Quote, OracleError> {
    if let Some(message) = body["msg"].as_str() {
        return Err(OracleError::Parse(message.to_string()));
    }

    let raw = match &body["price"] {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => return Err(OracleError::Parse("missing price field".to_string())),
        other => {
            return Err(OracleError::Parse(format!(
                "unexpected price field: {}",
                other
            )))
        }
    };
    let price = Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|e| OracleError::Parse(format!("{}: {}", raw, e)))?;

    Quote::new(price).ok_or(OracleError::NonPositive(price))
}
