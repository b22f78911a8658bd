use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;

use super::oracle::{OracleError, PriceOracle};
use crate::models::{quotes::Quote, token::TokenSymbol};

/// Serves fixed prices; tokens without a price fail.
pub struct StubOracle {
    prices: Mutex<HashMap<TokenSymbol, Decimal>>,
    calls: Mutex<Vec<TokenSymbol>>,
}

impl StubOracle {
    pub fn new(prices: &[(TokenSymbol, &str)]) -> Self {
        StubOracle {
            prices: Mutex::new(
                prices
                    .iter()
                    .map(|(t, p)| (*t, Decimal::from_str(p).unwrap()))
                    .collect(),
            ),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn all(price: &str) -> Self {
        let prices: Vec<(TokenSymbol, &str)> =
            TokenSymbol::ALL.iter().map(|t| (*t, price)).collect();

        Self::new(&prices)
    }

    pub fn set(&self, token: TokenSymbol, price: &str) {
        self.prices
            .lock()
            .unwrap()
            .insert(token, Decimal::from_str(price).unwrap());
    }

    pub fn remove(&self, token: TokenSymbol) {
        self.prices.lock().unwrap().remove(&token);
    }

    pub fn calls(&self) -> Vec<TokenSymbol> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceOracle for StubOracle {
    async fn fetch(&self, symbol: TokenSymbol) -> Result<Quote, OracleError> {
        self.calls.lock().unwrap().push(symbol);

        let price = self.prices.lock().unwrap().get(&symbol).copied();

        match price {
            Some(price) => Quote::new(price).ok_or(OracleError::NonPositive(price)),
            None => Err(OracleError::Parse(format!("no price for {}", symbol))),
        }
    }
}
