use log::{info, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use super::{
    quotes::{Direction, PriceHistory, Quote, QuotePair},
    token::{TokenError, TokenSymbol},
    valuation::{RevaluationReport, ValuationSnapshot},
};
use crate::{
    components::oracle::{OracleError, PriceOracle},
    config::wallet::{APP_NAME, DEFAULT_SEED_BALANCE, RECEIVED_SCALE, SEED_OVERRIDES},
    utils::tx::generate_transaction_id,
};

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Could not fetch quotes right now. Please try again later.")]
    QuoteUnavailable(#[source] OracleError),
    #[error("Not enough {token}: you hold {available}, tried to convert {requested}.")]
    InsufficientBalance {
        token: TokenSymbol,
        available: Decimal,
        requested: Decimal,
    },
    #[error("Token {0} is not supported.")]
    InvalidToken(String),
    #[error("Amount must be a positive number.")]
    InvalidAmount,
}

impl From<TokenError> for ConversionError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Unknown(symbol) => ConversionError::InvalidToken(symbol),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReceipt {
    pub status: &'static str,
    pub from: TokenSymbol,
    pub to: TokenSymbol,
    pub amount: Decimal,
    pub received: Decimal,
    pub converted: String,
    pub transaction_id: String,
    pub revaluation: RevaluationReport,
}

/// Balances, price history and valuation of one simulated user.
#[derive(Debug)]
pub struct WalletSession {
    balances: BTreeMap<TokenSymbol, Decimal>,
    prices: HashMap<TokenSymbol, PriceHistory>,
    snapshot: ValuationSnapshot,
    app_name: &'static str,
}

impl WalletSession {
    pub fn new() -> Self {
        let balances = TokenSymbol::ALL
            .into_iter()
            .map(|token| {
                let units = SEED_OVERRIDES
                    .iter()
                    .find(|(t, _)| *t == token)
                    .map(|&(_, units)| units)
                    .unwrap_or(DEFAULT_SEED_BALANCE);

                (token, Decimal::from(units))
            })
            .collect();

        Self::with_balances(balances)
    }

    pub fn with_balances(balances: BTreeMap<TokenSymbol, Decimal>) -> Self {
        WalletSession {
            balances,
            prices: HashMap::new(),
            snapshot: ValuationSnapshot::default(),
            app_name: APP_NAME,
        }
    }

    pub fn balances(&self) -> &BTreeMap<TokenSymbol, Decimal> {
        &self.balances
    }

    pub fn balance(&self, token: TokenSymbol) -> Decimal {
        self.balances.get(&token).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn snapshot(&self) -> &ValuationSnapshot {
        &self.snapshot
    }

    /// `None` until the token has been priced at least once.
    pub fn price_history(&self, token: TokenSymbol) -> Option<&PriceHistory> {
        self.prices.get(&token)
    }

    pub fn direction(&self, token: TokenSymbol) -> Option<Direction> {
        self.prices.get(&token).map(PriceHistory::direction)
    }

    /// Reprices every tracked token and rebuilds the snapshot from the tokens
    /// that could be priced. Failed tokens keep their price history and drop
    /// out of the snapshot until the next successful pass.
    pub async fn revalue(&mut self, oracle: &dyn PriceOracle) -> RevaluationReport {
        let mut report = RevaluationReport::default();
        let mut values = BTreeMap::new();

        for token in TokenSymbol::ALL {
            let quote = match oracle.fetch(token).await {
                Ok(quote) => quote,
                Err(e) => {
                    warn!("{}: skip {} on revaluation: {}", self.app_name, token, e);
                    report.failed.insert(token);

                    continue;
                }
            };

            let Some(value) = self.balance(token).checked_mul(quote.price()) else {
                warn!("{}: {} value overflows, skipped", self.app_name, token);
                report.failed.insert(token);

                continue;
            };

            self.record_quote(token, quote);
            values.insert(token, value);
            report.updated.insert(token);
        }

        self.snapshot = ValuationSnapshot::from_values(values);

        info!(
            "{}: revalued {} tokens, {} failed, total {} USD",
            self.app_name,
            report.updated.len(),
            report.failed.len(),
            self.snapshot.total
        );

        report
    }

    pub async fn quote_pair(
        &self,
        oracle: &dyn PriceOracle,
        base: TokenSymbol,
        quote: TokenSymbol,
    ) -> Result<QuotePair, OracleError> {
        oracle.quote_pair(base, quote).await
    }

    /// Converts `amount` of `from` into `to` at the current quotes, then
    /// revalues the wallet. Nothing is mutated if any check or quote fails.
    pub async fn convert(
        &mut self,
        oracle: &dyn PriceOracle,
        from: TokenSymbol,
        to: TokenSymbol,
        amount: Decimal,
    ) -> Result<ConversionReceipt, ConversionError> {
        if amount <= Decimal::ZERO {
            return Err(ConversionError::InvalidAmount);
        }

        let available = self.balance(from);

        if available < amount {
            return Err(ConversionError::InsufficientBalance {
                token: from,
                available,
                requested: amount,
            });
        }

        let from_quote = oracle
            .fetch(from)
            .await
            .map_err(ConversionError::QuoteUnavailable)?;
        let to_quote = oracle
            .fetch(to)
            .await
            .map_err(ConversionError::QuoteUnavailable)?;
        let mut received = converted_amount(amount, from_quote, to_quote)?;

        *self.balances.entry(from).or_insert(Decimal::ZERO) -= amount;
        *self.balances.entry(to).or_insert(Decimal::ZERO) += received;

        received.rescale(RECEIVED_SCALE);

        let converted = format!("{} {} → {} {}", amount.normalize(), from, received, to);
        let transaction_id = generate_transaction_id();

        info!("{}: {} ({})", self.app_name, converted, transaction_id);

        let revaluation = self.revalue(oracle).await;

        Ok(ConversionReceipt {
            status: "success",
            from,
            to,
            amount,
            received,
            converted,
            transaction_id,
            revaluation,
        })
    }

    fn record_quote(&mut self, token: TokenSymbol, quote: Quote) {
        self.prices
            .entry(token)
            .and_modify(|history| history.observe(quote))
            .or_insert_with(|| PriceHistory::new(quote));
    }
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new()
    }
}

fn converted_amount(amount: Decimal, from: Quote, to: Quote) -> Result<Decimal, ConversionError> {
    amount
        .checked_mul(from.price())
        .and_then(|value| value.checked_div(to.price()))
        .map(|received| {
            received.round_dp_with_strategy(RECEIVED_SCALE, RoundingStrategy::MidpointNearestEven)
        })
        .ok_or(ConversionError::InvalidAmount)
}
