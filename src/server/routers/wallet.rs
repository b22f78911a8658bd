use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::json_response;
use crate::{
    components::oracle::PriceOracle,
    models::{
        quotes::Direction, token::TokenSymbol, valuation::RevaluationReport,
        wallet::WalletSession,
    },
};

#[derive(Debug, Serialize)]
struct TokenView {
    symbol: TokenSymbol,
    balance: Decimal,
    value_usd: Option<Decimal>,
    price: Option<Decimal>,
    direction: Option<Direction>,
}

#[derive(Debug, Serialize)]
struct WalletView {
    tokens: Vec<TokenView>,
    total_usd: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    revaluation: Option<RevaluationReport>,
}

fn wallet_view(session: &WalletSession, revaluation: Option<RevaluationReport>) -> WalletView {
    let snapshot = session.snapshot();
    let tokens = session
        .balances()
        .iter()
        .map(|(&symbol, &balance)| TokenView {
            symbol,
            balance,
            value_usd: snapshot.get(&symbol).copied(),
            price: session.price_history(symbol).map(|h| h.current_price),
            direction: session.direction(symbol),
        })
        .collect();

    WalletView {
        tokens,
        total_usd: snapshot.total,
        revaluation,
    }
}

pub async fn handle_get_wallet(session: Arc<RwLock<WalletSession>>) -> Response<Full<Bytes>> {
    let session = session.read().await;

    json_response(StatusCode::OK, &wallet_view(&session, None))
}

pub async fn handle_refresh_wallet(
    session: Arc<RwLock<WalletSession>>,
    oracle: Arc<dyn PriceOracle>,
) -> Response<Full<Bytes>> {
    let mut session = session.write().await;
    let report = session.revalue(oracle.as_ref()).await;

    json_response(StatusCode::OK, &wallet_view(&session, Some(report)))
}
