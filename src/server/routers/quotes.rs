use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use url::form_urlencoded;

use super::{conversion_error_response, json_response};
use crate::{
    components::oracle::PriceOracle,
    models::{
        quotes::QuotePair,
        token::TokenSymbol,
        wallet::{ConversionError, WalletSession},
    },
};

#[derive(Debug, Serialize)]
struct QuotesResponse {
    #[serde(flatten)]
    pair: QuotePair,
    rate: Option<Decimal>,
}

/// Reads `base` and `quote` from the query string, defaulting to SOL/USDC.
fn parse_pair_query(query: Option<&str>) -> Result<(TokenSymbol, TokenSymbol), ConversionError> {
    let mut base = TokenSymbol::Sol;
    let mut quote = TokenSymbol::Usdc;

    for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
        match key.as_ref() {
            "base" => base = value.parse()?,
            "quote" => quote = value.parse()?,
            _ => {}
        }
    }

    Ok((base, quote))
}

pub async fn handle_get_quotes(
    query: Option<&str>,
    session: Arc<RwLock<WalletSession>>,
    oracle: Arc<dyn PriceOracle>,
) -> Response<Full<Bytes>> {
    let (base, quote) = match parse_pair_query(query) {
        Ok(pair) => pair,
        Err(e) => return conversion_error_response(&e),
    };
    let session = session.read().await;

    match session.quote_pair(oracle.as_ref(), base, quote).await {
        Ok(pair) => {
            let rate = pair.rate();

            json_response(StatusCode::OK, &QuotesResponse { pair, rate })
        }
        Err(e) => conversion_error_response(&ConversionError::QuoteUnavailable(e)),
    }
}
