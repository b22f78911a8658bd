use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::{Request, Response, StatusCode};
use log::warn;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{conversion_error_response, error_response, json_response};
use crate::{
    components::oracle::PriceOracle,
    models::{
        token::TokenSymbol,
        wallet::{ConversionError, WalletSession},
    },
};

#[derive(Debug, Deserialize)]
struct ConvertRequest {
    from: String,
    to: String,
    amount: Decimal,
}

pub async fn handle_convert(
    req: Request<hyper::body::Incoming>,
    session: Arc<RwLock<WalletSession>>,
    oracle: Arc<dyn PriceOracle>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let body = req.into_body().collect().await?.to_bytes();

    Ok(convert_from_body(&body, session, oracle).await)
}

async fn convert_from_body(
    body: &[u8],
    session: Arc<RwLock<WalletSession>>,
    oracle: Arc<dyn PriceOracle>,
) -> Response<Full<Bytes>> {
    let request: ConvertRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => {
            warn!("convert: bad request body: {}", e);

            return error_response(
                StatusCode::BAD_REQUEST,
                "Please provide a source token, a target token and an amount.",
            );
        }
    };
    let (from, to) = match parse_tokens(&request) {
        Ok(tokens) => tokens,
        Err(e) => return conversion_error_response(&e),
    };
    let mut session = session.write().await;

    match session
        .convert(oracle.as_ref(), from, to, request.amount)
        .await
    {
        Ok(receipt) => json_response(StatusCode::OK, &receipt),
        Err(e) => {
            warn!("convert {} -> {} failed: {:?}", from, to, e);

            conversion_error_response(&e)
        }
    }
}

fn parse_tokens(request: &ConvertRequest) -> Result<(TokenSymbol, TokenSymbol), ConversionError> {
    Ok((request.from.parse()?, request.to.parse()?))
}
