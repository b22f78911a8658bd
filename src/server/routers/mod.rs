use bytes::Bytes;
use http_body_util::Full;
use hyper::{
    header::{self, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN},
    http::HeaderValue,
    Method, Request, Response, StatusCode,
};
use log::error;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    components::oracle::PriceOracle, config::server::API_PREFIX,
    models::wallet::{ConversionError, WalletSession},
};

mod convert;
mod quotes;
mod wallet;

pub async fn route(
    req: Request<hyper::body::Incoming>,
    session: Arc<RwLock<WalletSession>>,
    oracle: Arc<dyn PriceOracle>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let path = req
        .uri()
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or_default()
        .to_string();

    match (&method, path.as_str()) {
        (&Method::GET, "/wallet") => Ok(wallet::handle_get_wallet(session).await),
        (&Method::POST, "/wallet/refresh") => {
            Ok(wallet::handle_refresh_wallet(session, oracle).await)
        }
        (&Method::GET, "/quotes") => {
            let query = req.uri().query().map(str::to_string);

            Ok(quotes::handle_get_quotes(query.as_deref(), session, oracle).await)
        }
        (&Method::POST, "/convert") => convert::handle_convert(req, session, oracle).await,
        _ => Ok(error_response(StatusCode::NOT_FOUND, "Not Found")),
    }
}

pub(crate) fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response<Full<Bytes>> {
    match serde_json::to_vec(value) {
        Ok(body) => build_response(status, body),
        Err(e) => {
            error!("serialize response: {:?}", e);

            build_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                br#"{"code":-1,"message":"internal error"}"#.to_vec(),
            )
        }
    }
}

pub(crate) fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let res = json!({
        "code": -1,
        "message": message,
    });

    json_response(status, &res)
}

pub(crate) fn conversion_error_response(err: &ConversionError) -> Response<Full<Bytes>> {
    let status = match err {
        ConversionError::QuoteUnavailable(_) => StatusCode::BAD_GATEWAY,
        ConversionError::InsufficientBalance { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ConversionError::InvalidToken(_) | ConversionError::InvalidAmount => {
            StatusCode::BAD_REQUEST
        }
    };

    error_response(status, &err.to_string())
}

fn build_response(status: StatusCode, body: Vec<u8>) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));

    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response.headers_mut().insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST"),
    );

    response
}
