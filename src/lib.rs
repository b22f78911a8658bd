pub mod components;
pub mod config;
pub mod models;
pub mod server;
pub mod utils;

pub use components::oracle::{BinanceOracle, OracleError, PriceOracle};
pub use models::{
    quotes::{Direction, PriceHistory, Quote, QuotePair},
    token::TokenSymbol,
    valuation::{RevaluationReport, ValuationSnapshot},
    wallet::{ConversionError, ConversionReceipt, WalletSession},
};
