use crate::models::token::TokenSymbol;

pub const APP_NAME: &str = "WALLET";
pub const TX_ID_PREFIX: &str = "sim-trade-";
pub const TX_ID_RANGE: std::ops::RangeInclusive<u16> = 1000..=9999;
pub const RECEIVED_SCALE: u32 = 6;

/// Whole-unit starting balance of every tracked token.
pub const DEFAULT_SEED_BALANCE: i64 = 5;
pub const SEED_OVERRIDES: [(TokenSymbol, i64); 1] = [(TokenSymbol::Sol, 5000)];
