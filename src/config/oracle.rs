pub const BINANCE_API_URL: &str = "https://api.binance.com";
pub const TICKER_PRICE_PATH: &str = "/api/v3/ticker/price";
pub const REFERENCE_CURRENCY: &str = "USD";
