pub mod quotes;
pub mod token;
pub mod valuation;
pub mod wallet;
