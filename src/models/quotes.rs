use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::token::TokenSymbol;
use crate::config::oracle::REFERENCE_CURRENCY;

/// Price of one token unit in the reference currency. Always positive.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Quote(Decimal);

impl Quote {
    pub fn new(price: Decimal) -> Option<Self> {
        if price > Decimal::ZERO {
            Some(Quote(price))
        } else {
            None
        }
    }

    pub fn price(&self) -> Decimal {
        self.0
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Unchanged,
}

/// The two most recent observed prices of a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct PriceHistory {
    pub last_price: Decimal,
    pub current_price: Decimal,
}

impl PriceHistory {
    pub fn new(quote: Quote) -> Self {
        PriceHistory {
            last_price: quote.price(),
            current_price: quote.price(),
        }
    }

    pub fn observe(&mut self, quote: Quote) {
        self.last_price = self.current_price;
        self.current_price = quote.price();
    }

    pub fn direction(&self) -> Direction {
        match self.current_price.cmp(&self.last_price) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::Unchanged,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct QuoteLeg {
    pub symbol: TokenSymbol,
    pub price: Quote,
}

/// Two quotes fetched back to back for side-by-side display.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct QuotePair {
    pub base: QuoteLeg,
    pub quote: QuoteLeg,
    pub currency: String,
}

impl QuotePair {
    pub fn new(base: (TokenSymbol, Quote), quote: (TokenSymbol, Quote)) -> Self {
        QuotePair {
            base: QuoteLeg {
                symbol: base.0,
                price: base.1,
            },
            quote: QuoteLeg {
                symbol: quote.0,
                price: quote.1,
            },
            currency: REFERENCE_CURRENCY.to_string(),
        }
    }

    /// Units of the quote token one base token buys.
    pub fn rate(&self) -> Option<Decimal> {
        self.base.price.price().checked_div(self.quote.price.price())
    }
}
