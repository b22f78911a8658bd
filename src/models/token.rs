use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("unsupported token: {0}")]
    Unknown(String),
}

/// Tokens tracked by the simulated wallet. Declaration order is the order
/// used when revaluing and when listing balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenSymbol {
    #[serde(rename = "SOL")]
    Sol,
    #[serde(rename = "USDC")]
    Usdc,
    #[serde(rename = "USDT")]
    Usdt,
    #[serde(rename = "mSOL")]
    MSol,
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "ETH")]
    Eth,
    #[serde(rename = "RAY")]
    Ray,
    #[serde(rename = "ORCA")]
    Orca,
    #[serde(rename = "SRM")]
    Srm,
    #[serde(rename = "FTT")]
    Ftt,
}

impl TokenSymbol {
    pub const ALL: [TokenSymbol; 10] = [
        TokenSymbol::Sol,
        TokenSymbol::Usdc,
        TokenSymbol::Usdt,
        TokenSymbol::MSol,
        TokenSymbol::Btc,
        TokenSymbol::Eth,
        TokenSymbol::Ray,
        TokenSymbol::Orca,
        TokenSymbol::Srm,
        TokenSymbol::Ftt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSymbol::Sol => "SOL",
            TokenSymbol::Usdc => "USDC",
            TokenSymbol::Usdt => "USDT",
            TokenSymbol::MSol => "mSOL",
            TokenSymbol::Btc => "BTC",
            TokenSymbol::Eth => "ETH",
            TokenSymbol::Ray => "RAY",
            TokenSymbol::Orca => "ORCA",
            TokenSymbol::Srm => "SRM",
            TokenSymbol::Ftt => "FTT",
        }
    }

    /// Ticker of the USDT market used to price this token.
    pub fn ticker(&self) -> &'static str {
        match self {
            TokenSymbol::Sol => "SOLUSDT",
            TokenSymbol::Usdc => "USDCUSDT",
            TokenSymbol::Usdt => "USDTUSDT",
            TokenSymbol::MSol => "MSOLUSDT",
            TokenSymbol::Btc => "BTCUSDT",
            TokenSymbol::Eth => "ETHUSDT",
            TokenSymbol::Ray => "RAYUSDT",
            TokenSymbol::Orca => "ORCAUSDT",
            TokenSymbol::Srm => "SRMUSDT",
            TokenSymbol::Ftt => "FTTUSDT",
        }
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenSymbol {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();

        TokenSymbol::ALL
            .into_iter()
            .find(|token| token.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| TokenError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        assert_eq!("SOL".parse::<TokenSymbol>(), Ok(TokenSymbol::Sol));
        assert_eq!("msol".parse::<TokenSymbol>(), Ok(TokenSymbol::MSol));
        assert_eq!(" btc ".parse::<TokenSymbol>(), Ok(TokenSymbol::Btc));
        assert_eq!(
            "DOGE".parse::<TokenSymbol>(),
            Err(TokenError::Unknown("DOGE".to_string()))
        );
    }

    #[test]
    fn test_every_token_has_usdt_ticker() {
        for token in TokenSymbol::ALL {
            assert!(
                token.ticker().ends_with("USDT"),
                "{} should be priced against USDT",
                token
            );
            assert_eq!(
                token.ticker().strip_suffix("USDT"),
                Some(token.as_str().to_uppercase().as_str())
            );
        }
    }

    #[test]
    fn test_serde_uses_display_symbol() {
        let json = serde_json::to_string(&TokenSymbol::MSol).unwrap();
        assert_eq!(json, "\"mSOL\"");

        let token: TokenSymbol = serde_json::from_str("\"ORCA\"").unwrap();
        assert_eq!(token, TokenSymbol::Orca);
    }
}
