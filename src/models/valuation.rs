use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::token::TokenSymbol;

/// USD value of each balance as of the last revaluation pass.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ValuationSnapshot {
    pub values: BTreeMap<TokenSymbol, Decimal>,
    #[serde(rename = "TOTAL")]
    pub total: Decimal,
}

impl ValuationSnapshot {
    pub fn from_values(values: BTreeMap<TokenSymbol, Decimal>) -> Self {
        let total = values.values().copied().sum();

        ValuationSnapshot { values, total }
    }

    pub fn get(&self, token: &TokenSymbol) -> Option<&Decimal> {
        self.values.get(token)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Outcome of one revaluation pass. Tokens in `failed` could not be priced
/// this time and are missing from the new snapshot.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RevaluationReport {
    pub updated: BTreeSet<TokenSymbol>,
    pub failed: BTreeSet<TokenSymbol>,
}

impl RevaluationReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_entries() {
        let mut values = BTreeMap::new();
        values.insert(TokenSymbol::Sol, Decimal::new(75000000, 2));
        values.insert(TokenSymbol::Usdc, Decimal::new(5, 0));

        let snapshot = ValuationSnapshot::from_values(values);

        assert_eq!(snapshot.total, Decimal::new(750005, 0));
        assert_eq!(snapshot.get(&TokenSymbol::Usdc), Some(&Decimal::from(5)));
        assert!(snapshot.get(&TokenSymbol::Btc).is_none());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = ValuationSnapshot::from_values(BTreeMap::new());

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total, Decimal::ZERO);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut values = BTreeMap::new();
        values.insert(TokenSymbol::Eth, Decimal::new(100, 0));

        let json = serde_json::to_value(ValuationSnapshot::from_values(values)).unwrap();

        assert_eq!(json["values"]["ETH"], "100");
        assert_eq!(json["TOTAL"], "100");
    }
}
