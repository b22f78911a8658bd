use rand::Rng;

use crate::config::wallet::{TX_ID_PREFIX, TX_ID_RANGE};

/// Simulated transaction id. Not unique: two trades may share one.
pub fn generate_transaction_id() -> String {
    let suffix = rand::rng().random_range(TX_ID_RANGE);

    format!("{}{}", TX_ID_PREFIX, suffix)
}

#[test]
fn test_transaction_id_format() {
    for _ in 0..100 {
        let id = generate_transaction_id();
        let suffix = id
            .strip_prefix("sim-trade-")
            .expect("missing prefix")
            .parse::<u16>()
            .expect("suffix should be numeric");

        assert!((1000..=9999).contains(&suffix), "suffix out of range: {}", id);
    }
}
