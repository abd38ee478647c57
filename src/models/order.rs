use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::Trade;

/// A ledger entry of any status together with its notional value.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Order {
    trade: Trade,
    total_value: Decimal,
}
