use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An open position as reported by the brokerage, valued at the latest price.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Holding {
    symbol: String,
    quantity: u32,
    average_price: Decimal,
    current_price: Decimal,
    total_value: Decimal,
}
