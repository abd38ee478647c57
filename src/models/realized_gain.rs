use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::Trade;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct RealizedGain {
    symbol: String,
    buy_trade: Trade,
    sell_trade: Trade,
    quantity: u32,
    buy_price: Decimal,
    sell_price: Decimal,
    gain_loss: Decimal,
    gain_loss_percent: Decimal,
}

#[derive(Clone, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct RealizedGainsReport {
    records: Vec<RealizedGain>,
    total_gains: Decimal,
    total_losses: Decimal,
    net_gain_loss: Decimal,
}

impl RealizedGainsReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
