use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct UnrealizedGain {
    symbol: String,
    quantity: u32,
    average_price: Decimal,
    current_price: Decimal,
    total_cost: Decimal,
    current_value: Decimal,
    unrealized_gain_loss: Decimal,
    unrealized_gain_loss_percent: Decimal,
}

#[derive(Clone, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct UnrealizedGainsReport {
    records: Vec<UnrealizedGain>,
    total_cost: Decimal,
    total_current_value: Decimal,
    total_unrealized_gain_loss: Decimal,
    total_unrealized_gain_loss_percent: Decimal,
}

impl UnrealizedGainsReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
