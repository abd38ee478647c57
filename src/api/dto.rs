use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Holding, OrderType, Trade, TradeSide, TradeStatus};

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct TradeDto {
    id: Option<i64>,
    client_id: i64,
    symbol: String,
    quantity: u32,
    price: Decimal,
    #[serde(rename = "type")]
    side: TradeSide,
    order_type: Option<OrderType>,
    status: Option<TradeStatus>,
    trade_time: Option<NaiveDateTime>,
}

impl TradeDto {
    pub fn to_trade(&self) -> Trade {
        Trade::new(
            self.id,
            self.client_id,
            self.symbol.clone(),
            self.quantity,
            self.price,
            self.side,
            self.order_type,
            self.status.unwrap_or(TradeStatus::Pending),
            self.trade_time,
        )
    }
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDto {
    id: Option<i64>,
    symbol: String,
    quantity: u32,
    average_price: Decimal,
    current_price: Decimal,
    total_value: Decimal,
}

impl PortfolioDto {
    pub fn to_holding(&self) -> Holding {
        Holding::new(
            self.symbol.clone(),
            self.quantity,
            self.average_price,
            self.current_price,
            self.total_value,
        )
    }
}
