use chrono::{DateTime, NaiveDateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Trade {
    id: Option<i64>,
    client_id: i64,
    symbol: String,
    quantity: u32,
    price: Decimal,
    side: TradeSide,
    order_type: Option<OrderType>,
    status: TradeStatus,
    trade_time: Option<NaiveDateTime>,
}

impl Trade {
    /// Ordering key for the ledger timeline. A missing timestamp sorts as the Unix epoch.
    pub fn timeline_key(&self) -> NaiveDateTime {
        self.trade_time
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH.naive_utc())
    }

    pub fn is_executed(&self) -> bool {
        self.status == TradeStatus::Executed
    }

    pub fn is_buy(&self) -> bool {
        self.side == TradeSide::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.side == TradeSide::Sell
    }
}

#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumIter, EnumString, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum TradeSide {
    Buy,
    Sell,
}

#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumIter, EnumString, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum OrderType {
    Market,
    Limit,
}

#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumIter, EnumString, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum TradeStatus {
    Pending,
    Validated,
    Executed,
    Rejected,
    Cancelled,
    Failed,
    Expired,
}
