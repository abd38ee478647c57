use rust_decimal::Decimal;
use thiserror::Error;

/// Raised when a ledger snapshot cannot be turned into trustworthy figures.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GainsError {
    #[error("invalid symbol '{0}'")]
    InvalidSymbol(String),
    #[error("trade {id:?} for {symbol} has zero quantity")]
    ZeroQuantity { id: Option<i64>, symbol: String },
    #[error("negative {field} {value} for {symbol}")]
    NegativeAmount {
        symbol: String,
        field: &'static str,
        value: Decimal,
    },
    #[error("decimal overflow while computing {0}")]
    Overflow(&'static str),
}
