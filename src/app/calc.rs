use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    error::GainsError,
    models::{Holding, Trade},
};

const MAX_SYMBOL_LEN: usize = 10;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// `delta / basis * 100`, or zero when there is no positive basis to measure against.
pub fn percent_change(delta: Decimal, basis: Decimal) -> Result<Decimal, GainsError> {
    if basis <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    delta
        .checked_div(basis)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .ok_or(GainsError::Overflow("percentage"))
}

/// Unweighted arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[Decimal]) -> Result<Option<Decimal>, GainsError> {
    if values.is_empty() {
        return Ok(None);
    }

    let total = checked_sum(values.iter().copied(), "mean")?;
    total
        .checked_div(Decimal::from(values.len()))
        .map(Some)
        .ok_or(GainsError::Overflow("mean"))
}

pub fn checked_product(
    quantity: u32,
    price: Decimal,
    what: &'static str,
) -> Result<Decimal, GainsError> {
    price
        .checked_mul(Decimal::from(quantity))
        .ok_or(GainsError::Overflow(what))
}

pub fn checked_sum<I>(values: I, what: &'static str) -> Result<Decimal, GainsError>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |sum, value| sum.checked_add(value))
        .ok_or(GainsError::Overflow(what))
}

pub fn checked_sub(
    lhs: Decimal,
    rhs: Decimal,
    what: &'static str,
) -> Result<Decimal, GainsError> {
    lhs.checked_sub(rhs).ok_or(GainsError::Overflow(what))
}

/// Two decimal places, half away from zero. Display only; calculators keep full precision.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Any non-blank symbol of at most ten characters. Index and futures tickers like `^GSPC` or
/// `GC=F` are fine.
fn validate_symbol(symbol: &str) -> Result<(), GainsError> {
    if !symbol.trim().is_empty() && symbol.chars().count() <= MAX_SYMBOL_LEN {
        Ok(())
    } else {
        Err(GainsError::InvalidSymbol(symbol.to_string()))
    }
}

fn non_negative(symbol: &str, field: &'static str, value: Decimal) -> Result<(), GainsError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(GainsError::NegativeAmount {
            symbol: symbol.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

pub fn validate_trade(trade: &Trade) -> Result<(), GainsError> {
    validate_symbol(trade.symbol())?;

    if *trade.quantity() == 0 {
        return Err(GainsError::ZeroQuantity {
            id: *trade.id(),
            symbol: trade.symbol().clone(),
        });
    }

    non_negative(trade.symbol(), "price", *trade.price())
}

pub fn validate_holding(holding: &Holding) -> Result<(), GainsError> {
    validate_symbol(holding.symbol())?;
    non_negative(holding.symbol(), "average price", *holding.average_price())?;
    non_negative(holding.symbol(), "current price", *holding.current_price())?;
    non_negative(holding.symbol(), "total value", *holding.total_value())
}
