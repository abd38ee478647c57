use crate::{
    app::calc::{checked_product, validate_trade},
    error::GainsError,
    models::{Order, Trade},
};

/// Every trade regardless of status, most recent first. Trades without a timestamp go last.
/// Only executed trades are validated; a garbled rejected or pending order is still listed.
pub fn order_history(trades: &[Trade]) -> Result<Vec<Order>, GainsError> {
    let mut orders = trades
        .iter()
        .map(|trade| {
            if trade.is_executed() {
                validate_trade(trade)?;
            }
            let total_value = checked_product(*trade.quantity(), *trade.price(), "order value")?;
            Ok(Order::new(trade.clone(), total_value))
        })
        .collect::<Result<Vec<_>, GainsError>>()?;

    orders.sort_by(|a, b| b.trade().timeline_key().cmp(&a.trade().timeline_key()));

    Ok(orders)
}
